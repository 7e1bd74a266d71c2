use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use svn_checker::cli::args::{Args, Command as SubCommand, LocklistArgs};
use svn_checker::commands::LocklistOptions;
use tempfile::TempDir;

#[test]
fn test_locklist_args() {
    let args = Args::parse_from([
        "svn-checker",
        "locklist",
        "-p",
        "H:\\work\\trunk",
        "-o",
        "locked.csv",
    ]);

    assert!(args.svn.is_none());
    assert!(args.encoding.is_none());
    assert_eq!(
        args.command,
        SubCommand::Locklist(LocklistArgs {
            path: PathBuf::from("H:\\work\\trunk"),
            output: PathBuf::from("locked.csv"),
            limit: 0,
        })
    );
}

#[test]
fn test_locklist_args_with_limit_and_globals() {
    let args = Args::parse_from([
        "svn-checker",
        "locklist",
        "--path",
        "wc",
        "--output",
        "out.csv",
        "-l",
        "10",
        "--encoding",
        "utf-8",
        "--log-level",
        "debug",
    ]);

    assert_eq!(args.encoding.as_deref(), Some("utf-8"));
    assert_eq!(args.log_level.as_deref(), Some("debug"));

    let SubCommand::Locklist(locklist) = &args.command;
    let options = LocklistOptions::from(locklist);
    assert_eq!(options.root, PathBuf::from("wc"));
    assert_eq!(options.output, PathBuf::from("out.csv"));
    assert_eq!(options.limit, 10);
}

#[test]
fn test_locklist_requires_path_and_output() {
    assert!(Args::try_parse_from(["svn-checker", "locklist", "-o", "out.csv"]).is_err());
    assert!(Args::try_parse_from(["svn-checker", "locklist", "-p", "wc"]).is_err());
    assert!(Args::try_parse_from(["svn-checker"]).is_err());
}

#[test]
fn test_limit_must_be_a_number() {
    let result = Args::try_parse_from([
        "svn-checker",
        "locklist",
        "-p",
        "wc",
        "-o",
        "out.csv",
        "-l",
        "many",
    ]);
    assert!(result.is_err());
}

fn checker() -> Command {
    Command::new(env!("CARGO_BIN_EXE_svn-checker"))
}

#[test]
fn test_binary_empty_working_copy_succeeds() {
    let wc = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("report.csv");

    let status = checker()
        .args(["--svn", "/nonexistent/svn", "locklist", "-p"])
        .arg(wc.path())
        .arg("-o")
        .arg(&output)
        .status()
        .unwrap();

    assert!(status.success());
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "path,user,last_changed_date\n"
    );
}

#[test]
fn test_binary_unwritable_output_fails() {
    let wc = TempDir::new().unwrap();
    fs::write(wc.path().join("a.txt"), b"").unwrap();
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("missing").join("report.csv");

    let status = checker()
        .arg("locklist")
        .arg("-p")
        .arg(wc.path())
        .arg("-o")
        .arg(&output)
        .status()
        .unwrap();

    assert!(!status.success());
    assert!(!output.exists());
}

#[test]
fn test_binary_invalid_encoding_fails() {
    let wc = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("report.csv");

    let status = checker()
        .args(["--encoding", "klingon", "locklist", "-p"])
        .arg(wc.path())
        .arg("-o")
        .arg(&output)
        .status()
        .unwrap();

    assert!(!status.success());
    assert!(!output.exists());
}

#[cfg(unix)]
fn fake_svn() -> &'static Path {
    use std::os::unix::fs::PermissionsExt;
    use std::sync::OnceLock;

    static SCRIPT: OnceLock<PathBuf> = OnceLock::new();
    SCRIPT.get_or_init(|| {
        let script = Path::new(env!("CARGO_TARGET_TMPDIR")).join("cli-tests-fake-svn");
        fs::write(
            &script,
            concat!(
                "#!/bin/sh\n",
                "case \"$2\" in\n",
                "    *.lock) printf 'Path: %s\\nLock Owner: alice\\n",
                "Last Changed Date: 2024-01-01 10:00:00\\n' \"$2\" ;;\n",
                "    *) exit 1 ;;\n",
                "esac\n",
            ),
        )
        .unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        script
    })
}

#[cfg(unix)]
#[test]
fn test_binary_reports_locked_files() {
    let wc = TempDir::new().unwrap();
    fs::write(wc.path().join("a.lock"), b"").unwrap();
    fs::write(wc.path().join("b.txt"), b"").unwrap();
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("report.csv");

    let status = checker()
        .arg("--svn")
        .arg(fake_svn())
        .args(["--encoding", "utf-8", "locklist", "-p"])
        .arg(wc.path())
        .arg("-o")
        .arg(&output)
        .status()
        .unwrap();

    assert!(status.success());
    let expected = format!(
        "path,user,last_changed_date\n{},alice,2024-01-01 10:00:00\n",
        wc.path().join("a.lock").display()
    );
    assert_eq!(fs::read_to_string(&output).unwrap(), expected);
}

#[cfg(unix)]
#[test]
fn test_binary_untracked_files_succeed_with_header_only() {
    let wc = TempDir::new().unwrap();
    for name in ["a.txt", "b.txt", "c.txt"] {
        fs::write(wc.path().join(name), b"").unwrap();
    }
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("report.csv");

    let status = checker()
        .arg("--svn")
        .arg(fake_svn())
        .args(["locklist", "-p"])
        .arg(wc.path())
        .arg("-o")
        .arg(&output)
        .status()
        .unwrap();

    assert!(status.success());
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "path,user,last_changed_date\n"
    );
}
