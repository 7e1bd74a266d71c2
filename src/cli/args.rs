use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "svn-checker",
    version,
    about = "SVN 工作副本检查工具 - 找出被锁定的文件并导出 CSV 报告",
    long_about = "svn-checker 遍历 SVN 工作副本中的所有文件，逐个调用 svn info 查询锁定状态，并把锁定文件的路径、锁定者和最后修改时间写入 CSV 报告。"
)]
pub struct Args {
    /// svn 客户端可执行文件（默认: svn）
    #[arg(long = "svn", value_name = "PROGRAM", global = true)]
    pub svn: Option<String>,

    /// svn 输出的文本编码（默认: shift_jis）
    #[arg(long, value_name = "LABEL", global = true)]
    pub encoding: Option<String>,

    /// 日志级别: trace, debug, info, warn, error（默认: info）
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// 日志格式: pretty, compact（默认: compact）
    #[arg(long = "log-format", value_name = "FORMAT", global = true)]
    pub log_format: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print svn locked file list
    Locklist(LocklistArgs),
}

#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct LocklistArgs {
    /// Search root path
    #[arg(short = 'p', long = "path", value_name = "PATH")]
    pub path: PathBuf,

    /// Report output path
    #[arg(short = 'o', long = "output", value_name = "OUTPUT_PATH")]
    pub output: PathBuf,

    /// Query limit (0 = unlimited)
    #[arg(short = 'l', long = "limit", value_name = "LIMIT", default_value_t = 0)]
    pub limit: usize,
}
