use std::path::PathBuf;

use crate::infrastructure::Result;
use crate::report::LockReportWriter;
use crate::scan::find_files;
use crate::svn::InfoSource;

/// 每检查多少个文件输出一次进度
pub const PROGRESS_INTERVAL: usize = 100;

/// `locklist` 命令参数
#[derive(Debug, Clone, Default)]
pub struct LocklistOptions {
    /// 搜索根目录
    pub root: PathBuf,
    /// 报告输出路径，存在则覆盖
    pub output: PathBuf,
    /// 查询上限，0 表示不限制
    pub limit: usize,
}

/// 一次运行的统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocklistSummary {
    /// 遍历到的文件数
    pub enumerated: usize,
    /// 实际查询过的文件数
    pub examined: usize,
    /// 处于版本控制下的文件数
    pub tracked: usize,
    /// 写入报告的锁定文件数
    pub locked: usize,
}

/// 列出锁定文件并写入 CSV 报告
///
/// 任何遍历、查询或写入错误都会立即中止；未纳入版本控制的文件静默跳过。
pub async fn run_locklist(
    options: &LocklistOptions,
    source: &dyn InfoSource,
) -> Result<LocklistSummary> {
    let files = find_files(&options.root)?;
    let mut writer = LockReportWriter::create(&options.output)?;

    let total = files.len();
    let mut summary = LocklistSummary {
        enumerated: total,
        ..Default::default()
    };

    tracing::info!(length = total, root = %options.root.display(), "start query");

    for (i, path) in files.iter().enumerate() {
        tracing::debug!(path = %path.display(), "getinfo");

        // 上限按下标判断，下标等于上限的文件仍会被查询
        if options.limit > 0 && i > options.limit {
            break;
        }

        if i % PROGRESS_INTERVAL == 0 {
            tracing::info!(
                current = i,
                remain = total - i,
                "{} file checked, {} file remaining",
                i,
                total - i
            );
        }

        summary.examined += 1;

        let Some(info) = source.info(path).await? else {
            continue;
        };
        summary.tracked += 1;

        if info.is_locked() {
            writer.write_locked(&info)?;
            summary.locked += 1;
        }
    }

    writer.finish()?;

    tracing::info!(
        enumerated = summary.enumerated,
        examined = summary.examined,
        tracked = summary.tracked,
        locked = summary.locked,
        output = %options.output.display(),
        "lock list written"
    );

    Ok(summary)
}
