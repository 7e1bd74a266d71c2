use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::infrastructure::{CheckerError, Result};
use crate::svn::SvnInfo;

/// 报告表头
pub const HEADER: [&str; 3] = ["path", "user", "last_changed_date"];

/// 每写入多少行锁定记录刷新一次缓冲
pub const FLUSH_INTERVAL: usize = 100;

/// 报告中的一行：锁定文件的路径、锁定者与最后修改时间
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LockReportRow<'a> {
    pub path: &'a str,
    pub user: &'a str,
    pub last_changed_date: &'a str,
}

impl<'a> From<&'a SvnInfo> for LockReportRow<'a> {
    fn from(info: &'a SvnInfo) -> Self {
        Self {
            path: &info.path,
            user: &info.lock_owner,
            last_changed_date: &info.last_changed_date,
        }
    }
}

/// 锁定文件 CSV 报告写入器
pub struct LockReportWriter<W: Write> {
    writer: csv::Writer<W>,
    path: PathBuf,
    rows: usize,
}

impl LockReportWriter<File> {
    /// 创建（或截断）报告文件并写入表头
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|e| CheckerError::output(path, e))?;
        Self::new(file, path)
    }
}

impl<W: Write> LockReportWriter<W> {
    /// 包装任意输出目标并写入表头，`path` 仅用于错误信息
    pub fn new(inner: W, path: impl Into<PathBuf>) -> Result<Self> {
        let mut writer = Self {
            writer: csv::WriterBuilder::new().has_headers(false).from_writer(inner),
            path: path.into(),
            rows: 0,
        };
        writer
            .writer
            .write_record(HEADER)
            .map_err(|e| CheckerError::output(&writer.path, e))?;
        Ok(writer)
    }

    /// 写入一条锁定记录，每 [`FLUSH_INTERVAL`] 行刷新一次
    pub fn write_locked(&mut self, info: &SvnInfo) -> Result<()> {
        self.writer
            .serialize(LockReportRow::from(info))
            .map_err(|e| CheckerError::output(&self.path, e))?;

        self.rows += 1;
        if self.rows % FLUSH_INTERVAL == 0 {
            self.flush()?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| CheckerError::output(&self.path, e))
    }

    /// 已写入的数据行数（不含表头）
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// 最终刷新并取回底层输出
    pub fn finish(mut self) -> Result<W> {
        self.flush()?;
        let path = self.path;
        self.writer
            .into_inner()
            .map_err(|e| CheckerError::output(path, e.into_error()))
    }
}
