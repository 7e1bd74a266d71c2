use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

use super::decode::OutputDecoder;
use super::info::{parse_svn_info, SvnInfo};
use crate::infrastructure::Result;

/// 单个文件的版本控制信息来源
///
/// 返回 `Ok(None)` 表示该文件不在版本控制之下，调用方应静默跳过；
/// 只有真正的失败才返回 `Err`。
#[async_trait]
pub trait InfoSource: Send + Sync {
    async fn info(&self, path: &Path) -> Result<Option<SvnInfo>>;
}

/// 调用外部 `svn info` 命令的信息来源
#[derive(Debug, Clone)]
pub struct SvnClient {
    program: PathBuf,
    decoder: OutputDecoder,
}

impl SvnClient {
    pub fn new(program: impl Into<PathBuf>, decoder: OutputDecoder) -> Self {
        Self {
            program: program.into(),
            decoder,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for SvnClient {
    fn default() -> Self {
        Self::new("svn", OutputDecoder::default())
    }
}

#[async_trait]
impl InfoSource for SvnClient {
    async fn info(&self, path: &Path) -> Result<Option<SvnInfo>> {
        let output = match Command::new(&self.program)
            .arg("info")
            .arg(path)
            .stdin(Stdio::null())
            .output()
            .await
        {
            Ok(output) => output,
            Err(e) => {
                // 无法启动客户端与非零退出一样按未纳入版本控制处理
                tracing::warn!(
                    path = %path.display(),
                    program = %self.program.display(),
                    error = %e,
                    "failed to run svn info, skipping"
                );
                return Ok(None);
            }
        };

        if !output.status.success() {
            // 非零退出通常意味着文件不在版本控制之下，不视为错误
            tracing::debug!(
                path = %path.display(),
                code = ?output.status.code(),
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "svn info failed, skipping"
            );
            return Ok(None);
        }

        let decoded = self.decoder.decode(&output.stdout);
        if decoded.had_errors {
            tracing::warn!(
                path = %path.display(),
                encoding = self.decoder.encoding_name(),
                "svn info output contains malformed bytes, replaced with U+FFFD"
            );
        }

        Ok(Some(parse_svn_info(&decoded.text)))
    }
}
