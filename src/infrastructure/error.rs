use std::path::PathBuf;
use thiserror::Error;

/// 检查过程中的错误类型
///
/// 未纳入版本控制的文件不是错误，见 [`crate::svn::InfoSource`]。
#[derive(Error, Debug)]
pub enum CheckerError {
    #[error("配置错误: {message}")]
    Configuration { message: String },

    #[error("目录遍历错误: {}: {source}", .path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("svn info 查询错误: {}: {message}", .path.display())]
    Fetch { path: PathBuf, message: String },

    #[error("报告输出错误: {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: OutputFailure,
    },
}

/// 报告写入失败的底层原因
#[derive(Error, Debug)]
pub enum OutputFailure {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl CheckerError {
    /// 创建配置错误
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// 创建查询错误
    pub fn fetch(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Fetch {
            path: path.into(),
            message: message.into(),
        }
    }

    /// 创建输出错误
    pub fn output(path: impl Into<PathBuf>, source: impl Into<OutputFailure>) -> Self {
        Self::Output {
            path: path.into(),
            source: source.into(),
        }
    }

    /// 出错的路径（配置错误没有路径）
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Configuration { .. } => None,
            Self::Traversal { path, .. } | Self::Fetch { path, .. } | Self::Output { path, .. } => {
                Some(path)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckerError>;
