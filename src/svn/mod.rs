//! SVN 客户端交互模块
//!
//! 调用 `svn info` 查询单个文件的状态，解码客户端输出并解析为 [`SvnInfo`]。

pub mod client;
pub mod decode;
pub mod info;

pub use client::{InfoSource, SvnClient};
pub use decode::{Decoded, OutputDecoder, DEFAULT_ENCODING};
pub use info::{parse_svn_info, SvnInfo};
