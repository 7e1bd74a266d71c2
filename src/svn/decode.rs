use encoding_rs::Encoding;

use crate::infrastructure::{CheckerError, Result};

/// 默认编码：日文 Windows 环境下 svn 客户端的输出编码
pub const DEFAULT_ENCODING: &str = "shift_jis";

/// 把 svn 客户端的输出从本地编码解码为 UTF-8
#[derive(Debug, Clone, Copy)]
pub struct OutputDecoder {
    encoding: &'static Encoding,
}

/// 解码结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    /// 是否有非法字节序列被替换为 U+FFFD
    pub had_errors: bool,
}

impl OutputDecoder {
    /// 根据 WHATWG 编码标签创建解码器，例如 `shift_jis`、`utf-8`、`gbk`
    pub fn for_label(label: &str) -> Result<Self> {
        match Encoding::for_label(label.trim().as_bytes()) {
            // replacement 编码会把整个输入解码成一个 U+FFFD
            Some(encoding) if encoding != encoding_rs::REPLACEMENT => Ok(Self { encoding }),
            _ => Err(CheckerError::config(format!(
                "Unsupported encoding label: {}",
                label
            ))),
        }
    }

    pub fn encoding_name(&self) -> &'static str {
        self.encoding.name()
    }

    /// 解码客户端输出，非法字节序列替换为 U+FFFD，不会失败
    pub fn decode(&self, bytes: &[u8]) -> Decoded {
        let (text, had_errors) = self.encoding.decode_without_bom_handling(bytes);
        Decoded {
            text: text.into_owned(),
            had_errors,
        }
    }
}

impl Default for OutputDecoder {
    fn default() -> Self {
        Self {
            encoding: encoding_rs::SHIFT_JIS,
        }
    }
}
