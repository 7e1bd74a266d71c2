use crate::cli::args::Args;
use crate::infrastructure::logging::{parse_level, LogFormat, LoggingConfig};
use crate::infrastructure::Result;
use crate::svn::{OutputDecoder, SvnClient, DEFAULT_ENCODING};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub svn_program: String,
    pub encoding: String,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        Config {
            svn_program: "svn".to_string(),
            encoding: DEFAULT_ENCODING.to_string(),
            log_level: "info".to_string(),
            log_format: "compact".to_string(),
        }
    }

    pub fn update_from_args(&mut self, args: &Args) {
        // 命令行参数优先级最高
        if let Some(svn) = args.svn.as_deref().filter(|s| !s.is_empty()) {
            self.svn_program = svn.to_string();
        }
        if let Some(encoding) = args.encoding.as_deref().filter(|s| !s.is_empty()) {
            self.encoding = encoding.to_string();
        }
        if let Some(level) = args.log_level.as_deref().filter(|s| !s.is_empty()) {
            self.log_level = level.to_string();
        }
        if let Some(format) = args.log_format.as_deref().filter(|s| !s.is_empty()) {
            self.log_format = format.to_string();
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.svn_program.trim().is_empty() {
            return Err(crate::infrastructure::CheckerError::config(
                "svn program must not be empty",
            ));
        }
        self.decoder()?;
        self.logging_config()?;
        Ok(())
    }

    pub fn decoder(&self) -> Result<OutputDecoder> {
        OutputDecoder::for_label(&self.encoding)
    }

    pub fn svn_client(&self) -> Result<SvnClient> {
        Ok(SvnClient::new(&self.svn_program, self.decoder()?))
    }

    pub fn logging_config(&self) -> Result<LoggingConfig> {
        Ok(LoggingConfig {
            level: parse_level(&self.log_level)?,
            format: self.log_format.parse::<LogFormat>()?,
        })
    }
}
