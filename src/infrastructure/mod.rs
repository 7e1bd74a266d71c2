pub mod error;
pub mod logging;

pub use error::{CheckerError, OutputFailure, Result};
pub use logging::{setup_logging, LogFormat, LoggingConfig};
