pub mod writer;

pub use writer::{LockReportRow, LockReportWriter, FLUSH_INTERVAL, HEADER};
