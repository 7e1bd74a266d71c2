pub mod cli;
pub mod commands;
pub mod config;
pub mod infrastructure;
pub mod report;
pub mod scan;
pub mod svn;
