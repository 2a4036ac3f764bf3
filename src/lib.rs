pub mod cli;
pub mod console;
pub mod error;
pub mod evaluator;
pub mod scanner;

pub use laudo_check_common::{FilenameInfo, MatchConfig, ReportType};
