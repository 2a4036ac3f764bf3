//! Laudo Check Common Library
//!
//! ファイル名だけで写真を判定する照合コア（I/Oなし）

pub mod config;
pub mod fuzzy;
pub mod filename;
pub mod report_type;
pub mod patterns;

pub use config::MatchConfig;
pub use fuzzy::{best_match, score_term, MatchResult, TermScore};
pub use filename::{extract_order_id, FilenameInfo};
pub use report_type::ReportType;
pub use patterns::{match_labels, Rule};
