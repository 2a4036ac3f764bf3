//! ファイル名からの情報抽出
//!
//! ファイル名だけを見て、OS番号・部品・不具合・画像か否かを判定する。

use crate::config::MatchConfig;
use crate::fuzzy::{best_match, MatchResult};
use regex::Regex;
use serde::Serialize;
use std::path::Path;

/// 1ファイル分の抽出結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilenameInfo {
    /// 元のファイル名
    pub file_name: String,
    /// 拡張子を除いた名前
    pub stem: String,
    /// 認識した部品
    pub part: Option<MatchResult>,
    /// 認識した不具合
    pub defect: Option<MatchResult>,
    /// 先頭の数字列（OS番号）
    pub order_id: Option<String>,
    pub is_image: bool,
}

impl FilenameInfo {
    /// 標準設定で抽出
    pub fn extract(file_name: &str) -> Self {
        Self::extract_with(file_name, MatchConfig::standard())
    }

    /// 指定設定で抽出
    pub fn extract_with(file_name: &str, config: &MatchConfig) -> Self {
        let path = Path::new(file_name);
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| file_name.to_string());
        let is_image = path
            .extension()
            .map(|ext| config.is_image_extension(&ext.to_string_lossy()))
            .unwrap_or(false);

        Self {
            file_name: file_name.to_string(),
            part: best_match(&stem, config.parts, config.part_threshold),
            defect: best_match(&stem, config.defects, config.defect_threshold),
            order_id: extract_order_id(file_name),
            stem,
            is_image,
        }
    }

    /// 部品名（未認識なら `None`）
    pub fn part_term(&self) -> Option<&str> {
        self.part.as_ref().map(|m| m.term.as_str())
    }

    /// 不具合名（未認識なら `None`）
    pub fn defect_term(&self) -> Option<&str> {
        self.defect.as_ref().map(|m| m.term.as_str())
    }

    /// 小文字化した拡張子なし名
    pub fn stem_lower(&self) -> String {
        self.stem.to_lowercase()
    }
}

/// ファイル名先頭の数字列を取り出す
pub fn extract_order_id(file_name: &str) -> Option<String> {
    lazy_static::lazy_static! {
        static ref ORDER_ID_RE: Regex = Regex::new(r"^(\d+)").unwrap();
    }

    ORDER_ID_RE
        .captures(file_name)
        .map(|cap| cap[1].to_string())
}
