//! 充足判定モジュール
//!
//! フォルダ内の全ファイルを照合し、必要ラベルを「あり」「不足」に分ける。
//!
//! ## 処理フロー
//! 1. フォルダ名から報告書種別を判定
//! 2. 直下のファイルを列挙
//! 3. ファイルごとに情報抽出 → ラベル照合 → 有無マップを更新
//! 4. 必要ラベルを元の順序のまま found / missing に分割

use crate::error::Result;
use crate::scanner;
use laudo_check_common::{match_labels, FilenameInfo, ReportType};
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// ラベルごとの有無（一度 true になったら戻らない）
#[derive(Debug, Clone, Default)]
pub struct PresenceMap {
    present: HashMap<String, bool>,
}

impl PresenceMap {
    /// 全ラベルを false で初期化
    pub fn new(required: &[&str]) -> Self {
        Self {
            present: required.iter().map(|label| (label.to_string(), false)).collect(),
        }
    }

    /// ラベルを「あり」にする。必要ラベルでなければ無視
    pub fn mark(&mut self, label: &str) {
        if let Some(present) = self.present.get_mut(label) {
            *present = true;
        }
    }

    pub fn is_present(&self, label: &str) -> bool {
        self.present.get(label).copied().unwrap_or(false)
    }

    /// `required` の順序で (あり, 不足) に分割
    pub fn partition(&self, required: &[&str]) -> (Vec<String>, Vec<String>) {
        let (found, missing): (Vec<&str>, Vec<&str>) =
            required.iter().copied().partition(|label| self.is_present(label));

        (
            found.into_iter().map(String::from).collect(),
            missing.into_iter().map(String::from).collect(),
        )
    }
}

/// 1ファイルの照合結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileMatch {
    pub info: FilenameInfo,
    /// 満たした必要ラベル
    pub labels: Vec<String>,
}

/// 充足判定の結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    pub files: Vec<FileMatch>,
    pub required: Vec<String>,
    pub found: Vec<String>,
    pub missing: Vec<String>,
}

impl VerificationReport {
    pub fn required_count(&self) -> usize {
        self.required.len()
    }

    /// 不足ラベルがなければ合格
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// フォルダ単位の判定結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderCheck {
    pub folder_name: String,
    pub report_type: ReportType,
    pub report: VerificationReport,
}

/// フォルダ名から種別を判定して充足判定を行う
pub fn check_folder(folder: &Path) -> Result<FolderCheck> {
    let folder_name = folder_name(folder);
    let report_type = ReportType::classify(&folder_name);
    debug!("laudo {} para a pasta '{}'", report_type.key(), folder_name);

    let report = evaluate(folder, report_type.required_labels())?;

    Ok(FolderCheck {
        folder_name,
        report_type,
        report,
    })
}

/// フォルダ直下のファイルで必要ラベルの充足を判定する
pub fn evaluate(folder: &Path, required: &[&str]) -> Result<VerificationReport> {
    let files = scanner::list_files(folder)?;
    Ok(evaluate_names(files.iter().map(|f| f.file_name.as_str()), required))
}

/// ファイル名の列で充足を判定する（I/Oなし）
pub fn evaluate_names<'a, I>(names: I, required: &[&str]) -> VerificationReport
where
    I: IntoIterator<Item = &'a str>,
{
    let mut presence = PresenceMap::new(required);
    let mut files = Vec::new();

    for name in names {
        let info = FilenameInfo::extract(name);
        let labels = match_labels(&info, required);
        debug!(
            "{}: peça={:?} defeito={:?} rótulos={:?}",
            name,
            info.part_term(),
            info.defect_term(),
            labels
        );

        for label in &labels {
            presence.mark(label);
        }

        files.push(FileMatch {
            info,
            labels: labels.into_iter().map(String::from).collect(),
        });
    }

    let (found, missing) = presence.partition(required);

    VerificationReport {
        files,
        required: required.iter().map(|label| label.to_string()).collect(),
        found,
        missing,
    }
}

/// 判定に使うフォルダ名（末尾の要素）
///
/// `.` のように末尾の要素がない場合は正規化したパスから取る
pub fn folder_name(folder: &Path) -> String {
    folder
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .or_else(|| {
            folder
                .canonicalize()
                .ok()
                .and_then(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
        })
        .unwrap_or_default()
}
