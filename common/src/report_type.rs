//! 報告書（laudo）種別
//!
//! フォルダ名から種別を判定し、種別ごとに必要な写真ラベルを定義する。

use serde::{Deserialize, Serialize};

const SCREEN_AND_COVER_LABELS: &[&str] = &[
    "frente da tela",
    "verso da tela",
    "tampa",
    "serial",
    "lateral1",
    "lateral2",
    "lateral3",
    "lateral4",
    "peça com defeito",
    "defeito",
];

const BOARD_OR_SUB_BOARD_LABELS: &[&str] = &[
    "frente da tela",
    "verso da tela",
    "tampa",
    "serial",
    "lateral1",
    "lateral2",
    "lateral3",
    "lateral4",
    "placa ou sub frente",
    "placa ou sub verso",
    "defeito",
];

const CAMERA_BATTERY_FLEX_COAX_LABELS: &[&str] = &[
    "frente da tela",
    "verso da tela",
    "tampa",
    "serial",
    "lateral1",
    "lateral2",
    "lateral3",
    "lateral4",
    "peça com defeito frente",
    "peça com defeito verso",
    "defeito",
];

// 社外品は不具合写真の代わりに真贋の証拠写真を求める
const THIRD_PARTY_PART_LABELS: &[&str] = &[
    "frente da tela",
    "verso da tela",
    "tampa",
    "serial",
    "lateral1",
    "lateral2",
    "lateral3",
    "lateral4",
    "frente da peça falsa",
    "verso da peça falsa",
    "evidência que peça é falsa",
    "frente da peça original",
    "verso da peça original",
    "evidência de originalidade",
];

/// 報告書種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportType {
    /// 画面・カバー
    #[serde(rename = "tela_tampa")]
    ScreenAndCover,
    /// 基板・サブ基板
    #[serde(rename = "placa_sub")]
    BoardOrSubBoard,
    /// カメラ・バッテリー・フレックス・同軸
    #[serde(rename = "cam_bateria_flex_coaxial")]
    CameraBatteryFlexCoax,
    /// 社外品
    #[serde(rename = "terceiros")]
    ThirdPartyPart,
}

impl ReportType {
    pub const ALL: [ReportType; 4] = [
        ReportType::ScreenAndCover,
        ReportType::BoardOrSubBoard,
        ReportType::CameraBatteryFlexCoax,
        ReportType::ThirdPartyPart,
    ];

    /// フォルダ名から種別を判定
    ///
    /// 判定順: 社外品 → 基板 → カメラ等 → 画面・カバー（既定）
    pub fn classify(folder_name: &str) -> Self {
        let name = folder_name.to_lowercase();

        if contains_any(&name, &["terceiro", "falsa", "original"]) {
            ReportType::ThirdPartyPart
        } else if contains_any(&name, &["placa", "sub"]) {
            ReportType::BoardOrSubBoard
        } else if contains_any(&name, &["cam", "câmera", "camera", "bateria", "flex", "coaxial"]) {
            ReportType::CameraBatteryFlexCoax
        } else {
            ReportType::ScreenAndCover
        }
    }

    /// 必要な写真ラベル（順序付き・重複なし）
    pub fn required_labels(&self) -> &'static [&'static str] {
        match self {
            ReportType::ScreenAndCover => SCREEN_AND_COVER_LABELS,
            ReportType::BoardOrSubBoard => BOARD_OR_SUB_BOARD_LABELS,
            ReportType::CameraBatteryFlexCoax => CAMERA_BATTERY_FLEX_COAX_LABELS,
            ReportType::ThirdPartyPart => THIRD_PARTY_PART_LABELS,
        }
    }

    /// 短い識別子
    pub fn key(&self) -> &'static str {
        match self {
            ReportType::ScreenAndCover => "tela_tampa",
            ReportType::BoardOrSubBoard => "placa_sub",
            ReportType::CameraBatteryFlexCoax => "cam_bateria_flex_coaxial",
            ReportType::ThirdPartyPart => "terceiros",
        }
    }
}

fn contains_any(name: &str, words: &[&str]) -> bool {
    words.iter().any(|w| name.contains(w))
}

impl std::fmt::Display for ReportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportType::ScreenAndCover => write!(f, "Tela e tampa"),
            ReportType::BoardOrSubBoard => write!(f, "Placa ou sub"),
            ReportType::CameraBatteryFlexCoax => write!(f, "Câmera, bateria, flex ou coaxial"),
            ReportType::ThirdPartyPart => write!(f, "Peça de terceiros"),
        }
    }
}
