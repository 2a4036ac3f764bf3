//! 照合設定
//!
//! 部品・不具合の語彙と閾値。プロセス起動時に一度だけ構築し、以後は変更しない。

use serde::Serialize;

/// 既知の不具合（ファイル名で表現される）
pub const DEFECTS: &[&str] = &[
    "oxidação",
    "trincado",
    "danificado",
    "não liga",
    "não gera imagem",
    "em curto",
    "peça falsa/de terceiros",
    "empenado",
];

/// 既知の部品
pub const PARTS: &[&str] = &[
    "tela",
    "tampa",
    "placa",
    "sub",
    "flex",
    "coaxial",
    "bateria",
    "câmera frontal",
    "câmera traseira",
    "cabo",
];

/// 部品照合の閾値
pub const PART_THRESHOLD: u8 = 70;

/// 不具合照合の閾値（表現の揺れが大きいため低め）
pub const DEFECT_THRESHOLD: u8 = 65;

/// 画像として扱う拡張子（小文字で比較）
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp"];

/// 照合設定
#[derive(Debug, Clone, Serialize)]
pub struct MatchConfig {
    pub parts: &'static [&'static str],
    pub defects: &'static [&'static str],
    pub part_threshold: u8,
    pub defect_threshold: u8,
    pub image_extensions: &'static [&'static str],
}

lazy_static::lazy_static! {
    static ref STANDARD: MatchConfig = MatchConfig {
        parts: PARTS,
        defects: DEFECTS,
        part_threshold: PART_THRESHOLD,
        defect_threshold: DEFECT_THRESHOLD,
        image_extensions: IMAGE_EXTENSIONS,
    };
}

impl MatchConfig {
    /// 標準設定（共有・不変）
    pub fn standard() -> &'static MatchConfig {
        &STANDARD
    }

    /// 拡張子が画像形式か判定（大文字小文字を区別しない）
    pub fn is_image_extension(&self, ext: &str) -> bool {
        let ext = ext.to_lowercase();
        self.image_extensions.iter().any(|&e| e == ext)
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::standard().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_sizes() {
        assert_eq!(DEFECTS.len(), 8);
        assert_eq!(PARTS.len(), 10);
    }

    #[test]
    fn test_standard_thresholds() {
        let config = MatchConfig::standard();
        assert_eq!(config.part_threshold, 70);
        assert_eq!(config.defect_threshold, 65);
    }

    #[test]
    fn test_is_image_extension() {
        let config = MatchConfig::standard();
        assert!(config.is_image_extension("jpg"));
        assert!(config.is_image_extension("JPG"));
        assert!(config.is_image_extension("jpeg"));
        assert!(config.is_image_extension("png"));
        assert!(config.is_image_extension("Bmp"));
        assert!(!config.is_image_extension("txt"));
        assert!(!config.is_image_extension("gif"));
        assert!(!config.is_image_extension(""));
    }
}
