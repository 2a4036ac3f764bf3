//! 写真ラベル照合
//!
//! 1ファイルの抽出結果が、報告書種別の必要ラベルのどれを満たすかを判定する。
//! ラベルごとの判定規則は順序付きの表 (`RULES`) で定義する。

use crate::filename::FilenameInfo;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// ラベルの判定規則
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    ScreenFront,
    ScreenBack,
    Cover,
    Serial,
    /// `lateral1` などの番号付き側面
    Lateral(&'static str),
    /// 画面・カバー種別の不良部品（部品が tela/tampa）
    DefectivePart,
    BoardFront,
    BoardBack,
    /// カメラ・バッテリー等の不良部品
    ComponentFront,
    ComponentBack,
    FakeFront,
    FakeBack,
    FakeEvidence,
    OriginalFront,
    OriginalBack,
    OriginalEvidence,
    /// 不具合名を含むファイル（全種別）
    Defect,
}

/// ラベルと規則の対応表（評価順）
pub const RULES: &[(&str, Rule)] = &[
    ("frente da tela", Rule::ScreenFront),
    ("verso da tela", Rule::ScreenBack),
    ("tampa", Rule::Cover),
    ("serial", Rule::Serial),
    ("lateral1", Rule::Lateral("lateral1")),
    ("lateral2", Rule::Lateral("lateral2")),
    ("lateral3", Rule::Lateral("lateral3")),
    ("lateral4", Rule::Lateral("lateral4")),
    ("peça com defeito", Rule::DefectivePart),
    ("placa ou sub frente", Rule::BoardFront),
    ("placa ou sub verso", Rule::BoardBack),
    ("peça com defeito frente", Rule::ComponentFront),
    ("peça com defeito verso", Rule::ComponentBack),
    ("frente da peça falsa", Rule::FakeFront),
    ("verso da peça falsa", Rule::FakeBack),
    ("evidência que peça é falsa", Rule::FakeEvidence),
    ("frente da peça original", Rule::OriginalFront),
    ("verso da peça original", Rule::OriginalBack),
    ("evidência de originalidade", Rule::OriginalEvidence),
    ("defeito", Rule::Defect),
];

const SCREEN_OR_COVER_PARTS: &[&str] = &["tela", "tampa"];
const BOARD_PARTS: &[&str] = &["placa", "sub"];
// アクセント除去後に比較する（câmera → camera）
const COMPONENT_PARTS: &[&str] = &["camera", "bateria", "flex", "coaxial", "cabo"];

impl Rule {
    /// ラベルに対応する規則を探す（大文字小文字を区別しない）
    pub fn for_label(label: &str) -> Option<Rule> {
        let label = label.to_lowercase();
        RULES
            .iter()
            .find(|(name, _)| *name == label)
            .map(|(_, rule)| *rule)
    }

    /// ファイルがこの規則を満たすか
    ///
    /// `stem` は小文字化済みの拡張子なし名
    pub fn matches(&self, info: &FilenameInfo, stem: &str) -> bool {
        let has = |word: &str| stem.contains(word);
        let has_evidence = has("evidencia") || has("evidência");

        match self {
            Rule::ScreenFront => has("tela") && (has("frente") || has("front")),
            Rule::ScreenBack => has("tela") && (has("verso") || has("back")),
            Rule::Cover => has("tampa"),
            Rule::Serial => has("serial"),
            Rule::Lateral(token) => has(*token),
            Rule::DefectivePart => part_is_one_of(info, SCREEN_OR_COVER_PARTS),
            Rule::BoardFront => part_is_one_of(info, BOARD_PARTS) && has("frente"),
            Rule::BoardBack => part_is_one_of(info, BOARD_PARTS) && has("verso"),
            Rule::ComponentFront => part_mentions_component(info) && has("frente"),
            Rule::ComponentBack => part_mentions_component(info) && has("verso"),
            Rule::FakeFront => has("falsa") && has("frente"),
            Rule::FakeBack => has("falsa") && has("verso"),
            Rule::FakeEvidence => has_evidence && has("falsa"),
            Rule::OriginalFront => has("original") && has("frente"),
            Rule::OriginalBack => has("original") && has("verso"),
            Rule::OriginalEvidence => has_evidence && has("original"),
            Rule::Defect => info.defect.is_some(),
        }
    }
}

/// 1ファイルが満たす必要ラベルを返す（`required` の順序を保つ）
pub fn match_labels<'a>(info: &FilenameInfo, required: &[&'a str]) -> Vec<&'a str> {
    let stem = info.stem_lower();

    required
        .iter()
        .copied()
        .filter(|label| {
            Rule::for_label(label)
                .map(|rule| rule.matches(info, &stem))
                .unwrap_or(false)
        })
        .collect()
}

fn part_is_one_of(info: &FilenameInfo, parts: &[&str]) -> bool {
    info.part_term()
        .map(|part| {
            let part = part.to_lowercase();
            parts.iter().any(|&p| p == part)
        })
        .unwrap_or(false)
}

fn part_mentions_component(info: &FilenameInfo) -> bool {
    info.part_term()
        .map(|part| {
            let part = fold_accents(part);
            COMPONENT_PARTS.iter().any(|p| part.contains(p))
        })
        .unwrap_or(false)
}

/// 小文字化してアクセント記号を除去
pub fn fold_accents(s: &str) -> String {
    s.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report_type::ReportType;

    fn check(rule: Rule, file_name: &str) -> bool {
        let info = FilenameInfo::extract(file_name);
        rule.matches(&info, &info.stem_lower())
    }

    #[test]
    fn test_fold_accents() {
        assert_eq!(fold_accents("Câmera"), "camera");
        assert_eq!(fold_accents("oxidação"), "oxidacao");
        assert_eq!(fold_accents("flex"), "flex");
    }

    #[test]
    fn test_every_label_has_rule() {
        for report_type in ReportType::ALL {
            for label in report_type.required_labels() {
                assert!(Rule::for_label(label).is_some(), "規則なし: {label}");
            }
        }
    }

    #[test]
    fn test_for_label_case_insensitive() {
        assert_eq!(Rule::for_label("Frente da Tela"), Some(Rule::ScreenFront));
        assert_eq!(Rule::for_label("DEFEITO"), Some(Rule::Defect));
        assert_eq!(Rule::for_label("desconhecido"), None);
    }

    #[test]
    fn test_rule_screen_front() {
        assert!(check(Rule::ScreenFront, "frente_tela_4173482829.jpg"));
        assert!(check(Rule::ScreenFront, "TELA front.jpg"));
        assert!(!check(Rule::ScreenFront, "frente_tampa.jpg"));
        assert!(!check(Rule::ScreenFront, "verso_tela.jpg"));
    }

    #[test]
    fn test_rule_screen_back() {
        assert!(check(Rule::ScreenBack, "verso tela.jpg"));
        assert!(check(Rule::ScreenBack, "back_tela.png"));
        assert!(!check(Rule::ScreenBack, "verso_tampa.jpg"));
    }

    #[test]
    fn test_rule_cover() {
        assert!(check(Rule::Cover, "verso_tampa_4173482829.jpg"));
        assert!(!check(Rule::Cover, "frente_tela.jpg"));
    }

    #[test]
    fn test_rule_serial() {
        assert!(check(Rule::Serial, "Serial_4173482829.jpg"));
        assert!(!check(Rule::Serial, "etiqueta.jpg"));
    }

    #[test]
    fn test_rule_lateral() {
        assert!(check(Rule::Lateral("lateral1"), "lateral1_4173482829.jpg"));
        assert!(!check(Rule::Lateral("lateral2"), "lateral1_4173482829.jpg"));
        assert!(!check(Rule::Lateral("lateral1"), "lateral_4173482829.jpg"));
    }

    #[test]
    fn test_rule_defective_part() {
        assert!(check(Rule::DefectivePart, "4173482829 tela trincado.jpg"));
        assert!(check(Rule::DefectivePart, "4173482829 tampa danificado.jpg"));
        assert!(!check(Rule::DefectivePart, "4173482829 placa não liga.jpg"));
    }

    #[test]
    fn test_rule_board_front_and_back() {
        assert!(check(Rule::BoardFront, "placa frente 123.jpg"));
        assert!(check(Rule::BoardFront, "sub frente.jpg"));
        assert!(!check(Rule::BoardFront, "tela frente.jpg"));
        assert!(check(Rule::BoardBack, "placa verso 123.jpg"));
        assert!(!check(Rule::BoardBack, "placa frente 123.jpg"));
    }

    #[test]
    fn test_rule_component_front_and_back() {
        assert!(check(Rule::ComponentFront, "bateria frente.jpg"));
        assert!(!check(Rule::ComponentFront, "placa frente.jpg"));
        assert!(check(Rule::ComponentBack, "câmera traseira verso.jpg"));
        assert!(!check(Rule::ComponentBack, "bateria frente.jpg"));
    }

    #[test]
    fn test_rule_fake_part() {
        assert!(check(Rule::FakeFront, "frente falsa.jpg"));
        assert!(!check(Rule::FakeFront, "frente original.jpg"));
        assert!(check(Rule::FakeBack, "verso_falsa.jpg"));
        assert!(check(Rule::FakeEvidence, "evidencia falsa.jpg"));
        assert!(check(Rule::FakeEvidence, "evidência_falsa.jpg"));
        assert!(!check(Rule::FakeEvidence, "falsa.jpg"));
    }

    #[test]
    fn test_rule_original_part() {
        assert!(check(Rule::OriginalFront, "frente original.jpg"));
        assert!(check(Rule::OriginalBack, "verso original.jpg"));
        assert!(!check(Rule::OriginalBack, "verso falsa.jpg"));
        assert!(check(Rule::OriginalEvidence, "evidência original.jpg"));
        assert!(!check(Rule::OriginalEvidence, "evidência falsa.jpg"));
    }

    #[test]
    fn test_rule_defect() {
        assert!(check(Rule::Defect, "4173482829 placa não liga.jpg"));
        assert!(!check(Rule::Defect, "lateral1_4173482829.jpg"));
    }

    #[test]
    fn test_match_labels_board_defect() {
        let info = FilenameInfo::extract("4173482829 placa não liga");
        let matched = match_labels(&info, ReportType::BoardOrSubBoard.required_labels());
        assert_eq!(matched, vec!["defeito"]);
    }

    #[test]
    fn test_match_labels_screen_front() {
        let info = FilenameInfo::extract("frente_tela_4173482829");
        let matched = match_labels(&info, ReportType::ScreenAndCover.required_labels());
        assert_eq!(matched, vec!["frente da tela", "peça com defeito"]);
    }

    #[test]
    fn test_match_labels_several_at_once() {
        let info = FilenameInfo::extract("tampa serial lateral2.jpg");
        let matched = match_labels(&info, ReportType::ThirdPartyPart.required_labels());
        assert!(matched.contains(&"tampa"));
        assert!(matched.contains(&"serial"));
        assert!(matched.contains(&"lateral2"));
    }

    #[test]
    fn test_match_labels_unknown_label() {
        let info = FilenameInfo::extract("frente_tela.jpg");
        assert!(match_labels(&info, &["qualquer"]).is_empty());
    }
}
