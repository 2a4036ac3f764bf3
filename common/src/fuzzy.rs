//! あいまい照合モジュール
//!
//! ファイル名（クエリ）と語彙の各項目を複数の類似度で比較し、
//! 最も近い項目を返す。スコアはすべて 0〜100。
//!
//! ## 類似度
//! 1. 全体比 (`ratio`)
//! 2. 部分比 (`partial_ratio`) - 短い方を長い方の同じ長さの区間と比較
//! 3. トークン整列比 (`token_sort_ratio`) - 語順を無視
//! 4. 包含 - 項目がクエリにそのまま含まれていれば 100

use serde::Serialize;

/// 照合結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    /// 一致した語彙項目
    pub term: String,
    /// スコア (0-100)
    pub score: u8,
}

/// 1項目に対する各類似度の内訳
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TermScore {
    pub ratio: u8,
    pub partial: u8,
    pub token_sort: u8,
    pub contains: u8,
}

impl TermScore {
    /// 最良スコア
    pub fn best(&self) -> u8 {
        self.ratio
            .max(self.partial)
            .max(self.token_sort)
            .max(self.contains)
    }
}

/// 語彙から最も近い項目を探す
///
/// スコアが厳密に大きい場合のみ候補を更新するため、同点なら語彙の先頭側が勝つ。
/// 最良スコアが `threshold` 未満なら `None`。
pub fn best_match(query: &str, vocabulary: &[&str], threshold: u8) -> Option<MatchResult> {
    let query_lower = query.to_lowercase();
    let mut best: Option<(&str, u8)> = None;

    for &term in vocabulary {
        let score = score_lowered(&query_lower, &term.to_lowercase()).best();
        if best.map_or(true, |(_, best_score)| score > best_score) && score > 0 {
            best = Some((term, score));
        }
    }

    match best {
        Some((term, score)) if score >= threshold => Some(MatchResult {
            term: term.to_string(),
            score,
        }),
        _ => None,
    }
}

/// クエリと1項目のスコア内訳（大文字小文字は無視）
pub fn score_term(query: &str, term: &str) -> TermScore {
    score_lowered(&query.to_lowercase(), &term.to_lowercase())
}

fn score_lowered(query: &str, term: &str) -> TermScore {
    TermScore {
        ratio: ratio(query, term),
        partial: partial_ratio(query, term),
        token_sort: token_sort_ratio(query, term),
        contains: if !term.is_empty() && query.contains(term) { 100 } else { 0 },
    }
}

/// 全体の類似度（挿入・削除距離ベース）
pub fn ratio(a: &str, b: &str) -> u8 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    ratio_chars(&a_chars, &b_chars)
}

/// 部分一致の類似度
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let (shorter, longer) = if a_chars.len() <= b_chars.len() {
        (&a_chars, &b_chars)
    } else {
        (&b_chars, &a_chars)
    };

    if shorter.is_empty() {
        return 0;
    }
    if shorter.len() == longer.len() {
        return ratio_chars(shorter, longer);
    }

    longer
        .windows(shorter.len())
        .map(|window| ratio_chars(shorter, window))
        .max()
        .unwrap_or(0)
}

/// 語順を無視した類似度
pub fn token_sort_ratio(a: &str, b: &str) -> u8 {
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}

/// 英数字以外を区切りとして小文字トークンを整列・連結
fn sorted_tokens(s: &str) -> String {
    let cleaned: String = s
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();

    let mut tokens: Vec<&str> = cleaned.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn ratio_chars(a: &[char], b: &[char]) -> u8 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let total = a.len() + b.len();
    let lcs = lcs_length(a, b);

    (200.0 * lcs as f64 / total as f64).round() as u8
}

/// 最長共通部分列の長さ
fn lcs_length(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
