//! コンソール出力
//!
//! ファイルごとの照合結果と最終レポートを表示する。

use crate::error::LaudoError;
use crate::evaluator::{FileMatch, FolderCheck, VerificationReport};
use laudo_check_common::MatchResult;
use std::path::Path;

pub fn print_start(folder: &Path) {
    println!("\n🔍 Verificando pasta: {}", folder.display());
}

pub fn print_error(err: &LaudoError) {
    match err {
        LaudoError::FolderNotFound(_) => println!("❌ Pasta não encontrada!"),
        other => println!("❌ {}", other),
    }
}

/// 種別・必要数・ファイル一覧を表示
pub fn print_check(check: &FolderCheck) {
    let report = &check.report;

    println!("📋 Tipo de laudo: {} ({})", check.report_type, check.report_type.key());
    println!("📸 Padrões necessários: {}", report.required_count());
    println!("📁 Arquivos encontrados: {}", report.files.len());

    println!("\n{}", "=".repeat(50));
    println!("📋 ANALISANDO ARQUIVOS:");
    println!("{}", "=".repeat(50));

    for file in &report.files {
        print_file(file);
    }

    print_summary(report);
}

fn print_file(file: &FileMatch) {
    let info = &file.info;

    println!("\n📄 {}", info.file_name);
    if !info.is_image {
        println!("   ℹ️  Não é imagem");
    }
    if let Some(order_id) = &info.order_id {
        println!("   OS: {}", order_id);
    }
    println!("   Peça: {}", describe(info.part.as_ref(), "Não identificada"));
    println!("   Defeito: {}", describe(info.defect.as_ref(), "Não identificado"));

    if file.labels.is_empty() {
        println!("   ⚠️  Não corresponde a nenhum padrão necessário");
    } else {
        for label in &file.labels {
            println!("   ✅ Corresponde a: {}", label);
        }
    }
}

fn describe(matched: Option<&MatchResult>, missing: &str) -> String {
    match matched {
        Some(m) => format!("{} ({})", m.term, m.score),
        None => missing.to_string(),
    }
}

fn print_summary(report: &VerificationReport) {
    println!("\n{}", "=".repeat(60));
    println!("📊 RELATÓRIO FINAL:");
    println!("{}", "=".repeat(60));

    if !report.found.is_empty() {
        println!("\n✅ FOTOS ENCONTRADAS ({}):", report.found.len());
        for label in &report.found {
            println!("   ✅ {}", label);
        }
    }

    if !report.missing.is_empty() {
        println!("\n❌ FOTOS FALTANDO ({}):", report.missing.len());
        for label in &report.missing {
            println!("   ❌ {}", label);
        }
    }

    println!("\n📈 RESUMO:");
    println!("   Total necessário: {}", report.required_count());
    println!("   Fotos presentes: {}", report.found.len());
    println!("   Fotos faltando: {}", report.missing.len());

    if report.is_complete() {
        println!("\n🎉 PARABÉNS! TODAS AS FOTOS ESTÃO PRESENTES!");
    } else {
        println!(
            "\n⚠️  ATENÇÃO: {} foto(s) ainda precisam ser adicionadas!",
            report.missing.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        let matched = MatchResult {
            term: "placa".to_string(),
            score: 100,
        };
        assert_eq!(describe(Some(&matched), "Não identificada"), "placa (100)");
        assert_eq!(describe(None, "Não identificada"), "Não identificada");
    }
}
