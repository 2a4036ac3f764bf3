use laudo_check_common::fuzzy::partial_ratio;
use laudo_check_common::{FilenameInfo, MatchConfig};
use std::env;

const SAMPLES: &[&str] = &[
    "4173482829 placa não liga",
    "4173482829 tela trincado",
    "4173482829 tampa danificado",
    "4173482829 flex em curto",
    "OS123456 bateria oxidação",
    "frente_tela_4173482829",
    "verso_tampa_4173482829",
    "lateral1_4173482829",
];

// 部分比がこれを超える項目だけ表示する
const SHOW_ABOVE: u8 = 50;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let names: Vec<&str> = if args.is_empty() {
        println!("🧪 TESTANDO EXEMPLOS:");
        println!("{}", "=".repeat(50));
        SAMPLES.to_vec()
    } else {
        args.iter().map(String::as_str).collect()
    };

    let config = MatchConfig::standard();
    for name in names {
        debug_matching(name, config);
    }
}

fn debug_matching(name: &str, config: &MatchConfig) {
    let info = FilenameInfo::extract_with(name, config);
    let lowered = name.to_lowercase();

    println!("\n🔎 DEBUG: Analisando '{}'", name);
    println!("   OS: {}", info.order_id.as_deref().unwrap_or("Não encontrada"));
    println!("   Peça: {}", info.part_term().unwrap_or("Não identificada"));
    println!("   Defeito: {}", info.defect_term().unwrap_or("Não identificado"));

    println!("   Scores defeitos:");
    print_scores(&lowered, config.defects);

    println!("   Scores peças:");
    print_scores(&lowered, config.parts);
}

fn print_scores(query: &str, vocabulary: &[&str]) {
    for term in vocabulary {
        let score = partial_ratio(query, &term.to_lowercase());
        if score > SHOW_ABOVE {
            println!("     {}: {}", term, score);
        }
    }
}
