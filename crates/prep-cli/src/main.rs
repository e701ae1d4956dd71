use prep_domain::CalculationRecord;
use prep_match::{first_match, StyleRegistry};

// Exit codes: 0 = new, 4 = duplicate, 2 = usage, 5 = runtime error.
fn main() {
    // Cargar .env si existe (rutas de trabajo, nivel de log, etc.)
    let _ = dotenvy::dotenv();
    let args: Vec<String> = std::env::args().collect();
    if args.len() >= 2 && args[1] == "isnew" {
        let mut style: Option<String> = None;
        let mut candidate_path: Option<String> = None;
        let mut records_path: Option<String> = None;
        let mut i = 2;
        while i < args.len() {
            match args[i].as_str() {
                "--style" => {
                    i += 1;
                    if i < args.len() { style = Some(args[i].clone()); }
                }
                "--candidate" => {
                    i += 1;
                    if i < args.len() { candidate_path = Some(args[i].clone()); }
                }
                "--records" => {
                    i += 1;
                    if i < args.len() { records_path = Some(args[i].clone()); }
                }
                _ => {}
            }
            i += 1;
        }

        if let (Some(style), Some(candidate_path), Some(records_path)) = (style, candidate_path, records_path) {
            let registry = StyleRegistry::builtin();
            let spec = match registry.spec_for(&style) {
                Ok(s) => s,
                Err(e) => { eprintln!("[prep isnew] {e}"); std::process::exit(5); }
            };
            let candidate: CalculationRecord = match read_json(&candidate_path) {
                Ok(c) => c,
                Err(e) => { eprintln!("[prep isnew] candidate: {e}"); std::process::exit(5); }
            };
            let population: Vec<CalculationRecord> = match read_json(&records_path) {
                Ok(p) => p,
                Err(e) => { eprintln!("[prep isnew] records: {e}"); std::process::exit(5); }
            };
            match first_match(&candidate, &population, spec) {
                Ok(None) => {
                    println!("new: {}", candidate.key());
                    std::process::exit(0);
                }
                Ok(Some(existing)) => {
                    println!("duplicate: {} already covered by {}", candidate.key(), existing.key());
                    std::process::exit(4);
                }
                Err(e) => { eprintln!("[prep isnew] {e}"); std::process::exit(5); }
            }
        } else {
            eprintln!("Uso: prep isnew --style <STYLE> --candidate <FILE> --records <FILE>");
            std::process::exit(2);
        }
    } else if args.len() >= 2 && args[1] == "styles" {
        for style in StyleRegistry::builtin().styles() {
            println!("{style}");
        }
    } else {
        eprintln!("Uso: prep <isnew|styles>");
        eprintln!("  isnew --style <STYLE> --candidate <FILE> --records <FILE>");
        eprintln!("  styles");
        std::process::exit(2);
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, String> {
    let text = std::fs::read_to_string(path).map_err(|e| format!("cannot read {path}: {e}"))?;
    serde_json::from_str(&text).map_err(|e| format!("cannot parse {path}: {e}"))
}
