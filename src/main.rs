use prepflow_rust::{input_fingerprint, first_match, CalculationRecord, StyleRegistry};

/// Demo: prepara un lote de candidatos E_vs_r_scan contra una población
/// existente y muestra la decisión is_new de cada uno. Un candidato mal
/// formado reporta su error sin abortar el resto del lote.
fn main() {
    let _ = dotenvy::dotenv();

    let registry = StyleRegistry::builtin();
    let spec = match registry.spec_for("E_vs_r_scan") {
        Ok(s) => s,
        Err(e) => {
            eprintln!("[prepflow demo] {e}");
            std::process::exit(5);
        }
    };

    // Población ya persistida (normalmente la trae la capa de base de datos)
    let population = match demo_population() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("[prepflow demo] population: {e}");
            std::process::exit(5);
        }
    };
    println!("población existente: {} registros", population.len());

    // Lote de candidatos: un duplicado dentro de tolerancia, uno nuevo y
    // uno incompleto.
    let candidates = demo_candidates();
    for candidate in &candidates {
        match first_match(candidate, &population, spec) {
            Ok(None) => {
                match input_fingerprint(candidate, spec) {
                    Ok(fp) => println!("  {} -> new (fingerprint {})", candidate.key(), &fp[..12]),
                    Err(e) => println!("  {} -> new (fingerprint no disponible: {e})", candidate.key()),
                }
            }
            Ok(Some(existing)) => {
                println!("  {} -> duplicate of {}", candidate.key(), existing.key());
            }
            Err(e) => {
                // El error de un candidato no aborta el lote.
                println!("  {} -> error: {e}", candidate.key());
            }
        }
    }
}

fn demo_population() -> Result<Vec<CalculationRecord>, prepflow_rust::DomainError> {
    let base = CalculationRecord::new("E_vs_r_scan")?
        .with_field("potential_key", "2003--Mishin-Y--Cu-1")?
        .with_field("family", "A1--Cu--fcc")?
        .with_field("symbols", vec!["Cu"])?
        .with_field("sizemults", vec![3i64, 3, 3])?
        .with_field("number_of_measurements", 300i64)?
        .with_field("minimum_r", 2.0)?
        .with_field("maximum_r", 6.0)?;
    let nickel = CalculationRecord::new("E_vs_r_scan")?
        .with_field("potential_key", "1999--Mishin-Y--Ni-1")?
        .with_field("family", "A1--Ni--fcc")?
        .with_field("symbols", vec!["Ni"])?
        .with_field("sizemults", vec![3i64, 3, 3])?
        .with_field("number_of_measurements", 300i64)?
        .with_field("minimum_r", 2.0)?
        .with_field("maximum_r", 6.0)?;
    Ok(vec![base, nickel])
}

fn demo_candidates() -> Vec<CalculationRecord> {
    let mut out = Vec::new();
    // Dentro de la tolerancia de minimum_r (1e-3 Å): duplicado.
    if let Ok(rec) = CalculationRecord::new("E_vs_r_scan").and_then(|r| {
        r.with_field("potential_key", "2003--Mishin-Y--Cu-1")?
         .with_field("family", "A1--Cu--fcc")?
         .with_field("symbols", vec!["Cu"])?
         .with_field("sizemults", vec![3i64, 3, 3])?
         .with_field("number_of_measurements", 300i64)?
         .with_field("minimum_r", 2.0005)?
         .with_field("maximum_r", 6.0)
    }) {
        out.push(rec);
    }
    // Otro potencial: nuevo.
    if let Ok(rec) = CalculationRecord::new("E_vs_r_scan").and_then(|r| {
        r.with_field("potential_key", "2004--Zhou-X-W--Cu-1")?
         .with_field("family", "A1--Cu--fcc")?
         .with_field("symbols", vec!["Cu"])?
         .with_field("sizemults", vec![3i64, 3, 3])?
         .with_field("number_of_measurements", 300i64)?
         .with_field("minimum_r", 2.0)?
         .with_field("maximum_r", 6.0)
    }) {
        out.push(rec);
    }
    // Incompleto (sin minimum_r): error del candidato, no del lote.
    if let Ok(rec) = CalculationRecord::new("E_vs_r_scan").and_then(|r| {
        r.with_field("potential_key", "2003--Mishin-Y--Cu-1")?
         .with_field("family", "A1--Cu--fcc")?
         .with_field("symbols", vec!["Cu"])?
         .with_field("sizemults", vec![3i64, 3, 3])?
         .with_field("number_of_measurements", 300i64)?
         .with_field("maximum_r", 6.0)
    }) {
        out.push(rec);
    }
    out
}
