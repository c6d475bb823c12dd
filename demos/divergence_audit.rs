//! Divergence Audit Demo
//!
//! This demo sweeps a snapshot across every official level and shows how
//! the divergence check compares the authoritative figure against the
//! level recomputed from raw infrastructure signals.

use anyhow::Result;
use inec_domain::{DivergenceCheck, InecLevel, InfrastructureSnapshot, LevelSource};

fn main() -> Result<()> {
    // Adequate energy, internet and bandwidth; Wi-Fi present but two access
    // points short of the requirement. The field data says level 4.
    let snapshot = InfrastructureSnapshot::from_reported(
        "Energia adequada",
        "Velocidade adequada",
        "Wi-Fi adequado",
        60.0,
        50.0,
        3,
        5,
    );

    println!(
        "snapshot: {}",
        serde_json::to_string_pretty(&snapshot)?
    );
    println!(
        "\ncomparing {} against {} figures:\n",
        LevelSource::Calculated.display_name(),
        LevelSource::Official.display_name(),
    );

    for official in InecLevel::ALL {
        let check = DivergenceCheck::evaluate(official, &snapshot);
        println!(
            "official {} vs calculated {} -> {}",
            check.official,
            check.calculated,
            if check.divergent { "DIVERGENT" } else { "agrees" },
        );
    }

    Ok(())
}
