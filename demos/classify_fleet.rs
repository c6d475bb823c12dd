//! Fleet Classification Demo
//!
//! This demo shows the full path from raw school records to dashboard
//! figures: classify each school, print the level with its justification,
//! and aggregate the fleet into KPIs.

use anyhow::Result;
use inec_domain::{
    AdministrativeDependency, ConnectivityKpis, InecLevel, InepCode, School,
};

fn demo_fleet() -> Vec<School> {
    let base = School {
        inep: InepCode::new("22000000"),
        name: "CETI ANTÔNIO RODRIGUES".to_string(),
        municipality: "Teresina".to_string(),
        municipality_code: "2211001".to_string(),
        uf: "PI".to_string(),
        dependency: AdministrativeDependency::State,
        regional_office: "1ª GRE - Teresina".to_string(),
        energy_status: "Energia adequada".to_string(),
        internet_status: "Velocidade adequada".to_string(),
        wifi_status: "Wi-Fi adequado".to_string(),
        diligence: "-".to_string(),
        official_level: InecLevel::Level5,
        rooms: 10,
        installed_access_points: 6,
        largest_shift_enrollment: 120,
        contracted_bandwidth_mbps: 200.0,
    };

    vec![
        base.clone(),
        School {
            inep: InepCode::new("22000001"),
            name: "UE MARIA JOSÉ".to_string(),
            municipality: "Parnaíba".to_string(),
            regional_office: "6ª GRE - Parnaíba".to_string(),
            wifi_status: "Sem Wi-Fi".to_string(),
            contracted_bandwidth_mbps: 30.0,
            official_level: InecLevel::Level1,
            installed_access_points: 0,
            ..base.clone()
        },
        School {
            inep: InepCode::new("22000002"),
            name: "UE FRANCISCO DAS CHAGAS".to_string(),
            municipality: "Picos".to_string(),
            regional_office: "9ª GRE - Picos".to_string(),
            energy_status: "Energia inadequada".to_string(),
            internet_status: "Sem internet".to_string(),
            official_level: InecLevel::Level0,
            ..base.clone()
        },
        School {
            inep: InepCode::new("22000003"),
            name: "CETI GETÚLIO VARGAS".to_string(),
            wifi_status: "Wi-Fi insuficiente".to_string(),
            installed_access_points: 2,
            // Official figure disagrees with the field data on purpose.
            official_level: InecLevel::Level5,
            ..base
        },
    ]
}

fn main() -> Result<()> {
    let fleet = demo_fleet();

    println!("=== Per-school classification ===\n");
    for school in &fleet {
        let classification = school.classification();
        println!(
            "{} [{}] {} -> {} ({})",
            school.inep,
            school.municipality,
            school.name,
            classification.level(),
            classification.reason(),
        );
        if school.is_divergent() {
            println!(
                "    divergence: official {} vs calculated {}",
                school.official_level,
                school.calculated_level(),
            );
        }
    }

    let kpis = ConnectivityKpis::from_schools(&fleet);
    println!("\n=== Fleet KPIs ===\n");
    println!("{}", serde_json::to_string_pretty(&kpis)?);

    Ok(())
}
