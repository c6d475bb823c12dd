use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use inec_domain::{
    classify, AdministrativeDependency, ConnectivityKpis, InecLevel, InepCode,
    InfrastructureSnapshot, School,
};

fn bench_snapshot(index: u32) -> InfrastructureSnapshot {
    // Cycle through the six levels so the benchmark walks every branch.
    match index % 6 {
        0 => InfrastructureSnapshot::from_reported(
            "Energia inadequada",
            "Velocidade adequada",
            "Wi-Fi adequado",
            100.0,
            50.0,
            6,
            5,
        ),
        1 => InfrastructureSnapshot::from_reported(
            "Energia adequada",
            "Velocidade adequada",
            "Sem Wi-Fi",
            30.0,
            50.0,
            0,
            5,
        ),
        2 => InfrastructureSnapshot::from_reported(
            "Energia adequada",
            "Velocidade adequada",
            "Wi-Fi adequado",
            30.0,
            50.0,
            0,
            5,
        ),
        3 => InfrastructureSnapshot::from_reported(
            "Energia adequada",
            "Velocidade adequada",
            "Sem Wi-Fi",
            60.0,
            50.0,
            0,
            5,
        ),
        4 => InfrastructureSnapshot::from_reported(
            "Energia adequada",
            "Velocidade adequada",
            "Wi-Fi adequado",
            60.0,
            50.0,
            3,
            5,
        ),
        _ => InfrastructureSnapshot::from_reported(
            "Energia adequada",
            "Velocidade adequada",
            "Wi-Fi adequado",
            100.0,
            50.0,
            6,
            5,
        ),
    }
}

fn bench_school(index: u32) -> School {
    School {
        inep: InepCode::new(format!("{}", 22000000 + index)),
        name: format!("UE BENCH {index}"),
        municipality: "Teresina".to_string(),
        municipality_code: "2211001".to_string(),
        uf: "PI".to_string(),
        dependency: AdministrativeDependency::State,
        regional_office: "1ª GRE - Teresina".to_string(),
        energy_status: "Energia adequada".to_string(),
        internet_status: "Velocidade adequada".to_string(),
        wifi_status: (if index % 3 == 0 { "Sem Wi-Fi" } else { "Wi-Fi adequado" }).to_string(),
        diligence: "-".to_string(),
        official_level: InecLevel::Level5,
        rooms: 5 + index % 20,
        installed_access_points: index % 13,
        largest_shift_enrollment: 30 + index % 400,
        contracted_bandwidth_mbps: (index % 500) as f64,
    }
}

fn benchmark_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    let snapshots: Vec<_> = (0..6).map(bench_snapshot).collect();
    group.bench_function("all_branches", |b| {
        b.iter(|| {
            for snapshot in &snapshots {
                black_box(classify(black_box(snapshot)));
            }
        })
    });

    group.finish();
}

fn benchmark_fleet_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("fleet_aggregation");

    for size in [100u32, 640, 5_000].iter() {
        let fleet: Vec<School> = (0..*size).map(bench_school).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(ConnectivityKpis::from_schools(black_box(&fleet))))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_classify, benchmark_fleet_aggregation);
criterion_main!(benches);
