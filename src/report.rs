// Copyright 2025 Cowboy AI, LLC.

//! KPI aggregation over independent classifications
//!
//! Reduces a fleet of school records into the aggregate figures the
//! dashboard presents. Each school is classified independently (the
//! classifier is pure, so the reduction is a plain fold); the aggregation
//! holds no state beyond the produced report.

use crate::level::InecLevel;
use crate::school::School;
use crate::signal::{energy_text_is_adequate, internet_text_is_adequate, wifi_text_is_adequate};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// Aggregate connectivity figures for a set of schools
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ConnectivityKpis {
    /// Schools aggregated
    pub total: usize,
    /// Schools per official INEC level, indexed by level value 0..=5
    pub schools_per_level: [usize; 6],
    /// Schools in the critical band (official level 0-2)
    pub critical: usize,
    /// Schools whose energy text reports adequate supply
    pub energy_adequate: usize,
    /// Schools whose internet text reports adequate service
    pub internet_adequate: usize,
    /// Schools whose Wi-Fi text reports adequate coverage
    pub wifi_adequate: usize,
    /// Distinct municipalities represented
    pub municipalities: usize,
    /// Distinct regional education offices represented
    pub regional_offices: usize,
    /// Total school environments across the fleet
    pub total_rooms: u64,
    /// Total access points required across the fleet
    pub total_required_access_points: u64,
    /// Total access points installed across the fleet
    pub total_installed_access_points: u64,
    /// Total access-point deficit across the fleet
    pub total_access_point_deficit: u64,
    /// Schools with at least one access point missing
    pub schools_with_deficit: usize,
    /// Schools meeting their bandwidth requirement (inclusive)
    pub bandwidth_adequate: usize,
    /// Schools below their bandwidth requirement
    pub bandwidth_short: usize,
    /// Schools whose official level disagrees with the calculated one
    pub divergent: usize,
    /// Schools per municipality, in first-seen order
    pub schools_by_municipality: IndexMap<String, usize>,
    /// When the report was generated
    pub generated_at: DateTime<Utc>,
}

impl ConnectivityKpis {
    /// Aggregate a fleet of school records into dashboard KPIs
    pub fn from_schools(schools: &[School]) -> Self {
        let mut schools_per_level = [0usize; 6];
        let mut critical = 0;
        let mut energy_adequate = 0;
        let mut internet_adequate = 0;
        let mut wifi_adequate = 0;
        let mut regional_offices: BTreeSet<&str> = BTreeSet::new();
        let mut total_rooms = 0u64;
        let mut total_required_access_points = 0u64;
        let mut total_installed_access_points = 0u64;
        let mut total_access_point_deficit = 0u64;
        let mut schools_with_deficit = 0;
        let mut bandwidth_adequate = 0;
        let mut bandwidth_short = 0;
        let mut divergent = 0;
        let mut schools_by_municipality: IndexMap<String, usize> = IndexMap::new();

        for school in schools {
            schools_per_level[school.official_level.as_u8() as usize] += 1;
            if school.official_level.is_critical() {
                critical += 1;
            }

            if energy_text_is_adequate(&school.energy_status) {
                energy_adequate += 1;
            }
            if internet_text_is_adequate(&school.internet_status) {
                internet_adequate += 1;
            }
            if wifi_text_is_adequate(&school.wifi_status) {
                wifi_adequate += 1;
            }

            regional_offices.insert(school.regional_office.as_str());
            *schools_by_municipality
                .entry(school.municipality.clone())
                .or_insert(0) += 1;

            total_rooms += u64::from(school.rooms);
            total_required_access_points += u64::from(school.required_access_points());
            total_installed_access_points += u64::from(school.installed_access_points);
            let deficit = school.access_point_deficit();
            total_access_point_deficit += u64::from(deficit);
            if deficit > 0 {
                schools_with_deficit += 1;
            }

            if school.bandwidth_is_adequate() {
                bandwidth_adequate += 1;
            } else {
                bandwidth_short += 1;
            }

            if school.is_divergent() {
                divergent += 1;
            }
        }

        debug!(
            total = schools.len(),
            critical, divergent, "aggregated connectivity KPIs"
        );

        Self {
            total: schools.len(),
            schools_per_level,
            critical,
            energy_adequate,
            internet_adequate,
            wifi_adequate,
            municipalities: schools_by_municipality.len(),
            regional_offices: regional_offices.len(),
            total_rooms,
            total_required_access_points,
            total_installed_access_points,
            total_access_point_deficit,
            schools_with_deficit,
            bandwidth_adequate,
            bandwidth_short,
            divergent,
            schools_by_municipality,
            generated_at: Utc::now(),
        }
    }

    /// Schools at a given official level
    pub fn at_level(&self, level: InecLevel) -> usize {
        self.schools_per_level[level.as_u8() as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::school::{AdministrativeDependency, InepCode};

    fn school(
        inep: &str,
        municipality: &str,
        gre: &str,
        official_level: InecLevel,
        energy: &str,
        internet: &str,
        wifi: &str,
        rooms: u32,
        installed_aps: u32,
        enrollment: u32,
        contracted: f64,
    ) -> School {
        School {
            inep: InepCode::new(inep),
            name: format!("UE {inep}"),
            municipality: municipality.to_string(),
            municipality_code: "2200000".to_string(),
            uf: "PI".to_string(),
            dependency: AdministrativeDependency::State,
            regional_office: gre.to_string(),
            energy_status: energy.to_string(),
            internet_status: internet.to_string(),
            wifi_status: wifi.to_string(),
            diligence: "-".to_string(),
            official_level,
            rooms,
            installed_access_points: installed_aps,
            largest_shift_enrollment: enrollment,
            contracted_bandwidth_mbps: contracted,
        }
    }

    fn fleet() -> Vec<School> {
        vec![
            // Level 5, everything adequate: 10 rooms -> 5 APs required.
            school(
                "22000001",
                "Teresina",
                "1ª GRE - Teresina",
                InecLevel::Level5,
                "Energia adequada",
                "Velocidade adequada",
                "Wi-Fi adequado",
                10,
                6,
                100,
                200.0,
            ),
            // Official 5 but only 2 of 5 APs installed: diverges (calculated 4).
            school(
                "22000002",
                "Teresina",
                "1ª GRE - Teresina",
                InecLevel::Level5,
                "Energia adequada",
                "Velocidade adequada",
                "Wi-Fi insuficiente",
                9,
                2,
                80,
                120.0,
            ),
            // Level 0, nothing works: critical.
            school(
                "22000003",
                "Parnaíba",
                "6ª GRE - Parnaíba",
                InecLevel::Level0,
                "Energia inadequada",
                "Sem internet",
                "Sem Wi-Fi",
                6,
                0,
                40,
                0.0,
            ),
            // Level 1, bandwidth short and no Wi-Fi: critical.
            school(
                "22000004",
                "Picos",
                "9ª GRE - Picos",
                InecLevel::Level1,
                "Energia adequada",
                "Velocidade inadequada",
                "Sem Wi-Fi",
                8,
                0,
                200,
                30.0,
            ),
        ]
    }

    /// Test the per-level and critical tallies
    #[test]
    fn test_level_tallies() {
        let kpis = ConnectivityKpis::from_schools(&fleet());
        assert_eq!(kpis.total, 4);
        assert_eq!(kpis.at_level(InecLevel::Level5), 2);
        assert_eq!(kpis.at_level(InecLevel::Level1), 1);
        assert_eq!(kpis.at_level(InecLevel::Level0), 1);
        assert_eq!(kpis.at_level(InecLevel::Level3), 0);
        assert_eq!(kpis.critical, 2);
    }

    /// Test the raw-text adequacy tallies
    #[test]
    fn test_adequacy_tallies() {
        let kpis = ConnectivityKpis::from_schools(&fleet());
        assert_eq!(kpis.energy_adequate, 3);
        assert_eq!(kpis.internet_adequate, 2);
        // "Wi-Fi insuficiente" and absence both fail the adequacy tally.
        assert_eq!(kpis.wifi_adequate, 1);
    }

    /// Test infrastructure totals and deficit detection
    #[test]
    fn test_infrastructure_totals() {
        let kpis = ConnectivityKpis::from_schools(&fleet());
        assert_eq!(kpis.total_rooms, 33);
        // Required: 5 + 5 + 3 + 4 = 17 APs.
        assert_eq!(kpis.total_required_access_points, 17);
        assert_eq!(kpis.total_installed_access_points, 8);
        // Deficits: 0 + 3 + 3 + 4 = 10.
        assert_eq!(kpis.total_access_point_deficit, 10);
        assert_eq!(kpis.schools_with_deficit, 3);
    }

    /// Test bandwidth adequacy split
    #[test]
    fn test_bandwidth_split() {
        let kpis = ConnectivityKpis::from_schools(&fleet());
        // Requirements: 100, 80, 50 (floored), 200 Mbps.
        assert_eq!(kpis.bandwidth_adequate, 2);
        assert_eq!(kpis.bandwidth_short, 2);
    }

    /// Test divergence and geography tallies
    #[test]
    fn test_divergence_and_geography() {
        let kpis = ConnectivityKpis::from_schools(&fleet());
        assert_eq!(kpis.divergent, 1);
        assert_eq!(kpis.municipalities, 3);
        assert_eq!(kpis.regional_offices, 3);
        assert_eq!(kpis.schools_by_municipality["Teresina"], 2);
        assert_eq!(kpis.schools_by_municipality["Parnaíba"], 1);
        // First-seen order is preserved for chart rendering.
        let first = kpis.schools_by_municipality.keys().next().expect("entry");
        assert_eq!(first, "Teresina");
    }

    /// Test the empty fleet aggregates to zeros
    #[test]
    fn test_empty_fleet() {
        let kpis = ConnectivityKpis::from_schools(&[]);
        assert_eq!(kpis.total, 0);
        assert_eq!(kpis.schools_per_level, [0; 6]);
        assert_eq!(kpis.critical, 0);
        assert_eq!(kpis.municipalities, 0);
        assert!(kpis.schools_by_municipality.is_empty());
    }
}
