// Copyright 2025 Cowboy AI, LLC.

//! School record - the per-school slice of the authoritative data set
//!
//! Identity is the INEP code (the national school census code), a natural
//! external key; the record carries no other lifecycle. Wire field names
//! follow the upstream census vocabulary, so records deserialize directly
//! from the authoritative payloads. Figures that are derivable from the
//! record (required bandwidth, required access points, deficit) are
//! computed by methods rather than stored, so they can never disagree with
//! their inputs.

use crate::classify::{classify, Classification};
use crate::divergence::DivergenceCheck;
use crate::level::InecLevel;
use crate::requirements;
use crate::snapshot::InfrastructureSnapshot;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// INEP school census code
///
/// An opaque external identifier; the domain never interprets its digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct InepCode(String);

impl InepCode {
    /// Create from a code string
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the underlying code
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InepCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Administrative network a school belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum AdministrativeDependency {
    /// State network
    #[serde(rename = "Estadual")]
    State,
    /// Municipal network
    #[serde(rename = "Municipal")]
    Municipal,
    /// Federal network
    #[serde(rename = "Federal")]
    Federal,
}

impl AdministrativeDependency {
    /// Get a human-readable name for this dependency
    pub fn display_name(&self) -> &'static str {
        match self {
            AdministrativeDependency::State => "State",
            AdministrativeDependency::Municipal => "Municipal",
            AdministrativeDependency::Federal => "Federal",
        }
    }
}

/// One school as reported by the authoritative connectivity data set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct School {
    /// INEP census code (identity)
    #[serde(rename = "cod_inep")]
    pub inep: InepCode,
    /// School name
    #[serde(rename = "escola")]
    pub name: String,
    /// Municipality the school is located in
    #[serde(rename = "municipio")]
    pub municipality: String,
    /// IBGE municipality code
    #[serde(rename = "cod_municipio")]
    pub municipality_code: String,
    /// Federative unit (state abbreviation)
    pub uf: String,
    /// Administrative network
    #[serde(rename = "dependencia")]
    pub dependency: AdministrativeDependency,
    /// Regional education office responsible for the school
    #[serde(rename = "gre")]
    pub regional_office: String,
    /// Raw energy status text as reported upstream
    #[serde(rename = "energia")]
    pub energy_status: String,
    /// Raw internet status text as reported upstream
    #[serde(rename = "internet")]
    pub internet_status: String,
    /// Raw Wi-Fi status text as reported upstream
    #[serde(rename = "wifi")]
    pub wifi_status: String,
    /// Diligence status ("-" when none is open)
    #[serde(rename = "diligencia")]
    pub diligence: String,
    /// INEC level as reported by the authoritative source
    #[serde(rename = "inec_nivel")]
    pub official_level: InecLevel,
    /// Total school environments (rooms)
    #[serde(rename = "compartimentos")]
    pub rooms: u32,
    /// Wi-Fi access points currently installed
    #[serde(rename = "aps_atual")]
    pub installed_access_points: u32,
    /// Enrollment in the largest shift
    #[serde(rename = "matriculas_maior_turno")]
    pub largest_shift_enrollment: u32,
    /// Contracted bandwidth in Mbps
    #[serde(rename = "velocidade_contratada")]
    pub contracted_bandwidth_mbps: f64,
}

impl School {
    /// Minimum required bandwidth for this school, in Mbps
    pub fn required_bandwidth_mbps(&self) -> f64 {
        requirements::required_bandwidth_mbps(self.largest_shift_enrollment)
    }

    /// Access points required to cover this school's environments
    pub fn required_access_points(&self) -> u32 {
        requirements::required_access_points(self.rooms)
    }

    /// Access points missing relative to the requirement
    pub fn access_point_deficit(&self) -> u32 {
        requirements::access_point_deficit(
            self.installed_access_points,
            self.required_access_points(),
        )
    }

    /// Check if the contracted bandwidth meets the requirement (inclusive)
    pub fn bandwidth_is_adequate(&self) -> bool {
        self.contracted_bandwidth_mbps >= self.required_bandwidth_mbps()
    }

    /// Build this school's infrastructure snapshot
    pub fn snapshot(&self) -> InfrastructureSnapshot {
        InfrastructureSnapshot::from_reported(
            &self.energy_status,
            &self.internet_status,
            &self.wifi_status,
            self.contracted_bandwidth_mbps,
            self.required_bandwidth_mbps(),
            self.installed_access_points,
            self.required_access_points(),
        )
    }

    /// Classify this school from its raw infrastructure signals
    pub fn classification(&self) -> Classification {
        classify(&self.snapshot())
    }

    /// The INEC level recomputed from raw infrastructure signals
    pub fn calculated_level(&self) -> InecLevel {
        self.classification().level()
    }

    /// Compare the official level against the calculated one
    pub fn divergence_check(&self) -> DivergenceCheck {
        DivergenceCheck::evaluate(self.official_level, &self.snapshot())
    }

    /// Check if the official level disagrees with the calculated one
    pub fn is_divergent(&self) -> bool {
        self.official_level != self.calculated_level()
    }
}
