// Copyright 2025 Cowboy AI, LLC.

//! Infrastructure snapshot - the classifier's input value object

use crate::errors::{DomainError, DomainResult};
use crate::signal::{EnergySignal, InternetSignal, WifiSignal};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One school's infrastructure state at classification time
///
/// An immutable value object, constructed fresh per school per evaluation
/// and discarded after producing a result. The free-text status fields of
/// the upstream record are interpreted once, at construction; the numeric
/// requirement figures arrive already derived (see [`crate::requirements`]
/// for the derivations).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InfrastructureSnapshot {
    /// Energy supply signal
    pub energy: EnergySignal,
    /// Internet connection signal
    pub internet: InternetSignal,
    /// Wi-Fi network signal
    pub wifi: WifiSignal,
    /// Bandwidth actually provisioned, in Mbps
    pub contracted_bandwidth_mbps: f64,
    /// Minimum required bandwidth, in Mbps (max(50, 1 Mbps per student in
    /// the largest shift))
    pub required_bandwidth_mbps: f64,
    /// Wi-Fi access points currently installed
    pub installed_access_points: u32,
    /// Access points required (one per two school environments)
    pub required_access_points: u32,
}

impl InfrastructureSnapshot {
    /// Create a snapshot from already-normalized signals and figures
    pub fn new(
        energy: EnergySignal,
        internet: InternetSignal,
        wifi: WifiSignal,
        contracted_bandwidth_mbps: f64,
        required_bandwidth_mbps: f64,
        installed_access_points: u32,
        required_access_points: u32,
    ) -> Self {
        Self {
            energy,
            internet,
            wifi,
            contracted_bandwidth_mbps,
            required_bandwidth_mbps,
            installed_access_points,
            required_access_points,
        }
    }

    /// Create a snapshot from the upstream record's reported status texts
    ///
    /// Interprets the three free-text fields by marker matching; the numeric
    /// fields are taken as reported. This is the normalization seam between
    /// the census vocabulary and the classifier.
    #[allow(clippy::too_many_arguments)]
    pub fn from_reported(
        energy_text: &str,
        internet_text: &str,
        wifi_text: &str,
        contracted_bandwidth_mbps: f64,
        required_bandwidth_mbps: f64,
        installed_access_points: u32,
        required_access_points: u32,
    ) -> Self {
        Self::new(
            EnergySignal::interpret(energy_text),
            InternetSignal::interpret(internet_text),
            WifiSignal::interpret(wifi_text),
            contracted_bandwidth_mbps,
            required_bandwidth_mbps,
            installed_access_points,
            required_access_points,
        )
    }

    /// Validate the numeric figures against the data-model constraints
    ///
    /// Classification itself is total and never requires this; validation is
    /// offered to the ingestion boundary so that malformed upstream figures
    /// surface as data-quality errors instead of silently pessimistic levels.
    pub fn validate(&self) -> DomainResult<()> {
        if !self.contracted_bandwidth_mbps.is_finite() || self.contracted_bandwidth_mbps < 0.0 {
            return Err(DomainError::ValidationError(format!(
                "contracted bandwidth must be a non-negative number, got {}",
                self.contracted_bandwidth_mbps
            )));
        }
        if !self.required_bandwidth_mbps.is_finite() || self.required_bandwidth_mbps <= 0.0 {
            return Err(DomainError::ValidationError(format!(
                "required bandwidth must be a positive number, got {}",
                self.required_bandwidth_mbps
            )));
        }
        Ok(())
    }
}
