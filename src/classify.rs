// Copyright 2025 Cowboy AI, LLC.

//! INEC classification - the official five-step decision tree
//!
//! Reproduces the regulatory decision tree of the education-ministry
//! technical note:
//!
//! 1. Energy adequate? NO -> level 0
//! 2. Internet present? NO -> level 0
//! 3. Contracted bandwidth >= required? NO -> level 1 (no Wi-Fi) / level 2
//! 4. Wi-Fi present? NO -> level 3
//! 5. Installed APs >= required? NO -> level 4 / YES -> level 5
//!
//! Steps are evaluated top-down and the first match wins; the order is part
//! of the regulation, not an implementation choice. All numeric comparisons
//! are inclusive. The tree is evaluated in a single pass that produces a
//! tagged [`Classification`] carrying the figures each explanation needs, so
//! the level and its justification cannot drift apart.

use crate::level::InecLevel;
use crate::signal::{EnergySignal, InternetSignal};
use crate::snapshot::InfrastructureSnapshot;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of classifying one school, one case per INEC level
///
/// Each case carries the snapshot figures that justify it, so a single
/// classification pass yields both the ordinal level and the data for its
/// human-readable explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind")]
pub enum Classification {
    /// Level 0 - inadequate energy, no internet connection, or both
    Disconnected {
        /// Energy signal at classification time
        energy: EnergySignal,
        /// Internet signal at classification time
        internet: InternetSignal,
    },
    /// Level 1 - contracted bandwidth below the requirement and no Wi-Fi
    BandwidthShortfallNoWifi {
        /// Bandwidth actually provisioned, in Mbps
        contracted_mbps: f64,
        /// Minimum required bandwidth, in Mbps
        required_mbps: f64,
    },
    /// Level 2 - contracted bandwidth below the requirement, Wi-Fi present
    BandwidthShortfall {
        /// Bandwidth actually provisioned, in Mbps
        contracted_mbps: f64,
        /// Minimum required bandwidth, in Mbps
        required_mbps: f64,
    },
    /// Level 3 - bandwidth adequate but no Wi-Fi network
    WifiMissing {
        /// Bandwidth actually provisioned, in Mbps
        contracted_mbps: f64,
    },
    /// Level 4 - Wi-Fi present but fewer access points than required
    CoverageShortfall {
        /// Access points currently installed
        installed_aps: u32,
        /// Access points required
        required_aps: u32,
    },
    /// Level 5 - every gate passed
    FullyConnected {
        /// Access points currently installed
        installed_aps: u32,
        /// Bandwidth actually provisioned, in Mbps
        contracted_mbps: f64,
    },
}

impl Classification {
    /// The INEC level this classification maps to
    pub fn level(&self) -> InecLevel {
        match self {
            Classification::Disconnected { .. } => InecLevel::Level0,
            Classification::BandwidthShortfallNoWifi { .. } => InecLevel::Level1,
            Classification::BandwidthShortfall { .. } => InecLevel::Level2,
            Classification::WifiMissing { .. } => InecLevel::Level3,
            Classification::CoverageShortfall { .. } => InecLevel::Level4,
            Classification::FullyConnected { .. } => InecLevel::Level5,
        }
    }

    /// Human-readable justification for the level
    ///
    /// When both the energy and internet gates fail, the combined reason is
    /// reported; otherwise the single failing gate is named.
    pub fn reason(&self) -> String {
        match self {
            Classification::Disconnected { energy, internet } => {
                match (energy.is_adequate(), internet.is_connected()) {
                    (false, false) => "no adequate energy and no internet connection".to_string(),
                    (false, true) => "inadequate energy".to_string(),
                    _ => "no internet connection".to_string(),
                }
            }
            Classification::BandwidthShortfallNoWifi {
                contracted_mbps,
                required_mbps,
            } => format!(
                "insufficient bandwidth ({contracted_mbps}/{required_mbps} Mbps) and no Wi-Fi"
            ),
            Classification::BandwidthShortfall {
                contracted_mbps,
                required_mbps,
            } => format!("insufficient bandwidth ({contracted_mbps}/{required_mbps} Mbps)"),
            Classification::WifiMissing { contracted_mbps } => {
                format!("bandwidth OK ({contracted_mbps} Mbps) but no Wi-Fi")
            }
            Classification::CoverageShortfall {
                installed_aps,
                required_aps,
            } => {
                let deficit = required_aps.saturating_sub(*installed_aps);
                format!("access point deficit of {deficit} ({installed_aps}/{required_aps})")
            }
            Classification::FullyConnected {
                installed_aps,
                contracted_mbps,
            } => format!("fully connected ({installed_aps} APs, {contracted_mbps} Mbps)"),
        }
    }

    /// Access-point deficit, when this classification reports one
    pub fn access_point_deficit(&self) -> Option<u32> {
        match self {
            Classification::CoverageShortfall {
                installed_aps,
                required_aps,
            } => Some(required_aps.saturating_sub(*installed_aps)),
            _ => None,
        }
    }

    /// Check if this classification is level 5
    pub fn is_fully_connected(&self) -> bool {
        matches!(self, Classification::FullyConnected { .. })
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason())
    }
}

/// Classify one school's infrastructure snapshot
///
/// A total, pure function: every well-typed snapshot (including zero
/// bandwidth and zero access points) maps to exactly one of the six levels.
/// No side effects, no shared state; safe to call from any number of
/// threads.
pub fn classify(snapshot: &InfrastructureSnapshot) -> Classification {
    // Steps 1 and 2: either failing gate floors the school at level 0.
    if !snapshot.energy.is_adequate() || !snapshot.internet.is_connected() {
        return Classification::Disconnected {
            energy: snapshot.energy,
            internet: snapshot.internet,
        };
    }

    // Step 3: contracted vs required bandwidth, inclusive comparison.
    if snapshot.contracted_bandwidth_mbps < snapshot.required_bandwidth_mbps {
        return if snapshot.wifi.is_present() {
            Classification::BandwidthShortfall {
                contracted_mbps: snapshot.contracted_bandwidth_mbps,
                required_mbps: snapshot.required_bandwidth_mbps,
            }
        } else {
            Classification::BandwidthShortfallNoWifi {
                contracted_mbps: snapshot.contracted_bandwidth_mbps,
                required_mbps: snapshot.required_bandwidth_mbps,
            }
        };
    }

    // Step 4: Wi-Fi presence.
    if !snapshot.wifi.is_present() {
        return Classification::WifiMissing {
            contracted_mbps: snapshot.contracted_bandwidth_mbps,
        };
    }

    // Step 5: access-point sufficiency, inclusive comparison.
    if snapshot.installed_access_points >= snapshot.required_access_points {
        Classification::FullyConnected {
            installed_aps: snapshot.installed_access_points,
            contracted_mbps: snapshot.contracted_bandwidth_mbps,
        }
    } else {
        Classification::CoverageShortfall {
            installed_aps: snapshot.installed_access_points,
            required_aps: snapshot.required_access_points,
        }
    }
}

/// Classify a snapshot and return only the ordinal level
pub fn classify_level(snapshot: &InfrastructureSnapshot) -> InecLevel {
    classify(snapshot).level()
}

/// Produce the human-readable justification for a snapshot's level
///
/// Derived from the same single classification pass as [`classify_level`],
/// so the explanation always describes the branch actually taken.
pub fn explain(snapshot: &InfrastructureSnapshot) -> String {
    classify(snapshot).reason()
}
