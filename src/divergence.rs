// Copyright 2025 Cowboy AI, LLC.

//! Divergence between the official and the locally calculated level
//!
//! The dashboard can present either the ministry-reported level or the one
//! recomputed here from raw infrastructure signals. A school diverges when
//! the two disagree; levels are ordinal categories, so the comparison is
//! plain equality with no tolerance band.

use crate::classify::classify_level;
use crate::level::InecLevel;
use crate::snapshot::InfrastructureSnapshot;
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Where a presented INEC level comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum LevelSource {
    /// The level as reported by the external authoritative source
    Official,
    /// The level recomputed locally from raw infrastructure signals
    Calculated,
}

impl LevelSource {
    /// Get a human-readable name for this source
    pub fn display_name(&self) -> &'static str {
        match self {
            LevelSource::Official => "Official",
            LevelSource::Calculated => "Calculated",
        }
    }
}

/// Check if the official level diverges from the calculated one
///
/// Exactly `official != classify_level(snapshot)`; no tolerance applies.
pub fn is_divergent(official: InecLevel, snapshot: &InfrastructureSnapshot) -> bool {
    official != classify_level(snapshot)
}

/// Result of comparing the official level against the calculated one
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DivergenceCheck {
    /// Level reported by the authoritative source
    pub official: InecLevel,
    /// Level recomputed from the snapshot
    pub calculated: InecLevel,
    /// Whether the two disagree
    pub divergent: bool,
    /// When the comparison ran
    pub checked_at: DateTime<Utc>,
}

impl DivergenceCheck {
    /// Recompute the level for a snapshot and compare it to the official one
    pub fn evaluate(official: InecLevel, snapshot: &InfrastructureSnapshot) -> Self {
        let calculated = classify_level(snapshot);
        let divergent = official != calculated;
        if divergent {
            debug!(
                official = official.as_u8(),
                calculated = calculated.as_u8(),
                "official INEC level diverges from calculated"
            );
        }
        Self {
            official,
            calculated,
            divergent,
            checked_at: Utc::now(),
        }
    }
}
