// Copyright 2025 Cowboy AI, LLC.

//! # INEC Domain
//!
//! Domain model for the six-level INEC school-connectivity index: per-school
//! infrastructure snapshots, the official classification decision tree,
//! official-vs-calculated divergence, regulatory requirement derivations and
//! KPI aggregation.
//!
//! The crate is a pure library. Classification has no internal state, no
//! I/O and no dependencies beyond its input: identical snapshots always
//! yield identical levels, and every well-typed snapshot maps to exactly
//! one of the six levels. Ingestion, rendering and transport live in the
//! surrounding application, not here.
//!
//! ## Design Principles
//!
//! 1. **Totality**: classification never fails; malformed status text falls
//!    to the pessimistic reading instead of erroring
//! 2. **Single pass**: the classifier returns a tagged outcome carrying the
//!    figures its explanation needs, so level and justification cannot drift
//! 3. **Normalize once**: free-text census vocabulary is interpreted at the
//!    snapshot boundary; the decision tree sees only enums and numbers
//! 4. **Immutability**: snapshots and reports are value objects, constructed
//!    fresh per evaluation and never mutated
//! 5. **Derive, don't store**: requirement figures are computed from their
//!    inputs so stored and derived state cannot disagree

#![warn(missing_docs)]

mod classify;
mod divergence;
mod errors;
mod level;
mod report;
mod requirements;
mod school;
mod signal;
mod snapshot;

// Re-export core types
pub use classify::{classify, classify_level, explain, Classification};
pub use divergence::{is_divergent, DivergenceCheck, LevelSource};
pub use errors::{DomainError, DomainResult};
pub use level::InecLevel;
pub use report::ConnectivityKpis;
pub use requirements::{
    access_point_deficit, required_access_points, required_bandwidth_mbps, MBPS_PER_STUDENT,
    MIN_BANDWIDTH_MBPS, ROOMS_PER_ACCESS_POINT,
};
pub use school::{AdministrativeDependency, InepCode, School};
pub use signal::{
    energy_text_is_adequate, internet_text_is_adequate, wifi_text_is_adequate, EnergySignal,
    InternetSignal, WifiSignal,
};
pub use snapshot::InfrastructureSnapshot;
