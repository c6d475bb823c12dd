// Copyright 2025 Cowboy AI, LLC.

//! Regulatory infrastructure requirements
//!
//! Derives the per-school minimums the classifier compares against: the
//! bandwidth floor (1 Mbps per student in the largest shift, never below
//! 50 Mbps) and the Wi-Fi coverage floor (one access point per two school
//! environments). The derivations run upstream of classification; the
//! classifier only ever sees the already-derived figures.

/// Bandwidth floor in Mbps: no school requires less than this
pub const MIN_BANDWIDTH_MBPS: f64 = 50.0;

/// Required bandwidth per enrolled student in the largest shift, in Mbps
pub const MBPS_PER_STUDENT: f64 = 1.0;

/// School environments covered by a single access point
pub const ROOMS_PER_ACCESS_POINT: u32 = 2;

/// Minimum required bandwidth for a school, in Mbps
///
/// max(50, 1 Mbps x students in the largest shift).
pub fn required_bandwidth_mbps(largest_shift_enrollment: u32) -> f64 {
    (largest_shift_enrollment as f64 * MBPS_PER_STUDENT).max(MIN_BANDWIDTH_MBPS)
}

/// Access points required to cover a school's environments
///
/// One access point per two environments, rounded up.
pub fn required_access_points(rooms: u32) -> u32 {
    rooms.div_ceil(ROOMS_PER_ACCESS_POINT)
}

/// Access points missing relative to the requirement, floored at zero
pub fn access_point_deficit(installed: u32, required: u32) -> u32 {
    required.saturating_sub(installed)
}
