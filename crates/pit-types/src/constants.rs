// ─────────────────────────────────────────────────────────────────────
// SCPN Pit Designer — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Fewest sectors a pit may be divided into (inclusive).
pub const MIN_SECTOR_COUNT: i64 = 6;

/// Most sectors a pit may be divided into (inclusive).
pub const MAX_SECTOR_COUNT: i64 = 48;

/// Upper bound for `outer_radius` [m], MVP acceptance limit.
pub const MAX_RADIUS: f64 = 100.0;

/// Floor for the representative radius of a port or stair wedge [m].
/// Keeps the width-to-angle conversion away from a zero radius.
pub const MIN_WEDGE_RADIUS: f64 = 1e-6;

/// Most wedges `derive_plan` draws for one repeated feature (sector joints,
/// or the ducts of one ring). Larger counts are refused rather than allocated.
pub const MAX_PLAN_COUNT: i64 = 4096;
