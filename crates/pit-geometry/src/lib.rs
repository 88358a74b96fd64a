// ─────────────────────────────────────────────────────────────────────
// SCPN Pit Designer — Pit Geometry
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Plan-view geometry for the pit.
//!
//! - `arc`: tangential width to angle conversion and the `Wedge` primitive
//! - `plan`: every drawable region of a parameter set, for renderers

pub mod arc;
pub mod plan;

pub use arc::{
    angle_range, feature_wedge, make_wedge, sector_angles, tangential_width_to_arc_deg, Wedge,
};
pub use plan::{derive_plan, DuctRingBand, PlanLayout};
