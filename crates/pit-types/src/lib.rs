// ─────────────────────────────────────────────────────────────────────
// SCPN Pit Designer — Pit Types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Parameter model for the tokamak pit designer.
//!
//! Immutable entities, dictionary round-trip, presets and JSON documents.
//! Validation lives in `pit-validate`; nothing here rejects a geometrically
//! inconsistent parameter set.

pub mod config;
pub mod constants;
pub mod error;
pub mod params;
pub mod presets;

pub use error::{PitError, PitResult};
pub use params::{DuctRing, FeatureKind, Port, Stair, TangentialFeature, TokamakPitParams};
pub use presets::{default_params, preset, presets, PRESET_NAMES};
