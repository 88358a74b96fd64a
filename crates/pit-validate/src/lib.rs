// ─────────────────────────────────────────────────────────────────────
// SCPN Pit Designer — Pit Validation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Geometric consistency checks for a pit parameter set.
//!
//! Findings are data, never errors. An empty result means no detected issue,
//! not a realizable design: ports, stairs and duct rings are each checked
//! against the pit envelope only, never against one another.

pub mod finding;
pub mod rules;

pub use finding::{Category, Finding};
pub use rules::{check, is_valid, validate};
