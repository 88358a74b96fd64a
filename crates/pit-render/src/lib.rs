// ─────────────────────────────────────────────────────────────────────
// SCPN Pit Designer — Pit Render
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Plan-view export of a pit parameter set.

pub mod svg;

pub use svg::{export_plan_svg, export_plan_svg_bytes, SvgStyle};
