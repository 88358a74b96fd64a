// ─────────────────────────────────────────────────────────────────────
// SCPN Pit Designer — Validation Rules
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Rule enumeration.
//!
//! Report order: geometry bounds, sectoring, duct rings, ports, stairs, each
//! collection in its own order. Every group runs regardless of the others.
//! Each rule fires when its invariant does not hold, so NaN inputs are
//! reported rather than slipping through a failed comparison.
#![allow(clippy::neg_cmp_op_on_partial_ord)]

use pit_types::constants::{MAX_RADIUS, MAX_SECTOR_COUNT, MIN_SECTOR_COUNT};
use pit_types::{DuctRing, FeatureKind, TangentialFeature, TokamakPitParams};

use crate::finding::{Category, Finding};

fn geometry_bounds(params: &TokamakPitParams, out: &mut Vec<Finding>) {
    let mut flag = |msg: String| out.push(Finding::new(Category::Geometry, msg));

    if !(params.inner_radius() > 0.0) {
        flag("inner_radius must be greater than zero".to_string());
    }
    if !(params.outer_radius() > params.inner_radius() + params.wall_thickness()) {
        flag("outer_radius must exceed inner_radius + wall_thickness".to_string());
    }
    if !(params.pit_depth() > 0.0) {
        flag("pit_depth must be greater than zero".to_string());
    }
    if !(params.outer_radius() <= MAX_RADIUS) {
        flag(format!("outer_radius must be <= {MAX_RADIUS} m for MVP"));
    }
}

fn sectoring(params: &TokamakPitParams, out: &mut Vec<Finding>) {
    if !(MIN_SECTOR_COUNT..=MAX_SECTOR_COUNT).contains(&params.sector_count()) {
        out.push(Finding::new(
            Category::Sectoring,
            format!("sector_count must be in the range [{MIN_SECTOR_COUNT}, {MAX_SECTOR_COUNT}]"),
        ));
    }
    if !(params.sector_joints_width() > 0.0) {
        out.push(Finding::new(
            Category::Sectoring,
            "sector_joints_width must be positive",
        ));
    }
}

fn duct_ring(index: usize, ring: &DuctRing, params: &TokamakPitParams, out: &mut Vec<Finding>) {
    let mut flag = |what: &str| {
        out.push(Finding::new(
            Category::DuctRings,
            format!("duct_rings[{index}] {what}"),
        ))
    };

    if !(ring.inner_edge() >= params.inner_radius()) {
        flag("inner edge encroaches inner radius");
    }
    if !(ring.outer_edge() <= params.wall_inner_radius()) {
        flag("outer edge encroaches wall thickness");
    }
    if ring.count() < 1 {
        flag("count must be at least 1");
    }
    if !(ring.duct_width() > 0.0) {
        flag("duct_width must be positive");
    }
}

/// Shared rules for ports and stairs.
fn tangential_feature(
    index: usize,
    feature: &dyn TangentialFeature,
    params: &TokamakPitParams,
    out: &mut Vec<Finding>,
) {
    let kind = feature.kind();
    let category = match kind {
        FeatureKind::Port => Category::Ports,
        FeatureKind::Stair => Category::Stairs,
    };
    let label = format!("{}[{index}]", kind.collection());

    if !(feature.start_radius() >= params.inner_radius()) {
        out.push(Finding::new(
            category,
            format!("{label} start_radius must be >= inner_radius"),
        ));
    }
    if !(feature.end_radius() <= params.outer_radius()) {
        out.push(Finding::new(
            category,
            format!("{label} end_radius must be <= outer_radius"),
        ));
    }
    if !(feature.tangential_width() > 0.0) {
        out.push(Finding::new(
            category,
            format!("{label} {} must be positive", kind.width_field()),
        ));
    }
}

/// All findings for `params`, in report order.
pub fn check(params: &TokamakPitParams) -> Vec<Finding> {
    let mut findings = Vec::new();

    geometry_bounds(params, &mut findings);
    sectoring(params, &mut findings);
    for (index, ring) in params.duct_rings().iter().enumerate() {
        duct_ring(index, ring, params, &mut findings);
    }
    for (index, port) in params.ports().iter().enumerate() {
        tangential_feature(index, port, params, &mut findings);
    }
    for (index, stair) in params.stairs().iter().enumerate() {
        tangential_feature(index, stair, params, &mut findings);
    }

    tracing::debug!(findings = findings.len(), "validated pit parameters");
    findings
}

/// Human-readable messages for every violated rule, in report order.
pub fn validate(params: &TokamakPitParams) -> Vec<String> {
    check(params).into_iter().map(|f| f.message).collect()
}

pub fn is_valid(params: &TokamakPitParams) -> bool {
    check(params).is_empty()
}
