// ─────────────────────────────────────────────────────────────────────
// SCPN Pit Designer — Plan Layout
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Drawable plan-view regions derived from one parameter set.
//!
//! Works on unvalidated input: non-positive counts produce no joints or
//! ducts, and every representative radius is floored at `MIN_WEDGE_RADIUS`.
//! Counts above `MAX_PLAN_COUNT` fail with `PitError::CountTooLarge`.

use pit_types::constants::{MAX_PLAN_COUNT, MIN_WEDGE_RADIUS};
use pit_types::error::{PitError, PitResult};
use pit_types::{DuctRing, TokamakPitParams};
use serde::Serialize;

use crate::arc::{feature_wedge, make_wedge, sector_angles, Wedge};

/// Radial band of one duct ring and its individual ducts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuctRingBand {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub elevation: f64,
    pub ducts: Vec<Wedge>,
}

/// Everything a renderer needs to paint the plan view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanLayout {
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// Inner face of the outer wall.
    pub wall_inner_radius: f64,
    pub plinth_radius: f64,
    pub sector_joints: Vec<Wedge>,
    pub duct_rings: Vec<DuctRingBand>,
    pub ports: Vec<Wedge>,
    pub stairs: Vec<Wedge>,
}

/// Number of wedges to draw for `count`; zero when non-positive.
fn drawable_count(field: impl FnOnce() -> String, count: i64) -> PitResult<usize> {
    if count > MAX_PLAN_COUNT {
        return Err(PitError::CountTooLarge {
            field: field(),
            count,
            limit: MAX_PLAN_COUNT,
        });
    }
    Ok(usize::try_from(count).unwrap_or(0))
}

/// One joint wedge per sector angle, joint width converted at the inner radius.
fn sector_joints(params: &TokamakPitParams) -> PitResult<Vec<Wedge>> {
    let count = drawable_count(|| "sector_count".to_string(), params.sector_count())?;
    let radius = params.inner_radius().max(MIN_WEDGE_RADIUS);
    sector_angles(count)
        .into_iter()
        .map(|angle| {
            make_wedge(
                angle,
                params.sector_joints_width(),
                radius,
                params.inner_radius(),
                params.outer_radius(),
            )
        })
        .collect()
}

fn duct_ring_band(index: usize, ring: &DuctRing) -> PitResult<DuctRingBand> {
    let count = drawable_count(|| format!("duct_rings[{index}].count"), ring.count())?;
    let radius = ring.radius().max(MIN_WEDGE_RADIUS);
    let ducts = sector_angles(count)
        .into_iter()
        .map(|angle| {
            make_wedge(
                angle,
                ring.duct_width(),
                radius,
                ring.inner_edge(),
                ring.outer_edge(),
            )
        })
        .collect::<PitResult<Vec<_>>>()?;

    Ok(DuctRingBand {
        inner_radius: ring.inner_edge(),
        outer_radius: ring.outer_edge(),
        elevation: ring.elevation(),
        ducts,
    })
}

/// Derive the plan layout for `params`.
pub fn derive_plan(params: &TokamakPitParams) -> PitResult<PlanLayout> {
    let duct_rings = params
        .duct_rings()
        .iter()
        .enumerate()
        .map(|(index, ring)| duct_ring_band(index, ring))
        .collect::<PitResult<Vec<_>>>()?;
    let ports = params
        .ports()
        .iter()
        .map(|p| feature_wedge(p))
        .collect::<PitResult<Vec<_>>>()?;
    let stairs = params
        .stairs()
        .iter()
        .map(|s| feature_wedge(s))
        .collect::<PitResult<Vec<_>>>()?;

    Ok(PlanLayout {
        inner_radius: params.inner_radius(),
        outer_radius: params.outer_radius(),
        wall_inner_radius: params.wall_inner_radius(),
        plinth_radius: params.cryostat_plinth_radius(),
        sector_joints: sector_joints(params)?,
        duct_rings,
        ports,
        stairs,
    })
}
