// ─────────────────────────────────────────────────────────────────────
// SCPN Pit Designer — Arc Geometry
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Tangential width to angular span conversion.
//!
//! A wedge's angular span is evaluated at one representative radius and held
//! constant over its whole radial extent. A true constant-width cut would
//! narrow in angle as the radius grows; the plan view keeps the simpler
//! constant-angle shape.

use pit_types::constants::MIN_WEDGE_RADIUS;
use pit_types::error::{PitError, PitResult};
use pit_types::TangentialFeature;
use serde::Serialize;

/// Angle [deg] subtended by a tangential `width` at `radius`.
///
/// `theta = width / radius * 180 / pi`. Fails for `radius <= 0` (and NaN).
pub fn tangential_width_to_arc_deg(width: f64, radius: f64) -> PitResult<f64> {
    if radius.is_nan() || radius <= 0.0 {
        return Err(PitError::NonPositiveRadius(radius));
    }
    Ok((width / radius).to_degrees())
}

/// `(center - span/2, center + span/2)`; no wrapping.
pub fn angle_range(center_deg: f64, span_deg: f64) -> (f64, f64) {
    let half_span = span_deg / 2.0;
    (center_deg - half_span, center_deg + half_span)
}

/// `sector_count` equally spaced angles [deg] starting at 0.
pub fn sector_angles(sector_count: usize) -> Vec<f64> {
    let step = 360.0 / sector_count as f64;
    (0..sector_count).map(|i| step * i as f64).collect()
}

/// Annular sector between two radii and two angles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Wedge {
    pub start_radius: f64,
    pub end_radius: f64,
    pub start_angle_deg: f64,
    pub end_angle_deg: f64,
}

impl Wedge {
    pub fn span_deg(&self) -> f64 {
        self.end_angle_deg - self.start_angle_deg
    }

    pub fn center_deg(&self) -> f64 {
        0.5 * (self.start_angle_deg + self.end_angle_deg)
    }

    /// Closed outline in plan coordinates, angles counter-clockwise from +x.
    ///
    /// Walks the `end_radius` arc from start to end angle, then the
    /// `start_radius` arc back. Each arc uses `segments` chords (at least 1).
    pub fn outline(&self, segments: usize) -> Vec<(f64, f64)> {
        let segments = segments.max(1);
        let span = self.span_deg();
        let arc = |radius: f64, i: usize| {
            let theta = (self.start_angle_deg + span * i as f64 / segments as f64).to_radians();
            (radius * theta.cos(), radius * theta.sin())
        };

        let mut points = Vec::with_capacity(2 * (segments + 1));
        points.extend((0..=segments).map(|i| arc(self.end_radius, i)));
        points.extend((0..=segments).rev().map(|i| arc(self.start_radius, i)));
        points
    }
}

/// Wedge centred on `center_deg` whose span is `width` converted at `radius`.
pub fn make_wedge(
    center_deg: f64,
    width: f64,
    radius: f64,
    start_radius: f64,
    end_radius: f64,
) -> PitResult<Wedge> {
    let span = tangential_width_to_arc_deg(width, radius)?;
    let (start_angle_deg, end_angle_deg) = angle_range(center_deg, span);
    Ok(Wedge {
        start_radius,
        end_radius,
        start_angle_deg,
        end_angle_deg,
    })
}

/// Wedge for a port or stair, width converted at its own start radius.
///
/// The start radius is floored at [`MIN_WEDGE_RADIUS`].
pub fn feature_wedge(feature: &dyn TangentialFeature) -> PitResult<Wedge> {
    make_wedge(
        feature.angle_deg(),
        feature.tangential_width(),
        feature.start_radius().max(MIN_WEDGE_RADIUS),
        feature.start_radius(),
        feature.end_radius(),
    )
}
