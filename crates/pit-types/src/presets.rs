// ─────────────────────────────────────────────────────────────────────
// SCPN Pit Designer — Presets
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Canonical reference configuration and the built-in preset catalog.

use std::collections::BTreeMap;

use crate::error::{PitError, PitResult};
use crate::params::{DuctRing, Port, Stair, TokamakPitParams};

/// Preset names in catalog order.
pub const PRESET_NAMES: [&str; 4] = ["default", "compact", "wide", "deep"];

/// Canonical reference pit.
///
/// 8–16 m annulus, 18 m deep, 16 sectors, two duct rings, two ports and
/// one stair. Tests and the other presets anchor to these values.
pub fn default_params() -> TokamakPitParams {
    TokamakPitParams::new(8.0, 16.0, 18.0, 1.0, 1.5, 16, 0.25, 9.5, 2.0)
        .with_duct_rings([
            DuctRing::new(11.0, 1.0, 2.0, 16, 0.8),
            DuctRing::new(13.0, 1.0, 6.0, 32, 0.6),
        ])
        .with_ports([
            Port::new(0.0, 2.0, 8.5, 16.0),
            Port::new(120.0, 1.6, 9.0, 16.0),
        ])
        .with_stairs([Stair::new(220.0, 2.4, 9.0, 15.5)])
}

/// Narrower 7–14 m annulus with 12 sectors.
fn compact_params() -> TokamakPitParams {
    TokamakPitParams::new(7.0, 14.0, 18.0, 1.0, 1.5, 12, 0.25, 8.0, 2.0)
        .with_duct_rings([
            DuctRing::new(9.0, 1.0, 2.0, 12, 0.8),
            DuctRing::new(11.0, 1.0, 6.0, 24, 0.6),
        ])
        .with_ports([
            Port::new(0.0, 2.0, 7.5, 14.0),
            Port::new(120.0, 1.6, 8.0, 14.0),
        ])
        .with_stairs([Stair::new(220.0, 2.4, 8.0, 13.5)])
}

/// Wider 10–22 m annulus with 18 sectors.
fn wide_params() -> TokamakPitParams {
    TokamakPitParams::new(10.0, 22.0, 18.0, 1.0, 1.5, 18, 0.25, 11.5, 2.0)
        .with_duct_rings([
            DuctRing::new(13.0, 1.0, 2.0, 18, 0.8),
            DuctRing::new(17.0, 1.0, 6.0, 36, 0.6),
        ])
        .with_ports([
            Port::new(0.0, 2.0, 10.5, 22.0),
            Port::new(120.0, 1.6, 11.0, 22.0),
        ])
        .with_stairs([Stair::new(220.0, 2.4, 11.0, 21.5)])
}

/// Default annulus, 28 m deep, duct rings raised.
fn deep_params() -> TokamakPitParams {
    default_params()
        .with_pit_depth(28.0)
        .with_duct_rings([
            DuctRing::new(11.0, 1.0, 3.0, 16, 0.8),
            DuctRing::new(13.0, 1.0, 10.0, 32, 0.6),
        ])
}

/// All built-in presets keyed by name.
pub fn presets() -> BTreeMap<&'static str, TokamakPitParams> {
    PRESET_NAMES
        .iter()
        .zip([default_params(), compact_params(), wide_params(), deep_params()])
        .map(|(&name, params)| (name, params))
        .collect()
}

/// Look up one preset by name.
pub fn preset(name: &str) -> PitResult<TokamakPitParams> {
    match name {
        "default" => Ok(default_params()),
        "compact" => Ok(compact_params()),
        "wide" => Ok(wide_params()),
        "deep" => Ok(deep_params()),
        other => Err(PitError::UnknownPreset(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let p = default_params();
        assert_eq!(p.inner_radius(), 8.0);
        assert_eq!(p.outer_radius(), 16.0);
        assert_eq!(p.pit_depth(), 18.0);
        assert_eq!(p.floor_thickness(), 1.0);
        assert_eq!(p.wall_thickness(), 1.5);
        assert_eq!(p.sector_count(), 16);
        assert_eq!(p.sector_joints_width(), 0.25);
        assert_eq!(p.cryostat_plinth_radius(), 9.5);
        assert_eq!(p.cryostat_plinth_height(), 2.0);
        assert_eq!(p.ports()[1], Port::new(120.0, 1.6, 9.0, 16.0));
    }

    #[test]
    fn test_catalog_keys() {
        let all = presets();
        assert_eq!(all.len(), 4);
        for name in PRESET_NAMES {
            assert!(all.contains_key(name), "missing preset {name}");
            assert_eq!(preset(name).unwrap(), all[name]);
        }
        assert_eq!(all["default"], default_params());
    }

    #[test]
    fn test_preset_shapes() {
        let default = default_params();
        let compact = preset("compact").unwrap();
        let wide = preset("wide").unwrap();
        let deep = preset("deep").unwrap();

        assert!(compact.outer_radius() - compact.inner_radius() < default.outer_radius() - default.inner_radius());
        assert!(compact.sector_count() < default.sector_count());
        assert!(wide.outer_radius() - wide.inner_radius() > default.outer_radius() - default.inner_radius());
        assert!(wide.sector_count() > default.sector_count());

        assert_eq!(deep.inner_radius(), default.inner_radius());
        assert_eq!(deep.outer_radius(), default.outer_radius());
        assert!(deep.pit_depth() > default.pit_depth());
        for (d, base) in deep.duct_rings().iter().zip(default.duct_rings()) {
            assert!(d.elevation() > base.elevation());
        }
    }

    #[test]
    fn test_unknown_preset() {
        let err = preset("shallow").unwrap_err();
        assert!(matches!(err, PitError::UnknownPreset(ref n) if n == "shallow"));
    }
}
