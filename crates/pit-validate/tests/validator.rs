// ─────────────────────────────────────────────────────────────────────
// SCPN Pit Designer — Validator Integration Tests
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Preset validity, boundary sensitivity and independence of rule groups.

use pit_types::{default_params, presets, DuctRing, Port, TokamakPitParams};
use pit_validate::{check, validate, Category};
use proptest::prelude::*;

#[test]
fn every_preset_is_clean() {
    for (name, params) in presets() {
        let msgs = validate(&params);
        assert!(msgs.is_empty(), "preset {name} has findings: {msgs:?}");
    }
}

#[test]
fn presets_survive_dict_roundtrip_clean() {
    for (name, params) in presets() {
        let back = TokamakPitParams::from_dict(&params.to_dict()).unwrap();
        assert!(validate(&back).is_empty(), "preset {name}");
    }
}

#[test]
fn boundary_sensitivity() {
    let base = default_params();

    let touching = base.with_outer_radius(base.inner_radius() + base.wall_thickness());
    assert!(validate(&touching)
        .iter()
        .any(|m| m.contains("outer_radius must exceed inner_radius + wall_thickness")));

    let five = base.with_sector_count(5);
    assert!(validate(&five).iter().any(|m| m.contains("sector_count")));

    let mut rings = base.duct_rings().to_vec();
    rings[1] = DuctRing::new(13.0, 1.0, 6.0, 0, 0.6);
    let empty_ring = base.with_duct_rings(rings);
    assert!(validate(&empty_ring)
        .iter()
        .any(|m| m.contains("duct_rings[1]") && m.contains("count")));

    let mut ports = base.ports().to_vec();
    ports[0] = Port::new(0.0, 2.0, base.inner_radius() - 0.5, 16.0);
    let early_port = base.with_ports(ports);
    assert!(validate(&early_port)
        .iter()
        .any(|m| m.contains("ports[0]") && m.contains("start_radius")));
}

#[test]
fn rule_groups_are_independent() {
    let base = default_params();
    let broken = base
        .with_pit_depth(0.0)
        .with_sector_count(60)
        .with_duct_rings([DuctRing::new(11.0, 1.0, 2.0, 16, 0.0)]);

    let findings = check(&broken);
    for category in [Category::Geometry, Category::Sectoring, Category::DuctRings] {
        assert!(
            findings.iter().any(|f| f.category == category),
            "no {category:?} finding in {findings:?}"
        );
    }
    assert_eq!(findings.len(), 3);
}

proptest! {
    /// validate is a pure function: same input, same messages.
    #[test]
    fn deterministic(inner in -5.0f64..20.0, outer in -5.0f64..120.0, sectors in -2i64..60) {
        let p = default_params()
            .with_inner_radius(inner)
            .with_outer_radius(outer)
            .with_sector_count(sectors);
        prop_assert_eq!(validate(&p), validate(&p));
    }

    /// Sector-count finding appears exactly outside [6, 48].
    #[test]
    fn sector_range_exact(sectors in -100i64..200) {
        let flagged = validate(&default_params().with_sector_count(sectors))
            .iter()
            .any(|m| m.starts_with("sector_count"));
        prop_assert_eq!(flagged, !(6..=48).contains(&sectors));
    }
}
