// ─────────────────────────────────────────────────────────────────────
// SCPN Pit Designer — Property-Based Tests (proptest) for pit-types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for pit-types using proptest.
//!
//! Covers: dictionary roundtrip, JSON text roundtrip, copy-with-replacement.

use pit_types::{DuctRing, Port, Stair, TokamakPitParams};
use proptest::prelude::*;

fn finite() -> impl Strategy<Value = f64> {
    -1.0e6f64..1.0e6
}

fn duct_ring() -> impl Strategy<Value = DuctRing> {
    (finite(), finite(), finite(), -4i64..64, finite())
        .prop_map(|(r, w, e, c, dw)| DuctRing::new(r, w, e, c, dw))
}

fn port() -> impl Strategy<Value = Port> {
    (finite(), finite(), finite(), finite()).prop_map(|(a, w, s, e)| Port::new(a, w, s, e))
}

fn stair() -> impl Strategy<Value = Stair> {
    (finite(), finite(), finite(), finite()).prop_map(|(a, w, s, e)| Stair::new(a, w, s, e))
}

prop_compose! {
    fn pit_params()(
        scalars in prop::array::uniform8(finite()),
        sector_count in -10i64..100,
        rings in prop::collection::vec(duct_ring(), 0..5),
        ports in prop::collection::vec(port(), 0..5),
        stairs in prop::collection::vec(stair(), 0..5),
    ) -> TokamakPitParams {
        let [inner, outer, depth, floor, wall, joints, plinth_r, plinth_h] = scalars;
        TokamakPitParams::new(inner, outer, depth, floor, wall, sector_count, joints, plinth_r, plinth_h)
            .with_duct_rings(rings)
            .with_ports(ports)
            .with_stairs(stairs)
    }
}

// ── Roundtrip ────────────────────────────────────────────────────────

proptest! {
    /// from_dict(to_dict(p)) == p, including collection order and length.
    #[test]
    fn dict_roundtrip(params in pit_params()) {
        let back = TokamakPitParams::from_dict(&params.to_dict()).unwrap();
        prop_assert_eq!(back.duct_rings().len(), params.duct_rings().len());
        prop_assert_eq!(back.ports().len(), params.ports().len());
        prop_assert_eq!(back.stairs().len(), params.stairs().len());
        prop_assert_eq!(back, params);
    }

    /// Text form survives serialisation and parsing unchanged.
    #[test]
    fn json_text_roundtrip(params in pit_params()) {
        let text = params.to_json_pretty().unwrap();
        let back = TokamakPitParams::from_json_str(&text).unwrap();
        prop_assert_eq!(back, params);
    }

    /// Editing one field leaves the source value untouched.
    #[test]
    fn with_leaves_original(params in pit_params(), r in finite()) {
        let before = params.clone();
        let edited = params.with_outer_radius(r);
        prop_assert_eq!(&params, &before);
        prop_assert_eq!(edited.outer_radius(), r);
        prop_assert_eq!(edited.inner_radius(), params.inner_radius());
        prop_assert_eq!(edited.ports(), params.ports());
    }
}
