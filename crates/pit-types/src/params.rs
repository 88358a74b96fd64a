// ─────────────────────────────────────────────────────────────────────
// SCPN Pit Designer — Parameter Entities
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Immutable parameter records and their dictionary form.
//!
//! Construction never checks geometry. A pit that is mid-edit in a UI may be
//! inconsistent; `pit-validate` reports that separately.
//!
//! The dictionary form is a `serde_json::Value` object whose keys are the
//! field names below. `from_dict` is an explicit field-by-field mapping with
//! numeric coercion, and `Serialize`/`Deserialize` route through it.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::error::{PitError, PitResult};

// ── Dictionary helpers ───────────────────────────────────────────────

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("{s:?}"),
        Value::Array(_) => "an array".to_string(),
        Value::Object(_) => "an object".to_string(),
    }
}

fn as_object<'a>(value: &'a Value, path: &str) -> PitResult<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| PitError::NotAnObject(path.to_string()))
}

fn required<'a>(obj: &'a Map<String, Value>, prefix: &str, key: &str) -> PitResult<&'a Value> {
    obj.get(key)
        .ok_or_else(|| PitError::MissingField(join(prefix, key)))
}

fn reject_unknown(obj: &Map<String, Value>, prefix: &str, known: &[&str]) -> PitResult<()> {
    match obj.keys().find(|key| !known.contains(&key.as_str())) {
        Some(key) => Err(PitError::UnknownField(join(prefix, key))),
        None => Ok(()),
    }
}

/// Numbers and numeric strings become `f64`.
fn coerce_f64(value: &Value, field: &str) -> PitResult<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| PitError::InvalidField {
        field: field.to_string(),
        expected: "a float",
        found: describe(value),
    })
}

/// Integers pass through, floats truncate toward zero, integer strings parse.
fn coerce_i64(value: &Value, field: &str) -> PitResult<i64> {
    let parsed = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(truncate_to_i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| PitError::InvalidField {
        field: field.to_string(),
        expected: "an integer",
        found: describe(value),
    })
}

fn truncate_to_i64(v: f64) -> Option<i64> {
    let t = v.trunc();
    // i64::MAX as f64 rounds up to 2^63, hence the exclusive upper bound.
    (t.is_finite() && t >= i64::MIN as f64 && t < i64::MAX as f64).then_some(t as i64)
}

fn float_at(obj: &Map<String, Value>, prefix: &str, key: &str) -> PitResult<f64> {
    coerce_f64(required(obj, prefix, key)?, &join(prefix, key))
}

fn int_at(obj: &Map<String, Value>, prefix: &str, key: &str) -> PitResult<i64> {
    coerce_i64(required(obj, prefix, key)?, &join(prefix, key))
}

/// Absent or `null` collections are empty.
fn collection<T>(
    obj: &Map<String, Value>,
    key: &str,
    parse: impl Fn(&Value, &str) -> PitResult<T>,
) -> PitResult<Vec<T>> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| parse(item, &format!("{key}[{i}]")))
            .collect(),
        Some(other) => Err(PitError::InvalidField {
            field: key.to_string(),
            expected: "an array",
            found: describe(other),
        }),
    }
}

// ── DuctRing ─────────────────────────────────────────────────────────

/// Circumferential ring of ducts around the pit annulus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct DuctRing {
    radius: f64,
    width: f64,
    elevation: f64,
    count: i64,
    duct_width: f64,
}

impl DuctRing {
    const FIELDS: [&'static str; 5] = ["radius", "width", "elevation", "count", "duct_width"];

    pub fn new(radius: f64, width: f64, elevation: f64, count: i64, duct_width: f64) -> Self {
        Self {
            radius,
            width,
            elevation,
            count,
            duct_width,
        }
    }

    /// Centre radius of the ring band [m].
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Radial thickness of the ring band [m].
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Vertical position inside the pit [m], either sign.
    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    /// Number of ducts around the ring.
    pub fn count(&self) -> i64 {
        self.count
    }

    /// Tangential width of one duct [m].
    pub fn duct_width(&self) -> f64 {
        self.duct_width
    }

    pub fn inner_edge(&self) -> f64 {
        self.radius - self.width / 2.0
    }

    pub fn outer_edge(&self) -> f64 {
        self.radius + self.width / 2.0
    }

    pub fn to_dict(&self) -> Value {
        json!({
            "radius": self.radius,
            "width": self.width,
            "elevation": self.elevation,
            "count": self.count,
            "duct_width": self.duct_width,
        })
    }

    pub fn from_dict(value: &Value) -> PitResult<Self> {
        Self::parse_at(value, "")
    }

    fn parse_at(value: &Value, path: &str) -> PitResult<Self> {
        let obj = as_object(value, if path.is_empty() { "duct ring" } else { path })?;
        reject_unknown(obj, path, &Self::FIELDS)?;
        Ok(Self {
            radius: float_at(obj, path, "radius")?,
            width: float_at(obj, path, "width")?,
            elevation: float_at(obj, path, "elevation")?,
            count: int_at(obj, path, "count")?,
            duct_width: float_at(obj, path, "duct_width")?,
        })
    }
}

impl TryFrom<Value> for DuctRing {
    type Error = PitError;

    fn try_from(value: Value) -> PitResult<Self> {
        Self::from_dict(&value)
    }
}

impl From<DuctRing> for Value {
    fn from(ring: DuctRing) -> Self {
        ring.to_dict()
    }
}

// ── Tangential features ──────────────────────────────────────────────

/// Which collection a tangential feature belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    Port,
    Stair,
}

impl FeatureKind {
    /// Key of the owning collection in the dictionary form.
    pub fn collection(self) -> &'static str {
        match self {
            FeatureKind::Port => "ports",
            FeatureKind::Stair => "stairs",
        }
    }

    /// Name of the tangential width field for this kind.
    pub fn width_field(self) -> &'static str {
        match self {
            FeatureKind::Port => "width",
            FeatureKind::Stair => "run_width",
        }
    }
}

/// A wedge-shaped penetration located by centre angle and bounded by radii.
///
/// Ports and stairs differ only in the name of their width field; geometry
/// and validation work through this trait instead of the concrete type.
pub trait TangentialFeature {
    fn kind(&self) -> FeatureKind;

    /// Centre angle [deg]; not wrapped.
    fn angle_deg(&self) -> f64;

    /// Tangential width measured at `start_radius` [m].
    fn tangential_width(&self) -> f64;

    fn start_radius(&self) -> f64;

    fn end_radius(&self) -> f64;
}

/// Tangential port wedge through the pit wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct Port {
    angle_deg: f64,
    width: f64,
    start_radius: f64,
    end_radius: f64,
}

impl Port {
    const FIELDS: [&'static str; 4] = ["angle_deg", "width", "start_radius", "end_radius"];

    pub fn new(angle_deg: f64, width: f64, start_radius: f64, end_radius: f64) -> Self {
        Self {
            angle_deg,
            width,
            start_radius,
            end_radius,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn to_dict(&self) -> Value {
        json!({
            "angle_deg": self.angle_deg,
            "width": self.width,
            "start_radius": self.start_radius,
            "end_radius": self.end_radius,
        })
    }

    pub fn from_dict(value: &Value) -> PitResult<Self> {
        Self::parse_at(value, "")
    }

    fn parse_at(value: &Value, path: &str) -> PitResult<Self> {
        let obj = as_object(value, if path.is_empty() { "port" } else { path })?;
        reject_unknown(obj, path, &Self::FIELDS)?;
        Ok(Self {
            angle_deg: float_at(obj, path, "angle_deg")?,
            width: float_at(obj, path, "width")?,
            start_radius: float_at(obj, path, "start_radius")?,
            end_radius: float_at(obj, path, "end_radius")?,
        })
    }
}

impl TangentialFeature for Port {
    fn kind(&self) -> FeatureKind {
        FeatureKind::Port
    }

    fn angle_deg(&self) -> f64 {
        self.angle_deg
    }

    fn tangential_width(&self) -> f64 {
        self.width
    }

    fn start_radius(&self) -> f64 {
        self.start_radius
    }

    fn end_radius(&self) -> f64 {
        self.end_radius
    }
}

impl TryFrom<Value> for Port {
    type Error = PitError;

    fn try_from(value: Value) -> PitResult<Self> {
        Self::from_dict(&value)
    }
}

impl From<Port> for Value {
    fn from(port: Port) -> Self {
        port.to_dict()
    }
}

/// Stair wedge, defined by its tangential run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct Stair {
    angle_deg: f64,
    run_width: f64,
    start_radius: f64,
    end_radius: f64,
}

impl Stair {
    const FIELDS: [&'static str; 4] = ["angle_deg", "run_width", "start_radius", "end_radius"];

    pub fn new(angle_deg: f64, run_width: f64, start_radius: f64, end_radius: f64) -> Self {
        Self {
            angle_deg,
            run_width,
            start_radius,
            end_radius,
        }
    }

    pub fn run_width(&self) -> f64 {
        self.run_width
    }

    pub fn to_dict(&self) -> Value {
        json!({
            "angle_deg": self.angle_deg,
            "run_width": self.run_width,
            "start_radius": self.start_radius,
            "end_radius": self.end_radius,
        })
    }

    pub fn from_dict(value: &Value) -> PitResult<Self> {
        Self::parse_at(value, "")
    }

    fn parse_at(value: &Value, path: &str) -> PitResult<Self> {
        let obj = as_object(value, if path.is_empty() { "stair" } else { path })?;
        reject_unknown(obj, path, &Self::FIELDS)?;
        Ok(Self {
            angle_deg: float_at(obj, path, "angle_deg")?,
            run_width: float_at(obj, path, "run_width")?,
            start_radius: float_at(obj, path, "start_radius")?,
            end_radius: float_at(obj, path, "end_radius")?,
        })
    }
}

impl TangentialFeature for Stair {
    fn kind(&self) -> FeatureKind {
        FeatureKind::Stair
    }

    fn angle_deg(&self) -> f64 {
        self.angle_deg
    }

    fn tangential_width(&self) -> f64 {
        self.run_width
    }

    fn start_radius(&self) -> f64 {
        self.start_radius
    }

    fn end_radius(&self) -> f64 {
        self.end_radius
    }
}

impl TryFrom<Value> for Stair {
    type Error = PitError;

    fn try_from(value: Value) -> PitResult<Self> {
        Self::from_dict(&value)
    }
}

impl From<Stair> for Value {
    fn from(stair: Stair) -> Self {
        stair.to_dict()
    }
}

// ── TokamakPitParams ─────────────────────────────────────────────────

/// Complete parametric definition of the pit layout.
///
/// There are no setters. Each `with_*` method returns a new value with one
/// field replaced and leaves `self` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct TokamakPitParams {
    inner_radius: f64,
    outer_radius: f64,
    pit_depth: f64,
    floor_thickness: f64,
    wall_thickness: f64,
    sector_count: i64,
    sector_joints_width: f64,
    cryostat_plinth_radius: f64,
    cryostat_plinth_height: f64,
    duct_rings: Vec<DuctRing>,
    ports: Vec<Port>,
    stairs: Vec<Stair>,
}

/// Accessor plus copy-with-replacement for each scalar field.
macro_rules! scalar_fields {
    ($($(#[$doc:meta])* $field:ident, $with:ident: $ty:ty;)*) => {
        $(
            $(#[$doc])*
            pub fn $field(&self) -> $ty {
                self.$field
            }

            pub fn $with(&self, $field: $ty) -> Self {
                Self {
                    $field,
                    ..self.clone()
                }
            }
        )*
    };
}

impl TokamakPitParams {
    /// Scalar envelope with empty duct ring, port and stair collections.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        inner_radius: f64,
        outer_radius: f64,
        pit_depth: f64,
        floor_thickness: f64,
        wall_thickness: f64,
        sector_count: i64,
        sector_joints_width: f64,
        cryostat_plinth_radius: f64,
        cryostat_plinth_height: f64,
    ) -> Self {
        Self {
            inner_radius,
            outer_radius,
            pit_depth,
            floor_thickness,
            wall_thickness,
            sector_count,
            sector_joints_width,
            cryostat_plinth_radius,
            cryostat_plinth_height,
            duct_rings: Vec::new(),
            ports: Vec::new(),
            stairs: Vec::new(),
        }
    }

    scalar_fields! {
        /// Inner radius of the floor-plan annulus [m].
        inner_radius, with_inner_radius: f64;
        /// Outer radius of the floor-plan annulus [m].
        outer_radius, with_outer_radius: f64;
        /// Excavation depth [m].
        pit_depth, with_pit_depth: f64;
        floor_thickness, with_floor_thickness: f64;
        wall_thickness, with_wall_thickness: f64;
        /// Number of equal angular sectors.
        sector_count, with_sector_count: i64;
        /// Tangential gap between adjacent sectors [m].
        sector_joints_width, with_sector_joints_width: f64;
        cryostat_plinth_radius, with_cryostat_plinth_radius: f64;
        cryostat_plinth_height, with_cryostat_plinth_height: f64;
    }

    pub fn duct_rings(&self) -> &[DuctRing] {
        &self.duct_rings
    }

    pub fn ports(&self) -> &[Port] {
        &self.ports
    }

    pub fn stairs(&self) -> &[Stair] {
        &self.stairs
    }

    pub fn with_duct_rings(&self, duct_rings: impl IntoIterator<Item = DuctRing>) -> Self {
        Self {
            duct_rings: duct_rings.into_iter().collect(),
            ..self.clone()
        }
    }

    pub fn with_ports(&self, ports: impl IntoIterator<Item = Port>) -> Self {
        Self {
            ports: ports.into_iter().collect(),
            ..self.clone()
        }
    }

    pub fn with_stairs(&self, stairs: impl IntoIterator<Item = Stair>) -> Self {
        Self {
            stairs: stairs.into_iter().collect(),
            ..self.clone()
        }
    }

    /// Radius of the inner face of the outer wall.
    pub fn wall_inner_radius(&self) -> f64 {
        self.outer_radius - self.wall_thickness
    }

    /// All ports, then all stairs, in collection order.
    pub fn features(&self) -> impl Iterator<Item = &dyn TangentialFeature> + '_ {
        self.ports
            .iter()
            .map(|p| p as &dyn TangentialFeature)
            .chain(self.stairs.iter().map(|s| s as &dyn TangentialFeature))
    }

    pub fn to_dict(&self) -> Value {
        json!({
            "inner_radius": self.inner_radius,
            "outer_radius": self.outer_radius,
            "pit_depth": self.pit_depth,
            "floor_thickness": self.floor_thickness,
            "wall_thickness": self.wall_thickness,
            "sector_count": self.sector_count,
            "sector_joints_width": self.sector_joints_width,
            "cryostat_plinth_radius": self.cryostat_plinth_radius,
            "cryostat_plinth_height": self.cryostat_plinth_height,
            "duct_rings": self.duct_rings.iter().map(DuctRing::to_dict).collect::<Vec<_>>(),
            "ports": self.ports.iter().map(Port::to_dict).collect::<Vec<_>>(),
            "stairs": self.stairs.iter().map(Stair::to_dict).collect::<Vec<_>>(),
        })
    }

    /// Inverse of [`TokamakPitParams::to_dict`].
    ///
    /// All nine scalar keys are required. Unknown top-level keys are ignored;
    /// sub-entity objects must carry exactly their own fields.
    pub fn from_dict(value: &Value) -> PitResult<Self> {
        let obj = as_object(value, "pit parameters")?;
        Ok(Self {
            inner_radius: float_at(obj, "", "inner_radius")?,
            outer_radius: float_at(obj, "", "outer_radius")?,
            pit_depth: float_at(obj, "", "pit_depth")?,
            floor_thickness: float_at(obj, "", "floor_thickness")?,
            wall_thickness: float_at(obj, "", "wall_thickness")?,
            sector_count: int_at(obj, "", "sector_count")?,
            sector_joints_width: float_at(obj, "", "sector_joints_width")?,
            cryostat_plinth_radius: float_at(obj, "", "cryostat_plinth_radius")?,
            cryostat_plinth_height: float_at(obj, "", "cryostat_plinth_height")?,
            duct_rings: collection(obj, "duct_rings", DuctRing::parse_at)?,
            ports: collection(obj, "ports", Port::parse_at)?,
            stairs: collection(obj, "stairs", Stair::parse_at)?,
        })
    }
}

impl TryFrom<Value> for TokamakPitParams {
    type Error = PitError;

    fn try_from(value: Value) -> PitResult<Self> {
        Self::from_dict(&value)
    }
}

impl From<TokamakPitParams> for Value {
    fn from(params: TokamakPitParams) -> Self {
        params.to_dict()
    }
}
