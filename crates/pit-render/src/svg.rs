// ─────────────────────────────────────────────────────────────────────
// SCPN Pit Designer — SVG Plan Export
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! SVG plan view.
//!
//! Plan coordinates are metres with the pit axis at the origin; the canvas
//! flips y so angles read counter-clockwise from the +x axis.

use pit_geometry::{derive_plan, PlanLayout, Wedge};
use pit_types::error::PitResult;
use pit_types::TokamakPitParams;

/// Canvas size and colours.
#[derive(Debug, Clone)]
pub struct SvgStyle {
    /// Width and height of the square canvas [px].
    pub size_px: u32,
    pub margin_px: f64,
    pub background: String,
    pub structure: String,
    pub joint: String,
    pub duct: String,
    pub port: String,
    pub stair: String,
    pub stroke_width: f64,
    /// Chords per arc when flattening wedges.
    pub arc_segments: usize,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            size_px: 800,
            margin_px: 20.0,
            background: "#ffffff".to_string(),
            structure: "#000000".to_string(),
            joint: "#7f7f7f".to_string(),
            duct: "#1f77b4".to_string(),
            port: "#d62728".to_string(),
            stair: "#2ca02c".to_string(),
            stroke_width: 1.0,
            arc_segments: 16,
        }
    }
}

/// World-to-canvas transform plus the accumulated markup.
struct PlanCanvas<'a> {
    style: &'a SvgStyle,
    scale: f64,
    center: f64,
    content: String,
}

impl<'a> PlanCanvas<'a> {
    fn new(style: &'a SvgStyle, extent_m: f64) -> Self {
        let center = style.size_px as f64 / 2.0;
        let usable = (center - style.margin_px).max(1.0);
        Self {
            style,
            scale: usable / extent_m.max(1e-9),
            center,
            content: String::with_capacity(64 * 1024),
        }
    }

    fn to_canvas(&self, x: f64, y: f64) -> (f64, f64) {
        (self.center + x * self.scale, self.center - y * self.scale)
    }

    fn circle(&mut self, radius_m: f64, stroke: &str, dashed: bool) {
        let dash = if dashed { r#" stroke-dasharray="6 4""# } else { "" };
        self.content.push_str(&format!(
            r#"<circle cx="{c:.2}" cy="{c:.2}" r="{r:.2}" fill="none" stroke="{stroke}" stroke-width="{w:.1}"{dash}/>"#,
            c = self.center,
            r = radius_m.max(0.0) * self.scale,
            w = self.style.stroke_width,
        ));
        self.content.push('\n');
    }

    fn wedge(&mut self, wedge: &Wedge, fill: &str) {
        let mut d = String::new();
        for (i, (x, y)) in wedge.outline(self.style.arc_segments).into_iter().enumerate() {
            let (sx, sy) = self.to_canvas(x, y);
            let op = if i == 0 { "M" } else { " L" };
            d.push_str(&format!("{op} {sx:.2} {sy:.2}"));
        }
        d.push_str(" Z");
        self.content.push_str(&format!(
            r#"<path d="{d}" fill="{fill}" fill-opacity="0.6" stroke="{fill}" stroke-width="{w:.1}"/>"#,
            w = self.style.stroke_width,
        ));
        self.content.push('\n');
    }

    fn group<F: FnOnce(&mut Self)>(&mut self, class: &str, draw: F) {
        self.content.push_str(&format!("<g class=\"{class}\">\n"));
        draw(self);
        self.content.push_str("</g>\n");
    }

    fn finish(self) -> String {
        let size = self.style.size_px;
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {size} {size}" width="{size}" height="{size}">
<rect width="100%" height="100%" fill="{bg}"/>
{content}</svg>
"#,
            bg = self.style.background,
            content = self.content,
        )
    }
}

/// Largest radius anything in the plan reaches [m].
fn plan_extent(plan: &PlanLayout) -> f64 {
    let radii = [plan.outer_radius, plan.inner_radius, plan.plinth_radius]
        .into_iter()
        .chain(plan.duct_rings.iter().map(|b| b.outer_radius))
        .chain(plan.ports.iter().chain(&plan.stairs).map(|w| w.end_radius))
        .chain(plan.ports.iter().chain(&plan.stairs).map(|w| w.start_radius));
    radii.map(f64::abs).filter(|r| r.is_finite()).fold(1.0, f64::max)
}

/// Render the plan view of `params` as a standalone SVG document.
///
/// Does not validate; callers decide whether an invalid pit may be exported.
pub fn export_plan_svg(params: &TokamakPitParams, style: &SvgStyle) -> PitResult<String> {
    let plan = derive_plan(params)?;
    let mut canvas = PlanCanvas::new(style, plan_extent(&plan));

    canvas.group("structure", |c| {
        c.circle(plan.outer_radius, &style.structure, false);
        c.circle(plan.wall_inner_radius, &style.structure, true);
        c.circle(plan.inner_radius, &style.structure, false);
        if plan.plinth_radius > 0.0 {
            c.circle(plan.plinth_radius, &style.structure, true);
        }
    });
    canvas.group("sector-joints", |c| {
        for joint in &plan.sector_joints {
            c.wedge(joint, &style.joint);
        }
    });
    canvas.group("duct-rings", |c| {
        for band in &plan.duct_rings {
            c.circle(band.inner_radius, &style.duct, false);
            c.circle(band.outer_radius, &style.duct, false);
            for duct in &band.ducts {
                c.wedge(duct, &style.duct);
            }
        }
    });
    canvas.group("ports", |c| {
        for port in &plan.ports {
            c.wedge(port, &style.port);
        }
    });
    canvas.group("stairs", |c| {
        for stair in &plan.stairs {
            c.wedge(stair, &style.stair);
        }
    });

    tracing::debug!(
        joints = plan.sector_joints.len(),
        duct_rings = plan.duct_rings.len(),
        ports = plan.ports.len(),
        stairs = plan.stairs.len(),
        "rendered plan svg"
    );
    Ok(canvas.finish())
}

/// UTF-8 bytes of [`export_plan_svg`].
pub fn export_plan_svg_bytes(params: &TokamakPitParams, style: &SvgStyle) -> PitResult<Vec<u8>> {
    export_plan_svg(params, style).map(String::into_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pit_types::{default_params, presets};

    #[test]
    fn test_document_envelope() {
        let svg = export_plan_svg(&default_params(), &SvgStyle::default()).unwrap();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"viewBox="0 0 800 800""#));
        assert!(svg.trim_end().ends_with("</svg>"));
        for class in ["structure", "sector-joints", "duct-rings", "ports", "stairs"] {
            assert!(svg.contains(&format!("<g class=\"{class}\">")), "missing group {class}");
        }
    }

    #[test]
    fn test_one_path_per_wedge() {
        // 16 joints + (16 + 32) ducts + 2 ports + 1 stair.
        let svg = export_plan_svg(&default_params(), &SvgStyle::default()).unwrap();
        assert_eq!(svg.matches("<path").count(), 67);
        // outer, wall face, inner, plinth + two faces per duct ring.
        assert_eq!(svg.matches("<circle").count(), 8);
    }

    #[test]
    fn test_outer_radius_fills_canvas() {
        let style = SvgStyle::default();
        let svg = export_plan_svg(&default_params(), &style).unwrap();
        // 380 px usable radius for a 16 m pit.
        assert!(svg.contains(r#"r="380.00""#));
    }

    #[test]
    fn test_every_preset_renders() {
        for (name, params) in presets() {
            let bytes = export_plan_svg_bytes(&params, &SvgStyle::default()).unwrap();
            assert!(!bytes.is_empty(), "preset {name}");
        }
    }

    #[test]
    fn test_invalid_pit_still_renders() {
        let params = default_params().with_inner_radius(-3.0).with_sector_count(0);
        let svg = export_plan_svg(&params, &SvgStyle::default()).unwrap();
        assert!(svg.contains("</svg>"));
        assert!(!svg.contains("NaN"));
    }
}
