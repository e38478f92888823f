//! SVG pictures of the moon.
//!
//! Two views are produced, both as standalone SVG documents:
//! - the lunar disk as seen from the planet, with the lit region filled
//! - a top-down orbit diagram with the star, planet, orbit and moon

pub mod error;

use std::fs;
use std::path::Path;

use log::debug;
use luna_phase::{GeometrySettings, MoonObservation, OrbitDiagram, build_lit_region_polygon};
use plotters::coord::Shift;
use plotters::prelude::*;

pub use error::RenderError;

/// Width and height of every image, pixels.
const IMAGE_SIZE: u32 = 480;

/// Fill of the sunlit lunar surface.
const LIT_COLOR: RGBColor = RGBColor(0xF4, 0xF6, 0xF0);
const OUTLINE_COLOR: RGBColor = RGBColor(0x80, 0x80, 0x80);
const STAR_COLOR: RGBColor = RGBColor(0xFF, 0xA5, 0x00);
const PLANET_COLOR: RGBColor = RGBColor(0x1F, 0x4E, 0xC8);

fn circle_points(cx: f64, cy: f64, r: f64, samples: usize) -> Vec<(f64, f64)> {
    let n = samples.max(16);
    (0..n)
        .map(|i| {
            let t = std::f64::consts::TAU * i as f64 / n as f64;
            (cx + r * t.cos(), cy + r * t.sin())
        })
        .collect()
}

fn draw_disk<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    title: &str,
    illumination: f64,
    is_waxing: bool,
    settings: &GeometrySettings,
) -> Result<(), RenderError>
where
    DB::ErrorType: 'static,
{
    let r = settings.disk_radius;
    let half = r * 1.15;
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 20))
        .margin(10)
        .build_cartesian_2d(-half..half, -half..half)?;

    let outline = circle_points(0.0, 0.0, r, settings.samples * 2);
    chart.draw_series(std::iter::once(Polygon::new(outline.clone(), BLACK.filled())))?;
    let lit = build_lit_region_polygon(illumination, is_waxing, r, settings.samples);
    chart.draw_series(std::iter::once(Polygon::new(lit, LIT_COLOR.filled())))?;

    let mut ring = outline;
    if let Some(&first) = ring.first() {
        ring.push(first);
    }
    chart.draw_series(std::iter::once(PathElement::new(ring, OUTLINE_COLOR.stroke_width(1))))?;
    root.present()?;
    Ok(())
}

/// Disk view for one observation as an SVG document.
pub fn render_phase_svg(
    observation: &MoonObservation,
    settings: &GeometrySettings,
) -> Result<String, RenderError> {
    let title = format!(
        "{} {}: {:.1}%",
        observation.date(),
        observation.phase(),
        observation.illumination()
    );
    let mut buf = String::new();
    {
        let root = SVGBackend::with_string(&mut buf, (IMAGE_SIZE, IMAGE_SIZE)).into_drawing_area();
        draw_disk(
            &root,
            &title,
            observation.illumination(),
            observation.is_waxing(),
            settings,
        )?;
    }
    debug!("rendered phase disk ({} bytes)", buf.len());
    Ok(buf)
}

fn draw_orbit<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    title: &str,
    diagram: &OrbitDiagram,
) -> Result<(), RenderError>
where
    DB::ErrorType: 'static,
{
    let half = diagram.extent();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 20))
        .margin(10)
        .build_cartesian_2d(-half..half, -half..half)?;

    chart.draw_series(std::iter::once(PathElement::new(
        diagram.ring.clone(),
        OUTLINE_COLOR.stroke_width(1),
    )))?;

    let (tail, head) = diagram.sunlight;
    chart.draw_series(std::iter::once(PathElement::new(
        vec![tail, head],
        STAR_COLOR.stroke_width(2),
    )))?;
    // arrowhead
    let barb = 0.2;
    chart.draw_series(std::iter::once(Polygon::new(
        vec![
            head,
            (head.0 + barb, head.1 + barb * 0.6),
            (head.0 + barb, head.1 - barb * 0.6),
        ],
        STAR_COLOR.filled(),
    )))?;

    chart.draw_series(std::iter::once(Circle::new(diagram.star, 18, STAR_COLOR.filled())))?;
    chart.draw_series(std::iter::once(Circle::new(diagram.planet, 10, PLANET_COLOR.filled())))?;
    chart.draw_series(std::iter::once(Circle::new(diagram.moon, 7, LIT_COLOR.filled())))?;
    chart.draw_series(std::iter::once(Circle::new(diagram.moon, 7, BLACK.stroke_width(1))))?;

    for (text, (x, y), dy) in [
        ("Sun", diagram.star, 0.6),
        ("Earth", diagram.planet, -0.6),
        ("Moon", diagram.moon, 0.4),
    ] {
        chart.draw_series(std::iter::once(Text::new(text, (x, y + dy), ("sans-serif", 14))))?;
    }
    root.present()?;
    Ok(())
}

/// Top-down orbit view as an SVG document.
pub fn render_orbit_svg(diagram: &OrbitDiagram, title: &str) -> Result<String, RenderError> {
    let mut buf = String::new();
    {
        let root = SVGBackend::with_string(&mut buf, (IMAGE_SIZE, IMAGE_SIZE)).into_drawing_area();
        draw_orbit(&root, title, diagram)?;
    }
    debug!("rendered orbit diagram ({} bytes)", buf.len());
    Ok(buf)
}

/// Write an SVG document to `path`.
pub fn write_svg(path: &Path, svg: &str) -> Result<(), RenderError> {
    fs::write(path, svg).map_err(|source| RenderError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use luna_core::{AnalyticEphemeris, GeoLocation};
    use luna_phase::{ObserverConfig, PhaseAngle, compute_observation};
    use luna_time::{CivilDate, UtcOffset};

    fn observation() -> MoonObservation {
        let date = CivilDate::new(2024, 1, 21).unwrap();
        let config = ObserverConfig::new(GeoLocation::new(37.5665, 126.978, 0.0), UtcOffset::KST);
        compute_observation(&AnalyticEphemeris, date, &config).unwrap()
    }

    #[test]
    fn phase_svg_has_lit_fill() {
        let svg = render_phase_svg(&observation(), &GeometrySettings::default()).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.to_uppercase().contains("#F4F6F0"));
        assert!(svg.contains("Waxing Gibbous"));
    }

    #[test]
    fn orbit_svg_labels_bodies() {
        let angle = PhaseAngle::from_radians(1.0).unwrap();
        let diagram = OrbitDiagram::new(angle, &GeometrySettings::default());
        let svg = render_orbit_svg(&diagram, "orbit").unwrap();
        assert!(svg.contains("<svg"));
        for label in ["Sun", "Earth", "Moon"] {
            assert!(svg.contains(label), "missing {label}");
        }
    }

    #[test]
    fn circle_points_on_radius() {
        for (x, y) in circle_points(1.0, -2.0, 3.0, 40) {
            let d = ((x - 1.0).powi(2) + (y + 2.0).powi(2)).sqrt();
            assert!((d - 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn write_svg_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phase.svg");
        write_svg(&path, "<svg></svg>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<svg></svg>");
    }

    #[test]
    fn write_svg_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("phase.svg");
        let err = write_svg(&path, "<svg/>").unwrap_err();
        assert!(err.to_string().contains("phase.svg"));
    }
}
