//! Orthographic meridian geometry
//!
//! The dial is modeled as a sphere viewed edge-on: each slice is the band
//! between two longitude meridians and the stick is a single meridian curve.
//! A meridian at longitude lambda projects to:
//! - x = cx + r * sin(lambda) * cos(phi)
//! - y = cy + r * sin(phi)
//! with latitude phi walked linearly from -90 to +90 degrees.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec2;

#[inline]
fn meridian_point(center: Vec2, radius: f32, lambda: f32, phi: f32) -> Vec2 {
    Vec2::new(
        center.x + radius * lambda.sin() * phi.cos(),
        center.y + radius * phi.sin(),
    )
}

#[inline]
fn phi_at(i: usize, samples: usize) -> f32 {
    let t = i as f32 / samples as f32;
    -FRAC_PI_2 + t * PI
}

/// Sample a single meridian curve (open, south pole to north pole).
///
/// `samples` controls smoothness only, not shape; `samples + 1` points are
/// returned. Same inputs always produce the same sequence.
pub fn meridian_curve(center: Vec2, radius: f32, lambda_deg: f32, samples: usize) -> Vec<Vec2> {
    let samples = samples.max(1);
    let lambda = lambda_deg.to_radians();
    (0..=samples)
        .map(|i| meridian_point(center, radius, lambda, phi_at(i, samples)))
        .collect()
}

/// Sample the closed band between two meridians.
///
/// Traces the end meridian forward (south to north) then the start meridian
/// backward (north to south); the closing segment is implicit. This order
/// gives the fill winding renderers expect.
pub fn meridian_band(
    center: Vec2,
    radius: f32,
    lambda_start_deg: f32,
    lambda_end_deg: f32,
    samples: usize,
) -> Vec<Vec2> {
    let samples = samples.max(1);
    let lam_start = lambda_start_deg.to_radians();
    let lam_end = lambda_end_deg.to_radians();

    let mut points = Vec::with_capacity(2 * (samples + 1));
    for i in 0..=samples {
        points.push(meridian_point(center, radius, lam_end, phi_at(i, samples)));
    }
    for i in (0..=samples).rev() {
        points.push(meridian_point(center, radius, lam_start, phi_at(i, samples)));
    }
    points
}

/// Format a point sequence as SVG path data (`M x y L x y ... [Z]`)
pub fn svg_path_data(points: &[Vec2], closed: bool) -> String {
    let Some((first, rest)) = points.split_first() else {
        return String::new();
    };
    let mut d = format!("M {} {}", first.x, first.y);
    for p in rest {
        d.push_str(&format!(" L {} {}", p.x, p.y));
    }
    if closed {
        d.push_str(" Z");
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_curve_spans_pole_to_pole() {
        let center = Vec2::new(500.0, 500.0);
        let pts = meridian_curve(center, 450.0, 30.0, 72);
        assert_eq!(pts.len(), 73);

        // Both poles sit on the vertical axis regardless of longitude
        let south = pts[0];
        let north = pts[72];
        assert!((south.x - 500.0).abs() < EPS);
        assert!((south.y - 50.0).abs() < EPS);
        assert!((north.x - 500.0).abs() < EPS);
        assert!((north.y - 950.0).abs() < EPS);
    }

    #[test]
    fn test_curve_equator_offset() {
        let center = Vec2::ZERO;
        // At lambda = 90 the equator point lies on the rim
        let pts = meridian_curve(center, 100.0, 90.0, 2);
        let equator = pts[1];
        assert!((equator.x - 100.0).abs() < EPS);
        assert!(equator.y.abs() < EPS);

        // At lambda = 0 the whole meridian collapses onto the vertical axis
        let flat = meridian_curve(center, 100.0, 0.0, 8);
        assert!(flat.iter().all(|p| p.x.abs() < EPS));
    }

    #[test]
    fn test_band_is_closed_polygon() {
        let center = Vec2::new(500.0, 500.0);
        let pts = meridian_band(center, 450.0, -90.0, -75.0, 72);
        assert_eq!(pts.len(), 2 * 73);

        // Forward leg ends at the north pole, backward leg starts there
        assert!((pts[72].y - pts[73].y).abs() < EPS);
        // First and last points are both at the south pole (implicit closure)
        assert!((pts[0].y - pts.last().unwrap().y).abs() < EPS);
    }

    #[test]
    fn test_band_deterministic() {
        let center = Vec2::new(10.0, 20.0);
        let a = meridian_band(center, 50.0, -30.0, 0.0, 36);
        let b = meridian_band(center, 50.0, -30.0, 0.0, 36);
        assert_eq!(a, b);
    }

    #[test]
    fn test_degenerate_sample_count() {
        let pts = meridian_curve(Vec2::ZERO, 10.0, 45.0, 0);
        // Clamped to one segment: two points, no division by zero
        assert_eq!(pts.len(), 2);
    }

    #[test]
    fn test_svg_path_data() {
        let pts = vec![Vec2::new(0.0, 1.0), Vec2::new(2.0, 3.0)];
        assert_eq!(svg_path_data(&pts, false), "M 0 1 L 2 3");
        assert_eq!(svg_path_data(&pts, true), "M 0 1 L 2 3 Z");
        assert_eq!(svg_path_data(&[], true), "");
    }
}
