//! SVG rendering of a point set and its closest pair.
//!
//! All points are blue dots; the pair is drawn in green, joined by a segment,
//! with `dmin = <distance>` written at its midpoint. The viewBox is in data
//! coordinates with y flipped so that y grows upwards.

use anyhow::Result;
use closest::{ClosestPair, Point2};
use std::io;

const GRID_LINES: usize = 10;

pub fn write_svg<W>(mut w: W, points: &[Point2], best: &ClosestPair) -> Result<()>
where
    W: io::Write,
{
    let (mut xmin, mut ymin) = (f64::INFINITY, f64::INFINITY);
    let (mut xmax, mut ymax) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in points {
        xmin = xmin.min(p.x);
        xmax = xmax.max(p.x);
        ymin = ymin.min(p.y);
        ymax = ymax.max(p.y);
    }
    if !(xmin.is_finite() && ymin.is_finite()) {
        return Ok(());
    }
    // pad so points on the hull are not clipped; degenerate boxes get a unit pad
    let pad = 0.05 * (xmax - xmin).max(ymax - ymin).max(1.0);
    let (xmin, ymin, xmax, ymax) = (xmin - pad, ymin - pad, xmax + pad, ymax + pad);
    let width = xmax - xmin;
    let height = ymax - ymin;
    let flip = |y: f64| ymax - y + ymin;
    let r = 0.004 * width.max(height);

    writeln!(
        w,
        r#"<svg viewBox="{xmin} {ymin} {width} {height}" xmlns="http://www.w3.org/2000/svg">"#,
    )?;

    write!(w, r##"<path stroke="#dddddd" stroke-width="{}" d=""##, r / 4.0)?;
    for k in 0..=GRID_LINES {
        let t = k as f64 / GRID_LINES as f64;
        let gx = xmin + t * width;
        let gy = ymin + t * height;
        write!(w, " M{gx},{ymin} L{gx},{ymax} M{xmin},{gy} L{xmax},{gy}")?;
    }
    writeln!(w, "\"/>")?;

    for p in points {
        writeln!(
            w,
            r##"<circle cx="{}" cy="{}" r="{r}" fill="#1f4fd1"/>"##,
            p.x,
            flip(p.y)
        )?;
    }

    let (a, b) = best.pair();
    writeln!(
        w,
        r##"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="#1a9e2a" stroke-width="{}"/>"##,
        a.x,
        flip(a.y),
        b.x,
        flip(b.y),
        r / 2.0
    )?;
    for p in [a, b] {
        writeln!(
            w,
            r##"<circle cx="{}" cy="{}" r="{}" fill="#1a9e2a"/>"##,
            p.x,
            flip(p.y),
            r * 1.5
        )?;
    }
    let m = best.midpoint();
    writeln!(
        w,
        r##"<text x="{}" y="{}" font-size="{}" fill="#1a9e2a">  dmin = {:.3}</text>"##,
        m.x,
        flip(m.y),
        r * 6.0,
        best.distance
    )?;

    writeln!(w, "</svg>")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_marks_pair_and_label() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 4.0),
            Point2::new(1.0, 1.0),
        ];
        let best = closest::closest_pair(&pts).unwrap();
        let mut buf = Vec::new();
        write_svg(&mut buf, &pts, &best).unwrap();
        let svg = String::from_utf8(buf).unwrap();
        assert!(svg.starts_with("<svg viewBox="));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("fill=\"#1f4fd1\"").count(), 3);
        assert_eq!(svg.matches("fill=\"#1a9e2a\"/>").count(), 2);
        assert!(svg.contains("dmin = 1.414"));
    }
}
