use std::fmt::Write;

use rand::Rng;

use crate::constants::FULL_TURN_DEGREES;
use crate::segment::{Segment, SegmentLayout};
use crate::shared_wheel_game::WheelSpinEngine;

pub const LABEL_RADIUS: f64 = 0.62;
const MAX_LABEL_CHARS: usize = 18;

/// What a renderer needs to draw one frame of the wheel.
#[derive(Debug, Clone, Copy)]
pub struct WheelFrame<'a> {
    pub segments: &'a [Segment],
    pub layout: SegmentLayout,
    pub rotation: f64,
    pub spinning: bool,
}

impl<'a> WheelFrame<'a> {
    pub fn of<R: Rng>(engine: &'a WheelSpinEngine<R>) -> Self {
        Self {
            segments: engine.visible_segments(),
            layout: engine.config().layout,
            rotation: engine.rotation(),
            spinning: engine.is_spinning(),
        }
    }
}

/// Rendering strategy for a wheel. The angle math lives here once; a
/// renderer only turns arcs and a pointer into pixels or markup.
pub trait WheelRenderer {
    type Output;

    fn render_segments(&mut self, frame: &WheelFrame<'_>);
    fn render_pointer(&mut self, frame: &WheelFrame<'_>);
    fn finish(self) -> Self::Output;
}

pub fn draw_wheel<W: WheelRenderer>(mut renderer: W, frame: &WheelFrame<'_>) -> W::Output {
    renderer.render_segments(frame);
    renderer.render_pointer(frame);
    renderer.finish()
}

/// A segment's span in degrees, clockwise from the top pointer, before
/// the wheel's rotation is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentArc {
    pub index: usize,
    pub start: f64,
    pub end: f64,
}

impl SegmentArc {
    pub fn sweep(&self) -> f64 {
        self.end - self.start
    }

    pub fn mid(&self) -> f64 {
        self.start + self.sweep() / 2.0
    }

    pub fn large_arc(&self) -> bool {
        self.sweep() > FULL_TURN_DEGREES / 2.0
    }

    pub fn is_full_circle(&self) -> bool {
        self.sweep() >= FULL_TURN_DEGREES
    }
}

pub fn segment_arcs(segments: &[Segment], layout: SegmentLayout) -> Vec<SegmentArc> {
    layout
        .spans(segments)
        .into_iter()
        .enumerate()
        .map(|(index, (start, end))| SegmentArc { index, start, end })
        .collect()
}

/// Screen point at `angle` degrees clockwise from the top of a circle.
pub fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    let rad = (angle - 90.0).to_radians();
    (cx + radius * rad.cos(), cy + radius * rad.sin())
}

/// Text orientation for a label running along the radius, flipped on the
/// left half so it never reads upside down.
pub fn radial_label_rotation(mid: f64) -> f64 {
    let mid = mid.rem_euclid(FULL_TURN_DEGREES);
    let left_side = mid > 180.0 && mid < FULL_TURN_DEGREES;
    mid - 90.0 + if left_side { 180.0 } else { 0.0 }
}

pub fn label_font_size(size: f64, segment_count: usize) -> f64 {
    let base = (size / 24.0).max(12.0);
    if segment_count > 20 {
        (base * 0.7).max(10.0)
    } else if segment_count > 12 {
        (base * 0.8).max(12.0)
    } else {
        base
    }
}

pub fn short_label(label: &str) -> String {
    if label.chars().count() <= MAX_LABEL_CHARS {
        return label.to_string();
    }
    let mut short: String = label.chars().take(MAX_LABEL_CHARS - 1).collect();
    short.push('…');
    short
}

/// Renders the wheel as a standalone SVG document.
pub struct SvgRenderer {
    size: f64,
    out: String,
}

impl SvgRenderer {
    pub fn new(size: f64) -> Self {
        let mut out = String::new();
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{s}" height="{s}" viewBox="0 0 {s} {s}">"#,
            s = size
        );
        Self { size, out }
    }

    fn center(&self) -> f64 {
        self.size / 2.0
    }

    fn radius(&self) -> f64 {
        self.size / 2.0 - 20.0
    }
}

impl WheelRenderer for SvgRenderer {
    type Output = String;

    fn render_segments(&mut self, frame: &WheelFrame<'_>) {
        let c = self.center();
        let r = self.radius();
        let font_size = label_font_size(self.size, frame.segments.len());

        let _ = write!(self.out, r#"<g transform="rotate({:.4} {} {})">"#, frame.rotation, c, c);
        for arc in segment_arcs(frame.segments, frame.layout) {
            let segment = &frame.segments[arc.index];
            let fill = escape_xml(&segment.color);

            if arc.is_full_circle() {
                let _ = write!(
                    self.out,
                    r#"<circle cx="{c}" cy="{c}" r="{r}" fill="{fill}" stroke="white" stroke-width="2"/>"#
                );
            } else {
                let (x1, y1) = polar(c, c, r, arc.start);
                let (x2, y2) = polar(c, c, r, arc.end);
                let _ = write!(
                    self.out,
                    r#"<path d="M {c} {c} L {x1:.3} {y1:.3} A {r} {r} 0 {large} 1 {x2:.3} {y2:.3} Z" fill="{fill}" stroke="white" stroke-width="2"/>"#,
                    large = arc.large_arc() as u8,
                );
            }

            let (tx, ty) = polar(c, c, r * LABEL_RADIUS, arc.mid());
            let _ = write!(
                self.out,
                r#"<text x="{tx:.3}" y="{ty:.3}" font-size="{font_size:.1}" fill="white" font-weight="bold" text-anchor="middle" dominant-baseline="middle" transform="rotate({rot:.3} {tx:.3} {ty:.3})">{label}</text>"#,
                rot = radial_label_rotation(arc.mid()),
                label = escape_xml(&short_label(&segment.label)),
            );
        }
        self.out.push_str("</g>");
    }

    fn render_pointer(&mut self, frame: &WheelFrame<'_>) {
        let c = self.center();
        let top = c - self.radius();
        let fill = if frame.spinning { "#ffd700" } else { "#f59e0b" };
        let _ = write!(
            self.out,
            r##"<polygon points="{l:.3},{t:.3} {rt:.3},{t:.3} {c:.3},{tip:.3}" fill="{fill}" stroke="#e69500" stroke-width="1.5"/>"##,
            l = c - 20.0,
            rt = c + 20.0,
            t = top - 18.0,
            tip = top + 12.0,
        );
    }

    fn finish(mut self) -> String {
        self.out.push_str("</svg>");
        self.out
    }
}

pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::Wheel;

    fn frame(segments: &[Segment]) -> WheelFrame<'_> {
        WheelFrame {
            segments,
            layout: SegmentLayout::Equal,
            rotation: 45.0,
            spinning: false,
        }
    }

    #[test]
    fn test_polar_zero_points_at_pointer() {
        let (x, y) = polar(100.0, 100.0, 50.0, 0.0);
        assert!((x - 100.0).abs() < 1e-9);
        assert!((y - 50.0).abs() < 1e-9);
        let (x, y) = polar(100.0, 100.0, 50.0, 90.0);
        assert!((x - 150.0).abs() < 1e-9);
        assert!((y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_svg_has_one_path_per_segment() {
        let wheel = Wheel::from_labels("w", "W", ["Red", "Blue", "Green"]);
        let svg = draw_wheel(SvgRenderer::new(400.0), &frame(&wheel.segments));
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("<path").count(), 3);
        assert_eq!(svg.matches("<text").count(), 3);
        assert!(svg.contains(r#"rotate(45.0000 200 200)"#));
        assert!(svg.contains("<polygon"));
    }

    #[test]
    fn test_single_segment_draws_full_circle() {
        let wheel = Wheel::from_labels("w", "W", ["Only"]);
        let svg = draw_wheel(SvgRenderer::new(300.0), &frame(&wheel.segments));
        assert_eq!(svg.matches("<circle").count(), 1);
        assert_eq!(svg.matches("<path").count(), 0);
    }

    #[test]
    fn test_labels_are_escaped() {
        let wheel = Wheel::from_labels("w", "W", ["Fish & <Chips>", "Tea"]);
        let svg = draw_wheel(SvgRenderer::new(300.0), &frame(&wheel.segments));
        assert!(svg.contains("Fish &amp; &lt;Chips&gt;"));
    }

    #[test]
    fn test_large_arc_flag() {
        let segments = vec![
            Segment::new("a", "A", "#111").with_weight(3.0),
            Segment::new("b", "B", "#222"),
        ];
        let arcs = segment_arcs(&segments, SegmentLayout::Weighted);
        assert!(arcs[0].large_arc());
        assert!(!arcs[1].large_arc());
    }

    #[test]
    fn test_left_half_labels_are_flipped() {
        assert_eq!(radial_label_rotation(45.0), -45.0);
        assert_eq!(radial_label_rotation(270.0), 360.0);
    }

    #[test]
    fn test_label_font_shrinks_with_crowding() {
        assert_eq!(label_font_size(700.0, 8), 700.0 / 24.0);
        assert!(label_font_size(700.0, 25) < label_font_size(700.0, 15));
        assert_eq!(short_label("A very long option label indeed").chars().count(), 18);
    }
}
