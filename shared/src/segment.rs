use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PALETTE, FULL_TURN_DEGREES, MAX_WEIGHT, MIN_WEIGHT};

static NON_SLUG_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// One labeled slice of a wheel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub id: String,
    pub label: String,
    pub color: String,
    // Only consulted under SegmentLayout::Weighted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl Segment {
    pub fn new(id: impl Into<String>, label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            color: color.into(),
            weight: None,
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Weight used for weighted partitioning. Missing, non-finite or
    /// non-positive weights count as 1.0; the rest are clamped to the
    /// editor's range so stored wheels cannot overflow the total.
    pub fn effective_weight(&self) -> f64 {
        match self.weight {
            Some(w) if w.is_finite() && w > 0.0 => w.clamp(MIN_WEIGHT, MAX_WEIGHT),
            _ => 1.0,
        }
    }
}

/// How the full turn is divided between segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentLayout {
    /// Every segment spans 360/n degrees; weights are ignored.
    #[default]
    Equal,
    /// Segment i spans 360 * w_i / sum(w) degrees.
    Weighted,
}

impl SegmentLayout {
    /// Angular spans `(start, end)` in degrees, measured clockwise from the
    /// pointer on the wheel face, in segment order.
    pub fn spans(self, segments: &[Segment]) -> Vec<(f64, f64)> {
        let n = segments.len();
        if n == 0 {
            return Vec::new();
        }

        match self {
            SegmentLayout::Equal => {
                let width = FULL_TURN_DEGREES / n as f64;
                (0..n)
                    .map(|i| (i as f64 * width, (i + 1) as f64 * width))
                    .collect()
            }
            SegmentLayout::Weighted => {
                let total: f64 = segments.iter().map(Segment::effective_weight).sum();
                let mut start = 0.0;
                let mut spans = Vec::with_capacity(n);
                for (i, segment) in segments.iter().enumerate() {
                    let end = if i + 1 == n {
                        FULL_TURN_DEGREES
                    } else {
                        start + FULL_TURN_DEGREES * segment.effective_weight() / total
                    };
                    spans.push((start, end));
                    start = end;
                }
                spans
            }
        }
    }

    pub fn span(self, segments: &[Segment], index: usize) -> Option<(f64, f64)> {
        if index >= segments.len() {
            return None;
        }
        match self {
            SegmentLayout::Equal => {
                let width = FULL_TURN_DEGREES / segments.len() as f64;
                Some((index as f64 * width, (index + 1) as f64 * width))
            }
            SegmentLayout::Weighted => self.spans(segments).get(index).copied(),
        }
    }
}

/// An ordered sequence of segments. Order determines angular position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wheel {
    pub id: String,
    pub name: String,
    pub segments: Vec<Segment>,
}

impl Wheel {
    pub fn new(id: impl Into<String>, name: impl Into<String>, segments: Vec<Segment>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            segments,
        }
    }

    /// Builds a wheel from plain option labels, assigning stable ids and
    /// cycling through the default palette.
    pub fn from_labels<I, S>(id: impl Into<String>, name: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let segments = labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| {
                let label = label.as_ref();
                Segment::new(segment_id(label, i), label, palette_color(i))
            })
            .collect();
        Self::new(id, name, segments)
    }

    /// A wheel needs at least one segment before it can spin.
    pub fn is_ready(&self) -> bool {
        !self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The first `max` segments; only these are drawn and take part in a spin.
    pub fn visible(&self, max: usize) -> &[Segment] {
        &self.segments[..self.segments.len().min(max)]
    }

    pub fn segment(&self, id: &str) -> Option<&Segment> {
        self.segments.iter().find(|s| s.id == id)
    }
}

pub fn palette_color(index: usize) -> &'static str {
    DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()]
}

pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    NON_SLUG_CHARS.replace_all(&lower, "-").trim_matches('-').to_string()
}

pub(crate) fn segment_id(label: &str, index: usize) -> String {
    let slug = slugify(label);
    if slug.is_empty() {
        format!("option-{}", index)
    } else {
        format!("{}-{}", slug, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors() -> Vec<Segment> {
        Wheel::from_labels("colors", "Colors", ["Red", "Blue", "Green", "Yellow"]).segments
    }

    #[test]
    fn test_from_labels_assigns_ids_and_palette() {
        let wheel = Wheel::from_labels("w", "W", ["Movie Night", "Cook Together"]);
        assert_eq!(wheel.segments[0].id, "movie-night-0");
        assert_eq!(wheel.segments[1].id, "cook-together-1");
        assert_eq!(wheel.segments[0].color, "#FF5252");
        assert_eq!(wheel.segments[1].color, "#2196F3");
        assert!(wheel.is_ready());
    }

    #[test]
    fn test_equal_spans_cover_full_turn() {
        let spans = SegmentLayout::Equal.spans(&colors());
        assert_eq!(spans, vec![(0.0, 90.0), (90.0, 180.0), (180.0, 270.0), (270.0, 360.0)]);
    }

    #[test]
    fn test_weighted_spans_follow_weights() {
        let mut segments = colors();
        segments[0].weight = Some(2.0);
        segments[3].weight = Some(-5.0); // treated as 1.0
        let spans = SegmentLayout::Weighted.spans(&segments);
        assert!((spans[0].1 - 144.0).abs() < 1e-9);
        assert!((spans[1].1 - 216.0).abs() < 1e-9);
        assert_eq!(spans[3].1, 360.0);
    }

    #[test]
    fn test_out_of_range_weights_are_clamped() {
        let mut segments = colors();
        segments[0].weight = Some(1e308);
        segments[1].weight = Some(1e308);
        segments[2].weight = Some(0.25);
        segments[3].weight = Some(f64::NAN);
        assert_eq!(segments[0].effective_weight(), MAX_WEIGHT);
        assert_eq!(segments[2].effective_weight(), MIN_WEIGHT);
        assert_eq!(segments[3].effective_weight(), 1.0);

        let spans = SegmentLayout::Weighted.spans(&segments);
        assert!(spans.iter().all(|&(start, end)| start.is_finite() && end.is_finite()));
        // 10 + 10 + 1 + 1
        assert!((spans[0].1 - 3600.0 / 22.0).abs() < 1e-9);
        assert!((spans[1].1 - 7200.0 / 22.0).abs() < 1e-9);
        assert_eq!(spans[3].1, 360.0);
    }

    #[test]
    fn test_equal_layout_ignores_weight() {
        let mut segments = colors();
        segments[0].weight = Some(9.0);
        assert_eq!(SegmentLayout::Equal.span(&segments, 0), Some((0.0, 90.0)));
        assert_eq!(SegmentLayout::Equal.span(&segments, 4), None);
    }

    #[test]
    fn test_visible_caps_segments() {
        let wheel = Wheel::from_labels("w", "W", ["a", "b", "c"]);
        assert_eq!(wheel.visible(2).len(), 2);
        assert_eq!(wheel.visible(10).len(), 3);
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("  Pizza Slice! "), "pizza-slice");
        assert_eq!(segment_id("!!!", 3), "option-3");
    }
}
