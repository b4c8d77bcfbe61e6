use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::constants::FULL_TURN_DEGREES;
use crate::motion::MotionCurve;
use crate::segment::{Segment, SegmentLayout, Wheel};
use crate::spin_config::SpinConfig;

/// Angle of the wheel face currently under the fixed top pointer.
///
/// Rotating the wheel clockwise by θ moves the pointer counter-clockwise by
/// θ relative to the face, hence the inversion.
pub fn pointer_angle(rotation: f64) -> f64 {
    (FULL_TURN_DEGREES - rotation.rem_euclid(FULL_TURN_DEGREES)).rem_euclid(FULL_TURN_DEGREES)
}

/// Index of the equal-width segment under the pointer, or `None` for an
/// empty wheel.
pub fn winning_index(rotation: f64, segment_count: usize) -> Option<usize> {
    if segment_count == 0 {
        return None;
    }
    let segment_angle = FULL_TURN_DEGREES / segment_count as f64;
    let index = (pointer_angle(rotation) / segment_angle).floor() as usize;
    Some(index % segment_count)
}

/// Index of the weight-proportional segment under the pointer.
pub fn winning_index_weighted(rotation: f64, segments: &[Segment]) -> Option<usize> {
    if segments.is_empty() {
        return None;
    }
    let pointer = pointer_angle(rotation);
    let spans = SegmentLayout::Weighted.spans(segments);
    spans
        .iter()
        .position(|&(_, end)| pointer < end)
        .or(Some(segments.len() - 1))
}

pub fn resolve_index(rotation: f64, segments: &[Segment], layout: SegmentLayout) -> Option<usize> {
    match layout {
        SegmentLayout::Equal => winning_index(rotation, segments.len()),
        SegmentLayout::Weighted => winning_index_weighted(rotation, segments),
    }
}

pub fn resolve_winner(rotation: f64, segments: &[Segment], layout: SegmentLayout) -> Option<&Segment> {
    resolve_index(rotation, segments, layout).and_then(|i| segments.get(i))
}

/// Everything decided when a spin starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinPlan {
    pub start_rotation: f64,
    pub target_rotation: f64,
    pub extra_turns: u32,
    pub final_angle: f64,
    pub duration_ms: f64,
    pub curve: MotionCurve,
}

impl SpinPlan {
    /// Degrees travelled by this spin.
    pub fn distance(&self) -> f64 {
        self.extra_turns as f64 * FULL_TURN_DEGREES + self.final_angle
    }

    pub fn progress_at(&self, elapsed_ms: f64) -> f64 {
        if elapsed_ms.is_nan() || elapsed_ms >= self.duration_ms {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).max(0.0)
    }

    /// Visual rotation `elapsed_ms` into the animation. Never exceeds the
    /// target and lands on it exactly once the duration has elapsed.
    pub fn rotation_at(&self, elapsed_ms: f64) -> f64 {
        let t = self.progress_at(elapsed_ms);
        if t >= 1.0 {
            return self.target_rotation;
        }
        let eased = self.curve.sample(t, self.duration_ms);
        (self.start_rotation + (self.target_rotation - self.start_rotation) * eased)
            .min(self.target_rotation)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSpin {
    pub plan: SpinPlan,
    // Segments frozen at spin start; resolution never sees later edits
    pub segments: Vec<Segment>,
    pub layout: SegmentLayout,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SpinState {
    Idle,
    Spinning(ActiveSpin),
}

/// Emitted exactly once per completed spin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinOutcome {
    pub segment: Segment,
    pub index: usize,
    pub rotation: f64,
    pub pointer_angle: f64,
    pub plan: SpinPlan,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SpinTick {
    Idle,
    Animating { rotation: f64, progress: f64 },
    Completed(SpinOutcome),
}

/// Turns a spin request into a target rotation, animates toward it, and
/// maps the resting angle to a winning segment.
///
/// The engine is host-driven: call [`spin`](Self::spin) on a user trigger,
/// then [`advance`](Self::advance) from the host's frame callback with the
/// time elapsed since the spin started.
pub struct WheelSpinEngine<R = StdRng> {
    wheel: Wheel,
    config: SpinConfig,
    rotation: f64,
    visual_rotation: f64,
    state: SpinState,
    rng: R,
}

impl WheelSpinEngine<StdRng> {
    pub fn new(wheel: Wheel, config: SpinConfig) -> Self {
        Self::with_rng(wheel, config, StdRng::from_entropy())
    }
}

impl<R: Rng> WheelSpinEngine<R> {
    pub fn with_rng(wheel: Wheel, config: SpinConfig, rng: R) -> Self {
        Self {
            wheel,
            config,
            rotation: 0.0,
            visual_rotation: 0.0,
            state: SpinState::Idle,
            rng,
        }
    }

    pub fn wheel(&self) -> &Wheel {
        &self.wheel
    }

    pub fn config(&self) -> &SpinConfig {
        &self.config
    }

    pub fn state(&self) -> &SpinState {
        &self.state
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.state, SpinState::Spinning(_))
    }

    /// False while the wheel has no visible segment.
    pub fn is_ready(&self) -> bool {
        !self.visible_segments().is_empty()
    }

    pub fn can_spin(&self) -> bool {
        self.is_ready() && !self.is_spinning()
    }

    pub fn visible_segments(&self) -> &[Segment] {
        self.wheel.visible(self.config.max_visible_segments)
    }

    /// Rotation to draw right now.
    pub fn rotation(&self) -> f64 {
        self.visual_rotation
    }

    /// Rotation reached by the last completed spin.
    pub fn committed_rotation(&self) -> f64 {
        self.rotation
    }

    /// Swaps the wheel wholesale. A spin in progress keeps resolving
    /// against the segments it started with.
    pub fn replace_wheel(&mut self, wheel: Wheel) {
        self.wheel = wheel;
    }

    /// Takes effect from the next spin.
    pub fn set_config(&mut self, config: SpinConfig) {
        self.config = config;
    }

    /// Starts a spin. Returns `None` without side effects when a spin is
    /// already running or the wheel has nothing to land on.
    pub fn spin(&mut self) -> Option<SpinPlan> {
        if self.is_spinning() {
            debug!("Ignoring spin request: wheel is already spinning");
            return None;
        }
        let segments = self.visible_segments().to_vec();
        if segments.is_empty() {
            debug!("Ignoring spin request: wheel has no segments");
            return None;
        }

        let (min_turns, max_turns) = ordered(self.config.min_turns, self.config.max_turns);
        let (min_ms, max_ms) = ordered(self.config.min_duration_ms, self.config.max_duration_ms);

        let extra_turns = self.rng.gen_range(min_turns..=max_turns);
        let final_angle = self.rng.gen_range(0.0..FULL_TURN_DEGREES);
        let duration_ms = if min_ms == max_ms {
            min_ms as f64
        } else {
            self.rng.gen_range(min_ms..=max_ms) as f64
        };

        let mut plan = SpinPlan {
            start_rotation: self.rotation,
            target_rotation: self.rotation,
            extra_turns,
            final_angle,
            duration_ms,
            curve: self.config.curve,
        };
        plan.target_rotation = self.rotation + plan.distance();

        debug!(
            "Spin started: {} turns + {:.2}° over {} ms ({} segments)",
            extra_turns,
            final_angle,
            duration_ms,
            segments.len()
        );

        self.state = SpinState::Spinning(ActiveSpin {
            plan: plan.clone(),
            segments,
            layout: self.config.layout,
        });
        Some(plan)
    }

    /// Moves the animation to `elapsed_ms` since the spin started. Yields
    /// `Completed` exactly once, when the duration has elapsed.
    pub fn advance(&mut self, elapsed_ms: f64) -> SpinTick {
        let plan = match &self.state {
            SpinState::Idle => return SpinTick::Idle,
            SpinState::Spinning(active) => &active.plan,
        };

        let progress = plan.progress_at(elapsed_ms);
        if progress >= 1.0 {
            return match self.complete() {
                Some(outcome) => SpinTick::Completed(outcome),
                None => SpinTick::Idle,
            };
        }

        let rotation = plan.rotation_at(elapsed_ms).max(self.visual_rotation);
        self.visual_rotation = rotation;
        SpinTick::Animating { rotation, progress }
    }

    /// Jumps straight to the target and resolves. Used when the host has no
    /// animation timing available, so a spin never stays stuck.
    pub fn finish_now(&mut self) -> Option<SpinOutcome> {
        self.complete()
    }

    /// Returns the wheel to zero rotation. Ignored while spinning.
    pub fn reset(&mut self) -> bool {
        if self.is_spinning() {
            return false;
        }
        self.rotation = 0.0;
        self.visual_rotation = 0.0;
        true
    }

    fn complete(&mut self) -> Option<SpinOutcome> {
        let active = match std::mem::replace(&mut self.state, SpinState::Idle) {
            SpinState::Idle => return None,
            SpinState::Spinning(active) => active,
        };

        let rotation = active.plan.target_rotation;
        self.rotation = rotation;
        self.visual_rotation = rotation;

        let Some(index) = resolve_index(rotation, &active.segments, active.layout) else {
            warn!("Spin finished without segments to resolve against");
            return None;
        };
        let segment = active.segments[index].clone();
        debug!("Spin completed: {} (index {})", segment.label, index);

        Some(SpinOutcome {
            segment,
            index,
            rotation,
            pointer_angle: pointer_angle(rotation),
            plan: active.plan,
        })
    }
}

fn ordered(a: u32, b: u32) -> (u32, u32) {
    if a <= b { (a, b) } else { (b, a) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rainbow() -> Wheel {
        Wheel::from_labels("rainbow", "Rainbow", ["Red", "Blue", "Green", "Yellow"])
    }

    fn seeded(wheel: Wheel, config: SpinConfig, seed: u64) -> WheelSpinEngine<StdRng> {
        WheelSpinEngine::with_rng(wheel, config, StdRng::seed_from_u64(seed))
    }

    fn frequencies(wheel: Wheel, config: SpinConfig, spins: usize) -> Vec<f64> {
        let n = wheel.len();
        let mut engine = seeded(wheel, config, 42);
        let mut counts = vec![0usize; n];
        for _ in 0..spins {
            engine.spin().unwrap();
            let outcome = engine.finish_now().unwrap();
            counts[outcome.index] += 1;
        }
        counts.iter().map(|&c| c as f64 / spins as f64).collect()
    }

    #[test]
    fn test_uniform_win_frequency() {
        for freq in frequencies(rainbow(), SpinConfig::default(), 100_000) {
            assert!((freq - 0.25).abs() < 0.01, "frequency {} too far from 1/4", freq);
        }

        let three = Wheel::from_labels("t", "T", ["a", "much longer label", "c"]);
        for freq in frequencies(three, SpinConfig::classic(), 60_000) {
            assert!((freq - 1.0 / 3.0).abs() < 0.01, "frequency {} too far from 1/3", freq);
        }
    }

    #[test]
    fn test_weighted_layout_biases_selection() {
        let wheel = Wheel::new(
            "w",
            "W",
            vec![
                Segment::new("a", "A", "#fff").with_weight(3.0),
                Segment::new("b", "B", "#000"),
            ],
        );
        let config = SpinConfig::default().with_layout(SegmentLayout::Weighted);
        let freqs = frequencies(wheel, config, 40_000);
        assert!((freqs[0] - 0.75).abs() < 0.01);
    }

    #[test]
    fn test_huge_stored_weights_still_split_the_wheel() {
        let segments = vec![
            Segment::new("a", "A", "#fff").with_weight(1e308),
            Segment::new("b", "B", "#000").with_weight(1e308),
        ];
        assert_eq!(winning_index_weighted(300.0, &segments), Some(0));
        assert_eq!(winning_index_weighted(200.0, &segments), Some(0));
        assert_eq!(winning_index_weighted(100.0, &segments), Some(1));
        assert_eq!(winning_index_weighted(10.0, &segments), Some(1));
    }

    #[test]
    fn test_resolution_is_deterministic() {
        for n in 1..=12usize {
            for r in 0..3600u32 {
                let rotation = r as f64;
                let pointer = (360 - r % 360) % 360;
                let expected = (pointer as usize * n) / 360;
                assert_eq!(winning_index(rotation, n), Some(expected), "n={} r={}", n, r);
                assert_eq!(winning_index(rotation, n), winning_index(rotation + 360.0, n));
            }
        }
    }

    #[test]
    fn test_boundary_wraps_to_first_segment() {
        assert_eq!(winning_index(0.0, 4), Some(0));
        assert_eq!(winning_index(720.0, 4), Some(0));
        assert_eq!(winning_index(359.999, 4), Some(0));
        assert_eq!(winning_index(1079.999, 4), Some(0));
        assert_eq!(winning_index(0.001, 4), Some(3));
    }

    #[test]
    fn test_concrete_trace_lands_on_green() {
        let wheel = rainbow();
        let rotation = 7.0 * 360.0 + 95.0;
        assert!((pointer_angle(rotation) - 265.0).abs() < 1e-9);
        let winner = resolve_winner(rotation, &wheel.segments, SegmentLayout::Equal).unwrap();
        assert_eq!(winner.label, "Green");
    }

    #[test]
    fn test_single_segment_always_wins() {
        for r in [0.0, 0.5, 90.0, 359.999, 1234.5678, 1e9] {
            assert_eq!(winning_index(r, 1), Some(0));
        }
        let mut engine = seeded(Wheel::from_labels("one", "One", ["Only"]), SpinConfig::default(), 7);
        for _ in 0..50 {
            engine.spin().unwrap();
            assert_eq!(engine.finish_now().unwrap().segment.label, "Only");
        }
    }

    #[test]
    fn test_empty_wheel_is_not_ready() {
        assert_eq!(winning_index(10.0, 0), None);
        let mut engine = seeded(Wheel::new("e", "Empty", vec![]), SpinConfig::default(), 1);
        assert!(!engine.is_ready());
        assert!(engine.spin().is_none());
        assert_eq!(engine.advance(10_000.0), SpinTick::Idle);
        assert!(engine.finish_now().is_none());
    }

    #[test]
    fn test_second_spin_is_ignored_while_spinning() {
        let mut engine = seeded(rainbow(), SpinConfig::default(), 3);
        let plan = engine.spin().unwrap();
        assert!(engine.spin().is_none());
        assert!(!engine.can_spin());

        assert!(matches!(engine.advance(plan.duration_ms / 2.0), SpinTick::Animating { .. }));
        assert!(engine.spin().is_none());

        let completed = engine.advance(plan.duration_ms);
        assert!(matches!(completed, SpinTick::Completed(_)));
        assert_eq!(engine.advance(plan.duration_ms + 1.0), SpinTick::Idle);
        assert_eq!(engine.committed_rotation(), plan.target_rotation);
        assert!(engine.can_spin());
    }

    #[test]
    fn test_rotation_accumulates_without_wrapping() {
        let mut engine = seeded(rainbow(), SpinConfig::physics(), 11);
        let mut expected = 0.0;
        for _ in 0..10 {
            let plan = engine.spin().unwrap();
            assert_eq!(plan.start_rotation, engine.committed_rotation());
            expected += plan.distance();
            engine.advance(f64::INFINITY);
        }
        assert!((engine.committed_rotation() - expected).abs() < 1e-6);
        assert!(engine.committed_rotation() > 10.0 * 5.0 * 360.0);
    }

    #[test]
    fn test_animation_is_monotonic_and_ends_on_target() {
        for config in [SpinConfig::default(), SpinConfig::physics(), SpinConfig::from_spin_time(5, false)] {
            let mut engine = seeded(rainbow(), config, 5);
            engine.spin().unwrap();
            engine.advance(f64::INFINITY);

            let plan = engine.spin().unwrap();
            let mut last = plan.start_rotation;
            let mut elapsed = 0.0;
            loop {
                match engine.advance(elapsed) {
                    SpinTick::Animating { rotation, .. } => {
                        assert!(rotation >= last);
                        assert!(rotation <= plan.target_rotation);
                        last = rotation;
                    }
                    SpinTick::Completed(outcome) => {
                        assert_eq!(outcome.rotation, plan.target_rotation);
                        break;
                    }
                    SpinTick::Idle => panic!("spin vanished before completing"),
                }
                elapsed += 16.0;
            }
            assert_eq!(engine.rotation(), plan.target_rotation);
        }
    }

    #[test]
    fn test_winner_uses_segments_frozen_at_spin_start() {
        let mut engine = seeded(rainbow(), SpinConfig::default(), 9);
        let plan = engine.spin().unwrap();
        engine.replace_wheel(Wheel::from_labels("small", "Small", ["Solo"]));

        let outcome = engine.finish_now().unwrap();
        let expected = winning_index(plan.target_rotation, 4).unwrap();
        assert_eq!(outcome.index, expected);
        assert_eq!(outcome.segment, rainbow().segments[expected]);
        assert_eq!(engine.wheel().len(), 1);
    }

    #[test]
    fn test_non_finite_elapsed_completes() {
        let mut engine = seeded(rainbow(), SpinConfig::default(), 2);
        engine.spin().unwrap();
        assert!(matches!(engine.advance(f64::NAN), SpinTick::Completed(_)));
        assert!(!engine.is_spinning());
    }

    #[test]
    fn test_progress_saturates_at_duration() {
        let plan = SpinPlan {
            start_rotation: 0.0,
            target_rotation: 1800.0,
            extra_turns: 5,
            final_angle: 0.0,
            duration_ms: 1000.0,
            curve: MotionCurve::default(),
        };
        assert_eq!(plan.progress_at(-5.0), 0.0);
        assert_eq!(plan.progress_at(500.0), 0.5);
        assert_eq!(plan.progress_at(1000.0), 1.0);
        assert_eq!(plan.progress_at(f64::INFINITY), 1.0);
        assert_eq!(plan.progress_at(f64::NAN), 1.0);
        assert_eq!(plan.rotation_at(f64::NAN), 1800.0);
    }

    #[test]
    fn test_visible_limit_restricts_winners() {
        let wheel = Wheel::from_labels("w", "W", (0..10).map(|i| format!("Option {}", i)));
        let config = SpinConfig {
            max_visible_segments: 4,
            ..SpinConfig::default()
        };
        let mut engine = seeded(wheel, config, 13);
        for _ in 0..200 {
            engine.spin().unwrap();
            assert!(engine.finish_now().unwrap().index < 4);
        }
    }

    #[test]
    fn test_reset_only_when_idle() {
        let mut engine = seeded(rainbow(), SpinConfig::default(), 4);
        engine.spin().unwrap();
        assert!(!engine.reset());
        engine.finish_now().unwrap();
        assert!(engine.reset());
        assert_eq!(engine.rotation(), 0.0);
        assert_eq!(engine.committed_rotation(), 0.0);
    }

    #[test]
    fn test_inverted_config_ranges_do_not_panic() {
        let config = SpinConfig {
            min_turns: 6,
            max_turns: 3,
            min_duration_ms: 4000,
            max_duration_ms: 2000,
            ..SpinConfig::default()
        };
        let mut engine = seeded(rainbow(), config, 8);
        let plan = engine.spin().unwrap();
        assert!((3..=6).contains(&plan.extra_turns));
        assert!((2000.0..=4000.0).contains(&plan.duration_ms));
    }
}
