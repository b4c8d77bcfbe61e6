use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::constants::*;
use crate::error::WheelError;
use crate::motion::MotionCurve;
use crate::segment::SegmentLayout;

/// Host-supplied spin settings. Turn counts are whole turns; the final
/// resting angle is drawn separately so fairness never depends on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_spin_config"))]
#[serde(default)]
pub struct SpinConfig {
    #[validate(range(min = 1, max = 100))]
    pub min_turns: u32,
    #[validate(range(min = 1, max = 100))]
    pub max_turns: u32,
    #[validate(range(min = 100, max = 120000))]
    pub min_duration_ms: u32,
    #[validate(range(min = 100, max = 120000))]
    pub max_duration_ms: u32,
    pub curve: MotionCurve,
    pub layout: SegmentLayout,
    #[validate(range(min = 1, max = 1000))]
    pub max_visible_segments: usize,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            min_turns: MIN_SPINS,
            max_turns: MAX_SPINS,
            min_duration_ms: SPIN_DURATION_MS,
            max_duration_ms: SPIN_DURATION_MS,
            curve: MotionCurve::EaseOutQuart,
            layout: SegmentLayout::Equal,
            max_visible_segments: MAX_VISIBLE_SEGMENTS,
        }
    }
}

impl SpinConfig {
    /// Simple CSS-transform wheel: 3-6 turns over 2-4 seconds.
    pub fn classic() -> Self {
        Self {
            min_turns: 3,
            max_turns: 6,
            min_duration_ms: 2000,
            max_duration_ms: 4000,
            ..Self::default()
        }
    }

    /// Canvas wheel with friction deceleration: 5-10 turns.
    pub fn physics() -> Self {
        Self {
            min_turns: 5,
            max_turns: 10,
            min_duration_ms: 4000,
            max_duration_ms: 6000,
            curve: MotionCurve::friction(),
            ..Self::default()
        }
    }

    /// Settings-panel wheel driven by a user-chosen spin time in seconds.
    /// A short linear phase builds momentum, then the wheel glides to a stop.
    pub fn from_spin_time(spin_time_secs: u32, spin_slowly: bool) -> Self {
        let secs = spin_time_secs.clamp(MIN_SPIN_TIME_SECS, MAX_SPIN_TIME_SECS) as f64;
        let base = if spin_slowly { 3.0 } else { 6.0 };
        let min_turns = (base + secs - 4.0).max(1.0);
        let max_turns = (min_turns + 6.0).min(MAX_TURNS as f64);

        let linear_secs = (secs * 0.15).max(0.5);
        let glide_secs = (secs * 0.85).max(2.5);
        let total_ms = ((linear_secs + glide_secs) * 1000.0).round() as u32;

        let mean_turns = (min_turns + max_turns) / 2.0;
        let linear_distance = ((mean_turns - 2.0) / mean_turns).max(0.0);

        Self {
            min_turns: min_turns as u32,
            max_turns: max_turns as u32,
            min_duration_ms: total_ms,
            max_duration_ms: total_ms,
            curve: MotionCurve::TwoPhase {
                linear_share: linear_secs / (linear_secs + glide_secs),
                linear_distance,
            },
            ..Self::default()
        }
    }

    pub fn with_layout(mut self, layout: SegmentLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn validated(self) -> Result<Self, WheelError> {
        self.validate()?;
        Ok(self)
    }

    pub fn is_fixed_duration(&self) -> bool {
        self.min_duration_ms == self.max_duration_ms
    }
}

fn validate_spin_config(config: &SpinConfig) -> Result<(), ValidationError> {
    if config.min_turns > config.max_turns {
        return Err(ValidationError::new("turn_range_inverted"));
    }
    if config.min_duration_ms > config.max_duration_ms {
        return Err(ValidationError::new("duration_range_inverted"));
    }
    match config.curve {
        MotionCurve::EaseOutQuart => Ok(()),
        MotionCurve::TwoPhase {
            linear_share,
            linear_distance,
        } => {
            if !(0.0..1.0).contains(&linear_share) || !(0.0..=1.0).contains(&linear_distance) {
                return Err(ValidationError::new("invalid_two_phase_curve"));
            }
            Ok(())
        }
        MotionCurve::Friction { per_frame } => {
            if !(per_frame > 0.0 && per_frame < 1.0) {
                return Err(ValidationError::new("invalid_friction"));
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        for config in [
            SpinConfig::default(),
            SpinConfig::classic(),
            SpinConfig::physics(),
            SpinConfig::from_spin_time(1, true),
            SpinConfig::from_spin_time(60, false),
        ] {
            assert!(config.clone().validated().is_ok(), "{:?}", config);
        }
    }

    #[test]
    fn test_inverted_turn_range_is_rejected() {
        let config = SpinConfig {
            min_turns: 8,
            max_turns: 3,
            ..SpinConfig::default()
        };
        assert!(matches!(config.validated(), Err(WheelError::Validation(_))));
    }

    #[test]
    fn test_zero_turns_is_rejected() {
        let config = SpinConfig {
            min_turns: 0,
            ..SpinConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_friction_is_rejected() {
        let config = SpinConfig {
            curve: MotionCurve::Friction { per_frame: 1.0 },
            ..SpinConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_spin_time_matches_settings_panel() {
        let config = SpinConfig::from_spin_time(20, false);
        assert_eq!(config.min_turns, 22);
        assert_eq!(config.max_turns, 28);
        assert_eq!(config.min_duration_ms, 20000);
        assert!(config.is_fixed_duration());

        let slow = SpinConfig::from_spin_time(1, true);
        assert_eq!(slow.min_turns, 1);
        assert_eq!(slow.max_turns, 7);
        // 0.5 s minimum linear phase plus 2.5 s minimum glide
        assert_eq!(slow.min_duration_ms, 3000);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SpinConfig =
            serde_json::from_str(r#"{"min_turns": 3, "max_turns": 4, "layout": "weighted"}"#).unwrap();
        assert_eq!(config.min_turns, 3);
        assert_eq!(config.layout, SegmentLayout::Weighted);
        assert_eq!(config.min_duration_ms, SPIN_DURATION_MS);
        assert_eq!(config.curve, MotionCurve::EaseOutQuart);
    }
}
