use log::warn;
use shared::segment::{SegmentLayout, Wheel};
use shared::storage::Settings;
use shared::SpinConfig;

pub const WHEEL_SIZE: u32 = 500;
pub const EXCLUDE_DELAY_MS: u32 = 2500;
pub const RELATED_TEMPLATES: usize = 4;
pub const CUSTOM_WHEEL_ID: &str = "custom";

/// Spin timing for the current settings. Weighted layout only kicks in
/// when the wheel actually carries weights.
pub fn spin_config(settings: &Settings, wheel: &Wheel) -> SpinConfig {
    let config = match settings.spin_time_secs {
        Some(secs) => SpinConfig::from_spin_time(secs, settings.spin_slowly),
        None if settings.reduced_motion => SpinConfig {
            min_turns: 1,
            max_turns: 2,
            min_duration_ms: 1000,
            max_duration_ms: 1000,
            ..SpinConfig::classic()
        },
        None if settings.spin_slowly => SpinConfig::physics(),
        None => SpinConfig::default(),
    };

    let layout = if wheel.segments.iter().any(|s| s.weight.is_some()) {
        SegmentLayout::Weighted
    } else {
        SegmentLayout::Equal
    };

    config.with_layout(layout).validated().unwrap_or_else(|e| {
        warn!("Falling back to default spin timing: {}", e);
        SpinConfig::default().with_layout(layout)
    })
}
