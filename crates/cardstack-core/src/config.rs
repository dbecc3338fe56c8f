//! Configuration surface for a card stack instance.

/// Default tuning constants.
pub mod defaults {
    /// Fraction of the viewport a drag must cover to accept a swipe.
    pub const SWIPE_THRESHOLD_FRACTION: f32 = 0.35;
    /// Fraction of the swipe threshold at which the predictive index
    /// advances (measured in progress units, so 0.5 = half way to the
    /// dismiss threshold).
    pub const COMMIT_THRESHOLD: f32 = 0.5;
    /// Degrees of front-card rotation at a full-viewport-width drag.
    pub const ROTATION_MULTIPLIER: f32 = 15.0;
    /// Exit distance as a multiple of the viewport dimension.
    pub const EXIT_MULTIPLIER: f32 = 1.5;
    pub const DISMISS_DURATION_MS: i64 = 800;
    pub const SNAP_BACK_STIFFNESS: f32 = 300.0;
    pub const SNAP_BACK_DAMPING_RATIO: f32 = 0.75;
    /// Hard cap on the spring settle time.
    pub const SNAP_BACK_MAX_DURATION_MS: i64 = 1200;
    /// Release velocity (px/s, dominant axis) above which a swipe is
    /// accepted regardless of distance.
    pub const FLING_VELOCITY_THRESHOLD: f32 = 2500.0;
    /// Deadzone below which a displacement has no direction.
    pub const MIN_DIRECTION_THRESHOLD: f32 = 10.0;
    pub const CARD_SCALE_STEP: f32 = 0.05;
    /// Pixels each deeper card is raised when fully revealed.
    pub const CARD_OFFSET_STEP: f32 = 24.0;
    pub const VISIBLE_CARDS: usize = 3;
    /// Visual progress granted by merely touching, before any drag, so the
    /// stack pops open on press.
    pub const TOUCH_BASE_PROGRESS: f32 = 0.2;
    pub const CARD_CORNER_RADIUS: f32 = 20.0;
    pub const CARD_HORIZONTAL_INSET: f32 = 16.0;
    pub const CARD_SHADOW_ELEVATION: f32 = 8.0;
    /// Per-depth multiplicative falloff of shadow elevation.
    pub const SHADOW_ELEVATION_DECAY: f32 = 0.3;
    /// Progress at which the predictive scroll hint is published to the
    /// playback host, well before the commit threshold.
    pub const SCROLL_HINT_THRESHOLD: f32 = 0.15;
}

/// All recognized tuning options for one stack instance.
///
/// Construct with [`StackConfig::default`] and override fields as needed;
/// the defaults match the production reel feed.
#[derive(Debug, Clone, PartialEq)]
pub struct StackConfig {
    pub swipe_threshold_fraction: f32,
    pub commit_threshold: f32,
    pub rotation_multiplier: f32,
    pub exit_multiplier: f32,
    pub dismiss_duration_ms: i64,
    pub snap_back_stiffness: f32,
    pub snap_back_damping_ratio: f32,
    pub snap_back_max_duration_ms: i64,
    pub fling_velocity_threshold: f32,
    pub min_direction_threshold: f32,
    pub card_scale_step: f32,
    pub card_offset_step: f32,
    pub visible_cards: usize,
    pub touch_base_progress: f32,
    pub card_corner_radius: f32,
    pub card_horizontal_inset: f32,
    pub card_shadow_elevation: f32,
    pub shadow_elevation_decay: f32,
    pub scroll_hint_threshold: f32,
    /// Whether up/down swipes may dismiss; horizontal swipes are always
    /// permitted.
    pub vertical_swipe_enabled: bool,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            swipe_threshold_fraction: defaults::SWIPE_THRESHOLD_FRACTION,
            commit_threshold: defaults::COMMIT_THRESHOLD,
            rotation_multiplier: defaults::ROTATION_MULTIPLIER,
            exit_multiplier: defaults::EXIT_MULTIPLIER,
            dismiss_duration_ms: defaults::DISMISS_DURATION_MS,
            snap_back_stiffness: defaults::SNAP_BACK_STIFFNESS,
            snap_back_damping_ratio: defaults::SNAP_BACK_DAMPING_RATIO,
            snap_back_max_duration_ms: defaults::SNAP_BACK_MAX_DURATION_MS,
            fling_velocity_threshold: defaults::FLING_VELOCITY_THRESHOLD,
            min_direction_threshold: defaults::MIN_DIRECTION_THRESHOLD,
            card_scale_step: defaults::CARD_SCALE_STEP,
            card_offset_step: defaults::CARD_OFFSET_STEP,
            visible_cards: defaults::VISIBLE_CARDS,
            touch_base_progress: defaults::TOUCH_BASE_PROGRESS,
            card_corner_radius: defaults::CARD_CORNER_RADIUS,
            card_horizontal_inset: defaults::CARD_HORIZONTAL_INSET,
            card_shadow_elevation: defaults::CARD_SHADOW_ELEVATION,
            shadow_elevation_decay: defaults::SHADOW_ELEVATION_DECAY,
            scroll_hint_threshold: defaults::SCROLL_HINT_THRESHOLD,
            vertical_swipe_enabled: true,
        }
    }
}
