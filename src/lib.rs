//! Rosas - a playful browser proposal page
//!
//! Core modules:
//! - `widget`: Greeting widget state and event handlers (pure, surface-agnostic)
//! - `sizing`: Button sizing policy driven by the evasion counter
//! - `catalog`: Fixed message catalogs and control labels
//! - `surface`: Display surface abstraction (+ in-memory recorder)
//! - `timers`: Cancellable task scheduling (+ virtual clock)
//! - `config`: Timing/geometry configuration
//! - `platform`: Browser bindings (wasm32 only)

pub mod catalog;
pub mod config;
#[cfg(target_arch = "wasm32")]
pub mod platform;
pub mod sizing;
pub mod surface;
pub mod timers;
pub mod widget;

pub use config::{ConfigError, WidgetConfig};
pub use sizing::{ButtonSizes, compute_sizes};
pub use surface::{MemorySurface, Surface};
pub use timers::{Job, ManualScheduler, Scheduler, TaskId};
pub use widget::{EvasionState, Petal, PetalId, PetalTimer, Screen, Widget, WidgetState};

/// Widget configuration constants
pub mod consts {
    /// Yes button starts at this size (px)
    pub const YES_BASE_SIZE: f64 = 80.0;
    /// Yes button growth per evasion (px)
    pub const YES_GROWTH: f64 = 20.0;

    /// No button starts at this size (px)
    pub const NO_BASE_SIZE: f64 = 60.0;
    /// No button shrink per evasion (px)
    pub const NO_SHRINK: f64 = 5.0;
    /// No button never gets smaller than this (px)
    pub const NO_MIN_SIZE: f64 = 40.0;

    /// Attempts at which the No button fades out
    pub const NO_FADE_ATTEMPTS: u32 = 7;
    /// Opacity of the No button once faded
    pub const NO_FADED_OPACITY: f64 = 0.3;

    /// Attempts at which the hint is revealed
    pub const HINT_ATTEMPTS: u32 = 3;

    /// Font size is this fraction of the button size
    pub const FONT_SIZE_DIVISOR: f64 = 4.0;

    /// Shake animation applied to the warning text
    pub const SHAKE_ANIMATION: &str = "shake 0.5s ease-in-out";

    /// Default timing/geometry (overridable through `WidgetConfig`)
    pub const SPAWN_PERIOD_MS: u32 = 200;
    pub const PETAL_LIFETIME_MS: u32 = 5000;
    pub const FALL_SECS_MIN: f64 = 3.0;
    pub const FALL_SECS_MAX: f64 = 5.0;
    pub const MAX_OFFSET_X: f64 = 150.0;
    pub const MAX_OFFSET_Y: f64 = 100.0;
    pub const SHAKE_RESTART_DELAY_MS: u32 = 10;
}
