//! Widget event handlers
//!
//! Each handler runs to completion on one event; there is no shared state
//! outside `Widget`.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{Petal, Screen, WidgetState};
use crate::catalog::{LOVE_MESSAGES, petal_label};
use crate::config::WidgetConfig;
use crate::surface::Surface;
use crate::timers::{Job, Scheduler};

/// The greeting widget: state, config and RNG
pub struct Widget {
    state: WidgetState,
    config: WidgetConfig,
    rng: Pcg32,
}

impl Widget {
    /// Create a widget. `config.seed` overrides `seed` when set.
    /// An invalid config is replaced by the defaults.
    pub fn new(config: WidgetConfig, seed: u64) -> Self {
        let seed = config.seed.unwrap_or(seed);
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("{e}; using defaults");
                WidgetConfig::default()
            }
        };
        Self {
            state: WidgetState::new(),
            config,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Push the initial state to the surface
    pub fn init(&mut self, surface: &mut impl Surface) {
        surface.show_screen(self.state.screen);
        surface.set_hint_visible(self.state.evasion.hint_visible());
        surface.apply_sizes(&self.state.evasion.sizes());
    }

    /// Pointer or touch came near the No button
    pub fn on_approach(&mut self, surface: &mut impl Surface, scheduler: &mut impl Scheduler) {
        let (max_x, max_y) = (self.config.max_offset_x, self.config.max_offset_y);
        let dx = self.rng.random_range(-max_x..=max_x);
        let dy = self.rng.random_range(-max_y..=max_y);
        surface.set_no_offset(dx, dy);

        let attempts = self.state.evasion.advance();
        surface.set_warning(self.state.evasion.warning());

        // Clear first so a shake already in flight restarts
        surface.clear_shake();
        scheduler.after(self.config.shake_restart_delay_ms, Job::ApplyShake);

        if self.state.evasion.hint_visible() {
            surface.set_hint_visible(true);
        }

        surface.apply_sizes(&self.state.evasion.sizes());

        log::debug!("No evaded (attempts: {attempts}, offset: {dx:.0},{dy:.0})");
    }

    /// Yes was pressed: switch to the card. Repeating it is harmless.
    pub fn on_accept(&mut self, surface: &mut impl Surface) {
        log::info!("Yes pressed");
        self.state.accepted = true;
        self.state.screen = Screen::Card;
        surface.show_screen(Screen::Card);
        self.show_message(surface, LOVE_MESSAGES[0]);
    }

    /// Show a random love note. Repeats are allowed.
    pub fn next_message(&mut self, surface: &mut impl Surface) -> &'static str {
        let message = LOVE_MESSAGES[self.rng.random_range(0..LOVE_MESSAGES.len())];
        self.show_message(surface, message);
        message
    }

    /// Start or stop the falling petals. Petals already on screen are left to
    /// expire on their own.
    pub fn toggle_falling(&mut self, surface: &mut impl Surface, scheduler: &mut impl Scheduler) {
        match self.state.petals.stop() {
            Some(handle) => {
                scheduler.cancel(handle);
                surface.set_petal_control(false, petal_label(false));
                log::info!("Petals stopped");
            }
            None => match scheduler.every(self.config.spawn_period_ms, Job::SpawnPetal) {
                Some(handle) => {
                    self.state.petals.start(handle);
                    surface.set_petal_control(true, petal_label(true));
                    log::info!("Petals started (every {}ms)", self.config.spawn_period_ms);
                }
                None => log::warn!("Could not schedule petals; leaving them off"),
            },
        }
    }

    /// Run deferred work handed back by the scheduler
    pub fn run_job(&mut self, job: Job, surface: &mut impl Surface, scheduler: &mut impl Scheduler) {
        match job {
            Job::SpawnPetal => {
                // Ignore ticks that arrive after the task was stopped
                if self.state.petals.is_active() {
                    self.spawn_petal(surface, scheduler);
                }
            }
            Job::RemovePetal(id) => {
                log::trace!("Petal {} expired", id.0);
                surface.remove_petal(id);
            }
            Job::ApplyShake => surface.apply_shake(),
        }
    }

    fn spawn_petal(&mut self, surface: &mut impl Surface, scheduler: &mut impl Scheduler) -> Petal {
        let petal = Petal {
            id: self.state.next_petal_id(),
            left_percent: self.rng.random_range(0.0..=100.0),
            fall_secs: self
                .rng
                .random_range(self.config.fall_secs_min..self.config.fall_secs_max),
        };
        surface.add_petal(&petal);
        // Fixed lifetime, independent of the fall duration
        scheduler.after(self.config.petal_lifetime_ms, Job::RemovePetal(petal.id));
        log::trace!("Petal {} spawned at {:.1}%", petal.id.0, petal.left_percent);
        petal
    }

    fn show_message(&mut self, surface: &mut impl Surface, message: &'static str) {
        self.state.message = Some(message);
        surface.set_message(message);
    }
}
