//! Widget state types
//!
//! Lives for a single page view.

use crate::catalog::{MAX_ATTEMPTS, WARNINGS};
use crate::consts::HINT_ATTEMPTS;
use crate::sizing::{ButtonSizes, compute_sizes};
use crate::timers::TaskId;

/// Top-level screen. Exactly one is visible; Question -> Card is one-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// The question with the Yes/No buttons
    #[default]
    Question,
    /// The love-note card
    Card,
}

impl Screen {
    /// Id of the container element on the page
    pub fn element_id(&self) -> &'static str {
        match self {
            Screen::Question => "questionScreen",
            Screen::Card => "cardScreen",
        }
    }
}

/// How many times the No button has been chased
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvasionState {
    attempts: u32,
    hint_shown: bool,
}

impl EvasionState {
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Hint stays revealed once shown
    pub fn hint_visible(&self) -> bool {
        self.hint_shown
    }

    /// Record one more evasion, saturating at the last warning.
    /// Returns the new attempt count.
    pub fn advance(&mut self) -> u32 {
        self.attempts = (self.attempts + 1).min(MAX_ATTEMPTS);
        if self.attempts >= HINT_ATTEMPTS {
            self.hint_shown = true;
        }
        self.attempts
    }

    /// Warning matching the current attempt count
    pub fn warning(&self) -> &'static str {
        WARNINGS[self.attempts as usize]
    }

    pub fn sizes(&self) -> ButtonSizes {
        compute_sizes(self.attempts)
    }
}

/// Repeating spawn task. Active exactly when a handle is held.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetalTimer {
    handle: Option<TaskId>,
}

impl PetalTimer {
    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    pub fn handle(&self) -> Option<TaskId> {
        self.handle
    }

    pub(crate) fn start(&mut self, handle: TaskId) {
        debug_assert!(self.handle.is_none(), "petal timer already running");
        self.handle = Some(handle);
    }

    pub(crate) fn stop(&mut self) -> Option<TaskId> {
        self.handle.take()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PetalId(pub u32);

/// A falling petal. Owned by the surface once spawned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Petal {
    pub id: PetalId,
    /// Horizontal position (0-100 %)
    pub left_percent: f64,
    /// Fall animation duration (s)
    pub fall_secs: f64,
}

/// Complete widget state
#[derive(Debug, Clone, Default)]
pub struct WidgetState {
    pub evasion: EvasionState,
    /// Yes was pressed (not used past the transition)
    pub accepted: bool,
    pub screen: Screen,
    pub petals: PetalTimer,
    /// Message currently on the card
    pub message: Option<&'static str>,
    /// Next petal id
    next_petal: u32,
}

impl WidgetState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new petal id
    pub fn next_petal_id(&mut self) -> PetalId {
        self.next_petal += 1;
        PetalId(self.next_petal)
    }

    /// Petals spawned so far
    pub fn petals_spawned(&self) -> u32 {
        self.next_petal
    }
}
