//! Display surface abstraction
//!
//! The widget never touches the page directly. Everything it wants shown goes
//! through [`Surface`]; the browser implementation lives in `platform::dom`.

use std::collections::BTreeMap;

use crate::sizing::ButtonSizes;
use crate::widget::{Petal, PetalId, Screen};

/// Presentation collaborator driven by the widget
pub trait Surface {
    /// Show exactly one screen, hiding the other
    fn show_screen(&mut self, screen: Screen);
    /// Place the No button at an absolute offset from its default position (px)
    fn set_no_offset(&mut self, dx: f64, dy: f64);
    fn set_warning(&mut self, text: &str);
    /// Remove any in-progress shake animation from the warning text
    fn clear_shake(&mut self);
    /// Start the shake animation on the warning text
    fn apply_shake(&mut self);
    fn set_hint_visible(&mut self, visible: bool);
    fn apply_sizes(&mut self, sizes: &ButtonSizes);
    fn set_message(&mut self, text: &str);
    /// Update the petal control's label and active styling
    fn set_petal_control(&mut self, active: bool, label: &str);
    fn add_petal(&mut self, petal: &Petal);
    /// Remove a petal. Unknown ids are ignored.
    fn remove_petal(&mut self, id: PetalId);
}

/// In-memory surface that records what would be on screen.
///
/// Used by the native binary and by tests.
#[derive(Debug, Clone, PartialEq)]
pub struct MemorySurface {
    pub screen: Screen,
    pub no_offset: (f64, f64),
    pub warning: String,
    pub shaking: bool,
    /// Times the shake animation was (re)started
    pub shake_starts: u32,
    pub hint_visible: bool,
    pub sizes: Option<ButtonSizes>,
    pub message: String,
    pub petal_control_active: bool,
    pub petal_label: String,
    pub petals: BTreeMap<PetalId, Petal>,
    /// Largest number of petals seen at once
    pub peak_petals: usize,
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySurface {
    pub fn new() -> Self {
        Self {
            screen: Screen::Question,
            no_offset: (0.0, 0.0),
            warning: String::new(),
            shaking: false,
            shake_starts: 0,
            hint_visible: false,
            sizes: None,
            message: String::new(),
            petal_control_active: false,
            petal_label: String::new(),
            petals: BTreeMap::new(),
            peak_petals: 0,
        }
    }

    pub fn is_visible(&self, screen: Screen) -> bool {
        self.screen == screen
    }
}

impl Surface for MemorySurface {
    fn show_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    fn set_no_offset(&mut self, dx: f64, dy: f64) {
        self.no_offset = (dx, dy);
    }

    fn set_warning(&mut self, text: &str) {
        self.warning = text.to_string();
    }

    fn clear_shake(&mut self) {
        self.shaking = false;
    }

    fn apply_shake(&mut self) {
        self.shaking = true;
        self.shake_starts += 1;
    }

    fn set_hint_visible(&mut self, visible: bool) {
        self.hint_visible = visible;
    }

    fn apply_sizes(&mut self, sizes: &ButtonSizes) {
        self.sizes = Some(*sizes);
    }

    fn set_message(&mut self, text: &str) {
        self.message = text.to_string();
    }

    fn set_petal_control(&mut self, active: bool, label: &str) {
        self.petal_control_active = active;
        self.petal_label = label.to_string();
    }

    fn add_petal(&mut self, petal: &Petal) {
        self.petals.insert(petal.id, *petal);
        self.peak_petals = self.peak_petals.max(self.petals.len());
    }

    fn remove_petal(&mut self, id: PetalId) {
        self.petals.remove(&id);
    }
}
