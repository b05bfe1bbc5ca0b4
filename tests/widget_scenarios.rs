// End-to-end widget scenarios (native).
// Drive the widget through the in-memory surface and the virtual clock so the
// full event flow runs under `cargo test` on the host.

use std::collections::HashSet;

use rosas::catalog::{LOVE_MESSAGES, PETALS_START_LABEL, PETALS_STOP_LABEL, WARNINGS};
use rosas::{ManualScheduler, MemorySurface, Screen, Widget, WidgetConfig};

struct Harness {
    widget: Widget,
    surface: MemorySurface,
    sched: ManualScheduler,
}

impl Harness {
    fn new() -> Self {
        let mut widget = Widget::new(WidgetConfig::default(), 42);
        let mut surface = MemorySurface::new();
        widget.init(&mut surface);
        Self {
            widget,
            surface,
            sched: ManualScheduler::new(),
        }
    }

    fn approach(&mut self, times: usize) {
        for _ in 0..times {
            self.widget.on_approach(&mut self.surface, &mut self.sched);
        }
    }

    fn toggle(&mut self) {
        self.widget.toggle_falling(&mut self.surface, &mut self.sched);
    }

    fn advance(&mut self, ms: u64) {
        let Self { widget, surface, sched } = self;
        sched.advance(ms, |s, job| widget.run_job(job, surface, s));
    }
}

#[test]
fn three_evasions_reveal_hint() {
    let mut h = Harness::new();
    h.approach(2);
    assert!(!h.surface.hint_visible);

    h.approach(1);
    assert_eq!(h.widget.state().evasion.attempts(), 3);
    assert!(h.surface.hint_visible);
    assert_eq!(h.surface.warning, "Dame una oportunidad 💕");

    let sizes = h.surface.sizes.unwrap();
    assert_eq!(sizes.yes_size, 140.0);
    assert_eq!(sizes.no_size, 45.0);
}

#[test]
fn ten_evasions_saturate_at_last_warning() {
    let mut h = Harness::new();
    h.approach(10);
    assert_eq!(h.widget.state().evasion.attempts(), 7);
    assert_eq!(h.surface.warning, "Ya, no insistas más 💔");
    assert_eq!(h.surface.warning, WARNINGS[7]);

    let sizes = h.surface.sizes.unwrap();
    assert_eq!(sizes.yes_size, 220.0);
    assert_eq!(sizes.no_size, 40.0);
    assert_eq!(sizes.no_opacity, 0.3);
    assert!(h.surface.hint_visible);
}

#[test]
fn accept_switches_to_card() {
    let mut h = Harness::new();
    assert!(h.surface.is_visible(Screen::Question));

    h.widget.on_accept(&mut h.surface);
    assert!(h.surface.is_visible(Screen::Card));
    assert!(!h.surface.is_visible(Screen::Question));
    assert!(h.widget.state().accepted);
    assert_eq!(
        h.surface.message,
        "Estar contigo me inspira a ser mejor cada día"
    );

    // Idempotent
    h.widget.next_message(&mut h.surface);
    h.widget.on_accept(&mut h.surface);
    assert_eq!(h.widget.state().screen, Screen::Card);
    assert_eq!(h.surface.message, LOVE_MESSAGES[0]);
}

#[test]
fn next_message_reaches_every_note() {
    let mut h = Harness::new();
    let mut seen = HashSet::new();
    for _ in 0..1000 {
        let msg = h.widget.next_message(&mut h.surface);
        assert!(LOVE_MESSAGES.contains(&msg));
        assert_eq!(h.surface.message, msg);
        seen.insert(msg);
    }
    assert_eq!(seen.len(), LOVE_MESSAGES.len());
}

#[test]
fn toggle_starts_and_stops_spawning() {
    let mut h = Harness::new();
    h.widget.on_accept(&mut h.surface);

    h.toggle();
    let handle = h.widget.state().petals.handle().unwrap();
    assert!(h.widget.state().petals.is_active());
    assert_eq!(h.sched.repeating(), 1);
    assert_eq!(h.sched.period_of(handle), Some(200));
    assert!(h.surface.petal_control_active);
    assert_eq!(h.surface.petal_label, PETALS_STOP_LABEL);

    h.advance(1000);
    assert_eq!(h.surface.petals.len(), 5);

    h.toggle();
    assert!(!h.widget.state().petals.is_active());
    assert!(h.widget.state().petals.handle().is_none());
    assert!(!h.sched.is_scheduled(handle));
    assert_eq!(h.sched.repeating(), 0);
    assert!(!h.surface.petal_control_active);
    assert_eq!(h.surface.petal_label, PETALS_START_LABEL);

    // Spawned petals stay until their own lifetime runs out
    assert_eq!(h.surface.petals.len(), 5);
    h.advance(3999);
    assert_eq!(h.surface.petals.len(), 5);
    h.advance(1001);
    assert!(h.surface.petals.is_empty());
    assert_eq!(h.sched.pending(), 0);
    assert_eq!(h.widget.state().petals_spawned(), 5);
}

#[test]
fn live_petals_level_off() {
    let mut h = Harness::new();
    h.toggle();
    h.advance(10_000);

    assert_eq!(h.widget.state().petals_spawned(), 50);
    assert_eq!(h.surface.petals.len(), 25);
    assert!(h.surface.peak_petals <= 26);
}

#[test]
fn restarting_petals_uses_a_fresh_task() {
    let mut h = Harness::new();
    h.toggle();
    let first = h.widget.state().petals.handle().unwrap();
    h.toggle();
    h.toggle();
    let second = h.widget.state().petals.handle().unwrap();
    assert_ne!(first, second);
    assert_eq!(h.sched.repeating(), 1);
}
