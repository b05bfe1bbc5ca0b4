//! Rosas entry point
//!
//! Binds the widget to the page and wires up input events.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlElement, MouseEvent, TouchEvent};

    use rosas::platform::{BrowserScheduler, Dispatch, DomSurface};
    use rosas::{Job, Widget, WidgetConfig};

    /// App instance holding the widget and its platform collaborators
    struct App {
        widget: Widget,
        surface: DomSurface,
        scheduler: BrowserScheduler,
    }

    impl App {
        fn init(&mut self) {
            self.widget.init(&mut self.surface);
        }

        fn approach(&mut self) {
            self.widget.on_approach(&mut self.surface, &mut self.scheduler);
        }

        fn accept(&mut self) {
            self.widget.on_accept(&mut self.surface);
        }

        fn new_message(&mut self) {
            self.widget.next_message(&mut self.surface);
        }

        fn toggle_petals(&mut self) {
            self.widget.toggle_falling(&mut self.surface, &mut self.scheduler);
        }

        /// Timer callback
        fn dispatch(&mut self, job: Job) {
            self.widget.run_job(job, &mut self.surface, &mut self.scheduler);
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Rosas starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let config = WidgetConfig::load();
        let surface = DomSurface::bind(&document)?;
        let controls = surface.controls();
        let seed = js_sys::Date::now() as u64;

        let app = Rc::new_cyclic(|weak: &Weak<RefCell<App>>| {
            let weak = weak.clone();
            let dispatch: Dispatch = Rc::new(move |job: Job| {
                if let Some(app) = weak.upgrade() {
                    app.borrow_mut().dispatch(job);
                }
            });
            RefCell::new(App {
                widget: Widget::new(config, seed),
                surface,
                scheduler: BrowserScheduler::new(window.clone(), dispatch),
            })
        });
        app.borrow_mut().init();

        log::info!("Widget initialized with seed: {}", seed);

        // No button: hover (desktop) or touch (mobile) makes it run away
        {
            let app = app.clone();
            on_mouse(&controls.no, "mouseenter", move || app.borrow_mut().approach());
        }
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                app.borrow_mut().approach();
            });
            let _ = controls
                .no
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let app = app.clone();
            on_mouse(&controls.yes, "click", move || app.borrow_mut().accept());
        }
        {
            let app = app.clone();
            on_mouse(&controls.new_message, "click", move || {
                app.borrow_mut().new_message()
            });
        }
        on_mouse(&controls.petals, "click", move || app.borrow_mut().toggle_petals());

        log::info!("✅ Rosas running!");
        Ok(())
    }

    fn on_mouse(target: &HtmlElement, event: &str, mut handler: impl FnMut() + 'static) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| handler());
        let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_app::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Rosas (native) starting...");
    log::info!("The page itself needs a browser - run with `trunk serve` for the web version");

    println!("\nRunning headless session...");
    headless_session();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive the widget through a full visit on a virtual clock
#[cfg(not(target_arch = "wasm32"))]
fn headless_session() {
    use rosas::{ManualScheduler, MemorySurface, Screen, Widget, WidgetConfig};

    let mut widget = Widget::new(WidgetConfig::load(), 2024);
    let mut surface = MemorySurface::new();
    let mut sched = ManualScheduler::new();
    widget.init(&mut surface);

    for _ in 0..10 {
        widget.on_approach(&mut surface, &mut sched);
        sched.advance(100, |s, job| widget.run_job(job, &mut surface, s));
        println!(
            "  No evaded -> attempts {}, \"{}\"",
            widget.state().evasion.attempts(),
            surface.warning
        );
    }

    widget.on_accept(&mut surface);
    assert!(surface.is_visible(Screen::Card));
    println!("  Accepted: \"{}\"", surface.message);
    println!("  Another: \"{}\"", widget.next_message(&mut surface));

    widget.toggle_falling(&mut surface, &mut sched);
    sched.advance(10_000, |s, job| widget.run_job(job, &mut surface, s));
    println!(
        "  {} petals spawned, {} live (peak {})",
        widget.state().petals_spawned(),
        surface.petals.len(),
        surface.peak_petals
    );

    widget.toggle_falling(&mut surface, &mut sched);
    sched.advance(5_000, |s, job| widget.run_job(job, &mut surface, s));
    println!("  Stopped; {} petals left", surface.petals.len());
    println!("✓ Headless session finished");
}
