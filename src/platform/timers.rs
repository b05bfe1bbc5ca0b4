//! Browser timers

use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::timers::{Job, Scheduler, TaskId, browser_delay_ms};

/// Routes a fired job back into the app
pub type Dispatch = Rc<dyn Fn(Job)>;

struct Interval {
    handle: i32,
    // Must stay alive while the interval is registered
    _closure: Closure<dyn FnMut()>,
}

pub struct BrowserScheduler {
    window: Window,
    dispatch: Dispatch,
    intervals: HashMap<TaskId, Interval>,
    next_id: u32,
}

impl BrowserScheduler {
    pub fn new(window: Window, dispatch: Dispatch) -> Self {
        Self {
            window,
            dispatch,
            intervals: HashMap::new(),
            next_id: 0,
        }
    }
}

impl Scheduler for BrowserScheduler {
    fn every(&mut self, period_ms: u32, job: Job) -> Option<TaskId> {
        let dispatch = self.dispatch.clone();
        let closure = Closure::<dyn FnMut()>::new(move || dispatch(job));
        match self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                browser_delay_ms(period_ms),
            ) {
            Ok(handle) => {
                self.next_id += 1;
                let id = TaskId(self.next_id);
                self.intervals.insert(
                    id,
                    Interval {
                        handle,
                        _closure: closure,
                    },
                );
                Some(id)
            }
            Err(e) => {
                log::error!("setInterval failed: {:?}", e);
                None
            }
        }
    }

    fn after(&mut self, delay_ms: u32, job: Job) {
        let dispatch = self.dispatch.clone();
        let callback = Closure::once_into_js(move || dispatch(job));
        if let Err(e) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                browser_delay_ms(delay_ms),
            )
        {
            log::error!("setTimeout failed: {:?}", e);
        }
    }

    fn cancel(&mut self, task: TaskId) {
        if let Some(interval) = self.intervals.remove(&task) {
            self.window.clear_interval_with_handle(interval.handle);
        }
    }
}
