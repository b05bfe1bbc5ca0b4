//! Browser platform layer (wasm32 only)
//!
//! - `dom`: `Surface` backed by the page's elements
//! - `timers`: `Scheduler` backed by `setInterval`/`setTimeout`

pub mod dom;
pub mod timers;

pub use dom::{Controls, DomSurface, SurfaceError};
pub use timers::{BrowserScheduler, Dispatch};
