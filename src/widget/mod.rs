//! Greeting widget
//!
//! All behavior lives here and is surface-agnostic:
//! - No page access (goes through `Surface`)
//! - No closures held (deferred work goes through `Scheduler` as `Job`s)
//! - Seeded RNG only

pub mod handlers;
pub mod state;

pub use handlers::Widget;
pub use state::{EvasionState, Petal, PetalId, PetalTimer, Screen, WidgetState};
