//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod buttons;
pub mod controller;
pub mod net;
pub mod sync;
pub mod tick;

pub use buttons::button_task;
pub use controller::controller_task;
pub use net::{cyw43_task, net_task};
pub use sync::sync_task;
pub use tick::tick_task;
