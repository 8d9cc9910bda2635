//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time (id timestamps)
//! - Input events (click delegation on the list)
//! - Storage (LocalStorage on web)

pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod storage;
pub mod time;

pub use input::{ClickTarget, delegate_click};
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
pub use time::{Clock, FixedClock, SystemClock};
