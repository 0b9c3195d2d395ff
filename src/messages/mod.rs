//! Message types for inter-layer communication in the actor-based architecture.
//!
//! Key presses become `UiEvent`s, the App layer emits `NetworkCommand`s and
//! `RenderState` snapshots, and the Network layer answers with
//! `NetworkResponse`s.

pub mod ui_events;
pub mod network;
pub mod render;

pub use ui_events::UiEvent;
pub use network::{NetworkCommand, NetworkResponse};
pub use render::{OutputView, RenderState};
