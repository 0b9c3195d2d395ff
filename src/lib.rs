//! # PromptForge
//!
//! A terminal studio for crafting LLM prompts: describe the role, topic,
//! language, audience, tones, and length you need, and generate a polished
//! prompt with the Gemini API.
//!
//! ## Features
//! - Form with five free-text fields, a tone multi-select, and a length cycle
//! - One-key generation with a visible loading state
//! - Error reporting straight from the API, never a stuck spinner
//! - Scrollable prompt display with elapsed time
//! - Configurable model and endpoint (env vars or `~/.promptforge/config.yaml`)
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod models;
pub mod config;
pub mod prompt;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;
pub mod constants;

// Re-export commonly used types
pub use models::{PromptLength, PromptRequest, ToneTag};
pub use config::GeminiConfig;
pub use messages::{UiEvent, NetworkCommand, NetworkResponse, RenderState};
pub use app::{AppState, AppActor};
pub use network::NetworkActor;
