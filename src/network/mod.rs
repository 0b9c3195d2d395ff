//! Network layer - Gemini generateContent calls off the UI thread
//!
//! The Network actor receives generation commands and sends back responses.

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
