// Presentation layer: the five panel actions, their prompt templates, and the relay client.
// Each action is validated locally first; a blank input never reaches the relay.

pub mod actions;
pub mod client;
pub mod prompts;

pub use actions::{Action, Category};
pub use client::{run, HttpTransport, DEFAULT_RELAY_URL};
