//! Leaf components of the text-input assistant: selection extraction, drag
//! tracking, suggestion items and the HTTP suggestion client, plus the DOM
//! collaborator traits the interaction controller is built on.

pub mod client;
pub mod dom;
pub mod drag;
pub mod selection;
pub mod settings;
pub mod suggestion;
