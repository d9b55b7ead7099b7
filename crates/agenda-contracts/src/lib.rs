// Public contracts for the Agenda API
// This crate defines the event data model and the classified error taxonomy
// shared between the storage layer, the service layer, and the HTTP boundary.

pub mod error;
pub mod event;

pub use error::*;
pub use event::*;
