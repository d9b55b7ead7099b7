// Storage layer for the Agenda service
//
// Defines the EventStore trait (the seam between the service layer and any
// storage backend) together with the in-memory implementation used for the
// lifetime of the process. The store performs no validation and no per-user
// filtering; both belong to the layers above it.

pub mod error;
pub mod memory;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryEventStore;
pub use store::{EventStore, NewEvent};
