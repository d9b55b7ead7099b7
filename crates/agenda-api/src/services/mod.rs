// Services layer for business logic
// Services own validation and error classification, calling storage directly

pub mod event;

pub use event::EventService;
