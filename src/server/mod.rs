//! Development server pieces: an in-memory pending queue and the REST routes
//! the widget talks to.
pub mod handlers;
pub mod store;
