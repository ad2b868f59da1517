// Composition root for the movie review service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate concrete adapters and wire them into the use case handlers.
// - Expose the HTTP router.

pub mod config;
pub mod http;
pub mod seed;
pub mod state;
