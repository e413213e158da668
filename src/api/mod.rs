//! API Lambda handler and response shape

pub mod handler;
pub mod response;

// Re-export the main handler for convenience
pub use handler::handler;
pub use response::HttpResponse;
