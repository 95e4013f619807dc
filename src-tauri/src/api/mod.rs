//! REST backend client: wire types, HTTP plumbing, and the auth session.

pub mod client;
pub mod session;
pub mod types;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use session::{ApiState, Session};
