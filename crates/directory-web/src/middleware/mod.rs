//! Request middleware

pub mod session;

pub use session::{SESSION_COOKIE, session_middleware};
