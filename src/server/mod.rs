//! Accept loop and connection dispatch.

pub mod listener;

pub use listener::{Server, ACCEPT_BACKLOG};
