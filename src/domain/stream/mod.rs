//! User data stream listen-key lifecycle.

pub mod client;
pub mod wire;
