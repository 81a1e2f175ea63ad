mod auth;
pub mod client;
mod doctors;
pub mod types;

pub use client::*;
pub use types::*;
