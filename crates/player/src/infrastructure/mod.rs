//! Infrastructure - concrete adapters for the outbound ports

pub mod platform;

pub use platform::create_storage;
