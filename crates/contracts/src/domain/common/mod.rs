//! Common types shared by all bundled datasets

pub mod payload;

pub use payload::Payload;
