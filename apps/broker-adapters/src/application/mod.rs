//! Application Layer
//!
//! Defines the ports through which broker adapters reach external
//! collaborators.

pub mod ports;

pub use ports::*;
