//! Command implementations for the Kith CLI.

pub mod demo;
pub mod inspect;
pub mod sample;
