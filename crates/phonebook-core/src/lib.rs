//! Core types and state for the phonebook contact store.
//!
//! This crate is deliberately free of terminal and I/O dependencies. The
//! presentation crate depends on it; it depends on nothing interactive.

pub mod contact;
pub mod error;
pub mod store;
pub mod validate;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
