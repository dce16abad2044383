//! Data models for Address Bloc.

pub mod entry;

pub use entry::{Entry, RawEntry};
