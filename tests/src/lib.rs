//! Testing utilities and benchmarks for the modecrypt library

pub mod fixtures;
