//! # recstruct Bench
//!
//! Synthetic schema builders for recstruct performance testing.

pub mod schemas;
