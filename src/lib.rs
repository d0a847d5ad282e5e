//! Pluggable distance strategies between sequences.
//!
//! This crate computes a numeric distance between two sequences of comparable elements, through
//! interchangeable strategies (longest common subsequence, Hamming). It is the backend for the
//! `seqdist` CLI tools.
#![deny(missing_docs)]
#![doc(test(attr(deny(warnings))))]

#[macro_use]
pub mod error;

pub mod config;
pub mod distance_strategy;
pub mod matrix;
pub mod sequence;
