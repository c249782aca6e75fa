//! Core data types and constants.
//!
//! This module contains the fixed tables and primitive operations every
//! calculator builds on:
//!
//! - [`alphabet::Alphabet`]: Chaldean (1-8) and Pythagorean (1-9) letter maps
//! - [`reduce`]: Digit-sum reduction with an explicit master-number policy
//! - [`sign::Sign`]: The twelve zodiac signs in cyclic order
//! - [`constants`]: Month names, grid layouts and lookup tables

pub mod alphabet;
pub mod constants;
pub mod reduce;
pub mod sign;
