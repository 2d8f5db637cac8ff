#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]

//! Provide utilities for encoding and decoding IEEE 802.3 frames.
//!
//! A frame is an 802.3 MAC header (addresses and a length field), an IEEE
//! 802.2 LLC header, an optional SNAP extension and a payload. [`dot3::Frame`]
//! is the entry point; [`llc`] and [`snap`] hold the encapsulation headers and
//! [`fcs`] the optional frame check sequence step.

#[macro_use]
extern crate quick_error;

#[macro_use]
mod macros;

mod error;
pub use error::{Error, Result};

pub mod dot3;
pub mod ether;
pub mod fcs;
pub mod llc;
pub mod snap;
