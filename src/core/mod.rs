//! Core data structures and primitives
//!
//! This module contains the foundational circular buffer used by the rolling
//! statistics types.

mod ring;

pub use ring::{RingBuffer, RingBufferIter};
