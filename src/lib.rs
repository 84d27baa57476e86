//! # Rowstats
//!
//! Streaming per-column statistics over fixed-width data rows.
//!
//! ## Design Philosophy
//!
//! - **f64 only**: statistics are computed in double precision throughout
//! - **Stack allocated**: const generics, zero heap allocations
//! - **Incremental**: O(W) per row, no rescanning of history
//! - **Numerically stable**: shifted-data accumulators bound cancellation
//!   error over long streams with both insertions and removals
//!
//! ## Modules
//!
//! - `row`: fixed-width row vector with elementwise arithmetic
//! - `core`: circular buffer primitive with O(1) push/evict
//! - `stats`: rolling per-column mean and standard deviation
//!
//! ## Example
//!
//! ```rust
//! use rowstats::prelude::*;
//!
//! // Capacity 100, four columns per row
//! let mut buffer = StatBuffer::<100, 4>::new();
//!
//! for i in 0..250 {
//!     let x = i as f64;
//!     buffer.push(RowVector::new([x, 2.0 * x, 3.0 * x, 4.0 * x]));
//! }
//!
//! // Only the last 100 rows contribute
//! assert!(buffer.is_full());
//! let mean = buffer.mean();
//! let std = buffer.std_dev();
//! println!("mean={} std={}", mean, std);
//! ```

pub mod core;
pub mod row;
pub mod stats;

/// Common imports
pub mod prelude {
    pub use crate::core::RingBuffer;
    pub use crate::row::RowVector;
    pub use crate::stats::StatBuffer;
}
