//! Rolling per-column statistics over fixed-width rows
//!
//! The buffer maintains mean and sample standard deviation incrementally as
//! rows are added and removed, in O(W) per update.
//!
//! # Examples
//!
//! ```
//! use rowstats::prelude::*;
//!
//! let mut buffer = StatBuffer::<50, 2>::new();
//!
//! buffer.push(RowVector::new([1.0, 10.0]));
//! buffer.push(RowVector::new([3.0, 30.0]));
//!
//! assert_eq!(buffer.mean().as_array(), &[2.0, 20.0]);
//! ```

mod buffer;

pub use buffer::StatBuffer;
