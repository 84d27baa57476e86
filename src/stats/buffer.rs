use crate::core::{RingBuffer, RingBufferIter};
use crate::row::RowVector;

/// Circular buffer of rows with incremental per-column mean and standard
/// deviation
///
/// Holds up to `L` rows of `W` columns each. Every insertion and removal
/// updates two per-column accumulators in O(W), so the current mean and
/// sample standard deviation are always available without rescanning the
/// stored rows.
///
/// # Numerical design
///
/// Accumulation uses the shifted-data formulation: the first row ever pushed
/// becomes a fixed reference `K`, and the accumulators track
/// `ex[i] = Σ (row[i] - K[i])` and `ex2[i] = Σ (row[i] - K[i])²` over the
/// rows currently present. Keeping the intermediate sums centered near zero
/// bounds cancellation error, which matters here because the stream performs
/// subtractive updates (eviction, removal) as well as additive ones. A
/// removal applies exactly the same floating-point operations as the
/// insertion it cancels, so the accumulators stay in exact correspondence
/// with the stored rows.
///
/// # Type Parameters
///
/// - `L`: capacity in rows (compile-time constant)
/// - `W`: columns per row (compile-time constant)
///
/// # Examples
///
/// ```
/// use rowstats::prelude::*;
///
/// let mut buffer = StatBuffer::<3, 2>::new();
///
/// buffer.push(RowVector::new([1.0, 10.0]));
/// buffer.push(RowVector::new([2.0, 20.0]));
/// buffer.push(RowVector::new([3.0, 30.0]));
/// buffer.push(RowVector::new([4.0, 40.0])); // Evicts [1, 10]
///
/// let mean = buffer.mean();
/// assert_eq!(mean.as_array(), &[3.0, 30.0]);
///
/// let std = buffer.std_dev();
/// assert!((std[0] - 1.0).abs() < 1e-12);
/// assert!((std[1] - 10.0).abs() < 1e-12);
/// ```
#[repr(align(64))]
pub struct StatBuffer<const L: usize, const W: usize> {
    rows: RingBuffer<RowVector<W>, L>,
    /// Shift reference K, fixed by the first row ever pushed
    shift: Option<RowVector<W>>,
    ex: RowVector<W>,
    ex2: RowVector<W>,
}

impl<const L: usize, const W: usize> StatBuffer<L, W> {
    /// Create a new empty buffer
    #[inline]
    pub fn new() -> Self {
        Self {
            rows: RingBuffer::new(),
            shift: None,
            ex: RowVector::zeros(),
            ex2: RowVector::zeros(),
        }
    }

    /// Add a row at the newest end
    ///
    /// When the buffer is full, the oldest row is evicted and its
    /// contribution leaves the accumulators before the new row's enters.
    /// After any sequence of pushes the contents are exactly the last
    /// `min(total pushes, L)` rows.
    ///
    /// # Complexity
    ///
    /// O(W)
    #[inline]
    pub fn push(&mut self, row: RowVector<W>) {
        // The first row ever pushed fixes the shift reference. Any value in
        // the sample range works; the first row is close enough to the mean.
        let shift = *self.shift.get_or_insert(row);

        if let Some(evicted) = self.rows.push(row) {
            let diff = evicted - shift;
            self.ex -= diff;
            self.ex2 -= diff * diff;
        }

        let diff = row - shift;
        self.ex += diff;
        self.ex2 += diff * diff;
    }

    /// Remove the oldest row
    ///
    /// Equivalent to `remove_rows(1)`.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is empty.
    #[inline]
    pub fn remove_row(&mut self) {
        self.remove_rows(1);
    }

    /// Remove up to `count` rows from the oldest end
    ///
    /// Each removed row's contribution is subtracted from the accumulators.
    /// Stops early if the buffer becomes empty. Stored slots are not
    /// touched; they are simply unreachable until overwritten by a future
    /// push.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is empty when called.
    pub fn remove_rows(&mut self, count: usize) {
        assert!(!self.is_empty(), "cannot remove rows from an empty buffer");
        let shift = self.shift.expect("non-empty buffer always has a shift reference");

        for _ in 0..count {
            match self.rows.pop_front() {
                Some(oldest) => {
                    let diff = oldest - shift;
                    self.ex -= diff;
                    self.ex2 -= diff * diff;
                }
                None => break,
            }
        }
    }

    /// Get the row at logical position `index` (0 = oldest)
    ///
    /// # Panics
    ///
    /// Panics if the buffer is empty or `index >= len()`.
    #[inline]
    pub fn row(&self, index: usize) -> RowVector<W> {
        assert!(!self.is_empty(), "cannot read a row from an empty buffer");
        match self.rows.get(index) {
            Some(row) => row,
            None => panic!("row index {} out of range for {} rows", index, self.len()),
        }
    }

    /// Get the newest row
    ///
    /// # Panics
    ///
    /// Panics if the buffer is empty.
    #[inline]
    pub fn latest_row(&self) -> RowVector<W> {
        match self.rows.back() {
            Some(row) => row,
            None => panic!("cannot read the latest row of an empty buffer"),
        }
    }

    /// Per-column mean of the rows currently present
    ///
    /// Computed as `K + ex / n` in O(W).
    ///
    /// # Panics
    ///
    /// Panics if the buffer is empty.
    pub fn mean(&self) -> RowVector<W> {
        assert!(!self.is_empty(), "mean of an empty buffer is undefined");
        let shift = self.shift.expect("non-empty buffer always has a shift reference");

        shift + self.ex / self.len() as f64
    }

    /// Per-column sample standard deviation (ddof = 1) of the rows currently
    /// present
    ///
    /// Computed as `sqrt((ex2 - ex²/n) / (n - 1))` in O(W). With a single
    /// row the denominator is zero and the result follows IEEE
    /// division-by-zero semantics (infinity/NaN) rather than panicking;
    /// check `len() >= 2` for a meaningful value.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is empty.
    pub fn std_dev(&self) -> RowVector<W> {
        assert!(!self.is_empty(), "standard deviation of an empty buffer is undefined");
        let n = self.len() as f64;

        let variance = (self.ex2 - (self.ex * self.ex) / n) / (n - 1.0);
        variance.sqrt()
    }

    /// Number of rows currently stored
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Capacity in rows
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        L
    }

    /// Check if the buffer is empty
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Check if the buffer is at full capacity
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.rows.is_full()
    }

    /// Iterate over stored rows, oldest to newest
    pub fn iter(&self) -> RingBufferIter<'_, RowVector<W>, L> {
        self.rows.iter()
    }

    /// Reset to the freshly-constructed state
    ///
    /// Clears the stored rows, the accumulators, and the shift reference;
    /// the next push fixes a new one.
    pub fn reset(&mut self) {
        self.rows.reset();
        self.shift = None;
        self.ex = RowVector::zeros();
        self.ex2 = RowVector::zeros();
    }
}

impl<const L: usize, const W: usize> Default for StatBuffer<L, W> {
    fn default() -> Self {
        Self::new()
    }
}

/// `buffer += row` is shorthand for [`StatBuffer::push`]
impl<const L: usize, const W: usize> std::ops::AddAssign<RowVector<W>> for StatBuffer<L, W> {
    #[inline]
    fn add_assign(&mut self, row: RowVector<W>) {
        self.push(row);
    }
}
