//! Ring Queue
//!
//! A fixed-capacity circular buffer that overwrites its oldest element when
//! full. Elements are addressed by logical position relative to a rotating
//! base offset:
//! - Filling phase: fewer than `capacity` elements stored, appends grow storage
//! - Rotating phase: storage is full, appends evict the oldest element
//! - Resize keeps the logical order of whatever survives
//!
//! Mutations hold an exclusive lock for their full duration. Reads take the
//! shared lock only long enough to copy what they return, so two separate
//! reads may observe different states.

use crate::errors::{Result, RingError};
use parking_lot::RwLock;
use std::cmp::Ordering;
use std::fmt;
use tracing::{debug, trace, warn};

/// Convert a caller-supplied capacity into `usize`, rejecting negative values.
fn to_capacity<C>(requested: C) -> Result<usize>
where
    C: TryInto<usize> + Copy + fmt::Display,
{
    requested.try_into().map_err(|_| {
        warn!(requested = %requested, "Rejected invalid ring capacity");
        RingError::InvalidCapacity {
            requested: requested.to_string(),
        }
    })
}

/// Lock-protected state of a ring.
///
/// Invariants: `storage.len() <= capacity`, `base < max(capacity, 1)`, and
/// `base != 0` only while `storage.len() == capacity`.
#[derive(Debug, Clone)]
struct RingState<T> {
    capacity: usize,
    /// Physical index of logical element 0
    base: usize,
    storage: Vec<T>,
}

impl<T> RingState<T> {
    /// Map a logical index to its physical slot.
    fn physical(&self, index: usize) -> Result<usize> {
        let out_of_range = || RingError::IndexOutOfRange {
            index,
            capacity: self.capacity,
            stored: self.storage.len(),
        };

        if self.capacity == 0 || index >= self.capacity {
            return Err(out_of_range());
        }
        let slot = (index + self.base) % self.capacity;
        if slot >= self.storage.len() {
            return Err(out_of_range());
        }
        Ok(slot)
    }

    fn append(&mut self, value: T) {
        if self.capacity == 0 {
            debug!("Append ignored on zero-capacity ring");
            return;
        }

        if self.storage.len() < self.capacity {
            self.storage.push(value);
            return;
        }

        let evicted = self.base;
        self.storage[evicted] = value;
        self.base = (evicted + 1) % self.capacity;
        trace!(slot = evicted, base = self.base, "Evicted oldest element");
    }

    fn resize(&mut self, new_capacity: usize)
    where
        T: Default,
    {
        let old_capacity = self.capacity;

        if self.base == 0 {
            // Unrotated: shrinking drops the tail, growing reopens the filling phase
            self.storage.truncate(new_capacity);
            self.capacity = new_capacity;
            debug!(
                old_capacity,
                new_capacity,
                stored = self.storage.len(),
                "Resized unrotated ring"
            );
            return;
        }

        match new_capacity.cmp(&old_capacity) {
            Ordering::Less => {
                // Keep the newest `new_capacity` elements, realigned to base 0
                self.storage.rotate_left(self.base);
                let surplus = self.storage.len() - new_capacity;
                self.storage.drain(..surplus);
                self.base = 0;
            }
            Ordering::Greater => {
                // Open a gap of defaults at the base, ahead of the oldest element
                let gap = new_capacity - old_capacity;
                let tail = self.storage.split_off(self.base);
                self.storage.extend(std::iter::repeat_with(T::default).take(gap));
                self.storage.extend(tail);
            }
            Ordering::Equal => {}
        }

        self.capacity = new_capacity;
        debug!(
            old_capacity,
            new_capacity,
            base = self.base,
            stored = self.storage.len(),
            "Resized rotated ring"
        );
    }
}

/// Fixed-capacity ring queue with overwrite-on-full append.
///
/// Share between threads with `Arc<RingBuffer<T>>`; every method takes
/// `&self`.
pub struct RingBuffer<T> {
    state: RwLock<RingState<T>>,
}

impl<T> RingBuffer<T> {
    /// Create an empty ring holding at most `capacity` elements.
    ///
    /// Any integer type is accepted; values that do not fit in `usize`
    /// (negative ones in particular) fail with [`RingError::InvalidCapacity`].
    ///
    /// ```
    /// use ringq::RingBuffer;
    ///
    /// let ring = RingBuffer::new(3).unwrap();
    /// for v in 1..=5 {
    ///     ring.append(v);
    /// }
    /// assert_eq!(ring.slice(), vec![3, 4, 5]);
    /// assert!(RingBuffer::<i32>::new(-1).is_err());
    /// ```
    pub fn new<C>(capacity: C) -> Result<Self>
    where
        C: TryInto<usize> + Copy + fmt::Display,
    {
        Ok(Self::with_capacity(to_capacity(capacity)?))
    }

    /// Infallible form of [`new`](Self::new) for an already-valid capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        debug!(capacity, "Created ring");
        Self {
            state: RwLock::new(RingState {
                capacity,
                base: 0,
                storage: Vec::new(),
            }),
        }
    }

    /// Create a ring that takes ownership of `values` as its initial content.
    ///
    /// The capacity is `values.len()`, so the ring starts full and the next
    /// append overwrites logical position 0.
    pub fn from_vec(values: Vec<T>) -> Self {
        debug!(capacity = values.len(), "Created ring from existing values");
        Self {
            state: RwLock::new(RingState {
                capacity: values.len(),
                base: 0,
                storage: values,
            }),
        }
    }

    /// Overwrite logical element `index`.
    pub fn set(&self, index: usize, value: T) -> Result<()> {
        let mut state = self.state.write();
        let slot = state.physical(index)?;
        state.storage[slot] = value;
        Ok(())
    }

    /// Append a value, evicting the oldest element when the ring is full.
    ///
    /// A zero-capacity ring silently drops the value.
    pub fn append(&self, value: T) {
        self.state.write().append(value);
    }

    /// The configured capacity.
    ///
    /// This is NOT the number of stored elements; use [`stored`](Self::stored)
    /// or `data().len()` for that.
    pub fn len(&self) -> usize {
        self.state.read().capacity
    }

    /// Alias of [`len`](Self::len).
    pub fn capacity(&self) -> usize {
        self.len()
    }

    /// Number of elements currently stored.
    pub fn stored(&self) -> usize {
        self.state.read().storage.len()
    }

    /// True when nothing is stored, whatever the capacity.
    pub fn is_empty(&self) -> bool {
        self.state.read().storage.is_empty()
    }

    /// Physical index of logical element 0. Diagnostic only.
    pub fn base(&self) -> usize {
        self.state.read().base
    }

    /// Visit every stored element in physical order.
    ///
    /// Unlike [`slice`](Self::slice) this does not rotate by the base offset.
    /// The shared lock is held while `f` runs, so `f` must not call back into
    /// this ring.
    pub fn range<F>(&self, mut f: F)
    where
        F: FnMut(&T),
    {
        let state = self.state.read();
        for value in &state.storage {
            f(value);
        }
    }

    /// Change the capacity, keeping the logical order of surviving elements.
    ///
    /// - Unrotated ring (base 0): shrinking truncates the tail, which drops
    ///   the newest elements; growing only raises the limit.
    /// - Rotated ring, shrinking: the newest `new_capacity` elements survive
    ///   and the base resets to 0.
    /// - Rotated ring, growing: `T::default()` slots are inserted at the base.
    ///   They sit logically before the previous oldest element, are readable
    ///   through [`get`](Self::get), and are the first slots later appends
    ///   overwrite.
    ///
    /// A negative `new_capacity` fails with [`RingError::InvalidCapacity`] and
    /// leaves the ring untouched.
    pub fn resize<C>(&self, new_capacity: C) -> Result<()>
    where
        T: Default,
        C: TryInto<usize> + Copy + fmt::Display,
    {
        let new_capacity = to_capacity(new_capacity)?;
        self.state.write().resize(new_capacity);
        Ok(())
    }
}

impl<T: Clone> RingBuffer<T> {
    /// Clone of logical element `index`.
    pub fn get(&self, index: usize) -> Result<T> {
        let state = self.state.read();
        let slot = state.physical(index)?;
        Ok(state.storage[slot].clone())
    }

    /// Snapshot of the raw storage in physical (unrotated) order.
    ///
    /// The returned vector is an independent copy; changing it never affects
    /// the ring.
    pub fn data(&self) -> Vec<T> {
        self.state.read().storage.clone()
    }

    /// Stored elements in logical order, oldest first.
    pub fn slice(&self) -> Vec<T> {
        let state = self.state.read();
        let mut out = Vec::with_capacity(state.storage.len());
        out.extend_from_slice(&state.storage[state.base..]);
        out.extend_from_slice(&state.storage[..state.base]);
        out
    }
}

impl<T> From<Vec<T>> for RingBuffer<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}

impl<T: Clone> Clone for RingBuffer<T> {
    fn clone(&self) -> Self {
        Self {
            state: RwLock::new(self.state.read().clone()),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("RingBuffer")
            .field("capacity", &state.capacity)
            .field("base", &state.base)
            .field("storage", &state.storage)
            .finish()
    }
}
