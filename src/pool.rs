/*
    Reuse pool for variant storage
*/

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::{Kind, Native};

/// A free list of boxed storage for one native type.
///
/// The list never shrinks: anything pushed is kept until reused
/// or until the owning [`Pool`] is dropped.
pub struct FreeList<T> {
    slots: Mutex<Vec<Box<T>>>,
}

impl<T: Native> FreeList<T> {
    fn new() -> Self {
        Self {
            slots: Mutex::new(Vec::new()),
        }
    }

    // Pops a recycled box, if any. The lock is held only for the pop.
    fn pop(&self) -> Option<Box<T>> {
        self.slots.lock().pop()
    }

    fn push(&self, cell: Box<T>) {
        self.slots.lock().push(cell);
    }

    /// Returns the number of unused slots.
    pub fn len(&self) -> usize {
        self.slots.lock().len()
    }

    /// Returns true if there are no unused slots.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Counters describing how a [`Pool`] has been used.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Slots created by allocating fresh storage.
    pub allocated: usize,
    /// Slots created by recycling released storage.
    pub reused: usize,
    /// Slots handed back to the pool.
    pub released: usize,
}

/// A cache of variant storage, one free list per [`Kind`].
///
/// The pool is shared behind an [`Arc`]: each [`Slot`] keeps a handle
/// to the pool it came from and returns its storage there when dropped.
/// All methods may be called concurrently; every free list has its own lock.
pub struct Pool {
    pub(crate) short: FreeList<i16>,
    pub(crate) int: FreeList<i32>,
    pub(crate) float: FreeList<f32>,
    pub(crate) double: FreeList<f64>,
    allocated: AtomicUsize,
    reused: AtomicUsize,
    released: AtomicUsize,
}

impl Pool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self {
            short: FreeList::new(),
            int: FreeList::new(),
            float: FreeList::new(),
            double: FreeList::new(),
            allocated: AtomicUsize::new(0),
            reused: AtomicUsize::new(0),
            released: AtomicUsize::new(0),
        }
    }

    /// Creates a pool with `n` unused slots in every free list.
    /// Prefilled slots are not counted as allocations.
    pub fn with_capacity(n: usize) -> Self {
        let pool = Self::new();
        pool.reserve(n);
        pool
    }

    /// Adds `n` unused slots to every free list.
    pub fn reserve(&self, n: usize) {
        fn fill<T: Native + Default>(list: &FreeList<T>, n: usize) {
            let mut slots = list.slots.lock();
            slots.extend((0..n).map(|_| Box::new(T::default())));
        }

        fill(&self.short, n);
        fill(&self.int, n);
        fill(&self.float, n);
        fill(&self.double, n);
    }

    /// Returns a slot holding `value`, recycling released storage
    /// when some is available and allocating otherwise.
    pub fn acquire<T: Native>(self: &Arc<Self>, value: T) -> Slot<T> {
        let cell = match T::free_list(self).pop() {
            Some(mut cell) => {
                *cell = value;
                self.reused.fetch_add(1, Ordering::Relaxed);
                tracing::trace!(kind = %T::KIND, "reused pooled slot");
                cell
            }
            None => {
                self.allocated.fetch_add(1, Ordering::Relaxed);
                tracing::trace!(kind = %T::KIND, "allocated slot");
                Box::new(value)
            }
        };

        Slot {
            cell: Some(cell),
            pool: Some(Arc::clone(self)),
        }
    }

    /// Moves the storage of `slot` into this pool.
    ///
    /// Dropping a slot returns it to the pool it was acquired from;
    /// `release` hands it to this pool instead.
    pub fn release<T: Native>(&self, mut slot: Slot<T>) {
        if let Some(cell) = slot.cell.take() {
            self.put(cell);
        }
    }

    fn put<T: Native>(&self, cell: Box<T>) {
        T::free_list(self).push(cell);
        self.released.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns the number of unused slots for `kind`.
    pub fn free(&self, kind: Kind) -> usize {
        match kind {
            Kind::Short => self.short.len(),
            Kind::Int => self.int.len(),
            Kind::Float => self.float.len(),
            Kind::Double => self.double.len(),
        }
    }

    /// Returns a snapshot of the usage counters.
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            allocated: self.allocated.load(Ordering::Relaxed),
            reused: self.reused.load(Ordering::Relaxed),
            released: self.released.load(Ordering::Relaxed),
        }
    }
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pool")
            .field("short", &self.short.len())
            .field("int", &self.int.len())
            .field("float", &self.float.len())
            .field("double", &self.double.len())
            .field("stats", &self.stats())
            .finish()
    }
}

/// Exclusively owned storage for one raw value.
///
/// A slot is either pooled, in which case dropping it returns the
/// storage to its pool, or unpooled, in which case the storage is
/// simply freed.
pub struct Slot<T: Native> {
    // `None` only once the storage has been handed back
    cell: Option<Box<T>>,
    pool: Option<Arc<Pool>>,
}

impl<T: Native> Slot<T> {
    /// Allocates a slot that does not belong to any pool.
    pub fn unpooled(value: T) -> Self {
        Self {
            cell: Some(Box::new(value)),
            pool: None,
        }
    }

    /// Returns the raw value.
    pub fn get(&self) -> T {
        match &self.cell {
            Some(cell) => **cell,
            None => unreachable!("slot read after release"),
        }
    }

    /// Returns true if this slot goes back to a pool when dropped.
    pub fn is_pooled(&self) -> bool {
        self.pool.is_some()
    }

    /// Returns the pool this slot came from, if any.
    pub fn pool(&self) -> Option<&Arc<Pool>> {
        self.pool.as_ref()
    }
}

impl<T: Native> Clone for Slot<T> {
    fn clone(&self) -> Self {
        match &self.pool {
            Some(pool) => pool.acquire(self.get()),
            None => Self::unpooled(self.get()),
        }
    }
}

impl<T: Native> Drop for Slot<T> {
    fn drop(&mut self) {
        if let (Some(cell), Some(pool)) = (self.cell.take(), self.pool.as_ref()) {
            pool.put(cell);
        }
    }
}

impl<T: Native> fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cell {
            Some(cell) => fmt::Debug::fmt(cell, f),
            None => f.write_str("<released>"),
        }
    }
}
