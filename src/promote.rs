/*
    Promotion
*/

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::pool::{Pool, Slot};
use crate::variant::Variant;
use crate::{Error, Native, Result};

static GLOBAL: Lazy<Context> = Lazy::new(Context::new);

/// Promotion behavior.
///
/// Every arithmetic operation can be decomposed into two steps:
///  - a real number operation, computed in double precision, and
///  - a "fit-to-representation" step choosing the smallest kind that
///    can hold the result.
/// A `Context` performs the second step and supplies the storage
/// for the new value, from its [`Pool`] when pooling is enabled.
#[derive(Debug, Clone)]
pub struct Context {
    pool: Option<Arc<Pool>>,
}

// Configuration
impl Context {
    /// Creates a new promotion context with its own, empty pool.
    pub fn new() -> Self {
        Self {
            pool: Some(Arc::new(Pool::new())),
        }
    }

    /// Creates a promotion context that allocates every value.
    pub fn unpooled() -> Self {
        Self { pool: None }
    }

    /// Returns the process-wide context used by [`Number::new`](crate::Number::new).
    pub fn global() -> Self {
        GLOBAL.clone()
    }

    /// Enables or disables pooling. Enabling it on an unpooled
    /// context attaches a fresh pool.
    pub fn pooling(mut self, enabled: bool) -> Self {
        self.pool = match (enabled, self.pool) {
            (true, Some(pool)) => Some(pool),
            (true, None) => Some(Arc::new(Pool::new())),
            (false, _) => None,
        };
        self
    }

    /// Uses `pool` for all values created through this context.
    pub fn with_pool(mut self, pool: Arc<Pool>) -> Self {
        self.pool = Some(pool);
        self
    }

    /// Adds `n` unused slots per kind to the pool, if there is one.
    pub fn prefill(self, n: usize) -> Self {
        if let Some(pool) = &self.pool {
            pool.reserve(n);
        }
        self
    }

    /// Returns the pool backing this context, if any.
    pub fn pool(&self) -> Option<&Arc<Pool>> {
        self.pool.as_ref()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

// Promotion
impl Context {
    /// Chooses the representation for `value` and stores it.
    ///
    /// Integral values go to the smallest integer kind that holds them.
    /// Fractional values, and integral values beyond `i32`, go to `f32`
    /// whenever their magnitude is within `f32` range, even if digits are
    /// lost in the narrowing, and to `f64` otherwise. Only non-finite
    /// values fit nowhere and produce [`Error::Overflow`].
    pub fn select(&self, value: f64) -> Result<Variant> {
        if value.floor() == value && i32::in_range(value) {
            return Ok(self.integral(i32::narrow(value)));
        }

        let variant = if f32::in_range(value) {
            self.variant(f32::narrow(value))
        } else if f64::in_range(value) {
            self.variant(value)
        } else {
            tracing::debug!(value, "no representation for value");
            return Err(Error::Overflow(value));
        };
        tracing::trace!(value, kind = %variant.kind(), "promoted");
        Ok(variant)
    }

    /// Stores an integer in the smallest integer kind that holds it.
    pub fn integral(&self, value: i32) -> Variant {
        let variant = match i16::try_from(value) {
            Ok(short) => self.variant(short),
            Err(_) => self.variant(value),
        };
        tracing::trace!(value, kind = %variant.kind(), "promoted");
        variant
    }

    /// Stores `value` as is, without promotion.
    pub fn variant<T: Native>(&self, value: T) -> Variant {
        T::into_variant(self.slot(value))
    }

    fn slot<T: Native>(&self, value: T) -> Slot<T> {
        match &self.pool {
            Some(pool) => pool.acquire(value),
            None => Slot::unpooled(value),
        }
    }
}
