//! Turning absent values into errors.
//!
//! A nullable value is an `Option`. The helpers here are the points where an absent value is not acceptable and gets
//! reported instead of passed along.

use alloc::borrow::Cow;
use core::marker::PhantomData;

use crate::{function::Supplier, Result, UtilError, DEFAULT_NULL_MESSAGE};

/// Unwraps a produced value, failing with [`UtilError::NullProducerResult`] if there is none.
///
/// `message` is only evaluated on failure.
pub fn require_non_null<T, M>(value: Option<T>, message: impl FnOnce() -> M) -> Result<T>
where
    M: Into<Cow<'static, str>>,
{
    value.ok_or_else(|| UtilError::NullProducerResult(message().into()))
}

/// Unwraps a required collaborator, failing with [`UtilError::NullArgument`] if it is missing.
pub fn require_argument<T>(argument: Option<T>, name: &'static str) -> Result<T> {
    argument.ok_or(UtilError::NullArgument(name))
}

/// A supplier of values that must be present.
///
/// Wraps a supplier of `Option<T>` and reports a `None` as [`UtilError::NullProducerResult`].
pub struct NotNullSupplier<T, S, M> {
    supplier: S,
    message: M,
    _ph: PhantomData<fn() -> T>,
}

/// Wraps `supplier`, reporting a `None` with the default message.
pub fn not_null<T, S>(supplier: S) -> NotNullSupplier<T, S, fn() -> &'static str>
where
    S: Supplier<Option<T>>,
{
    not_null_with(supplier, default_message as fn() -> &'static str)
}

fn default_message() -> &'static str {
    DEFAULT_NULL_MESSAGE
}

/// Wraps `supplier`, reporting a `None` with whatever `message` supplies.
pub fn not_null_with<T, S, M, R>(supplier: S, message: M) -> NotNullSupplier<T, S, M>
where
    S: Supplier<Option<T>>,
    M: Supplier<R>,
    R: Into<Cow<'static, str>>,
{
    NotNullSupplier {
        supplier,
        message,
        _ph: PhantomData,
    }
}

impl<T, S: Supplier<Option<T>>, M> NotNullSupplier<T, S, M> {
    pub fn get<R>(&self) -> Result<T>
    where
        M: Supplier<R>,
        R: Into<Cow<'static, str>>,
    {
        require_non_null(self.supplier.get(), || self.message.get())
    }
}
