#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(all(test, not(feature = "std")))]
extern crate std;

use alloc::borrow::Cow;
use core::fmt;

pub mod function;
pub mod lazy;
pub mod nullness;
pub mod tuple;

pub use function::{
    BiConsumer, BiFunction, BiPredicate, QuadConsumer, QuadFunction, QuadPredicate, Supplier,
    TriConsumer, TriFunction, TriPredicate,
};
pub use lazy::{Lazy, NonNullLazy, NullableLazy, NullableSyncLazy, SyncLazy, SyncNonNullLazy};
pub use nullness::NotNullSupplier;
pub use tuple::{
    Couple, ImmutableCouple, ImmutablePair, ImmutableQuad, ImmutableTriple, MutableCouple,
    MutablePair, MutableQuad, MutableTriple, Pair, Quad, Triple, TupleFactory,
};

/// Message used when a non-null producer yields nothing and the caller did not supply one.
pub const DEFAULT_NULL_MESSAGE: &str = "Unexpected null value from supplier";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UtilError {
    /// A setter was called on an immutable tuple. Carries the name of the slot that was written.
    UnsupportedMutation { slot: &'static str },
    /// A non-null producer yielded `None`.
    NullProducerResult(Cow<'static, str>),
    /// A composition helper was handed no collaborator.
    NullArgument(&'static str),
}

impl fmt::Display for UtilError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UtilError::UnsupportedMutation { slot } => write!(
                f,
                "object is immutable, element `{}` can not be modified",
                slot
            ),
            UtilError::NullProducerResult(message) => f.write_str(message),
            UtilError::NullArgument(name) => write!(f, "argument `{}` must not be null", name),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UtilError {}

pub type Result<T, E = UtilError> = core::result::Result<T, E>;
