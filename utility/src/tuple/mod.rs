//! Fixed-arity tuples with named slot accessors.
//!
//! Every arity comes in two flavours: `Mutable*`, whose setters swap the new value in and hand back the old one, and
//! `Immutable*`, whose values are fixed at construction. Both implement the same accessor traits, so code holding a
//! `&mut dyn Pair<K, V>` can write through either and find out at runtime whether the write was accepted.

pub mod couple;
pub mod factory;
pub mod immutable;
pub mod mutable;
pub mod pair;
pub mod quad;
pub mod triple;


pub use couple::Couple;
pub use factory::{factory, DefaultTupleFactory, TupleFactory};
pub use immutable::{ImmutableCouple, ImmutablePair, ImmutableQuad, ImmutableTriple};
pub use mutable::{MutableCouple, MutablePair, MutableQuad, MutableTriple};
pub use pair::Pair;
pub use quad::Quad;
pub use triple::Triple;

/// Conversions between the std tuple of an arity and its mutable and immutable wrappers.
macro_rules! impl_tuple_conversions {
    ($mutable:ident, $immutable:ident; $($slot:ident: $ty:ident),+) => {
        impl<$($ty),+> From<($($ty,)+)> for $mutable<$($ty),+> {
            fn from(($($slot,)+): ($($ty,)+)) -> Self {
                Self::new($($slot),+)
            }
        }

        impl<$($ty),+> From<$mutable<$($ty),+>> for ($($ty,)+) {
            fn from(tuple: $mutable<$($ty),+>) -> Self {
                tuple.into_inner()
            }
        }

        impl<$($ty),+> From<($($ty,)+)> for $immutable<$($ty),+> {
            fn from(($($slot,)+): ($($ty,)+)) -> Self {
                Self::new($($slot),+)
            }
        }

        impl<$($ty),+> From<$immutable<$($ty),+>> for ($($ty,)+) {
            fn from(tuple: $immutable<$($ty),+>) -> Self {
                tuple.into_inner()
            }
        }

        /// Freezes a mutable tuple, keeping its current values.
        impl<$($ty),+> From<$mutable<$($ty),+>> for $immutable<$($ty),+> {
            fn from(tuple: $mutable<$($ty),+>) -> Self {
                let ($($slot,)+) = tuple.into_inner();
                Self::new($($slot),+)
            }
        }

        /// Thaws an immutable tuple into an independent mutable copy of its values.
        impl<$($ty),+> From<$immutable<$($ty),+>> for $mutable<$($ty),+> {
            fn from(tuple: $immutable<$($ty),+>) -> Self {
                let ($($slot,)+) = tuple.into_inner();
                Self::new($($slot),+)
            }
        }
    };
}

impl_tuple_conversions!(MutablePair, ImmutablePair; key: K, value: V);
impl_tuple_conversions!(MutableTriple, ImmutableTriple; left: L, middle: M, right: R);
impl_tuple_conversions!(MutableQuad, ImmutableQuad; first: A, second: B, third: C, fourth: D);
