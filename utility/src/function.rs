//! Functional interfaces of arity two to four.
//!
//! Each arity gets a function, a predicate and a consumer trait, all implemented for the matching closures. Absence is
//! spelled in the argument types: a parameter that may be missing is an `Option`, a parameter that may not is a plain
//! value. The `try_*` combinators take their collaborator as an `Option` and fail with
//! [`UtilError::NullArgument`](crate::UtilError::NullArgument) before composing anything if it is missing.

use crate::{nullness::require_argument, Result};

/// A source of values.
pub trait Supplier<T> {
    fn get(&self) -> T;
}

impl<T, F: Fn() -> T> Supplier<T> for F {
    fn get(&self) -> T {
        self()
    }
}

macro_rules! functional_interfaces {
    ($function:ident, $predicate:ident, $consumer:ident, $noop:ident; $($arg:ident: $ty:ident),+) => {
        pub trait $function<$($ty,)+ R> {
            fn apply(&self, $($arg: $ty),+) -> R;

            /// Feeds the result of this function into `after`.
            fn and_then<V, G>(self, after: G) -> impl $function<$($ty,)+ V>
            where
                Self: Sized,
                G: Fn(R) -> V,
            {
                move |$($arg: $ty),+| after(self.apply($($arg),+))
            }

            fn try_and_then<V, G>(self, after: Option<G>) -> Result<impl $function<$($ty,)+ V>>
            where
                Self: Sized,
                G: Fn(R) -> V,
            {
                let after = require_argument(after, "after")?;
                Ok(self.and_then(after))
            }
        }

        impl<$($ty,)+ R, F> $function<$($ty,)+ R> for F
        where
            F: Fn($($ty),+) -> R,
        {
            fn apply(&self, $($arg: $ty),+) -> R {
                self($($arg),+)
            }
        }

        pub trait $predicate<$($ty),+> {
            fn test(&self, $($arg: &$ty),+) -> bool;

            /// Short-circuiting AND: `other` is not evaluated when this predicate fails.
            fn and<P>(self, other: P) -> impl $predicate<$($ty),+>
            where
                Self: Sized,
                P: $predicate<$($ty),+>,
            {
                move |$($arg: &$ty),+| self.test($($arg),+) && other.test($($arg),+)
            }

            /// Short-circuiting OR: `other` is not evaluated when this predicate holds.
            fn or<P>(self, other: P) -> impl $predicate<$($ty),+>
            where
                Self: Sized,
                P: $predicate<$($ty),+>,
            {
                move |$($arg: &$ty),+| self.test($($arg),+) || other.test($($arg),+)
            }

            fn negate(self) -> impl $predicate<$($ty),+>
            where
                Self: Sized,
            {
                move |$($arg: &$ty),+| !self.test($($arg),+)
            }

            fn try_and<P>(self, other: Option<P>) -> Result<impl $predicate<$($ty),+>>
            where
                Self: Sized,
                P: $predicate<$($ty),+>,
            {
                let other = require_argument(other, "other")?;
                Ok(self.and(other))
            }

            fn try_or<P>(self, other: Option<P>) -> Result<impl $predicate<$($ty),+>>
            where
                Self: Sized,
                P: $predicate<$($ty),+>,
            {
                let other = require_argument(other, "other")?;
                Ok(self.or(other))
            }
        }

        impl<$($ty,)+ F> $predicate<$($ty),+> for F
        where
            F: Fn($(&$ty),+) -> bool,
        {
            fn test(&self, $($arg: &$ty),+) -> bool {
                self($($arg),+)
            }
        }

        /// An operation run for its side effects.
        pub trait $consumer<$($ty),+> {
            fn accept(&self, $($arg: $ty),+);

            /// Runs this consumer and then `after` on the same arguments. If this consumer panics, `after` does not
            /// run.
            fn then<G>(self, after: G) -> impl $consumer<$($ty),+>
            where
                Self: Sized,
                G: $consumer<$($ty),+>,
                $($ty: Clone,)+
            {
                move |$($arg: $ty),+| {
                    self.accept($($arg.clone()),+);
                    after.accept($($arg),+);
                }
            }

            fn try_then<G>(self, after: Option<G>) -> Result<impl $consumer<$($ty),+>>
            where
                Self: Sized,
                G: $consumer<$($ty),+>,
                $($ty: Clone,)+
            {
                let after = require_argument(after, "after")?;
                Ok(self.then(after))
            }
        }

        impl<$($ty,)+ F> $consumer<$($ty),+> for F
        where
            F: Fn($($ty),+),
        {
            fn accept(&self, $($arg: $ty),+) {
                self($($arg),+)
            }
        }

        /// A consumer that does nothing.
        pub fn $noop<$($ty),+>() -> impl $consumer<$($ty),+> {
            |$(_: $ty),+| {}
        }
    };
}

functional_interfaces!(BiFunction, BiPredicate, BiConsumer, bi_noop; a: A, b: B);
functional_interfaces!(TriFunction, TriPredicate, TriConsumer, tri_noop; a: A, b: B, c: C);
functional_interfaces!(QuadFunction, QuadPredicate, QuadConsumer, quad_noop; a: A, b: B, c: C, d: D);

pub mod predicates {
    pub fn always_true<T: ?Sized>() -> impl Fn(&T) -> bool {
        |_: &T| true
    }

    pub fn always_false<T: ?Sized>() -> impl Fn(&T) -> bool {
        |_: &T| false
    }

    pub fn is_some<T>() -> impl Fn(&Option<T>) -> bool {
        |value: &Option<T>| value.is_some()
    }

    pub fn is_none<T>() -> impl Fn(&Option<T>) -> bool {
        |value: &Option<T>| value.is_none()
    }
}
