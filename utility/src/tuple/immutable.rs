//! Tuples whose elements are fixed at construction.
//!
//! None of these types has an inherent setter. The accessor traits still carry setters, and through them every write
//! is refused with [`UtilError::UnsupportedMutation`].

use crate::{Result, UtilError};

use super::{Pair, Quad, Triple};

fn refuse<T>(slot: &'static str) -> Result<T> {
    Err(UtilError::UnsupportedMutation { slot })
}

#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ImmutablePair<K, V> {
    key: K,
    value: V,
}

/// An [`ImmutablePair`] whose elements share one type.
pub type ImmutableCouple<T> = ImmutablePair<T, T>;

impl<K, V> ImmutablePair<K, V> {
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    pub fn into_inner(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> Pair<K, V> for ImmutablePair<K, V> {
    fn key(&self) -> &K {
        &self.key
    }

    fn value(&self) -> &V {
        &self.value
    }

    fn set_key(&mut self, _: K) -> Result<K> {
        refuse("key")
    }

    fn set_value(&mut self, _: V) -> Result<V> {
        refuse("value")
    }
}

#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ImmutableTriple<L, M, R> {
    left: L,
    middle: M,
    right: R,
}

impl<L, M, R> ImmutableTriple<L, M, R> {
    pub const fn new(left: L, middle: M, right: R) -> Self {
        Self {
            left,
            middle,
            right,
        }
    }

    pub fn into_inner(self) -> (L, M, R) {
        (self.left, self.middle, self.right)
    }
}

impl<L, M, R> Pair<L, M> for ImmutableTriple<L, M, R> {
    fn key(&self) -> &L {
        &self.left
    }

    fn value(&self) -> &M {
        &self.middle
    }

    fn set_key(&mut self, _: L) -> Result<L> {
        refuse("left")
    }

    fn set_value(&mut self, _: M) -> Result<M> {
        refuse("middle")
    }
}

impl<L, M, R> Triple<L, M, R> for ImmutableTriple<L, M, R> {
    fn right(&self) -> &R {
        &self.right
    }

    fn set_right(&mut self, _: R) -> Result<R> {
        refuse("right")
    }
}

#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ImmutableQuad<A, B, C, D> {
    first: A,
    second: B,
    third: C,
    fourth: D,
}

impl<A, B, C, D> ImmutableQuad<A, B, C, D> {
    pub const fn new(first: A, second: B, third: C, fourth: D) -> Self {
        Self {
            first,
            second,
            third,
            fourth,
        }
    }

    pub fn into_inner(self) -> (A, B, C, D) {
        (self.first, self.second, self.third, self.fourth)
    }
}

impl<A, B, C, D> Pair<A, B> for ImmutableQuad<A, B, C, D> {
    fn key(&self) -> &A {
        &self.first
    }

    fn value(&self) -> &B {
        &self.second
    }

    fn set_key(&mut self, _: A) -> Result<A> {
        refuse("first")
    }

    fn set_value(&mut self, _: B) -> Result<B> {
        refuse("second")
    }
}

impl<A, B, C, D> Triple<A, B, C> for ImmutableQuad<A, B, C, D> {
    fn right(&self) -> &C {
        &self.third
    }

    fn set_right(&mut self, _: C) -> Result<C> {
        refuse("third")
    }
}

impl<A, B, C, D> Quad<A, B, C, D> for ImmutableQuad<A, B, C, D> {
    fn fourth(&self) -> &D {
        &self.fourth
    }

    fn set_fourth(&mut self, _: D) -> Result<D> {
        refuse("fourth")
    }
}
