//! Tuples whose elements can be replaced in place.
//!
//! Every setter swaps the new element in and returns the one it displaced; none of them fail.

use core::mem::replace;

use crate::Result;

use super::{Pair, Quad, Triple};

#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct MutablePair<K, V> {
    key: K,
    value: V,
}

/// A [`MutablePair`] whose elements share one type.
pub type MutableCouple<T> = MutablePair<T, T>;

impl<K, V> MutablePair<K, V> {
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    pub fn into_inner(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> Pair<K, V> for MutablePair<K, V> {
    fn key(&self) -> &K {
        &self.key
    }

    fn value(&self) -> &V {
        &self.value
    }

    fn set_key(&mut self, key: K) -> Result<K> {
        Ok(replace(&mut self.key, key))
    }

    fn set_value(&mut self, value: V) -> Result<V> {
        Ok(replace(&mut self.value, value))
    }
}

#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct MutableTriple<L, M, R> {
    left: L,
    middle: M,
    right: R,
}

impl<L, M, R> MutableTriple<L, M, R> {
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

impl<L, M, R> Pair<L, M> for MutableTriple<L, M, R> {
    fn key(&self) -> &L {
        &self.left
    }

    fn value(&self) -> &M {
        &self.middle
    }

    fn set_key(&mut self, key: L) -> Result<L> {
        Ok(replace(&mut self.left, key))
    }

    fn set_value(&mut self, value: M) -> Result<M> {
        Ok(replace(&mut self.middle, value))
    }
}

impl<L, M, R> Triple<L, M, R> for MutableTriple<L, M, R> {
    fn right(&self) -> &R {
        &self.right
    }

    fn set_right(&mut self, right: R) -> Result<R> {
        Ok(replace(&mut self.right, right))
    }
}

#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct MutableQuad<A, B, C, D> {
    first: A,
    second: B,
    third: C,
    fourth: D,
}

impl<A, B, C, D> MutableQuad<A, B, C, D> {
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

impl<A, B, C, D> Pair<A, B> for MutableQuad<A, B, C, D> {
    fn key(&self) -> &A {
        &self.first
    }

    fn value(&self) -> &B {
        &self.second
    }

    fn set_key(&mut self, key: A) -> Result<A> {
        Ok(replace(&mut self.first, key))
    }

    fn set_value(&mut self, value: B) -> Result<B> {
        Ok(replace(&mut self.second, value))
    }
}

impl<A, B, C, D> Triple<A, B, C> for MutableQuad<A, B, C, D> {
    fn right(&self) -> &C {
        &self.third
    }

    fn set_right(&mut self, right: C) -> Result<C> {
        Ok(replace(&mut self.third, right))
    }
}

impl<A, B, C, D> Quad<A, B, C, D> for MutableQuad<A, B, C, D> {
    fn fourth(&self) -> &D {
        &self.fourth
    }

    fn set_fourth(&mut self, fourth: D) -> Result<D> {
        Ok(replace(&mut self.fourth, fourth))
    }
}
