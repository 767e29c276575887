use crate::Result;

use super::{ImmutableTriple, MutableTriple, Pair};

/// Object containing three elements of differing types.
///
/// _left_ and _middle_ are the [`Pair`] _key_ and _value_ under another name; writing through one name is visible
/// through the other.
pub trait Triple<L, M, R>: Pair<L, M> {
    fn left(&self) -> &L {
        self.key()
    }

    fn middle(&self) -> &M {
        self.value()
    }

    fn right(&self) -> &R;

    fn set_left(&mut self, left: L) -> Result<L> {
        self.set_key(left)
    }

    fn set_middle(&mut self, middle: M) -> Result<M> {
        self.set_value(middle)
    }

    /// Replaces the _right_ element, returning the old one.
    fn set_right(&mut self, right: R) -> Result<R>;
}

pub fn create<L, M, R>(left: L, middle: M, right: R) -> MutableTriple<L, M, R> {
    MutableTriple::new(left, middle, right)
}

pub fn create_immutable<L, M, R>(left: L, middle: M, right: R) -> ImmutableTriple<L, M, R> {
    ImmutableTriple::new(left, middle, right)
}
