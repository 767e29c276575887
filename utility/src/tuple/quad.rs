use crate::Result;

use super::{ImmutableQuad, MutableQuad, Triple};

/// Object containing four elements of differing types.
///
/// | slot | aliases |
/// |------|---------|
/// | first | left, key |
/// | second | middle, value |
/// | third | right |
/// | fourth | |
pub trait Quad<A, B, C, D>: Triple<A, B, C> {
    fn first(&self) -> &A {
        self.key()
    }

    fn second(&self) -> &B {
        self.value()
    }

    fn third(&self) -> &C {
        self.right()
    }

    fn fourth(&self) -> &D;

    fn set_first(&mut self, first: A) -> Result<A> {
        self.set_key(first)
    }

    fn set_second(&mut self, second: B) -> Result<B> {
        self.set_value(second)
    }

    fn set_third(&mut self, third: C) -> Result<C> {
        self.set_right(third)
    }

    fn set_fourth(&mut self, fourth: D) -> Result<D>;
}

pub fn create<A, B, C, D>(first: A, second: B, third: C, fourth: D) -> MutableQuad<A, B, C, D> {
    MutableQuad::new(first, second, third, fourth)
}

pub fn create_immutable<A, B, C, D>(
    first: A,
    second: B,
    third: C,
    fourth: D,
) -> ImmutableQuad<A, B, C, D> {
    ImmutableQuad::new(first, second, third, fourth)
}
