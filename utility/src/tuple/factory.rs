use super::{
    Couple, ImmutablePair, ImmutableQuad, ImmutableTriple, MutablePair, MutableQuad,
    MutableTriple, Pair, Quad, Triple,
};

/// Constructs tuples without the caller naming a concrete tuple type.
///
/// Code that only needs the accessor contracts can take a `&impl TupleFactory` and stay independent of which
/// implementation backs the tuples it builds.
pub trait TupleFactory {
    fn create_mutable_couple<T>(&self, key: T, value: T) -> impl Couple<T>;

    fn create_immutable_couple<T>(&self, key: T, value: T) -> impl Couple<T>;

    fn create_mutable_pair<K, V>(&self, key: K, value: V) -> impl Pair<K, V>;

    fn create_immutable_pair<K, V>(&self, key: K, value: V) -> impl Pair<K, V>;

    fn create_mutable_triple<L, M, R>(&self, left: L, middle: M, right: R) -> impl Triple<L, M, R>;

    fn create_immutable_triple<L, M, R>(
        &self,
        left: L,
        middle: M,
        right: R,
    ) -> impl Triple<L, M, R>;

    fn create_mutable_quad<A, B, C, D>(
        &self,
        first: A,
        second: B,
        third: C,
        fourth: D,
    ) -> impl Quad<A, B, C, D>;

    fn create_immutable_quad<A, B, C, D>(
        &self,
        first: A,
        second: B,
        third: C,
        fourth: D,
    ) -> impl Quad<A, B, C, D>;
}

/// The tuple provider shipped with this crate, backed by the `Mutable*` and `Immutable*` types.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultTupleFactory;

static FACTORY: DefaultTupleFactory = DefaultTupleFactory;

/// The process-wide tuple provider.
pub fn factory() -> &'static DefaultTupleFactory {
    &FACTORY
}

impl TupleFactory for DefaultTupleFactory {
    fn create_mutable_couple<T>(&self, key: T, value: T) -> impl Couple<T> {
        MutablePair::new(key, value)
    }

    fn create_immutable_couple<T>(&self, key: T, value: T) -> impl Couple<T> {
        ImmutablePair::new(key, value)
    }

    fn create_mutable_pair<K, V>(&self, key: K, value: V) -> impl Pair<K, V> {
        MutablePair::new(key, value)
    }

    fn create_immutable_pair<K, V>(&self, key: K, value: V) -> impl Pair<K, V> {
        ImmutablePair::new(key, value)
    }

    fn create_mutable_triple<L, M, R>(&self, left: L, middle: M, right: R) -> impl Triple<L, M, R> {
        MutableTriple::new(left, middle, right)
    }

    fn create_immutable_triple<L, M, R>(
        &self,
        left: L,
        middle: M,
        right: R,
    ) -> impl Triple<L, M, R> {
        ImmutableTriple::new(left, middle, right)
    }

    fn create_mutable_quad<A, B, C, D>(
        &self,
        first: A,
        second: B,
        third: C,
        fourth: D,
    ) -> impl Quad<A, B, C, D> {
        MutableQuad::new(first, second, third, fourth)
    }

    fn create_immutable_quad<A, B, C, D>(
        &self,
        first: A,
        second: B,
        third: C,
        fourth: D,
    ) -> impl Quad<A, B, C, D> {
        ImmutableQuad::new(first, second, third, fourth)
    }
}
