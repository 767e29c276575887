use crate::Result;

use super::{ImmutablePair, MutablePair};

/// Object containing two elements of differing types, a _key_ and a _value_.
pub trait Pair<K, V> {
    /// The current _key_ element.
    fn key(&self) -> &K;

    /// The current _value_ element.
    fn value(&self) -> &V;

    /// Replaces the _key_ element, returning the old one.
    ///
    /// Fails with [`UtilError::UnsupportedMutation`](crate::UtilError::UnsupportedMutation) if the pair is
    /// immutable. The pair is left untouched in that case.
    fn set_key(&mut self, key: K) -> Result<K>;

    /// Replaces the _value_ element, returning the old one.
    ///
    /// Fails with [`UtilError::UnsupportedMutation`](crate::UtilError::UnsupportedMutation) if the pair is
    /// immutable. The pair is left untouched in that case.
    fn set_value(&mut self, value: V) -> Result<V>;
}

pub fn create<K, V>(key: K, value: V) -> MutablePair<K, V> {
    MutablePair::new(key, value)
}

pub fn create_immutable<K, V>(key: K, value: V) -> ImmutablePair<K, V> {
    ImmutablePair::new(key, value)
}
