use super::{ImmutableCouple, MutableCouple, Pair};

/// A [`Pair`] whose _key_ and _value_ share one type.
///
/// This adds no storage and no methods; any `Pair<T, T>` is a `Couple<T>`.
pub trait Couple<T>: Pair<T, T> {}

impl<T, P: Pair<T, T> + ?Sized> Couple<T> for P {}

pub fn create<T>(key: T, value: T) -> MutableCouple<T> {
    MutableCouple::new(key, value)
}

pub fn create_immutable<T>(key: T, value: T) -> ImmutableCouple<T> {
    ImmutableCouple::new(key, value)
}

/// Creates a couple holding `value` in both slots.
///
/// The slots are independent copies: replacing one leaves the other alone.
pub fn of<T: Clone>(value: T) -> MutableCouple<T> {
    MutableCouple::new(value.clone(), value)
}

/// Creates an immutable couple holding `value` in both slots.
pub fn of_immutable<T: Clone>(value: T) -> ImmutableCouple<T> {
    ImmutableCouple::new(value.clone(), value)
}
