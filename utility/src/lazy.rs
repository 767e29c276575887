//! Memoized values computed on first use.
//!
//! A lazy value wraps a producer and caches the first thing it returns. Every later [`get`](Lazy::get) answers
//! from the cache until [`invalidate`](Lazy::invalidate) empties it, at which point the next `get` runs the producer
//! again. The producer therefore runs at most once per populated period.
//!
//! |                  | single owner     | shared between threads |
//! |------------------|------------------|------------------------|
//! | any value        | [`Lazy`]         | [`SyncLazy`]           |
//! | must be present  | [`NonNullLazy`]  | [`SyncNonNullLazy`]    |
//!
//! The "nullable" flavours are the plain types over an `Option`: see [`NullableLazy`] and [`NullableSyncLazy`].

use alloc::borrow::Cow;
use core::{cell::OnceCell, fmt, ops::Deref};

use crate::{nullness::require_non_null, Result, DEFAULT_NULL_MESSAGE};

#[cfg(feature = "std")]
mod _once {
    use std::sync::OnceLock;

    pub(crate) struct OnceSlot<T>(OnceLock<T>);

    impl<T> OnceSlot<T> {
        pub(crate) const fn new() -> Self {
            Self(OnceLock::new())
        }

        pub(crate) fn get(&self) -> Option<&T> {
            self.0.get()
        }

        pub(crate) fn get_or_init(&self, f: impl FnOnce() -> T) -> &T {
            self.0.get_or_init(f)
        }

        pub(crate) fn take(&mut self) -> Option<T> {
            self.0.take()
        }
    }
}

#[cfg(not(feature = "std"))]
mod _once {
    use core::{
        cell::UnsafeCell,
        sync::atomic::{AtomicBool, Ordering},
    };

    /// `ready` is only set once `value` holds a value, and `value` is only written by the holder of `lock` while
    /// `ready` is unset. A producer that panics leaves both untouched, so the next caller runs it again.
    pub(crate) struct OnceSlot<T> {
        ready: AtomicBool,
        lock: spin::Mutex<()>,
        value: UnsafeCell<Option<T>>,
    }

    unsafe impl<T: Send> Send for OnceSlot<T> {}
    unsafe impl<T: Send + Sync> Sync for OnceSlot<T> {}

    impl<T> OnceSlot<T> {
        pub(crate) const fn new() -> Self {
            Self {
                ready: AtomicBool::new(false),
                lock: spin::Mutex::new(()),
                value: UnsafeCell::new(None),
            }
        }

        pub(crate) fn get(&self) -> Option<&T> {
            if self.ready.load(Ordering::Acquire) {
                // SAFETY: once `ready` is observed the value is never written again while `self` is shared.
                unsafe { (*self.value.get()).as_ref() }
            } else {
                None
            }
        }

        pub(crate) fn get_or_init(&self, f: impl FnOnce() -> T) -> &T {
            if let Some(value) = self.get() {
                return value;
            }

            let _guard = self.lock.lock();

            if let Some(value) = self.get() {
                return value;
            }

            // SAFETY: we hold `lock` and `ready` is unset, so no reader borrows the value.
            let value: &T = unsafe { &mut *self.value.get() }.insert(f());
            self.ready.store(true, Ordering::Release);
            value
        }

        pub(crate) fn take(&mut self) -> Option<T> {
            *self.ready.get_mut() = false;
            self.value.get_mut().take()
        }
    }
}

use _once::OnceSlot;

/// A lazily computed value for a single owner.
///
/// `Lazy` is not `Sync`: the type system keeps concurrent first access from happening at all.
pub struct Lazy<T, F = fn() -> T> {
    producer: F,
    cell: OnceCell<T>,
}

/// A [`Lazy`] whose producer may legitimately yield `None`. A `None` is cached like any other value.
pub type NullableLazy<T, F = fn() -> Option<T>> = Lazy<Option<T>, F>;

impl<T, F: Fn() -> T> Lazy<T, F> {
    pub const fn new(producer: F) -> Self {
        Self {
            producer,
            cell: OnceCell::new(),
        }
    }

    /// Returns the cached value, running the producer first if the cache is empty.
    pub fn get(&self) -> &T {
        self.cell.get_or_init(|| (self.producer)())
    }

    /// Empties the cache. The next [`get`](Self::get) runs the producer again.
    pub fn invalidate(&mut self) {
        self.cell.take();
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T, F: Fn() -> T> Deref for Lazy<T, F> {
    type Target = T;

    fn deref(&self) -> &T {
        self.get()
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Lazy<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lazy").field("value", &self.cell.get()).finish()
    }
}

/// A lazily computed value for a single owner whose producer must not yield `None`.
///
/// If the producer does yield `None`, that outcome is cached: every [`get`](Self::get) fails with
/// [`UtilError::NullProducerResult`](crate::UtilError::NullProducerResult) until the lazy is invalidated, and the
/// producer is not run again in the meantime.
pub struct NonNullLazy<T, F = fn() -> Option<T>> {
    producer: F,
    message: Cow<'static, str>,
    cell: OnceCell<Option<T>>,
}

impl<T, F: Fn() -> Option<T>> NonNullLazy<T, F> {
    pub const fn new(producer: F) -> Self {
        Self::with_message(producer, Cow::Borrowed(DEFAULT_NULL_MESSAGE))
    }

    /// Like [`new`](Self::new), but failures carry `message` instead of the default one.
    pub const fn with_message(producer: F, message: Cow<'static, str>) -> Self {
        Self {
            producer,
            message,
            cell: OnceCell::new(),
        }
    }

    pub fn get(&self) -> Result<&T> {
        let value = self.cell.get_or_init(|| (self.producer)());
        require_non_null(value.as_ref(), || self.message.clone())
    }

    pub fn invalidate(&mut self) {
        self.cell.take();
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T: fmt::Debug, F> fmt::Debug for NonNullLazy<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NonNullLazy")
            .field("value", &self.cell.get())
            .finish()
    }
}

/// A lazily computed value that may be shared between threads.
///
/// When several threads race on the first [`get`](Self::get), exactly one of them runs the producer and the rest
/// wait for its result. Once populated, reads do not take a lock. A producer that panics leaves the value empty and
/// the panic reaches the caller; the next `get` runs the producer again.
///
/// Invalidation needs `&mut self`. An invalidate can therefore never overlap a populate in flight; owners that need
/// to invalidate a shared value wrap it in their own lock.
pub struct SyncLazy<T, F = fn() -> T> {
    producer: F,
    cell: OnceSlot<T>,
}

/// A [`SyncLazy`] whose producer may legitimately yield `None`.
pub type NullableSyncLazy<T, F = fn() -> Option<T>> = SyncLazy<Option<T>, F>;

impl<T, F: Fn() -> T> SyncLazy<T, F> {
    pub const fn new(producer: F) -> Self {
        Self {
            producer,
            cell: OnceSlot::new(),
        }
    }

    pub fn get(&self) -> &T {
        self.cell.get_or_init(|| (self.producer)())
    }

    pub fn invalidate(&mut self) {
        self.cell.take();
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T, F: Fn() -> T> Deref for SyncLazy<T, F> {
    type Target = T;

    fn deref(&self) -> &T {
        self.get()
    }
}

impl<T: fmt::Debug, F> fmt::Debug for SyncLazy<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncLazy")
            .field("value", &self.cell.get())
            .finish()
    }
}

/// The thread-safe counterpart of [`NonNullLazy`].
pub struct SyncNonNullLazy<T, F = fn() -> Option<T>> {
    producer: F,
    message: Cow<'static, str>,
    cell: OnceSlot<Option<T>>,
}

impl<T, F: Fn() -> Option<T>> SyncNonNullLazy<T, F> {
    pub const fn new(producer: F) -> Self {
        Self::with_message(producer, Cow::Borrowed(DEFAULT_NULL_MESSAGE))
    }

    pub const fn with_message(producer: F, message: Cow<'static, str>) -> Self {
        Self {
            producer,
            message,
            cell: OnceSlot::new(),
        }
    }

    pub fn get(&self) -> Result<&T> {
        let value = self.cell.get_or_init(|| (self.producer)());
        require_non_null(value.as_ref(), || self.message.clone())
    }

    pub fn invalidate(&mut self) {
        self.cell.take();
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T: fmt::Debug, F> fmt::Debug for SyncNonNullLazy<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncNonNullLazy")
            .field("value", &self.cell.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use core::{
        cell::Cell,
        sync::atomic::{AtomicUsize, Ordering},
    };
    use std::{
        panic::{self, AssertUnwindSafe},
        sync::{Barrier, RwLock},
        thread,
        vec::Vec,
    };

    use alloc::string::{String, ToString};

    use crate::UtilError;

    use super::{Lazy, NonNullLazy, NullableLazy, NullableSyncLazy, SyncLazy, SyncNonNullLazy};

    #[test]
    fn produces_once_per_period() {
        let calls = Cell::new(0);

        let mut lazy = Lazy::new(|| {
            calls.set(calls.get() + 1);
            calls.get() * 10
        });

        assert!(!lazy.is_initialized());
        assert_eq!(calls.get(), 0);

        for _ in 0..5 {
            assert_eq!(*lazy.get(), 10);
        }
        assert_eq!(calls.get(), 1);
        assert!(lazy.is_initialized());

        const CYCLES: usize = 7;

        for cycle in 0..CYCLES {
            lazy.invalidate();
            assert!(!lazy.is_initialized());

            for _ in 0..3 {
                assert_eq!(*lazy.get(), (cycle + 2) * 10);
            }
        }

        assert_eq!(calls.get(), CYCLES + 1);
    }

    #[test]
    fn invalidate_is_idempotent() {
        let calls = Cell::new(0);

        let mut lazy = Lazy::new(|| calls.set(calls.get() + 1));

        lazy.invalidate();
        lazy.invalidate();
        assert_eq!(calls.get(), 0);

        lazy.get();
        lazy.invalidate();
        lazy.invalidate();
        lazy.get();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn deref_populates() {
        let lazy: Lazy<String> = Lazy::new(|| "deref".to_string());

        assert_eq!(lazy.len(), 5);
        assert!(lazy.is_initialized());
    }

    #[test]
    fn nullable_caches_none() {
        let calls = Cell::new(0);

        let lazy: NullableLazy<u32, _> = Lazy::new(|| {
            calls.set(calls.get() + 1);
            None
        });

        assert_eq!(lazy.get(), &None);
        assert_eq!(lazy.get(), &None);
        assert!(lazy.is_initialized());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn non_null_rejects_none() {
        let calls = Cell::new(0);

        let mut lazy = NonNullLazy::new(|| {
            calls.set(calls.get() + 1);
            (calls.get() > 1).then_some(calls.get())
        });

        assert_eq!(
            lazy.get(),
            Err(UtilError::NullProducerResult(
                "Unexpected null value from supplier".into()
            ))
        );
        assert!(lazy.get().is_err());
        assert_eq!(calls.get(), 1);

        lazy.invalidate();

        assert_eq!(lazy.get(), Ok(&2));
        assert_eq!(lazy.get(), Ok(&2));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn non_null_custom_message() {
        let lazy = NonNullLazy::<u8, _>::with_message(|| None, "no config loaded".into());

        assert_eq!(
            lazy.get().unwrap_err().to_string(),
            "no config loaded".to_string()
        );

        let present = NonNullLazy::new(|| Some("here"));
        assert_eq!(present.get(), Ok(&"here"));
    }

    #[test]
    fn sync_lazy_race() {
        const THREADS: usize = 50;

        let calls = AtomicUsize::new(0);
        let barrier = Barrier::new(THREADS);

        let lazy = SyncLazy::new(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            thread::yield_now();
            String::from("computed")
        });

        let seen = thread::scope(|s| {
            let handles = (0..THREADS)
                .map(|_| {
                    s.spawn(|| {
                        barrier.wait();
                        lazy.get() as *const String as usize
                    })
                })
                .collect::<Vec<_>>();

            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .collect::<Vec<_>>()
        });

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(seen.iter().all(|&p| p == seen[0]));
        assert_eq!(&*lazy, "computed");
    }

    #[test]
    fn sync_non_null_race() {
        const THREADS: usize = 50;

        let calls = AtomicUsize::new(0);
        let barrier = Barrier::new(THREADS);

        let mut lazy = SyncNonNullLazy::new(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            Some(42u64)
        });

        thread::scope(|s| {
            for _ in 0..THREADS {
                s.spawn(|| {
                    barrier.wait();
                    assert_eq!(lazy.get(), Ok(&42));
                });
            }
        });

        assert_eq!(calls.load(Ordering::SeqCst), 1);

        lazy.invalidate();
        assert!(!lazy.is_initialized());
        assert_eq!(lazy.get(), Ok(&42));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn sync_non_null_rejects_none() {
        let lazy: SyncNonNullLazy<u8> = SyncNonNullLazy::new(|| None);

        assert!(matches!(
            lazy.get(),
            Err(UtilError::NullProducerResult(_))
        ));
        assert!(lazy.is_initialized());
    }

    #[test]
    fn sync_cycles() {
        let calls = AtomicUsize::new(0);

        let mut lazy: NullableSyncLazy<usize, _> = SyncLazy::new(|| {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            (n % 2 == 0).then_some(n)
        });

        for cycle in 0..10 {
            let expected = (cycle % 2 == 0).then_some(cycle);
            assert_eq!(lazy.get(), &expected);
            assert_eq!(lazy.get(), &expected);
            lazy.invalidate();
        }

        assert_eq!(calls.load(Ordering::SeqCst), 10);
    }

    #[test]
    fn static_sync_lazy() {
        static TABLE: SyncLazy<[u32; 4]> = SyncLazy::new(|| [1, 2, 4, 8]);

        let sums = thread::scope(|s| {
            (0..4)
                .map(|_| s.spawn(|| TABLE.iter().sum::<u32>()))
                .collect::<Vec<_>>()
                .into_iter()
                .map(|h| h.join().unwrap())
                .collect::<Vec<_>>()
        });

        assert_eq!(sums, [15; 4]);
    }

    #[test]
    fn single_owner_recovers_from_panicking_producer() {
        let calls = Cell::new(0);

        let lazy = Lazy::new(|| {
            calls.set(calls.get() + 1);
            if calls.get() == 1 {
                panic!("producer failed");
            }
            calls.get()
        });

        assert!(panic::catch_unwind(AssertUnwindSafe(|| *lazy.get())).is_err());
        assert!(!lazy.is_initialized());

        assert_eq!(*lazy.get(), 2);
        assert_eq!(*lazy.get(), 2);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn sync_recovers_from_panicking_producer() {
        let calls = AtomicUsize::new(0);

        let lazy = SyncLazy::new(|| {
            if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                panic!("producer failed");
            }
            7
        });

        let first = panic::catch_unwind(AssertUnwindSafe(|| *lazy.get()));
        assert!(first.is_err());
        assert!(!lazy.is_initialized());

        let second = panic::catch_unwind(AssertUnwindSafe(|| *lazy.get()));
        assert_eq!(second.ok(), Some(7));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn static_recovers_from_panicking_producer() {
        static ATTEMPTS: AtomicUsize = AtomicUsize::new(0);
        static FLAKY: SyncNonNullLazy<usize> =
            SyncNonNullLazy::new(|| match ATTEMPTS.fetch_add(1, Ordering::SeqCst) {
                0 => panic!("producer failed"),
                n => Some(n),
            });

        assert!(panic::catch_unwind(|| FLAKY.get().is_ok()).is_err());

        let seen = thread::scope(|s| {
            (0..4)
                .map(|_| s.spawn(|| FLAKY.get().copied()))
                .collect::<Vec<_>>()
                .into_iter()
                .map(|h| h.join().unwrap())
                .collect::<Vec<_>>()
        });

        assert!(seen.iter().all(|r| r == &Ok(1)));
        assert_eq!(ATTEMPTS.load(Ordering::SeqCst), 2);
    }

    /// Invalidation of a shared lazy is ordered by whatever lock guards it, never by the lazy itself. Readers see
    /// the value of some populated period, periods only move forward, and each period runs the producer once.
    #[test]
    fn invalidate_under_outer_lock() {
        const READERS: usize = 8;
        const ROUNDS: usize = 200;

        let produced = AtomicUsize::new(0);
        let lazy = RwLock::new(SyncLazy::new(|| produced.fetch_add(1, Ordering::SeqCst)));
        let barrier = Barrier::new(READERS + 1);

        thread::scope(|s| {
            for _ in 0..READERS {
                s.spawn(|| {
                    barrier.wait();

                    let mut last = 0;
                    for _ in 0..ROUNDS {
                        let seen = *lazy.read().unwrap().get();
                        assert!(seen >= last);
                        assert!(seen < produced.load(Ordering::SeqCst));
                        last = seen;
                    }
                });
            }

            barrier.wait();

            for _ in 0..ROUNDS {
                lazy.write().unwrap().invalidate();
                thread::yield_now();
            }
        });

        let lazy = lazy.into_inner().unwrap();
        let last = *lazy.get();

        assert_eq!(last + 1, produced.load(Ordering::SeqCst));
        assert!(produced.load(Ordering::SeqCst) <= ROUNDS + 1);
    }
}
