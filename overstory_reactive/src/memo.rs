// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Memoized derived values and version stamps.

use core::cell::Cell;

/// Combine dependency versions into a single cache key.
///
/// The result is the wrapping sum of the inputs. [`Atom`](crate::Atom)
/// versions are monotone, so the sum changes whenever any input changes; two
/// distinct dependency states along a single timeline can never collide
/// (short of `u64` wraparound). Order of the inputs does not matter, but the
/// *set* of inputs must cover every dependency of the derived computation —
/// a missed dependency means a stale read.
pub fn stamp(versions: impl IntoIterator<Item = u64>) -> u64 {
    versions
        .into_iter()
        .fold(0_u64, |acc, v| acc.wrapping_add(v))
}

/// A cached derived value, keyed on a dependency [`stamp`].
///
/// The cache lives in a [`Cell`], so reads work through `&self`; this lets a
/// derived accessor sit on an otherwise immutable borrow of its owner, which
/// is how render-pass reads want to be called. `T: Copy` keeps the cell free
/// of drop obligations and the read path allocation-free.
///
/// A `Memo` holds no reference to its dependencies. The caller recomputes the
/// stamp at every read site; see the crate docs for the reasoning.
pub struct Memo<T> {
    slot: Cell<Option<(u64, T)>>,
}

impl<T: Copy> Memo<T> {
    /// Create an empty memo. The first [`read`](Self::read) always computes.
    pub const fn new() -> Self {
        Self {
            slot: Cell::new(None),
        }
    }

    /// Return the cached value if `stamp` matches the cached stamp, otherwise
    /// run `compute`, cache its result under `stamp`, and return it.
    pub fn read(&self, stamp: u64, compute: impl FnOnce() -> T) -> T {
        if let Some((cached_stamp, value)) = self.slot.get() {
            if cached_stamp == stamp {
                return value;
            }
        }
        let value = compute();
        self.slot.set(Some((stamp, value)));
        value
    }

    /// Drop the cache unconditionally; the next read recomputes.
    pub fn invalidate(&self) {
        self.slot.set(None);
    }
}

impl<T: Copy> Default for Memo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> core::fmt::Debug for Memo<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Memo").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Atom;

    #[test]
    fn stamp_changes_when_any_version_changes() {
        let mut a = Atom::new(());
        let b = Atom::new(());
        let before = stamp([a.version(), b.version()]);
        a.set(());
        let after = stamp([a.version(), b.version()]);
        assert_ne!(before, after, "a write must produce a fresh stamp");
    }

    #[test]
    fn read_caches_until_stamp_changes() {
        let memo: Memo<u32> = Memo::new();
        let mut runs = 0;
        assert_eq!(
            memo.read(1, || {
                runs += 1;
                7
            }),
            7
        );
        assert_eq!(
            memo.read(1, || {
                runs += 1;
                7
            }),
            7
        );
        assert_eq!(runs, 1, "unchanged stamp must not recompute");
        assert_eq!(
            memo.read(2, || {
                runs += 1;
                7
            }),
            7
        );
        assert_eq!(runs, 2, "changed stamp must recompute");
    }

    #[test]
    fn invalidate_forces_one_recompute() {
        let memo: Memo<u32> = Memo::new();
        let mut runs = 0;
        memo.read(1, || {
            runs += 1;
            0
        });
        memo.invalidate();
        memo.read(1, || {
            runs += 1;
            0
        });
        assert_eq!(runs, 2, "invalidate must drop the cached stamp");
    }

    #[test]
    fn stale_stamp_recaches_new_value() {
        let memo: Memo<u32> = Memo::new();
        assert_eq!(memo.read(1, || 10), 10);
        assert_eq!(memo.read(2, || 20), 20);
        // The cache now holds stamp 2; reading it back must not recompute.
        assert_eq!(memo.read(2, || unreachable!()), 20);
    }
}
