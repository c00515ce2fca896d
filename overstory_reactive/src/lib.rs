// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=overstory_reactive --heading-base-level=0

//! Overstory Reactive: minimal pull-based reactive cells.
//!
//! ## Overview
//!
//! This crate provides the smallest useful building blocks for derived UI
//! state: [`Atom`], a state cell with a monotonically increasing version
//! counter, and [`Memo`], a cached derived value keyed on a [`stamp`] of its
//! dependencies' versions.
//!
//! There is no automatic dependency tracking and no subscription machinery.
//! Derived values are recomputed *on read*, and only when one of their
//! dependencies has changed since the cached computation. The dependency set
//! of each derived value is spelled out at the read site, which keeps the
//! graph explicit and the implementation free of interior registries,
//! thread-locals, and allocation.
//!
//! ## Model
//!
//! - Writing an [`Atom`] bumps its version. Versions never decrease.
//! - A derived read combines the versions of everything it depends on into a
//!   single [`stamp`] and hands it to [`Memo::read`] together with the
//!   compute closure.
//! - [`Memo::read`] returns the cached value when the stamp is unchanged and
//!   recomputes otherwise.
//!
//! Because all mutation is synchronous and single-threaded (cells are not
//! `Sync`), a derived read is always consistent with the latest writes; there
//! are no torn reads and no invalidation races.
//!
//! ## Minimal example
//!
//! ```
//! use overstory_reactive::{Atom, Memo, stamp};
//!
//! let mut a = Atom::new(2_u32);
//! let b = Atom::new(3_u32);
//! let sum: Memo<u32> = Memo::new();
//!
//! let s = stamp([a.version(), b.version()]);
//! assert_eq!(sum.read(s, || a.get() + b.get()), 5);
//!
//! a.set(10);
//! let s = stamp([a.version(), b.version()]);
//! assert_eq!(sum.read(s, || a.get() + b.get()), 13);
//! ```
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

pub mod atom;
pub mod memo;

pub use atom::Atom;
pub use memo::{Memo, stamp};
