// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The sheet state holder: reactive inputs, transitions, derived sizing.

use overstory_reactive::{Atom, Memo, stamp};

use crate::types::{Callback, SheetConfig, SheetSize};

/// State for a dismissible bottom sheet.
///
/// A `Sheet` tracks three reactive inputs — the cumulative drag offset,
/// whether the user has committed to the expanded position, and the measured
/// content height — against an immutable-per-instantiation configuration.
/// From those it derives [`expanded`](Self::expanded) and
/// [`size`](Self::size), both memoized and recomputed only when a dependency
/// has changed since the cached read.
///
/// ## State machine
///
/// Implicitly: `{Unmeasured, Collapsed, Expanded, Dismissed}`.
///
/// - A sheet starts collapsed when a collapsed height is configured,
///   otherwise it is considered expanded from the start.
/// - `Collapsed → Expanded` via [`expand`](Self::expand); requires both
///   nominal heights to be known, otherwise the call is a no-op.
/// - `Expanded → Collapsed` via [`collapse`](Self::collapse); with either
///   height unknown the call escalates to [`dismiss`](Self::dismiss).
/// - `Dismissed` is terminal within this component. [`dismiss`](Self::dismiss)
///   mutates nothing; the host tears the instance down afterward.
///
/// "Unmeasured" is not a tracked flag but the condition that the expanded
/// height is still unknown; it gates `expand` and forces
/// [`SheetSize::Stretched`] sizing while the sheet is considered expanded.
///
/// ## Threading
///
/// Single-threaded by construction (not `Sync`, callbacks unsynchronized):
/// every operation runs synchronously to completion on the UI thread, so
/// transitions are atomic with respect to each other and derived reads are
/// never torn.
pub struct Sheet {
    dismiss_threshold: f64,
    collapsed_height: Atom<Option<f64>>,
    on_expand: Option<Callback>,
    on_collapse: Option<Callback>,
    on_dismiss: Option<Callback>,

    expanded_by_user: Atom<bool>,
    offset: Atom<f64>,
    expanded_height: Atom<Option<f64>>,

    expanded_memo: Memo<bool>,
    size_memo: Memo<SheetSize>,
}

impl core::fmt::Debug for Sheet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Sheet")
            .field("dismiss_threshold", &self.dismiss_threshold)
            .field("collapsed_height", self.collapsed_height.get())
            .field("expanded_height", self.expanded_height.get())
            .field("offset", self.offset.get())
            .field("expanded_by_user", self.expanded_by_user.get())
            .finish_non_exhaustive()
    }
}

impl Sheet {
    /// Create a sheet from its host configuration.
    ///
    /// The sheet starts with a zero offset, no user expansion, and no
    /// measured content height.
    pub fn new(config: SheetConfig) -> Self {
        let SheetConfig {
            dismiss_threshold,
            collapsed_height,
            on_expand,
            on_collapse,
            on_dismiss,
        } = config;
        Self {
            dismiss_threshold,
            collapsed_height: Atom::new(collapsed_height),
            on_expand,
            on_collapse,
            on_dismiss,
            expanded_by_user: Atom::new(false),
            offset: Atom::new(0.0),
            expanded_height: Atom::new(None),
            expanded_memo: Memo::new(),
            size_memo: Memo::new(),
        }
    }

    /// Replace the configuration wholesale.
    ///
    /// Threshold and callback slots are overwritten; sheet state (offset,
    /// user expansion, measured height) is untouched. A change to
    /// `collapsed_height` invalidates the derived values that depend on it,
    /// so removing the collapsed mode flips [`expanded`](Self::expanded) to
    /// `true` without any transition call.
    pub fn set_config(&mut self, config: SheetConfig) {
        let SheetConfig {
            dismiss_threshold,
            collapsed_height,
            on_expand,
            on_collapse,
            on_dismiss,
        } = config;
        self.dismiss_threshold = dismiss_threshold;
        self.collapsed_height.set_distinct(collapsed_height);
        self.on_expand = on_expand;
        self.on_collapse = on_collapse;
        self.on_dismiss = on_dismiss;
    }

    /// Fraction of drag distance the gesture layer treats as a commit
    /// threshold. Read-only; the sheet itself never consumes it.
    pub fn dismiss_threshold(&self) -> f64 {
        self.dismiss_threshold
    }

    /// Nominal height of the collapsed resting position, if configured.
    pub fn collapsed_height(&self) -> Option<f64> {
        self.collapsed_height.get_copied()
    }

    /// Measured full content height, once the layout layer has reported one.
    pub fn expanded_height(&self) -> Option<f64> {
        self.expanded_height.get_copied()
    }

    /// Cumulative displacement applied to both nominal resting heights.
    pub fn offset(&self) -> f64 {
        self.offset.get_copied()
    }

    /// Set the offset directly. Intended for the gesture layer while a drag
    /// is in progress; an ordinary reactive write with immediate visibility.
    pub fn set_offset(&mut self, offset: f64) {
        self.offset.set(offset);
    }

    /// Shift the offset by `delta` (positive pulls the sheet down).
    pub fn drag_by(&mut self, delta: f64) {
        self.offset.update(|offset| *offset += delta);
    }

    /// Record the measured full content extent.
    ///
    /// Idempotent; the layout layer may call this on every pass. A changed
    /// measurement invalidates the derived size, a repeated equal one leaves
    /// the cache intact.
    pub fn set_expanded_height(&mut self, height: f64) {
        self.expanded_height.set_distinct(Some(height));
    }

    /// Whether the sheet is considered expanded.
    ///
    /// True when the user has committed to the expanded position, and always
    /// true for a sheet with no configured collapsed height.
    pub fn expanded(&self) -> bool {
        let key = stamp([
            self.expanded_by_user.version(),
            self.collapsed_height.version(),
        ]);
        self.expanded_memo.read(key, || {
            self.expanded_by_user.get_copied() || self.collapsed_height.get_copied().is_none()
        })
    }

    /// The sizing policy for the current state, for the view layer to read
    /// once per render pass.
    ///
    /// Expanded (or collapsed-mode-less) sheets report the measured height
    /// minus the offset, falling back to [`SheetSize::Stretched`] until the
    /// first measurement arrives. Collapsed sheets report the configured
    /// collapsed height minus the offset.
    pub fn size(&self) -> SheetSize {
        let key = stamp([
            self.expanded_by_user.version(),
            self.collapsed_height.version(),
            self.expanded_height.version(),
            self.offset.version(),
        ]);
        self.size_memo.read(key, || {
            let offset = self.offset.get_copied();
            match self.collapsed_height.get_copied() {
                Some(collapsed) if !self.expanded() => SheetSize::FixedHeight(collapsed - offset),
                _ => match self.expanded_height.get_copied() {
                    Some(expanded) => SheetSize::FixedHeight(expanded - offset),
                    None => SheetSize::Stretched,
                },
            }
        })
    }

    /// Commit to the expanded resting position.
    ///
    /// Requires both nominal heights to be known; otherwise the call is a
    /// documented no-op — no state mutation, no callback. A gesture issued
    /// before the first measurement is dropped, not queued.
    ///
    /// The offset absorbs the difference between the nominal heights, which
    /// keeps the rendered height (and thus the panel's top edge) continuous
    /// across the transition.
    pub fn expand(&mut self) {
        let (Some(collapsed), Some(expanded)) = (
            self.collapsed_height.get_copied(),
            self.expanded_height.get_copied(),
        ) else {
            return;
        };
        self.offset.update(|offset| *offset += expanded - collapsed);
        self.expanded_by_user.set(true);
        if let Some(on_expand) = self.on_expand.as_mut() {
            on_expand();
        }
    }

    /// Settle back into the collapsed resting position.
    ///
    /// With either nominal height unknown there is no valid collapsed target,
    /// and the call escalates to [`dismiss`](Self::dismiss) instead: state is
    /// left untouched and only `on_dismiss` fires.
    pub fn collapse(&mut self) {
        let (Some(collapsed), Some(expanded)) = (
            self.collapsed_height.get_copied(),
            self.expanded_height.get_copied(),
        ) else {
            self.dismiss();
            return;
        };
        self.offset.update(|offset| *offset -= expanded - collapsed);
        self.expanded_by_user.set(false);
        if let Some(on_collapse) = self.on_collapse.as_mut() {
            on_collapse();
        }
    }

    /// Dismiss the sheet entirely.
    ///
    /// Always succeeds; fires `on_dismiss` and mutates nothing. Terminal
    /// within this component — the host removes the instance afterward.
    pub fn dismiss(&mut self) {
        if let Some(on_dismiss) = self.on_dismiss.as_mut() {
            on_dismiss();
        }
    }
}
