// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the sheet: configuration, callbacks, and the sizing policy.

use alloc::boxed::Box;

use kurbo::Rect;

/// Default fraction of drag distance that commits a released gesture.
pub const DEFAULT_DISMISS_THRESHOLD: f64 = 0.1;

/// A single-slot transition callback.
///
/// One handler per slot; assigning a new configuration overwrites the old
/// handler rather than adding a subscriber. No `Send`/`Sync` bound: the sheet
/// lives on the UI thread and every invocation is synchronous.
pub type Callback = Box<dyn FnMut()>;

/// Host configuration for a [`Sheet`](crate::Sheet).
///
/// Immutable for a given instantiation; replace it wholesale with
/// [`Sheet::set_config`](crate::Sheet::set_config) when the host
/// reconfigures the panel. Sheet state (offset, measurements, user
/// expansion) persists across reconfiguration.
///
/// `collapsed_height: None` means the panel has no collapsed resting state
/// and is always considered expanded.
pub struct SheetConfig {
    /// Fraction of drag distance the gesture layer treats as a commit
    /// threshold. Consumed by the (external) gesture layer; the sheet itself
    /// only exposes it read-only.
    pub dismiss_threshold: f64,
    /// Nominal height of the collapsed resting position, if the panel has one.
    pub collapsed_height: Option<f64>,
    /// Fired once per successful [`expand`](crate::Sheet::expand).
    pub on_expand: Option<Callback>,
    /// Fired once per successful, non-escalated
    /// [`collapse`](crate::Sheet::collapse).
    pub on_collapse: Option<Callback>,
    /// Fired once per [`dismiss`](crate::Sheet::dismiss), including a
    /// `collapse` escalated to dismissal.
    pub on_dismiss: Option<Callback>,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            dismiss_threshold: DEFAULT_DISMISS_THRESHOLD,
            collapsed_height: None,
            on_expand: None,
            on_collapse: None,
            on_dismiss: None,
        }
    }
}

impl core::fmt::Debug for SheetConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SheetConfig")
            .field("dismiss_threshold", &self.dismiss_threshold)
            .field("collapsed_height", &self.collapsed_height)
            .field("on_expand", &self.on_expand.is_some())
            .field("on_collapse", &self.on_collapse.is_some())
            .field("on_dismiss", &self.on_dismiss.is_some())
            .finish()
    }
}

/// Sizing policy handed to the view layer, read once per render pass.
///
/// Produced by [`Sheet::size`](crate::Sheet::size). `FixedHeight` carries the
/// nominal resting height minus the current offset; `Stretched` asks the host
/// to fill the available space and is reported only while the expanded height
/// is still unmeasured.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SheetSize {
    /// Size the panel to exactly this height.
    FixedHeight(f64),
    /// Fill the space the host makes available.
    Stretched,
}

impl SheetSize {
    /// The concrete height for this policy given the available extent.
    ///
    /// `FixedHeight` values are returned as-is, including values that a
    /// mid-drag offset has pushed negative or past `available`; clamping is a
    /// view-layer decision (see [`frame_in`](Self::frame_in)).
    pub fn resolve(self, available: f64) -> f64 {
        match self {
            Self::FixedHeight(h) => h,
            Self::Stretched => available,
        }
    }

    /// The panel's on-screen rectangle, anchored to the bottom edge of
    /// `viewport` with the height clamped to the viewport's extent.
    ///
    /// `viewport` is assumed well-formed (non-negative width and height).
    pub fn frame_in(self, viewport: Rect) -> Rect {
        let height = self.resolve(viewport.height()).clamp(0.0, viewport.height());
        Rect::new(viewport.x0, viewport.y1 - height, viewport.x1, viewport.y1)
    }
}
