// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orientation tracking: portrait or landscape from viewport geometry.
//!
//! Two strategies, chosen by [`Capabilities::native_orientation`]:
//!
//! - **Native**: the platform reports an orientation angle. At construction the
//!   tracker calibrates which angles mean portrait: some devices report `0` for
//!   their natural landscape position. Orientation changes are left to the
//!   platform ([`Binding::Native`]); the tracker only annotates them.
//! - **Synthesized**: orientation is inferred from the client aspect ratio on
//!   every throttled resize, and a change is reported when it differs from the
//!   last known orientation.
//!
//! ```
//! use understory_gesture::orientation::{Orientation, OrientationTracker, Viewport};
//! use understory_gesture::Capabilities;
//!
//! let mut tracker = OrientationTracker::new(Capabilities::MOUSE, &Viewport::new(400.0, 800.0));
//! assert_eq!(tracker.last(), Orientation::Portrait);
//!
//! assert_eq!(tracker.on_resize(&Viewport::new(800.0, 400.0)), Some(Orientation::Landscape));
//! assert_eq!(tracker.on_resize(&Viewport::new(800.0, 400.0)), None);
//! ```

use crate::thresholds::{LANDSCAPE_THRESHOLD, PORTRAIT_ASPECT_LIMIT};
use crate::types::Capabilities;

/// Device orientation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Taller than wide.
    #[default]
    Portrait,
    /// Wider than tall.
    Landscape,
}

impl Orientation {
    /// Returns `"portrait"` or `"landscape"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }
}

/// Viewport geometry as reported by the host.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Window inner width.
    pub width: f64,
    /// Window inner height.
    pub height: f64,
    /// Document element client width.
    pub client_width: f64,
    /// Document element client height.
    pub client_height: f64,
    /// Platform orientation angle in degrees, when reported.
    pub angle: Option<i32>,
}

impl Viewport {
    /// A viewport whose client box matches its window box, with no angle.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            client_width: width,
            client_height: height,
            angle: None,
        }
    }

    /// Sets the reported orientation angle.
    #[must_use]
    pub const fn with_angle(mut self, angle: i32) -> Self {
        self.angle = Some(angle);
        self
    }

    /// Sets the client box size.
    #[must_use]
    pub const fn with_client(mut self, width: f64, height: f64) -> Self {
        self.client_width = width;
        self.client_height = height;
        self
    }

    /// Returns `true` if the window is wider than tall by more than
    /// [`LANDSCAPE_THRESHOLD`].
    #[must_use]
    pub fn is_clearly_landscape(&self) -> bool {
        self.width > self.height && self.width - self.height > LANDSCAPE_THRESHOLD
    }
}

/// Which pair of platform angles means portrait.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PortraitAngles {
    /// `0` and `180` are portrait.
    #[default]
    Upright,
    /// `90` and `-90` are portrait (devices whose natural position is landscape).
    Rotated,
}

impl PortraitAngles {
    /// Calibrates the angle map from the initial viewport.
    ///
    /// Starts from [`Upright`](Self::Upright) and flips to
    /// [`Rotated`](Self::Rotated) when the geometry contradicts what the
    /// reported angle would mean. Without an angle, the default is kept.
    #[must_use]
    pub fn calibrate(initial: &Viewport) -> Self {
        let Some(angle) = initial.angle else {
            return Self::Upright;
        };
        let landscape = initial.is_clearly_landscape();
        let angle_says_portrait = Self::Upright.is_portrait(angle);
        if landscape == angle_says_portrait {
            Self::Rotated
        } else {
            Self::Upright
        }
    }

    /// Returns `true` if `angle` is a portrait angle under this map.
    ///
    /// Angles are taken modulo 360, so `270` and `-90` are equivalent.
    #[must_use]
    pub fn is_portrait(self, angle: i32) -> bool {
        let upright = matches!(angle.rem_euclid(360), 0 | 180);
        let sideways = matches!(angle.rem_euclid(360), 90 | 270);
        match self {
            Self::Upright => upright,
            Self::Rotated => sideways,
        }
    }
}

/// How `orientationchange` is delivered for this host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Binding {
    /// The platform fires its own orientation events; nothing is synthesized.
    Native,
    /// Orientation changes are synthesized from throttled resizes.
    Synthesized,
}

/// Process-wide orientation state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OrientationTracker {
    native: bool,
    portrait_angles: PortraitAngles,
    last: Orientation,
}

impl OrientationTracker {
    /// Calibrates a tracker from the initial viewport.
    #[must_use]
    pub fn new(capabilities: Capabilities, initial: &Viewport) -> Self {
        let native = capabilities.native_orientation;
        let portrait_angles = if native {
            PortraitAngles::calibrate(initial)
        } else {
            PortraitAngles::Upright
        };
        let mut tracker = Self {
            native,
            portrait_angles,
            last: Orientation::Portrait,
        };
        tracker.last = tracker.orientation(initial);
        tracker
    }

    /// Returns how orientation changes are delivered.
    #[must_use]
    pub const fn binding(&self) -> Binding {
        if self.native {
            Binding::Native
        } else {
            Binding::Synthesized
        }
    }

    /// Returns the calibrated angle map.
    #[must_use]
    pub const fn portrait_angles(&self) -> PortraitAngles {
        self.portrait_angles
    }

    /// Returns the last reported orientation.
    #[must_use]
    pub const fn last(&self) -> Orientation {
        self.last
    }

    /// Classifies a viewport.
    ///
    /// With native support and a reported angle, the calibrated angle map
    /// decides. Otherwise the client box is portrait when its width/height
    /// ratio is below [`PORTRAIT_ASPECT_LIMIT`]; a degenerate box (zero height)
    /// classifies as landscape.
    #[must_use]
    pub fn orientation(&self, viewport: &Viewport) -> Orientation {
        let portrait = match viewport.angle {
            Some(angle) if self.native => self.portrait_angles.is_portrait(angle),
            _ => viewport.client_width / viewport.client_height < PORTRAIT_ASPECT_LIMIT,
        };
        if portrait {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }

    /// Handles a throttled resize on a synthesizing host.
    ///
    /// Returns the new orientation if it changed. Always `None` for native
    /// hosts.
    pub fn on_resize(&mut self, viewport: &Viewport) -> Option<Orientation> {
        if self.native {
            return None;
        }
        let current = self.orientation(viewport);
        if current == self.last {
            return None;
        }
        self.last = current;
        Some(current)
    }

    /// Annotates a platform orientation notification on a native host.
    ///
    /// Returns the current orientation and records it. Always `None` for
    /// synthesizing hosts, which never receive native notifications.
    pub fn on_native_change(&mut self, viewport: &Viewport) -> Option<Orientation> {
        if !self.native {
            return None;
        }
        self.last = self.orientation(viewport);
        Some(self.last)
    }
}
