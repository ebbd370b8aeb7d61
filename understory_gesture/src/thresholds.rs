// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed gesture thresholds.
//!
//! Durations are in milliseconds, distances in CSS/logical pixels.

use kurbo::Point;

/// Contact time at which a press becomes a tap-hold; taps must be shorter.
pub const TAPHOLD_THRESHOLD: u64 = 750;

/// Largest per-axis movement still accepted as a stationary press.
pub const TAP_TREMOR: f64 = 10.0;

/// Quiet period after the last scroll event before `scrollend` fires.
pub const SCROLL_DEBOUNCE: u64 = 50;

/// Minimum spacing between two `throttledresize` emissions.
pub const RESIZE_THROTTLE: u64 = 250;

/// Width surplus over height required to infer an initial landscape viewport.
pub const LANDSCAPE_THRESHOLD: f64 = 50.0;

/// Client width/height ratio below which a viewport counts as portrait.
pub const PORTRAIT_ASPECT_LIMIT: f64 = 1.1;

/// Returns `true` if moving from `start` to `end` stays within [`TAP_TREMOR`]
/// on both axes.
#[must_use]
pub fn within_tremor(start: Point, end: Point) -> bool {
    let d = end - start;
    (-TAP_TREMOR..=TAP_TREMOR).contains(&d.x) && (-TAP_TREMOR..=TAP_TREMOR).contains(&d.y)
}
