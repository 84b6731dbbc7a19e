// Copyright 2021 The Druid Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Screen configuration and the action bar capacity derived from it.

/// The number of action buttons on the narrowest screens.
pub const DEFAULT_MAX_ACTION_BUTTONS: i32 = 2;

/// Screen widths, in density independent pixels, at which the bar gains a
/// slot, paired with the number of slots from that width on.
pub const DEFAULT_BREAKPOINTS: [(f64, i32); 3] = [(360.0, 3), (500.0, 4), (600.0, 5)];

/// The orientation of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Maps a screen width to the number of action buttons that fit.
///
/// The width is split into bands by breakpoints; the bar gets the count of
/// the widest breakpoint the screen reaches, or the base count if it
/// reaches none.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionButtonLimits {
    base: i32,
    // sorted by width
    breakpoints: Vec<(f64, i32)>,
}

impl ActionButtonLimits {
    /// Limits with `base` buttons at every width.
    pub fn new(base: i32) -> Self {
        ActionButtonLimits {
            base,
            breakpoints: Vec::new(),
        }
    }

    /// Builder-style method to allow `max_buttons` from `min_width_dp` on.
    ///
    /// A breakpoint at a width that already has one replaces it.
    pub fn with_breakpoint(mut self, min_width_dp: f64, max_buttons: i32) -> Self {
        self.breakpoints.retain(|(width, _)| *width != min_width_dp);
        let idx = self
            .breakpoints
            .iter()
            .position(|(width, _)| *width > min_width_dp)
            .unwrap_or_else(|| self.breakpoints.len());
        self.breakpoints.insert(idx, (min_width_dp, max_buttons));
        self
    }

    /// The number of action buttons for a screen `width_dp` wide.
    pub fn max_buttons_for_width(&self, width_dp: f64) -> i32 {
        self.breakpoints
            .iter()
            .rev()
            .find(|(min_width, _)| width_dp >= *min_width)
            .map(|(_, max_buttons)| *max_buttons)
            .unwrap_or(self.base)
    }
}

impl Default for ActionButtonLimits {
    fn default() -> Self {
        DEFAULT_BREAKPOINTS.iter().fold(
            ActionButtonLimits::new(DEFAULT_MAX_ACTION_BUTTONS),
            |limits, (width, count)| limits.with_breakpoint(*width, *count),
        )
    }
}

/// The current screen configuration.
///
/// A new `Configuration` is handed to the action bar whenever the screen
/// changes; the bar's capacity is derived from it on every placement and
/// never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    screen_width_dp: f64,
    screen_height_dp: f64,
    limits: ActionButtonLimits,
}

impl Configuration {
    /// A configuration for a screen of the given size, in density
    /// independent pixels, with the default limits.
    pub fn new(screen_width_dp: f64, screen_height_dp: f64) -> Self {
        Configuration {
            screen_width_dp,
            screen_height_dp,
            limits: ActionButtonLimits::default(),
        }
    }

    /// Builder-style method to use custom action button limits.
    pub fn with_limits(mut self, limits: ActionButtonLimits) -> Self {
        self.limits = limits;
        self
    }

    /// The same screen, turned by a quarter.
    pub fn rotated(&self) -> Self {
        Configuration {
            screen_width_dp: self.screen_height_dp,
            screen_height_dp: self.screen_width_dp,
            limits: self.limits.clone(),
        }
    }

    pub fn screen_width_dp(&self) -> f64 {
        self.screen_width_dp
    }

    pub fn screen_height_dp(&self) -> f64 {
        self.screen_height_dp
    }

    pub fn orientation(&self) -> Orientation {
        if self.screen_width_dp > self.screen_height_dp {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    /// The number of items the action bar can show in this configuration.
    pub fn max_action_buttons(&self) -> i32 {
        self.limits.max_buttons_for_width(self.screen_width_dp)
    }
}
