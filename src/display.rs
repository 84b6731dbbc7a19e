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

//! Display options and navigation modes of the bar.

use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

/// Which optional parts of the bar are shown.
///
/// # Examples
///
/// ```
/// use druid_action_bar::DisplayOptions;
///
/// let options = DisplayOptions::SHOW_HOME | DisplayOptions::SHOW_TITLE;
/// assert!(options.contains(DisplayOptions::SHOW_TITLE));
/// assert!(!options.contains(DisplayOptions::USE_LOGO));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayOptions(u8);

impl DisplayOptions {
    pub const NONE: DisplayOptions = DisplayOptions(0);
    /// Show the logo instead of the icon in the home area.
    pub const USE_LOGO: DisplayOptions = DisplayOptions(1 << 0);
    /// Show the home area.
    pub const SHOW_HOME: DisplayOptions = DisplayOptions(1 << 1);
    /// Mark the home area as leading "up" one level.
    pub const HOME_AS_UP: DisplayOptions = DisplayOptions(1 << 2);
    /// Show the title and subtitle.
    pub const SHOW_TITLE: DisplayOptions = DisplayOptions(1 << 3);
    /// Show the custom navigation view.
    pub const SHOW_CUSTOM: DisplayOptions = DisplayOptions(1 << 4);

    pub fn bits(self) -> u8 {
        self.0
    }

    /// Build options from raw bits, dropping unknown ones.
    pub fn from_bits_truncate(bits: u8) -> Self {
        DisplayOptions(bits & 0b1_1111)
    }

    pub fn contains(self, other: DisplayOptions) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Set or clear `other`.
    pub fn set(&mut self, other: DisplayOptions, value: bool) {
        if value {
            self.0 |= other.0;
        } else {
            self.0 &= !other.0;
        }
    }

    /// Replace the options selected by `mask` with the ones in `options`,
    /// leaving the rest untouched.
    pub fn with_masked(self, options: DisplayOptions, mask: DisplayOptions) -> Self {
        (self & !mask) | (options & mask)
    }
}

impl Default for DisplayOptions {
    fn default() -> Self {
        DisplayOptions::SHOW_HOME | DisplayOptions::SHOW_TITLE
    }
}

impl BitOr for DisplayOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        DisplayOptions(self.0 | rhs.0)
    }
}

impl BitOrAssign for DisplayOptions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for DisplayOptions {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        DisplayOptions(self.0 & rhs.0)
    }
}

impl Not for DisplayOptions {
    type Output = Self;

    fn not(self) -> Self {
        DisplayOptions::from_bits_truncate(!self.0)
    }
}

/// How the bar offers navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
    /// Title and subtitle only.
    Standard,
    /// A drop-down list.
    List,
    /// A row of tabs.
    Tabs,
}

impl Default for NavigationMode {
    fn default() -> Self {
        NavigationMode::Standard
    }
}
