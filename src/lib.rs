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

//! An action bar for hosts that do not provide one.
//!
//! An action bar is a fixed-capacity strip at the top of a window that shows
//! the window title plus the most important items of the window's menu. Items
//! that do not fit are left to the overflow menu.
//!
//! The interesting part is deciding which items go where; see
//! [`compute_placement`]. Everything else is wiring: [`ActionBar`] runs a
//! placement whenever the menu is inflated or the [`Configuration`] changes,
//! applies it to the [`Menu`], and repopulates a [`BarView`].
//!
//! # Examples
//!
//! ```
//! use druid_action_bar::{
//!     ActionBar, ActionBarView, Configuration, Drawable, L10nManager, Menu, MenuItem,
//!     ShowAsAction,
//! };
//!
//! let l10n = L10nManager::builtin();
//! let mut bar = ActionBar::init(Some(ActionBarView::new()), None, &l10n).unwrap();
//!
//! let mut menu = Menu::new()
//!     .entry(
//!         MenuItem::new("Search")
//!             .icon(Drawable::new("ic_search"))
//!             .show_as_action(ShowAsAction::Always),
//!     )
//!     .entry(MenuItem::new("Settings").show_as_action(ShowAsAction::Never));
//!
//! let placement = bar.on_menu_inflated(&mut menu, &Configuration::new(320.0, 480.0));
//! assert_eq!(placement.kept().len(), 1);
//! assert_eq!(menu.overflow_items().count(), 1);
//! ```

#![deny(rustdoc::broken_intra_doc_links, unsafe_code)]
#![allow(clippy::new_without_default)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod action_bar;
mod activity;
mod config;
mod display;
mod error;
mod localization;
#[cfg(feature = "default-logger")]
mod logging;
mod menu;
mod placement;
mod view;

#[cfg(test)]
mod tests;

pub use action_bar::{ActionBar, ListenerError, ListenerToken, MenuVisibilityListener};
pub use activity::ActivityInfo;
pub use config::{ActionButtonLimits, Configuration, Orientation};
pub use display::{DisplayOptions, NavigationMode};
pub use error::Error;
pub use fluent_bundle::{FluentArgs, FluentValue};
pub use localization::L10nManager;
#[cfg(feature = "default-logger")]
pub use logging::log_to_console;
pub use menu::{ActionView, Drawable, Menu, MenuItem, MenuItemId, ShowAsAction};
pub use placement::{compute_placement, Placement};
pub use view::{ActionBarView, ActionItemView, BarContainer, BarView};

/// A reference counted string slice.
///
/// This is a data-friendly way to represent strings in the action bar.
pub type ArcStr = std::sync::Arc<str>;
