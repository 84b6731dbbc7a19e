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

//! The views an action bar drives.

use crate::{
    ActionView, ArcStr, DisplayOptions, Drawable, MenuItem, MenuItemId, NavigationMode,
};

/// The default height of the bar, in density independent pixels.
pub const DEFAULT_BAR_HEIGHT: f64 = 48.0;

/// The bar's presentation of one promoted menu item.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionItemView {
    item: MenuItemId,
    title: Option<ArcStr>,
    icon: Option<Drawable>,
    action_view: Option<ActionView>,
    shows_text: bool,
    enabled: bool,
}

impl ActionItemView {
    /// Create the view for `item`.
    ///
    /// The title is drawn if the menu prefers text, and also when the item
    /// has nothing else to draw.
    pub fn new(item: &MenuItem, shows_text: bool) -> Self {
        let has_graphic = item.get_icon().is_some() || item.get_action_view().is_some();
        ActionItemView {
            item: item.id(),
            title: item.title_arc(),
            icon: item.get_icon().cloned(),
            action_view: item.get_action_view().cloned(),
            shows_text: shows_text || !has_graphic,
            enabled: item.is_enabled(),
        }
    }

    /// The menu item this view presents.
    pub fn item(&self) -> MenuItemId {
        self.item
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn icon(&self) -> Option<&Drawable> {
        self.icon.as_ref()
    }

    pub fn action_view(&self) -> Option<&ActionView> {
        self.action_view.as_ref()
    }

    /// Whether the title is drawn.
    pub fn shows_text(&self) -> bool {
        self.shows_text
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// The bar widget, as seen by the action bar.
///
/// Apart from its item list, everything here is a plain property that the
/// action bar forwards without interpretation.
pub trait BarView {
    /// Remove every item view.
    fn remove_all_items(&mut self);

    /// Append an item view.
    fn add_item(&mut self, item: ActionItemView);

    /// The item views, in display order.
    fn items(&self) -> &[ActionItemView];

    fn title(&self) -> Option<&str>;

    fn set_title(&mut self, title: Option<ArcStr>);

    fn subtitle(&self) -> Option<&str>;

    fn set_subtitle(&mut self, subtitle: Option<ArcStr>);

    fn display_options(&self) -> DisplayOptions;

    fn set_display_options(&mut self, options: DisplayOptions);

    fn navigation_mode(&self) -> NavigationMode;

    fn set_navigation_mode(&mut self, mode: NavigationMode);

    /// Show or hide the indeterminate progress indicator.
    fn set_progress_bar_indeterminate_visibility(&mut self, visible: bool);

    /// The height of the bar, in density independent pixels.
    fn height(&self) -> f64;
}

/// The container around the bar, which owns its visibility and background.
pub trait BarContainer {
    fn set_visible(&mut self, visible: bool);

    fn is_visible(&self) -> bool;

    fn set_background(&mut self, background: Option<Drawable>);
}

/// An in-memory bar that records what it was told to show.
///
/// This is what hosts without a bar widget of their own render from, and it
/// is handy in tests.
#[derive(Debug, Clone)]
pub struct ActionBarView {
    items: Vec<ActionItemView>,
    title: Option<ArcStr>,
    subtitle: Option<ArcStr>,
    display_options: DisplayOptions,
    navigation_mode: NavigationMode,
    progress_visible: bool,
    visible: bool,
    background: Option<Drawable>,
    height: f64,
}

impl ActionBarView {
    pub fn new() -> Self {
        ActionBarView {
            items: Vec::new(),
            title: None,
            subtitle: None,
            display_options: DisplayOptions::default(),
            navigation_mode: NavigationMode::default(),
            progress_visible: false,
            visible: true,
            background: None,
            height: DEFAULT_BAR_HEIGHT,
        }
    }

    /// Builder-style method to set the initial title.
    pub fn with_title(mut self, title: impl Into<ArcStr>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builder-style method to set the bar height.
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    pub fn is_progress_visible(&self) -> bool {
        self.progress_visible
    }

    pub fn background(&self) -> Option<&Drawable> {
        self.background.as_ref()
    }
}

impl Default for ActionBarView {
    fn default() -> Self {
        ActionBarView::new()
    }
}

impl BarView for ActionBarView {
    fn remove_all_items(&mut self) {
        self.items.clear();
    }

    fn add_item(&mut self, item: ActionItemView) {
        self.items.push(item);
    }

    fn items(&self) -> &[ActionItemView] {
        &self.items
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn set_title(&mut self, title: Option<ArcStr>) {
        self.title = title;
    }

    fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    fn set_subtitle(&mut self, subtitle: Option<ArcStr>) {
        self.subtitle = subtitle;
    }

    fn display_options(&self) -> DisplayOptions {
        self.display_options
    }

    fn set_display_options(&mut self, options: DisplayOptions) {
        self.display_options = options;
    }

    fn navigation_mode(&self) -> NavigationMode {
        self.navigation_mode
    }

    fn set_navigation_mode(&mut self, mode: NavigationMode) {
        self.navigation_mode = mode;
    }

    fn set_progress_bar_indeterminate_visibility(&mut self, visible: bool) {
        self.progress_visible = visible;
    }

    fn height(&self) -> f64 {
        self.height
    }
}

impl BarContainer for ActionBarView {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_background(&mut self, background: Option<Drawable>) {
        self.background = background;
    }
}
