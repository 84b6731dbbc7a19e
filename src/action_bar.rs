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

//! The action bar controller.

use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, error, warn};

use crate::view::{BarContainer, BarView};
use crate::{
    compute_placement, ActionItemView, ActivityInfo, ArcStr, Configuration, DisplayOptions,
    Drawable, Error, L10nManager, Menu, NavigationMode, Placement,
};

/// The error a [`MenuVisibilityListener`] can report.
pub type ListenerError = Box<dyn std::error::Error + Send + Sync>;

/// Something that wants to know when the overflow menu opens or closes.
///
/// This is implemented for closures taking a `bool`:
///
/// ```
/// use druid_action_bar::{ActionBar, ActionBarView, L10nManager, ListenerError};
///
/// let mut bar = ActionBar::init(Some(ActionBarView::new()), None, &L10nManager::builtin()).unwrap();
/// bar.add_menu_visibility_listener(|visible: bool| -> Result<(), ListenerError> {
///     println!("menu visible: {}", visible);
///     Ok(())
/// });
/// assert_eq!(bar.on_menu_visibility_changed(true), 0);
/// ```
pub trait MenuVisibilityListener {
    fn menu_visibility_changed(&mut self, is_visible: bool) -> Result<(), ListenerError>;
}

impl<F: FnMut(bool) -> Result<(), ListenerError>> MenuVisibilityListener for F {
    fn menu_visibility_changed(&mut self, is_visible: bool) -> Result<(), ListenerError> {
        (self)(is_visible)
    }
}

/// Identifies a registered [`MenuVisibilityListener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerToken(u64);

/// An action bar.
///
/// The `ActionBar` owns the bar view and keeps it in sync with a [`Menu`]:
/// call [`on_menu_inflated`] whenever the menu is (re)built and
/// [`on_configuration_changed`] whenever the screen changes. Both compute a
/// fresh [`Placement`], record it on the menu, and repopulate the bar.
///
/// [`on_menu_inflated`]: ActionBar::on_menu_inflated
/// [`on_configuration_changed`]: ActionBar::on_configuration_changed
pub struct ActionBar<V> {
    view: V,
    overflow_description: ArcStr,
    menu_listeners: Vec<(ListenerToken, Box<dyn MenuVisibilityListener>)>,
    next_token: u64,
}

impl<V: BarView + BarContainer> ActionBar<V> {
    /// Set up an action bar on `view`.
    ///
    /// Fails with [`Error::MissingBarView`] if there is no view; this is a
    /// layout error and retrying will not help.
    ///
    /// If the view has no title yet, the activity's label becomes the
    /// title. A missing activity record only means there is no default
    /// title.
    pub fn init(
        view: Option<V>,
        activity: Option<&ActivityInfo>,
        l10n: &L10nManager,
    ) -> Result<Self, Error> {
        let mut view = view.ok_or(Error::MissingBarView)?;

        if view.title().is_none() {
            match activity {
                Some(info) => view.set_title(info.resolve_label(l10n)),
                None => warn!("no activity record, the action bar has no default title"),
            }
        }

        let overflow_description = l10n
            .localize("action-bar-overflow-description")
            .unwrap_or_else(|| "More options".into());

        Ok(ActionBar {
            view,
            overflow_description,
            menu_listeners: Vec::new(),
            next_token: 0,
        })
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// The accessible description of the overflow button.
    pub fn overflow_description(&self) -> &str {
        &self.overflow_description
    }

    /// Place the items of a freshly inflated `menu`.
    ///
    /// The capacity is read from `config` on every call. The placement is
    /// recorded on the menu, so its overflow no longer lists promoted items,
    /// and the bar is cleared and refilled with one item per promoted entry,
    /// in placement order.
    pub fn on_menu_inflated(&mut self, menu: &mut Menu, config: &Configuration) -> Placement {
        let max_items = config.max_action_buttons();
        let shows_text = menu.shows_action_item_text();
        let placement = compute_placement(menu.candidates(), max_items, shows_text);

        menu.apply_placement(&placement);

        self.view.remove_all_items();
        for id in placement.kept() {
            if let Some(item) = menu.get(*id) {
                self.view.add_item(ActionItemView::new(item, shows_text));
            }
        }

        debug!(
            "placed {} of {} menu items on a bar with {} slots",
            placement.promoted_count(),
            menu.len(),
            placement.max_slots()
        );
        placement
    }

    /// Place `menu` again after a change of screen configuration.
    pub fn on_configuration_changed(
        &mut self,
        menu: &mut Menu,
        config: &Configuration,
    ) -> Placement {
        debug!(
            "configuration changed to {}x{}dp",
            config.screen_width_dp(),
            config.screen_height_dp()
        );
        self.on_menu_inflated(menu, config)
    }

    /// Register a listener for overflow menu visibility changes.
    pub fn add_menu_visibility_listener(
        &mut self,
        listener: impl MenuVisibilityListener + 'static,
    ) -> ListenerToken {
        let token = ListenerToken(self.next_token);
        self.next_token += 1;
        self.menu_listeners.push((token, Box::new(listener)));
        token
    }

    /// Unregister a listener. Returns `false` if it was not registered.
    pub fn remove_menu_visibility_listener(&mut self, token: ListenerToken) -> bool {
        let len = self.menu_listeners.len();
        self.menu_listeners.retain(|(t, _)| *t != token);
        self.menu_listeners.len() != len
    }

    /// Tell every listener that the overflow menu was shown or hidden.
    ///
    /// Listeners are called in the order they were added. A listener that
    /// fails or panics is logged and skipped; the rest are still called.
    /// Returns the number of listeners that failed.
    pub fn on_menu_visibility_changed(&mut self, is_visible: bool) -> usize {
        let mut failures = 0;
        for (token, listener) in self.menu_listeners.iter_mut() {
            let result = panic::catch_unwind(AssertUnwindSafe(|| {
                listener.menu_visibility_changed(is_visible)
            }));
            match result {
                Ok(Ok(())) => (),
                Ok(Err(err)) => {
                    warn!("menu visibility listener {:?} failed: {}", token, err);
                    failures += 1;
                }
                Err(_) => {
                    error!("menu visibility listener {:?} panicked", token);
                    failures += 1;
                }
            }
        }
        failures
    }

    /// Show or hide the indeterminate progress indicator.
    pub fn set_progress_bar_indeterminate_visibility(&mut self, visible: bool) {
        self.view.set_progress_bar_indeterminate_visibility(visible);
    }

    /// Contextual action modes are not supported.
    pub fn start_action_mode(&mut self) -> Result<(), Error> {
        Err(Error::ActionModeUnsupported)
    }

    pub fn title(&self) -> Option<&str> {
        self.view.title()
    }

    pub fn set_title(&mut self, title: impl Into<ArcStr>) {
        self.view.set_title(Some(title.into()));
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.view.subtitle()
    }

    pub fn set_subtitle(&mut self, subtitle: Option<ArcStr>) {
        self.view.set_subtitle(subtitle);
    }

    pub fn display_options(&self) -> DisplayOptions {
        self.view.display_options()
    }

    pub fn set_display_options(&mut self, options: DisplayOptions) {
        self.view.set_display_options(options);
    }

    /// Change only the options selected by `mask`.
    pub fn set_display_options_masked(&mut self, options: DisplayOptions, mask: DisplayOptions) {
        let current = self.view.display_options();
        self.view
            .set_display_options(current.with_masked(options, mask));
    }

    pub fn set_display_home_as_up_enabled(&mut self, enabled: bool) {
        self.set_display_option(DisplayOptions::HOME_AS_UP, enabled);
    }

    pub fn set_display_show_home_enabled(&mut self, enabled: bool) {
        self.set_display_option(DisplayOptions::SHOW_HOME, enabled);
    }

    pub fn set_display_show_title_enabled(&mut self, enabled: bool) {
        self.set_display_option(DisplayOptions::SHOW_TITLE, enabled);
    }

    pub fn set_display_use_logo_enabled(&mut self, enabled: bool) {
        self.set_display_option(DisplayOptions::USE_LOGO, enabled);
    }

    pub fn set_display_show_custom_enabled(&mut self, enabled: bool) {
        self.set_display_option(DisplayOptions::SHOW_CUSTOM, enabled);
    }

    fn set_display_option(&mut self, option: DisplayOptions, enabled: bool) {
        let mut options = self.view.display_options();
        options.set(option, enabled);
        self.view.set_display_options(options);
    }

    pub fn navigation_mode(&self) -> NavigationMode {
        self.view.navigation_mode()
    }

    pub fn set_navigation_mode(&mut self, mode: NavigationMode) {
        self.view.set_navigation_mode(mode);
    }

    pub fn height(&self) -> f64 {
        self.view.height()
    }

    pub fn set_background(&mut self, background: Option<Drawable>) {
        self.view.set_background(background);
    }

    pub fn show(&mut self) {
        self.view.set_visible(true);
    }

    pub fn hide(&mut self) {
        self.view.set_visible(false);
    }

    pub fn is_showing(&self) -> bool {
        self.view.is_visible()
    }
}
