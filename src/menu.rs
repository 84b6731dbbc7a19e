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

//! Menus.
//!
//! # How menus relate to the action bar
//!
//! A [`Menu`] is a flat, ordered list of [`MenuItem`]s, in the order they
//! were declared. Each item declares how much it wants to be on the action
//! bar with a [`ShowAsAction`] value, and carries whatever it needs to be
//! drawn there: a title, a [`Drawable`] icon, or a custom [`ActionView`].
//!
//! When the menu is inflated the action bar computes a [`Placement`] and
//! hands it back to the menu with [`Menu::apply_placement`]. From then on
//! each item knows whether it is shown on the bar, and the overflow menu
//! only lists the items that are not ([`Menu::overflow_items`]).
//!
//! The menu is rebuilt on every inflation; nothing about a previous
//! placement is remembered except the flags the latest one wrote.
//!
//! [`Placement`]: crate::Placement

use std::sync::atomic::{AtomicU32, Ordering};

use tracing::{debug, trace};

use crate::{ArcStr, Placement};

/// Uniquely identifies a menu item.
///
/// Ids are allocated when an item is created and are never reused, so they
/// are a stable key for an item across placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MenuItemId(u32);

static MENU_ITEM_ID_COUNTER: AtomicU32 = AtomicU32::new(1);

impl MenuItemId {
    /// Allocate a new, unique menu item id.
    ///
    /// Do note that if we create 4 billion menu items there may be a collision.
    pub fn next() -> MenuItemId {
        let id = MENU_ITEM_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        MenuItemId(id)
    }

    /// The raw integer value of this id.
    pub fn to_raw(self) -> u32 {
        self.0
    }
}

/// How much an item wants to be shown on the action bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShowAsAction {
    /// Never shown on the bar; the item always lives in the overflow menu.
    Never,
    /// Shown on the bar if there is a free slot when the item is considered.
    ///
    /// An item accepted this way can still lose its slot to a later
    /// [`ShowAsAction::Always`] item.
    IfRoom,
    /// Always shown on the bar, even if that exceeds the bar's capacity.
    Always,
}

impl Default for ShowAsAction {
    fn default() -> Self {
        ShowAsAction::Never
    }
}

/// A reference to a graphic resource, such as an icon or a background.
///
/// The action bar never draws these itself; it only needs to know whether
/// an item has one, and to hand it on to the view.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Drawable(ArcStr);

impl Drawable {
    /// Create a reference to the named resource.
    pub fn new(name: impl Into<ArcStr>) -> Self {
        Drawable(name.into())
    }

    /// The name of the referenced resource.
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// A reference to a custom widget that replaces an item's default
/// presentation on the bar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActionView(ArcStr);

impl ActionView {
    /// Create a reference to the named widget.
    pub fn new(name: impl Into<ArcStr>) -> Self {
        ActionView(name.into())
    }

    /// The name of the referenced widget.
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// A normal menu item.
///
/// Items are created with a builder-style API:
///
/// ```
/// use druid_action_bar::{Drawable, MenuItem, ShowAsAction};
///
/// let item = MenuItem::new("Share")
///     .icon(Drawable::new("ic_share"))
///     .show_as_action(ShowAsAction::IfRoom);
///
/// assert_eq!(item.title(), Some("Share"));
/// assert!(!item.is_shown_on_action_bar());
/// ```
#[derive(Debug, Clone)]
pub struct MenuItem {
    id: MenuItemId,
    title: Option<ArcStr>,
    icon: Option<Drawable>,
    action_view: Option<ActionView>,
    show_as_action: ShowAsAction,
    visible: bool,
    enabled: bool,
    shown_on_action_bar: bool,
}

impl MenuItem {
    /// Create a new `MenuItem` with the given title.
    pub fn new(title: impl Into<ArcStr>) -> Self {
        MenuItem {
            title: Some(title.into()),
            ..MenuItem::untitled()
        }
    }

    /// Create a new `MenuItem` with no title.
    ///
    /// Such an item can still be shown on the bar if it has an icon or an
    /// action view and the menu does not prefer text.
    pub fn untitled() -> Self {
        MenuItem {
            id: MenuItemId::next(),
            title: None,
            icon: None,
            action_view: None,
            show_as_action: ShowAsAction::Never,
            visible: true,
            enabled: true,
            shown_on_action_bar: false,
        }
    }

    /// Builder-style method to set this item's icon.
    pub fn icon(mut self, icon: Drawable) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Builder-style method to set a custom view for this item.
    pub fn action_view(mut self, view: ActionView) -> Self {
        self.action_view = Some(view);
        self
    }

    /// Builder-style method to set how this item wants to be shown.
    pub fn show_as_action(mut self, show_as_action: ShowAsAction) -> Self {
        self.show_as_action = show_as_action;
        self
    }

    /// Hide this item. Hidden items are neither placed on the bar nor
    /// listed in the overflow menu.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Disable this menu item.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// The item's id.
    pub fn id(&self) -> MenuItemId {
        self.id
    }

    /// The item's title, if it has one.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub(crate) fn title_arc(&self) -> Option<ArcStr> {
        self.title.clone()
    }

    /// The item's icon, if it has one.
    pub fn get_icon(&self) -> Option<&Drawable> {
        self.icon.as_ref()
    }

    /// The item's custom view, if it has one.
    pub fn get_action_view(&self) -> Option<&ActionView> {
        self.action_view.as_ref()
    }

    /// How this item wants to be shown.
    pub fn get_show_as_action(&self) -> ShowAsAction {
        self.show_as_action
    }

    /// Change how this item wants to be shown.
    ///
    /// This takes effect on the next placement.
    pub fn set_show_as_action(&mut self, show_as_action: ShowAsAction) {
        self.show_as_action = show_as_action;
    }

    /// Set or clear this item's title.
    pub fn set_title(&mut self, title: Option<ArcStr>) {
        self.title = title;
    }

    /// Set or clear this item's icon.
    pub fn set_icon(&mut self, icon: Option<Drawable>) {
        self.icon = icon;
    }

    /// Show or hide this item.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the latest placement put this item on the action bar.
    pub fn is_shown_on_action_bar(&self) -> bool {
        self.shown_on_action_bar
    }

    pub(crate) fn set_shown_on_action_bar(&mut self, shown: bool) {
        self.shown_on_action_bar = shown;
    }
}

/// An ordered list of menu items.
#[derive(Debug, Clone, Default)]
pub struct Menu {
    items: Vec<MenuItem>,
    shows_action_item_text: bool,
}

impl Menu {
    /// Create a new, empty menu.
    pub fn new() -> Self {
        Menu::default()
    }

    /// Builder-style method to append an item.
    pub fn entry(mut self, item: MenuItem) -> Self {
        self.push(item);
        self
    }

    /// Builder-style method to make items on the bar prefer their title
    /// over their icon.
    pub fn with_action_item_text(mut self, shows_text: bool) -> Self {
        self.shows_action_item_text = shows_text;
        self
    }

    /// Append an item, returning its id.
    ///
    /// Placements are keyed by id, so an item whose id is already in the
    /// menu (a clone of an earlier item, say) is given a fresh one. The
    /// returned id is the one the item ends up with.
    pub fn push(&mut self, mut item: MenuItem) -> MenuItemId {
        if self.get(item.id).is_some() {
            let fresh = MenuItemId::next();
            debug!("item {:?} is already in the menu, using {:?}", item.id, fresh);
            item.id = fresh;
        }
        item.shown_on_action_bar = false;
        let id = item.id;
        self.items.push(item);
        id
    }

    /// Remove all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The number of items in the menu, including hidden ones.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items, in declaration order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// The item with the given id.
    pub fn get(&self, id: MenuItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// The item with the given id, mutably.
    pub fn get_mut(&mut self, id: MenuItemId) -> Option<&mut MenuItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Whether items on the bar should show their title rather than only
    /// their icon.
    pub fn shows_action_item_text(&self) -> bool {
        self.shows_action_item_text
    }

    pub fn set_shows_action_item_text(&mut self, shows_text: bool) {
        self.shows_action_item_text = shows_text;
    }

    /// The items that take part in placement: every visible item, in
    /// declaration order.
    pub fn candidates(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter().filter(|item| item.visible)
    }

    /// Record the outcome of a placement on every item.
    ///
    /// Items promoted by `placement` are marked as shown on the action bar;
    /// every other item, including ones the placement never saw, is
    /// cleared. The whole menu is updated in one call.
    pub fn apply_placement(&mut self, placement: &Placement) {
        for item in self.items.iter_mut() {
            let shown = placement.is_promoted(item.id);
            if shown != item.shown_on_action_bar {
                trace!("item {:?} shown on action bar: {}", item.id, shown);
            }
            item.shown_on_action_bar = shown;
        }
    }

    /// The items currently shown on the action bar, in declaration order.
    pub fn action_items(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter().filter(|item| item.shown_on_action_bar)
    }

    /// The items the overflow menu should list: every visible item that is
    /// not shown on the action bar, in declaration order.
    pub fn overflow_items(&self) -> impl Iterator<Item = &MenuItem> {
        self.items
            .iter()
            .filter(|item| item.visible && !item.shown_on_action_bar)
    }
}
