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

//! Deciding which menu items go on the action bar.

use fnv::FnvHashMap;
use tracing::{debug, trace};

use crate::{MenuItem, MenuItemId, ShowAsAction};

/// The outcome of one placement run.
///
/// A `Placement` says, for every item it was given, whether that item is
/// promoted onto the action bar. It does not touch the items themselves;
/// use [`Menu::apply_placement`] to record it.
///
/// [`Menu::apply_placement`]: crate::Menu::apply_placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    kept: Vec<MenuItemId>,
    decisions: FnvHashMap<MenuItemId, bool>,
    max_slots: usize,
}

impl Placement {
    /// The promoted items, in the order they should appear on the bar.
    pub fn kept(&self) -> &[MenuItemId] {
        &self.kept
    }

    /// Whether the item with this id was promoted.
    ///
    /// Items this placement never saw are not promoted.
    pub fn is_promoted(&self, id: MenuItemId) -> bool {
        self.decisions.get(&id).copied().unwrap_or(false)
    }

    /// The decision for the item with this id, or `None` if this placement
    /// never saw it.
    pub fn decision(&self, id: MenuItemId) -> Option<bool> {
        self.decisions.get(&id).copied()
    }

    /// Every decision, in no particular order.
    pub fn decisions(&self) -> impl Iterator<Item = (MenuItemId, bool)> + '_ {
        self.decisions.iter().map(|(id, promoted)| (*id, *promoted))
    }

    /// The number of promoted items.
    pub fn promoted_count(&self) -> usize {
        self.kept.len()
    }

    /// The capacity this placement was computed for.
    pub fn max_slots(&self) -> usize {
        self.max_slots
    }

    /// `true` if [`ShowAsAction::Always`] items pushed the bar past its
    /// capacity.
    pub fn exceeds_capacity(&self) -> bool {
        self.kept.len() > self.max_slots
    }
}

/// Decide which of `entries` are promoted onto an action bar with room for
/// `max_slots` items.
///
/// `entries` must be in declaration order; ties are always resolved in that
/// order. A negative `max_slots` is treated as zero.
///
/// An item is only considered if it can be drawn on the bar: with
/// `shows_text` it needs a non-empty title, otherwise it needs an icon or an
/// action view. Considered items are then taken in a single pass:
///
/// - [`ShowAsAction::Always`] items are always kept. If that puts the bar
///   over capacity, the most recently kept [`ShowAsAction::IfRoom`] item is
///   dropped to make room; if there is none, the bar stays over capacity.
/// - [`ShowAsAction::IfRoom`] items are kept if the bar has a free slot at
///   the moment they are considered.
/// - [`ShowAsAction::Never`] items are never kept.
///
/// Every entry gets a decision, including the ones that were not considered.
///
/// # Examples
///
/// ```
/// use druid_action_bar::{compute_placement, MenuItem, ShowAsAction};
///
/// let a = MenuItem::new("a").show_as_action(ShowAsAction::IfRoom);
/// let b = MenuItem::new("b").show_as_action(ShowAsAction::IfRoom);
/// let c = MenuItem::new("c").show_as_action(ShowAsAction::Always);
///
/// let placement = compute_placement(&[a.clone(), b.clone(), c.clone()], 2, true);
/// assert_eq!(placement.kept(), &[a.id(), c.id()]);
/// assert!(!placement.is_promoted(b.id()));
/// ```
pub fn compute_placement<'a>(
    entries: impl IntoIterator<Item = &'a MenuItem>,
    max_slots: i32,
    shows_text: bool,
) -> Placement {
    let max_slots = usize::try_from(max_slots).unwrap_or(0);
    let mut decisions = FnvHashMap::default();
    let mut kept: Vec<(MenuItemId, ShowAsAction)> = Vec::new();
    let mut if_room_items = 0;

    for item in entries {
        decisions.insert(item.id(), false);

        if !can_show_on_bar(item, shows_text) {
            trace!("item {:?} has nothing to draw on the bar", item.id());
            continue;
        }

        match item.get_show_as_action() {
            ShowAsAction::Always => {
                kept.push((item.id(), ShowAsAction::Always));

                if kept.len() > max_slots && if_room_items > 0 {
                    let last_if_room = kept
                        .iter()
                        .rposition(|(_, show)| *show == ShowAsAction::IfRoom);
                    if let Some(idx) = last_if_room {
                        let (demoted, _) = kept.remove(idx);
                        if_room_items -= 1;
                        debug!("item {:?} gives its slot to {:?}", demoted, item.id());
                    }
                }
            }
            ShowAsAction::IfRoom if kept.len() < max_slots => {
                kept.push((item.id(), ShowAsAction::IfRoom));
                if_room_items += 1;
            }
            ShowAsAction::IfRoom | ShowAsAction::Never => (),
        }
    }

    for (id, _) in &kept {
        decisions.insert(*id, true);
    }

    let kept: Vec<MenuItemId> = kept.into_iter().map(|(id, _)| id).collect();
    if kept.len() > max_slots {
        debug!(
            "{} items always shown on a bar with {} slots",
            kept.len(),
            max_slots
        );
    }

    Placement {
        kept,
        decisions,
        max_slots,
    }
}

/// Whether `item` has anything to draw on the bar in the current mode.
fn can_show_on_bar(item: &MenuItem, shows_text: bool) -> bool {
    if shows_text {
        item.title().map_or(false, |title| !title.is_empty())
    } else {
        item.get_icon().is_some() || item.get_action_view().is_some()
    }
}
