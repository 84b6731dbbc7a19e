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

//! Helper types for test writing.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::*;

/// A bar view that records every item operation it receives.
#[derive(Default)]
pub struct RecordingView {
    inner: ActionBarView,
    recording: Recording,
}

/// A shared log of item operations.
#[derive(Debug, Clone, Default)]
pub struct Recording(Rc<RefCell<VecDeque<Record>>>);

#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    RemoveAll,
    Add(MenuItemId),
}

impl Recording {
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear()
    }

    /// Returns the next record, panicking if there is none.
    pub fn next(&self) -> Record {
        self.0
            .borrow_mut()
            .pop_front()
            .expect("recording is empty")
    }

    fn push(&self, record: Record) {
        self.0.borrow_mut().push_back(record)
    }
}

impl RecordingView {
    pub fn new(recording: &Recording) -> Self {
        RecordingView {
            inner: ActionBarView::new(),
            recording: recording.clone(),
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.inner = self.inner.with_title(title);
        self
    }
}

impl BarView for RecordingView {
    fn remove_all_items(&mut self) {
        self.recording.push(Record::RemoveAll);
        self.inner.remove_all_items();
    }

    fn add_item(&mut self, item: ActionItemView) {
        self.recording.push(Record::Add(item.item()));
        self.inner.add_item(item);
    }

    fn items(&self) -> &[ActionItemView] {
        self.inner.items()
    }

    fn title(&self) -> Option<&str> {
        self.inner.title()
    }

    fn set_title(&mut self, title: Option<ArcStr>) {
        self.inner.set_title(title);
    }

    fn subtitle(&self) -> Option<&str> {
        self.inner.subtitle()
    }

    fn set_subtitle(&mut self, subtitle: Option<ArcStr>) {
        self.inner.set_subtitle(subtitle);
    }

    fn display_options(&self) -> DisplayOptions {
        self.inner.display_options()
    }

    fn set_display_options(&mut self, options: DisplayOptions) {
        self.inner.set_display_options(options);
    }

    fn navigation_mode(&self) -> NavigationMode {
        self.inner.navigation_mode()
    }

    fn set_navigation_mode(&mut self, mode: NavigationMode) {
        self.inner.set_navigation_mode(mode);
    }

    fn set_progress_bar_indeterminate_visibility(&mut self, visible: bool) {
        self.inner.set_progress_bar_indeterminate_visibility(visible);
    }

    fn height(&self) -> f64 {
        self.inner.height()
    }
}

impl BarContainer for RecordingView {
    fn set_visible(&mut self, visible: bool) {
        self.inner.set_visible(visible);
    }

    fn is_visible(&self) -> bool {
        self.inner.is_visible()
    }

    fn set_background(&mut self, background: Option<Drawable>) {
        self.inner.set_background(background);
    }
}

/// An item with an icon, so it can be placed whether or not the menu
/// prefers text.
pub fn icon_item(title: &str, show: ShowAsAction) -> MenuItem {
    MenuItem::new(title)
        .icon(Drawable::new(format!("ic_{}", title)))
        .show_as_action(show)
}

/// The titles of the items on the bar, in display order.
pub fn bar_titles(view: &impl BarView) -> Vec<String> {
    view.items()
        .iter()
        .filter_map(|item| item.title().map(String::from))
        .collect()
}

/// The titles of the menu's overflow items, in order.
pub fn overflow_titles(menu: &Menu) -> Vec<String> {
    menu.overflow_items()
        .filter_map(|item| item.title().map(String::from))
        .collect()
}
