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

//! The activity record the bar takes its default title from.

use tracing::debug;

use crate::{ArcStr, L10nManager};

/// What the host knows about the activity (window) that owns the bar.
///
/// Only the labels matter here: they provide the bar's default title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityInfo {
    package_name: Option<ArcStr>,
    application_label: Option<ArcStr>,
    label: Option<ArcStr>,
    label_key: Option<String>,
}

impl ActivityInfo {
    pub fn new() -> Self {
        ActivityInfo::default()
    }

    /// Builder-style method to set the localization key of the activity's
    /// label.
    pub fn label_key(mut self, key: impl Into<String>) -> Self {
        self.label_key = Some(key.into());
        self
    }

    /// Builder-style method to set the activity's plain label.
    pub fn label(mut self, label: impl Into<ArcStr>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Builder-style method to set the label of the application the
    /// activity belongs to.
    pub fn application_label(mut self, label: impl Into<ArcStr>) -> Self {
        self.application_label = Some(label.into());
        self
    }

    /// Builder-style method to set the name of the package the activity
    /// belongs to.
    pub fn package_name(mut self, name: impl Into<ArcStr>) -> Self {
        self.package_name = Some(name.into());
        self
    }

    /// The label to use as the bar's default title.
    ///
    /// A label key that resolves wins; then the activity's own label, the
    /// application's label, and finally the package name.
    pub fn resolve_label(&self, l10n: &L10nManager) -> Option<ArcStr> {
        if let Some(key) = &self.label_key {
            match l10n.localize(key) {
                Some(label) => return Some(label),
                None => debug!("label key '{}' did not resolve", key),
            }
        }
        self.label
            .clone()
            .or_else(|| self.application_label.clone())
            .or_else(|| self.package_name.clone())
    }
}
