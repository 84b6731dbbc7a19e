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

//! Errors at the action bar level.

use std::fmt;

/// Action bar errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The window layout has no bar view to drive.
    ///
    /// This is a setup error and is not recoverable; the action bar can
    /// only be used with a layout that contains a bar.
    MissingBarView,
    /// Contextual action modes are not supported.
    ActionModeUnsupported,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Error::MissingBarView => write!(
                f,
                "The action bar can only be used with a layout that contains a bar view."
            ),
            Error::ActionModeUnsupported => write!(f, "Action modes are not implemented."),
        }
    }
}

impl std::error::Error for Error {}
