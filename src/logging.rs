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

use tracing_subscriber::EnvFilter;

/// Initialize a subscriber that prints log output to stderr.
///
/// The filter is read from `RUST_LOG`; without it, this crate logs at
/// `debug` and everything else at `info`. Does nothing if a global
/// subscriber is already set.
///
/// Meant for use during development only.
#[cfg_attr(docsrs, doc(cfg(feature = "default-logger")))]
pub fn log_to_console() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,druid_action_bar=debug"));
    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_err()
    {
        tracing::debug!("a global subscriber is already set");
    }
}
