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

//! Localization handling.
//!
//! Localization is backed by [Fluent], via [fluent-rs].
//!
//! The action bar needs localized strings for two things: the default title,
//! which comes from the activity's label key, and its own few built-in
//! strings, such as the description of the overflow button.
//!
//! Strings are looked up in a stack of bundles, one per negotiated locale,
//! so a message missing from the requested locale falls back to the next
//! best one and finally to `en-US`.
//!
//! [Fluent]: https://projectfluent.org
//! [fluent-rs]: https://github.com/projectfluent/fluent-rs

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::{fs, io};

use fluent_bundle::{FluentArgs, FluentBundle, FluentError, FluentResource};
use fluent_langneg::{negotiate_languages, NegotiationStrategy};
use tracing::{debug, warn};
use unic_langid::LanguageIdentifier;

use crate::ArcStr;

static FALLBACK_STRINGS: &str = include_str!("../resources/i18n/en-US/action-bar.ftl");
const FALLBACK_RESOURCE: &str = "action-bar.ftl";
const DEFAULT_LOCALE: &str = "en-US";

/// Provides access to the localization strings for the current locale.
pub struct L10nManager {
    res_mgr: ResourceManager,
    resources: Vec<String>,
    current_bundle: BundleStack,
    current_locale: LanguageIdentifier,
}

/// Manages a collection of localization files.
struct ResourceManager {
    resources: HashMap<String, Arc<FluentResource>>,
    source: ResourceSource,
    locales: Vec<LanguageIdentifier>,
    default_locale: LanguageIdentifier,
}

/// Where localization files come from.
enum ResourceSource {
    /// A directory laid out as `{base_dir}/{locale}/{res_id}`.
    Directory(PathBuf),
    /// Sources keyed by `(locale, res_id)`.
    Memory(HashMap<(String, String), String>),
}

/// A stack of localization resources, used for fallback.
struct BundleStack(Vec<FluentBundle<Arc<FluentResource>>>);

impl BundleStack {
    fn format(
        &self,
        id: &str,
        args: Option<&FluentArgs>,
        errors: &mut Vec<FluentError>,
    ) -> Option<String> {
        self.0.iter().find_map(|bundle| {
            let pattern = bundle.get_message(id)?.value()?;
            Some(bundle.format_pattern(pattern, args, errors).into_owned())
        })
    }
}

impl ResourceSource {
    fn load(&self, locale: &str, res_id: &str) -> Option<String> {
        match self {
            ResourceSource::Directory(base_dir) => {
                let path = base_dir.join(locale).join(res_id);
                fs::read_to_string(&path).ok()
            }
            ResourceSource::Memory(map) => map
                .get(&(locale.to_string(), res_id.to_string()))
                .cloned(),
        }
    }
}

impl ResourceManager {
    /// Loads a localization resource, as needed.
    fn get_resource(&mut self, res_id: &str, locale: &str) -> Arc<FluentResource> {
        let cache_key = format!("{}/{}", locale, res_id);
        if let Some(res) = self.resources.get(&cache_key) {
            return res.clone();
        }

        let string = self.source.load(locale, res_id).unwrap_or_else(|| {
            if (res_id, locale) == (FALLBACK_RESOURCE, DEFAULT_LOCALE) {
                FALLBACK_STRINGS.to_string()
            } else {
                debug!("missing resource {}/{}", locale, res_id);
                String::new()
            }
        });
        let res = match FluentResource::try_new(string) {
            Ok(res) => Arc::new(res),
            Err((res, errs)) => {
                for err in errs {
                    warn!("error parsing {}/{}: {:?}", locale, res_id, err);
                }
                Arc::new(res)
            }
        };
        self.resources.insert(cache_key, res.clone());
        res
    }

    /// Return the best localization bundles for the provided `LanguageIdentifier`.
    fn get_bundle(&mut self, locale: &LanguageIdentifier, resource_ids: &[String]) -> BundleStack {
        let resolved_locales = self.resolve_locales(locale.clone());
        debug!("resolved: {}", PrintLocales(resolved_locales.as_slice()));
        let mut stack = Vec::new();
        for locale in &resolved_locales {
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            for res_id in resource_ids {
                let res = self.get_resource(res_id, &locale.to_string());
                if let Err(errs) = bundle.add_resource(res) {
                    for err in errs {
                        warn!("error adding {}/{}: {:?}", locale, res_id, err);
                    }
                }
            }
            stack.push(bundle);
        }
        BundleStack(stack)
    }

    /// Given a locale, returns the best set of available locales.
    fn resolve_locales(&self, locale: LanguageIdentifier) -> Vec<LanguageIdentifier> {
        negotiate_languages(
            &[locale],
            &self.locales,
            Some(&self.default_locale),
            NegotiationStrategy::Filtering,
        )
        .into_iter()
        .map(|l| l.to_owned())
        .collect()
    }
}

impl L10nManager {
    /// Create a new localization manager for `locale`.
    ///
    /// `resources` is a list of file names that contain strings. `base_dir`
    /// is a path to a directory that includes per-locale subdirectories.
    ///
    /// This directory should be of the structure `base_dir/{locale}/{resource}`,
    /// where '{locale}' is a valid BCP47 language tag, and {resource} is a `.ftl`
    /// included in `resources`. A missing or unreadable directory leaves only
    /// the built-in strings.
    pub fn new(resources: Vec<String>, base_dir: impl AsRef<Path>, locale: &str) -> Self {
        fn get_available_locales(base_dir: &Path) -> Result<Vec<LanguageIdentifier>, io::Error> {
            let mut locales = vec![];

            for entry in fs::read_dir(base_dir)? {
                let path = entry?.path();
                if !path.is_dir() {
                    continue;
                }
                if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
                    match name.parse::<LanguageIdentifier>() {
                        Ok(langid) => locales.push(langid),
                        Err(err) => warn!("skipping locale directory '{}': {}", name, err),
                    }
                }
            }
            Ok(locales)
        }

        let base_dir = base_dir.as_ref();
        let locales = get_available_locales(base_dir).unwrap_or_else(|err| {
            warn!("no localization directory at {}: {}", base_dir.display(), err);
            Vec::new()
        });
        L10nManager::with_source(
            ResourceSource::Directory(base_dir.to_owned()),
            locales,
            resources,
            locale,
        )
    }

    /// Create a localization manager from in-memory Fluent sources.
    ///
    /// Each source is a `(locale, resource name, text)` triple.
    ///
    /// # Examples
    ///
    /// ```
    /// use druid_action_bar::L10nManager;
    ///
    /// let l10n = L10nManager::from_sources(
    ///     "de-DE",
    ///     vec![("de-DE", "app.ftl", "inbox-title = Posteingang")],
    /// );
    /// assert_eq!(l10n.localize("inbox-title").as_deref(), Some("Posteingang"));
    /// ```
    pub fn from_sources<'a>(
        locale: &str,
        sources: impl IntoIterator<Item = (&'a str, &'a str, &'a str)>,
    ) -> Self {
        let mut locales: Vec<LanguageIdentifier> = Vec::new();
        let mut resources: Vec<String> = Vec::new();
        let mut map = HashMap::new();
        for (source_locale, res_id, text) in sources {
            match source_locale.parse::<LanguageIdentifier>() {
                Ok(langid) if !locales.contains(&langid) => locales.push(langid),
                Ok(_) => (),
                Err(err) => {
                    warn!("skipping source for locale '{}': {}", source_locale, err);
                    continue;
                }
            }
            if !resources.iter().any(|r| r == res_id) {
                resources.push(res_id.to_string());
            }
            map.insert(
                (source_locale.to_string(), res_id.to_string()),
                text.to_string(),
            );
        }
        L10nManager::with_source(ResourceSource::Memory(map), locales, resources, locale)
    }

    /// A localization manager with only the built-in `en-US` strings.
    pub fn builtin() -> Self {
        L10nManager::from_sources(DEFAULT_LOCALE, Vec::new())
    }

    fn with_source(
        source: ResourceSource,
        mut locales: Vec<LanguageIdentifier>,
        mut resources: Vec<String>,
        locale: &str,
    ) -> Self {
        let default_locale: LanguageIdentifier = DEFAULT_LOCALE
            .parse()
            .unwrap_or_else(|_| LanguageIdentifier::default());
        if !locales.contains(&default_locale) {
            locales.push(default_locale.clone());
        }
        if !resources.iter().any(|r| r == FALLBACK_RESOURCE) {
            resources.insert(0, FALLBACK_RESOURCE.to_string());
        }
        let current_locale = parse_locale(locale, &default_locale);
        debug!(
            "available locales {}, current {}",
            PrintLocales(&locales),
            current_locale,
        );

        let mut res_mgr = ResourceManager {
            resources: HashMap::new(),
            source,
            locales,
            default_locale,
        };
        let current_bundle = res_mgr.get_bundle(&current_locale, &resources);

        L10nManager {
            res_mgr,
            resources,
            current_bundle,
            current_locale,
        }
    }

    /// The locale strings are currently resolved for.
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Switch to a new locale.
    ///
    /// Resources that were already loaded are not read again.
    pub fn set_locale(&mut self, locale: &str) {
        let locale = parse_locale(locale, &self.res_mgr.default_locale);
        if locale != self.current_locale {
            self.current_bundle = self.res_mgr.get_bundle(&locale, &self.resources);
            self.current_locale = locale;
        }
    }

    /// Fetch a localized string from the current bundle by key.
    pub fn localize(&self, key: &str) -> Option<ArcStr> {
        self.format(key, None)
    }

    /// Fetch a localized string that takes arguments.
    pub fn localize_with_args(&self, key: &str, args: &FluentArgs) -> Option<ArcStr> {
        self.format(key, Some(args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> Option<ArcStr> {
        let mut errs = Vec::new();
        let result = self.current_bundle.format(key, args, &mut errs)?;
        for err in errs {
            warn!("localization error {:?}", err);
        }

        // fluent inserts bidi controls when interpolating, and they can
        // cause rendering issues; for now we just strip them.
        // https://www.w3.org/International/questions/qa-bidi-unicode-controls#basedirection
        const START_ISOLATE: char = '\u{2068}';
        const END_ISOLATE: char = '\u{2069}';
        if args.is_some() && result.chars().any(|c| c == START_ISOLATE) {
            Some(
                result
                    .chars()
                    .filter(|c| c != &START_ISOLATE && c != &END_ISOLATE)
                    .collect::<String>()
                    .into(),
            )
        } else {
            Some(result.into())
        }
    }
}

fn parse_locale(locale: &str, default: &LanguageIdentifier) -> LanguageIdentifier {
    locale.parse().unwrap_or_else(|_| {
        warn!("invalid locale '{}', using {}", locale, default);
        default.clone()
    })
}

/// Helper to impl display for slices of displayable things.
struct PrintLocales<'a, T>(&'a [T]);

impl<'a, T: std::fmt::Display> std::fmt::Display for PrintLocales<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[")?;
        let mut prev = false;
        for l in self.0 {
            if prev {
                write!(f, ", ")?;
            }
            prev = true;
            write!(f, "{}", l)?;
        }
        write!(f, "]")
    }
}
