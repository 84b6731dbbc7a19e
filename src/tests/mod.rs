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

//! Additional unit tests that cross file or module boundaries.

mod helpers;

use std::cell::RefCell;
use std::rc::Rc;

use test_log::test;

use crate::*;
use helpers::*;

fn mail_menu() -> Menu {
    Menu::new()
        .entry(icon_item("compose", ShowAsAction::Always))
        .entry(icon_item("search", ShowAsAction::IfRoom))
        .entry(icon_item("refresh", ShowAsAction::IfRoom))
        .entry(icon_item("archive", ShowAsAction::Always))
        .entry(MenuItem::new("settings"))
        .entry(MenuItem::new("help").show_as_action(ShowAsAction::IfRoom))
}

fn builtin_bar(recording: &Recording) -> ActionBar<RecordingView> {
    ActionBar::init(
        Some(RecordingView::new(recording)),
        None,
        &L10nManager::builtin(),
    )
    .unwrap()
}

#[test]
fn missing_view_is_a_setup_error() {
    let result = ActionBar::<ActionBarView>::init(None, None, &L10nManager::builtin());
    assert_eq!(result.err(), Some(Error::MissingBarView));
}

#[test]
fn inflation_fills_bar_and_overflow() {
    let recording = Recording::default();
    let mut bar = builtin_bar(&recording);
    let mut menu = mail_menu();

    // 360dp wide: three slots
    let placement = bar.on_menu_inflated(&mut menu, &Configuration::new(360.0, 640.0));

    assert_eq!(placement.max_slots(), 3);
    assert_eq!(bar_titles(bar.view()), vec!["compose", "search", "archive"]);
    assert_eq!(overflow_titles(&menu), vec!["refresh", "settings", "help"]);
    assert!(menu
        .action_items()
        .all(|item| placement.is_promoted(item.id())));
}

#[test]
fn bar_is_cleared_before_it_is_refilled() {
    let recording = Recording::default();
    let mut bar = builtin_bar(&recording);
    let mut menu = mail_menu();
    let config = Configuration::new(320.0, 480.0);

    let placement = bar.on_menu_inflated(&mut menu, &config);
    assert_eq!(recording.next(), Record::RemoveAll);
    for id in placement.kept() {
        assert_eq!(recording.next(), Record::Add(*id));
    }
    assert!(recording.is_empty());

    // a second inflation starts from scratch again
    bar.on_menu_inflated(&mut menu, &config);
    assert_eq!(recording.next(), Record::RemoveAll);
    assert_eq!(recording.len(), placement.kept().len());
    assert_eq!(bar.view().items().len(), placement.kept().len());
}

#[test]
fn rotation_requeries_capacity() {
    let recording = Recording::default();
    let mut bar = builtin_bar(&recording);
    let mut menu = mail_menu();
    let portrait = Configuration::new(320.0, 640.0);

    let placement = bar.on_menu_inflated(&mut menu, &portrait);
    assert_eq!(placement.max_slots(), 2);
    // compose and archive are always shown; nothing else fits
    assert_eq!(bar_titles(bar.view()), vec!["compose", "archive"]);

    let placement = bar.on_configuration_changed(&mut menu, &portrait.rotated());
    assert_eq!(placement.max_slots(), 5);
    assert_eq!(
        bar_titles(bar.view()),
        vec!["compose", "search", "refresh", "archive"]
    );
    assert_eq!(overflow_titles(&menu), vec!["settings", "help"]);

    let placement = bar.on_configuration_changed(&mut menu, &portrait);
    assert_eq!(placement.max_slots(), 2);
    assert_eq!(overflow_titles(&menu), vec!["search", "refresh", "settings", "help"]);
}

#[test]
fn text_mode_changes_eligibility() {
    let recording = Recording::default();
    let mut bar = builtin_bar(&recording);
    let mut menu = mail_menu().with_action_item_text(true);

    let placement = bar.on_menu_inflated(&mut menu, &Configuration::new(1024.0, 768.0));

    // "help" has a title, which is all it needs when text is preferred
    assert_eq!(
        bar_titles(bar.view()),
        vec!["compose", "search", "refresh", "archive", "help"]
    );
    assert_eq!(placement.promoted_count(), 5);
    assert!(bar.view().items().iter().all(ActionItemView::shows_text));
}

#[test]
fn always_items_may_overfill_the_bar() {
    let recording = Recording::default();
    let mut bar = builtin_bar(&recording);
    let mut menu = Menu::new()
        .entry(icon_item("x", ShowAsAction::Always))
        .entry(icon_item("y", ShowAsAction::Always))
        .entry(icon_item("z", ShowAsAction::IfRoom));
    let config = Configuration::new(320.0, 480.0).with_limits(ActionButtonLimits::new(1));

    let placement = bar.on_menu_inflated(&mut menu, &config);
    assert!(placement.exceeds_capacity());
    assert_eq!(bar_titles(bar.view()), vec!["x", "y"]);
    assert_eq!(overflow_titles(&menu), vec!["z"]);
}

#[test]
fn hidden_items_are_left_out() {
    let recording = Recording::default();
    let mut bar = builtin_bar(&recording);
    let mut menu = Menu::new()
        .entry(icon_item("edit", ShowAsAction::Always).hidden())
        .entry(icon_item("share", ShowAsAction::IfRoom));

    let placement = bar.on_menu_inflated(&mut menu, &Configuration::new(320.0, 480.0));
    assert_eq!(bar_titles(bar.view()), vec!["share"]);
    assert!(overflow_titles(&menu).is_empty());
    assert_eq!(placement.decision(menu.items()[0].id()), None);
}

#[test]
fn default_title_from_activity() {
    let l10n = L10nManager::from_sources(
        "en-US",
        vec![("en-US", "app.ftl", "inbox-title = Inbox")],
    );
    let activity = ActivityInfo::new()
        .label_key("inbox-title")
        .application_label("Mail");

    let bar = ActionBar::init(Some(ActionBarView::new()), Some(&activity), &l10n).unwrap();
    assert_eq!(bar.title(), Some("Inbox"));
    assert_eq!(bar.overflow_description(), "More options");

    // a title set by the layout is kept
    let bar = ActionBar::init(
        Some(ActionBarView::new().with_title("Drafts")),
        Some(&activity),
        &l10n,
    )
    .unwrap();
    assert_eq!(bar.title(), Some("Drafts"));

    // no activity record: no default title, but no error either
    let recording = Recording::default();
    let bar = ActionBar::init(Some(RecordingView::new(&recording)), None, &l10n).unwrap();
    assert_eq!(bar.title(), None);
}

#[test]
fn localized_overflow_description() {
    let l10n = L10nManager::from_sources(
        "fr-FR",
        vec![(
            "fr-FR",
            "action-bar.ftl",
            "action-bar-overflow-description = Plus d'options",
        )],
    );
    let bar = ActionBar::init(
        Some(RecordingView::new(&Recording::default()).with_title("Boîte")),
        None,
        &l10n,
    )
    .unwrap();
    assert_eq!(bar.overflow_description(), "Plus d'options");
}

#[test]
fn listeners_are_isolated() {
    let recording = Recording::default();
    let mut bar = builtin_bar(&recording);
    let seen = Rc::new(RefCell::new(Vec::new()));

    let first = seen.clone();
    bar.add_menu_visibility_listener(move |visible: bool| -> Result<(), ListenerError> {
        first.borrow_mut().push(("first", visible));
        Ok(())
    });
    bar.add_menu_visibility_listener(|_: bool| -> Result<(), ListenerError> {
        Err("listener is broken".into())
    });
    bar.add_menu_visibility_listener(|_: bool| -> Result<(), ListenerError> {
        panic!("listener panicked");
    });
    let last = seen.clone();
    let token = bar.add_menu_visibility_listener(move |visible: bool| -> Result<(), ListenerError> {
        last.borrow_mut().push(("last", visible));
        Ok(())
    });

    assert_eq!(bar.on_menu_visibility_changed(true), 2);
    assert_eq!(*seen.borrow(), vec![("first", true), ("last", true)]);

    assert!(bar.remove_menu_visibility_listener(token));
    assert!(!bar.remove_menu_visibility_listener(token));
    assert_eq!(bar.on_menu_visibility_changed(false), 2);
    assert_eq!(
        *seen.borrow(),
        vec![("first", true), ("last", true), ("first", false)]
    );
}

#[test]
fn pass_through_properties() {
    let mut bar = ActionBar::init(
        Some(ActionBarView::new().with_title("Inbox")),
        None,
        &L10nManager::builtin(),
    )
    .unwrap();

    bar.set_title("Sent");
    bar.set_subtitle(Some("3 messages".into()));
    assert_eq!(bar.title(), Some("Sent"));
    assert_eq!(bar.subtitle(), Some("3 messages"));

    assert_eq!(
        bar.display_options(),
        DisplayOptions::SHOW_HOME | DisplayOptions::SHOW_TITLE
    );
    bar.set_display_home_as_up_enabled(true);
    bar.set_display_show_title_enabled(false);
    bar.set_display_use_logo_enabled(true);
    assert_eq!(
        bar.display_options(),
        DisplayOptions::SHOW_HOME | DisplayOptions::HOME_AS_UP | DisplayOptions::USE_LOGO
    );
    bar.set_display_options_masked(DisplayOptions::SHOW_CUSTOM, DisplayOptions::SHOW_CUSTOM);
    bar.set_display_show_home_enabled(false);
    assert_eq!(
        bar.display_options(),
        DisplayOptions::HOME_AS_UP | DisplayOptions::USE_LOGO | DisplayOptions::SHOW_CUSTOM
    );
    bar.set_display_show_custom_enabled(false);
    bar.set_display_options(DisplayOptions::NONE);
    assert!(bar.display_options().is_empty());

    bar.set_navigation_mode(NavigationMode::Tabs);
    assert_eq!(bar.navigation_mode(), NavigationMode::Tabs);

    bar.set_progress_bar_indeterminate_visibility(true);
    assert!(bar.view().is_progress_visible());

    assert!(bar.is_showing());
    bar.hide();
    assert!(!bar.is_showing());
    bar.show();
    assert!(bar.is_showing());

    bar.set_background(Some(Drawable::new("bar_bg")));
    assert_eq!(bar.view().background().map(Drawable::name), Some("bar_bg"));
    assert_eq!(bar.height(), 48.0);

    assert_eq!(bar.start_action_mode(), Err(Error::ActionModeUnsupported));
}

#[test]
fn repeated_inflation_is_stable() {
    let recording = Recording::default();
    let mut bar = builtin_bar(&recording);
    let config = Configuration::new(500.0, 800.0);
    let mut menu = mail_menu();

    let first = bar.on_menu_inflated(&mut menu, &config);
    let titles = bar_titles(bar.view());
    let second = bar.on_menu_inflated(&mut menu, &config);

    assert_eq!(first, second);
    assert_eq!(titles, bar_titles(bar.view()));
    recording.clear();
}
