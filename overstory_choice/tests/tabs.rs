// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tab list behavior through the public API.

use overstory_choice::{
    ActivationKind, ChoiceError, ChoiceEvent, MemberId, NavState, Role, Tab, Tabs, TabsOptions,
    TextDirection, Update, WrapMode,
};
use ui_events::keyboard::{Key, NamedKey};

fn tabs_with(options: TabsOptions, count: usize) -> (Tabs, Vec<MemberId>) {
    let mut tabs = Tabs::new(options);
    let ids = (0..count)
        .map(|i| {
            let tab = Tab::new(format!("tab{i}")).controls(format!("panel{i}"));
            tabs.push(tab.selected(i == 0)).0
        })
        .collect();
    (tabs, ids)
}

fn auto() -> TabsOptions {
    TabsOptions {
        auto_activate: true,
        ..TabsOptions::default()
    }
}

fn press(tabs: &mut Tabs, key: NamedKey) -> Update {
    tabs.key_down(&Key::Named(key))
}

#[test]
fn declared_selection_is_active() {
    let (tabs, ids) = tabs_with(TabsOptions::default(), 3);
    assert_eq!(tabs.active_tab(), Some(ids[0]));
    assert_eq!(tabs.active_tab_index(), Some(0));
    assert_eq!(tabs.active_panel(), Some("panel0"));
    assert_eq!(tabs.tab_index(ids[0]), 0);
    assert_eq!(tabs.tab_index(ids[1]), -1);
}

#[test]
fn empty_list_has_no_active_tab() {
    let mut tabs = Tabs::new(TabsOptions::default());
    assert_eq!(tabs.active_tab_index(), None);
    assert!(press(&mut tabs, NamedKey::ArrowRight).is_empty());
}

#[test]
fn auto_activation_selects_on_arrow() {
    let (mut tabs, ids) = tabs_with(auto(), 3);
    tabs.focus_in(ids[0]);

    let update = press(&mut tabs, NamedKey::ArrowRight);
    assert_eq!(update.focus, Some(ids[1]));
    assert_eq!(
        update.events.as_slice(),
        &[ChoiceEvent::Change {
            member: ids[1],
            value: "tab1".into(),
        }]
    );
    assert_eq!(tabs.active_tab_index(), Some(1));
    assert_eq!(tabs.active_panel(), Some("panel1"));
    assert_eq!(tabs.nav_state(), NavState::Idle);
}

#[test]
fn manual_activation_waits_for_enter() {
    let (mut tabs, ids) = tabs_with(TabsOptions::default(), 3);
    tabs.focus_in(ids[0]);

    let update = press(&mut tabs, NamedKey::ArrowRight);
    assert_eq!(update.focus, Some(ids[1]));
    assert!(update.events.is_empty());
    assert_eq!(tabs.active_tab_index(), Some(0));
    assert_eq!(tabs.nav_state(), NavState::Navigating { focused: ids[1] });
    // The focused tab is the tab stop while navigating.
    assert_eq!(tabs.tab_index(ids[1]), 0);
    assert_eq!(tabs.tab_index(ids[0]), -1);

    let update = press(&mut tabs, NamedKey::Enter);
    assert_eq!(update.changes().count(), 1);
    assert_eq!(tabs.active_tab_index(), Some(1));
    assert_eq!(tabs.nav_state(), NavState::Idle);

    // Committing the selected tab again is silent.
    assert!(press(&mut tabs, NamedKey::Enter).events.is_empty());
}

#[test]
fn space_commits_focused_tab() {
    let (mut tabs, ids) = tabs_with(TabsOptions::default(), 3);
    tabs.focus_in(ids[0]);
    press(&mut tabs, NamedKey::End);
    let update = tabs.key_down(&Key::Character(" ".into()));
    assert_eq!(update.changes().count(), 1);
    assert_eq!(tabs.active_tab(), Some(ids[2]));
}

#[test]
fn navigating_back_to_selected_is_idle() {
    let (mut tabs, ids) = tabs_with(TabsOptions::default(), 3);
    tabs.focus_in(ids[0]);
    press(&mut tabs, NamedKey::ArrowRight);
    press(&mut tabs, NamedKey::ArrowLeft);
    assert_eq!(tabs.focused_tab(), Some(ids[0]));
    assert_eq!(tabs.nav_state(), NavState::Idle);
}

#[test]
fn home_end_and_wrapping() {
    let (mut tabs, ids) = tabs_with(auto(), 4);
    tabs.focus_in(ids[0]);

    press(&mut tabs, NamedKey::End);
    assert_eq!(tabs.active_tab(), Some(ids[3]));
    press(&mut tabs, NamedKey::ArrowRight);
    assert_eq!(tabs.active_tab(), Some(ids[0]));
    press(&mut tabs, NamedKey::ArrowLeft);
    assert_eq!(tabs.active_tab(), Some(ids[3]));
    press(&mut tabs, NamedKey::Home);
    assert_eq!(tabs.active_tab(), Some(ids[0]));
}

#[test]
fn clamped_lists_stop_at_the_ends() {
    let options = TabsOptions {
        auto_activate: true,
        wrap: WrapMode::Clamp,
        ..TabsOptions::default()
    };
    let (mut tabs, ids) = tabs_with(options, 2);
    tabs.focus_in(ids[0]);
    assert!(press(&mut tabs, NamedKey::ArrowLeft).is_empty());
    press(&mut tabs, NamedKey::ArrowRight);
    assert!(press(&mut tabs, NamedKey::ArrowRight).events.is_empty());
    assert_eq!(tabs.active_tab(), Some(ids[1]));
}

#[test]
fn rtl_reverses_arrows() {
    let options = TabsOptions {
        auto_activate: true,
        direction: TextDirection::Rtl,
        ..TabsOptions::default()
    };
    let (mut tabs, ids) = tabs_with(options, 3);
    tabs.focus_in(ids[0]);
    press(&mut tabs, NamedKey::ArrowLeft);
    assert_eq!(tabs.active_tab(), Some(ids[1]));
}

#[test]
fn arrows_skip_disabled_tabs() {
    let mut tabs = Tabs::new(auto());
    let (a, _) = tabs.push(Tab::new("a").selected(true));
    let (b, _) = tabs.push(Tab::new("b").disabled(true));
    let (c, _) = tabs.push(Tab::new("c"));
    tabs.focus_in(a);
    press(&mut tabs, NamedKey::ArrowRight);
    assert_eq!(tabs.active_tab(), Some(c));
    assert!(!tabs.is_selected(b));
}

#[test]
fn single_tab_ignores_navigation() {
    let (mut tabs, ids) = tabs_with(auto(), 1);
    tabs.focus_in(ids[0]);
    assert!(press(&mut tabs, NamedKey::ArrowRight).is_empty());
    assert!(press(&mut tabs, NamedKey::End).is_empty());
}

#[test]
fn focus_out_reverts_uncommitted_navigation() {
    let (mut tabs, ids) = tabs_with(TabsOptions::default(), 3);
    tabs.focus_in(ids[0]);
    press(&mut tabs, NamedKey::ArrowRight);
    press(&mut tabs, NamedKey::ArrowRight);

    let update = tabs.focus_out();
    assert!(update.needs_reflect(ids[0]));
    assert_eq!(tabs.nav_state(), NavState::Idle);
    assert_eq!(tabs.focused_tab(), None);
    assert_eq!(tabs.active_tab_index(), Some(0));
    assert_eq!(tabs.tab_index(ids[0]), 0);
    assert_eq!(tabs.tab_index(ids[2]), -1);
}

#[test]
fn click_selects_and_focuses() {
    let (mut tabs, ids) = tabs_with(TabsOptions::default(), 3);
    let update = tabs.activate(ids[2]);
    assert_eq!(update.focus, Some(ids[2]));
    assert_eq!(update.changes().count(), 1);
    assert!(tabs.is_selected(ids[2]));
    assert!(!tabs.is_selected(ids[0]));

    // Clicking the selected tab does nothing.
    assert!(tabs.begin_activation(ids[2], ActivationKind::Direct).is_none());
    assert!(tabs.activate(ids[2]).is_empty());
}

#[test]
fn cancelled_click_keeps_selection() {
    let (mut tabs, ids) = tabs_with(TabsOptions::default(), 2);
    let pending = tabs
        .begin_activation(ids[1], ActivationKind::Direct)
        .expect("unselected tabs accept activation");
    assert!(tabs.finish_activation(pending, true).is_empty());
    assert_eq!(tabs.active_tab(), Some(ids[0]));
}

#[test]
fn disabled_tab_ignores_clicks() {
    let mut tabs = Tabs::new(TabsOptions::default());
    let (a, _) = tabs.push(Tab::new("a").selected(true));
    let (b, _) = tabs.push(Tab::new("b").disabled(true));
    assert!(tabs.activate(b).is_empty());
    assert_eq!(tabs.active_tab(), Some(a));
}

#[test]
fn programmatic_selection_is_silent() {
    let (mut tabs, ids) = tabs_with(TabsOptions::default(), 3);
    let update = tabs.set_active_tab_index(2);
    assert!(update.events.is_empty());
    assert!(update.needs_reflect(ids[0]));
    assert!(update.needs_reflect(ids[2]));
    assert_eq!(tabs.active_tab(), Some(ids[2]));
    assert_eq!(tabs.tab_index(ids[2]), 0);

    assert!(tabs.set_active_tab_index(7).is_empty());
    assert_eq!(tabs.active_tab(), Some(ids[2]));
    assert_eq!(
        tabs.try_set_active_tab_index(7),
        Err(ChoiceError::IndexOutOfRange { index: 7, len: 3 })
    );
}

#[test]
fn later_declared_selection_is_dropped() {
    let mut tabs = Tabs::new(TabsOptions::default());
    let (a, _) = tabs.push(Tab::new("a").selected(true));
    let (b, update) = tabs.push(Tab::new("b").selected(true));
    assert!(update.needs_reflect(b));
    assert!(tabs.is_selected(a));
    assert!(!tabs.is_selected(b));
}

#[test]
fn reordering_updates_active_index() {
    let (mut tabs, ids) = tabs_with(TabsOptions::default(), 3);
    assert!(tabs.move_to(ids[0], 2));
    assert_eq!(tabs.tabs(), &[ids[1], ids[2], ids[0]]);
    assert_eq!(tabs.active_tab_index(), Some(2));
}

#[test]
fn inserting_before_active_shifts_index() {
    let (mut tabs, ids) = tabs_with(TabsOptions::default(), 2);
    let (new, _) = tabs.insert(0, Tab::new("new"));
    assert_eq!(tabs.active_tab(), Some(ids[0]));
    assert_eq!(tabs.active_tab_index(), Some(1));
    assert_eq!(tabs.tab_index(new), -1);
}

#[test]
fn removing_selected_tab_clears_selection() {
    let (mut tabs, ids) = tabs_with(TabsOptions::default(), 3);
    tabs.remove(ids[0]);
    assert_eq!(tabs.active_tab(), None);
    assert_eq!(tabs.active_tab_index(), None);
    assert_eq!(tabs.len(), 2);
    // The next tab inherits the tab stop.
    assert_eq!(tabs.tab_index(ids[1]), 0);
}

#[test]
fn removing_the_navigated_tab_returns_to_idle() {
    let (mut tabs, ids) = tabs_with(TabsOptions::default(), 3);
    tabs.focus_in(ids[0]);
    press(&mut tabs, NamedKey::ArrowRight);
    tabs.remove(ids[1]);
    assert_eq!(tabs.nav_state(), NavState::Idle);
    assert_eq!(tabs.tab_index(ids[0]), 0);
}

#[test]
fn switching_to_auto_abandons_navigation() {
    let (mut tabs, ids) = tabs_with(TabsOptions::default(), 3);
    tabs.focus_in(ids[0]);
    press(&mut tabs, NamedKey::ArrowRight);
    tabs.set_auto_activate(true);
    assert!(tabs.auto_activate());
    assert_eq!(tabs.nav_state(), NavState::Idle);
    assert_eq!(tabs.tab_index(ids[0]), 0);
}

#[test]
fn aria_uses_tab_role() {
    let (tabs, ids) = tabs_with(TabsOptions::default(), 2);
    let aria = tabs.aria(ids[0]).expect("live tab");
    assert_eq!(aria.role, Role::Tab);
    assert_eq!(aria.role.state_attribute(), "aria-selected");
    assert!(aria.checked);
    assert!(!tabs.aria(ids[1]).expect("live tab").checked);
}

#[test]
fn manual_focus_in_moves_tab_stop_without_selecting() {
    let (mut tabs, ids) = tabs_with(TabsOptions::default(), 2);
    let update = tabs.focus_in(ids[1]);
    assert!(update.events.is_empty());
    assert_eq!(tabs.nav_state(), NavState::Navigating { focused: ids[1] });
    assert_eq!(tabs.tab_index(ids[1]), 0);
    assert_eq!(tabs.tab_index(ids[0]), -1);
    assert_eq!(tabs.active_tab(), Some(ids[0]));
}

#[test]
fn auto_focus_in_selects_the_focused_tab() {
    let (mut tabs, ids) = tabs_with(auto(), 2);
    let update = tabs.focus_in(ids[1]);
    assert_eq!(update.changes().count(), 1);
    assert_eq!(tabs.focused_tab(), Some(ids[1]));
    assert_eq!(tabs.active_tab(), Some(ids[1]));
    assert_eq!(tabs.tab_index(ids[1]), 0);
    assert_eq!(tabs.tab_index(ids[0]), -1);
    assert_eq!(tabs.nav_state(), NavState::Idle);

    // Refocusing the selected tab is silent.
    assert!(tabs.focus_in(ids[1]).events.is_empty());
}
