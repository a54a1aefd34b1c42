// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tab list basics.
//!
//! Compare manual and automatic activation on the same three tabs using
//! `overstory_choice::Tabs`.
//!
//! Run:
//! - `cargo run -p understory_demos --example tabs_basics`

use overstory_choice::{MemberId, Selectable, Tab, Tabs, TabsOptions};
use ui_events::keyboard::{Key, NamedKey};
use understory_demos::print_update;

fn label(tabs: &Tabs, id: MemberId) -> String {
    tabs.tab(id)
        .map_or_else(|| String::from("?"), |t| String::from(t.value()))
}

fn build(auto_activate: bool) -> (Tabs, Vec<MemberId>) {
    let mut tabs = Tabs::new(TabsOptions {
        auto_activate,
        ..TabsOptions::default()
    });
    let ids = ["overview", "details", "history"]
        .into_iter()
        .enumerate()
        .map(|(i, value)| {
            let tab = Tab::new(value)
                .controls(format!("{value}-panel"))
                .selected(i == 0);
            tabs.push(tab).0
        })
        .collect();
    (tabs, ids)
}

fn main() {
    let right = Key::Named(NamedKey::ArrowRight);
    let enter = Key::Named(NamedKey::Enter);

    println!("== manual activation ==");
    let (mut tabs, ids) = build(false);
    tabs.focus_in(ids[0]);
    let update = tabs.key_down(&right);
    print_update("ArrowRight", &update, |id| label(&tabs, id));
    println!("state: {:?}", tabs.nav_state());
    let update = tabs.key_down(&enter);
    print_update("Enter", &update, |id| label(&tabs, id));
    println!("visible panel: {:?}", tabs.active_panel());

    // Navigate away and leave without committing.
    tabs.key_down(&right);
    let update = tabs.focus_out();
    print_update("focus out while navigating", &update, |id| label(&tabs, id));

    println!("== automatic activation ==");
    let (mut tabs, ids) = build(true);
    tabs.focus_in(ids[0]);
    for key in [&right, &right, &right] {
        let update = tabs.key_down(key);
        print_update("ArrowRight", &update, |id| label(&tabs, id));
    }
    println!("active tab index: {:?}", tabs.active_tab_index());

    // Moving the active tab to the front changes its index, not the selection.
    if let Some(active) = tabs.active_tab() {
        tabs.move_to(active, 0);
    }
    println!("after reorder: {:?}", tabs.active_tab_index());
}
