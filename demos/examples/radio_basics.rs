// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radio group basics.
//!
//! Click, arrow through, cancel, and reset a small radio group using
//! `overstory_choice::RadioSet`.
//!
//! Run:
//! - `cargo run -p understory_demos --example radio_basics`

use overstory_choice::{ActivationKind, KeyOutcome, MemberId, Radio, RadioSet, Selectable};
use ui_events::keyboard::{Key, NamedKey};
use understory_demos::print_update;

fn label(set: &RadioSet, id: MemberId) -> String {
    set.radio(id)
        .map_or_else(|| String::from("?"), |r| String::from(r.value()))
}

fn main() {
    let mut set = RadioSet::new();
    let (small, _) = set.insert(Radio::new("small").named("size"));
    let (medium, _) = set.insert(Radio::new("medium").named("size").checked(true));
    let (_large, _) = set.insert(Radio::new("large").named("size").disabled(true));
    let (xl, _) = set.insert(Radio::new("xl").named("size"));

    let update = set.activate(small);
    print_update("click small", &update, |id| label(&set, id));

    let update = set.activate(small);
    print_update("click small again", &update, |id| label(&set, id));

    // `large` is disabled, so ArrowDown from medium lands on xl.
    set.set_checked(medium, true);
    set.focus_in(medium);
    if let KeyOutcome::Handled(update) = set.key_down(medium, &Key::Named(NamedKey::ArrowDown)) {
        print_update("ArrowDown from medium", &update, |id| label(&set, id));
    }

    // A handler cancels the click on small.
    if let Some(pending) = set.begin_activation(small, ActivationKind::Direct) {
        let update = set.finish_activation(pending, true);
        print_update("cancelled click on small", &update, |id| label(&set, id));
    }

    println!("form value of xl: {:?}", set.form_value(xl));
    let update = set.form_reset();
    print_update("form reset", &update, |id| label(&set, id));
    println!(
        "checked after reset: {:?}",
        set.selected("size").map(|id| label(&set, id))
    );
}
