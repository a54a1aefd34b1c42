// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Helpers shared by the demos.

use overstory_choice::{ChoiceEvent, MemberId, Update};

/// Print what a host would have to do for `update`.
///
/// `name` turns member ids into something readable.
pub fn print_update(label: &str, update: &Update, name: impl Fn(MemberId) -> String) {
    println!("{label}:");
    if update.is_empty() {
        println!("  (nothing)");
        return;
    }
    if !update.reflect.is_empty() {
        let names: Vec<_> = update.reflect.iter().map(|&id| name(id)).collect();
        println!("  re-render: {}", names.join(", "));
    }
    if let Some(focus) = update.focus {
        println!("  focus: {}", name(focus));
    }
    for event in &update.events {
        let kind = match event {
            ChoiceEvent::Change { .. } => "change",
            ChoiceEvent::Input { .. } => "input",
        };
        println!("  {kind}: {} = {:?}", name(event.member()), event.value());
    }
}
