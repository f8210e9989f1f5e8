//! A checklist driven entirely by relays, with a render effect printing
//! the list after every interaction.
//!
//! Run with `RUST_LOG=bulk_select=trace` to see the selection events.

use bulk_select::{
    BulkSelectButton, BulkSelection, BulkToggleButton, ByRef, CheckboxEvent, Effect, Suppression,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct Task {
    title: &'static str,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Checklist ===\n");

    let tasks: Vec<ByRef<Task>> = ["write report", "review patch", "water plants"]
        .into_iter()
        .map(|title| ByRef::new(Task { title }))
        .collect();

    let selection = BulkSelection::new(tasks.clone());

    let _render = Effect::new({
        let selection = selection.clone();
        move || {
            let header = if selection.has_all_selected() {
                "[x]"
            } else if selection.has_selection() {
                "[-]"
            } else {
                "[ ]"
            };
            println!("{header} all");
            for entry in selection.selection_view().iter() {
                let mark = if entry.selected { 'x' } else { ' ' };
                println!("    [{mark}] {}", entry.item.title);
            }
            println!();
        }
    });

    let row = BulkSelectButton::new(selection.clone());
    let passive_row = BulkSelectButton::with_suppression(selection.clone(), Suppression::NONE);
    let toggle = BulkToggleButton::new(selection.clone());

    println!("-- check '{}'", tasks[1].title);
    let mut event = CheckboxEvent::new(true);
    row.on_check(tasks[1].clone(), &mut event);
    println!("   propagation stopped: {}\n", event.propagation_stopped);

    println!("-- toggle all on");
    toggle.on_toggle(true);

    println!("-- uncheck '{}' without suppression", tasks[0].title);
    passive_row.on_check(tasks[0].clone(), &mut CheckboxEvent::new(false));

    println!("-- list replaced, '{}' dropped", tasks[2].title);
    selection.set_candidates(tasks[..2].to_vec());
    println!("   stale selections: {}\n", selection.stale_selections().len());

    println!("-- teardown");
    selection.teardown();
    println!("   selected after teardown: {}", selection.selected().len());
}
