use std::fs;
use std::time::Duration;

use assist_engine::assist_core::settings::Settings;
use assist_engine::{Assistant, Channel, DomEvent, MemoryField, MemoryPanel, TextField};

use super::die;
use crate::render::{field_line, panel_box};
use crate::script::{apply_edit, events, parse_script, Step};

/// How long `wait` blocks for outstanding fetches.
const SETTLE_TIMEOUT: Duration = Duration::from_secs(10);

pub fn replay(settings: &Settings, script_file: &str, sequence: bool) {
    let source = die!(fs::read_to_string(script_file), "Error reading {script_file}: {}");
    let steps = die!(parse_script(&source), "Error in {script_file}: {}");

    let mut assistant = die!(
        Assistant::from_settings(
            MemoryField::new(""),
            MemoryPanel::new(),
            MemoryPanel::new(),
            settings,
        ),
        "Error starting fetch workers: {}"
    );
    if sequence {
        assistant.session_mut().set_sequence_responses(true);
    }

    for step in &steps {
        run_step(&mut assistant, step);
    }
    assistant.settle(SETTLE_TIMEOUT);
    print_state(&assistant);
}

fn run_step(assistant: &mut Assistant<MemoryField, MemoryPanel>, step: &Step) {
    apply_edit(step, assistant.session_mut().field_mut());
    for event in events(step) {
        let is_down = event == DomEvent::PointerDown;
        let resp = assistant.handle_event(event);
        if let Some(word) = resp.commit {
            println!("> committed {word:?}");
        }
        if is_down {
            if let Step::Select { start, end } = step {
                assistant
                    .session_mut()
                    .field_mut()
                    .set_selection(*start, *end);
            }
        }
    }
    match step {
        Step::Wait => {
            let n = assistant.settle(SETTLE_TIMEOUT);
            println!("> {n} result(s) delivered");
        }
        Step::Show => print_state(assistant),
        _ => {
            assistant.pump();
        }
    }
}

fn print_state(assistant: &Assistant<MemoryField, MemoryPanel>) {
    let session = assistant.session();
    let field = session.field();
    println!("field: {}", field_line(&field.value(), field.selection()));
    print!(
        "{}",
        panel_box("autocomplete", &session.panel_state(Channel::Autocomplete))
    );
    print!("{}", panel_box("typo", &session.panel_state(Channel::Typo)));
}
