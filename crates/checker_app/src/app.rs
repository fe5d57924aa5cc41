use std::io::BufRead;
use std::process::ExitCode;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use checker_core::{update, AppState, Msg};
use checker_engine::ClientSettings;

use crate::effects::EffectRunner;
use crate::render;

const TICK_INTERVAL: Duration = Duration::from_millis(200);

enum Event {
    Core(Msg),
    Quit,
}

pub fn run() -> ExitCode {
    let settings = ClientSettings {
        endpoint: std::env::var("CHECKER_ENDPOINT")
            .unwrap_or_else(|_| ClientSettings::default().endpoint),
        ..ClientSettings::default()
    };

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let mut runner = match EffectRunner::new(settings, msg_tx.clone()) {
        Ok(runner) => runner,
        Err(err) => {
            eprintln!("Failed to start scan client: {}", err.message);
            return ExitCode::FAILURE;
        }
    };

    let (event_tx, event_rx) = mpsc::channel::<Event>();
    spawn_input_thread(event_tx.clone());
    spawn_tick_thread(event_tx.clone());
    forward_core_messages(msg_rx, event_tx);

    render::greeting();

    let mut state = AppState::new();
    while let Ok(event) = event_rx.recv() {
        match event {
            Event::Quit => break,
            Event::Core(msg) => {
                let (next, effects) = update(state, msg);
                state = next;
                runner.run(effects);
                if state.consume_dirty() {
                    render::render(&state.view());
                }
            }
        }
    }

    ExitCode::SUCCESS
}

/// Reads user intents from stdin. A plain line is a URL submission;
/// `:retry`, `:copy`, `:json` and `:quit` are commands.
fn spawn_input_thread(event_tx: mpsc::Sender<Event>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            for event in events_for_line(&line) {
                if event_tx.send(event).is_err() {
                    return;
                }
            }
        }
        let _ = event_tx.send(Event::Quit);
    });
}

fn events_for_line(line: &str) -> Vec<Event> {
    match line.trim() {
        ":quit" => vec![Event::Quit],
        ":retry" => vec![Event::Core(Msg::RetryClicked)],
        ":copy" => vec![Event::Core(Msg::CopyUrlRequested)],
        ":json" => vec![Event::Core(Msg::CopyReportRequested)],
        _ => vec![
            Event::Core(Msg::InputChanged(line.to_string())),
            Event::Core(Msg::CheckSubmitted),
        ],
    }
}

/// Periodic tick so the visible notification expires on time.
fn spawn_tick_thread(event_tx: mpsc::Sender<Event>) {
    thread::spawn(move || {
        while event_tx
            .send(Event::Core(Msg::Tick {
                now: Instant::now(),
            }))
            .is_ok()
        {
            thread::sleep(TICK_INTERVAL);
        }
    });
}

fn forward_core_messages(msg_rx: mpsc::Receiver<Msg>, event_tx: mpsc::Sender<Event>) {
    thread::spawn(move || {
        while let Ok(msg) = msg_rx.recv() {
            if event_tx.send(Event::Core(msg)).is_err() {
                break;
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_line_submits_a_check() {
        let events = events_for_line("example.com");
        assert_eq!(events.len(), 2);
        assert!(matches!(
            &events[0],
            Event::Core(Msg::InputChanged(text)) if text == "example.com"
        ));
        assert!(matches!(&events[1], Event::Core(Msg::CheckSubmitted)));
    }

    #[test]
    fn commands_map_to_intents() {
        assert!(matches!(
            events_for_line(" :retry ").as_slice(),
            [Event::Core(Msg::RetryClicked)]
        ));
        assert!(matches!(
            events_for_line(":copy").as_slice(),
            [Event::Core(Msg::CopyUrlRequested)]
        ));
        assert!(matches!(
            events_for_line(":json").as_slice(),
            [Event::Core(Msg::CopyReportRequested)]
        ));
        assert!(matches!(events_for_line(":quit").as_slice(), [Event::Quit]));
    }
}
