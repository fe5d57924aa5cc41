use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use checker_core::{CheckOutcome, Effect, Msg};
use checker_engine::{CheckError, CheckFailure, ClientHandle, ClientSettings, ScanEvent};
use checker_logging::{checker_info, checker_warn};
use serde_json::Value;

use crate::clipboard::SystemClipboard;

/// Executes core effects and feeds transport completions back as messages.
pub struct EffectRunner {
    client: ClientHandle,
    clipboard: SystemClipboard,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(settings: ClientSettings, msg_tx: mpsc::Sender<Msg>) -> Result<Self, CheckError> {
        let (client, event_rx) = ClientHandle::new(settings)?;
        spawn_event_loop(event_rx, msg_tx.clone());
        Ok(Self {
            client,
            clipboard: SystemClipboard::new(),
            msg_tx,
        })
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::CheckUrl { url } => {
                    checker_info!("CheckUrl url={}", url);
                    self.client.check(url);
                }
                Effect::FocusInput => {
                    // Line-oriented front end: the prompt is always focused.
                }
                Effect::CopyToClipboard { text, confirmation } => {
                    if self.clipboard.set_text(&text) {
                        let _ = self.msg_tx.send(Msg::CopyCompleted {
                            confirmation,
                            at: Instant::now(),
                        });
                    }
                    // Copy failures are cosmetic and surface nothing.
                }
            }
        }
    }
}

fn spawn_event_loop(event_rx: mpsc::Receiver<ScanEvent>, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        while let Ok(event) = event_rx.recv() {
            let ScanEvent::CheckFinished { result } = event;
            let outcome = map_outcome(result);
            if msg_tx.send(Msg::CheckCompleted { outcome }).is_err() {
                break;
            }
        }
    });
}

fn map_outcome(result: Result<Value, CheckError>) -> CheckOutcome {
    match result {
        Ok(payload) => CheckOutcome::Response(payload),
        Err(err) => {
            checker_warn!("check failed: {} ({})", err.kind, err.message);
            match err.kind {
                CheckFailure::HttpStatus {
                    status,
                    server_message,
                } => CheckOutcome::HttpFailure {
                    status,
                    message: server_message,
                },
                CheckFailure::Timeout | CheckFailure::Network => CheckOutcome::TransportFailure {
                    message: err.message,
                },
                CheckFailure::MalformedBody => CheckOutcome::MalformedBody,
            }
        }
    }
}
