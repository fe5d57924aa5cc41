use crate::input::normalize;
use crate::verdict::aggregate;
use crate::{AppState, CheckOutcome, Effect, Msg, ScanRequest, ScanSession};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::CheckSubmitted => submit(&mut state),
        Msg::CheckCompleted { outcome } => {
            complete(&mut state, outcome);
            Vec::new()
        }
        Msg::RetryClicked => retry(&mut state),
        Msg::CopyUrlRequested => copy_url(&state),
        Msg::CopyReportRequested => copy_report(&state),
        Msg::CopyCompleted { confirmation, at } => {
            state.notify(confirmation, at);
            Vec::new()
        }
        Msg::Tick { now } => {
            state.expire_notification(now);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn submit(state: &mut AppState) -> Vec<Effect> {
    // Pending guard: a second Enter-press while a scan is in flight must
    // not spawn a second request or reset the visible loading state.
    if matches!(state.session(), ScanSession::Pending { .. }) {
        return Vec::new();
    }

    let raw_input = state.input().to_owned();
    match normalize(&raw_input) {
        Ok(url) => {
            state.replace_session(ScanSession::Pending {
                request: ScanRequest { raw_input },
            });
            vec![Effect::CheckUrl { url }]
        }
        Err(err) => {
            state.replace_session(ScanSession::Failed {
                request: ScanRequest { raw_input },
                message: err.to_string(),
            });
            Vec::new()
        }
    }
}

fn complete(state: &mut AppState, outcome: CheckOutcome) {
    let request = match state.session() {
        ScanSession::Pending { request } => request.clone(),
        // Completion for a session that was already replaced.
        _ => return,
    };

    let next = match outcome {
        CheckOutcome::Response(payload) => match aggregate(&payload) {
            Ok(verdict) => ScanSession::Succeeded { request, verdict },
            Err(err) => ScanSession::Failed {
                request,
                message: format!("Failed to check URL: {err}"),
            },
        },
        CheckOutcome::HttpFailure { status, message } => {
            let message = message.unwrap_or_else(|| format!("HTTP {status}"));
            ScanSession::Failed {
                request,
                message: format!("Failed to check URL: {message}"),
            }
        }
        CheckOutcome::TransportFailure { message } => ScanSession::Failed {
            request,
            message: format!("Failed to check URL: {message}"),
        },
        CheckOutcome::MalformedBody => ScanSession::Failed {
            request,
            message: "Failed to check URL: response was not valid JSON".to_owned(),
        },
    };
    state.replace_session(next);
}

fn retry(state: &mut AppState) -> Vec<Effect> {
    if matches!(state.session(), ScanSession::Failed { .. }) {
        state.replace_session(ScanSession::Idle);
        vec![Effect::FocusInput]
    } else {
        Vec::new()
    }
}

fn copy_url(state: &AppState) -> Vec<Effect> {
    match state.session() {
        ScanSession::Succeeded { verdict, .. } => vec![Effect::CopyToClipboard {
            text: verdict.checked_url.clone(),
            confirmation: "URL copied".to_owned(),
        }],
        _ => Vec::new(),
    }
}

fn copy_report(state: &AppState) -> Vec<Effect> {
    match state.session() {
        ScanSession::Succeeded { verdict, .. } => vec![Effect::CopyToClipboard {
            text: verdict.report.clone(),
            confirmation: "JSON copied".to_owned(),
        }],
        _ => Vec::new(),
    }
}
