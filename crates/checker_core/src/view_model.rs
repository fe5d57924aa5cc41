use crate::state::{AppState, ScanSession};
use crate::verdict::{EngineStats, Verdict, VerdictStatus};

/// Render-ready projection of [`AppState`]. Everything the presentation
/// layer shows is derived here, not in the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub input: String,
    /// A scan is in flight; input and button should be disabled.
    pub checking: bool,
    pub result: Option<ResultView>,
    pub error: Option<String>,
    pub notification: Option<String>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub status: VerdictStatus,
    pub status_label: &'static str,
    pub reason: String,
    pub checked_url: String,
    pub blocklist: BlocklistView,
    pub multi_engine: MultiEngineView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlocklistView {
    pub errored: bool,
    pub threats_found: usize,
    /// Threat types joined with ", "; empty when nothing matched.
    pub threat_types: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiEngineView {
    pub errored: bool,
    /// Zero-defaulted when the provider reported no stats.
    pub stats: EngineStats,
}

impl AppViewModel {
    pub(crate) fn project(state: &AppState) -> Self {
        let (checking, result, error) = match state.session() {
            ScanSession::Idle => (false, None, None),
            ScanSession::Pending { .. } => (true, None, None),
            ScanSession::Succeeded { verdict, .. } => {
                (false, Some(ResultView::from_verdict(verdict)), None)
            }
            ScanSession::Failed { message, .. } => (false, None, Some(message.clone())),
        };
        Self {
            input: state.input().to_owned(),
            checking,
            result,
            error,
            notification: state
                .notification()
                .map(|notification| notification.message.clone()),
            dirty: state.is_dirty(),
        }
    }
}

impl ResultView {
    fn from_verdict(verdict: &Verdict) -> Self {
        let threat_types = verdict
            .blocklist
            .matches
            .iter()
            .map(|threat| threat.threat_type.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            status: verdict.status,
            status_label: verdict.status.label(),
            reason: verdict.reason.clone(),
            checked_url: verdict.checked_url.clone(),
            blocklist: BlocklistView {
                errored: verdict.blocklist.errored,
                threats_found: verdict.blocklist.matches.len(),
                threat_types,
            },
            multi_engine: MultiEngineView {
                errored: verdict.multi_engine.errored,
                stats: verdict.multi_engine.stats.unwrap_or_default(),
            },
        }
    }
}
