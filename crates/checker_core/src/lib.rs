//! Checker core: pure scan-session state machine and view-model helpers.
mod effect;
mod input;
mod msg;
mod notify;
mod state;
mod update;
mod verdict;
mod view_model;

pub use effect::Effect;
pub use input::{normalize, InputError};
pub use msg::{CheckOutcome, Msg};
pub use notify::{Notification, NotificationState, NOTIFICATION_WINDOW};
pub use state::{AppState, ScanRequest, ScanSession};
pub use update::update;
pub use verdict::{
    aggregate, AggregationError, BlocklistResult, EngineStats, MultiEngineResult, ThreatMatch,
    Verdict, VerdictStatus,
};
pub use view_model::{AppViewModel, BlocklistView, MultiEngineView, ResultView};
