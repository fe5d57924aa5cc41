use serde_json::{Map, Value};
use thiserror::Error;

/// Normalized safety classification for one scanned URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerdictStatus {
    Safe,
    Suspicious,
    Malicious,
    #[default]
    Unknown,
}

impl VerdictStatus {
    /// Unrecognized or absent status strings coerce to `Unknown` so a
    /// provider-side contract change degrades instead of erroring.
    fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("safe") => VerdictStatus::Safe,
            Some("suspicious") => VerdictStatus::Suspicious,
            Some("malicious") => VerdictStatus::Malicious,
            _ => VerdictStatus::Unknown,
        }
    }

    /// Uppercase label used by the result card.
    pub fn label(self) -> &'static str {
        match self {
            VerdictStatus::Safe => "SAFE",
            VerdictStatus::Suspicious => "SUSPICIOUS",
            VerdictStatus::Malicious => "MALICIOUS",
            VerdictStatus::Unknown => "UNKNOWN",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreatMatch {
    pub threat_type: String,
}

/// Blocklist provider evidence: matched threat entries, in payload order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlocklistResult {
    pub errored: bool,
    pub matches: Vec<ThreatMatch>,
}

/// Multi-engine provider counters. Fields absent from the payload read as
/// zero; that is a display default, not a claim that the scan failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineStats {
    pub malicious: u64,
    pub suspicious: u64,
    pub harmless: u64,
    pub undetected: u64,
}

/// Multi-engine provider evidence. `stats` is `None` when the provider
/// errored or no analysis was available yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiEngineResult {
    pub errored: bool,
    pub stats: Option<EngineStats>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub status: VerdictStatus,
    pub reason: String,
    pub checked_url: String,
    pub blocklist: BlocklistResult,
    pub multi_engine: MultiEngineResult,
    /// Pretty-printed source payload, kept for the technical-details view
    /// and the copy-JSON action.
    pub report: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AggregationError {
    #[error("scan response is not a JSON object")]
    NotAnObject,
    #[error("scan response missing required field `{0}`")]
    MissingField(&'static str),
}

/// Maps the raw two-provider payload into a renderable [`Verdict`].
///
/// Pure and deterministic: no network, no mutable state. Only a missing
/// `url` (or a non-object payload) is an error; everything else resolves
/// to a safe default so one broken provider never hides the other's
/// signal.
pub fn aggregate(payload: &Value) -> Result<Verdict, AggregationError> {
    let object = payload.as_object().ok_or(AggregationError::NotAnObject)?;
    let checked_url = object
        .get("url")
        .and_then(Value::as_str)
        .ok_or(AggregationError::MissingField("url"))?
        .to_owned();

    let status = VerdictStatus::parse(object.get("status").and_then(Value::as_str));
    let reason = object
        .get("reason")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned();

    let details = object.get("details");
    let blocklist = blocklist_result(details.and_then(|d| d.get("blocklistProvider")));
    let multi_engine = multi_engine_result(details.and_then(|d| d.get("multiEngineProvider")));

    let report =
        serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string());

    Ok(Verdict {
        status,
        reason,
        checked_url,
        blocklist,
        multi_engine,
        report,
    })
}

fn blocklist_result(raw: Option<&Value>) -> BlocklistResult {
    let Some(object) = raw.and_then(Value::as_object) else {
        // Missing or malformed sub-object degrades to an errored provider.
        return BlocklistResult {
            errored: true,
            matches: Vec::new(),
        };
    };
    let matches = object
        .get("matches")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.get("threatType").and_then(Value::as_str))
                .map(|threat_type| ThreatMatch {
                    threat_type: threat_type.to_owned(),
                })
                .collect()
        })
        .unwrap_or_default();
    BlocklistResult {
        errored: provider_errored(object),
        matches,
    }
}

fn multi_engine_result(raw: Option<&Value>) -> MultiEngineResult {
    let Some(object) = raw.and_then(Value::as_object) else {
        return MultiEngineResult {
            errored: true,
            stats: None,
        };
    };
    let stats = object
        .get("stats")
        .and_then(Value::as_object)
        .map(|stats| EngineStats {
            malicious: counter(stats, "malicious"),
            suspicious: counter(stats, "suspicious"),
            harmless: counter(stats, "harmless"),
            undetected: counter(stats, "undetected"),
        });
    MultiEngineResult {
        errored: provider_errored(object),
        stats,
    }
}

/// Upstream services report failure either as `errored: true` or as an
/// `error` string on the sub-object; accept both.
fn provider_errored(object: &Map<String, Value>) -> bool {
    object
        .get("errored")
        .and_then(Value::as_bool)
        .unwrap_or(false)
        || object.get("error").is_some()
}

fn counter(object: &Map<String, Value>, key: &str) -> u64 {
    object.get(key).and_then(Value::as_u64).unwrap_or(0)
}
