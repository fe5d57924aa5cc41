use std::time::Instant;

use serde_json::Value;

/// Outcome of one scan request, as reported by the transport layer.
///
/// The core never talks to the network itself; the platform maps whatever
/// its HTTP client produced into one of these variants.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    /// Success-range response with a JSON body.
    Response(Value),
    /// Response received with a non-success status. `message` carries the
    /// server-provided error text when the body had one.
    HttpFailure { status: u16, message: Option<String> },
    /// No response obtained (DNS, connect, timeout).
    TransportFailure { message: String },
    /// Success-range response whose body was not valid JSON.
    MalformedBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the URL input box.
    InputChanged(String),
    /// User pressed Enter or clicked Check.
    CheckSubmitted,
    /// Transport layer finished the outstanding scan request.
    CheckCompleted { outcome: CheckOutcome },
    /// User clicked Try Again on a failed scan.
    RetryClicked,
    /// User asked to copy the checked URL.
    CopyUrlRequested,
    /// User asked to copy the full verdict report as JSON.
    CopyReportRequested,
    /// A clipboard write finished successfully.
    CopyCompleted { confirmation: String, at: Instant },
    /// Periodic tick; drives notification expiry.
    Tick { now: Instant },
    /// Fallback for placeholder wiring.
    NoOp,
}
