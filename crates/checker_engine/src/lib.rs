//! Checker engine: transport to the external scan endpoint.
mod client;
mod handle;
mod types;

pub use client::{ClientSettings, ReqwestScanClient, ScanClient};
pub use handle::ClientHandle;
pub use types::{CheckError, CheckFailure, ScanEvent};
