use std::sync::{mpsc, Arc};
use std::thread;

use checker_logging::checker_info;

use crate::client::{ClientSettings, ReqwestScanClient, ScanClient};
use crate::{CheckError, ScanEvent};

enum ClientCommand {
    Check { url: String },
}

/// Owns the transport thread. Commands go in over an mpsc channel; each
/// accepted check is spawned on a dedicated tokio runtime and completion
/// comes back on the event receiver returned by [`ClientHandle::new`].
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
}

impl ClientHandle {
    pub fn new(
        settings: ClientSettings,
    ) -> Result<(Self, mpsc::Receiver<ScanEvent>), CheckError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let client = Arc::new(ReqwestScanClient::new(settings)?);

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok((Self { cmd_tx }, event_rx))
    }

    pub fn check(&self, url: impl Into<String>) {
        let _ = self.cmd_tx.send(ClientCommand::Check { url: url.into() });
    }
}

async fn handle_command(
    client: &dyn ScanClient,
    command: ClientCommand,
    event_tx: mpsc::Sender<ScanEvent>,
) {
    match command {
        ClientCommand::Check { url } => {
            checker_info!("check url_len={} url={}", url.len(), url);
            let result = client.check(&url).await;
            let _ = event_tx.send(ScanEvent::CheckFinished { result });
        }
    }
}
