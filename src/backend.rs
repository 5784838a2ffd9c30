//! Network backend: runs a Tokio runtime on its own thread and performs
//! the form submission calls, so the UI thread never blocks on I/O.
//!
//! The UI sends `BackendAction`s over a crossbeam channel; every
//! submission settles into exactly one `GuiEvent::AuthResponse`, whether
//! the collaborator answered or the request failed in transit.

use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use tokio::runtime::Runtime;

use crate::protocol::{BackendAction, FormFields, GuiEvent};

/// Give up on a submission after this long.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub fn run_backend(action_rx: Receiver<BackendAction>, event_tx: Sender<GuiEvent>) {
    // Create a Tokio runtime for this thread
    let rt = Runtime::new().expect("Failed to create Tokio runtime");

    rt.block_on(async move {
        let client = match reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build() {
            Ok(client) => client,
            Err(e) => {
                let _ = event_tx.send(GuiEvent::Error(format!(
                    "Failed to create HTTP client: {}",
                    e
                )));
                return;
            }
        };

        loop {
            match action_rx.try_recv() {
                Ok(BackendAction::Submit { kind, url, fields }) => {
                    let result = submit(&client, &url, &fields).await;
                    let _ = event_tx.send(GuiEvent::AuthResponse { kind, result });
                }
                Ok(BackendAction::Shutdown) | Err(TryRecvError::Disconnected) => break,
                Err(TryRecvError::Empty) => {
                    tokio::time::sleep(Duration::from_millis(50)).await;
                }
            }
        }
    });
}

/// POST the fields form-encoded and hand back the raw body text. The
/// caller decides success or failure from the body; only a request that
/// never completed is an `Err`.
async fn submit(
    client: &reqwest::Client,
    url: &str,
    fields: &FormFields,
) -> Result<String, String> {
    let mut form: Vec<(&str, &str)> = Vec::with_capacity(3);
    if let Some(fullname) = &fields.fullname {
        form.push(("fullname", fullname.as_str()));
    }
    form.push(("email", fields.email.as_str()));
    form.push(("password", fields.password.as_str()));

    let response = client
        .post(url)
        .form(&form)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    response.text().await.map_err(|e| e.to_string())
}
