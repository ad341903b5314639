//! Gateway service worker
//!
//! Runs all file-server requests on a background task so the render loop
//! never blocks on the network. Requests arrive on an unbounded channel,
//! are executed one at a time in arrival order, and each produces exactly
//! one response on the way back.
//!
//! Sequential execution is deliberate: the app issues at most one probe,
//! one auth submission, or one listing fetch at a time, and ordering
//! responses the way requests were issued keeps the bootstrap sequence and
//! the listing generation check simple.

use anyhow::Result;
use tokio::sync::mpsc;

use filetui::api::{FileEntry, GatewayClient, LoginError, ServerStatus};
use filetui::model::FetchTicket;
use filetui::utils::log_debug;

/// Requests the app can hand to the worker
#[derive(Debug, Clone)]
pub enum GatewayRequest {
    /// Bootstrap probe 1: is the server configured yet?
    ProbeStatus,

    /// Bootstrap probe 2: does the ambient cookie hold a session?
    ProbeSession,

    Login { username: String, password: String },

    Setup { username: String, password: String },

    /// Fetch the listing for the ticket's path. The ticket rides along so
    /// the response can be matched against the browser's current generation.
    List { ticket: FetchTicket },
}

/// Responses streamed back to the app
#[derive(Debug)]
pub enum GatewayResponse {
    Status(Result<ServerStatus>),

    /// Whether the session probe found an authenticated session
    Session(bool),

    Login(Result<(), LoginError>),

    Setup(Result<()>),

    Listing {
        ticket: FetchTicket,
        result: Result<Vec<FileEntry>>,
    },
}

async fn execute(client: &GatewayClient, request: GatewayRequest) -> GatewayResponse {
    match request {
        GatewayRequest::ProbeStatus => GatewayResponse::Status(client.system_status().await),

        GatewayRequest::ProbeSession => {
            // The probe only distinguishes "session" from "no session";
            // transport failures count as no session
            GatewayResponse::Session(client.session().await.is_ok())
        }

        GatewayRequest::Login { username, password } => {
            GatewayResponse::Login(client.login(&username, &password).await)
        }

        GatewayRequest::Setup { username, password } => {
            GatewayResponse::Setup(client.setup(&username, &password).await)
        }

        GatewayRequest::List { ticket } => {
            let result = client.list_directory(&ticket.path).await;
            if let Err(e) = &result {
                log_debug(&format!(
                    "Gateway: listing for '{}' failed: {}",
                    ticket.path, e
                ));
            }
            GatewayResponse::Listing { ticket, result }
        }
    }
}

/// Spawn the gateway worker
pub fn spawn(
    client: GatewayClient,
) -> (
    mpsc::UnboundedSender<GatewayRequest>,
    mpsc::UnboundedReceiver<GatewayResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<GatewayRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<GatewayResponse>();

    tokio::spawn(async move {
        while let Some(request) = request_rx.recv().await {
            let response = execute(&client, request).await;
            if response_tx.send(response).is_err() {
                // App side hung up, nothing left to do
                break;
            }
        }
    });

    (request_tx, response_rx)
}
