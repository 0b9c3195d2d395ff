//! Network actor - runs Gemini API calls in the Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::config::GeminiConfig;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{create_client, execute_generate};

/// Network actor that processes generation commands
pub struct NetworkActor {
    client: reqwest::Client,
    config: GeminiConfig,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(config: GeminiConfig, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client: create_client(),
            config,
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                // Handle incoming commands
                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::Generate { id, request }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();
                            let config = self.config.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, model = %config.model, "Executing generation");
                                let result = execute_generate(&client, &config, request, id).await;
                                match &result {
                                    NetworkResponse::Completed { time_ms, .. } => {
                                        tracing::info!(id, time_ms, "Generation completed");
                                    }
                                    NetworkResponse::Failed { message, time_ms, .. } => {
                                        tracing::warn!(id, time_ms, message = %message, "Generation failed");
                                    }
                                }
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::Shutdown) => break,

                        None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {
                    // Task completed - cleanup is handled by the tasks themselves
                }
            }
        }
    }
}
