//! Long-lived WebSocket client for the OSC relay collaborator.

use futures::stream::{SplitSink, SplitStream};
use futures::{SinkExt, StreamExt};
use thiserror::Error;
use tokio::net::TcpStream;
use tokio::sync::{mpsc, watch};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite};
use tokio_util::sync::CancellationToken;

use crate::PortRelay;
use crate::protocol::{RelayCommand, ValueBatch};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Where the relay lives and which OSC ports it should start on.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// WebSocket URL of the relay process.
    pub url: String,
    /// Initial OSC receive port, announced on connect.
    pub receive_port: u16,
    /// Initial OSC send port, announced on connect.
    pub send_port: u16,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            url: "ws://127.0.0.1:8080".to_string(),
            receive_port: 4444,
            send_port: 4445,
        }
    }
}

/// An error that can occur while talking to the relay.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The WebSocket connection could not be established.
    #[error("failed to connect to relay at {url}")]
    Connect {
        /// The URL that refused us.
        url: String,
        /// The underlying WebSocket error.
        #[source]
        source: tungstenite::Error,
    },
}

/// Handle to the single shared relay connection.
///
/// Outgoing frames go through an unbounded queue drained by a writer task;
/// the reader task keeps only the most recent inbound frame, which is all
/// the polling block ever asks for. Both tasks stop when the cancellation
/// token fires or the peer goes away.
#[derive(Debug)]
pub struct RelayClient {
    outgoing: mpsc::UnboundedSender<RelayCommand>,
    latest: watch::Receiver<ValueBatch>,
}

impl RelayClient {
    /// Connect to the relay and announce the configured ports.
    pub async fn connect(
        config: &RelayConfig,
        cancel: CancellationToken,
    ) -> Result<Self, RelayError> {
        let (ws, _) = connect_async(config.url.as_str())
            .await
            .map_err(|source| RelayError::Connect {
                url: config.url.clone(),
                source,
            })?;
        log::info!("connected to OSC relay at {}", config.url);

        let (sink, stream) = ws.split();
        let (outgoing, pending) = mpsc::unbounded_channel();
        let (latest_tx, latest) = watch::channel(ValueBatch::default());

        // The relay expects its port configuration before any value traffic.
        let _ = outgoing.send(RelayCommand::ReceivePort(config.receive_port));
        let _ = outgoing.send(RelayCommand::SendPort(config.send_port));

        tokio::spawn(write_loop(sink, pending, cancel.clone()));
        tokio::spawn(read_loop(stream, latest_tx, cancel));

        Ok(Self { outgoing, latest })
    }

    fn send_command(&self, command: RelayCommand) {
        if self.outgoing.send(command).is_err() {
            log::warn!("relay connection is gone, dropping outgoing frame");
        }
    }
}

impl PortRelay for RelayClient {
    fn set_receive_port(&self, port: u16) {
        self.send_command(RelayCommand::ReceivePort(port));
    }

    fn set_send_port(&self, port: u16) {
        self.send_command(RelayCommand::SendPort(port));
    }

    fn push(&self, address: &str, value: &str) {
        self.send_command(RelayCommand::Send {
            address: address.to_string(),
            value: value.to_string(),
        });
    }

    fn latest(&self) -> ValueBatch {
        self.latest.borrow().clone()
    }
}

async fn write_loop(
    mut sink: SplitSink<WsStream, Message>,
    mut pending: mpsc::UnboundedReceiver<RelayCommand>,
    cancel: CancellationToken,
) {
    loop {
        tokio::select! {
            () = cancel.cancelled() => {
                let _ = sink.send(Message::Close(None)).await;
                break;
            }
            command = pending.recv() => match command {
                Some(command) => {
                    if let Err(e) = sink.send(Message::text(command.encode())).await {
                        log::warn!("relay write failed: {e}");
                        break;
                    }
                }
                None => break,
            },
        }
    }
}

async fn read_loop(
    mut stream: SplitStream<WsStream>,
    latest: watch::Sender<ValueBatch>,
    cancel: CancellationToken,
) {
    loop {
        tokio::select! {
            () = cancel.cancelled() => break,
            message = stream.next() => match message {
                Some(Ok(Message::Text(frame))) => {
                    let _ = latest.send(ValueBatch::parse(&frame));
                }
                Some(Ok(Message::Close(_))) | None => {
                    log::info!("relay closed the connection");
                    break;
                }
                // Binary, ping and pong frames are not part of the relay protocol.
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    log::warn!("relay read failed: {e}");
                    break;
                }
            },
        }
    }
}
