//! Websocket transport to the broker.
//!
//! Provides [`ConnectedBroker`], which bridges one websocket connection to
//! channels: outbound text payloads go in, [`TransportEvent`]s come out. This
//! is a thin layer that only moves frames; all session logic stays in the
//! sans-IO [`banter_core::Session`].

use banter_core::TransportEvent;
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::Message};
use url::Url;

use crate::config::BrokerConfig;

/// Channel capacity for both directions.
const CHANNEL_CAPACITY: usize = 32;

/// Handle to one broker connection.
///
/// Holds the channel endpoints bridged to the websocket by an internal task.
/// Dropping the handle aborts that task, which closes the socket.
pub struct ConnectedBroker {
    /// Outbound text payloads to the broker.
    pub to_broker: mpsc::Sender<String>,
    /// Lifecycle and message events from the broker.
    pub events: mpsc::Receiver<TransportEvent>,
    abort_handle: Option<tokio::task::AbortHandle>,
}

impl ConnectedBroker {
    /// Wrap raw channel endpoints without a connection task.
    ///
    /// Used by tests and in-process harnesses that play the broker side
    /// themselves.
    pub fn from_parts(
        to_broker: mpsc::Sender<String>,
        events: mpsc::Receiver<TransportEvent>,
    ) -> Self {
        Self { to_broker, events, abort_handle: None }
    }

    /// Stop the connection task.
    pub fn stop(&self) {
        if let Some(handle) = &self.abort_handle {
            handle.abort();
        }
    }
}

impl Drop for ConnectedBroker {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Open a websocket to the broker.
///
/// Returns immediately; the dial happens on a spawned task and its outcome
/// arrives as the first [`TransportEvent`] (`Opened` or `Failed`). Must be
/// called from within a tokio runtime.
pub fn connect(config: &BrokerConfig) -> ConnectedBroker {
    let url = config.url();
    let (to_broker_tx, to_broker_rx) = mpsc::channel(CHANNEL_CAPACITY);
    let (events_tx, events_rx) = mpsc::channel(CHANNEL_CAPACITY);

    let handle = tokio::spawn(run_connection(url, to_broker_rx, events_tx));

    ConnectedBroker {
        to_broker: to_broker_tx,
        events: events_rx,
        abort_handle: Some(handle.abort_handle()),
    }
}

/// Dial the broker and bridge between the channels and the websocket.
async fn run_connection(
    url: Url,
    mut outgoing: mpsc::Receiver<String>,
    events: mpsc::Sender<TransportEvent>,
) {
    let mut socket = match connect_async(url.as_str()).await {
        Ok((socket, _response)) => socket,
        Err(e) => {
            tracing::warn!(error = %e, "websocket dial failed");
            let _ = events.send(TransportEvent::Failed { reason: e.to_string() }).await;
            return;
        },
    };

    tracing::debug!(%url, "websocket opened");
    if events.send(TransportEvent::Opened).await.is_err() {
        return;
    }

    loop {
        tokio::select! {
            outbound = outgoing.recv() => match outbound {
                Some(payload) => {
                    if let Err(e) = socket.send(Message::Text(payload.into())).await {
                        let _ = events
                            .send(TransportEvent::Failed { reason: e.to_string() })
                            .await;
                        return;
                    }
                },
                // Controller gone: close gracefully and stop.
                None => {
                    let _ = socket.close(None).await;
                    return;
                },
            },
            inbound = socket.next() => match inbound {
                Some(Ok(Message::Text(text))) => {
                    let event = TransportEvent::MessageReceived { payload: text.to_string() };
                    if events.send(event).await.is_err() {
                        return;
                    }
                },
                Some(Ok(Message::Close(_))) => {
                    if events.send(TransportEvent::Closing).await.is_err() {
                        return;
                    }
                },
                // Binary frames and ping/pong are not part of the protocol.
                Some(Ok(_)) => {},
                Some(Err(e)) => {
                    let _ = events
                        .send(TransportEvent::Failed { reason: e.to_string() })
                        .await;
                    return;
                },
                None => {
                    let _ = events.send(TransportEvent::Closed).await;
                    return;
                },
            },
        }
    }
}
