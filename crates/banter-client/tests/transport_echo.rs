//! Transport integration tests against a loopback websocket server.

#![allow(clippy::unwrap_used)]

use banter_client::BrokerConfig;
use banter_core::TransportEvent;
use futures::{SinkExt, StreamExt};
use tokio::net::TcpListener;

/// Bind a loopback broker that echoes every text frame to its one client.
async fn echo_broker() -> BrokerConfig {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut socket = tokio_tungstenite::accept_async(stream).await.unwrap();
        while let Some(Ok(message)) = socket.next().await {
            if message.is_text() {
                socket.send(message).await.unwrap();
            }
        }
    });

    let endpoint = format!("ws://{addr}").parse().unwrap();
    BrokerConfig::new(endpoint, "test-key")
}

#[tokio::test]
async fn connect_reports_opened_and_relays_frames() {
    let config = echo_broker().await;
    let mut broker = banter_client::transport::connect(&config);

    assert_eq!(broker.events.recv().await, Some(TransportEvent::Opened));

    broker.to_broker.send(r#"{"message":"hi","fromUserId":"alice"}"#.into()).await.unwrap();

    let event = broker.events.recv().await.unwrap();
    assert_eq!(event, TransportEvent::MessageReceived {
        payload: r#"{"message":"hi","fromUserId":"alice"}"#.into(),
    });
}

#[tokio::test]
async fn dial_failure_surfaces_as_failed_event() {
    // Bind then drop to get a port with nothing listening.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = BrokerConfig::new(format!("ws://{addr}").parse().unwrap(), "test-key");
    let mut broker = banter_client::transport::connect(&config);

    let event = broker.events.recv().await;
    assert!(matches!(event, Some(TransportEvent::Failed { .. })), "got {event:?}");
}

#[tokio::test]
async fn server_close_surfaces_as_closing_then_closed() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut socket = tokio_tungstenite::accept_async(stream).await.unwrap();
        socket.close(None).await.unwrap();
        // Drain until the close handshake completes.
        while socket.next().await.is_some() {}
    });

    let config = BrokerConfig::new(format!("ws://{addr}").parse().unwrap(), "test-key");
    let mut broker = banter_client::transport::connect(&config);

    assert_eq!(broker.events.recv().await, Some(TransportEvent::Opened));
    assert_eq!(broker.events.recv().await, Some(TransportEvent::Closing));
    assert_eq!(broker.events.recv().await, Some(TransportEvent::Closed));
}
