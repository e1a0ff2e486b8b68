//! WebSocket transport built on tokio-tungstenite.
//!
//! `open` performs the WebSocket handshake, queues `Opened`, then spawns a
//! reader task that forwards text frames as `FrameReceived` and finishes
//! with a single `Closed`. The write half stays with the returned
//! [`WebSocketConnection`], owned by the connection manager.

use async_trait::async_trait;
use futures_util::{
    SinkExt, StreamExt,
    stream::{SplitSink, SplitStream},
};
use tokio::{net::TcpStream, task::JoinHandle};
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async, tungstenite::protocol::Message,
};

use crate::{
    domain::{
        CloseReason, Connection, ConnectionEvent, ConnectionId, EventSender, Transport,
        TransportEvent,
    },
    error::TransportError,
};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Opens connections to a single well-known WebSocket endpoint.
#[derive(Debug, Clone)]
pub struct WebSocketTransport {
    url: String,
}

impl WebSocketTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait]
impl Transport for WebSocketTransport {
    async fn open(
        &self,
        id: ConnectionId,
        events: EventSender,
    ) -> Result<Box<dyn Connection>, TransportError> {
        let (ws_stream, _response) =
            connect_async(self.url.as_str())
                .await
                .map_err(|e| TransportError::ConnectFailed {
                    url: self.url.clone(),
                    reason: e.to_string(),
                })?;

        tracing::info!("Connection {} opened to {}", id, self.url);

        let (write, read) = ws_stream.split();

        // Opened must be queued before the reader can forward anything.
        if events
            .send(ConnectionEvent::new(id, TransportEvent::Opened))
            .is_err()
        {
            tracing::warn!("Event consumer gone before connection {} opened", id);
        }

        let reader = tokio::spawn(read_loop(id, read, events));

        Ok(Box::new(WebSocketConnection { id, write, reader }))
    }
}

/// Forward inbound frames until the stream ends, then report why.
async fn read_loop(id: ConnectionId, mut read: SplitStream<WsStream>, events: EventSender) {
    let reason = loop {
        match read.next().await {
            Some(Ok(Message::Text(text))) => {
                let event = TransportEvent::FrameReceived(text.as_str().to_owned());
                if events.send(ConnectionEvent::new(id, event)).is_err() {
                    // Nobody is listening any more.
                    return;
                }
            }
            Some(Ok(Message::Binary(data))) => {
                tracing::debug!(
                    "Connection {} ignoring {} bytes of binary data",
                    id,
                    data.len()
                );
            }
            Some(Ok(Message::Close(frame))) => {
                tracing::info!("Server closed connection {}: {:?}", id, frame);
                break CloseReason::Peer;
            }
            Some(Ok(_)) => {}
            Some(Err(e)) => {
                tracing::warn!("WebSocket read error on connection {}: {}", id, e);
                break CloseReason::Error(e.to_string());
            }
            None => break CloseReason::Peer,
        }
    };

    let _ = events.send(ConnectionEvent::new(id, TransportEvent::Closed(reason)));
}

/// Write half of an open WebSocket connection.
pub struct WebSocketConnection {
    id: ConnectionId,
    write: SplitSink<WsStream, Message>,
    reader: JoinHandle<()>,
}

#[async_trait]
impl Connection for WebSocketConnection {
    async fn send(&mut self, frame: String) -> Result<(), TransportError> {
        self.write
            .send(Message::Text(frame.into()))
            .await
            .map_err(|e| TransportError::SendFailed(e.to_string()))
    }

    async fn close(&mut self) {
        // Stop forwarding first so no frame of this connection is delivered
        // after the manager has moved on.
        self.reader.abort();

        if let Err(e) = self.write.close().await {
            tracing::debug!("Closing connection {} failed: {}", self.id, e);
        }
        tracing::info!("Connection {} closed", self.id);
    }
}

impl Drop for WebSocketConnection {
    fn drop(&mut self) {
        self.reader.abort();
    }
}
