//! UseCase: 接続ライフサイクル管理
//!
//! ## 概要
//!
//! `ConnectionManager` owns the [`Session`] and the single transport
//! connection. It is the only component that mutates either of them:
//! the message router and outbound framer only read the session, and every
//! write goes through the methods below.
//!
//! ## 不変条件
//!
//! - At most one connection is `Connecting` or `Bound` at any time.
//! - `bind_room` closes the previous connection before opening the next one.
//!   Calls cannot interleave because every mutating method takes `&mut self`.
//! - Events are tagged with a [`ConnectionId`]; events from a connection that
//!   is no longer current are ignored, so a late `Closed` from a torn-down
//!   connection cannot unbind its successor.
//! - No reconnection: a closed session stays unbound until the next
//!   `bind_room`.

use std::sync::Arc;

use heya_shared::time::Clock;
use tokio::sync::mpsc;

use crate::{
    domain::{
        CloseReason, Connection, ConnectionEvent, ConnectionId, ConnectionPhase, ConnectionState,
        EventSender, FrameCodec, Presenter, Room, Session, Transport, TransportEvent, Username,
    },
    error::TransportError,
};

use super::{
    message_router::{MessageRouter, RouteOutcome},
    outbound_framer::{OutboundFramer, SendOutcome},
    room_binding,
};

/// 接続マネージャー
pub struct ConnectionManager {
    /// セッション状態（ユーザー名・接続状態・チャットログ）
    session: Session,
    /// Transport（メッセージングエンドポイントへの接続の抽象化）
    transport: Arc<dyn Transport>,
    /// FrameCodec（ワイヤーフォーマットの抽象化）
    codec: Arc<dyn FrameCodec>,
    /// Presenter（表示層の抽象化）
    presenter: Arc<dyn Presenter>,
    router: MessageRouter,
    /// 各接続に渡すイベント送信側
    events: EventSender,
    last_id: ConnectionId,
}

impl ConnectionManager {
    /// Create a manager for `username`.
    ///
    /// Returns the manager together with the receiving end of the transport
    /// event channel. The caller must feed every received event back into
    /// [`ConnectionManager::handle_event`], one at a time.
    pub fn new(
        username: Username,
        transport: Arc<dyn Transport>,
        codec: Arc<dyn FrameCodec>,
        presenter: Arc<dyn Presenter>,
        clock: Arc<dyn Clock>,
    ) -> (Self, mpsc::UnboundedReceiver<ConnectionEvent>) {
        let (events, events_rx) = mpsc::unbounded_channel();
        let manager = Self {
            session: Session::new(username),
            transport,
            router: MessageRouter::new(codec.clone(), clock),
            codec,
            presenter,
            events,
            last_id: ConnectionId::new(0),
        };
        (manager, events_rx)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn phase(&self) -> ConnectionPhase {
        self.session.phase()
    }

    /// Bind the session to `room`.
    ///
    /// Any live connection is closed first. On success the new connection is
    /// `Connecting`; it becomes `Bound` once its `Opened` event is handled and
    /// the presence frame is sent. On failure the session is left unbound.
    pub async fn bind_room(&mut self, room: Room) -> Result<ConnectionId, TransportError> {
        if let Some(previous) = self.session.selected_room()
            && !previous.is_named(&room.room_name)
        {
            let text = format!("Leaving room '{}'", previous.room_name);
            self.presenter.notice(&text);
        }

        self.teardown(CloseReason::Local).await;

        self.last_id = self.last_id.next();
        let id = self.last_id;
        tracing::info!(
            "Binding to room '{}' ({}) on connection {}",
            room.room_name,
            room.room_id,
            id
        );

        match self.transport.open(id, self.events.clone()).await {
            Ok(connection) => {
                self.session.state = ConnectionState::Connecting {
                    id,
                    room,
                    connection,
                };
                Ok(id)
            }
            Err(e) => {
                tracing::warn!("Failed to open connection {}: {}", id, e);
                self.session.state = ConnectionState::Closed {
                    reason: CloseReason::Error(e.to_string()),
                };
                Err(e)
            }
        }
    }

    /// Leave the current room. Returns `false` if nothing was connected.
    pub async fn leave(&mut self) -> bool {
        let Some(room_name) = self.session.selected_room().map(|r| r.room_name.clone()) else {
            return false;
        };

        self.teardown(CloseReason::Local).await;
        self.presenter.notice(&format!("Left room '{}'", room_name));
        true
    }

    /// Handle one transport event.
    pub async fn handle_event(&mut self, event: ConnectionEvent) {
        if self.session.state.connection_id() != Some(event.connection) {
            tracing::debug!(
                "Ignoring stale event from connection {}: {:?}",
                event.connection,
                event.event
            );
            return;
        }

        match event.event {
            TransportEvent::Opened => self.complete_binding().await,
            TransportEvent::FrameReceived(raw) => self.route_frame(&raw),
            TransportEvent::Closed(reason) => self.on_closed(reason),
        }
    }

    /// Frame and send user input to the bound room.
    ///
    /// Blank input and input while not `Bound` are silently dropped.
    pub async fn send_content(&mut self, text: &str) -> SendOutcome {
        let Some(content) = OutboundFramer::normalize(text) else {
            return SendOutcome::Empty;
        };

        let Session {
            username, state, ..
        } = &mut self.session;
        let ConnectionState::Bound {
            id,
            room,
            connection,
        } = state
        else {
            tracing::debug!("Dropping message: no room is bound");
            return SendOutcome::NotBound;
        };

        let message = OutboundFramer::frame(room, username, content);
        let json = match self.codec.encode(&message) {
            Ok(json) => json,
            Err(e) => return SendOutcome::Failed(e.into()),
        };

        let id = *id;
        let result = connection.send(json).await;
        match result {
            Ok(()) => {
                tracing::debug!("Sent message on connection {}", id);
                SendOutcome::Sent(message)
            }
            Err(e) => {
                tracing::warn!("Failed to send on connection {}: {}", id, e);
                self.teardown(CloseReason::Error(e.to_string())).await;
                self.presenter.notice("Connection lost");
                SendOutcome::Failed(e)
            }
        }
    }

    /// `Connecting → Bound`: send the presence frame exactly once.
    async fn complete_binding(&mut self) {
        match std::mem::replace(&mut self.session.state, ConnectionState::Idle) {
            ConnectionState::Connecting {
                id,
                room,
                connection,
            } => self.announce(id, room, connection).await,
            other => {
                tracing::debug!("Ignoring repeated open in state {:?}", other);
                self.session.state = other;
            }
        }
    }

    async fn announce(
        &mut self,
        id: ConnectionId,
        room: Room,
        mut connection: Box<dyn Connection>,
    ) {
        let result = room_binding::announce(
            connection.as_mut(),
            self.codec.as_ref(),
            &room,
            &self.session.username,
        )
        .await;
        match result {
            Ok(()) => {
                tracing::info!("Bound to room '{}' on connection {}", room.room_name, id);
                self.session.log.clear();
                self.presenter.show_chat(&room);
                self.session.state = ConnectionState::Bound {
                    id,
                    room,
                    connection,
                };
            }
            Err(e) => {
                tracing::warn!("Presence announcement failed on connection {}: {}", id, e);
                connection.close().await;
                self.session.state = ConnectionState::Closed {
                    reason: CloseReason::Error(e.to_string()),
                };
                self.presenter.hide_chat();
                self.presenter
                    .notice(&format!("Could not join room '{}': {}", room.room_name, e));
            }
        }
    }

    fn route_frame(&mut self, raw: &str) {
        let Some(room) = self.session.bound_room() else {
            tracing::debug!("Dropping frame received before the binding completed");
            return;
        };

        match self.router.route(raw, room, &self.session.username) {
            RouteOutcome::Render(directive) => {
                self.presenter.render(&directive);
                self.session.log.push(directive);
            }
            RouteOutcome::Presence => {
                tracing::debug!("Presence frame received; not rendered");
            }
            RouteOutcome::OtherRoom(name) => {
                tracing::debug!("Dropping frame for room '{}'", name);
            }
            RouteOutcome::Malformed(e) => {
                tracing::warn!("Discarding frame: {}", e);
            }
        }
    }

    /// Peer close or transport error.
    fn on_closed(&mut self, reason: CloseReason) {
        let previous = std::mem::replace(
            &mut self.session.state,
            ConnectionState::Closed {
                reason: reason.clone(),
            },
        );
        self.session.log.clear();
        if let Some(room) = previous.room() {
            tracing::info!("Connection to room '{}' ended: {}", room.room_name, reason);
            self.presenter.notice(&format!(
                "Disconnected from room '{}' ({})",
                room.room_name, reason
            ));
        }
        self.presenter.hide_chat();
    }

    /// Close the live connection, if any.
    async fn teardown(&mut self, reason: CloseReason) {
        match std::mem::replace(&mut self.session.state, ConnectionState::Idle) {
            ConnectionState::Connecting {
                id, mut connection, ..
            }
            | ConnectionState::Bound {
                id, mut connection, ..
            } => {
                connection.close().await;
                tracing::info!("Connection {} torn down ({})", id, reason);
                self.session.state = ConnectionState::Closed { reason };
                self.session.log.clear();
                self.presenter.hide_chat();
            }
            other => self.session.state = other,
        }
    }
}
