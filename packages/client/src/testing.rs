//! Test doubles shared by the unit tests.

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;

use crate::{
    domain::{
        Connection, ConnectionEvent, ConnectionId, EventSender, Presenter, RenderDirective, Room,
        Transport, TransportEvent,
    },
    error::TransportError,
    infrastructure::dto::websocket::ChatMessage,
};

/// Operations observed on the fake wire, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WireOp {
    Open(ConnectionId),
    Send(ConnectionId, String),
    Close(ConnectionId),
}

#[derive(Default)]
struct WireState {
    ops: Vec<WireOp>,
    live: usize,
    max_live: usize,
}

/// In-memory transport recording every open/send/close.
#[derive(Clone, Default)]
pub struct FakeTransport {
    wire: Arc<Mutex<WireState>>,
    fail_open: Arc<AtomicBool>,
    fail_send: Arc<AtomicBool>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a connection directly, without emitting events.
    pub fn connection(&self, id: ConnectionId) -> Box<dyn Connection> {
        let mut wire = self.wire.lock().unwrap();
        wire.ops.push(WireOp::Open(id));
        wire.live += 1;
        wire.max_live = wire.max_live.max(wire.live);
        Box::new(FakeConnection {
            id,
            wire: self.wire.clone(),
            fail_send: self.fail_send.clone(),
        })
    }

    pub fn set_fail_open(&self, fail: bool) {
        self.fail_open.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_send(&self, fail: bool) {
        self.fail_send.store(fail, Ordering::SeqCst);
    }

    pub fn ops(&self) -> Vec<WireOp> {
        self.wire.lock().unwrap().ops.clone()
    }

    /// Highest number of connections alive at the same time.
    pub fn max_live(&self) -> usize {
        self.wire.lock().unwrap().max_live
    }

    pub fn live(&self) -> usize {
        self.wire.lock().unwrap().live
    }

    /// Every frame sent on `id`, parsed back into envelopes.
    pub fn sent_frames(&self, id: ConnectionId) -> Vec<ChatMessage> {
        self.ops()
            .into_iter()
            .filter_map(|op| match op {
                WireOp::Send(conn, json) if conn == id => {
                    Some(serde_json::from_str(&json).expect("sent frame should be JSON"))
                }
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn open(
        &self,
        id: ConnectionId,
        events: EventSender,
    ) -> Result<Box<dyn Connection>, TransportError> {
        if self.fail_open.load(Ordering::SeqCst) {
            return Err(TransportError::ConnectFailed {
                url: "fake://endpoint".to_string(),
                reason: "connection refused".to_string(),
            });
        }

        let connection = self.connection(id);
        let _ = events.send(ConnectionEvent::new(id, TransportEvent::Opened));
        Ok(connection)
    }
}

struct FakeConnection {
    id: ConnectionId,
    wire: Arc<Mutex<WireState>>,
    fail_send: Arc<AtomicBool>,
}

#[async_trait]
impl Connection for FakeConnection {
    async fn send(&mut self, frame: String) -> Result<(), TransportError> {
        if self.fail_send.load(Ordering::SeqCst) {
            return Err(TransportError::SendFailed("broken pipe".to_string()));
        }
        self.wire
            .lock()
            .unwrap()
            .ops
            .push(WireOp::Send(self.id, frame));
        Ok(())
    }

    async fn close(&mut self) {
        self.wire.lock().unwrap().ops.push(WireOp::Close(self.id));
    }
}

impl Drop for FakeConnection {
    fn drop(&mut self) {
        self.wire.lock().unwrap().live -= 1;
    }
}

/// Everything a presenter was asked to show, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    Chat(String),
    Hidden,
    Rendered(RenderDirective),
    Notice(String),
    Rooms(Vec<String>),
}

#[derive(Default)]
pub struct RecordingPresenter {
    shown: Mutex<Vec<Shown>>,
}

impl RecordingPresenter {
    pub fn shown(&self) -> Vec<Shown> {
        self.shown.lock().unwrap().clone()
    }

    pub fn rendered(&self) -> Vec<RenderDirective> {
        self.shown()
            .into_iter()
            .filter_map(|s| match s {
                Shown::Rendered(d) => Some(d),
                _ => None,
            })
            .collect()
    }

    pub fn notices(&self) -> Vec<String> {
        self.shown()
            .into_iter()
            .filter_map(|s| match s {
                Shown::Notice(n) => Some(n),
                _ => None,
            })
            .collect()
    }

    fn push(&self, shown: Shown) {
        self.shown.lock().unwrap().push(shown);
    }
}

impl Presenter for RecordingPresenter {
    fn show_chat(&self, room: &Room) {
        self.push(Shown::Chat(room.room_name.clone()));
    }

    fn hide_chat(&self) {
        self.push(Shown::Hidden);
    }

    fn render(&self, directive: &RenderDirective) {
        self.push(Shown::Rendered(directive.clone()));
    }

    fn notice(&self, text: &str) {
        self.push(Shown::Notice(text.to_string()));
    }

    fn show_rooms(&self, rooms: &[Room]) {
        self.push(Shown::Rooms(
            rooms.iter().map(|r| r.room_name.clone()).collect(),
        ));
    }
}
