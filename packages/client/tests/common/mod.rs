//! Stand-in chat server and helpers shared by the integration tests.

#![allow(dead_code)]

use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    Json, Router,
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use heya_client::{
    domain::{ConnectionEvent, Presenter, RenderDirective, Room},
    infrastructure::dto::{http::RoomDto, websocket::ChatMessage},
};
use tokio::sync::{mpsc, watch};

/// Peer greeting pushed to a client right after its presence frame.
pub const GREETING: &str = "welcome aboard";

struct ServerState {
    rooms: Mutex<Vec<RoomDto>>,
    frames: Mutex<Vec<ChatMessage>>,
    fail_directory: Mutex<bool>,
    /// Flipped to `true` to make every open socket send a close frame
    shutdown: watch::Sender<bool>,
}

/// In-process server speaking the chat protocol and the room directory API.
///
/// On `/ws` it records every text frame. A presence frame is answered with a
/// greeting from "Bob" in the same room and a chatter frame from another
/// room; any other frame is echoed back with a server timestamp.
/// `/broken/rooms` answers 200 with a body that is not JSON.
/// [`TestServer::close_sockets`] makes the server close every socket.
pub struct TestServer {
    addr: SocketAddr,
    state: Arc<ServerState>,
}

impl TestServer {
    pub async fn start(rooms: Vec<RoomDto>) -> Self {
        let (shutdown, _) = watch::channel(false);
        let state = Arc::new(ServerState {
            rooms: Mutex::new(rooms),
            frames: Mutex::new(Vec::new()),
            fail_directory: Mutex::new(false),
            shutdown,
        });

        let app = Router::new()
            .route("/ws", get(websocket_handler))
            .route("/rooms", get(list_rooms))
            .route("/create-room", post(create_room))
            .route("/broken/rooms", get(|| async { "this is not a room list" }))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Self { addr, state }
    }

    pub fn ws_url(&self) -> String {
        format!("ws://{}/ws", self.addr)
    }

    pub fn http_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Frames received on `/ws`, in arrival order.
    pub fn frames(&self) -> Vec<ChatMessage> {
        self.state.frames.lock().unwrap().clone()
    }

    pub fn room_names(&self) -> Vec<String> {
        self.state
            .rooms
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.room_name.clone())
            .collect()
    }

    /// Send a close frame on every open socket and stop serving it.
    pub fn close_sockets(&self) {
        self.state.shutdown.send_replace(true);
    }

    /// Make the directory routes answer 503.
    pub fn fail_directory(&self) {
        *self.state.fail_directory.lock().unwrap() = true;
    }
}

async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<ServerState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(mut socket: WebSocket, state: Arc<ServerState>) {
    let mut shutdown = state.shutdown.subscribe();

    loop {
        let received = tokio::select! {
            _ = shutdown.wait_for(|closed| *closed) => None,
            msg = socket.recv() => Some(msg),
        };
        let Some(msg) = received else {
            socket.send(Message::Close(None)).await.ok();
            return;
        };
        let Some(Ok(msg)) = msg else {
            return;
        };
        let Message::Text(text) = msg else {
            continue;
        };
        let Ok(frame) = serde_json::from_str::<ChatMessage>(text.as_str()) else {
            continue;
        };
        state.frames.lock().unwrap().push(frame.clone());

        let replies = if frame.is_presence() {
            vec![
                ChatMessage {
                    room_name: "ELSEWHERE".to_string(),
                    username: "Carol".to_string(),
                    content: "not for you".to_string(),
                    ..frame.clone()
                },
                ChatMessage {
                    username: "Bob".to_string(),
                    content: GREETING.to_string(),
                    timestamp: Some("12:00".to_string()),
                    ..frame
                },
            ]
        } else {
            vec![ChatMessage {
                timestamp: Some("12:01".to_string()),
                ..frame
            }]
        };

        for reply in replies {
            let Ok(json) = serde_json::to_string(&reply) else {
                continue;
            };
            if socket.send(Message::Text(json.into())).await.is_err() {
                return;
            }
        }
    }
}

async fn list_rooms(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    if *state.fail_directory.lock().unwrap() {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    }
    Json(state.rooms.lock().unwrap().clone()).into_response()
}

async fn create_room(
    State(state): State<Arc<ServerState>>,
    Json(room): Json<RoomDto>,
) -> impl IntoResponse {
    if *state.fail_directory.lock().unwrap() {
        return StatusCode::SERVICE_UNAVAILABLE;
    }
    state.rooms.lock().unwrap().push(room);
    StatusCode::CREATED
}

/// Presenter that records what the core asked it to display.
#[derive(Default)]
pub struct CapturePresenter {
    rendered: Mutex<Vec<RenderDirective>>,
    chats: Mutex<Vec<String>>,
    hidden: Mutex<usize>,
    notices: Mutex<Vec<String>>,
}

impl CapturePresenter {
    pub fn rendered(&self) -> Vec<RenderDirective> {
        self.rendered.lock().unwrap().clone()
    }

    pub fn chats(&self) -> Vec<String> {
        self.chats.lock().unwrap().clone()
    }

    /// How many times the chat view was hidden.
    pub fn hidden(&self) -> usize {
        *self.hidden.lock().unwrap()
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }
}

impl Presenter for CapturePresenter {
    fn show_chat(&self, room: &Room) {
        self.chats.lock().unwrap().push(room.room_name.clone());
    }

    fn hide_chat(&self) {
        *self.hidden.lock().unwrap() += 1;
    }

    fn render(&self, directive: &RenderDirective) {
        self.rendered.lock().unwrap().push(directive.clone());
    }

    fn notice(&self, text: &str) {
        self.notices.lock().unwrap().push(text.to_string());
    }

    fn show_rooms(&self, _rooms: &[Room]) {}
}

/// Wait for the next transport event, failing the test after a timeout.
///
/// The channel never closes while the manager holds its sender, so use
/// [`assert_no_event`] to check that nothing else arrives.
pub async fn next_event(events: &mut mpsc::UnboundedReceiver<ConnectionEvent>) -> ConnectionEvent {
    tokio::time::timeout(Duration::from_secs(5), events.recv())
        .await
        .expect("Timed out waiting for a transport event")
        .expect("Event channel closed")
}

/// Assert that no transport event arrives within a short grace period.
pub async fn assert_no_event(events: &mut mpsc::UnboundedReceiver<ConnectionEvent>) {
    let next = tokio::time::timeout(Duration::from_millis(300), events.recv()).await;
    assert!(next.is_err(), "unexpected transport event: {:?}", next);
}
