//! Client run loop.
//!
//! One task owns the [`ConnectionManager`] and selects over user input and
//! transport events, handling each to completion before the next. Input is
//! read by rustyline on a dedicated thread and forwarded over a channel.

use std::sync::Arc;

use heya_shared::time::SystemClock;
use rustyline::{DefaultEditor, error::ReadlineError};
use tokio::sync::{mpsc, oneshot};

use crate::{
    config::ClientConfig,
    domain::{ConnectionEvent, Presenter, Room, RoomDirectory},
    error::ClientError,
    infrastructure::{codec::JsonFrameCodec, transport::WebSocketTransport},
    usecase::{ConnectionManager, SendOutcome},
};

use super::{
    command::Command,
    formatter::MessageFormatter,
    presenter::TerminalPresenter,
    prompt::prompt_for,
};

/// Whether the run loop should keep going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// UI glue between commands, the room directory and the connection manager.
pub struct ChatApp {
    manager: ConnectionManager,
    directory: Arc<dyn RoomDirectory>,
    presenter: Arc<dyn Presenter>,
    /// Rooms from the last successful directory fetch
    rooms: Vec<Room>,
}

impl ChatApp {
    pub fn new(
        manager: ConnectionManager,
        directory: Arc<dyn RoomDirectory>,
        presenter: Arc<dyn Presenter>,
    ) -> Self {
        Self {
            manager,
            directory,
            presenter,
            rooms: Vec::new(),
        }
    }

    pub fn manager(&self) -> &ConnectionManager {
        &self.manager
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Fetch the room list. On failure the previous list is kept.
    pub async fn refresh_rooms(&mut self) {
        match self.directory.list_rooms().await {
            Ok(rooms) => {
                self.rooms = rooms;
                self.presenter.show_rooms(&self.rooms);
            }
            Err(e) => {
                tracing::warn!("Failed to fetch rooms: {}", e);
                self.presenter.notice(&e.to_string());
            }
        }
    }

    /// Execute one parsed command.
    pub async fn execute(&mut self, command: Command) -> Flow {
        match command {
            Command::Rooms => self.refresh_rooms().await,
            Command::Join(key) => self.join(&key).await,
            Command::Create { room_id, room_name } => self.create(room_id, room_name).await,
            Command::Leave => {
                if !self.manager.leave().await {
                    self.presenter.notice("You are not in a room");
                }
            }
            Command::Help => self.presenter.notice(&MessageFormatter::format_help()),
            Command::Quit => return Flow::Quit,
            Command::Say(text) => self.say(&text).await,
        }
        Flow::Continue
    }

    /// Forward one transport event to the connection manager.
    pub async fn handle_event(&mut self, event: ConnectionEvent) {
        self.manager.handle_event(event).await;
    }

    /// Leave the current room quietly before exiting.
    pub async fn shutdown(&mut self) {
        self.manager.leave().await;
    }

    /// Find a room by exact name, then id, then 1-based list number.
    fn resolve_room(&self, key: &str) -> Option<Room> {
        self.rooms
            .iter()
            .find(|r| r.room_name == key)
            .or_else(|| self.rooms.iter().find(|r| r.room_id == key))
            .or_else(|| {
                key.parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| self.rooms.get(i))
            })
            .cloned()
    }

    async fn join(&mut self, key: &str) {
        if self.rooms.is_empty() {
            self.refresh_rooms().await;
        }

        let Some(room) = self.resolve_room(key) else {
            self.presenter
                .notice(&format!("No room matches '{}'. Try /rooms.", key));
            return;
        };

        if let Err(e) = self.manager.bind_room(room.clone()).await {
            self.presenter.notice(&format!(
                "Could not connect to room '{}': {}",
                room.room_name, e
            ));
        }
    }

    async fn create(&mut self, room_id: String, room_name: String) {
        let owner = self.manager.session().username().as_str().to_string();
        let room = Room::new(room_id, room_name, owner);

        match self.directory.create_room(&room).await {
            Ok(()) => {
                self.presenter
                    .notice(&format!("Created room '{}'", room.room_name));
                self.refresh_rooms().await;
            }
            Err(e) => {
                tracing::warn!("Failed to create room '{}': {}", room.room_name, e);
                self.presenter.notice(&e.to_string());
            }
        }
    }

    async fn say(&mut self, text: &str) {
        match self.manager.send_content(text).await {
            SendOutcome::Sent(_) | SendOutcome::Empty | SendOutcome::Failed(_) => {}
            SendOutcome::NotBound => {
                // The core drops this silently; the terminal has no hidden
                // input box, so point the user at /join instead.
                self.presenter
                    .notice("Join a room with /join <room> to start chatting");
            }
        }
    }
}

/// Spawn the blocking readline thread; lines arrive on the returned channel.
///
/// The channel closes on Ctrl+C, Ctrl+D or a readline error.
async fn spawn_input_thread(
    prompt: String,
) -> Result<mpsc::UnboundedReceiver<String>, ClientError> {
    let (input_tx, input_rx) = mpsc::unbounded_channel::<String>();
    let (ready_tx, ready_rx) = oneshot::channel::<Result<(), String>>();

    std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => {
                ready_tx.send(Ok(())).ok();
                rl
            }
            Err(e) => {
                ready_tx.send(Err(e.to_string())).ok();
                return;
            }
        };

        loop {
            match rl.readline(&prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        rl.add_history_entry(line.as_str()).ok();
                    }
                    if input_tx.send(line).is_err() {
                        // Channel closed, exit thread
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C
                    tracing::info!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl+D
                    tracing::info!("EOF");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    match ready_rx.await {
        Ok(Ok(())) => Ok(input_rx),
        Ok(Err(reason)) => Err(ClientError::Input(reason)),
        Err(_) => Err(ClientError::Input("input thread exited".to_string())),
    }
}

/// Run the interactive chat client until the user quits.
pub async fn run_client(config: ClientConfig) -> Result<(), ClientError> {
    let prompt = prompt_for(config.username.as_str());
    let presenter: Arc<dyn Presenter> = Arc::new(TerminalPresenter::new(
        MessageFormatter::new(config.width),
        prompt.clone(),
    ));
    let transport = Arc::new(WebSocketTransport::new(config.url.clone()));
    let directory = config.build_directory();

    let (manager, mut events_rx) = ConnectionManager::new(
        config.username.clone(),
        transport,
        Arc::new(JsonFrameCodec),
        presenter.clone(),
        Arc::new(SystemClock),
    );
    let mut app = ChatApp::new(manager, directory, presenter);

    tracing::info!(
        "Starting as '{}' against {} ({:?})",
        config.username,
        config.url,
        config.directory
    );
    println!(
        "\nYou are '{}'. Type /help for commands. Press Ctrl+C to exit.",
        config.username
    );
    let mut input_rx = spawn_input_thread(prompt).await?;
    app.refresh_rooms().await;

    loop {
        tokio::select! {
            line = input_rx.recv() => {
                let Some(line) = line else {
                    break;
                };
                match Command::parse(&line) {
                    Ok(command) => {
                        if app.execute(command).await == Flow::Quit {
                            break;
                        }
                    }
                    Err(e) => app.presenter.notice(&e.to_string()),
                }
            }
            Some(event) = events_rx.recv() => {
                app.handle_event(event).await;
            }
        }
    }

    app.shutdown().await;
    tracing::info!("Client session ended");
    Ok(())
}
