//! Connection management and the session state machine.
//!
//! The transport runs on its own thread with a current-thread tokio runtime,
//! so the render loop never blocks on socket I/O. The two sides exchange
//! typed messages over unbounded channels: [`NetCommand`] travels toward the
//! socket, [`NetEvent`] travels back. The game side drains its event queue
//! once per frame and processes events one at a time, which keeps every
//! world mutation whole with no locking.

use crate::game::World;
use futures_util::{SinkExt, StreamExt};
use log::{debug, error, info, warn};
use shared::{ClientMessage, ServerMessage, TICK_INTERVAL_MS};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::Message};

const TICK_INTERVAL: Duration = Duration::from_millis(TICK_INTERVAL_MS);

/// Commands from the game side to the transport task.
#[derive(Debug)]
pub enum NetCommand {
    Send(ClientMessage),
}

/// Events from the transport task to the game side.
#[derive(Debug)]
pub enum NetEvent {
    /// The WebSocket handshake completed.
    Connected,
    /// A parsed inbound message.
    Message(ServerMessage),
    /// The connection is gone. Terminal: no further events follow.
    Closed,
}

/// Connection lifecycle. `Closed` is terminal; there is no reconnect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Connecting,
    Joining,
    Joined,
    Closed,
}

/// Spawns the transport thread and returns the channel pair for talking to it.
pub fn spawn_connection(
    url: String,
) -> (
    mpsc::UnboundedSender<NetCommand>,
    mpsc::UnboundedReceiver<NetEvent>,
) {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(e) => {
                error!("Failed to start network runtime: {}", e);
                let _ = event_tx.send(NetEvent::Closed);
                return;
            }
        };
        runtime.block_on(connection_task(url, command_rx, event_tx));
    });

    (command_tx, event_rx)
}

/// Owns the socket for its whole life: connect, pump frames both ways, emit
/// `Closed` exactly once on the way out.
async fn connection_task(
    url: String,
    mut commands: mpsc::UnboundedReceiver<NetCommand>,
    events: mpsc::UnboundedSender<NetEvent>,
) {
    let (socket, _) = match connect_async(url.as_str()).await {
        Ok(connection) => connection,
        Err(e) => {
            error!("Failed to connect to {}: {}", url, e);
            let _ = events.send(NetEvent::Closed);
            return;
        }
    };
    info!("Connected to {}", url);
    let _ = events.send(NetEvent::Connected);

    let (mut outgoing, mut incoming) = socket.split();

    loop {
        tokio::select! {
            command = commands.recv() => match command {
                Some(NetCommand::Send(message)) => {
                    let text = match serde_json::to_string(&message) {
                        Ok(text) => text,
                        Err(e) => {
                            warn!("Dropping unencodable message: {}", e);
                            continue;
                        }
                    };
                    if outgoing.send(Message::Text(text.into())).await.is_err() {
                        let _ = events.send(NetEvent::Closed);
                        break;
                    }
                }
                None => {
                    // Game side is gone; close politely and stop.
                    let _ = outgoing.send(Message::Close(None)).await;
                    break;
                }
            },
            frame = incoming.next() => match frame {
                Some(Ok(Message::Text(text))) => {
                    match serde_json::from_str::<ServerMessage>(&text) {
                        Ok(message) => {
                            let _ = events.send(NetEvent::Message(message));
                        }
                        // Best-effort client: unparseable frames are dropped,
                        // never surfaced.
                        Err(e) => debug!("Dropping malformed message: {}", e),
                    }
                }
                Some(Ok(Message::Close(_))) | None => {
                    info!("Connection closed by server");
                    let _ = events.send(NetEvent::Closed);
                    break;
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    warn!("Connection error: {}", e);
                    let _ = events.send(NetEvent::Closed);
                    break;
                }
            },
        }
    }
}

/// Drives the session state machine and owns the world snapshot.
///
/// `poll` is called once per frame from the main loop. It drains whatever the
/// transport has queued, then fires the movement tick if one is due, and
/// never blocks.
pub struct SyncClient {
    state: SessionState,
    world: World,
    commands: mpsc::UnboundedSender<NetCommand>,
    events: mpsc::UnboundedReceiver<NetEvent>,
    /// `None` means a tick is due as soon as the gates allow one.
    last_tick: Option<Instant>,
    game_over: bool,
}

impl SyncClient {
    /// Connects to `url` and prepares to join as `name`. The session id is
    /// generated here, before any network roundtrip.
    pub fn connect(url: &str, name: &str) -> Self {
        let (commands, events) = spawn_connection(url.to_string());
        Self::with_channels(name, commands, events)
    }

    /// Wires a client over existing channels. Tests drive the state machine
    /// through this without a socket.
    pub fn with_channels(
        name: &str,
        commands: mpsc::UnboundedSender<NetCommand>,
        events: mpsc::UnboundedReceiver<NetEvent>,
    ) -> Self {
        SyncClient {
            state: SessionState::Connecting,
            world: World::new(name),
            commands,
            events,
            last_tick: None,
            game_over: false,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// True once the terminal game-over signal has fired.
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// One cooperative step: handle every queued event, then send the
    /// movement tick if the cadence says one is due.
    pub fn poll(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.handle_event(event);
        }
        self.maybe_send_tick();
    }

    fn handle_event(&mut self, event: NetEvent) {
        match event {
            NetEvent::Connected => {
                if self.state != SessionState::Connecting {
                    return;
                }
                info!("Joining as {}", self.world.local.name);
                let init = ClientMessage::InitMessage {
                    player_name: self.world.local.name.clone(),
                    sid: self.world.local.sid.clone(),
                };
                if self.commands.send(NetCommand::Send(init)).is_ok() {
                    self.state = SessionState::Joining;
                }
            }
            NetEvent::Message(message) => self.handle_message(message),
            NetEvent::Closed => {
                if self.state == SessionState::Closed {
                    return;
                }
                // Game-over only fires for an established session; a failed
                // connect dies quietly. Either way the state transition stops
                // the tick cadence for good.
                if self.state != SessionState::Connecting {
                    self.game_over = true;
                    info!("Connection lost, game over");
                }
                self.state = SessionState::Closed;
            }
        }
    }

    fn handle_message(&mut self, message: ServerMessage) {
        match message {
            ServerMessage::InitMessageResponse { orbs, player_data } => {
                if self.world.apply_join(player_data, orbs) && self.state == SessionState::Joining
                {
                    self.state = SessionState::Joined;
                    info!(
                        "Joined with uid {}",
                        self.world.local.uid.as_deref().unwrap_or("?")
                    );
                }
            }
            ServerMessage::TickMessageResponse { orbs, player_data } => {
                // The sid guard inside drops stale responses from a previous
                // session.
                self.world.apply_tick(player_data, orbs);
            }
            ServerMessage::PlayerListMessageResponse(players) => {
                debug!("Roster update: {} players", players.len());
                self.world.replace_players(players);
            }
        }
    }

    /// Sends `{uid, xVector, yVector}` on the 33 ms cadence. Not joined, no
    /// uid, or no pointer input yet: the tick is skipped outright, never
    /// queued. Transmission is fire-and-forget; the next tick self-corrects.
    fn maybe_send_tick(&mut self) {
        if self.state != SessionState::Joined {
            return;
        }
        let uid = match &self.world.local.uid {
            Some(uid) => uid.clone(),
            None => return,
        };
        let (x_vector, y_vector) = match self.world.local.vector {
            Some(vector) => vector,
            None => return,
        };
        if let Some(last) = self.last_tick {
            if last.elapsed() < TICK_INTERVAL {
                return;
            }
        }

        let tick = ClientMessage::TickMessage {
            uid,
            x_vector,
            y_vector,
        };
        let _ = self.commands.send(NetCommand::Send(tick));
        self.last_tick = Some(Instant::now());
    }
}
