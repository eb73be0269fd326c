//! Client-side world state and server reconciliation.
//!
//! The world is a single owned snapshot: the local player record, the remote
//! roster and the orb set. The sync client is its only writer; the render
//! loop only ever reads it. Roster and orbs are replaced wholesale on every
//! relevant message, so a reader can never observe a half-applied update.

use log::debug;
use rand::{distributions::Alphanumeric, Rng};
use shared::{Orb, PathPoint, PlayerData, RemotePlayer};

const SESSION_TOKEN_LEN: usize = 12;

/// Generates the opaque session token distinguishing this client instance
/// from any earlier or concurrent one. Generated once, before the join
/// handshake, and never regenerated for the lifetime of the process.
pub fn generate_session_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_TOKEN_LEN)
        .map(char::from)
        .collect()
}

/// The controlling player's record. Created empty and populated incrementally
/// as join and tick confirmations arrive; the only locally-written field is
/// the movement vector.
#[derive(Debug, Clone)]
pub struct LocalPlayer {
    pub name: String,
    pub sid: String,
    /// Assigned by the server in the join confirmation.
    pub uid: Option<String>,
    pub loc_x: f32,
    pub loc_y: f32,
    pub radius: f32,
    pub color: String,
    pub score: u32,
    pub path: Vec<PathPoint>,
    /// Current movement input, each component in [-1, 1]. `None` until the
    /// pointer first moves.
    pub vector: Option<(f32, f32)>,
}

impl LocalPlayer {
    pub fn new(name: &str, sid: String) -> Self {
        LocalPlayer {
            name: name.to_string(),
            sid,
            uid: None,
            loc_x: 0.0,
            loc_y: 0.0,
            radius: 0.0,
            color: String::new(),
            score: 0,
            path: Vec::new(),
            vector: None,
        }
    }

    /// Shallow field overwrite from a server confirmation. An absent `path`
    /// keeps the current segment list; the server omits fields it has no
    /// update for.
    fn merge(&mut self, data: PlayerData) {
        self.uid = Some(data.uid);
        self.loc_x = data.loc_x;
        self.loc_y = data.loc_y;
        self.radius = data.radius;
        self.color = data.color;
        self.score = data.score;
        if let Some(path) = data.path {
            self.path = path;
        }
    }
}

/// One leaderboard line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
}

/// Everything the render loop reads.
#[derive(Debug)]
pub struct World {
    pub local: LocalPlayer,
    players: Vec<RemotePlayer>,
    orbs: Vec<Orb>,
}

impl World {
    pub fn new(name: &str) -> Self {
        Self::with_session_id(name, generate_session_id())
    }

    pub fn with_session_id(name: &str, sid: String) -> Self {
        World {
            local: LocalPlayer::new(name, sid),
            players: Vec::new(),
            orbs: Vec::new(),
        }
    }

    /// Applies a join confirmation. Returns false, changing nothing, when the
    /// echoed session id belongs to some other client instance: a delayed
    /// response from before a reload must not hijack this session's identity.
    pub fn apply_join(&mut self, data: PlayerData, orbs: Vec<Orb>) -> bool {
        if data.sid != self.local.sid {
            debug!("Discarding join confirmation for foreign session {}", data.sid);
            return false;
        }
        self.orbs = orbs;
        self.local.merge(data);
        true
    }

    /// Applies a tick confirmation: same session guard, same shallow merge.
    /// The orb set is replaced outright, never patched.
    pub fn apply_tick(&mut self, data: PlayerData, orbs: Vec<Orb>) -> bool {
        if data.sid != self.local.sid {
            debug!("Discarding tick confirmation for foreign session {}", data.sid);
            return false;
        }
        self.local.merge(data);
        self.orbs = orbs;
        true
    }

    /// Replaces the roster wholesale. Entries the server no longer lists are
    /// dropped by absence.
    pub fn replace_players(&mut self, players: Vec<RemotePlayer>) {
        self.players = players;
    }

    pub fn players(&self) -> &[RemotePlayer] {
        &self.players
    }

    pub fn orbs(&self) -> &[Orb] {
        &self.orbs
    }

    /// Roster entries to draw: everyone except an entry carrying our own uid.
    /// Some servers include the requesting player in the broadcast.
    pub fn visible_players(&self) -> Vec<&RemotePlayer> {
        let own_uid = self.local.uid.as_deref();
        self.players
            .iter()
            .filter(|p| Some(p.uid.as_str()) != own_uid)
            .collect()
    }

    /// Roster ordered by descending score, for the leaderboard display.
    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        let mut entries: Vec<LeaderboardEntry> = self
            .players
            .iter()
            .map(|p| LeaderboardEntry {
                name: p.player_name.clone(),
                score: p.score,
            })
            .collect();
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries
    }
}
