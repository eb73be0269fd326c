//! Wire protocol shared between the orb-arena client and server.
//!
//! Every frame on the socket is a JSON envelope of the form
//! `{ "_type": "<message kind>", "data": ... }`. The two enums below model
//! that envelope with serde's adjacent tagging so the encoded bytes match the
//! reference server exactly; payload structs rename their fields to the
//! camelCase names used on the wire.

use serde::{Deserialize, Serialize};

/// Cadence of client input transmission, in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 33;

/// Default server endpoint.
pub const DEFAULT_SERVER_URL: &str = "ws://127.0.0.1:8090";

/// Width of the outline ring drawn around every avatar.
pub const AVATAR_OUTLINE_WIDTH: f32 = 3.0;

/// Messages the client sends.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "_type", content = "data")]
pub enum ClientMessage {
    /// Join request, sent once after the player has supplied a name. `sid` is
    /// generated client-side before any network roundtrip.
    InitMessage {
        #[serde(rename = "playerName")]
        player_name: String,
        sid: String,
    },
    /// Periodic movement input while joined.
    TickMessage {
        uid: String,
        #[serde(rename = "xVector")]
        x_vector: f32,
        #[serde(rename = "yVector")]
        y_vector: f32,
    },
}

/// Messages the server sends. Unknown `_type` tags fail to parse and the
/// client drops them.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "_type", content = "data")]
pub enum ServerMessage {
    /// Join confirmation: the full orb set plus the player record this
    /// session now owns. Targets one client; echoes its `sid`.
    InitMessageResponse {
        orbs: Vec<Orb>,
        #[serde(rename = "playerData")]
        player_data: PlayerData,
    },
    /// Tick confirmation: updated player record plus the replacement orb set.
    /// Targets one client; echoes its `sid`.
    TickMessageResponse {
        orbs: Vec<Orb>,
        #[serde(rename = "playerData")]
        player_data: PlayerData,
    },
    /// Full roster broadcast. `data` is a bare array, not an object.
    PlayerListMessageResponse(Vec<RemotePlayer>),
}

/// A stationary collectible.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Orb {
    pub loc_x: f32,
    pub loc_y: f32,
    pub radius: f32,
    pub color: String,
}

/// One trailing body-segment position.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PathPoint {
    pub loc_x: f32,
    pub loc_y: f32,
}

/// Server-authoritative fields for the controlling player, carried by join
/// and tick confirmations together with the session id they target.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerData {
    pub sid: String,
    pub uid: String,
    pub loc_x: f32,
    pub loc_y: f32,
    pub radius: f32,
    pub color: String,
    pub score: u32,
    /// Absent when the server has no segment update; the client then keeps
    /// its current list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<PathPoint>>,
}

/// A roster entry for another player's avatar. The roster is replaced
/// wholesale on every broadcast, so entries carry no identity beyond `uid`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RemotePlayer {
    pub uid: String,
    pub player_name: String,
    pub loc_x: f32,
    pub loc_y: f32,
    pub radius: f32,
    pub color: String,
    pub score: u32,
    #[serde(default)]
    pub path: Vec<PathPoint>,
}
