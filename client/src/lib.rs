//! # Game Client Library
//!
//! Client-side implementation for the orb arena: a real-time multiplayer
//! game where circular avatars chase the pointer, consume orbs to grow, and
//! compete on a score leaderboard. The server is authoritative for all game
//! rules; this client captures input, keeps a synchronized world snapshot,
//! and renders it every frame.
//!
//! ## Architecture Overview
//!
//! Three concerns, kept deliberately decoupled so none can block another:
//!
//! ### Input (`input`)
//! Turns the pointer position into a movement vector whose direction is the
//! center-to-pointer angle and whose magnitude follows the protocol's
//! per-quadrant linear ramp. The vector is written onto the local player
//! record on every pointer movement, with no throttling of its own.
//!
//! ### Synchronization (`network` + `game`)
//! A dedicated transport thread owns the WebSocket and exchanges typed
//! messages with the game side over channels. The sync client runs the
//! session state machine (connect, join with a client-generated session id,
//! steady-state ticking at 33 ms) and reconciles inbound state into the
//! world snapshot. Responses targeted at this client echo its session id;
//! anything echoing a foreign id is a stale or misrouted message and is
//! dropped without effect. Rosters and orb sets are replaced wholesale, so
//! no patch-ordering hazards exist. Connection loss is terminal: the tick
//! cadence stops and the game-over signal fires once.
//!
//! ### Rendering (`rendering`)
//! One pass per display frame: clear, recompute the camera translation that
//! pins the local player to the surface center, draw the local avatar with
//! its trailing body segments, the de-duplicated remote roster, the orbs,
//! and the screen-space HUD (score, leaderboard, game-over banner). The
//! renderer only reads the snapshot and tolerates transient staleness.

pub mod game;
pub mod input;
pub mod network;
pub mod rendering;
