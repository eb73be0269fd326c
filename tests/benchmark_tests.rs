//! Performance benchmarks for the per-frame hot paths

use assert_approx_eq::assert_approx_eq;
use client::game::World;
use client::input::movement_vector;
use shared::{Orb, PathPoint, PlayerData, RemotePlayer, ServerMessage};
use std::time::Instant;

/// Benchmarks the pointer-to-vector conversion, which runs on every pointer
/// movement with no throttling.
#[test]
fn benchmark_movement_vector() {
    let center = (640.0, 360.0);
    let iterations = 100_000;
    let start = Instant::now();

    let mut sink = (0.0f32, 0.0f32);
    for i in 0..iterations {
        let pointer = (center.0 + (i % 500) as f32, center.1 + (i % 300) as f32);
        sink = movement_vector(pointer, center);
    }

    let duration = start.elapsed();
    println!(
        "Movement vector: {} iterations in {:?} ({:.2} ns/iter)",
        iterations,
        duration,
        duration.as_nanos() as f64 / iterations as f64
    );

    // Keep the result observable so the loop cannot be optimized away.
    assert!(sink.0.abs() <= 1.0 && sink.1.abs() <= 1.0);
    assert!(duration.as_millis() < 100);
}

/// Benchmarks a full reconciliation step: roster replacement followed by a
/// tick merge with a wholesale orb replacement.
#[test]
fn benchmark_world_reconciliation() {
    let mut world = World::with_session_id("Ada", "abc123".to_string());

    let roster: Vec<RemotePlayer> = (0..500)
        .map(|i| RemotePlayer {
            uid: format!("u{}", i),
            player_name: format!("player-{}", i),
            loc_x: i as f32,
            loc_y: i as f32,
            radius: 10.0,
            color: "rgb(1,2,3)".to_string(),
            score: i,
            path: vec![PathPoint {
                loc_x: i as f32 - 5.0,
                loc_y: i as f32,
            }],
        })
        .collect();

    let orbs: Vec<Orb> = (0..500)
        .map(|i| Orb {
            loc_x: i as f32,
            loc_y: -(i as f32),
            radius: 5.0,
            color: "#aabbcc".to_string(),
        })
        .collect();

    let iterations = 1_000;
    let start = Instant::now();

    for _ in 0..iterations {
        world.replace_players(roster.clone());
        let applied = world.apply_tick(
            PlayerData {
                sid: "abc123".to_string(),
                uid: "u1".to_string(),
                loc_x: 1.0,
                loc_y: 2.0,
                radius: 10.0,
                color: "red".to_string(),
                score: 3,
                path: None,
            },
            orbs.clone(),
        );
        assert!(applied);
    }

    let duration = start.elapsed();
    println!(
        "World reconciliation: {} iterations in {:?} ({:.2} us/iter)",
        iterations,
        duration,
        duration.as_micros() as f64 / iterations as f64
    );

    assert_eq!(world.players().len(), 500);
    assert_eq!(world.orbs().len(), 500);
    assert!(duration.as_millis() < 2000);
}

/// Benchmarks decoding a steady-state tick confirmation carrying a large
/// orb set, the most frequent inbound message.
#[test]
fn benchmark_message_decode() {
    let message = ServerMessage::TickMessageResponse {
        orbs: (0..200)
            .map(|i| Orb {
                loc_x: i as f32,
                loc_y: i as f32 * 2.0,
                radius: 5.0,
                color: "rgb(10,20,30)".to_string(),
            })
            .collect(),
        player_data: PlayerData {
            sid: "abc123".to_string(),
            uid: "u1".to_string(),
            loc_x: 0.5,
            loc_y: 0.25,
            radius: 10.0,
            color: "red".to_string(),
            score: 7,
            path: Some(vec![PathPoint {
                loc_x: 0.0,
                loc_y: 0.0,
            }]),
        },
    };
    let encoded = serde_json::to_string(&message).unwrap();

    let iterations = 1_000;
    let start = Instant::now();

    for _ in 0..iterations {
        let decoded: ServerMessage = serde_json::from_str(&encoded).unwrap();
        match decoded {
            ServerMessage::TickMessageResponse { orbs, player_data } => {
                assert_eq!(orbs.len(), 200);
                assert_approx_eq!(player_data.loc_x, 0.5);
            }
            _ => panic!("Wrong message kind after decode"),
        }
    }

    let duration = start.elapsed();
    println!(
        "Message decode: {} iterations in {:?} ({:.2} us/iter)",
        iterations,
        duration,
        duration.as_micros() as f64 / iterations as f64
    );

    assert!(duration.as_millis() < 2000);
}

/// Benchmarks the per-frame roster filter that hides the server's echo of
/// the local player.
#[test]
fn benchmark_visible_players_filter() {
    let mut world = World::with_session_id("Ada", "abc123".to_string());
    world.apply_join(
        PlayerData {
            sid: "abc123".to_string(),
            uid: "u250".to_string(),
            loc_x: 0.0,
            loc_y: 0.0,
            radius: 10.0,
            color: "red".to_string(),
            score: 0,
            path: None,
        },
        vec![],
    );
    world.replace_players(
        (0..500)
            .map(|i| RemotePlayer {
                uid: format!("u{}", i),
                player_name: format!("player-{}", i),
                loc_x: 0.0,
                loc_y: 0.0,
                radius: 10.0,
                color: "blue".to_string(),
                score: i,
                path: Vec::new(),
            })
            .collect(),
    );

    let iterations = 10_000;
    let start = Instant::now();

    for _ in 0..iterations {
        let visible = world.visible_players();
        assert_eq!(visible.len(), 499);
    }

    let duration = start.elapsed();
    println!(
        "Visible-player filter: {} iterations in {:?} ({:.2} us/iter)",
        iterations,
        duration,
        duration.as_micros() as f64 / iterations as f64
    );

    assert!(duration.as_millis() < 1000);
}
