//! Frame drawing: camera-relative world view plus the screen-space HUD.

use crate::game::World;
use macroquad::prelude::*;
use shared::{PathPoint, AVATAR_OUTLINE_WIDTH};

/// Outline ring shared by every avatar (the classic green).
const OUTLINE_COLOR: Color = Color::new(0.0, 1.0, 0.0, 1.0);
const BACKGROUND: Color = WHITE;
const HUD_COLOR: Color = DARKGRAY;

/// Screen-space translation that puts the local player at the geometric
/// center of the surface. Exact follow: no smoothing, no zoom.
pub fn camera_offset(player: (f32, f32), surface: (f32, f32)) -> (f32, f32) {
    (player.0 - surface.0 / 2.0, player.1 - surface.1 / 2.0)
}

/// Maps the server's CSS-style color strings onto render colors. The server
/// owns color assignment and the client never validates it; anything
/// unrecognized falls back to gray.
pub fn parse_color(value: &str) -> Color {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return Color::from_rgba(r, g, b, 255);
            }
        }
    } else if let Some(body) = value.strip_prefix("rgb(").and_then(|v| v.strip_suffix(')')) {
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() == 3 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                parts[0].parse::<u8>(),
                parts[1].parse::<u8>(),
                parts[2].parse::<u8>(),
            ) {
                return Color::from_rgba(r, g, b, 255);
            }
        }
    }
    GRAY
}

#[derive(Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Renderer
    }

    /// Draws one frame in fixed order: clear, camera, local player, remote
    /// players, orbs, HUD. Reads the world snapshot as-is; a stale value just
    /// means the previous server state for one more frame.
    pub fn render(&self, world: &World, game_over: bool) {
        clear_background(BACKGROUND);

        let camera = camera_offset(
            (world.local.loc_x, world.local.loc_y),
            (screen_width(), screen_height()),
        );

        self.draw_avatar(
            camera,
            (world.local.loc_x, world.local.loc_y),
            world.local.radius,
            &world.local.color,
            &world.local.path,
        );

        for player in world.visible_players() {
            self.draw_avatar(
                camera,
                (player.loc_x, player.loc_y),
                player.radius,
                &player.color,
                &player.path,
            );
        }

        for orb in world.orbs() {
            draw_circle(
                orb.loc_x - camera.0,
                orb.loc_y - camera.1,
                orb.radius,
                parse_color(&orb.color),
            );
        }

        self.draw_hud(world, game_over);
    }

    /// Filled circle with the outline ring, then the trailing body segments
    /// at half radius. An empty segment list is simply nothing to draw.
    fn draw_avatar(
        &self,
        camera: (f32, f32),
        position: (f32, f32),
        radius: f32,
        color: &str,
        path: &[PathPoint],
    ) {
        let fill = parse_color(color);
        let (x, y) = (position.0 - camera.0, position.1 - camera.1);
        draw_circle(x, y, radius, fill);
        draw_circle_lines(x, y, radius, AVATAR_OUTLINE_WIDTH, OUTLINE_COLOR);

        for point in path {
            let (px, py) = (point.loc_x - camera.0, point.loc_y - camera.1);
            draw_circle(px, py, radius / 2.0, fill);
            draw_circle_lines(px, py, radius / 2.0, AVATAR_OUTLINE_WIDTH, OUTLINE_COLOR);
        }
    }

    /// Screen-space overlays: score, leaderboard, game-over banner.
    fn draw_hud(&self, world: &World, game_over: bool) {
        draw_text(
            &format!("Score: {}", world.local.score),
            16.0,
            28.0,
            24.0,
            HUD_COLOR,
        );

        let mut y = 28.0;
        for entry in world.leaderboard() {
            draw_text(
                &format!("{}: {}", entry.name, entry.score),
                screen_width() - 220.0,
                y,
                20.0,
                HUD_COLOR,
            );
            y += 22.0;
        }

        if game_over {
            let text = "GAME OVER";
            let size = measure_text(text, None, 48, 1.0);
            draw_text(
                text,
                (screen_width() - size.width) / 2.0,
                screen_height() / 2.0,
                48.0,
                RED,
            );
        }
    }
}
