use clap::Parser;
use client::input::PointerTracker;
use client::network::SyncClient;
use client::rendering::Renderer;
use log::info;
use macroquad::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Server WebSocket URL
    #[arg(short = 's', long, default_value = shared::DEFAULT_SERVER_URL)]
    server: String,

    /// Display name to join with
    #[arg(short = 'n', long, default_value = "anonymous")]
    name: String,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "orb arena".to_string(),
        window_width: 1280,
        window_height: 720,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    if std::env::var("RUST_LOG").is_err() {
        eprintln!("Set RUST_LOG=info for detailed logging");
    }

    let args = Args::parse();

    info!("Starting client...");
    info!("Connecting to: {}", args.server);
    info!("Joining as: {}", args.name);
    info!("Steer with the mouse, Esc quits");

    let mut sync = SyncClient::connect(&args.server, &args.name);
    let mut tracker = PointerTracker::new();
    let renderer = Renderer::new();

    loop {
        sync.poll();

        tracker.sample(
            mouse_position(),
            (screen_width() / 2.0, screen_height() / 2.0),
            &mut sync.world_mut().local,
        );

        renderer.render(sync.world(), sync.game_over());

        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        next_frame().await;
    }
}
