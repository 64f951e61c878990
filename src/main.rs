use std::path::Path;
use std::time::{Duration, Instant};

use astro_hopper::asset_gen::generate_placeholder_assets;
use astro_hopper::assets::{self, ASSETS_ROOT, ICON_PATH};
use astro_hopper::backend::{self, FrameClock, KeyboardMouse, Screen, Speaker};
use astro_hopper::render::draw_game;
use astro_hopper::rules::{load_rules, KeyBindings, RULES_PATH};
use astro_hopper::Game;
use macroquad::prelude::*;
use macroquad::window::Conf;

fn window_conf() -> Conf {
    Conf {
        window_title: "Astro Hopper: Grassland Adventure".to_string(),
        window_width: astro_hopper::consts::SCREEN_WIDTH as i32,
        window_height: astro_hopper::consts::SCREEN_HEIGHT as i32,
        window_resizable: false,
        icon: assets::load_window_icon(&Path::new(ASSETS_ROOT).join(ICON_PATH)).ok(),
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let rules = load_rules(RULES_PATH);
    let seed = rules.seed.unwrap_or_else(random_seed_from_time);
    log::info!("Using rules: {:?}, seed: {}", rules, seed);

    if rules.screen_width as i32 != screen_width() as i32
        || rules.screen_height as i32 != screen_height() as i32
    {
        request_new_screen_size(rules.screen_width, rules.screen_height);
    }

    if let Err(e) = generate_placeholder_assets(Path::new(ASSETS_ROOT), &rules, seed, false) {
        log::error!("Failed to generate placeholder assets: {e}");
    }

    let assets = match assets::load_assets(ASSETS_ROOT, &rules).await {
        Ok(a) => a,
        Err(e) => {
            log::error!("Failed to load assets: {e}");
            return;
        }
    };

    let clock = FrameClock;
    let input = KeyboardMouse {
        keys: KeyBindings::from_rules(&rules),
    };
    let mut speaker = Speaker::new(&assets, &rules);
    let mut game = Game::new(&rules, assets.sizes(), seed);
    game.boot(&mut speaker);

    let frame_target = Duration::from_micros(1_000_000 / rules.target_fps.max(1) as u64);

    loop {
        let frame_start = Instant::now();

        if input.quit_requested() {
            log::info!("Quit requested");
            break;
        }

        game.frame(&clock, &input, &mut speaker);

        let mut screen = Screen {
            assets: &assets,
            font_size: rules.font_size,
        };
        draw_game(&game, &mut screen);
        if rules.debug_overlay {
            backend::debug_draw(&game);
        }

        if rules.vsync_enabled {
            let elapsed = frame_start.elapsed();
            if elapsed < frame_target {
                std::thread::sleep(frame_target - elapsed);
            }
        }

        next_frame().await;
    }
}

fn random_seed_from_time() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    now.as_secs() ^ (now.subsec_nanos() as u64).rotate_left(32)
}
