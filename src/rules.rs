use macroquad::input::KeyCode;
use serde::{Deserialize, Serialize};
use std::fs;

pub const RULES_PATH: &str = "assets/config/rules.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    pub seed: Option<u64>,
    pub screen_width: f32,
    pub screen_height: f32,
    pub vsync_enabled: bool,
    pub target_fps: u32,
    pub sfx_enabled: bool,
    pub music_enabled: bool,
    pub intro_music_volume: f32,
    pub music_volume: f32,
    pub jump_sfx_volume: f32,
    pub game_over_sfx_volume: f32,
    pub spawn_interval_ms: u64,
    pub freeze_ms: u64,
    pub key_jump_primary: String,
    pub key_jump_alt: String,
    pub key_quit: String,
    pub font_path: String,
    pub font_size: u16,
    pub debug_overlay: bool,
    pub assets: AssetOptions,
}

/// Knobs for the placeholder asset generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetOptions {
    pub player_width: u32,
    pub player_height: u32,
    pub obstacle_size: u32,
    pub sky_width: u32,
    pub sky_height: u32,
    pub ground_width: u32,
    pub ground_height: u32,
    pub jump_sound_freq: f32,
    pub jump_sound_duration: f32,
    pub game_over_sound_start_freq: f32,
    pub game_over_sound_end_freq: f32,
    pub game_over_sound_duration: f32,
    pub intro_sound_start_freq: f32,
    pub intro_sound_end_freq: f32,
    pub music_sound_start_freq: f32,
    pub music_sound_end_freq: f32,
    pub music_sound_duration: f32,
}

impl Default for AssetOptions {
    fn default() -> Self {
        Self {
            player_width: 48,
            player_height: 64,
            obstacle_size: 40,
            sky_width: 800,
            sky_height: 300,
            ground_width: 800,
            ground_height: 100,
            jump_sound_freq: 880.0,
            jump_sound_duration: 0.15,
            game_over_sound_start_freq: 440.0,
            game_over_sound_end_freq: 110.0,
            game_over_sound_duration: 1.2,
            intro_sound_start_freq: 262.0,
            intro_sound_end_freq: 392.0,
            music_sound_start_freq: 220.0,
            music_sound_end_freq: 440.0,
            music_sound_duration: 3.0,
        }
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            seed: None,
            screen_width: crate::consts::SCREEN_WIDTH,
            screen_height: crate::consts::SCREEN_HEIGHT,
            vsync_enabled: true,
            target_fps: 60,
            sfx_enabled: true,
            music_enabled: true,
            intro_music_volume: 0.5,
            music_volume: 0.2,
            jump_sfx_volume: 0.3,
            game_over_sfx_volume: 0.3,
            spawn_interval_ms: 1500,
            freeze_ms: 2000,
            key_jump_primary: "Space".to_string(),
            key_jump_alt: "Up".to_string(),
            key_quit: "Escape".to_string(),
            font_path: "assets/fonts/public_pixel.ttf".to_string(),
            font_size: 30,
            debug_overlay: false,
            assets: AssetOptions::default(),
        }
    }
}

/// Reads the rules file, falling back to defaults when it is missing or bad.
pub fn load_rules(path: &str) -> GameRules {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("Could not read rules file {path}: {e}. Using defaults.");
            return GameRules::default();
        }
    };
    parse_rules(&text).unwrap_or_else(|e| {
        log::warn!("Failed to parse rules from {path}: {e}. Using defaults.");
        GameRules::default()
    })
}

pub fn parse_rules(text: &str) -> Result<GameRules, String> {
    let mut rules: GameRules = serde_json::from_str(text).map_err(|e| e.to_string())?;
    rules.target_fps = rules.target_fps.max(1);
    rules.spawn_interval_ms = rules.spawn_interval_ms.max(1);
    Ok(rules)
}

pub fn save_rules(path: &str, rules: &GameRules) -> Result<(), String> {
    let text =
        serde_json::to_string_pretty(rules).map_err(|e| format!("Failed to serialize rules: {e}"))?;
    fs::write(path, text).map_err(|e| format!("Failed to write rules file {path}: {e}"))?;
    Ok(())
}

/// Key bindings resolved from the rules' key names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub jump_primary: KeyCode,
    pub jump_alt: Option<KeyCode>,
    pub quit: KeyCode,
}

impl KeyBindings {
    pub fn from_rules(rules: &GameRules) -> Self {
        let jump_primary = parse_key(&rules.key_jump_primary).unwrap_or_else(|| {
            log::warn!(
                "Unknown jump key {:?}, falling back to Space",
                rules.key_jump_primary
            );
            KeyCode::Space
        });
        let quit = parse_key(&rules.key_quit).unwrap_or(KeyCode::Escape);
        Self {
            jump_primary,
            jump_alt: parse_key(&rules.key_jump_alt),
            quit,
        }
    }
}

pub fn parse_key(name: &str) -> Option<KeyCode> {
    let s = name.trim();
    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return match c.to_ascii_uppercase() {
            'A' => Some(KeyCode::A),
            'B' => Some(KeyCode::B),
            'C' => Some(KeyCode::C),
            'D' => Some(KeyCode::D),
            'E' => Some(KeyCode::E),
            'F' => Some(KeyCode::F),
            'G' => Some(KeyCode::G),
            'H' => Some(KeyCode::H),
            'I' => Some(KeyCode::I),
            'J' => Some(KeyCode::J),
            'K' => Some(KeyCode::K),
            'L' => Some(KeyCode::L),
            'M' => Some(KeyCode::M),
            'N' => Some(KeyCode::N),
            'O' => Some(KeyCode::O),
            'P' => Some(KeyCode::P),
            'Q' => Some(KeyCode::Q),
            'R' => Some(KeyCode::R),
            'S' => Some(KeyCode::S),
            'T' => Some(KeyCode::T),
            'U' => Some(KeyCode::U),
            'V' => Some(KeyCode::V),
            'W' => Some(KeyCode::W),
            'X' => Some(KeyCode::X),
            'Y' => Some(KeyCode::Y),
            'Z' => Some(KeyCode::Z),
            _ => None,
        };
    }

    match s.to_ascii_uppercase().as_str() {
        "LEFT" => Some(KeyCode::Left),
        "RIGHT" => Some(KeyCode::Right),
        "UP" => Some(KeyCode::Up),
        "DOWN" => Some(KeyCode::Down),
        "SPACE" | "SPACEBAR" => Some(KeyCode::Space),
        "ENTER" | "RETURN" => Some(KeyCode::Enter),
        "ESC" | "ESCAPE" => Some(KeyCode::Escape),
        _ => None,
    }
}
