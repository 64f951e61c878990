use image::imageops::FilterType;
use image::DynamicImage;
use macroquad::audio::{load_sound, Sound};
use macroquad::miniquad::conf::Icon;
use macroquad::prelude::*;
use std::collections::HashMap;
use std::path::Path;

use crate::obstacle::ObstacleKind;
use crate::platform::SoundId;
use crate::rules::GameRules;
use crate::sprite::{PlayerFrame, Sprite, SpriteSizes};

pub const ASSETS_ROOT: &str = "assets";
pub const ICON_PATH: &str = "graphics/icon/icon.png";

/// Everything loaded from disk: one texture per sprite, one sound per cue.
pub struct Assets {
    textures: HashMap<Sprite, Texture2D>,
    sounds: HashMap<SoundId, Sound>,
    pub font: Option<Font>,
}

impl Assets {
    pub fn texture(&self, sprite: Sprite) -> Option<&Texture2D> {
        self.textures.get(&sprite)
    }

    pub fn sound(&self, id: SoundId) -> Option<&Sound> {
        self.sounds.get(&id)
    }

    pub fn sizes(&self) -> SpriteSizes {
        SpriteSizes::measure(|sprite| {
            self.texture(sprite)
                .map(|t| vec2(t.width(), t.height()))
                .unwrap_or(Vec2::ZERO)
        })
    }
}

/// Path of a sprite's image, relative to the assets root.
pub fn sprite_path(sprite: Sprite) -> String {
    match sprite {
        Sprite::Sky => "graphics/background/sky.png".to_string(),
        Sprite::Ground => "graphics/background/ground.png".to_string(),
        Sprite::Stand(c) => format!("graphics/player/{0}_alien/{0}_stand.png", c.name()),
        Sprite::Player(c, frame) => {
            let suffix = match frame {
                PlayerFrame::Walk(i) => format!("walk{}", i + 1),
                PlayerFrame::Jump => "jump".to_string(),
                PlayerFrame::Hurt => "hurt".to_string(),
            };
            format!("graphics/player/{0}_alien/{0}_{1}.png", c.name(), suffix)
        }
        Sprite::Obstacle(ObstacleKind::HopFlyer, 2) => "graphics/enemy/ladybug_fly.png".to_string(),
        Sprite::Obstacle(kind, frame) => {
            format!("graphics/enemy/{}{}.png", kind.name(), frame + 1)
        }
    }
}

/// File stem of a sound cue under `audio/`.
pub fn sound_stem(id: SoundId) -> &'static str {
    match id {
        SoundId::Intro => "opening_music",
        SoundId::Background => "background_music",
        SoundId::Jump => "jump",
        SoundId::GameOver => "game_over",
    }
}

/// Decodes the window icon and scales it to the three sizes the window wants.
/// Runs before the window exists, so it reads the file synchronously.
pub fn load_window_icon(path: &Path) -> Result<Icon, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to load icon {}: {e}", path.display()))?;
    let mut icon = Icon {
        small: [0; 16 * 16 * 4],
        medium: [0; 32 * 32 * 4],
        big: [0; 64 * 64 * 4],
    };
    scale_into(&img, 16, &mut icon.small);
    scale_into(&img, 32, &mut icon.medium);
    scale_into(&img, 64, &mut icon.big);
    Ok(icon)
}

fn scale_into(img: &DynamicImage, side: u32, out: &mut [u8]) {
    let scaled = img.resize_exact(side, side, FilterType::Triangle).to_rgba8();
    out.copy_from_slice(scaled.as_raw());
}

/// Loads every texture and sound. A missing file is fatal for the caller.
pub async fn load_assets(root: &str, rules: &GameRules) -> Result<Assets, String> {
    let mut textures = HashMap::new();
    for sprite in Sprite::all() {
        let path = format!("{root}/{}", sprite_path(sprite));
        let texture = load_texture(&path)
            .await
            .map_err(|e| format!("Failed to load texture {path}: {e:?}"))?;
        texture.set_filter(FilterMode::Nearest);
        textures.insert(sprite, texture);
    }

    let mut sounds = HashMap::new();
    for id in SoundId::ALL {
        let sound = load_first(root, sound_stem(id)).await?;
        sounds.insert(id, sound);
    }

    let font = if Path::new(&rules.font_path).is_file() {
        match load_ttf_font(&rules.font_path).await {
            Ok(font) => Some(font),
            Err(e) => {
                log::warn!("Failed to load font {}: {e:?}. Using the built-in font.", rules.font_path);
                None
            }
        }
    } else {
        None
    };

    log::info!(
        "Loaded {} textures and {} sounds from {root}",
        textures.len(),
        sounds.len()
    );
    Ok(Assets {
        textures,
        sounds,
        font,
    })
}

async fn load_first(root: &str, stem: &str) -> Result<Sound, String> {
    let candidates = [
        format!("{root}/audio/{stem}.ogg"),
        format!("{root}/audio/{stem}.wav"),
    ];
    for path in &candidates {
        if !Path::new(path).is_file() {
            continue;
        }
        match load_sound(path).await {
            Ok(s) => return Ok(s),
            Err(e) => log::warn!("Failed to load sound {path}: {e:?}"),
        }
    }
    Err(format!("No usable sound for {stem} under {root}/audio"))
}
