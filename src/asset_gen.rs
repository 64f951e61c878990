//! Placeholder art and sound.
//!
//! Writes a solid or gradient PNG for every sprite and a sine-tone WAV for
//! every sound cue, so the game runs before any real assets are dropped in.

use image::{ImageBuffer, Rgba};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::PI;
use std::fs;
use std::path::Path;

use crate::assets::{sound_stem, sprite_path, ICON_PATH};
use crate::obstacle::ObstacleKind;
use crate::platform::SoundId;
use crate::rules::{AssetOptions, GameRules};
use crate::sprite::{Character, PlayerFrame, Sprite};

const SAMPLE_RATE: u32 = 44_100;

/// Writes every placeholder under `root`. Existing files are kept unless
/// `overwrite` is set. Returns how many files were written.
pub fn generate_placeholder_assets(
    root: &Path,
    rules: &GameRules,
    seed: u64,
    overwrite: bool,
) -> Result<usize, String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let opts = &rules.assets;
    let mut written = 0;

    for sprite in Sprite::all() {
        let path = root.join(sprite_path(sprite));
        // Roll the colour even when skipping so output is stable per seed.
        let color = random_color(&mut rng, base_color(sprite), 30);
        if path.exists() && !overwrite {
            continue;
        }
        ensure_parent(&path)?;
        let (w, h) = sprite_dimensions(sprite, opts);
        match sprite {
            Sprite::Sky => save_vertical_gradient(&path, w, h, [90, 170, 230, 255], color)?,
            Sprite::Ground => save_vertical_gradient(&path, w, h, color, [70, 45, 20, 255])?,
            _ => save_solid_sprite(&path, w, h, color)?,
        }
        written += 1;
    }

    let icon = root.join(ICON_PATH);
    let icon_color = random_color(&mut rng, [60, 160, 255], 30);
    if !icon.exists() || overwrite {
        ensure_parent(&icon)?;
        save_vertical_gradient(&icon, 64, 64, icon_color, [40, 150, 60, 255])?;
        written += 1;
    }

    for id in SoundId::ALL {
        let stem = sound_stem(id);
        let path = root.join("audio").join(format!("{stem}.wav"));
        let has_ogg = root.join("audio").join(format!("{stem}.ogg")).exists();
        if (path.exists() || has_ogg) && !overwrite {
            continue;
        }
        ensure_parent(&path)?;
        write_sound(&path, id, opts)?;
        written += 1;
    }

    if written > 0 {
        log::info!("Generated {written} placeholder assets under {}", root.display());
    }
    Ok(written)
}

fn sprite_dimensions(sprite: Sprite, opts: &AssetOptions) -> (u32, u32) {
    let player = (opts.player_width.max(4), opts.player_height.max(4));
    let obstacle = opts.obstacle_size.max(4);
    match sprite {
        Sprite::Sky => (opts.sky_width.max(16), opts.sky_height.max(16)),
        Sprite::Ground => (opts.ground_width.max(16), opts.ground_height.max(16)),
        Sprite::Stand(_) | Sprite::Player(..) => player,
        Sprite::Obstacle(ObstacleKind::Flyer, _) => (obstacle, obstacle * 3 / 4),
        Sprite::Obstacle(ObstacleKind::Crawler, _) => (obstacle, obstacle * 3 / 4),
        Sprite::Obstacle(..) => (obstacle, obstacle),
    }
}

fn base_color(sprite: Sprite) -> [u8; 3] {
    let character = |c: Character| match c {
        Character::Blue => [60, 160, 255],
        Character::Pink => [255, 120, 200],
        Character::Yellow => [240, 220, 60],
    };
    match sprite {
        Sprite::Sky => [170, 220, 250],
        Sprite::Ground => [90, 170, 60],
        Sprite::Stand(c) | Sprite::Player(c, PlayerFrame::Walk(_)) => character(c),
        Sprite::Player(c, PlayerFrame::Jump) => {
            let [r, g, b] = character(c);
            [r.saturating_add(40), g.saturating_add(40), b.saturating_add(40)]
        }
        Sprite::Player(_, PlayerFrame::Hurt) => [220, 50, 50],
        Sprite::Obstacle(ObstacleKind::Flyer, _) => [250, 200, 20],
        Sprite::Obstacle(ObstacleKind::Crawler, _) => [130, 130, 130],
        Sprite::Obstacle(ObstacleKind::HopFlyer, _) => [200, 30, 30],
        Sprite::Obstacle(ObstacleKind::Hopper, _) => [40, 150, 60],
    }
}

fn ensure_parent(path: &Path) -> Result<(), String> {
    match path.parent() {
        Some(dir) => fs::create_dir_all(dir)
            .map_err(|e| format!("Failed to create directory {}: {e}", dir.display())),
        None => Ok(()),
    }
}

fn save_solid_sprite(path: &Path, width: u32, height: u32, color: [u8; 4]) -> Result<(), String> {
    let img: ImageBuffer<Rgba<u8>, Vec<u8>> =
        ImageBuffer::from_fn(width, height, |_x, _y| Rgba(color));
    img.save(path).map_err(to_string)
}

fn save_vertical_gradient(
    path: &Path,
    width: u32,
    height: u32,
    top_color: [u8; 4],
    bottom_color: [u8; 4],
) -> Result<(), String> {
    let img: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::from_fn(width, height, |_x, y| {
        let t = y as f32 / (height.saturating_sub(1).max(1) as f32);
        let lerp = |a: u8, b: u8| -> u8 {
            ((a as f32 * (1.0 - t)) + (b as f32 * t)).round().clamp(0.0, 255.0) as u8
        };
        Rgba([
            lerp(top_color[0], bottom_color[0]),
            lerp(top_color[1], bottom_color[1]),
            lerp(top_color[2], bottom_color[2]),
            lerp(top_color[3], bottom_color[3]),
        ])
    });
    img.save(path).map_err(to_string)
}

fn random_color(rng: &mut StdRng, base: [u8; 3], variance: u8) -> [u8; 4] {
    let mut out = [0u8; 4];
    for i in 0..3 {
        let offset: i16 = rng.gen_range(-(variance as i16)..=(variance as i16));
        out[i] = (base[i] as i16 + offset).clamp(0, 255) as u8;
    }
    out[3] = 255;
    out
}

fn to_string<E: std::fmt::Display>(e: E) -> String {
    e.to_string()
}

fn write_sound(path: &Path, id: SoundId, opts: &AssetOptions) -> Result<(), String> {
    match id {
        SoundId::Jump => write_tone(path, opts.jump_sound_freq, opts.jump_sound_duration, 0.6),
        SoundId::GameOver => write_tone_glissando(
            path,
            opts.game_over_sound_start_freq,
            opts.game_over_sound_end_freq,
            opts.game_over_sound_duration,
            0.6,
        ),
        SoundId::Intro => write_tone_glissando(
            path,
            opts.intro_sound_start_freq,
            opts.intro_sound_end_freq,
            opts.music_sound_duration,
            0.3,
        ),
        SoundId::Background => write_tone_glissando(
            path,
            opts.music_sound_start_freq,
            opts.music_sound_end_freq,
            opts.music_sound_duration,
            0.3,
        ),
    }
}

fn write_tone(path: &Path, freq_hz: f32, duration_s: f32, volume: f32) -> Result<(), String> {
    write_tone_glissando(path, freq_hz, freq_hz, duration_s, volume)
}

fn write_tone_glissando(
    path: &Path,
    start_freq: f32,
    end_freq: f32,
    duration_s: f32,
    volume: f32,
) -> Result<(), String> {
    let duration_s = duration_s.max(0.01);
    let total_samples = (duration_s * SAMPLE_RATE as f32) as u32;

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec).map_err(to_string)?;

    // Integrate the frequency so the sweep has no phase jumps.
    let mut phase = 0.0f32;
    for n in 0..total_samples {
        let t = n as f32 / SAMPLE_RATE as f32;
        let freq = start_freq + (end_freq - start_freq) * (t / duration_s);
        phase += 2.0 * PI * freq / SAMPLE_RATE as f32;
        let sample = (volume * i16::MAX as f32 * phase.sin()) as i16;
        writer.write_sample(sample).map_err(to_string)?;
    }

    writer.finalize().map_err(to_string)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "astro_hopper_{name}_{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn writes_every_sprite_and_sound() {
        let dir = scratch_dir("all");
        let rules = GameRules::default();
        let written = generate_placeholder_assets(&dir, &rules, 9, false).unwrap();
        assert_eq!(written, Sprite::all().len() + SoundId::ALL.len() + 1);

        let sky = image::image_dimensions(dir.join(sprite_path(Sprite::Sky))).unwrap();
        assert_eq!(sky, (800, 300));
        let walk = dir.join(sprite_path(Sprite::Player(Character::Blue, PlayerFrame::Walk(0))));
        assert_eq!(image::image_dimensions(walk).unwrap(), (48, 64));

        let icon = crate::assets::load_window_icon(&dir.join(ICON_PATH)).unwrap();
        // Opaque top-left pixel in every size.
        assert_eq!(icon.small[3], 255);
        assert_eq!(icon.big[3], 255);

        let reader = hound::WavReader::open(dir.join("audio/jump.wav")).unwrap();
        assert_eq!(reader.spec().sample_rate, SAMPLE_RATE);
        assert!(reader.duration() > 0);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn keeps_existing_files_unless_overwriting() {
        let dir = scratch_dir("keep");
        let rules = GameRules::default();
        generate_placeholder_assets(&dir, &rules, 1, false).unwrap();
        assert_eq!(generate_placeholder_assets(&dir, &rules, 1, false).unwrap(), 0);
        assert!(generate_placeholder_assets(&dir, &rules, 1, true).unwrap() > 0);
        let _ = fs::remove_dir_all(&dir);
    }
}
