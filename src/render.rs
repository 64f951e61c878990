use macroquad::color::Color;
use macroquad::math::{vec2, Vec2};

use crate::actor::Actor;
use crate::game::{Game, Phase, STAND_CENTERS};
use crate::platform::Renderer;
use crate::score::{RoundResult, Standing};
use crate::sprite::Sprite;

const MENU_FILL: Color = Color::from_rgba(0, 153, 153, 255);
const TITLE_DARK: Color = Color::from_rgba(61, 81, 74, 255);
const TITLE_GREEN: Color = Color::from_rgba(16, 183, 128, 255);
const SCORE_GREEN: Color = Color::from_rgba(16, 183, 100, 255);
const PROMPT: Color = Color::from_rgba(224, 224, 224, 255);

/// Which menu the player is looking at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuScreen {
    Title,
    GameOver(RoundResult),
}

impl MenuScreen {
    /// A zero-second round shows the title again.
    pub fn for_game(game: &Game) -> Self {
        match game.scores.last() {
            Some(result) if result.score > 0 => MenuScreen::GameOver(result),
            _ => MenuScreen::Title,
        }
    }
}

pub fn draw_game(game: &Game, r: &mut impl Renderer) {
    match game.phase {
        Phase::Menu => draw_menu(game, r),
        Phase::Playing | Phase::Frozen { .. } => draw_round(game, r),
    }
}

fn draw_round(game: &Game, r: &mut impl Renderer) {
    for layer in game.background.layers() {
        for pos in layer.tile_positions() {
            r.draw_sprite(layer.sprite, pos);
        }
    }

    let center_x = game.screen_width() / 2.0;
    r.draw_text_centered(
        &format!("Score: {}", game.scores.current()),
        vec2(center_x, 50.0),
        SCORE_GREEN,
    );

    if let Some(player) = &game.player {
        draw_actor(player, r);
    }
    for obstacle in &game.obstacles {
        draw_actor(obstacle, r);
    }
}

fn draw_actor(actor: &impl Actor, r: &mut impl Renderer) {
    r.draw_sprite(actor.sprite(), actor.top_left());
}

fn draw_menu(game: &Game, r: &mut impl Renderer) {
    r.clear(MENU_FILL);

    let sizes = game.sizes();
    for (character, center) in STAND_CENTERS {
        let size = sizes.size(Sprite::Stand(character));
        r.draw_sprite(Sprite::Stand(character), center - size / 2.0);
    }

    let x = game.screen_width() / 2.0;
    let at = |y: f32| -> Vec2 { vec2(x, y) };
    match MenuScreen::for_game(game) {
        MenuScreen::Title => {
            r.draw_text_centered("Astro Hopper:", at(40.0), TITLE_DARK);
            r.draw_text_centered("Grassland Adventure", at(80.0), TITLE_GREEN);
        }
        MenuScreen::GameOver(result) => {
            r.draw_text_centered("GAME OVER", at(30.0), TITLE_DARK);
            if result.standing.is_best() {
                r.draw_text_centered(
                    &format!("It's your best score: {} !", result.score),
                    at(90.0),
                    TITLE_GREEN,
                );
                if result.standing == Standing::NewBest {
                    r.draw_text_centered("New record!", at(130.0), SCORE_GREEN);
                }
            } else {
                r.draw_text_centered(
                    &format!("Your best score: {}", result.best),
                    at(70.0),
                    TITLE_GREEN,
                );
                r.draw_text_centered(
                    &format!("Your last score: {}", result.score),
                    at(110.0),
                    TITLE_GREEN,
                );
            }
        }
    }
    r.draw_text_centered("Choose your character", at(320.0), PROMPT);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::testing::{DrawCall, RecordingAudio, RecordingRenderer};
    use crate::rules::GameRules;
    use crate::sprite::{Character, SpriteSizes};

    fn game() -> Game {
        let mut sizes = SpriteSizes::uniform(vec2(40.0, 40.0));
        sizes.set(Sprite::Sky, vec2(300.0, 300.0));
        sizes.set(Sprite::Ground, vec2(800.0, 100.0));
        Game::new(&GameRules::default(), sizes, 3)
    }

    fn finish(game: &mut Game, seconds: u64) {
        let mut audio = RecordingAudio::default();
        game.start_round(Character::Blue, 0, &mut audio);
        game.scores.tick(seconds * 1000);
        game.scores.finish_round();
        game.phase = Phase::Menu;
    }

    #[test]
    fn title_before_first_round() {
        let g = game();
        let mut r = RecordingRenderer::default();
        draw_game(&g, &mut r);
        assert_eq!(r.calls[0], DrawCall::Clear(MENU_FILL));
        assert_eq!(
            r.texts(),
            vec!["Astro Hopper:", "Grassland Adventure", "Choose your character"]
        );
        assert_eq!(r.sprites().len(), 3);
    }

    #[test]
    fn game_over_variants() {
        let mut g = game();
        finish(&mut g, 8);
        let mut r = RecordingRenderer::default();
        draw_game(&g, &mut r);
        assert!(r.texts().contains(&"It's your best score: 8 !".to_string()));
        assert!(r.texts().contains(&"New record!".to_string()));

        finish(&mut g, 8);
        let mut r = RecordingRenderer::default();
        draw_game(&g, &mut r);
        assert!(r.texts().contains(&"It's your best score: 8 !".to_string()));
        assert!(!r.texts().contains(&"New record!".to_string()));

        finish(&mut g, 2);
        let mut r = RecordingRenderer::default();
        draw_game(&g, &mut r);
        let texts = r.texts();
        assert!(texts.contains(&"Your best score: 8".to_string()));
        assert!(texts.contains(&"Your last score: 2".to_string()));
    }

    #[test]
    fn zero_score_round_shows_title() {
        let mut g = game();
        finish(&mut g, 0);
        let mut r = RecordingRenderer::default();
        draw_game(&g, &mut r);
        assert_eq!(r.texts()[0], "Astro Hopper:");
    }

    #[test]
    fn round_draws_tiles_score_and_actors() {
        let mut g = game();
        let mut audio = RecordingAudio::default();
        g.start_round(Character::Pink, 0, &mut audio);
        let mut r = RecordingRenderer::default();
        draw_game(&g, &mut r);

        let sprites = r.sprites();
        let sky = sprites.iter().filter(|(s, _)| *s == Sprite::Sky).count();
        let ground = sprites.iter().filter(|(s, _)| *s == Sprite::Ground).count();
        // ceil(800 / 300) + 1 and ceil(800 / 800) + 1
        assert_eq!(sky, 4);
        assert_eq!(ground, 2);
        assert!(sprites
            .iter()
            .any(|(s, _)| matches!(s, Sprite::Player(Character::Pink, _))));
        assert_eq!(r.texts(), vec!["Score: 0"]);
    }
}
