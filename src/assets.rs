use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use crossterm::style::Color;
use log::{info, warn};

use crate::constants::*;
use crate::entities::SpriteId;

/// A terminal "image": a glyph painted over a rectangle of nominal size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub glyph: char,
    pub color: Color,
    pub width: f64,
    pub height: f64,
}

impl Sprite {
    pub fn solid(color: Color, width: f64, height: f64) -> Self {
        Sprite { glyph: '█', color, width, height }
    }
}

const PLACEHOLDER_GLYPH_BACKGROUND: char = ' ';

struct ImageSpec {
    id: SpriteId,
    file: &'static str,
    color: Color,
    width: f64,
    height: f64,
}

const IMAGES: [ImageSpec; 5] = [
    ImageSpec { id: SpriteId::Player, file: "player.txt", color: Color::Blue, width: PLAYER_WIDTH, height: PLAYER_HEIGHT },
    ImageSpec { id: SpriteId::Enemy, file: "enemy.txt", color: Color::Red, width: ENEMY_WIDTH, height: ENEMY_HEIGHT },
    ImageSpec { id: SpriteId::Bullet, file: "bullet.txt", color: Color::White, width: BULLET_WIDTH, height: BULLET_HEIGHT },
    ImageSpec { id: SpriteId::PowerUp, file: "powerup.txt", color: Color::Green, width: POWERUP_WIDTH, height: POWERUP_HEIGHT },
    ImageSpec { id: SpriteId::Background, file: "background.txt", color: Color::Black, width: SCREEN_WIDTH, height: SCREEN_HEIGHT },
];

const SHIELD_COLOR: Color = Color::Green;

/// Image handles for every sprite the game draws.
#[derive(Clone, Debug)]
pub struct AssetBundle {
    sprites: HashMap<SpriteId, Sprite>,
    pub placeholders: bool,
}

impl AssetBundle {
    /// Loads every image from `dir`. Any failure swaps the whole set for
    /// solid placeholders and logs one warning.
    pub fn load(dir: &Path) -> Self {
        match load_sprites(dir) {
            Ok(sprites) => {
                info!("Loaded {} images from {}", sprites.len(), dir.display());
                AssetBundle::from_sprites(sprites, false)
            }
            Err(e) => {
                warn!("Could not load images from {} ({}); using placeholders", dir.display(), e);
                AssetBundle::placeholders()
            }
        }
    }

    pub fn placeholders() -> Self {
        let sprites = IMAGES
            .iter()
            .map(|spec| {
                let mut sprite = Sprite::solid(spec.color, spec.width, spec.height);
                if spec.id == SpriteId::Background {
                    sprite.glyph = PLACEHOLDER_GLYPH_BACKGROUND;
                }
                (spec.id, sprite)
            })
            .collect();
        AssetBundle::from_sprites(sprites, true)
    }

    fn from_sprites(mut sprites: HashMap<SpriteId, Sprite>, placeholders: bool) -> Self {
        if let Some(player) = sprites.get(&SpriteId::Player).copied() {
            sprites.insert(SpriteId::ShieldedPlayer, Sprite { color: SHIELD_COLOR, ..player });
        }
        AssetBundle { sprites, placeholders }
    }

    pub fn sprite(&self, id: SpriteId) -> Sprite {
        self.sprites
            .get(&id)
            .copied()
            .unwrap_or(Sprite::solid(Color::Magenta, 1.0, 1.0))
    }
}

fn load_sprites(dir: &Path) -> io::Result<HashMap<SpriteId, Sprite>> {
    let mut sprites = HashMap::new();
    for spec in &IMAGES {
        let text = fs::read_to_string(dir.join(spec.file))?;
        let glyph = text
            .chars()
            .find(|c| !c.is_whitespace())
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, format!("{} is empty", spec.file)))?;
        let color = text.lines().nth(1).and_then(parse_color).unwrap_or(spec.color);
        sprites.insert(spec.id, Sprite { glyph, color, width: spec.width, height: spec.height });
    }
    Ok(sprites)
}

fn parse_color(name: &str) -> Option<Color> {
    match name.trim().to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "white" => Some(Color::White),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "blue" => Some(Color::Blue),
        "yellow" => Some(Color::Yellow),
        "cyan" => Some(Color::Cyan),
        "magenta" => Some(Color::Magenta),
        "grey" | "gray" => Some(Color::Grey),
        _ => None,
    }
}

// --- Sounds ---
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sound {
    Loaded,
    Silent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SoundBank {
    pub shoot: Sound,
    pub explosion: Sound,
    pub powerup: Sound,
}

impl SoundBank {
    pub fn silent() -> Self {
        SoundBank { shoot: Sound::Silent, explosion: Sound::Silent, powerup: Sound::Silent }
    }

    /// Checks each sound file in `dir`. Any failure silences all three cues
    /// and logs one warning.
    pub fn load(dir: &Path) -> Self {
        let result = ["shoot.wav", "explosion.wav", "powerup.wav"]
            .iter()
            .try_for_each(|file| check_wav(&dir.join(file)));
        match result {
            Ok(()) => SoundBank { shoot: Sound::Loaded, explosion: Sound::Loaded, powerup: Sound::Loaded },
            Err(e) => {
                warn!("Could not load sounds from {} ({}); playing silently", dir.display(), e);
                SoundBank::silent()
            }
        }
    }
}

fn check_wav(path: &Path) -> io::Result<()> {
    let bytes = fs::read(path)?;
    if bytes.starts_with(b"RIFF") {
        Ok(())
    } else {
        Err(io::Error::new(io::ErrorKind::InvalidData, format!("{} is not a RIFF file", path.display())))
    }
}
