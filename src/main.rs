use std::env;
use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, Show},
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, size, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use space_shooter::assets::{AssetBundle, SoundBank};
use space_shooter::audio::TerminalAudio;
use space_shooter::config::Config;
use space_shooter::game::{Clock, Game};
use space_shooter::rendering::{OutputTarget, ScreenBuffer, TerminalCanvas};
use space_shooter::terminal_io::{SimulatedInput, TerminalInput};

fn main() -> io::Result<()> {
    let config = Config::from_args(env::args().skip(1));
    if let Err(e) = simple_logging::log_to_file(&config.log_file, config.log_level()) {
        eprintln!("Could not open log file {}: {}", config.log_file.display(), e);
    }
    info!("Starting space-shooter.");

    let rng = match config.seed {
        Some(seed) => {
            info!("Using RNG seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let assets = AssetBundle::load(&config.asset_dir);
    let sounds = SoundBank::load(&config.asset_dir);

    if config.debug {
        info!("Debug mode enabled at {}x{}", config.debug_width, config.debug_height);
        let screen = ScreenBuffer::new(config.debug_width, config.debug_height);
        let canvas = TerminalCanvas::new(config.debug_width, config.debug_height, OutputTarget::ScreenBuffer(screen));
        let audio = TerminalAudio::new(sounds, false);
        let mut game = Game::new(SimulatedInput::demo(), canvas, audio, assets, rng, Clock::frames(), config.max_frames);
        game.run()?;
        info!("Debug run finished.");
        return Ok(());
    }

    let mut stdout = io::stdout();
    info!("Attempting to enable raw mode.");
    enable_raw_mode().map_err(|e| { error!("Failed to enable raw mode: {}", e); e })?;
    execute!(stdout, EnterAlternateScreen, Hide).map_err(|e| { error!("Failed to prepare screen: {}", e); e })?;
    // Terminals without the enhancement protocol just never send releases.
    let keyboard_enhanced = execute!(stdout, PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)).is_ok();

    let result = run_interactive(config, assets, sounds, rng);

    if keyboard_enhanced {
        let _ = execute!(stdout, PopKeyboardEnhancementFlags);
    }
    let _ = execute!(stdout, Show, LeaveAlternateScreen);
    let _ = stdout.flush();
    if let Err(e) = disable_raw_mode() {
        warn!("Failed to disable raw mode: {}", e);
    }

    match &result {
        Ok(()) => info!("Exited cleanly."),
        Err(e) => error!("Game loop failed: {}", e),
    }
    result
}

fn run_interactive(config: Config, assets: AssetBundle, sounds: SoundBank, rng: StdRng) -> io::Result<()> {
    let (width, height) = size().map_err(|e| { error!("Failed to get terminal size: {}", e); e })?;
    info!("Terminal size: {}x{}", width, height);

    let canvas = TerminalCanvas::new(width, height, OutputTarget::Stdout(io::stdout()));
    let audio = TerminalAudio::new(sounds, true);
    let mut game = Game::new(TerminalInput::new(), canvas, audio, assets, rng, Clock::wall(), config.max_frames);
    game.run()?;
    Ok(())
}
