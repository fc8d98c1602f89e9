use std::path::PathBuf;

use log::warn;

pub const DEFAULT_DEBUG_WIDTH: u16 = 80;
pub const DEFAULT_DEBUG_HEIGHT: u16 = 24;
pub const DEFAULT_ASSET_DIR: &str = "assets";
pub const DEFAULT_LOG_FILE: &str = "space-shooter.log";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub debug: bool,
    pub debug_width: u16,
    pub debug_height: u16,
    pub max_frames: Option<u64>,
    pub seed: Option<u64>,
    pub asset_dir: PathBuf,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            debug: false,
            debug_width: DEFAULT_DEBUG_WIDTH,
            debug_height: DEFAULT_DEBUG_HEIGHT,
            max_frames: None,
            seed: None,
            asset_dir: PathBuf::from(DEFAULT_ASSET_DIR),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    /// Parses arguments (without the program name). Bad input is skipped
    /// with a warning so the game always starts.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let mut config = Config::default();
        let mut i = 0;

        while i < args.len() {
            match args[i].as_str() {
                "--debug" => config.debug = true,
                "--size" => {
                    match (parse_at::<u16>(&args, i + 1), parse_at::<u16>(&args, i + 2)) {
                        (Some(w), Some(h)) if w > 0 && h > 0 => {
                            config.debug_width = w;
                            config.debug_height = h;
                        }
                        _ => warn!("Ignoring malformed --size; expected two positive numbers"),
                    }
                    i += 2;
                }
                "--max-frames" => {
                    config.max_frames = parse_at(&args, i + 1);
                    if config.max_frames.is_none() {
                        warn!("Ignoring malformed --max-frames");
                    }
                    i += 1;
                }
                "--seed" => {
                    config.seed = parse_at(&args, i + 1);
                    if config.seed.is_none() {
                        warn!("Ignoring malformed --seed");
                    }
                    i += 1;
                }
                "--assets" => {
                    match args.get(i + 1) {
                        Some(dir) => config.asset_dir = PathBuf::from(dir),
                        None => warn!("--assets needs a directory"),
                    }
                    i += 1;
                }
                "--log" => {
                    match args.get(i + 1) {
                        Some(file) => config.log_file = PathBuf::from(file),
                        None => warn!("--log needs a file name"),
                    }
                    i += 1;
                }
                other => warn!("Ignoring unknown argument {}", other),
            }
            i += 1;
        }

        config
    }

    pub fn log_level(&self) -> log::LevelFilter {
        if self.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}

fn parse_at<T: std::str::FromStr>(args: &[String], index: usize) -> Option<T> {
    args.get(index).and_then(|s| s.parse().ok())
}
