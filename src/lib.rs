pub mod assets;
pub mod audio;
pub mod collision;
pub mod config;
pub mod constants;
pub mod difficulty;
pub mod entities;
pub mod game;
pub mod rendering;
pub mod session;
pub mod spawner;
pub mod state;
pub mod terminal_io;
pub mod types;
