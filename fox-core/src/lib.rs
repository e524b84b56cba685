pub mod calendar;
pub mod config;
pub mod event;
pub mod game;
pub mod player;
pub mod screens;
pub mod tools;
pub mod universe;

pub use event::{Command, CommandQueue};
pub use game::{Game, GameState, Session};
pub use player::Player;
pub use universe::Universe;
