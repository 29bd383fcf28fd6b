pub mod definitions;
pub mod engine;
pub mod game;
pub mod opponent;
pub mod rules;
pub mod utils;
