//! Toolkit-independent game logic: state, persistence and errors.

pub mod error;
pub mod game_state;
pub mod persistence;
