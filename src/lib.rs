#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod ai;
mod arsenal;
mod attack;
mod bitgrid;
mod common;
mod config;
mod fleet;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod player;
mod player_human;
mod player_machine;
pub mod prelude;
#[cfg(feature = "std")]
mod render;
mod session;
#[cfg(feature = "std")]
mod stats;
mod tracking;
mod vessel;

pub use ai::*;
pub use arsenal::*;
pub use attack::*;
pub use bitgrid::{BitGrid, BitGridError};
pub use common::*;
pub use config::*;
pub use fleet::*;
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
pub use player_human::*;
pub use player_machine::*;
#[cfg(feature = "std")]
pub use render::*;
pub use session::*;
#[cfg(feature = "std")]
pub use stats::*;
pub use tracking::*;
pub use vessel::*;
