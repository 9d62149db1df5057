#![cfg_attr(not(feature = "std"), no_std)]

mod code;
mod common;
mod config;
mod game;
mod options;
#[cfg(feature = "std")]
pub mod input;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
#[cfg(feature = "std")]
pub mod session;
#[cfg(feature = "std")]
mod ui;

pub use code::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use options::*;
#[cfg(feature = "std")]
pub use input::{LineInput, LineSource};
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level, LOG_ENV};
#[cfg(feature = "std")]
pub use ui::*;
