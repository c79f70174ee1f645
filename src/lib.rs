#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod board;
mod command;
mod common;
mod config;
#[cfg(feature = "std")]
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod ui;

pub use board::*;
pub use command::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use game::*;
pub use grid::{Grid, GridError, Neighbors};
#[cfg(feature = "std")]
pub use logging::{format_record, init_logging, level_from, LOG_ENV};
#[cfg(feature = "std")]
pub use ui::*;
