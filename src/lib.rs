//! TuneFlow - terminal music discovery.
//!
//! Search a catalog of music videos, collect them into playlists and hand
//! playback to an external player.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod lyrics;
pub mod model;
pub mod view;
