//! Fretcycle — a terminal CAGED chord practice instrument.
//!
//! Renders the five CAGED chord-shape positions for any key on a guitar
//! fretboard and cycles through them with audible strummed playback.

pub mod audio;
pub mod config;
pub mod theory;
pub mod tui;
