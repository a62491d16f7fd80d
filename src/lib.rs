//! # Connect Four Simulator
//!
//! Two automated players take turns dropping pieces on a Connect Four board
//! until one lines up four in a row or the board fills up. Every move is
//! printed to the console.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, win detection, player, state machine
//! - [`ai`] — Agent trait plus random and scripted move policies
//! - [`console`] — Output sink, board rendering, turn pacing
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod console;
pub mod error;
pub mod game;
