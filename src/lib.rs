//! # Connect Four Rules
//!
//! Rules engine for a Connect Four style game: a fixed-size grid with
//! column gravity and four-direction win detection after every drop.
//!
//! ## Modules
//!
//! - [`game`] — Grid, players, rule engine and board display collaborators
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
