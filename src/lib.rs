//! PathRunner library.
//!
//! Gesture-triggered, tick-driven motor paths for a small two-wheeled robot.
//! Exposes the pure-logic modules for integration testing; the host
//! simulation binary wires them to console adapters.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod fsm;
