//! Core logic for a six-digit seven-segment LED clock.
//!
//! Everything in this crate is pure computation over plain values: the
//! GMT timekeeping state machine, calendar arithmetic, the seasonal
//! display offset, segment encoding and the display multiplexer. No
//! peripheral access happens here — the firmware crate adapts these
//! types onto GPIO and the embassy scheduler.
//!
//! The crate is `no_std` on target but builds with `std` under `cargo
//! test`, so the whole tick/render/multiplex pipeline is exercised on
//! the host.
//!
//! # Module Organization
//!
//! - [`calendar`] - leap years, month lengths, day of week
//! - [`clock`] - canonical GMT state and the once-per-second advance
//! - [`timezone`] - timezone-corrected projection for display
//! - [`segment`] - seven-segment digit encoding
//! - [`display`] - six-digit frame buffer and the render pass
//! - [`mux`] - sub-frame multiplexing over the shared segment bus

#![cfg_attr(not(test), no_std)]

pub mod calendar;
pub mod clock;
pub mod display;
pub mod mux;
pub mod segment;
pub mod timezone;
