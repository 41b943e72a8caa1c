//! Shift Wage Engine
//!
//! This crate computes paid hours and gross wage for work shifts from their
//! start and end times, logged breaks, an hourly wage snapshot and the
//! organization's break policy. It also aggregates shifts into reports and
//! serves both over a small JSON HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
