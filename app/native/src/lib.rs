//! Tessera - master/stack tile layout engine for desktop window managers.
//!
//! The library holds the layout engine, its configuration and the CLI. The
//! engine drives any windowing backend implementing [`tiling::Platform`];
//! [`tiling::SimulatedPlatform`] keeps everything in memory.

pub mod cli;
pub mod config;
pub mod error;
pub mod schema;
pub mod tiling;
