//! Command-line interface module
//!
//! Implements both CLI flows using clap:
//! - (default): interactive prompts, print the desktop entry to stdout
//! - version: print the local version and check the npm registry for updates

pub mod create;
pub mod version;

/// License notice printed at the start of both flows
pub const LICENSE_NOTICE: &str = "dtop  Copyright (C) 2023  Akhil Pillai\n\
This program comes with ABSOLUTELY NO WARRANTY.\n\
This is free software, and you are welcome to redistribute it under certain conditions.";
