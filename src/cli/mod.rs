//! # CLI Module
//!
//! Command-line interface for the scaffolding generator.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Run a scaffold manifest end to end:
//!
//! ```bash
//! scaffoldgen generate --manifest scaffold.yaml
//! ```
//!
//! Options:
//! - `--manifest <FILE>` - Path to the scaffold manifest (required)
//! - `--module-path <DIR>` - Override the module root from the manifest
//!
//! ### `inspect`
//!
//! Preview the files and route entries a manifest would produce without
//! writing anything:
//!
//! ```bash
//! scaffoldgen inspect --manifest scaffold.yaml
//! ```
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! scaffoldgen::cli::run_cli()?;
//! ```

mod commands;


pub use commands::{run_cli, Cli, Commands};
