//! # scaffoldgen
//!
//! **scaffoldgen** writes controller source files and companion
//! route-configuration entries for module-based web services from a small
//! declarative manifest.
//!
//! ## Overview
//!
//! A module is a self-contained packaging unit with its own namespace and
//! resource subtree. Given a module descriptor and an action list,
//! scaffoldgen guards against overwriting an existing controller, appends a
//! route entry per action to the module's route files, and renders the
//! controller plus a test stub from Askama templates.
//!
//! The crate is organized into three modules:
//!
//! - **[`manifest`]** - Input model: module descriptor, action specs,
//!   format tokens and YAML manifest loading
//! - **[`generator`]** - Route-entry emission and template-backed source
//!   generation
//! - **[`cli`]** - The `scaffoldgen` command-line surface
//!
//! ## Example
//!
//! ```rust,ignore
//! use scaffoldgen::{generate_from_manifest, load_manifest};
//!
//! let manifest = load_manifest("scaffold.yaml".as_ref())?;
//! let controller = generate_from_manifest(&manifest)?;
//! println!("scaffolded {controller:?}");
//! ```
//!
//! Generation is single-threaded and strictly linear; every failure aborts
//! the request with a typed [`GenerateError`](generator::GenerateError) and
//! nothing already written is rolled back.

pub mod cli;
pub mod generator;
pub mod manifest;

pub use generator::{
    generate_controller, generate_from_manifest, generate_route_entry, GenerateError, RouteEntry,
};
pub use manifest::{
    load_manifest, ActionSpec, ModuleRef, RouteFormat, ScaffoldManifest, TemplateFormat,
};
