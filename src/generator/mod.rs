//! # Generator Module
//!
//! Scaffolds a controller and its routing configuration into a target
//! module from a declarative action list.
//!
//! ## Overview
//!
//! One generation request produces:
//! - **Controller source** at `<module>/Controller/<Name>Controller.rs`
//! - **Test stub** at `<module>/Tests/Controller/<Name>ControllerTest.rs`
//! - **Route entries**, one per action, appended to
//!   `<module>/Resources/config/routing/<Name>.yml`
//! - **Aggregate entry** appended to `<module>/Resources/config/routing.yml`
//!   that includes the controller's route file under an `api_` prefix
//!
//! Control flow is strictly linear: the existence guard runs first, then
//! route entries are written per action, then the two sources are rendered
//! from Askama templates. Every failure aborts the request immediately;
//! artifacts already written for earlier actions stay on disk.
//!
//! ## Route formats
//!
//! Only the `yml` syntax is written today. `annotation` produces no route
//! files at all: the controller template declares each route in-source.
//! Every other token fails with [`GenerateError::UnsupportedFormat`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use scaffoldgen::generator::generate_controller;
//! use scaffoldgen::manifest::{ModuleRef, RouteFormat, TemplateFormat};
//!
//! let module = ModuleRef {
//!     name: "ShopApi".into(),
//!     namespace: "shop_api".into(),
//!     path: "./shop_api".into(),
//! };
//! generate_controller(
//!     &module,
//!     "Post",
//!     RouteFormat::Yml,
//!     TemplateFormat::Json,
//!     &actions,
//!     &entity_info,
//! )?;
//! ```

mod controller;
mod error;
mod naming;
mod routing;
mod templates;

pub use controller::{generate_controller, generate_from_manifest};
pub use error::GenerateError;
pub use naming::{action_basename, to_snake_case, ACTION_SUFFIX};
pub use routing::{generate_route_entry, RouteEntry};
pub use templates::{
    entity_info_comment, write_controller, write_controller_test, ActionView,
    ControllerTemplateData, ControllerTestTemplateData,
};
