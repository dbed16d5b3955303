use askama::Template;
use serde_json::Value;
use std::fs;
use std::path::Path;

use super::error::GenerateError;
use super::naming::{action_basename, to_snake_case};
use crate::manifest::ActionSpec;

/// Action information for display inside the generated sources.
///
/// All fields are precomputed so the templates stay free of logic.
#[derive(Debug, Clone)]
pub struct ActionView {
    /// Full action name, e.g. `createAction`
    pub name: String,
    /// Name with the `Action` suffix stripped
    pub basename: String,
    /// snake_case form of the basename, used for generated method names
    pub snake_name: String,
    /// Route path, empty when the action declares none
    pub route: String,
    /// Whether a route path is declared
    pub has_route: bool,
    /// HTTP methods joined for display, e.g. `GET, POST`
    pub methods: String,
    /// Whether any HTTP methods are declared
    pub has_methods: bool,
}

impl ActionView {
    /// Build the template view of a declared action.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidActionName`] when the basename
    /// cannot be derived.
    pub fn from_action(action: &ActionSpec) -> Result<Self, GenerateError> {
        let basename = action_basename(&action.name)?.to_string();
        let snake_name = to_snake_case(&basename);
        Ok(ActionView {
            name: action.name.clone(),
            basename,
            snake_name,
            route: action.route.clone().unwrap_or_default(),
            has_route: action.route.is_some(),
            methods: action.methods.join(", "),
            has_methods: !action.methods.is_empty(),
        })
    }
}

/// Template data for the generated controller source file.
#[derive(Template)]
#[template(path = "controller.rs.txt", escape = "none")]
pub struct ControllerTemplateData {
    /// Namespace identifier of the target module
    pub namespace: String,
    /// Logical module name
    pub module: String,
    /// Controller name without the `Controller` suffix
    pub controller: String,
    /// Route format token, for the generated file header
    pub route_format: String,
    /// Response format the controller is scaffolded for
    pub template_format: String,
    /// Whether routes are declared as in-source attributes
    pub annotation: bool,
    /// Actions to scaffold, in declaration order
    pub actions: Vec<ActionView>,
    /// Entity description as a `//` comment block, empty when absent
    pub entity_info: String,
    /// Whether an entity description is available
    pub has_entity_info: bool,
}

/// Template data for the generated controller test stub.
#[derive(Template)]
#[template(path = "controller_test.rs.txt", escape = "none")]
pub struct ControllerTestTemplateData {
    /// Namespace identifier of the target module
    pub namespace: String,
    /// Controller name without the `Controller` suffix
    pub controller: String,
    /// Actions to cover, in declaration order
    pub actions: Vec<ActionView>,
}

/// Render an opaque entity-info blob into a `//` comment block.
///
/// `Null` renders to an empty string so manifests without entity data get
/// no comment block at all.
pub fn entity_info_comment(entity_info: &Value) -> String {
    if entity_info.is_null() {
        return String::new();
    }
    let pretty = serde_json::to_string_pretty(entity_info).unwrap_or_default();
    pretty
        .lines()
        .map(|line| format!("// {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the controller source file.
///
/// # Errors
///
/// Returns an error when template rendering or file writing fails.
pub fn write_controller(path: &Path, data: &ControllerTemplateData) -> Result<(), GenerateError> {
    render_to_file(path, data.render())?;
    println!("✅ Generated controller: {path:?}");
    Ok(())
}

/// Write the controller test stub.
///
/// # Errors
///
/// Returns an error when template rendering or file writing fails.
pub fn write_controller_test(
    path: &Path,
    data: &ControllerTestTemplateData,
) -> Result<(), GenerateError> {
    render_to_file(path, data.render())?;
    println!("✅ Generated controller test stub: {path:?}");
    Ok(())
}

fn render_to_file(
    path: &Path,
    rendered: Result<String, askama::Error>,
) -> Result<(), GenerateError> {
    let rendered = rendered.map_err(|source| GenerateError::Render { source })?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|source| GenerateError::DirectoryCreate {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, rendered).map_err(|source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    })
}
