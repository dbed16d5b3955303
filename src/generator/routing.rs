use std::collections::BTreeMap;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::error::GenerateError;
use super::naming::{action_basename, to_snake_case};
use crate::manifest::{ActionSpec, ModuleRef, RouteFormat};

/// One entry of a route-configuration file, already reduced to the fields
/// the writer emits.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    /// Action basename; its snake_case form names the route
    pub basename: String,
    /// Route path
    pub route: Option<String>,
    /// HTTP methods accepted by the route
    pub methods: Vec<String>,
    /// Route prefix
    pub prefix: Option<String>,
    /// Resource reference pulled into the route file
    pub resource: Option<String>,
    /// Requirement name → regex constraint
    pub requirements: BTreeMap<String, String>,
}

impl RouteEntry {
    /// Build a route entry from a declared action, deriving its basename.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidActionName`] when the action name
    /// does not conform to the `Action` suffix convention.
    pub fn from_action(action: &ActionSpec) -> Result<Self, GenerateError> {
        let basename = action_basename(&action.name)?.to_string();
        Ok(RouteEntry {
            basename,
            route: action.route.clone(),
            methods: action.methods.clone(),
            prefix: action.prefix.clone(),
            resource: action.resource.clone(),
            requirements: action.requirements.clone(),
        })
    }

    /// The module-level entry that includes a controller's own route file.
    pub fn resource_include(module: &ModuleRef, controller: &str, format: RouteFormat) -> Self {
        RouteEntry {
            basename: format!("api_{controller}"),
            route: None,
            methods: Vec::new(),
            prefix: Some(format!("/{controller}")),
            resource: Some(module.resource_include(controller, format)),
            requirements: BTreeMap::new(),
        }
    }
}

/// Append one route entry to a route-configuration file.
///
/// The target is `file_override` when given, otherwise the module's default
/// per-controller route file. Existing content is kept and the new block
/// appended; the full buffer is then written back atomically. Returns the
/// written path, or `None` for the `annotation` format, which declares its
/// routes in the generated source and touches nothing here.
///
/// # Errors
///
/// Returns [`GenerateError::UnsupportedFormat`] for any file-backed format
/// other than `yml` (before anything on disk is touched), and I/O variants
/// for directory creation, read-back and write failures.
pub fn generate_route_entry(
    module: &ModuleRef,
    controller: &str,
    entry: &RouteEntry,
    format: RouteFormat,
    file_override: Option<&Path>,
) -> Result<Option<PathBuf>, GenerateError> {
    let controller_ref = format!("{}:{}:{}", module.name, controller, entry.basename);
    let name = to_snake_case(&entry.basename);

    let block = match format {
        // Annotation routes live in the controller template itself.
        RouteFormat::Annotation => return Ok(None),
        RouteFormat::Yml => render_yml_block(&name, &controller_ref, entry),
        RouteFormat::Json | RouteFormat::Toml => {
            return Err(GenerateError::UnsupportedFormat { format })
        }
    };

    let file = match file_override {
        Some(path) => path.to_path_buf(),
        None => module.routing_file(controller, format),
    };
    if let Some(dir) = file.parent() {
        fs::create_dir_all(dir).map_err(|source| GenerateError::DirectoryCreate {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let mut content = if file.exists() {
        fs::read_to_string(&file).map_err(|source| GenerateError::Read {
            path: file.clone(),
            source,
        })?
    } else {
        String::new()
    };
    content.push_str(&block);

    write_atomic(&file, &content)?;
    tracing::debug!(route = %name, file = %file.display(), "wrote route entry");
    println!("✅ Route entry `{name}` → {file:?}");
    Ok(Some(file))
}

/// Render one yml route block.
///
/// Lines are emitted only for fields that are set, in a fixed order:
/// path/defaults, methods, prefix, resource, requirements.
fn render_yml_block(name: &str, controller_ref: &str, entry: &RouteEntry) -> String {
    let mut block = format!("\n{name}:\n");
    if let Some(route) = &entry.route {
        block.push_str(&format!(
            "    path:     {route}\n    defaults: {{ _controller: {controller_ref} }}\n"
        ));
    }
    if !entry.methods.is_empty() {
        block.push_str(&format!("    methods:  [{}]\n", entry.methods.join(", ")));
    }
    if let Some(prefix) = &entry.prefix {
        // Bracketed like `methods` although the value is singular; the
        // routing loader tolerates a one-element list. See DESIGN.md.
        block.push_str(&format!("    prefix:  [{prefix}]\n"));
    }
    if let Some(resource) = &entry.resource {
        block.push_str(&format!("    resource:  {resource}\n"));
    }
    if !entry.requirements.is_empty() {
        block.push_str("    requirements:\n");
        for (key, value) in &entry.requirements {
            block.push_str(&format!("        {key}: {value}\n"));
        }
    }
    block
}

/// Replace `path` with `content` via a temp file in the same directory.
///
/// The rename is the commit point; an interrupted write leaves the previous
/// file intact.
fn write_atomic(path: &Path, content: &str) -> Result<(), GenerateError> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir).map_err(|source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tmp.write_all(content.as_bytes())
        .map_err(|source| GenerateError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    tmp.persist(path).map_err(|err| GenerateError::Write {
        path: path.to_path_buf(),
        source: err.error,
    })?;
    Ok(())
}
