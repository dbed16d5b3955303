use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Persisted routing-configuration syntax selector.
///
/// Only `yml` is actually written today. `annotation` means routes are
/// declared in-source by the controller template, so no route file is
/// produced at all. The remaining tokens are reserved and rejected with
/// [`GenerateError::UnsupportedFormat`](crate::generator::GenerateError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteFormat {
    Yml,
    Json,
    Toml,
    Annotation,
}

impl RouteFormat {
    /// File extension used for route files of this format.
    pub fn extension(&self) -> &'static str {
        match self {
            RouteFormat::Yml => "yml",
            RouteFormat::Json => "json",
            RouteFormat::Toml => "toml",
            RouteFormat::Annotation => "annotation",
        }
    }
}

impl fmt::Display for RouteFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Response format the scaffolded controller is generated for.
///
/// Passed through to the controller template unmodified; the generator
/// itself never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateFormat {
    Json,
    Html,
}

impl fmt::Display for TemplateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateFormat::Json => f.write_str("json"),
            TemplateFormat::Html => f.write_str("html"),
        }
    }
}

/// Descriptor of the module a controller is scaffolded into.
///
/// A module is a self-contained packaging unit with a logical name, a
/// namespace identifier used in generated imports, and a filesystem root
/// under which all output paths are derived.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModuleRef {
    /// Logical module name, e.g. `ShopApi`
    pub name: String,
    /// Namespace identifier used by generated code, e.g. `shop_api`
    pub namespace: String,
    /// Filesystem root of the module
    pub path: PathBuf,
}

impl ModuleRef {
    /// Path of the controller source file for `controller`.
    ///
    /// Deterministic from the module root and the controller name; the
    /// generator refuses to proceed when this file already exists.
    pub fn controller_file(&self, controller: &str) -> PathBuf {
        self.path
            .join("Controller")
            .join(format!("{controller}Controller.rs"))
    }

    /// Path of the test stub generated alongside the controller.
    pub fn controller_test_file(&self, controller: &str) -> PathBuf {
        self.path
            .join("Tests")
            .join("Controller")
            .join(format!("{controller}ControllerTest.rs"))
    }

    /// Default per-controller route file for `format`.
    pub fn routing_file(&self, controller: &str, format: RouteFormat) -> PathBuf {
        self.path
            .join("Resources")
            .join("config")
            .join("routing")
            .join(format!("{controller}.{}", format.extension()))
    }

    /// Module-level route file that includes the per-controller resources.
    pub fn aggregate_routing_file(&self, format: RouteFormat) -> PathBuf {
        self.path
            .join("Resources")
            .join("config")
            .join(format!("routing.{}", format.extension()))
    }

    /// Resource reference string pointing at a controller's route file.
    pub fn resource_include(&self, controller: &str, format: RouteFormat) -> String {
        format!(
            "@{}/Resources/config/routing/{}.{}",
            self.name,
            controller,
            format.extension()
        )
    }
}

/// One controller endpoint to scaffold.
///
/// `name` must carry the `Action` suffix; everything else is optional and
/// only emitted into the route file when present.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ActionSpec {
    /// Action method name, e.g. `createAction`
    pub name: String,
    /// Route path, e.g. `/create`
    #[serde(default)]
    pub route: Option<String>,
    /// HTTP methods accepted by the route
    #[serde(default)]
    pub methods: Vec<String>,
    /// Route prefix
    #[serde(default)]
    pub prefix: Option<String>,
    /// Resource reference pulled into the route file
    #[serde(default)]
    pub resource: Option<String>,
    /// Requirement name → regex constraint, emitted in declaration order
    #[serde(default)]
    pub requirements: BTreeMap<String, String>,
}

/// A full generation request as read from a scaffold manifest.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScaffoldManifest {
    /// Target module descriptor
    pub module: ModuleRef,
    /// Controller name without the `Controller` suffix, e.g. `Post`
    pub controller: String,
    /// Routing-configuration syntax to emit
    #[serde(default = "default_route_format")]
    pub route_format: RouteFormat,
    /// Response format forwarded to the controller template
    #[serde(default = "default_template_format")]
    pub template_format: TemplateFormat,
    /// Declarative action list, scaffolded in order
    pub actions: Vec<ActionSpec>,
    /// Opaque entity description forwarded to the templates unmodified
    #[serde(default)]
    pub entity_info: Value,
}

fn default_route_format() -> RouteFormat {
    RouteFormat::Yml
}

fn default_template_format() -> TemplateFormat {
    TemplateFormat::Json
}
