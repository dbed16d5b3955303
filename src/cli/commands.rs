use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::generator::{action_basename, generate_from_manifest, to_snake_case};
use crate::manifest::{load_manifest, RouteFormat, ScaffoldManifest};

/// Command-line interface for the scaffolding generator
///
/// Provides commands for generating controllers from scaffold manifests and
/// for previewing what a manifest would produce.
#[derive(Parser)]
#[command(name = "scaffoldgen")]
#[command(about = "Controller scaffolding CLI", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a controller, its test stub and route entries from a manifest
    Generate {
        /// Path to the scaffold manifest (YAML)
        #[arg(short, long)]
        manifest: PathBuf,

        /// Override the module root directory declared in the manifest
        #[arg(long)]
        module_path: Option<PathBuf>,
    },
    /// Show the files and route entries a manifest would produce, without writing
    Inspect {
        /// Path to the scaffold manifest (YAML)
        #[arg(short, long)]
        manifest: PathBuf,
    },
}

/// Parse the process arguments and run the selected command.
///
/// # Errors
///
/// Returns an error when the manifest cannot be loaded or generation fails;
/// the message names the offending path or format.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            manifest,
            module_path,
        } => {
            let mut request = load_manifest(&manifest)?;
            if let Some(path) = module_path {
                request.module.path = path;
            }
            let controller_file = generate_from_manifest(&request).with_context(|| {
                format!("failed to scaffold controller `{}`", request.controller)
            })?;
            println!(
                "🎉 Scaffolded `{}Controller` → {controller_file:?}",
                request.controller
            );
            Ok(())
        }
        Commands::Inspect { manifest } => {
            let request = load_manifest(&manifest)?;
            inspect(&request)
        }
    }
}

/// Print the output paths and route names a manifest would produce.
fn inspect(request: &ScaffoldManifest) -> anyhow::Result<()> {
    let module = &request.module;
    println!("Controller: {}Controller", request.controller);
    println!(
        "  source    → {:?}",
        module.controller_file(&request.controller)
    );
    println!(
        "  test stub → {:?}",
        module.controller_test_file(&request.controller)
    );
    match request.route_format {
        RouteFormat::Annotation => println!("  routes    → declared in-source (annotation)"),
        format => {
            println!(
                "  routes    → {:?}",
                module.routing_file(&request.controller, format)
            );
            println!("  includes  → {:?}", module.aggregate_routing_file(format));
        }
    }
    for action in &request.actions {
        let basename = action_basename(&action.name)
            .with_context(|| format!("invalid action `{}` in manifest", action.name))?;
        let name = to_snake_case(basename);
        let reference = format!("{}:{}:{}", module.name, request.controller, basename);
        match &action.route {
            Some(route) => println!("  route `{name}` path {route} ({reference})"),
            None => println!("  route `{name}` ({reference})"),
        }
    }
    Ok(())
}
