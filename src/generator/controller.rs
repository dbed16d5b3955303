use serde_json::Value;
use std::path::PathBuf;

use super::error::GenerateError;
use super::routing::{generate_route_entry, RouteEntry};
use super::templates::{
    entity_info_comment, write_controller, write_controller_test, ActionView,
    ControllerTemplateData, ControllerTestTemplateData,
};
use crate::manifest::{ActionSpec, ModuleRef, RouteFormat, ScaffoldManifest, TemplateFormat};

/// Scaffold a controller into `module`.
///
/// Writes one route entry per declared action, a module-level entry that
/// includes the controller's route file, the controller source and its test
/// stub. Returns the controller file path.
///
/// Route entries are written before the sources are rendered; a failure on
/// action N leaves the entries for earlier actions on disk. Nothing is
/// retried or rolled back.
///
/// # Errors
///
/// Fails with [`GenerateError::AlreadyExists`] when the controller file is
/// already present (nothing is written in that case), and with the
/// format/name/I-O variants raised by route and template generation.
pub fn generate_controller(
    module: &ModuleRef,
    controller: &str,
    route_format: RouteFormat,
    template_format: TemplateFormat,
    actions: &[ActionSpec],
    entity_info: &Value,
) -> Result<PathBuf, GenerateError> {
    let controller_file = module.controller_file(controller);
    if controller_file.exists() {
        return Err(GenerateError::AlreadyExists {
            path: controller_file,
        });
    }

    tracing::debug!(
        controller,
        module = %module.name,
        actions = actions.len(),
        "scaffolding controller"
    );

    let mut views = Vec::with_capacity(actions.len());
    for action in actions {
        let view = ActionView::from_action(action)?;
        let entry = RouteEntry::from_action(action)?;
        generate_route_entry(module, controller, &entry, route_format, None)?;
        views.push(view);
    }

    // Module-level entry pulling the controller's own route file in.
    let include = RouteEntry::resource_include(module, controller, route_format);
    generate_route_entry(
        module,
        controller,
        &include,
        route_format,
        Some(&module.aggregate_routing_file(route_format)),
    )?;

    let controller_data = ControllerTemplateData {
        namespace: module.namespace.clone(),
        module: module.name.clone(),
        controller: controller.to_string(),
        route_format: route_format.to_string(),
        template_format: template_format.to_string(),
        annotation: route_format == RouteFormat::Annotation,
        actions: views.clone(),
        entity_info: entity_info_comment(entity_info),
        has_entity_info: !entity_info.is_null(),
    };
    write_controller(&controller_file, &controller_data)?;

    let test_data = ControllerTestTemplateData {
        namespace: module.namespace.clone(),
        controller: controller.to_string(),
        actions: views,
    };
    write_controller_test(&module.controller_test_file(controller), &test_data)?;

    Ok(controller_file)
}

/// Scaffold everything a manifest describes.
///
/// Thin forwarding wrapper over [`generate_controller`].
///
/// # Errors
///
/// Propagates every [`GenerateError`] raised by the generation steps.
pub fn generate_from_manifest(manifest: &ScaffoldManifest) -> Result<PathBuf, GenerateError> {
    generate_controller(
        &manifest.module,
        &manifest.controller,
        manifest.route_format,
        manifest.template_format,
        &manifest.actions,
        &manifest.entity_info,
    )
}
