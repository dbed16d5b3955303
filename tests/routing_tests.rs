use scaffoldgen::{generate_route_entry, GenerateError, ModuleRef, RouteEntry, RouteFormat};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_dir() -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("routing_test_{}_{}", std::process::id(), nanos));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn module(root: &Path) -> ModuleRef {
    ModuleRef {
        name: "ShopApi".to_string(),
        namespace: "shop_api".to_string(),
        path: root.join("shop_api"),
    }
}

fn entry(basename: &str) -> RouteEntry {
    RouteEntry {
        basename: basename.to_string(),
        route: None,
        methods: Vec::new(),
        prefix: None,
        resource: None,
        requirements: BTreeMap::new(),
    }
}

#[test]
fn test_yml_route_entry_content() {
    let dir = temp_dir();
    let module = module(&dir);
    let mut create = entry("create");
    create.route = Some("/create".to_string());
    create.methods = vec!["POST".to_string()];

    let written = generate_route_entry(&module, "Post", &create, RouteFormat::Yml, None)
        .unwrap()
        .unwrap();
    assert_eq!(written, module.routing_file("Post", RouteFormat::Yml));

    let content = fs::read_to_string(&written).unwrap();
    assert!(content.contains("\ncreate:\n"));
    assert!(content.contains("path:     /create"));
    assert!(content.contains("defaults: { _controller: ShopApi:Post:create }"));
    assert!(content.contains("methods:  [POST]"));
}

#[test]
fn test_route_entries_accumulate_across_calls() {
    let dir = temp_dir();
    let module = module(&dir);
    let mut create = entry("create");
    create.route = Some("/create".to_string());
    let mut list_all = entry("listAll");
    list_all.route = Some("/all".to_string());

    generate_route_entry(&module, "Post", &create, RouteFormat::Yml, None).unwrap();
    generate_route_entry(&module, "Post", &list_all, RouteFormat::Yml, None).unwrap();

    let content = fs::read_to_string(module.routing_file("Post", RouteFormat::Yml)).unwrap();
    assert!(content.contains("\ncreate:\n"));
    assert!(content.contains("path:     /create"));
    assert!(content.contains("\nlist_all:\n"));
    assert!(content.contains("path:     /all"));
    assert!(content.contains("defaults: { _controller: ShopApi:Post:listAll }"));
}

#[test]
fn test_annotation_format_is_a_noop() {
    let dir = temp_dir();
    let module = module(&dir);
    let mut create = entry("create");
    create.route = Some("/create".to_string());

    let written =
        generate_route_entry(&module, "Post", &create, RouteFormat::Annotation, None).unwrap();
    assert!(written.is_none());
    // nothing under the module root may exist
    assert!(!module.path.exists());
}

#[test]
fn test_unsupported_format_leaves_filesystem_unchanged() {
    let dir = temp_dir();
    let module = module(&dir);
    let mut create = entry("create");
    create.route = Some("/create".to_string());

    for format in [RouteFormat::Json, RouteFormat::Toml] {
        let err = generate_route_entry(&module, "Post", &create, format, None).unwrap_err();
        match err {
            GenerateError::UnsupportedFormat { format: rejected } => assert_eq!(rejected, format),
            other => panic!("expected UnsupportedFormat, got {other}"),
        }
    }
    assert!(!module.path.exists());
}

#[test]
fn test_optional_fields_emitted_only_when_set() {
    let dir = temp_dir();
    let module = module(&dir);
    let mut full = entry("show");
    full.route = Some("/show/{id}".to_string());
    full.prefix = Some("/admin".to_string());
    full.resource = Some("@ShopApi/Resources/config/routing/Extra.yml".to_string());
    full.requirements = BTreeMap::from([
        ("id".to_string(), "\\d+".to_string()),
        ("slug".to_string(), "[a-z-]+".to_string()),
    ]);

    generate_route_entry(&module, "Post", &full, RouteFormat::Yml, None).unwrap();
    let content = fs::read_to_string(module.routing_file("Post", RouteFormat::Yml)).unwrap();
    assert!(content.contains("prefix:  [/admin]"));
    assert!(content.contains("resource:  @ShopApi/Resources/config/routing/Extra.yml"));
    assert!(content.contains("requirements:\n"));
    assert!(content.contains("        id: \\d+"));
    assert!(content.contains("        slug: [a-z-]+"));
    // no methods were declared, so no methods line may appear
    assert!(!content.contains("methods:"));
}

#[test]
fn test_file_override_redirects_the_entry() {
    let dir = temp_dir();
    let module = module(&dir);
    let include = RouteEntry::resource_include(&module, "Post", RouteFormat::Yml);
    let target = module.aggregate_routing_file(RouteFormat::Yml);

    let written = generate_route_entry(&module, "Post", &include, RouteFormat::Yml, Some(&target))
        .unwrap()
        .unwrap();
    assert_eq!(written, target);

    let content = fs::read_to_string(&target).unwrap();
    assert!(content.contains("\napi__post:\n"));
    assert!(content.contains("prefix:  [/Post]"));
    assert!(content.contains("resource:  @ShopApi/Resources/config/routing/Post.yml"));
}

#[test]
fn test_replacement_leaves_no_temp_residue() {
    let dir = temp_dir();
    let module = module(&dir);
    let mut create = entry("create");
    create.route = Some("/create".to_string());

    generate_route_entry(&module, "Post", &create, RouteFormat::Yml, None).unwrap();
    generate_route_entry(&module, "Post", &entry("list"), RouteFormat::Yml, None).unwrap();

    let routing_file = module.routing_file("Post", RouteFormat::Yml);
    let routing_dir = routing_file.parent().unwrap();
    let entries: Vec<_> = fs::read_dir(routing_dir).unwrap().collect();
    assert_eq!(entries.len(), 1, "only the route file may remain");
}
