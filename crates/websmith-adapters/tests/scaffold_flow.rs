//! End-to-end scaffolding flow against the in-memory filesystem.
//!
//! These tests wire the real `ScaffoldService` to the builtin web-service
//! skeleton and the `MemoryFilesystem`, so the whole render-and-write path is
//! exercised without touching disk.

use std::path::Path;

use websmith_adapters::{MemoryFilesystem, SimpleRenderer, web_service_skeleton};
use websmith_core::{
    application::{ApplicationError, ScaffoldOptions, ScaffoldService},
    domain::RenderContext,
    error::WebsmithError,
};

fn service_with(fs: MemoryFilesystem) -> ScaffoldService {
    ScaffoldService::new(Box::new(SimpleRenderer::new()), Box::new(fs))
}

#[test]
fn scaffold_writes_every_skeleton_file() {
    let fs = MemoryFilesystem::new();
    let service = service_with(fs.clone());

    let skeleton = web_service_skeleton();
    let context = RenderContext::new("demo");
    service
        .scaffold(&skeleton, &context, "out/demo", ScaffoldOptions::default())
        .unwrap();

    for file in [
        "Cargo.toml",
        ".gitignore",
        "config/config.toml",
        "src/main.rs",
        "src/config.rs",
        "src/logging.rs",
        "src/error.rs",
        "src/middleware.rs",
        "src/record.rs",
        "README.md",
    ] {
        let path = Path::new("out/demo").join(file);
        assert!(
            fs.read_file(&path).is_some(),
            "missing generated file: {file}"
        );
    }
}

#[test]
fn generated_config_carries_port_and_fresh_token() {
    let fs = MemoryFilesystem::new();
    let service = service_with(fs.clone());

    let skeleton = web_service_skeleton();
    let context = RenderContext::new("demo").with_port(9000);
    service
        .scaffold(&skeleton, &context, "out/demo", ScaffoldOptions::default())
        .unwrap();

    let config = fs
        .read_file(Path::new("out/demo/config/config.toml"))
        .unwrap();
    assert!(config.contains("port = 9000"));

    let token = context.get("SECRET_TOKEN").unwrap();
    assert_eq!(token.len(), 64);
    assert!(config.contains(token));
}

#[test]
fn existing_project_without_force_is_rejected() {
    let fs = MemoryFilesystem::new();
    use websmith_core::application::ports::Filesystem;
    fs.create_dir_all(Path::new("out/demo")).unwrap();

    let service = service_with(fs.clone());
    let result = service.scaffold(
        &web_service_skeleton(),
        &RenderContext::new("demo"),
        "out/demo",
        ScaffoldOptions::default(),
    );

    assert!(matches!(
        result,
        Err(WebsmithError::Application(
            ApplicationError::ProjectExists { .. }
        ))
    ));
}

#[test]
fn force_replaces_existing_project() {
    let fs = MemoryFilesystem::new();
    use websmith_core::application::ports::Filesystem;
    fs.create_dir_all(Path::new("out/demo")).unwrap();
    fs.write_file(Path::new("out/demo/stale.txt"), "old").unwrap();

    let service = service_with(fs.clone());
    service
        .scaffold(
            &web_service_skeleton(),
            &RenderContext::new("demo"),
            "out/demo",
            ScaffoldOptions { force: true },
        )
        .unwrap();

    assert!(fs.read_file(Path::new("out/demo/stale.txt")).is_none());
    assert!(fs.read_file(Path::new("out/demo/Cargo.toml")).is_some());
}

#[test]
fn failed_write_rolls_back_project_root() {
    let fs = MemoryFilesystem::new();
    // Any single file failing mid-write must leave no partial project behind.
    fs.poison("out/demo/src/main.rs");

    let service = service_with(fs.clone());
    let result = service.scaffold(
        &web_service_skeleton(),
        &RenderContext::new("demo"),
        "out/demo",
        ScaffoldOptions::default(),
    );

    assert!(result.is_err());
    assert!(fs.list_files().is_empty(), "rollback left files behind");
}

#[test]
fn invalid_project_name_never_touches_filesystem() {
    let fs = MemoryFilesystem::new();
    let service = service_with(fs.clone());

    let result = service.scaffold(
        &web_service_skeleton(),
        &RenderContext::new(".hidden"),
        "out/.hidden",
        ScaffoldOptions::default(),
    );

    assert!(result.is_err());
    assert!(fs.list_files().is_empty());
}
