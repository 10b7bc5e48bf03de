//! Integration tests for stackgen-core.
//!
//! The engine is exercised end to end through the real adapters: the
//! preset registry resolves payloads and the in-memory filesystem records
//! what a generation run writes.

use std::path::Path;

use stackgen_adapters::{MemoryFilesystem, PresetRegistry};
use stackgen_core::prelude::*;

fn service() -> (MaterializeService, MemoryFilesystem) {
    let filesystem = MemoryFilesystem::new();
    let handle = filesystem.clone();
    let service = MaterializeService::new(Box::new(PresetRegistry::new()), Box::new(filesystem));
    (service, handle)
}

#[test]
fn default_simple_preset_produces_the_documented_stack() {
    let (service, fs) = service();
    let request = GenerationRequest::builder()
        .target_dir("/work/proj")
        .template("preset:simple")
        .build()
        .unwrap();

    let report = service.materialize(&request).unwrap();
    assert_eq!(report.root, Path::new("/work/proj"));
    assert_eq!(report.artifacts.len(), 6);

    let compose = fs
        .read_file(Path::new("/work/proj/docker-compose.yml"))
        .unwrap();
    assert!(compose.contains("- 8081:8081"));
    assert!(compose.contains("- 27017:27017"));
    assert!(compose.contains("- 8080:80\n"));
    assert!(compose.contains("image: mongo-express:1.0.0-alpha"));
    assert!(compose.contains("image: mongo:6.0"));

    let env = fs.read_file(Path::new("/work/proj/.env")).unwrap();
    assert!(env.contains("DB_USER=admin"));
    assert!(env.contains("DB_PASS=p455w0rd"));
    assert!(env.contains("SERVER_API_KEY=sample-abcdef"));
    assert!(env.contains("MONGO_INITDB_ROOT_USERNAME=admin"));

    let main_go = fs.read_file(Path::new("/work/proj/server/main.go")).unwrap();
    assert!(main_go.contains("universe-simple"));

    assert!(fs.is_executable(Path::new("/work/proj/compose.sh")));
    assert!(fs
        .read_file(Path::new("/work/proj/server/Dockerfile"))
        .unwrap()
        .contains("FROM golang:1.22 AS builder"));
    assert!(fs
        .read_file(Path::new("/work/proj/server/go.mod"))
        .unwrap()
        .contains("module my-project"));
}

#[test]
fn custom_ports_and_credentials_flow_into_the_artifacts() {
    let (service, fs) = service();
    let request = GenerationRequest::builder()
        .target_dir("proj")
        .template("preset:multi")
        .db_port(15_432)
        .http_port(16_080)
        .admin_ui_port(17_081)
        .db_user("ops")
        .db_pass("secret")
        .api_key("key-42")
        .build()
        .unwrap();

    service.materialize(&request).unwrap();

    let compose = fs.read_file(Path::new("proj/docker-compose.yml")).unwrap();
    assert!(compose.contains("- 15432:27017"));
    assert!(compose.contains("- 16080:80\n"));
    assert!(compose.contains("- 17081:8081"));

    let env = fs.read_file(Path::new("proj/.env")).unwrap();
    assert_eq!(env.matches("ops").count(), 3);
    assert_eq!(env.matches("secret").count(), 3);
    assert!(env.contains("SERVER_API_KEY=key-42"));
    // Container-side wiring stays fixed regardless of host ports.
    assert!(env.contains("DB_PORT=27017"));
    assert!(env.contains("ME_CONFIG_MONGODB_PORT=27017"));

    let main_go = fs.read_file(Path::new("proj/server/main.go")).unwrap();
    assert!(main_go.contains("universe-multichar"));
}

#[test]
fn external_template_files_are_copied_byte_for_byte() {
    let tmp = tempfile::tempdir().unwrap();
    let template_path = tmp.path().join("custom.go");
    let body = "package main\n\n// custom app, {{API_KEY}} stays literal\nfunc main() {}\n";
    std::fs::write(&template_path, body).unwrap();

    let (service, fs) = service();
    let request = GenerationRequest::builder()
        .target_dir("proj")
        .template(template_path.display().to_string())
        .build()
        .unwrap();

    service.materialize(&request).unwrap();
    assert_eq!(
        fs.read_file(Path::new("proj/server/main.go")).unwrap(),
        body
    );
}

#[test]
fn missing_template_file_aborts_after_the_fixed_artifacts() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("missing.go");

    let (service, fs) = service();
    let request = GenerationRequest::builder()
        .target_dir("proj")
        .template(missing.display().to_string())
        .build()
        .unwrap();

    let err = service.materialize(&request).unwrap_err();
    assert_eq!(err.step.number(), 7);
    assert!(err.to_string().contains("missing.go"));

    // The five fixed artifacts were already written and stay in place.
    assert_eq!(fs.list_files().len(), 5);
    assert!(fs.read_file(Path::new("proj/server/go.mod")).is_some());
    assert!(fs.read_file(Path::new("proj/server/main.go")).is_none());
}

#[test]
fn out_of_range_port_fails_before_any_filesystem_work() {
    let err = GenerationRequest::builder()
        .target_dir("proj")
        .template("preset:simple")
        .admin_ui_port(65_536)
        .build()
        .unwrap_err();

    let core_err = StackgenError::from(err);
    assert!(core_err.to_string().contains("65536"));
    // Nothing was materialized: the request never existed.
}

#[test]
fn generations_into_separate_roots_do_not_interfere() {
    let (service, fs) = service();
    for target in ["one", "two"] {
        let request = GenerationRequest::builder()
            .target_dir(target)
            .template("preset:simple")
            .build()
            .unwrap();
        service.materialize(&request).unwrap();
    }

    assert_eq!(fs.list_files().len(), 12);
    assert_eq!(
        fs.read_file(Path::new("one/.env")),
        fs.read_file(Path::new("two/.env"))
    );
}
