//! Integration tests for the projgen binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn projgen() -> Command {
    let mut cmd = Command::cargo_bin("projgen").unwrap();
    cmd.env_remove("PROJGEN_TEMPLATE_DIR")
        .env_remove("PROJGEN_CATALOG")
        .env_remove("PROJGEN_INSTALL_TIMEOUT")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Built-in template locations are relative to the workspace root
fn template_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

#[test]
fn test_help_lists_subcommands() {
    projgen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("doctor"));
}

#[test]
fn test_create_fallback_with_env_extra() {
    let temp = TempDir::new().unwrap();

    projgen()
        .args([
            "create",
            "--yes",
            "--name",
            "My App",
            "--framework",
            "go-fiber",
            "--extras",
            ".env",
            "--no-install",
            "--directory",
        ])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("cd my-app"))
        .stdout(predicate::str::contains("go run main.go"));

    let project = temp.path().join("my-app");
    assert!(project.join("README.md").is_file());
    assert!(project.join("src/main.txt").is_file());

    let env = fs::read_to_string(project.join(".env")).unwrap();
    assert!(env.contains("PORT=8080"));
    assert!(env.contains("APP_NAME=my-app"));
}

#[test]
fn test_create_renders_shipped_go_template() {
    let temp = TempDir::new().unwrap();

    projgen()
        .args(["create", "-y", "-n", "Fiber Demo", "-f", "go-fiber", "--no-install"])
        .arg("--template-dir")
        .arg(template_root())
        .arg("--directory")
        .arg(temp.path())
        .assert()
        .success();

    let project = temp.path().join("fiber-demo");
    let go_mod = fs::read_to_string(project.join("go.mod")).unwrap();
    assert!(go_mod.starts_with("module fiber-demo"));

    let main_go = fs::read_to_string(project.join("main.go")).unwrap();
    assert!(main_go.contains(r#"port = "8080""#));
    assert!(!project.join("main.go.tmpl").exists());
}

#[test]
fn test_create_renders_shipped_vite_template() {
    let temp = TempDir::new().unwrap();

    projgen()
        .args([
            "create",
            "--yes",
            "--name",
            "Web Demo",
            "--framework",
            "vite-react-ts",
            "--extras",
            "Dockerfile,github-actions",
            "--no-install",
        ])
        .env("PROJGEN_TEMPLATE_DIR", template_root())
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("npm run dev"));

    let project = temp.path().join("web-demo");
    let package = fs::read_to_string(project.join("package.json")).unwrap();
    assert!(package.contains(r#""name": "web-demo""#));
    assert!(project.join("src/App.tsx").is_file());
    assert!(project.join("src/main.tsx").is_file());

    let readme = fs::read_to_string(project.join("README.md")).unwrap();
    assert!(readme.contains("Extras: Dockerfile, github-actions"));

    let dockerfile = fs::read_to_string(project.join("Dockerfile")).unwrap();
    assert!(dockerfile.contains("EXPOSE 3000"));
    assert!(project.join(".github/workflows/ci.yml").is_file());
}

#[test]
fn test_create_fails_on_non_empty_directory() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("my-app");
    fs::create_dir(&project).unwrap();
    fs::write(project.join("keep.txt"), "mine").unwrap();

    projgen()
        .args(["create", "--yes", "--name", "My App", "--framework", "go-fiber", "--no-install"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not empty"));

    assert_eq!(fs::read_dir(&project).unwrap().count(), 1);
}

#[test]
fn test_create_rejects_name_outside_directory() {
    let root = TempDir::new().unwrap();
    let base = root.path().join("work");
    fs::create_dir(&base).unwrap();

    projgen()
        .args(["create", "--yes", "--name", "../escape", "--framework", "go-fiber", "--no-install"])
        .current_dir(&base)
        .assert()
        .failure()
        .stderr(predicate::str::contains("single directory name"));

    assert!(!root.path().join("escape").exists());
    assert_eq!(fs::read_dir(&base).unwrap().count(), 0);
}

#[test]
fn test_create_requires_framework_without_prompts() {
    let temp = TempDir::new().unwrap();

    projgen()
        .args(["create", "--yes", "--name", "app"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("framework is required"));
}

#[test]
fn test_create_rejects_unknown_framework() {
    let temp = TempDir::new().unwrap();

    projgen()
        .args(["create", "--yes", "--name", "app", "--framework", "rails"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown framework 'rails'"));

    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn test_create_rejects_unsupported_addon() {
    let temp = TempDir::new().unwrap();

    projgen()
        .args([
            "create", "--yes", "--name", "app", "--framework", "go-fiber", "--css", "tailwindcss",
        ])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not support"));
}

#[test]
fn test_list_shows_catalog() {
    projgen()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("go-fiber"))
        .stdout(predicate::str::contains("vite-react-ts"))
        .stdout(predicate::str::contains("tailwindcss"))
        .stdout(predicate::str::contains("creates .env"));
}

#[test]
fn test_list_with_custom_catalog() {
    let temp = TempDir::new().unwrap();
    let catalog = temp.path().join("catalog.yaml");
    fs::write(
        &catalog,
        "backend:\n  - name: tiny-api\n    display_name: Tiny API\n    language: Go\n",
    )
    .unwrap();

    projgen()
        .arg("list")
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("tiny-api"))
        .stdout(predicate::str::contains("go-fiber").not());
}

#[test]
fn test_doctor_reports_tools() {
    projgen()
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("node"))
        .stdout(predicate::str::contains("Preferred runtime"));
}
