use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use archsynth_cli::{Args, Command, run};

/// Demos are at workspace root, relative to workspace not the crate
fn demos_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

/// Collects all files with the given extension from a directory
fn collect_files(dir: PathBuf, extension: &str) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some(extension)
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args(command: Command) -> Args {
    Args {
        command,
        config: None,
        log_level: "off".to_string(),
    }
}

fn stem(path: &Path) -> String {
    path.file_stem().unwrap().to_string_lossy().to_string()
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_files(demos_dir(), "json");
    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let input = demo_path.to_string_lossy().to_string();
        let name = stem(demo_path);
        let contract_path = temp_dir.path().join(format!("{name}.openapi.json"));
        let markdown_path = temp_dir.path().join(format!("{name}.md"));
        let split_dir = temp_dir.path().join(&name);

        let commands = [
            Command::Openapi {
                input: input.clone(),
                output: Some(contract_path.to_string_lossy().to_string()),
            },
            Command::Diagrams {
                input: input.clone(),
                output: Some(markdown_path.to_string_lossy().to_string()),
                split_dir: Some(split_dir.to_string_lossy().to_string()),
            },
            Command::Check {
                input: input.clone(),
            },
        ];

        for command in commands {
            if let Err(e) = run(&args(command)) {
                failed_demos.push((demo_path.clone(), e));
            }
        }

        if contract_path.exists() {
            let contract = fs::read_to_string(&contract_path).unwrap();
            assert!(contract.contains("\"openapi\": \"3.0.3\""), "{name}");
        }
        if markdown_path.exists() {
            let markdown = fs::read_to_string(&markdown_path).unwrap();
            assert_eq!(markdown.matches("```mermaid\n").count(), 5, "{name}");
        }
        if split_dir.exists() {
            assert_eq!(fs::read_dir(&split_dir).unwrap().count(), 5, "{name}");
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo run(s) failed unexpectedly", failed_demos.len());
    }

    println!("✅ All {} valid demos passed", valid_demos.len());
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_files(demos_dir().join("errors"), "json");
    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let input = demo_path.to_string_lossy().to_string();
        let name = stem(demo_path);

        let commands = [
            Command::Openapi {
                input: input.clone(),
                output: Some(
                    temp_dir
                        .path()
                        .join(format!("error_{name}.json"))
                        .to_string_lossy()
                        .to_string(),
                ),
            },
            Command::Diagrams {
                input: input.clone(),
                output: Some(
                    temp_dir
                        .path()
                        .join(format!("error_{name}.md"))
                        .to_string_lossy()
                        .to_string(),
                ),
                split_dir: None,
            },
        ];

        for command in commands {
            if run(&args(command)).is_ok() {
                unexpectedly_succeeded.push(demo_path.clone());
            }
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo run(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!(
        "✅ All {} error demos failed as expected",
        error_demos.len()
    );
}

#[test]
fn e2e_resource_name_contract() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("order.json");

    run(&args(Command::Openapi {
        input: "Order".to_string(),
        output: Some(output.to_string_lossy().to_string()),
    }))
    .expect("resource name should synthesize a contract");

    let contract = fs::read_to_string(&output).unwrap();
    assert!(contract.contains("\"title\": \"Order Management API\""));
    assert!(contract.contains("\"/orders/{id}\""));
    assert!(contract.ends_with("}\n"));
}

#[test]
fn e2e_validate_documents() {
    let valid = demos_dir().join("ARCHITECTURE.md");
    let result = run(&args(Command::ValidateDoc {
        file: valid.to_string_lossy().to_string(),
    }));
    assert!(result.is_ok(), "{:?}", result.err());

    for document in collect_files(demos_dir().join("errors"), "md") {
        let result = run(&args(Command::ValidateDoc {
            file: document.to_string_lossy().to_string(),
        }));
        assert!(result.is_err(), "{} should fail", document.display());
    }
}

#[test]
fn e2e_explicit_config() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[contract]\npretty = false\n").unwrap();
    let output = temp_dir.path().join("order.json");

    let mut compact = args(Command::Openapi {
        input: "Order".to_string(),
        output: Some(output.to_string_lossy().to_string()),
    });
    compact.config = Some(config_path.to_string_lossy().to_string());
    run(&compact).expect("explicit config should load");

    let contract = fs::read_to_string(&output).unwrap();
    assert!(contract.starts_with("{\"openapi\":\"3.0.3\""));

    let mut missing = args(Command::Check {
        input: "{}".to_string(),
    });
    missing.config = Some(temp_dir.path().join("absent.toml").to_string_lossy().to_string());
    assert!(run(&missing).is_err());
}
