//! The setup run itself
//!
//! ```text
//! Start -> GuardCheck -> AlreadyConfigured
//!                     -> Configuring -> AppUpdated -> PackageCleaned -> Done
//! ```
//!
//! Any error ends the run. Nothing is retried and earlier writes are not
//! rolled back; re-running after a failure is safe because the app update
//! only overwrites values.

use anyhow::{Context, Result};
use serde::Serialize;

use super::output::Output;
use crate::domain::ProjectIdentity;
use crate::storage::{AppUpdate, GuardRemoval, PackageManifest, Project};

/// What a setup run did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SetupReport {
    /// The guard was not set; nothing was touched
    AlreadyConfigured { scheme: Option<String> },
    Configured {
        project: ProjectIdentity,
        app_manifest: AppUpdate,
        package_manifest: GuardRemoval,
    },
}

/// Runs setup against a project
pub fn run(project: &Project, output: &Output) -> Result<SetupReport> {
    let config = project.config();
    let package_name = config.package_manifest.display().to_string();
    let app_name = config.app_manifest.display().to_string();

    output.verbose_ctx(
        "configure",
        &format!("Reading {}", project.package_manifest_path().display()),
    );
    let package = project
        .package_manifest()
        .with_context(|| format!("Failed to load {}", package_name))?;

    let guard = project.guard();
    output.verbose_ctx(
        "guard",
        &format!(
            "scheme = {:?}, sentinel = {:?}",
            package.scheme(),
            guard.sentinel()
        ),
    );

    if !package.needs_setup(&guard) {
        output.step("✓ Project already configured");
        return Ok(SetupReport::AlreadyConfigured {
            scheme: package.scheme().map(str::to_string),
        });
    }

    let identity = package
        .identity()
        .with_context(|| format!("Cannot configure project from {}", package_name))?;

    output.blank();
    output.step(&format!("Configuring project: {}", identity.name));
    output.blank();
    output.verbose_ctx("configure", &format!("Derived slug: {}", identity.slug));

    let app_manifest = update_app_manifest(project, &identity, &app_name, output)?;

    let package_manifest = remove_guard(project, &package_name, output)?;

    output.blank();
    output.step("✓ Setup complete!");
    print_next_steps(&config.next_steps, output);

    Ok(SetupReport::Configured {
        project: identity,
        app_manifest,
        package_manifest,
    })
}

fn update_app_manifest(
    project: &Project,
    identity: &ProjectIdentity,
    app_name: &str,
    output: &Output,
) -> Result<AppUpdate> {
    let app = project.app_manifest();
    output.verbose_ctx("app", &format!("Updating {}", app.path().display()));

    match app.update(identity) {
        Ok(AppUpdate::Skipped) => {
            output.warn(&format!("{} not found, skipping...", app_name));
            Ok(AppUpdate::Skipped)
        }
        Ok(AppUpdate::Updated { fields }) => {
            output.verbose_ctx("app", &format!("Overwrote expo fields: {:?}", fields));
            output.step(&format!("✓ Updated {}", app_name));
            Ok(AppUpdate::Updated { fields })
        }
        Err(e) => {
            output.error(&format!("Failed to update {}: {}", app_name, e));
            Err(e).with_context(|| format!("Failed to update {}", app_name))
        }
    }
}

fn remove_guard(project: &Project, package_name: &str, output: &Output) -> Result<GuardRemoval> {
    let path = project.package_manifest_path();
    output.verbose_ctx("package", &format!("Re-reading {}", path.display()));

    let removal = match PackageManifest::remove_guard(&path) {
        Ok(removal) => removal,
        Err(e) => {
            output.error(&format!("Failed to update {}: {}", package_name, e));
            return Err(e).with_context(|| format!("Failed to update {}", package_name));
        }
    };

    if removal.removed_scheme {
        output.step(&format!("✓ Removed scheme key from {}", package_name));
    }
    if removal.removed_postinstall {
        output.step("✓ Removed postinstall script");
    }

    Ok(removal)
}

fn print_next_steps(steps: &[String], output: &Output) {
    if steps.is_empty() {
        return;
    }

    output.blank();
    output.step("Next steps:");
    for (i, step) in steps.iter().enumerate() {
        output.step(&format!("   {}. {}", i + 1, step));
    }
    output.blank();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::storage::{Config, ManifestError};
    use serde_json::{json, Value};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn quiet() -> Output {
        Output::new(OutputFormat::Json, false)
    }

    fn write_json(path: &Path, value: &Value) {
        fs::write(path, serde_json::to_string(value).unwrap()).unwrap();
    }

    fn read_json(path: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    fn template_project() -> TempDir {
        let dir = TempDir::new().unwrap();
        write_json(
            &dir.path().join("package.json"),
            &json!({
                "name": "Cool-Project",
                "scheme": "template-scheme",
                "scripts": {"postinstall": "node scripts/setup.js"}
            }),
        );
        write_json(
            &dir.path().join("app.json"),
            &json!({"expo": {"name": "template", "slug": "template", "scheme": "template"}}),
        );
        dir
    }

    #[test]
    fn configures_template_project() {
        let dir = template_project();
        let project = Project::open(dir.path()).unwrap();

        let report = run(&project, &quiet()).unwrap();

        assert_eq!(
            report,
            SetupReport::Configured {
                project: ProjectIdentity::new("Cool-Project"),
                app_manifest: AppUpdate::Updated {
                    fields: vec!["name", "slug", "scheme"]
                },
                package_manifest: GuardRemoval {
                    removed_scheme: true,
                    removed_postinstall: true,
                },
            }
        );
        assert_eq!(
            read_json(&dir.path().join("app.json")),
            json!({"expo": {"name": "Cool-Project", "slug": "cool-project", "scheme": "cool-project"}})
        );
        assert_eq!(
            read_json(&dir.path().join("package.json")),
            json!({"name": "Cool-Project", "scripts": {}})
        );
    }

    #[test]
    fn second_run_is_a_no_op() {
        let dir = template_project();
        let project = Project::open(dir.path()).unwrap();

        run(&project, &quiet()).unwrap();
        let package_before = fs::read_to_string(dir.path().join("package.json")).unwrap();
        let app_before = fs::read_to_string(dir.path().join("app.json")).unwrap();

        let report = run(&project, &quiet()).unwrap();

        assert_eq!(report, SetupReport::AlreadyConfigured { scheme: None });
        assert_eq!(fs::read_to_string(dir.path().join("package.json")).unwrap(), package_before);
        assert_eq!(fs::read_to_string(dir.path().join("app.json")).unwrap(), app_before);
    }

    #[test]
    fn other_scheme_is_already_configured() {
        let dir = template_project();
        let package = json!({"name": "Cool-Project", "scheme": "cool-project"});
        write_json(&dir.path().join("package.json"), &package);
        let project = Project::open(dir.path()).unwrap();

        let report = run(&project, &quiet()).unwrap();

        assert_eq!(
            report,
            SetupReport::AlreadyConfigured {
                scheme: Some("cool-project".to_string())
            }
        );
        assert!(!matches!(report, SetupReport::Configured { .. }));
        assert_eq!(read_json(&dir.path().join("package.json")), package);
        assert_eq!(read_json(&dir.path().join("app.json"))["expo"]["name"], "template");
    }

    #[test]
    fn missing_app_manifest_still_removes_guard() {
        let dir = template_project();
        fs::remove_file(dir.path().join("app.json")).unwrap();
        let project = Project::open(dir.path()).unwrap();

        let report = run(&project, &quiet()).unwrap();

        match report {
            SetupReport::Configured { app_manifest, .. } => {
                assert_eq!(app_manifest, AppUpdate::Skipped)
            }
            other => panic!("unexpected report: {:?}", other),
        }
        assert!(!dir.path().join("app.json").exists());
        assert!(read_json(&dir.path().join("package.json")).get("scheme").is_none());
    }

    #[test]
    fn missing_package_manifest_fails() {
        let dir = TempDir::new().unwrap();
        let project = Project::open(dir.path()).unwrap();

        let err = run(&project, &quiet()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ManifestError>(),
            Some(ManifestError::MissingRequiredFile(_))
        ));
    }

    #[test]
    fn malformed_app_manifest_keeps_guard() {
        let dir = template_project();
        fs::write(dir.path().join("app.json"), "{ broken").unwrap();
        let project = Project::open(dir.path()).unwrap();

        assert!(run(&project, &quiet()).is_err());

        assert_eq!(fs::read_to_string(dir.path().join("app.json")).unwrap(), "{ broken");
        assert_eq!(read_json(&dir.path().join("package.json"))["scheme"], "template-scheme");
    }

    #[test]
    fn missing_name_fails_before_writing() {
        let dir = template_project();
        write_json(
            &dir.path().join("package.json"),
            &json!({"scheme": "template-scheme"}),
        );
        let project = Project::open(dir.path()).unwrap();

        let err = run(&project, &quiet()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ManifestError>(),
            Some(ManifestError::InvalidField { field: "name", .. })
        ));
        assert_eq!(read_json(&dir.path().join("app.json"))["expo"]["slug"], "template");
    }

    #[test]
    fn honours_configured_paths() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("mobile")).unwrap();
        write_json(
            &dir.path().join("package.json"),
            &json!({"name": "Starter App", "scheme": "starter"}),
        );
        write_json(
            &dir.path().join("mobile/app.json"),
            &json!({"expo": {"slug": "starter"}}),
        );
        let config = Config {
            app_manifest: "mobile/app.json".into(),
            template_scheme: "starter".to_string(),
            ..Config::default()
        };
        let project = Project::with_config(dir.path(), config);

        assert!(matches!(
            run(&project, &quiet()).unwrap(),
            SetupReport::Configured { .. }
        ));
        assert_eq!(
            read_json(&dir.path().join("mobile/app.json")),
            json!({"expo": {"slug": "starter-app"}})
        );
    }
}
