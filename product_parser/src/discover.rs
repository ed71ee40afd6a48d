//! Deployment workspace discovery.
//!
//! Scans a deployment directory for manifest files, parses each one, and
//! assembles the `DeploymentWorkspace` the lint engine and the deployment
//! planner operate on.

use std::path::Path;

use product_core::{DeploymentWorkspace, Located, Manifest, ManifestKind};

use crate::{parse_manifest, ParserError, Result};

/// Discover the manifest set of a deployment directory.
///
/// Scans the top level of `dir` for `.yaml`/`.yml` files and classifies each
/// by its `kind` key. YAML files without a recognized `kind` are skipped:
/// deployment directories routinely hold resource manifests (ingestion jobs,
/// quality workflows) that belong to the external platform, not to the
/// deployer. Files are visited in name order so duplicate reports are
/// deterministic.
///
/// At most one bundle, quality, product, and scanner manifest may be present;
/// a second one of any of these kinds is an error.
///
/// # Example
///
/// ```no_run
/// use product_parser::discover_workspace;
/// use std::path::Path;
///
/// let workspace = discover_workspace(Path::new("data-products/source")).unwrap();
/// println!("Found {} manifests", workspace.manifest_count());
/// ```
pub fn discover_workspace(dir: &Path) -> Result<DeploymentWorkspace> {
    if !dir.is_dir() {
        return Err(ParserError::NotADirectory(dir.display().to_string()));
    }

    let mut files: Vec<_> = std::fs::read_dir(dir)?
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && has_yaml_extension(path))
        .collect();
    files.sort();

    let mut workspace = DeploymentWorkspace::new(dir);

    for path in files {
        let content = std::fs::read_to_string(&path)?;
        let Some(manifest) = classify(&content)? else {
            continue;
        };

        match manifest {
            Manifest::Bundle(m) => {
                if let Some(existing) = &workspace.bundle {
                    return Err(duplicate(ManifestKind::Bundle, &existing.path, &path));
                }
                workspace.bundle = Some(Located::new(&path, m));
            }
            Manifest::Quality(m) => {
                if let Some(existing) = &workspace.quality {
                    return Err(duplicate(ManifestKind::Quality, &existing.path, &path));
                }
                workspace.quality = Some(Located::new(&path, m));
            }
            Manifest::Product(m) => {
                if let Some(existing) = &workspace.product {
                    return Err(duplicate(ManifestKind::Product, &existing.path, &path));
                }
                workspace.product = Some(Located::new(&path, m));
            }
            Manifest::Scanner(m) => {
                if let Some(existing) = &workspace.scanner {
                    return Err(duplicate(ManifestKind::Scanner, &existing.path, &path));
                }
                workspace.scanner = Some(Located::new(&path, m));
            }
            Manifest::Secret(m) => {
                workspace.secrets.push(Located::new(&path, m));
            }
        }
    }

    Ok(workspace)
}

fn has_yaml_extension(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml")
    )
}

/// Parses a file's content if it carries a recognized `kind`, skipping
/// foreign YAML documents. Malformed YAML is an error either way.
fn classify(content: &str) -> Result<Option<Manifest>> {
    let value: serde_yaml_ng::Value = serde_yaml_ng::from_str(content)?;

    let kind = value.get("kind").and_then(|k| k.as_str());
    let recognized = matches!(
        kind,
        Some("bundle" | "quality" | "product" | "scanner" | "secret")
    );
    if !recognized {
        return Ok(None);
    }

    parse_manifest(content).map(Some)
}

fn duplicate(kind: ManifestKind, first: &Path, second: &Path) -> ParserError {
    ParserError::DuplicateManifest {
        kind,
        first: first.display().to_string(),
        second: second.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) {
        std::fs::write(dir.path().join(name), content).unwrap();
    }

    const BUNDLE: &str = r#"
kind: bundle
name: weather-source-bundle
resources:
  - id: ingestion
    file: resources/ingestion.yaml
"#;

    const PRODUCT: &str = r#"
kind: product
name: weather-source
alignment: source
workspace: public
compute: runnable-default
cluster: minervaa
"#;

    const SECRET: &str = r#"
kind: secret
name: weather-api-cred
purpose: api
"#;

    #[test]
    fn test_discover_full_workspace() {
        let dir = TempDir::new().unwrap();
        write(&dir, "bundle.yaml", BUNDLE);
        write(&dir, "data-product.yaml", PRODUCT);
        write(&dir, "secret.yaml", SECRET);
        write(
            &dir,
            "scanner.yaml",
            r#"
kind: scanner
name: weather-scanner
workspace: public
data_product: weather-source
"#,
        );

        let workspace = discover_workspace(dir.path()).expect("discovery failed");

        assert!(workspace.bundle.is_some());
        assert!(workspace.product.is_some());
        assert!(workspace.scanner.is_some());
        assert!(workspace.quality.is_none());
        assert_eq!(workspace.declared_secrets(), vec!["weather-api-cred"]);
        assert_eq!(workspace.manifest_count(), 4);
        assert!(workspace.is_deployable());
    }

    #[test]
    fn test_discover_skips_foreign_yaml() {
        let dir = TempDir::new().unwrap();
        write(&dir, "bundle.yaml", BUNDLE);
        write(
            &dir,
            "flare-job.yaml",
            r#"
kind: Workflow
spec:
  driver: flare
"#,
        );
        write(&dir, "notes.yaml", "just: a scratch file\n");

        let workspace = discover_workspace(dir.path()).expect("discovery failed");

        assert_eq!(workspace.manifest_count(), 1);
        assert!(workspace.bundle.is_some());
    }

    #[test]
    fn test_discover_ignores_subdirectories() {
        let dir = TempDir::new().unwrap();
        write(&dir, "bundle.yaml", BUNDLE);
        std::fs::create_dir(dir.path().join("resources")).unwrap();
        std::fs::write(dir.path().join("resources/other-product.yaml"), PRODUCT).unwrap();

        let workspace = discover_workspace(dir.path()).expect("discovery failed");

        assert!(workspace.product.is_none());
        assert_eq!(workspace.manifest_count(), 1);
    }

    #[test]
    fn test_discover_duplicate_bundle() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a-bundle.yaml", BUNDLE);
        write(&dir, "b-bundle.yaml", BUNDLE);

        let result = discover_workspace(dir.path());
        assert!(matches!(
            result.unwrap_err(),
            ParserError::DuplicateManifest { .. }
        ));
    }

    #[test]
    fn test_discover_malformed_yaml_is_an_error() {
        let dir = TempDir::new().unwrap();
        write(&dir, "broken.yaml", "kind: [unterminated\n");

        let result = discover_workspace(dir.path());
        assert!(matches!(result.unwrap_err(), ParserError::YamlError(_)));
    }

    #[test]
    fn test_discover_not_a_directory() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("bundle.yaml");
        std::fs::write(&file, BUNDLE).unwrap();

        let result = discover_workspace(&file);
        assert!(matches!(result.unwrap_err(), ParserError::NotADirectory(_)));
    }

    #[test]
    fn test_discover_multiple_secrets() {
        let dir = TempDir::new().unwrap();
        write(&dir, "api-secret.yaml", SECRET);
        write(
            &dir,
            "git-secret.yaml",
            r#"
kind: secret
name: gitrepocred-r
purpose: git
"#,
        );

        let workspace = discover_workspace(dir.path()).expect("discovery failed");
        assert_eq!(workspace.secrets.len(), 2);
    }
}
