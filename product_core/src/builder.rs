//! Builder pattern for creating deployment manifests.
//!
//! This module provides ergonomic builders for constructing bundles and
//! products with a fluent API.

use crate::{
    Alignment, BundleManifest, BundleResource, BundleWorkspace, CommandSpec, ProductManifest,
    SecretPurpose, SecretRef,
};

/// Builder for creating a `BundleManifest`.
///
/// # Example
///
/// ```rust
/// use product_core::BundleBuilder;
///
/// let bundle = BundleBuilder::new("weather-source-bundle")
///     .version("1.0.0")
///     .description("Resources for the weather source product")
///     .workspace("public")
///     .resource("ingestion", "resources/ingestion.yaml")
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct BundleBuilder {
    name: Option<String>,
    version: Option<String>,
    description: Option<String>,
    workspaces: Vec<BundleWorkspace>,
    resources: Vec<BundleResource>,
}

impl BundleBuilder {
    /// Creates a new bundle builder with the required name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            version: Some("1.0.0".to_string()),
            ..Default::default()
        }
    }

    /// Sets the bundle version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the bundle description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a target workspace by name.
    pub fn workspace(mut self, name: impl Into<String>) -> Self {
        self.workspaces.push(BundleWorkspace {
            name: name.into(),
            description: None,
            layer: None,
        });
        self
    }

    /// Adds a resource entry with an id and a relative file path.
    pub fn resource(mut self, id: impl Into<String>, file: impl Into<String>) -> Self {
        self.resources.push(BundleResource {
            id: id.into(),
            file: file.into(),
            workspace: None,
            depends_on: Vec::new(),
        });
        self
    }

    /// Adds a fully specified resource entry.
    pub fn resource_entry(mut self, resource: BundleResource) -> Self {
        self.resources.push(resource);
        self
    }

    /// Builds the bundle manifest.
    ///
    /// # Panics
    ///
    /// Panics if the name is not set.
    pub fn build(self) -> BundleManifest {
        BundleManifest {
            name: self.name.expect("name is required"),
            version: self.version,
            description: self.description,
            workspaces: self.workspaces,
            resources: self.resources,
        }
    }
}

/// Builder for creating a `ProductManifest`.
///
/// # Example
///
/// ```rust
/// use product_core::{Alignment, ProductBuilder, SecretPurpose};
///
/// let product = ProductBuilder::new("weather-source", Alignment::Source)
///     .purpose("Realtime weather ingestion")
///     .workspace("public")
///     .compute("runnable-default")
///     .cluster("minervaa")
///     .secret("weather-api-cred", SecretPurpose::Api)
///     .build();
/// ```
#[derive(Debug)]
pub struct ProductBuilder {
    name: String,
    version: Option<String>,
    purpose: Option<String>,
    alignment: Alignment,
    workspace: Option<String>,
    compute: Option<String>,
    cluster: Option<String>,
    collaborators: Vec<String>,
    secrets: Vec<SecretRef>,
    source: Option<String>,
    semantic_model: Option<String>,
    command: Option<CommandSpec>,
}

impl ProductBuilder {
    /// Creates a new product builder with the required name and alignment.
    pub fn new(name: impl Into<String>, alignment: Alignment) -> Self {
        Self {
            name: name.into(),
            version: Some("1.0.0".to_string()),
            purpose: None,
            alignment,
            workspace: None,
            compute: None,
            cluster: None,
            collaborators: Vec::new(),
            secrets: Vec::new(),
            source: None,
            semantic_model: None,
            command: None,
        }
    }

    /// Sets the product version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the product purpose.
    pub fn purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = Some(purpose.into());
        self
    }

    /// Sets the target workspace.
    pub fn workspace(mut self, workspace: impl Into<String>) -> Self {
        self.workspace = Some(workspace.into());
        self
    }

    /// Sets the compute profile.
    pub fn compute(mut self, compute: impl Into<String>) -> Self {
        self.compute = Some(compute.into());
        self
    }

    /// Sets the deployment cluster.
    pub fn cluster(mut self, cluster: impl Into<String>) -> Self {
        self.cluster = Some(cluster.into());
        self
    }

    /// Adds a collaborator.
    pub fn collaborator(mut self, collaborator: impl Into<String>) -> Self {
        self.collaborators.push(collaborator.into());
        self
    }

    /// Adds a secret reference.
    pub fn secret(mut self, name: impl Into<String>, purpose: SecretPurpose) -> Self {
        self.secrets.push(SecretRef {
            name: name.into(),
            purpose,
        });
        self
    }

    /// Sets the custom source URI.
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the semantic-model folder.
    pub fn semantic_model(mut self, path: impl Into<String>) -> Self {
        self.semantic_model = Some(path.into());
        self
    }

    /// Sets the apply command.
    pub fn command(mut self, command: CommandSpec) -> Self {
        self.command = Some(command);
        self
    }

    /// Builds the product manifest.
    ///
    /// # Panics
    ///
    /// Panics if required fields (workspace, compute, cluster) are not set.
    pub fn build(self) -> ProductManifest {
        ProductManifest {
            name: self.name,
            version: self.version,
            purpose: self.purpose,
            alignment: self.alignment,
            workspace: self.workspace.expect("workspace is required"),
            compute: self.compute.expect("compute is required"),
            cluster: self.cluster.expect("cluster is required"),
            collaborators: self.collaborators,
            secrets: self.secrets,
            source: self.source,
            semantic_model: self.semantic_model,
            command: self.command,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bundle_builder_defaults() {
        let bundle = BundleBuilder::new("test-bundle").build();
        assert_eq!(bundle.name, "test-bundle");
        assert_eq!(bundle.version, Some("1.0.0".to_string()));
        assert!(bundle.resources.is_empty());
        assert!(bundle.workspaces.is_empty());
    }

    #[test]
    fn test_bundle_builder_resources() {
        let bundle = BundleBuilder::new("test-bundle")
            .workspace("public")
            .resource("a", "resources/a.yaml")
            .resource("b", "resources/b.yaml")
            .build();

        assert_eq!(bundle.resources.len(), 2);
        assert_eq!(bundle.resources[0].id, "a");
        assert_eq!(bundle.resources[1].file, "resources/b.yaml");
        assert_eq!(bundle.workspaces[0].name, "public");
    }

    #[test]
    fn test_product_builder() {
        let product = ProductBuilder::new("weather-source", Alignment::Source)
            .purpose("Realtime weather ingestion")
            .workspace("public")
            .compute("runnable-default")
            .cluster("minervaa")
            .collaborator("ops-team")
            .secret("weather-api-cred", SecretPurpose::Api)
            .secret("gitrepocred-r", SecretPurpose::Git)
            .build();

        assert_eq!(product.name, "weather-source");
        assert_eq!(product.alignment, Alignment::Source);
        assert_eq!(product.workspace, "public");
        assert_eq!(product.secrets.len(), 2);
        assert_eq!(product.secrets[1].purpose, SecretPurpose::Git);
    }

    #[test]
    #[should_panic(expected = "workspace is required")]
    fn test_product_builder_missing_workspace() {
        ProductBuilder::new("incomplete", Alignment::Aggregate).build();
    }
}
