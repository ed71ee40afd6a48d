//! Error types for lint rules.

use thiserror::Error;

/// Findings a lint rule can raise.
#[derive(Debug, Error)]
pub enum LintError {
    /// A bundle resource points at a file that does not exist
    #[error("Resource '{id}': file '{file}' does not exist")]
    MissingResourceFile { id: String, file: String },

    /// Two bundle resources share an id
    #[error("Duplicate resource id: {0}")]
    DuplicateResourceId(String),

    /// A resource depends on an id no resource declares
    #[error("Resource '{id}' depends on unknown resource '{dependency}'")]
    DanglingDependency { id: String, dependency: String },

    /// A resource file is not a YAML manifest
    #[error("Resource '{id}': file '{file}' is not a YAML manifest")]
    NonYamlResource { id: String, file: String },

    /// A resource path points outside the workspace
    #[error("Resource '{id}': path '{file}' escapes the workspace directory")]
    PathEscapesWorkspace { id: String, file: String },

    /// The workspace has no bundle manifest
    #[error("Workspace has no bundle manifest")]
    MissingBundle,

    /// A referenced secret was never declared
    #[error("Secret '{name}' ({purpose}) is referenced but never declared")]
    UnknownSecret { name: String, purpose: String },

    /// A declared secret is never referenced
    #[error("Secret '{0}' is declared but never referenced")]
    UnusedSecret(String),

    /// A placeholder value survived where a real identifier is required
    #[error("Field '{field}' still holds the placeholder '{placeholder}'")]
    SurvivingPlaceholder { field: String, placeholder: String },

    /// An interpolation token was never substituted
    #[error("Field '{field}' holds an unresolved token: {token}")]
    UnresolvedToken { field: String, token: String },

    /// A required field is empty
    #[error("Field '{0}' must not be empty")]
    EmptyField(String),

    /// The declared semantic-model folder does not exist
    #[error("Semantic-model folder '{0}' does not exist")]
    MissingSemanticModel(String),

    /// A conventional semantic-model subfolder is absent
    #[error("Semantic-model folder '{model}' is missing its '{subfolder}/' subfolder")]
    MissingModelSubfolder { model: String, subfolder: String },

    /// An aggregate product declares no semantic model
    #[error("Aggregate-aligned product '{0}' declares no semantic model")]
    NoSemanticModelDeclared(String),

    /// A quality check has an empty definition
    #[error("Quality check #{0} has an empty definition")]
    EmptyCheckDefinition(usize),

    /// A quality suite declares no checks
    #[error("Quality manifest '{0}' declares no checks")]
    NoChecksDeclared(String),

    /// The custom source URI is malformed
    #[error("Invalid source URI '{uri}': {reason}")]
    InvalidSourceUri { uri: String, reason: String },

    /// The custom source URI lacks a required query parameter
    #[error("Source URI '{uri}' is missing the '{param}' parameter")]
    MissingUriParam { uri: String, param: String },

    /// The API key embedded in the source URI is not valid base64
    #[error("Source URI '{uri}' carries an API key that is not valid base64")]
    InvalidApiKey { uri: String },
}

impl LintError {
    /// Creates a new missing-resource-file error.
    pub fn missing_file(id: impl Into<String>, file: impl Into<String>) -> Self {
        Self::MissingResourceFile {
            id: id.into(),
            file: file.into(),
        }
    }

    /// Creates a new dangling-dependency error.
    pub fn dangling(id: impl Into<String>, dependency: impl Into<String>) -> Self {
        Self::DanglingDependency {
            id: id.into(),
            dependency: dependency.into(),
        }
    }

    /// Creates a new unknown-secret error.
    pub fn unknown_secret(name: impl Into<String>, purpose: impl Into<String>) -> Self {
        Self::UnknownSecret {
            name: name.into(),
            purpose: purpose.into(),
        }
    }

    /// Creates a new surviving-placeholder error.
    pub fn placeholder(field: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self::SurvivingPlaceholder {
            field: field.into(),
            placeholder: placeholder.into(),
        }
    }

    /// Creates a new invalid-source-URI error. The URI is expected to be
    /// redacted by the caller before it lands here.
    pub fn invalid_uri(uri: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSourceUri {
            uri: uri.into(),
            reason: reason.into(),
        }
    }
}
