//! Custom source URI checks.
//!
//! Source-aligned products configure their ingestion through a URI of the
//! form `custom://<SourceName>?url=<api-url>`, where the embedded API URL
//! carries the query parameters the source needs: a `location`, optional
//! `units`, and a base64-encoded `apikey`. A URI that reaches the platform
//! malformed fails only at job runtime, so its shape is checked here.
//!
//! API keys are credentials: every reported URI is redacted first.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use product_core::DeploymentWorkspace;
use url::Url;

use crate::LintError;

/// Validates the custom source URI of a source-aligned product.
pub struct SourceUriValidator;

impl SourceUriValidator {
    /// Creates a new source URI validator.
    pub fn new() -> Self {
        Self
    }

    /// Validates the product's source URI, if it declares one.
    pub fn validate(&self, workspace: &DeploymentWorkspace) -> Vec<LintError> {
        match &workspace.product {
            Some(product) => match &product.manifest.source {
                Some(uri) => self.check_uri(uri),
                None => Vec::new(),
            },
            None => Vec::new(),
        }
    }

    fn check_uri(&self, uri: &str) -> Vec<LintError> {
        let redacted = redact(uri);

        let parsed = match Url::parse(uri) {
            Ok(parsed) => parsed,
            Err(e) => return vec![LintError::invalid_uri(redacted, e.to_string())],
        };

        if parsed.scheme() != "custom" {
            return vec![LintError::invalid_uri(
                redacted,
                format!("expected the custom:// scheme, found {}://", parsed.scheme()),
            )];
        }

        // The whole API URL rides after a single `url=` query parameter,
        // inner `&`s and all. It may be pasted verbatim or percent-encoded.
        let rest = parsed
            .query()
            .and_then(|query| query.strip_prefix("url="))
            .filter(|rest| !rest.is_empty());

        let Some(rest) = rest else {
            return vec![LintError::MissingUriParam {
                uri: redacted,
                param: "url".to_string(),
            }];
        };

        let full_url = match urlencoding::decode(rest) {
            Ok(decoded) => decoded.into_owned(),
            Err(e) => {
                return vec![LintError::invalid_uri(
                    redacted,
                    format!("url parameter: {e}"),
                )];
            }
        };

        let api_url = match Url::parse(&full_url) {
            Ok(api_url) => api_url,
            Err(e) => {
                return vec![LintError::invalid_uri(
                    redacted,
                    format!("embedded API URL: {e}"),
                )];
            }
        };

        let mut errors = Vec::new();

        let param = |name: &str| {
            api_url
                .query_pairs()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if param("location").is_none() {
            errors.push(LintError::MissingUriParam {
                uri: redacted.clone(),
                param: "location".to_string(),
            });
        }

        match param("apikey") {
            None => errors.push(LintError::MissingUriParam {
                uri: redacted.clone(),
                param: "apikey".to_string(),
            }),
            Some(encoded) => {
                let decodes = STANDARD
                    .decode(encoded.as_bytes())
                    .ok()
                    .and_then(|bytes| String::from_utf8(bytes).ok())
                    .is_some();
                if !decodes {
                    errors.push(LintError::InvalidApiKey {
                        uri: redacted.clone(),
                    });
                }
            }
        }

        errors
    }
}

impl Default for SourceUriValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Replaces everything after `apikey=` with `***`.
///
/// Safe to call on any string; URIs without an API key come back unchanged.
pub fn redact(uri: &str) -> String {
    match uri.find("apikey=") {
        Some(index) => format!("{}apikey=***", &uri[..index]),
        None => uri.to_string(),
    }
}
