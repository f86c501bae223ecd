//! npm registry client
//!
//! Fetches the package metadata document for dtop and extracts the
//! `dist-tags.latest` version identifier. One blocking GET with a fixed
//! 5-second timeout; no retry.

use std::time::Duration;

use serde::Deserialize;

use crate::error::{DtopError, Result};

/// Registry metadata URL for the dtop package
pub const PACKAGE_URL: &str = "https://registry.npmjs.org/dtop";

/// Overall timeout for the metadata fetch
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Deserialize)]
struct PackageMetadata {
    #[serde(rename = "dist-tags")]
    dist_tags: DistTags,
}

#[derive(Debug, Deserialize)]
struct DistTags {
    latest: String,
}

/// Fetch the latest published version tag from a registry metadata URL
pub fn fetch_latest(url: &str) -> Result<String> {
    let agent = ureq::AgentBuilder::new().timeout(FETCH_TIMEOUT).build();
    let body = agent
        .get(url)
        .call()
        .map_err(|e| DtopError::Registry(e.to_string()))?
        .into_string()?;
    parse_latest(&body)
}

/// Extract `dist-tags.latest` from a registry metadata document
fn parse_latest(body: &str) -> Result<String> {
    let metadata: PackageMetadata = serde_json::from_str(body)?;
    Ok(metadata.dist_tags.latest)
}
