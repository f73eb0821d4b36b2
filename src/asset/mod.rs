//! Multi-source asset verification
//!
//! An asset (image, metadata document, or license) is referenced by one or
//! more URIs that must all serve byte-identical content. Verification:
//! 1. Opens each source in declaration order
//! 2. Streams it through SHA-256
//! 3. Compares each digest against the first source's digest
//!
//! The first failure aborts verification. On success the first source's
//! digest is cached on the asset and returned on later calls without
//! refetching.

mod digest;
mod source;

pub use digest::{sha256_bytes, sha256_reader};
pub use source::{DefaultSources, Location, SourceOpener};

use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors from asset verification.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset has no URIs to hash")]
    NoSources,

    #[error("unable to read asset at {uri}: {source}")]
    SourceUnreadable {
        uri: String,
        #[source]
        source: io::Error,
    },

    #[error("hash of asset at {uri} ({actual}) does not match the first source: {expected}")]
    DigestMismatch {
        uri: String,
        expected: String,
        actual: String,
    },
}

impl AssetError {
    /// The URI the error points at, if any.
    pub fn uri(&self) -> Option<&str> {
        match self {
            Self::NoSources => None,
            Self::SourceUnreadable { uri, .. } | Self::DigestMismatch { uri, .. } => Some(uri),
        }
    }
}

/// Content referenced by one or more redundant URIs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    uris: Vec<String>,

    /// Hex SHA-256 of the content, once verified or injected.
    #[serde(default, rename = "hash", skip_serializing_if = "Option::is_none")]
    digest: Option<String>,
}

impl Asset {
    pub fn new<I, S>(uris: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            uris: uris.into_iter().map(Into::into).collect(),
            digest: None,
        }
    }

    pub fn from_uri(uri: impl Into<String>) -> Self {
        Self::new([uri])
    }

    pub fn uris(&self) -> &[String] {
        &self.uris
    }

    pub fn push_uri(&mut self, uri: impl Into<String>) {
        self.uris.push(uri.into());
    }

    pub fn has_sources(&self) -> bool {
        !self.uris.is_empty()
    }

    /// The cached digest, if verification has run or one was injected.
    pub fn digest(&self) -> Option<&str> {
        self.digest.as_deref()
    }

    /// Inject a precomputed digest. It is trusted without checking the sources.
    pub fn set_digest(&mut self, digest: impl Into<String>) {
        self.digest = Some(digest.into());
    }

    /// Drop the cached digest so the next verification refetches.
    pub fn clear_digest(&mut self) {
        self.digest = None;
    }

    /// Verify using network and filesystem access with default settings.
    pub fn verify(&mut self) -> Result<&str, AssetError> {
        self.verify_with(&DefaultSources::default())
    }

    /// Verify all sources agree, opening them through `sources`.
    pub fn verify_with<O: SourceOpener + ?Sized>(&mut self, sources: &O) -> Result<&str, AssetError> {
        let digest = match self.digest.take() {
            Some(cached) => cached,
            None => compute_digest(&self.uris, sources)?,
        };
        Ok(self.digest.insert(digest).as_str())
    }
}

fn compute_digest<O: SourceOpener + ?Sized>(uris: &[String], sources: &O) -> Result<String, AssetError> {
    let (first_uri, rest) = uris.split_first().ok_or(AssetError::NoSources)?;
    let expected = hash_source(first_uri, sources)?;

    for uri in rest {
        let actual = hash_source(uri, sources)?;
        if actual != expected {
            warn!(uri = %uri, %expected, %actual, "asset sources disagree");
            return Err(AssetError::DigestMismatch {
                uri: uri.clone(),
                expected,
                actual,
            });
        }
    }

    info!(sources = uris.len(), digest = %expected, "asset verified");
    Ok(expected)
}

fn hash_source<O: SourceOpener + ?Sized>(uri: &str, sources: &O) -> Result<String, AssetError> {
    let unreadable = |source: io::Error| AssetError::SourceUnreadable {
        uri: uri.to_string(),
        source,
    };

    let location = Location::classify(uri);
    let reader = sources.open(&location).map_err(unreadable)?;
    // The reader is consumed here and dropped before the next source opens.
    let digest = sha256_reader(reader).map_err(unreadable)?;

    debug!(uri, remote = location.is_remote(), %digest, "hashed asset source");
    Ok(digest)
}
