//! NFTs and collections as mint inputs
//!
//! An NFT references three assets: the content itself, its metadata
//! document, and its license. Each is verified independently before the
//! hashes are handed to a mint request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::asset::{Asset, AssetError, DefaultSources, SourceOpener};

/// Which of an NFT's assets an error or hash belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetRole {
    Data,
    Metadata,
    License,
}

impl fmt::Display for AssetRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Data => write!(f, "data"),
            Self::Metadata => write!(f, "metadata"),
            Self::License => write!(f, "license"),
        }
    }
}

/// Verification failure for one of an NFT's assets.
#[derive(Debug, Error)]
#[error("{role} asset: {source}")]
pub struct NftError {
    pub role: AssetRole,
    #[source]
    pub source: AssetError,
}

/// Errors from verifying a whole collection.
#[derive(Debug, Error)]
pub enum CollectionError {
    #[error("NFT {index} in collection {collection}: {source}")]
    Nft {
        collection: String,
        index: usize,
        #[source]
        source: NftError,
    },

    #[error("royalty {0} is outside 0..=100 percent")]
    InvalidRoyalty(f64),
}

/// Verified hashes for one NFT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftHashes {
    pub data_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_hash: Option<String>,
}

/// A mintable NFT.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nft {
    pub data: Asset,
    #[serde(default)]
    pub metadata: Asset,
    #[serde(default)]
    pub license: Asset,
    /// Transaction fee in mojos.
    #[serde(default)]
    pub fee: u64,
    /// Royalty as a percentage of resale price.
    #[serde(default)]
    pub royalty: f64,
}

impl Nft {
    pub fn new(data: Asset) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    /// Royalty in basis points (1% = 100), as mint requests expect.
    ///
    /// Returns `None` when the royalty is not a percentage in `0..=100`.
    pub fn royalty_basis_points(&self) -> Option<u16> {
        if (0.0..=100.0).contains(&self.royalty) {
            Some((self.royalty * 100.0).round() as u16)
        } else {
            None
        }
    }

    /// Verify every asset using default network and filesystem access.
    pub fn verify(&mut self) -> Result<NftHashes, NftError> {
        self.verify_with(&DefaultSources::default())
    }

    /// Verify the data asset, then metadata, then license.
    ///
    /// The data asset must have sources. Metadata and license are optional
    /// and yield no hash when they have no URIs.
    pub fn verify_with<O: SourceOpener + ?Sized>(&mut self, sources: &O) -> Result<NftHashes, NftError> {
        let data_hash = verify_role(&mut self.data, AssetRole::Data, sources)?;
        let metadata_hash = verify_optional(&mut self.metadata, AssetRole::Metadata, sources)?;
        let license_hash = verify_optional(&mut self.license, AssetRole::License, sources)?;

        Ok(NftHashes {
            data_hash,
            metadata_hash,
            license_hash,
        })
    }
}

fn verify_role<O: SourceOpener + ?Sized>(
    asset: &mut Asset,
    role: AssetRole,
    sources: &O,
) -> Result<String, NftError> {
    asset
        .verify_with(sources)
        .map(str::to_string)
        .map_err(|source| NftError { role, source })
}

fn verify_optional<O: SourceOpener + ?Sized>(
    asset: &mut Asset,
    role: AssetRole,
    sources: &O,
) -> Result<Option<String>, NftError> {
    if !asset.has_sources() && asset.digest().is_none() {
        return Ok(None);
    }
    verify_role(asset, role, sources).map(Some)
}

/// A set of NFTs minted together with shared fee and royalty defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NftCollection {
    pub id: String,
    #[serde(default)]
    pub nfts: Vec<Nft>,
    #[serde(default)]
    pub fee: u64,
    #[serde(default)]
    pub royalty: f64,
}

impl NftCollection {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Add an NFT, filling in the collection's fee and royalty where unset.
    pub fn push(&mut self, mut nft: Nft) {
        if nft.fee == 0 {
            nft.fee = self.fee;
        }
        if nft.royalty == 0.0 {
            nft.royalty = self.royalty;
        }
        self.nfts.push(nft);
    }

    /// Verify each NFT in order, stopping at the first failure.
    pub fn verify_with<O: SourceOpener + ?Sized>(
        &mut self,
        sources: &O,
    ) -> Result<Vec<NftHashes>, CollectionError> {
        if !(0.0..=100.0).contains(&self.royalty) {
            return Err(CollectionError::InvalidRoyalty(self.royalty));
        }

        let mut hashes = Vec::with_capacity(self.nfts.len());
        for (index, nft) in self.nfts.iter_mut().enumerate() {
            let verified = nft.verify_with(sources).map_err(|source| CollectionError::Nft {
                collection: self.id.clone(),
                index,
                source,
            })?;
            hashes.push(verified);
        }
        Ok(hashes)
    }
}

/// Timestamped verification result, as printed by the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationReport<T> {
    pub verified_at: DateTime<Utc>,
    #[serde(flatten)]
    pub result: T,
}

impl<T> VerificationReport<T> {
    pub fn new(result: T) -> Self {
        Self {
            verified_at: Utc::now(),
            result,
        }
    }
}
