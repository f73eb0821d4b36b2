//! Chia NFT asset and metadata tooling
//!
//! Establishes the integrity of NFT assets referenced from redundant
//! sources, and models CHIP-0007 metadata with lossless handling of its
//! schema-ambiguous fields (re-exported from `chia-nft-metadata`).

pub mod asset;
pub mod config;
pub mod nft;

pub use asset::{Asset, AssetError, DefaultSources, Location, SourceOpener};
pub use config::{ConfigError, FetchConfig};
pub use nft::{AssetRole, CollectionError, Nft, NftCollection, NftError, NftHashes, VerificationReport};

pub use chia_nft_metadata as metadata;
