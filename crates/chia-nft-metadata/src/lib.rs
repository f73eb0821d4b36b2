//! CHIP-0007 NFT Metadata Types
//!
//! Models the Chia NFT metadata document and the fields whose wire form
//! is ambiguous under the schema: attribute types and values that may be
//! integers or strings, and a sensitive-content marker that may be a
//! boolean or a list of categories. Every such field round-trips without
//! losing its original shape.

mod ambiguous;
pub mod attribute;
pub mod collection;
pub mod error;
pub mod metadata;
pub mod sensitive;

pub use attribute::Attribute;
pub use collection::{Collection, CollectionAttribute};
pub use error::{CodecError, JsonKind};
pub use metadata::{Metadata, CHIP_0007_FORMAT};
pub use sensitive::SensitiveContent;
