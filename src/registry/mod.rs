//! Registry lookup for latest published versions
//!
//! The engine never resolves anything itself; it asks a registry for the
//! newest published version of a named crate. The lookup sits behind a
//! trait so tests can substitute fixed responses without network access.

mod client;
mod crates_io;

pub use client::HttpClient;
pub use crates_io::CratesIoRegistry;

use crate::error::RegistryError;
use async_trait::async_trait;

/// Capability answering "what is the latest published version of this crate?"
#[async_trait]
pub trait LatestVersionSource: Send + Sync {
    /// Human-readable registry name for error messages
    fn registry_name(&self) -> &'static str;

    /// Latest published version string for a crate
    async fn latest_version(&self, package: &str) -> Result<String, RegistryError>;
}
