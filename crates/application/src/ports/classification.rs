//! Orbit classification lookup port

use async_trait::async_trait;

use crate::ApplicationResult;

/// Resolves the orbit class of a small body by designation.
#[async_trait]
pub trait ClassificationLookup: Send + Sync {
    /// Returns the orbit-class code for `designation`.
    ///
    /// `Ok(None)` means the lookup service did not recognise the object.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup request fails or its response cannot be decoded.
    async fn orbit_class(&self, designation: &str) -> ApplicationResult<Option<String>>;
}
