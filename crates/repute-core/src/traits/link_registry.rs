use crate::errors::RegistryError;
use crate::models::LinkRecord;

/// Persistent nickname → wallet mapping.
pub trait ILinkRegistry: Send + Sync {
    /// Link (or relink) a nickname to a wallet. Returns the stored record.
    fn link(&self, nickname: &str, wallet: &str) -> Result<LinkRecord, RegistryError>;
    fn resolve(&self, nickname: &str) -> Result<Option<LinkRecord>, RegistryError>;
    /// Remove a link. Returns whether one existed.
    fn unlink(&self, nickname: &str) -> Result<bool, RegistryError>;
    fn list(&self) -> Result<Vec<LinkRecord>, RegistryError>;
}
