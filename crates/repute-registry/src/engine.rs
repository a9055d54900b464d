//! LinkRegistry: owns the connection, runs migrations, implements ILinkRegistry.

use std::path::Path;

use chrono::Utc;

use repute_core::address;
use repute_core::errors::RegistryError;
use repute_core::models::LinkRecord;
use repute_core::traits::ILinkRegistry;
use repute_observability::registry_span;
use repute_observability::tracing_setup::events;

use crate::connection::RegistryConnection;
use crate::migrations;
use crate::queries::link_ops;

/// Longest nickname accepted.
pub const MAX_NICKNAME_LEN: usize = 64;

pub struct LinkRegistry {
    conn: RegistryConnection,
}

impl LinkRegistry {
    /// Open a registry backed by a file on disk.
    pub fn open(path: &Path) -> Result<Self, RegistryError> {
        let registry = Self {
            conn: RegistryConnection::open(path)?,
        };
        registry.initialize()?;
        Ok(registry)
    }

    /// Open an in-memory registry (for testing).
    pub fn open_in_memory() -> Result<Self, RegistryError> {
        let registry = Self {
            conn: RegistryConnection::open_in_memory()?,
        };
        registry.initialize()?;
        Ok(registry)
    }

    fn initialize(&self) -> Result<(), RegistryError> {
        self.conn.with_conn(migrations::run_migrations)
    }

    pub fn schema_version(&self) -> Result<u32, RegistryError> {
        self.conn.with_conn(migrations::current_version)
    }

    /// Nicknames currently linked to `wallet`.
    pub fn links_for_wallet(&self, wallet: &str) -> Result<Vec<LinkRecord>, RegistryError> {
        let wallet = wallet.trim();
        self.conn
            .with_conn(|conn| link_ops::links_for_wallet(conn, wallet))
    }

    pub fn count(&self) -> Result<u64, RegistryError> {
        self.conn.with_conn(link_ops::count_links)
    }
}

/// Trim and lowercase a nickname, rejecting empty, overlong or spaced ones.
pub fn normalize_nickname(nickname: &str) -> Result<String, RegistryError> {
    let nickname = nickname.trim().to_lowercase();
    if nickname.is_empty() {
        return Err(RegistryError::InvalidNickname {
            reason: "nickname is empty".into(),
        });
    }
    if nickname.chars().count() > MAX_NICKNAME_LEN {
        return Err(RegistryError::InvalidNickname {
            reason: format!("nickname is longer than {MAX_NICKNAME_LEN} characters"),
        });
    }
    if nickname.chars().any(char::is_whitespace) {
        return Err(RegistryError::InvalidNickname {
            reason: "nickname must not contain whitespace".into(),
        });
    }
    Ok(nickname)
}

impl ILinkRegistry for LinkRegistry {
    fn link(&self, nickname: &str, wallet: &str) -> Result<LinkRecord, RegistryError> {
        let _span = registry_span!("link").entered();
        let wallet = wallet.trim();
        if !address::is_address(wallet) {
            return Err(RegistryError::InvalidAddress {
                address: wallet.to_string(),
            });
        }
        let record = LinkRecord {
            nickname: normalize_nickname(nickname)?,
            wallet: wallet.to_string(),
            linked_at: Utc::now(),
        };
        self.conn
            .with_conn(|conn| link_ops::upsert_link(conn, &record))?;
        events::link_changed(&record.nickname, &record.wallet);
        Ok(record)
    }

    fn resolve(&self, nickname: &str) -> Result<Option<LinkRecord>, RegistryError> {
        let _span = registry_span!("resolve").entered();
        let nickname = normalize_nickname(nickname)?;
        self.conn
            .with_conn(|conn| link_ops::get_link(conn, &nickname))
    }

    fn unlink(&self, nickname: &str) -> Result<bool, RegistryError> {
        let _span = registry_span!("unlink").entered();
        let nickname = normalize_nickname(nickname)?;
        let removed = self
            .conn
            .with_conn(|conn| link_ops::delete_link(conn, &nickname))?;
        if removed {
            tracing::info!(nickname = %nickname, "nickname unlinked");
        }
        Ok(removed)
    }

    fn list(&self) -> Result<Vec<LinkRecord>, RegistryError> {
        self.conn.with_conn(link_ops::list_links)
    }
}
