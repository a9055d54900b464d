//! v001: nickname → wallet links.

pub const MIGRATION_SQL: &str = "
CREATE TABLE IF NOT EXISTS links (
    nickname   TEXT PRIMARY KEY,
    wallet     TEXT NOT NULL,
    linked_at  TEXT NOT NULL
) STRICT;

CREATE INDEX IF NOT EXISTS idx_links_wallet ON links(wallet COLLATE NOCASE);
";
