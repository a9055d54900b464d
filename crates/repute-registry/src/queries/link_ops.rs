//! Link CRUD. Callers pass already-normalized nicknames.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

use repute_core::errors::RegistryError;
use repute_core::models::LinkRecord;

use crate::to_registry_err;

/// Insert or replace the link for `nickname`.
pub fn upsert_link(conn: &Connection, record: &LinkRecord) -> Result<(), RegistryError> {
    conn.execute(
        "INSERT INTO links (nickname, wallet, linked_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(nickname) DO UPDATE SET wallet = excluded.wallet, linked_at = excluded.linked_at",
        params![record.nickname, record.wallet, record.linked_at.to_rfc3339()],
    )
    .map_err(|e| to_registry_err(e.to_string()))?;
    Ok(())
}

pub fn get_link(conn: &Connection, nickname: &str) -> Result<Option<LinkRecord>, RegistryError> {
    conn.query_row(
        "SELECT nickname, wallet, linked_at FROM links WHERE nickname = ?1",
        params![nickname],
        raw_row,
    )
    .optional()
    .map_err(|e| to_registry_err(e.to_string()))?
    .map(into_record)
    .transpose()
}

/// Delete the link. Returns whether a row existed.
pub fn delete_link(conn: &Connection, nickname: &str) -> Result<bool, RegistryError> {
    let n = conn
        .execute("DELETE FROM links WHERE nickname = ?1", params![nickname])
        .map_err(|e| to_registry_err(e.to_string()))?;
    Ok(n > 0)
}

/// All links, ordered by nickname.
pub fn list_links(conn: &Connection) -> Result<Vec<LinkRecord>, RegistryError> {
    query_many(
        conn,
        "SELECT nickname, wallet, linked_at FROM links ORDER BY nickname",
        params![],
    )
}

/// Links pointing at `wallet`, compared case-insensitively.
pub fn links_for_wallet(conn: &Connection, wallet: &str) -> Result<Vec<LinkRecord>, RegistryError> {
    query_many(
        conn,
        "SELECT nickname, wallet, linked_at FROM links
         WHERE wallet = ?1 COLLATE NOCASE ORDER BY nickname",
        params![wallet],
    )
}

pub fn count_links(conn: &Connection) -> Result<u64, RegistryError> {
    conn.query_row("SELECT COUNT(*) FROM links", [], |row| row.get::<_, i64>(0))
        .map(|n| n.max(0) as u64)
        .map_err(|e| to_registry_err(e.to_string()))
}

fn query_many(
    conn: &Connection,
    sql: &str,
    params: &[&dyn rusqlite::ToSql],
) -> Result<Vec<LinkRecord>, RegistryError> {
    let mut stmt = conn
        .prepare(sql)
        .map_err(|e| to_registry_err(e.to_string()))?;
    let rows = stmt
        .query_map(params, raw_row)
        .map_err(|e| to_registry_err(e.to_string()))?;

    let mut out = Vec::new();
    for row in rows {
        let raw = row.map_err(|e| to_registry_err(e.to_string()))?;
        out.push(into_record(raw)?);
    }
    Ok(out)
}

type RawLink = (String, String, String);

fn raw_row(row: &Row<'_>) -> rusqlite::Result<RawLink> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?))
}

fn into_record((nickname, wallet, linked_at): RawLink) -> Result<LinkRecord, RegistryError> {
    let linked_at = DateTime::parse_from_rfc3339(&linked_at)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| to_registry_err(format!("bad linked_at for {nickname}: {e}")))?;
    Ok(LinkRecord {
        nickname,
        wallet,
        linked_at,
    })
}
