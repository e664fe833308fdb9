use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use crate::error::{RosterError, RosterResult};
use crate::model::{PersonSpec, PersonStatType, PersonStats};

/// A stored stats snapshot together with the time it was fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub stats: PersonStats,
    pub fetched_at: DateTime<Utc>,
}

/// Replace the stored stats for `spec` with `stats`, stamped with the
/// current time. Rows are keyed by the spec's path component.
pub fn upsert_stats(conn: &Connection, spec: &PersonSpec, stats: &PersonStats) -> RosterResult<()> {
    let person = spec.path_component()?;
    let fetched_at = Utc::now().to_rfc3339();

    conn.execute(
        "DELETE FROM person_stats WHERE person = ?1",
        params![person],
    )?;
    for (stat, count) in stats {
        conn.execute(
            "INSERT INTO person_stats (person, stat, count, fetched_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![person, stat, count, fetched_at],
        )?;
    }

    Ok(())
}

/// The stored stats for `spec`. Empty map when nothing is stored.
pub fn find_stats(conn: &Connection, spec: &PersonSpec) -> RosterResult<PersonStats> {
    let person = spec.path_component()?;
    let mut stmt = conn.prepare(
        "SELECT stat, count FROM person_stats WHERE person = ?1 ORDER BY stat",
    )?;

    let stats = stmt
        .query_map(params![person], |row| {
            Ok((row.get::<_, PersonStatType>(0)?, row.get::<_, i64>(1)?))
        })?
        .collect::<Result<PersonStats, _>>()?;

    Ok(stats)
}

/// The stored snapshot for `spec` with its fetch time, or None when
/// nothing is stored.
pub fn find_snapshot(conn: &Connection, spec: &PersonSpec) -> RosterResult<Option<StatsSnapshot>> {
    let person = spec.path_component()?;

    let result = conn.query_row(
        "SELECT fetched_at FROM person_stats WHERE person = ?1 LIMIT 1",
        params![person],
        |row| row.get::<_, String>(0),
    );

    let fetched_str = match result {
        Ok(s) => s,
        Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let fetched_at = DateTime::parse_from_rfc3339(&fetched_str)
        .map_err(|e| RosterError::Other(format!("Invalid fetched_at timestamp: {}", e)))?
        .with_timezone(&Utc);
    let stats = find_stats(conn, spec)?;

    Ok(Some(StatsSnapshot { stats, fetched_at }))
}

pub fn delete_stats(conn: &Connection, spec: &PersonSpec) -> RosterResult<()> {
    let person = spec.path_component()?;
    conn.execute(
        "DELETE FROM person_stats WHERE person = ?1",
        params![person],
    )?;
    Ok(())
}
