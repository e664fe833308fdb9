use std::collections::BTreeMap;
use std::fmt;

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

use crate::error::RosterError;

/// An enumerated category of countable per-person metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PersonStatType {
    Authors,
    Clients,
    OwnedRepos,
    ContributedToRepos,
    Dependencies,
    Dependents,
    Defs,
    ExportedDefs,
}

/// Counts for one person, keyed by stat tag.
pub type PersonStats = BTreeMap<PersonStatType, i64>;

impl PersonStatType {
    pub const ALL: &'static [PersonStatType] = &[
        PersonStatType::Authors,
        PersonStatType::Clients,
        PersonStatType::OwnedRepos,
        PersonStatType::ContributedToRepos,
        PersonStatType::Dependencies,
        PersonStatType::Dependents,
        PersonStatType::Defs,
        PersonStatType::ExportedDefs,
    ];

    /// The tag string used on the wire and in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonStatType::Authors => "authors",
            PersonStatType::Clients => "clients",
            PersonStatType::OwnedRepos => "owned-repos",
            PersonStatType::ContributedToRepos => "contributed-to-repos",
            PersonStatType::Dependencies => "dependencies",
            PersonStatType::Dependents => "dependents",
            PersonStatType::Defs => "defs",
            PersonStatType::ExportedDefs => "exported-defs",
        }
    }

    /// Parse from the tag string. Returns None for unrecognized tags.
    pub fn from_tag(s: &str) -> Option<Self> {
        match s {
            "authors" => Some(PersonStatType::Authors),
            "clients" => Some(PersonStatType::Clients),
            "owned-repos" => Some(PersonStatType::OwnedRepos),
            "contributed-to-repos" => Some(PersonStatType::ContributedToRepos),
            "dependencies" => Some(PersonStatType::Dependencies),
            "dependents" => Some(PersonStatType::Dependents),
            "defs" => Some(PersonStatType::Defs),
            "exported-defs" => Some(PersonStatType::ExportedDefs),
            _ => None,
        }
    }
}

impl fmt::Display for PersonStatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PersonStatType {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| RosterError::UnknownStatTag(s.to_string()))
    }
}

impl ToSql for PersonStatType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for PersonStatType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Text(bytes) => {
                let s = std::str::from_utf8(bytes)
                    .map_err(|e| FromSqlError::Other(Box::new(e)))?;
                Self::from_tag(s)
                    .ok_or_else(|| FromSqlError::Other(format!("unknown stat tag '{}'", s).into()))
            }
            other => Err(FromSqlError::Other(
                format!("cannot read stat tag from {} value", other.data_type()).into(),
            )),
        }
    }
}
