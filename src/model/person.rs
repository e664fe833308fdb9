use serde::{Deserialize, Serialize};

use crate::error::{RosterError, RosterResult};

/// Identifies a person by email, login, or numeric UID. An empty string
/// or zero UID means "not specified"; at least one of the three must be
/// set before the spec can be encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonSpec {
    /// Email address. May be obfuscated to protect privacy.
    #[serde(default)]
    pub email: String,
    /// Account login.
    #[serde(default)]
    pub login: String,
    /// Numeric user ID. Zero for transient people.
    #[serde(default)]
    pub uid: u32,
}

impl PersonSpec {
    pub fn by_email(email: String) -> Self {
        Self {
            email,
            ..Default::default()
        }
    }

    pub fn by_login(login: String) -> Self {
        Self {
            login,
            ..Default::default()
        }
    }

    pub fn by_uid(uid: u32) -> Self {
        Self {
            uid,
            ..Default::default()
        }
    }

    /// The URL path segment that addresses this person: the email if set,
    /// else the login, else `$` followed by the UID in decimal.
    pub fn path_component(&self) -> RosterResult<String> {
        if !self.email.is_empty() {
            return Ok(self.email.clone());
        }
        if !self.login.is_empty() {
            return Ok(self.login.clone());
        }
        if self.uid > 0 {
            return Ok(format!("${}", self.uid));
        }
        Err(RosterError::EmptySpec)
    }

    /// Parse a path segment produced by [`path_component`](Self::path_component).
    /// A `$`-prefixed segment must carry a decimal UID; a segment containing
    /// `@` is an email; anything else is a login.
    pub fn parse(path_component: &str) -> RosterResult<Self> {
        if let Some(digits) = path_component.strip_prefix('$') {
            let uid = digits.parse().map_err(|e| RosterError::InvalidUid {
                input: path_component.to_string(),
                source: e,
            })?;
            return Ok(Self::by_uid(uid));
        }
        if path_component.contains('@') {
            return Ok(Self::by_email(path_component.to_string()));
        }
        Ok(Self::by_login(path_component.to_string()))
    }
}

impl std::str::FromStr for PersonSpec {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A registered user, or a committer whose email never resolved to an
/// account. For resolved users both login and UID are set; for transient
/// people only the email is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// The identifier this person was resolved from.
    #[serde(flatten)]
    pub spec: PersonSpec,
    /// Full display name, possibly empty.
    #[serde(default, rename = "fullName")]
    pub full_name: String,
    /// Base URL of the avatar image, possibly empty.
    #[serde(default, rename = "avatarURL")]
    pub avatar_url: String,
}

impl Person {
    /// The login if set, else the part of the email before the `@`,
    /// else `"(anonymous)"`.
    pub fn short_name(&self) -> &str {
        if !self.spec.login.is_empty() {
            return &self.spec.login;
        }
        match self.spec.email.find('@') {
            Some(at) => &self.spec.email[..at],
            None => "(anonymous)",
        }
    }

    /// True if this person was synthesized on the fly from a commit email
    /// and is not a registered account.
    pub fn transient(&self) -> bool {
        self.spec.uid == 0
    }

    /// True if the person has a profile page. Transient people do not.
    pub fn has_profile(&self) -> bool {
        !self.transient()
    }

    /// Avatar URL carrying the requested width (in pixels) as an `s`
    /// query parameter. Empty if no avatar is set.
    pub fn avatar_url_of_size(&self, width: u32) -> String {
        if self.avatar_url.is_empty() {
            return String::new();
        }
        let sep = if self.avatar_url.contains('?') { '&' } else { '?' };
        format!("{}{}s={}", self.avatar_url, sep, width)
    }
}
