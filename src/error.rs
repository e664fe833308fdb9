use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("empty person spec: at least one of email, login, or uid must be set")]
    EmptySpec,

    #[error("invalid uid in path component '{input}'")]
    InvalidUid {
        input: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("unknown stat tag '{0}'")]
    UnknownStatTag(String),

    #[error("HTTP {status} from {url}: {body}")]
    Status {
        status: u16,
        url: String,
        body: String,
    },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<ureq::Transport>,
    },

    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("{0}")]
    Other(String),
}

pub type RosterResult<T> = Result<T, RosterError>;
