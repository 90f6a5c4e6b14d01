use std::num::{ParseFloatError, ParseIntError};
use std::time::Duration;

use thiserror::Error;

use crate::domain::error::DomainError;
use crate::domain::pair::CurrencyPair;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("unknown source '{name}' in {field}")]
    UnknownSource { field: &'static str, name: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Failure of the HTTP collaborator to produce a response body.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid request URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("no response from {url}: {reason}")]
    Unreachable { url: String, reason: String },
}

/// A wire field that could not be turned into the typed value it encodes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NormalizeError {
    #[error("field `{field}` is not a number: {value:?}")]
    InvalidNumber {
        field: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("field `{field}` is not an integer: {value:?}")]
    InvalidInteger {
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("field `{field}` is not a valid timestamp: {value:?} ({reason})")]
    InvalidTimestamp {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("field `{field}` has {actual} elements, expected {expected}")]
    ArrayLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("field `{field}` is not a valid label: {value:?}")]
    InvalidLabel { field: &'static str, value: String },

    #[error("normalized values rejected: {0}")]
    InvalidRate(#[from] DomainError),
}

/// Why a single venue's `fetch_rate` call failed.
///
/// Every variant names the venue so a collection of failures stays readable.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("{venue}: {source}")]
    Transport {
        venue: &'static str,
        #[source]
        source: TransportError,
    },

    #[error("{venue}: response does not match the expected schema: {source}")]
    Decode {
        venue: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{venue}: {source}")]
    Normalize {
        venue: &'static str,
        #[source]
        source: NormalizeError,
    },

    #[error("{venue} does not offer the {pair} pair")]
    PairUnavailable {
        venue: &'static str,
        pair: CurrencyPair,
    },

    #[error("{venue} rejected the request: {message}")]
    Rejected { venue: &'static str, message: String },

    #[error("{venue}: no response within {timeout:?}")]
    Timeout {
        venue: &'static str,
        timeout: Duration,
    },

    #[error("{venue}: fetch aborted: {reason}")]
    Aborted { venue: &'static str, reason: String },
}

impl FetchError {
    /// Display name of the venue that failed.
    #[must_use]
    pub const fn venue(&self) -> &'static str {
        match self {
            Self::Transport { venue, .. }
            | Self::Decode { venue, .. }
            | Self::Normalize { venue, .. }
            | Self::PairUnavailable { venue, .. }
            | Self::Rejected { venue, .. }
            | Self::Timeout { venue, .. }
            | Self::Aborted { venue, .. } => *venue,
        }
    }

    /// The venue simply does not list the requested pair.
    #[must_use]
    pub const fn is_pair_unavailable(&self) -> bool {
        matches!(self, Self::PairUnavailable { .. })
    }

    /// The request never produced a body.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Timeout { .. })
    }

    /// Short machine-readable kind, used in JSON output.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "transport",
            Self::Decode { .. } => "decode",
            Self::Normalize { .. } => "normalize",
            Self::PairUnavailable { .. } => "pair_unavailable",
            Self::Rejected { .. } => "rejected",
            Self::Timeout { .. } => "timeout",
            Self::Aborted { .. } => "aborted",
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
