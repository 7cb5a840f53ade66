use std::fmt::{Display, Formatter};

/// Failure classification for a single upstream source.
///
/// `InvalidSourceData` and `TransportFailure` are terminal for the source
/// that produced them but never abort a combined export; `NoData` is the
/// coordinator-level failure raised when every requested source was
/// excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    InvalidSourceData,
    TransportFailure,
    InvalidRequest,
    NoData,
}

/// Structured source error carried across the normalization boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
    retryable: bool,
}

impl SourceError {
    pub fn invalid_source_data(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::InvalidSourceData,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn transport_failure(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::TransportFailure,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::InvalidRequest,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn no_data(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::NoData,
            message: message.into(),
            retryable: false,
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::InvalidSourceData => "source.invalid_data",
            SourceErrorKind::TransportFailure => "source.transport",
            SourceErrorKind::InvalidRequest => "source.invalid_request",
            SourceErrorKind::NoData => "source.no_data",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for SourceError {}
