//! Shared error type across embedlink crates.

use thiserror::Error;

/// Stable diagnostic codes (used as log fields and metric labels).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagCode {
    /// Embed URL missing or unparsable; the session never opens.
    InvalidUrl,
    /// Inbound message from a non-matching sender origin.
    OriginMismatch,
    /// Message matched the origin but failed schema validation.
    Malformed,
    /// Protocol major version not accepted by host policy.
    UnsupportedVersion,
    /// Outbound init could not be targeted or posted.
    InitSendFailed,
    /// A host-registered callback panicked inside dispatch.
    CallbackFailure,
    /// Internal failure (serializer, queue wiring).
    Internal,
}

impl DiagCode {
    /// String representation used in logs and metric labels.
    pub fn as_str(self) -> &'static str {
        match self {
            DiagCode::InvalidUrl => "INVALID_URL",
            DiagCode::OriginMismatch => "ORIGIN_MISMATCH",
            DiagCode::Malformed => "MALFORMED",
            DiagCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            DiagCode::InitSendFailed => "INIT_SEND_FAILED",
            DiagCode::CallbackFailure => "CALLBACK_FAILURE",
            DiagCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, EmbedLinkError>;

/// Unified error type used by core and the host runtime.
///
/// Nothing here is ever escalated to a user-visible error: the worst-case
/// outcome of any malformed or adversarial input is "event ignored".
#[derive(Debug, Error)]
pub enum EmbedLinkError {
    #[error("invalid embed url: {0}")]
    InvalidUrl(String),
    #[error("sender origin does not match session origin")]
    OriginMismatch,
    #[error("malformed message: {0}")]
    Malformed(String),
    #[error("unsupported protocol version: {0}")]
    UnsupportedVersion(String),
    #[error("init send failed: {0}")]
    InitSendFailed(String),
    #[error("host callback failed: {0}")]
    CallbackFailure(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl EmbedLinkError {
    /// Map the error to its stable diagnostic code.
    pub fn diag_code(&self) -> DiagCode {
        match self {
            EmbedLinkError::InvalidUrl(_) => DiagCode::InvalidUrl,
            EmbedLinkError::OriginMismatch => DiagCode::OriginMismatch,
            EmbedLinkError::Malformed(_) => DiagCode::Malformed,
            EmbedLinkError::UnsupportedVersion(_) => DiagCode::UnsupportedVersion,
            EmbedLinkError::InitSendFailed(_) => DiagCode::InitSendFailed,
            EmbedLinkError::CallbackFailure(_) => DiagCode::CallbackFailure,
            EmbedLinkError::Internal(_) => DiagCode::Internal,
        }
    }
}
