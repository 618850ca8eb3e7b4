use crate::txbuilder::Role;

#[derive(thiserror::Error, Debug)]
pub enum TokenError {
    #[error(
        "invalid key format{}: expected a private or public key",
        .role.map(|r| format!(" for {r} key")).unwrap_or_default()
    )]
    InvalidKeyFormat { role: Option<Role> },
    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
    #[error("failed to freeze transaction: {0}")]
    FreezeFailed(String),
    #[error("failed to execute transaction: {0}")]
    Network(String),
    #[error("failed to get transaction receipt: {0}")]
    Receipt(String),
    #[error("receipt does not contain a {0}")]
    MissingField(&'static str),
    #[error("invalid operator: {0}")]
    InvalidOperator(String),
    #[error("invalid network `{0}` provided, must be one of: `mainnet`, `testnet`, or `previewnet`")]
    InvalidNetwork(String),
}

impl TokenError {
    pub fn invalid_field(field: &'static str, reason: impl ToString) -> TokenError {
        TokenError::InvalidField {
            field,
            reason: reason.to_string(),
        }
    }

    /// Attaches the authority role to a key format error, other errors pass through.
    pub fn for_role(self, role: Role) -> TokenError {
        match self {
            TokenError::InvalidKeyFormat { .. } => TokenError::InvalidKeyFormat { role: Some(role) },
            err => err,
        }
    }
}

impl From<chrono::ParseError> for TokenError {
    fn from(err: chrono::ParseError) -> Self {
        TokenError::invalid_field("expiration time", err)
    }
}

impl From<time::error::ComponentRange> for TokenError {
    fn from(err: time::error::ComponentRange) -> Self {
        TokenError::invalid_field("expiration time", err)
    }
}
