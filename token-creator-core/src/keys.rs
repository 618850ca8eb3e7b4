//! Resolution of user supplied key strings into token authorities.
//!
//! A key flag may carry either a private or a public key. The public key is
//! what ends up in the transaction as authority, the private key (if one was
//! given) is kept so it can sign.

use std::fmt;
use std::str::FromStr;

use hedera::{PrivateKey, PublicKey};

use crate::error::TokenError;

/// Raw key input of an optional key flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum KeyInput {
    #[default]
    Absent,
    Raw(String),
}

impl KeyInput {
    pub fn is_absent(&self) -> bool {
        matches!(self, KeyInput::Absent)
    }

    pub fn raw(&self) -> Option<&str> {
        match self {
            KeyInput::Absent => None,
            KeyInput::Raw(raw) => Some(raw),
        }
    }
}

impl From<&str> for KeyInput {
    fn from(raw: &str) -> Self {
        KeyInput::from(raw.to_owned())
    }
}

impl From<String> for KeyInput {
    fn from(raw: String) -> Self {
        if raw.trim().is_empty() {
            KeyInput::Absent
        } else {
            KeyInput::Raw(raw)
        }
    }
}

impl From<Option<String>> for KeyInput {
    fn from(raw: Option<String>) -> Self {
        raw.map(KeyInput::from).unwrap_or_default()
    }
}

/// Textual key encoding used by the resolver.
pub trait KeyCodec {
    type Private;
    type Public;

    fn parse_private(&self, raw: &str) -> Option<Self::Private>;
    fn parse_public(&self, raw: &str) -> Option<Self::Public>;
    fn derive_public(&self, private: &Self::Private) -> Self::Public;
}

/// Hedera SDK key encoding (DER or raw hex).
#[derive(Debug, Clone, Copy, Default)]
pub struct HederaKeys;

impl KeyCodec for HederaKeys {
    type Private = PrivateKey;
    type Public = PublicKey;

    fn parse_private(&self, raw: &str) -> Option<PrivateKey> {
        PrivateKey::from_str(raw.trim()).ok()
    }

    fn parse_public(&self, raw: &str) -> Option<PublicKey> {
        PublicKey::from_str(raw.trim()).ok()
    }

    fn derive_public(&self, private: &PrivateKey) -> PublicKey {
        private.public_key()
    }
}

#[derive(Clone)]
pub enum ResolvedKey<S = PrivateKey, P = PublicKey> {
    Private { private: S, public: P },
    Public(P),
}

impl<S, P> ResolvedKey<S, P> {
    pub fn public_key(&self) -> &P {
        match self {
            ResolvedKey::Private { public, .. } => public,
            ResolvedKey::Public(public) => public,
        }
    }

    pub fn private_key(&self) -> Option<&S> {
        match self {
            ResolvedKey::Private { private, .. } => Some(private),
            ResolvedKey::Public(_) => None,
        }
    }

    pub fn can_sign(&self) -> bool {
        self.private_key().is_some()
    }

    pub fn into_parts(self) -> (Option<S>, P) {
        match self {
            ResolvedKey::Private { private, public } => (Some(private), public),
            ResolvedKey::Public(public) => (None, public),
        }
    }
}

// private keys never end up in logs
impl<S, P: fmt::Debug> fmt::Debug for ResolvedKey<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedKey::Private { public, .. } => f
                .debug_struct("Private")
                .field("public", public)
                .finish_non_exhaustive(),
            ResolvedKey::Public(public) => f.debug_tuple("Public").field(public).finish(),
        }
    }
}

/// Resolves a key string with the Hedera key encoding.
pub fn resolve(raw: &str) -> Result<ResolvedKey, TokenError> {
    resolve_with(&HederaKeys, raw)
}

/// Tries the private key interpretation first and falls back to the public one.
/// A string that parses both ways resolves to the private key.
pub fn resolve_with<C: KeyCodec>(
    codec: &C,
    raw: &str,
) -> Result<ResolvedKey<C::Private, C::Public>, TokenError> {
    if let Some(private) = codec.parse_private(raw) {
        let public = codec.derive_public(&private);
        return Ok(ResolvedKey::Private { private, public });
    }

    codec
        .parse_public(raw)
        .map(ResolvedKey::Public)
        .ok_or(TokenError::InvalidKeyFormat { role: None })
}
