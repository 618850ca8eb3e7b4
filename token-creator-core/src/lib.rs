pub mod config;
pub mod error;
pub mod keys;
pub mod ledger;
pub mod signing;
pub mod txbuilder;

pub use config::{Network, OperatorConfig};
pub use error::TokenError;
pub use keys::{resolve, resolve_with, HederaKeys, KeyCodec, KeyInput, ResolvedKey};
pub use ledger::client::HederaLedger;
pub use ledger::{create_token, mint_token, Ledger, Receipt};
pub use signing::{prepare_mint, PreparedMint, SigningState};
pub use txbuilder::*;

pub use hedera;

#[macro_use]
extern crate log;

pub type Result<T> = std::result::Result<T, TokenError>;
