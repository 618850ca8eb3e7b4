use std::fmt;
use std::str::FromStr;

use hedera::{PrivateKey, TokenId};

use super::{resolve_role, Role};
use crate::keys::KeyInput;
use crate::TokenError;

#[derive(Debug, Clone, PartialEq)]
pub struct TokenMint {
    token_id: TokenId,
    amount: u64,
}

impl TokenMint {
    pub fn token_id(&self) -> TokenId {
        self.token_id
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }
}

/// A token mint together with the supply key that has to sign it, if any.
#[derive(Clone)]
pub struct MintPlan {
    mint: TokenMint,
    signer: Option<PrivateKey>,
}

impl MintPlan {
    pub fn mint(&self) -> &TokenMint {
        &self.mint
    }

    pub fn signer(&self) -> Option<&PrivateKey> {
        self.signer.as_ref()
    }

    pub fn needs_extra_signature(&self) -> bool {
        self.signer.is_some()
    }
}

impl fmt::Debug for MintPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MintPlan")
            .field("mint", &self.mint)
            .field("needs_extra_signature", &self.needs_extra_signature())
            .finish()
    }
}

/// Assembles a token mint.
///
/// A private supply key is kept as extra signer. A public supply key is
/// accepted but cannot sign, the network will reject the mint unless the
/// operator is the supply key.
pub fn build_mint(
    token_id: &str,
    amount: u64,
    supply_key: &KeyInput,
) -> Result<MintPlan, TokenError> {
    let token_id = TokenId::from_str(token_id.trim())
        .map_err(|err| TokenError::invalid_field("token id", err))?;

    let signer = match resolve_role(Role::Supply, supply_key)? {
        Some(resolved) => {
            let (private, _) = resolved.into_parts();
            if private.is_none() {
                warn!("supply key for {} is a public key, mint will not be signed by it", token_id);
            }
            private
        }
        None => None,
    };

    let plan = MintPlan {
        mint: TokenMint { token_id, amount },
        signer,
    };
    debug!("assembled token mint: {:?}", plan);
    Ok(plan)
}
