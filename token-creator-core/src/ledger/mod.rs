pub mod client;
#[cfg(test)]
pub(crate) mod mock;

use hedera::{PrivateKey, TokenId};

use crate::signing::prepare_mint;
use crate::txbuilder::{MintPlan, TokenCreate, TokenMint};
use crate::{Result, TokenError};

/// Receipt fields the token commands report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Receipt {
    pub token_id: Option<TokenId>,
    pub total_supply: u64,
}

/// Submission side of the ledger. Implementations own the network client,
/// callers pass them in explicitly.
#[allow(async_fn_in_trait)]
pub trait Ledger {
    /// Handle of an executed transaction, used to fetch its receipt.
    type Submission;
    type MintTx;

    fn mint_transaction(&self, mint: &TokenMint) -> Self::MintTx;
    fn freeze(&self, tx: &mut Self::MintTx) -> Result<()>;
    fn sign(&self, tx: &mut Self::MintTx, key: PrivateKey);

    async fn execute_create(&self, create: &TokenCreate) -> Result<Self::Submission>;
    async fn execute_mint(&self, tx: &mut Self::MintTx) -> Result<Self::Submission>;
    async fn receipt(&self, submission: &Self::Submission) -> Result<Receipt>;
}

/// Submits a token creation and returns the id of the new token.
pub async fn create_token<L: Ledger>(ledger: &L, create: &TokenCreate) -> Result<TokenId> {
    info!("creating token {} ({})", create.name(), create.symbol());
    let submission = ledger.execute_create(create).await?;
    let receipt = ledger.receipt(&submission).await?;
    let token_id = receipt.token_id.ok_or(TokenError::MissingField("token id"))?;
    info!("created token {}", token_id);
    Ok(token_id)
}

/// Signs the mint if required, submits it and returns the new total supply.
pub async fn mint_token<L: Ledger>(ledger: &L, plan: &MintPlan) -> Result<u64> {
    info!(
        "minting {} of token {}",
        plan.mint().amount(),
        plan.mint().token_id()
    );
    let mut prepared = prepare_mint(ledger, plan)?;
    let submission = ledger.execute_mint(prepared.tx_mut()).await?;
    let receipt = ledger.receipt(&submission).await?;
    info!("new total supply: {}", receipt.total_supply);
    Ok(receipt.total_supply)
}
