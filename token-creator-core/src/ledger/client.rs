use chrono::{DateTime, Utc};
use hedera::{
    Client, PrivateKey, TokenCreateTransaction, TokenMintTransaction, TransactionResponse,
};
use time::OffsetDateTime;

use super::{Ledger, Receipt};
use crate::config::OperatorConfig;
use crate::txbuilder::{Role, TokenCreate, TokenMint};
use crate::{Result, TokenError};

/// Ledger backed by the Hedera SDK client of one operator.
pub struct HederaLedger {
    client: Client,
}

impl HederaLedger {
    /// Creates the client for the configured network and sets the operator
    /// that pays for and signs every transaction.
    pub fn connect(config: &OperatorConfig) -> Result<HederaLedger> {
        let client = Client::for_name(&config.network().to_string())
            .map_err(|_| TokenError::InvalidNetwork(config.network().to_string()))?;
        client.set_operator(config.operator_id(), config.operator_key().clone());
        info!(
            "using operator {} on {}",
            config.operator_id(),
            config.network()
        );
        Ok(HederaLedger { client })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

fn to_offset_date_time(time: DateTime<Utc>) -> Result<OffsetDateTime> {
    let seconds = OffsetDateTime::from_unix_timestamp(time.timestamp())?;
    Ok(seconds + time::Duration::nanoseconds(i64::from(time.timestamp_subsec_nanos())))
}

fn token_create_transaction(create: &TokenCreate) -> Result<TokenCreateTransaction> {
    let mut tx = TokenCreateTransaction::new();
    tx.name(create.name())
        .symbol(create.symbol())
        .decimals(create.decimals())
        .initial_supply(create.initial_supply())
        .treasury_account_id(create.treasury())
        .freeze_default(create.freeze_default());

    for (role, key) in create.keys().configured() {
        let key = key.clone();
        match role {
            Role::Admin => tx.admin_key(key),
            Role::Kyc => tx.kyc_key(key),
            Role::Freeze => tx.freeze_key(key),
            Role::Wipe => tx.wipe_key(key),
            Role::Supply => tx.supply_key(key),
        };
    }

    if let Some(expiration) = create.expiration_time() {
        tx.expiration_time(to_offset_date_time(expiration)?);
    }

    Ok(tx)
}

impl Ledger for HederaLedger {
    type Submission = TransactionResponse;
    type MintTx = TokenMintTransaction;

    fn mint_transaction(&self, mint: &TokenMint) -> TokenMintTransaction {
        let mut tx = TokenMintTransaction::new();
        tx.token_id(mint.token_id()).amount(mint.amount());
        tx
    }

    fn freeze(&self, tx: &mut TokenMintTransaction) -> Result<()> {
        tx.freeze_with(&self.client)
            .map_err(|err| TokenError::FreezeFailed(err.to_string()))?;
        Ok(())
    }

    fn sign(&self, tx: &mut TokenMintTransaction, key: PrivateKey) {
        tx.sign(key);
    }

    async fn execute_create(&self, create: &TokenCreate) -> Result<TransactionResponse> {
        let mut tx = token_create_transaction(create)?;
        let response = tx
            .execute(&self.client)
            .await
            .map_err(|err| TokenError::Network(err.to_string()))?;
        debug!("token create submitted: {}", response.transaction_id);
        Ok(response)
    }

    async fn execute_mint(&self, tx: &mut TokenMintTransaction) -> Result<TransactionResponse> {
        let response = tx
            .execute(&self.client)
            .await
            .map_err(|err| TokenError::Network(err.to_string()))?;
        debug!("token mint submitted: {}", response.transaction_id);
        Ok(response)
    }

    async fn receipt(&self, submission: &TransactionResponse) -> Result<Receipt> {
        let receipt = submission
            .get_receipt(&self.client)
            .await
            .map_err(|err| TokenError::Receipt(err.to_string()))?;
        debug!("receipt status: {:?}", receipt.status);
        Ok(Receipt {
            token_id: receipt.token_id,
            total_supply: receipt.total_supply,
        })
    }
}
