use std::sync::Mutex;

use hedera::PrivateKey;

use super::{Ledger, Receipt};
use crate::txbuilder::{TokenCreate, TokenMint};
use crate::{Result, TokenError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Freeze,
    Sign,
    ExecuteCreate(String),
    ExecuteMint(u64),
    Receipt,
}

#[derive(Debug)]
pub(crate) struct MockMintTx {
    pub(crate) mint: TokenMint,
    pub(crate) frozen: bool,
    pub(crate) signers: Vec<String>,
}

/// In-memory ledger recording every call.
#[derive(Debug, Default)]
pub(crate) struct MockLedger {
    pub(crate) fail_freeze: bool,
    pub(crate) fail_execute: bool,
    pub(crate) fail_receipt: bool,
    pub(crate) receipt: Receipt,
    pub(crate) calls: Mutex<Vec<Call>>,
}

impl MockLedger {
    pub(crate) fn with_receipt(receipt: Receipt) -> MockLedger {
        MockLedger {
            receipt,
            ..Default::default()
        }
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Ledger for MockLedger {
    type Submission = u64;
    type MintTx = MockMintTx;

    fn mint_transaction(&self, mint: &TokenMint) -> MockMintTx {
        MockMintTx {
            mint: mint.clone(),
            frozen: false,
            signers: Vec::new(),
        }
    }

    fn freeze(&self, tx: &mut MockMintTx) -> Result<()> {
        self.record(Call::Freeze);
        if self.fail_freeze {
            return Err(TokenError::FreezeFailed("no node account ids".to_string()));
        }
        tx.frozen = true;
        Ok(())
    }

    fn sign(&self, tx: &mut MockMintTx, key: PrivateKey) {
        self.record(Call::Sign);
        tx.signers.push(key.public_key().to_string());
    }

    async fn execute_create(&self, create: &TokenCreate) -> Result<u64> {
        self.record(Call::ExecuteCreate(create.symbol().to_string()));
        if self.fail_execute {
            return Err(TokenError::Network("connection refused".to_string()));
        }
        Ok(1)
    }

    async fn execute_mint(&self, tx: &mut MockMintTx) -> Result<u64> {
        self.record(Call::ExecuteMint(tx.mint.amount()));
        if self.fail_execute {
            return Err(TokenError::Network("connection refused".to_string()));
        }
        Ok(2)
    }

    async fn receipt(&self, _submission: &u64) -> Result<Receipt> {
        self.record(Call::Receipt);
        if self.fail_receipt {
            return Err(TokenError::Receipt("INVALID_SIGNATURE".to_string()));
        }
        Ok(self.receipt.clone())
    }
}
