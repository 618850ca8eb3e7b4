use crate::ledger::Ledger;
use crate::txbuilder::MintPlan;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SigningState {
    Unsigned,
    Signed,
}

/// SDK mint transaction ready for execution.
#[derive(Debug)]
pub struct PreparedMint<T> {
    tx: T,
    state: SigningState,
}

impl<T> PreparedMint<T> {
    pub fn state(&self) -> SigningState {
        self.state
    }

    pub fn tx_mut(&mut self) -> &mut T {
        &mut self.tx
    }

    pub fn into_tx(self) -> T {
        self.tx
    }
}

/// Builds the SDK mint transaction and signs it with the supply key when the
/// plan carries one. The transaction is frozen before signing, a failing
/// freeze aborts the mint.
pub fn prepare_mint<L: Ledger>(ledger: &L, plan: &MintPlan) -> Result<PreparedMint<L::MintTx>> {
    let mut tx = ledger.mint_transaction(plan.mint());

    let signer = match plan.signer() {
        Some(signer) => signer,
        None => {
            return Ok(PreparedMint {
                tx,
                state: SigningState::Unsigned,
            })
        }
    };

    ledger.freeze(&mut tx)?;
    ledger.sign(&mut tx, signer.clone());
    info!("mint of {} signed with supply key", plan.mint().token_id());

    Ok(PreparedMint {
        tx,
        state: SigningState::Signed,
    })
}
