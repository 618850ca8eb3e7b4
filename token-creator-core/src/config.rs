use std::fmt;
use std::str::FromStr;

use hedera::{AccountId, PrivateKey};

use crate::{Result, TokenError};

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Network {
    Mainnet,
    #[default]
    Testnet,
    Previewnet,
}

impl Network {
    pub fn parse(name: &str) -> Result<Network> {
        Network::from_str(name.trim()).map_err(|_| TokenError::InvalidNetwork(name.to_owned()))
    }
}

/// Account paying for and signing the submitted transactions.
#[derive(Clone)]
pub struct OperatorConfig {
    operator_id: AccountId,
    operator_key: PrivateKey,
    network: Network,
}

impl OperatorConfig {
    pub fn new(operator_id: &str, operator_key: &str, network: &str) -> Result<OperatorConfig> {
        let operator_key = PrivateKey::from_str(operator_key.trim())
            .map_err(|_| TokenError::InvalidOperator("failed to parse operator key".to_string()))?;
        let operator_id = AccountId::from_str(operator_id.trim())
            .map_err(|_| TokenError::InvalidOperator("failed to parse operator ID".to_string()))?;
        let network = Network::parse(network)?;

        Ok(OperatorConfig {
            operator_id,
            operator_key,
            network,
        })
    }

    pub fn operator_id(&self) -> AccountId {
        self.operator_id
    }

    pub fn operator_key(&self) -> &PrivateKey {
        &self.operator_key
    }

    pub fn network(&self) -> Network {
        self.network
    }
}

impl fmt::Debug for OperatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperatorConfig")
            .field("operator_id", &self.operator_id)
            .field("operator_key", &self.operator_key.public_key())
            .field("network", &self.network)
            .finish()
    }
}
