use std::str::FromStr;

use chrono::{DateTime, Utc};
use hedera::{AccountId, PublicKey};

use super::{resolve_role, Authorities, Role};
use crate::keys::KeyInput;
use crate::TokenError;

/// Scalar inputs of a token creation.
#[derive(Debug, Clone, Default)]
pub struct CreateFields {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
    pub initial_supply: u64,
    pub treasury_account_id: String,
    /// RFC 3339 timestamp, e.g. `2030-01-01T00:00:00Z`
    pub expiration_time: Option<String>,
    pub freeze_default: bool,
}

/// Token creation ready to be submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenCreate {
    name: String,
    symbol: String,
    decimals: u32,
    initial_supply: u64,
    treasury: AccountId,
    keys: Authorities<Option<PublicKey>>,
    freeze_default: bool,
    expiration_time: Option<DateTime<Utc>>,
}

impl TokenCreate {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    pub fn initial_supply(&self) -> u64 {
        self.initial_supply
    }

    pub fn treasury(&self) -> AccountId {
        self.treasury
    }

    pub fn keys(&self) -> &Authorities<Option<PublicKey>> {
        &self.keys
    }

    pub fn key(&self, role: Role) -> Option<&PublicKey> {
        self.keys.get(role).as_ref()
    }

    pub fn freeze_default(&self) -> bool {
        self.freeze_default
    }

    pub fn expiration_time(&self) -> Option<DateTime<Utc>> {
        self.expiration_time
    }
}

pub fn parse_expiration(raw: &str) -> Result<DateTime<Utc>, TokenError> {
    Ok(DateTime::parse_from_rfc3339(raw.trim())?.with_timezone(&Utc))
}

/// Assembles a token creation. Authorities without input are left out of the
/// transaction, only the operator signs it.
pub fn build_create(
    fields: &CreateFields,
    authorities: &Authorities<KeyInput>,
) -> Result<TokenCreate, TokenError> {
    let expiration_time = match fields.expiration_time.as_deref() {
        Some(raw) if !raw.trim().is_empty() => Some(parse_expiration(raw)?),
        _ => None,
    };

    let treasury = AccountId::from_str(fields.treasury_account_id.trim())
        .map_err(|err| TokenError::invalid_field("treasury account id", err))?;

    let mut keys = Authorities::<Option<PublicKey>>::default();
    for (role, input) in authorities.iter() {
        if let Some(resolved) = resolve_role(role, input)? {
            let (_, public) = resolved.into_parts();
            *keys.get_mut(role) = Some(public);
        }
    }

    let create = TokenCreate {
        name: fields.name.clone(),
        symbol: fields.symbol.clone(),
        decimals: fields.decimals,
        initial_supply: fields.initial_supply,
        treasury,
        keys,
        freeze_default: fields.freeze_default,
        expiration_time,
    };
    debug!("assembled token create: {:?}", create);
    Ok(create)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hedera::PrivateKey;

    fn fields() -> CreateFields {
        CreateFields {
            name: "Third Act".to_string(),
            symbol: "TAC".to_string(),
            decimals: 2,
            initial_supply: 10_000,
            treasury_account_id: "0.0.1234".to_string(),
            expiration_time: None,
            freeze_default: false,
        }
    }

    #[test]
    fn copies_scalar_fields() {
        let create = build_create(&fields(), &Authorities::default()).unwrap();

        assert_eq!(create.name(), "Third Act");
        assert_eq!(create.symbol(), "TAC");
        assert_eq!(create.decimals(), 2);
        assert_eq!(create.initial_supply(), 10_000);
        assert_eq!(create.treasury().to_string(), "0.0.1234");
        assert!(!create.freeze_default());
        assert_eq!(create.expiration_time(), None);
    }

    #[test]
    fn absent_authorities_are_omitted() {
        let create = build_create(&fields(), &Authorities::default()).unwrap();

        assert_eq!(create.keys(), &Authorities::default());
        assert_eq!(create.keys().configured().count(), 0);
    }

    #[test]
    fn empty_key_strings_are_omitted() {
        let authorities = Authorities {
            admin: KeyInput::from(""),
            kyc: KeyInput::from(""),
            freeze: KeyInput::from(""),
            wipe: KeyInput::from(""),
            supply: KeyInput::from(""),
        };
        let create = build_create(&fields(), &authorities).unwrap();

        assert!(Role::ALL.iter().all(|role| create.key(*role).is_none()));
    }

    #[test]
    fn private_and_public_keys_fill_their_slots() {
        let admin = PrivateKey::generate_ed25519();
        let supply = PrivateKey::generate_ed25519().public_key();
        let authorities = Authorities {
            admin: KeyInput::from(admin.to_string()),
            supply: KeyInput::from(supply.to_string()),
            ..Default::default()
        };

        let create = build_create(&fields(), &authorities).unwrap();

        assert_eq!(
            create.key(Role::Admin).map(ToString::to_string),
            Some(admin.public_key().to_string())
        );
        assert_eq!(
            create.key(Role::Supply).map(ToString::to_string),
            Some(supply.to_string())
        );
        assert!(create.key(Role::Kyc).is_none());
        assert!(create.key(Role::Freeze).is_none());
        assert!(create.key(Role::Wipe).is_none());
    }

    #[test]
    fn invalid_authority_key_fails() {
        let authorities = Authorities {
            wipe: KeyInput::from("not-a-key"),
            ..Default::default()
        };

        let err = build_create(&fields(), &authorities).unwrap_err();
        assert!(matches!(
            err,
            TokenError::InvalidKeyFormat {
                role: Some(Role::Wipe)
            }
        ));
    }

    #[test]
    fn malformed_expiration_is_rejected() {
        let mut fields = fields();
        fields.expiration_time = Some("not-a-date".to_string());

        let err = build_create(&fields, &Authorities::default()).unwrap_err();
        assert!(matches!(
            err,
            TokenError::InvalidField {
                field: "expiration time",
                ..
            }
        ));
    }

    #[test]
    fn expiration_is_parsed_as_rfc3339() {
        let mut fields = fields();
        fields.expiration_time = Some("2030-01-01T02:00:00+02:00".to_string());

        let create = build_create(&fields, &Authorities::default()).unwrap();
        assert_eq!(
            create.expiration_time().unwrap().to_rfc3339(),
            "2030-01-01T00:00:00+00:00"
        );
    }

    #[test]
    fn malformed_treasury_is_rejected() {
        let mut fields = fields();
        fields.treasury_account_id = "treasury".to_string();

        let err = build_create(&fields, &Authorities::default()).unwrap_err();
        assert!(matches!(
            err,
            TokenError::InvalidField {
                field: "treasury account id",
                ..
            }
        ));
    }

    #[test]
    fn assembly_is_repeatable() {
        let authorities = Authorities {
            kyc: KeyInput::from(PrivateKey::generate_ed25519().to_string()),
            ..Default::default()
        };
        let mut fields = fields();
        fields.expiration_time = Some("2030-06-01T12:00:00Z".to_string());

        let first = build_create(&fields, &authorities).unwrap();
        let second = build_create(&fields, &authorities).unwrap();
        assert_eq!(first, second);
    }
}
