pub mod create;
pub mod mint;

pub use create::{build_create, CreateFields, TokenCreate};
pub use mint::{build_mint, MintPlan, TokenMint};

use crate::error::TokenError;
use crate::keys::{resolve, KeyInput, ResolvedKey};

/// Authority slots of a token.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display, strum_macros::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Admin,
    Kyc,
    Freeze,
    Wipe,
    Supply,
}

impl Role {
    pub const ALL: [Role; 5] = [Role::Admin, Role::Kyc, Role::Freeze, Role::Wipe, Role::Supply];
}

/// One value per authority role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Authorities<K> {
    pub admin: K,
    pub kyc: K,
    pub freeze: K,
    pub wipe: K,
    pub supply: K,
}

impl<K> Authorities<K> {
    pub fn get(&self, role: Role) -> &K {
        match role {
            Role::Admin => &self.admin,
            Role::Kyc => &self.kyc,
            Role::Freeze => &self.freeze,
            Role::Wipe => &self.wipe,
            Role::Supply => &self.supply,
        }
    }

    pub fn get_mut(&mut self, role: Role) -> &mut K {
        match role {
            Role::Admin => &mut self.admin,
            Role::Kyc => &mut self.kyc,
            Role::Freeze => &mut self.freeze,
            Role::Wipe => &mut self.wipe,
            Role::Supply => &mut self.supply,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Role, &K)> + '_ {
        Role::ALL.into_iter().map(move |role| (role, self.get(role)))
    }
}

impl<K> Authorities<Option<K>> {
    /// Roles that carry a key, in declaration order.
    pub fn configured(&self) -> impl Iterator<Item = (Role, &K)> + '_ {
        self.iter()
            .filter_map(|(role, key)| key.as_ref().map(|key| (role, key)))
    }
}

/// Resolves the key of a single role, `None` when the role is not configured.
pub(crate) fn resolve_role(
    role: Role,
    input: &KeyInput,
) -> Result<Option<ResolvedKey>, TokenError> {
    let raw = match input.raw() {
        Some(raw) => raw,
        None => return Ok(None),
    };
    let resolved = resolve(raw).map_err(|err| err.for_role(role))?;
    debug!("resolved {} key: {:?}", role, resolved);
    Ok(Some(resolved))
}
