use cosmwasm_std::{Addr, StdError, StdResult, Storage};
use cw_storage_plus::Item;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum OwnershipError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Caller is not the owner")]
    Unauthorized,
}

/// The administrator of a contract.
///
/// Contracts compose this guard instead of checking the sender inline. Every
/// owner-only operation runs through [`Ownership::guard`], which fails closed
/// before the operation sees the storage.
pub struct Ownership {
    owner: Item<Addr>,
}

impl Ownership {
    pub const fn new(namespace: &'static str) -> Self {
        Self {
            owner: Item::new(namespace),
        }
    }

    pub fn initialize(&self, storage: &mut dyn Storage, owner: &Addr) -> StdResult<()> {
        self.owner.save(storage, owner)
    }

    pub fn owner(&self, storage: &dyn Storage) -> StdResult<Addr> {
        self.owner.load(storage)
    }

    pub fn assert_owner(&self, storage: &dyn Storage, sender: &Addr) -> Result<(), OwnershipError> {
        if self.owner(storage)? != *sender {
            return Err(OwnershipError::Unauthorized);
        }
        Ok(())
    }

    /// Runs `action` only if `sender` is the current owner
    pub fn guard<T, E>(
        &self,
        storage: &mut dyn Storage,
        sender: &Addr,
        action: impl FnOnce(&mut dyn Storage) -> Result<T, E>,
    ) -> Result<T, E>
    where
        E: From<OwnershipError>,
    {
        self.assert_owner(storage, sender)?;
        action(storage)
    }

    /// Hands the contract over to `new_owner`. Returns the previous owner.
    pub fn transfer(
        &self,
        storage: &mut dyn Storage,
        sender: &Addr,
        new_owner: &Addr,
    ) -> Result<Addr, OwnershipError> {
        self.guard(storage, sender, |storage| {
            self.owner.save(storage, new_owner)?;
            Ok(sender.clone())
        })
    }
}
