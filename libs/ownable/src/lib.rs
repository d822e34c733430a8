use anchor_lang::prelude::*;

/// Errors raised by owner-gated operations.
/// Offset keeps these codes clear of the host program's own error range.
#[error_code(offset = 7000)]
pub enum OwnableError {
    #[msg("Caller is not the owner")]
    Unauthorized,

    #[msg("New owner cannot be the default public key")]
    InvalidOwner,
}

/// Single-principal owner capability.
///
/// Embedded in any account that needs an owner role. The owner is never the
/// default key once constructed through [`Ownable::new`].
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct Ownable {
    pub owner: Pubkey,
}

impl Ownable {
    pub fn new(owner: Pubkey) -> Self {
        Self { owner }
    }

    pub fn owner(&self) -> Pubkey {
        self.owner
    }

    pub fn is_owner(&self, key: &Pubkey) -> bool {
        self.owner != Pubkey::default() && self.owner == *key
    }

    /// Reject anyone but the current owner.
    pub fn only_owner(&self, caller: &Pubkey) -> Result<()> {
        if !self.is_owner(caller) {
            msg!("Unauthorized: {} is not the owner ({})", caller, self.owner);
            return Err(OwnableError::Unauthorized.into());
        }
        Ok(())
    }

    /// Hand the capability to `new_owner`, returning the previous owner.
    pub fn transfer_ownership(&mut self, caller: &Pubkey, new_owner: Pubkey) -> Result<Pubkey> {
        self.only_owner(caller)?;
        require_keys_neq!(new_owner, Pubkey::default(), OwnableError::InvalidOwner);

        let previous = self.owner;
        self.owner = new_owner;
        Ok(previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_owner() {
        let owner = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        let ownable = Ownable::new(owner);

        assert!(ownable.only_owner(&owner).is_ok());
        assert_eq!(
            ownable.only_owner(&other).unwrap_err(),
            anchor_lang::error::Error::from(OwnableError::Unauthorized)
        );
    }

    #[test]
    fn test_default_owner_authorizes_nobody() {
        let ownable = Ownable::default();
        assert!(!ownable.is_owner(&Pubkey::default()));
        assert!(ownable.only_owner(&Pubkey::default()).is_err());
    }

    #[test]
    fn test_transfer_ownership() {
        let owner = Pubkey::new_unique();
        let next = Pubkey::new_unique();
        let mut ownable = Ownable::new(owner);

        let previous = ownable.transfer_ownership(&owner, next).unwrap();
        assert_eq!(previous, owner);
        assert_eq!(ownable.owner(), next);

        // The old owner lost the capability
        assert_eq!(
            ownable.transfer_ownership(&owner, owner).unwrap_err(),
            anchor_lang::error::Error::from(OwnableError::Unauthorized)
        );
    }

    #[test]
    fn test_transfer_to_default_key_rejected() {
        let owner = Pubkey::new_unique();
        let mut ownable = Ownable::new(owner);

        assert_eq!(
            ownable
                .transfer_ownership(&owner, Pubkey::default())
                .unwrap_err(),
            anchor_lang::error::Error::from(OwnableError::InvalidOwner)
        );
        assert_eq!(ownable.owner(), owner);
    }
}
