use anchor_lang::prelude::*;
use ownable::Ownable;

use crate::{
    constants::MIN_FEE,
    error::{safe_add_u64, VotingError},
};

/// The factory that creates voting instances
/// Singleton PDA: ["factory"]
#[account]
#[derive(InitSpace)]
pub struct Factory {
    /// Administrative owner (initially the deployer)
    pub ownable: Ownable,

    /// Minimum lamports a creator must escrow per voting instance
    pub min_fee: u64,

    /// Number of voting instances created so far
    pub total_votings: u64,

    /// When the factory was initialized
    pub created_at: i64,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl Factory {
    pub fn new(owner: Pubkey, created_at: i64, bump: u8) -> Self {
        Self {
            ownable: Ownable::new(owner),
            min_fee: MIN_FEE,
            total_votings: 0,
            created_at,
            bump,
        }
    }

    pub fn owner(&self) -> Pubkey {
        self.ownable.owner()
    }

    /// Reject creation fees below the current minimum
    pub fn check_fee(&self, fee: u64) -> Result<()> {
        require_gte!(fee, self.min_fee, VotingError::InsufficientFunds);
        Ok(())
    }

    /// Owner-only update of the minimum fee. Returns the previous value.
    ///
    /// `rent_floor` is the rent-exempt minimum of an empty account: a payout
    /// below it can't land in a fresh wallet, so no fee may go under it.
    pub fn set_min_fee(&mut self, caller: &Pubkey, min_fee: u64, rent_floor: u64) -> Result<u64> {
        self.ownable.only_owner(caller)?;
        require!(min_fee > 0, VotingError::InvalidFee);
        require_gte!(min_fee, rent_floor, VotingError::InvalidFee);

        let previous = self.min_fee;
        self.min_fee = min_fee;
        Ok(previous)
    }

    /// Count a successfully created instance
    pub fn record_voting(&mut self) -> Result<u64> {
        self.total_votings = safe_add_u64(self.total_votings, 1)?;
        Ok(self.total_votings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ownable::OwnableError;

    // Rent-exempt minimum of a 0-byte account at the default rent rate
    const RENT_FLOOR: u64 = 890_880;

    #[test]
    fn test_new_factory_defaults() {
        let deployer = Pubkey::new_unique();
        let factory = Factory::new(deployer, 1_000, 255);

        assert_eq!(factory.owner(), deployer);
        assert_eq!(factory.min_fee, MIN_FEE);
        assert_eq!(factory.total_votings, 0);
    }

    #[test]
    fn test_check_fee() {
        let factory = Factory::new(Pubkey::new_unique(), 0, 0);

        assert!(factory.check_fee(MIN_FEE).is_ok());
        assert!(factory.check_fee(MIN_FEE * 3).is_ok());
        assert_eq!(
            factory.check_fee(MIN_FEE - 1).unwrap_err(),
            anchor_lang::error::Error::from(VotingError::InsufficientFunds)
        );
        assert!(factory.check_fee(0).is_err());
    }

    #[test]
    fn test_set_min_fee() {
        let deployer = Pubkey::new_unique();
        let mut factory = Factory::new(deployer, 0, 0);

        assert_eq!(factory.set_min_fee(&deployer, MIN_FEE * 2, RENT_FLOOR).unwrap(), MIN_FEE);
        assert_eq!(factory.min_fee, MIN_FEE * 2);
        assert!(factory.check_fee(MIN_FEE).is_err());

        assert_eq!(
            factory.set_min_fee(&deployer, 0, RENT_FLOOR).unwrap_err(),
            anchor_lang::error::Error::from(VotingError::InvalidFee)
        );
        assert_eq!(
            factory.set_min_fee(&Pubkey::new_unique(), MIN_FEE, RENT_FLOOR).unwrap_err(),
            anchor_lang::error::Error::from(OwnableError::Unauthorized)
        );
        assert_eq!(factory.min_fee, MIN_FEE * 2);
    }

    #[test]
    fn test_min_fee_cannot_drop_below_rent_floor() {
        let deployer = Pubkey::new_unique();
        let mut factory = Factory::new(deployer, 0, 0);

        assert_eq!(Rent::default().minimum_balance(0), RENT_FLOOR);
        assert!(MIN_FEE >= RENT_FLOOR);

        // A one-lamport fee would escrow a payout no fresh wallet can accept
        assert_eq!(
            factory.set_min_fee(&deployer, 1, RENT_FLOOR).unwrap_err(),
            anchor_lang::error::Error::from(VotingError::InvalidFee)
        );
        assert_eq!(
            factory.set_min_fee(&deployer, RENT_FLOOR - 1, RENT_FLOOR).unwrap_err(),
            anchor_lang::error::Error::from(VotingError::InvalidFee)
        );
        assert_eq!(factory.min_fee, MIN_FEE);

        assert_eq!(factory.set_min_fee(&deployer, RENT_FLOOR, RENT_FLOOR).unwrap(), MIN_FEE);
        assert_eq!(factory.min_fee, RENT_FLOOR);
        assert!(factory.check_fee(RENT_FLOOR).is_ok());
    }

    #[test]
    fn test_ownership_transfer_gates_admin_operations() {
        let deployer = Pubkey::new_unique();
        let next = Pubkey::new_unique();
        let mut factory = Factory::new(deployer, 0, 0);

        factory.ownable.transfer_ownership(&deployer, next).unwrap();
        assert_eq!(factory.owner(), next);
        assert!(factory.set_min_fee(&deployer, MIN_FEE, RENT_FLOOR).is_err());
        assert!(factory.set_min_fee(&next, MIN_FEE, RENT_FLOOR).is_ok());
    }

    #[test]
    fn test_record_voting_counts() {
        let mut factory = Factory::new(Pubkey::new_unique(), 0, 0);
        assert_eq!(factory.record_voting().unwrap(), 1);
        assert_eq!(factory.record_voting().unwrap(), 2);

        factory.total_votings = u64::MAX;
        assert!(factory.record_voting().is_err());
    }
}
