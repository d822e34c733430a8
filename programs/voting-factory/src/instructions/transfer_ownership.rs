use anchor_lang::prelude::*;

use crate::{
    address::name_salt,
    constants::*,
    events::OwnershipTransferred,
    state::{Factory, VotingInstance},
};

// Hand the factory's admin capability to another key
#[derive(Accounts)]
pub struct TransferFactoryOwnership<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [FACTORY_SEED],
        bump = factory.bump
    )]
    pub factory: Account<'info, Factory>,
}

impl<'info> TransferFactoryOwnership<'info> {
    pub fn transfer_ownership(&mut self, new_owner: Pubkey) -> Result<()> {
        let previous_owner = self
            .factory
            .ownable
            .transfer_ownership(&self.owner.key(), new_owner)?;

        msg!("Factory ownership transferred: {} -> {}", previous_owner, new_owner);

        emit!(OwnershipTransferred {
            account: self.factory.key(),
            previous_owner,
            new_owner,
        });

        Ok(())
    }
}

// Hand a voting instance's organizer role to another key
#[derive(Accounts)]
pub struct TransferVotingOwnership<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [VOTING_SEED, voting.factory.as_ref(), name_salt(&voting.name).as_ref()],
        bump = voting.bump
    )]
    pub voting: Account<'info, VotingInstance>,
}

impl<'info> TransferVotingOwnership<'info> {
    pub fn transfer_ownership(&mut self, new_owner: Pubkey) -> Result<()> {
        let previous_owner = self
            .voting
            .ownable
            .transfer_ownership(&self.owner.key(), new_owner)?;

        msg!(
            "Voting '{}' ownership transferred: {} -> {}",
            self.voting.name,
            previous_owner,
            new_owner
        );

        emit!(OwnershipTransferred {
            account: self.voting.key(),
            previous_owner,
            new_owner,
        });

        Ok(())
    }
}
