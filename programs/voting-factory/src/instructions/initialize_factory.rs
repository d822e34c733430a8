use anchor_lang::prelude::*;

use crate::{constants::*, events::OwnershipTransferred, state::Factory};

// Accounts needed to create the singleton factory
#[derive(Accounts)]
pub struct InitializeFactory<'info> {
    // The deployer becomes the factory owner and pays for the account
    #[account(mut)]
    pub deployer: Signer<'info>,

    // Fails if the factory already exists
    #[account(
        init,
        payer = deployer,
        space = DISCRIMINATOR_SIZE + Factory::INIT_SPACE,
        seeds = [FACTORY_SEED],
        bump
    )]
    pub factory: Account<'info, Factory>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeFactory<'info> {
    pub fn initialize_factory(&mut self, bumps: &InitializeFactoryBumps) -> Result<()> {
        let current_time = Clock::get()?.unix_timestamp;

        self.factory
            .set_inner(Factory::new(self.deployer.key(), current_time, bumps.factory));

        msg!("Factory initialized: {}", self.factory.key());
        msg!("Owner: {}", self.deployer.key());
        msg!("Minimum fee: {} lamports", self.factory.min_fee);

        emit!(OwnershipTransferred {
            account: self.factory.key(),
            previous_owner: Pubkey::default(),
            new_owner: self.deployer.key(),
        });

        Ok(())
    }
}
