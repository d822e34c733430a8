use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::{
    address::name_salt,
    constants::*,
    events::NewVoting,
    state::{Factory, VotingCreationRequest, VotingInstance},
};

// Accounts needed for creating a new voting instance
#[derive(Accounts)]
#[instruction(name: String)]
pub struct CreateVoting<'info> {
    // The organizer (pays rent plus the escrowed fee, becomes the instance owner)
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [FACTORY_SEED],
        bump = factory.bump
    )]
    pub factory: Account<'info, Factory>,

    // The voting instance PDA, salted by the name hash.
    // init_if_needed lets the handler see an existing instance and reject the
    // name with DuplicateName instead of a bare system program error.
    #[account(
        init_if_needed,
        payer = creator,
        space = DISCRIMINATOR_SIZE + VotingInstance::INIT_SPACE,
        seeds = [VOTING_SEED, factory.key().as_ref(), name_salt(&name).as_ref()],
        bump
    )]
    pub voting: Account<'info, VotingInstance>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateVoting<'info> {
    pub fn create_voting(
        &mut self,
        name: String,
        start_time: i64,
        end_time: i64,
        fee: u64,
        bumps: &CreateVotingBumps,
    ) -> Result<()> {
        let current_time = Clock::get()?.unix_timestamp;

        let request = VotingCreationRequest {
            name: name.clone(),
            start_time,
            end_time,
            fee,
        };
        request.validate(&self.factory, current_time)?;

        let factory_key = self.factory.key();
        let creator_key = self.creator.key();
        self.voting
            .open(factory_key, creator_key, request, current_time, bumps.voting)?;

        // Move the fee into the instance; it custodies its own escrow
        self.escrow_fee(fee)?;

        let total_votings = self.factory.record_voting()?;

        msg!("Voting created successfully!");
        msg!("Voting: {} ({})", self.voting.key(), name);
        msg!("Creator: {}", creator_key);
        msg!("Window: {} -> {}", start_time, end_time);
        msg!("Escrow: {} lamports", fee);
        msg!("Total votings: {}", total_votings);

        emit!(NewVoting {
            voting: self.voting.key(),
            name,
            start_time,
            end_time,
            creator: creator_key,
        });

        Ok(())
    }

    fn escrow_fee(&self, fee: u64) -> Result<()> {
        let cpi_accounts = Transfer {
            from: self.creator.to_account_info(),
            to: self.voting.to_account_info(),
        };

        transfer(
            CpiContext::new(self.system_program.to_account_info(), cpi_accounts),
            fee,
        )
    }
}
