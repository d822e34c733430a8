use anchor_lang::prelude::*;

use crate::{
    address::name_salt,
    constants::*,
    error::VotingError,
    events::NewCandidate,
    state::VotingInstance,
};

#[derive(Accounts)]
pub struct RegisterCandidate<'info> {
    // Must be the instance owner; checked against the stored capability
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [VOTING_SEED, voting.factory.as_ref(), name_salt(&voting.name).as_ref()],
        bump = voting.bump
    )]
    pub voting: Account<'info, VotingInstance>,

    /// CHECK: payout address for this candidate, only its key is stored
    pub candidate_wallet: UncheckedAccount<'info>,
}

impl<'info> RegisterCandidate<'info> {
    pub fn register_candidate(
        &mut self,
        candidate_id: u64,
        name: String,
        image_uri: String,
    ) -> Result<()> {
        let current_time = Clock::get()?.unix_timestamp;
        let wallet = self.candidate_wallet.key();

        // The instance cannot pay itself
        require_keys_neq!(wallet, self.voting.key(), VotingError::InvalidBeneficiary);

        self.voting.register_candidate(
            &self.owner.key(),
            candidate_id,
            name.clone(),
            image_uri.clone(),
            wallet,
            current_time,
        )?;

        msg!("Candidate registered!");
        msg!("Voting: {}", self.voting.key());
        msg!("Candidate {}: '{}' (wallet {})", candidate_id, name, wallet);

        emit!(NewCandidate {
            candidate_id,
            name,
            image_uri,
        });

        Ok(())
    }
}
