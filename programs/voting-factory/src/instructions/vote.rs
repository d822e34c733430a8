use anchor_lang::prelude::*;

use crate::{
    address::name_salt,
    constants::*,
    events::Voting,
    state::{VoterRecord, VotingInstance},
};

// Accounts needed for casting a vote
#[derive(Accounts)]
pub struct CastVote<'info> {
    #[account(mut)]
    pub voter: Signer<'info>,

    #[account(
        mut,
        seeds = [VOTING_SEED, voting.factory.as_ref(), name_salt(&voting.name).as_ref()],
        bump = voting.bump
    )]
    pub voting: Account<'info, VotingInstance>,

    // One record per voter per instance. An existing record is loaded rather
    // than failing, so a second ballot surfaces as AlreadyVoted.
    #[account(
        init_if_needed,
        payer = voter,
        space = DISCRIMINATOR_SIZE + VoterRecord::INIT_SPACE,
        seeds = [VOTER_SEED, voting.key().as_ref(), voter.key().as_ref()],
        bump
    )]
    pub voter_record: Account<'info, VoterRecord>,

    pub system_program: Program<'info, System>,
}

impl<'info> CastVote<'info> {
    pub fn vote(&mut self, candidate_id: u64, bumps: &CastVoteBumps) -> Result<()> {
        let current_time = Clock::get()?.unix_timestamp;
        let voting_key = self.voting.key();
        let voter_key = self.voter.key();

        let total = self.voting.record_vote(
            &mut self.voter_record,
            voting_key,
            voter_key,
            candidate_id,
            current_time,
            bumps.voter_record,
        )?;

        msg!("Vote cast successfully!");
        msg!("Voter: {}", voter_key);
        msg!("Voting: {}", voting_key);
        msg!("Candidate {} now has {} votes", candidate_id, total);
        msg!("Total votes: {}", self.voting.total_votes);

        emit!(Voting {
            candidate_id,
            voter: voter_key,
            total,
        });

        Ok(())
    }
}
