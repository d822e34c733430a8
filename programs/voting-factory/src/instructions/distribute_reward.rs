use anchor_lang::prelude::*;

use crate::{
    address::name_salt,
    constants::*,
    error::{safe_add_u64, safe_sub_u64},
    events::WinnerAndDistributionReward,
    state::{distributable_lamports, VotingInstance},
};

// Accounts needed to settle a closed voting instance
#[derive(Accounts)]
pub struct DistributeReward<'info> {
    // Must be the instance owner
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [VOTING_SEED, voting.factory.as_ref(), name_salt(&voting.name).as_ref()],
        bump = voting.bump
    )]
    pub voting: Account<'info, VotingInstance>,

    /// CHECK: must be the winning candidate's wallet (or the owner when no
    /// candidate registered); verified by VotingInstance::settle
    #[account(mut)]
    pub beneficiary: UncheckedAccount<'info>,
}

impl<'info> DistributeReward<'info> {
    pub fn get_winner_and_distribute_reward(&mut self) -> Result<()> {
        let current_time = Clock::get()?.unix_timestamp;
        let owner_key = self.owner.key();
        let beneficiary_key = self.beneficiary.key();

        let voting_info = self.voting.to_account_info();
        let rent_minimum = Rent::get()?.minimum_balance(voting_info.data_len());
        let available = distributable_lamports(voting_info.lamports(), rent_minimum)?;

        let settlement =
            self.voting
                .settle(&owner_key, &beneficiary_key, available, current_time)?;

        self.pay_out(settlement.amount)?;

        msg!("Voting settled!");
        msg!("Voting: {}", self.voting.key());
        msg!("Total votes: {}", self.voting.total_votes);
        for candidate in self.voting.candidates.iter() {
            msg!(
                "Candidate {}: '{}' - {} votes",
                candidate.id,
                candidate.name,
                candidate.vote_count
            );
        }
        msg!(
            "Winner: {} - paid {} lamports to {}",
            settlement.winning_candidate_id,
            settlement.amount,
            settlement.beneficiary
        );

        emit!(WinnerAndDistributionReward {
            winning_candidate_id: settlement.winning_candidate_id,
            amount: settlement.amount,
        });

        Ok(())
    }

    // The instance is program-owned, so lamports move without a CPI.
    // The rent-exempt reserve stays so the record survives for queries.
    fn pay_out(&self, amount: u64) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }

        let voting_info = self.voting.to_account_info();
        let beneficiary_info = self.beneficiary.to_account_info();

        let remaining = safe_sub_u64(voting_info.lamports(), amount)?;
        let credited = safe_add_u64(beneficiary_info.lamports(), amount)?;

        **voting_info.try_borrow_mut_lamports()? = remaining;
        **beneficiary_info.try_borrow_mut_lamports()? = credited;

        Ok(())
    }
}
