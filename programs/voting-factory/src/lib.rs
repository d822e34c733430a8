use anchor_lang::prelude::*;

// Import our modules
pub mod address;
pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

// Import instruction handlers
use instructions::*;

declare_id!("HKr8MPZ5vZTa2f2hSH5tbwjCQBnRaxiLZwXsMYeNQhxY");

#[program]
pub mod voting_factory {
    use super::*;

    /// Create the singleton factory; the signer becomes its owner
    pub fn initialize_factory(ctx: Context<InitializeFactory>) -> Result<()> {
        ctx.accounts.initialize_factory(&ctx.bumps)
    }

    /// Create a voting instance at the address derived from its name,
    /// escrowing `fee` lamports in it
    pub fn create_voting(
        ctx: Context<CreateVoting>,
        name: String,
        start_time: i64,
        end_time: i64,
        fee: u64,
    ) -> Result<()> {
        ctx.accounts
            .create_voting(name, start_time, end_time, fee, &ctx.bumps)
    }

    /// Change the minimum creation fee (factory owner only)
    pub fn set_min_fee(ctx: Context<SetMinFee>, min_fee: u64) -> Result<()> {
        ctx.accounts.set_min_fee(min_fee)
    }

    pub fn transfer_factory_ownership(
        ctx: Context<TransferFactoryOwnership>,
        new_owner: Pubkey,
    ) -> Result<()> {
        ctx.accounts.transfer_ownership(new_owner)
    }

    /// Register the next candidate before voting starts (instance owner only)
    pub fn register_candidate(
        ctx: Context<RegisterCandidate>,
        candidate_id: u64,
        name: String,
        image_uri: String,
    ) -> Result<()> {
        ctx.accounts.register_candidate(candidate_id, name, image_uri)
    }

    /// Cast the signer's single ballot while voting is active
    pub fn vote(ctx: Context<CastVote>, candidate_id: u64) -> Result<()> {
        ctx.accounts.vote(candidate_id, &ctx.bumps)
    }

    /// Resolve the winner and pay out the escrow once voting has closed
    /// (instance owner only)
    pub fn get_winner_and_distribute_reward(ctx: Context<DistributeReward>) -> Result<()> {
        ctx.accounts.get_winner_and_distribute_reward()
    }

    pub fn transfer_voting_ownership(
        ctx: Context<TransferVotingOwnership>,
        new_owner: Pubkey,
    ) -> Result<()> {
        ctx.accounts.transfer_ownership(new_owner)
    }
}
