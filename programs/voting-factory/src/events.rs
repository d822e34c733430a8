use anchor_lang::prelude::*;

#[event]
pub struct NewVoting {
    pub voting: Pubkey,
    pub name: String,
    pub start_time: i64,
    pub end_time: i64,
    pub creator: Pubkey,
}

#[event]
pub struct NewCandidate {
    pub candidate_id: u64,
    pub name: String,
    pub image_uri: String,
}

/// A ballot was counted; `total` is the candidate's running tally
#[event]
pub struct Voting {
    pub candidate_id: u64,
    pub voter: Pubkey,
    pub total: u64,
}

/// `winning_candidate_id` is 0 when the escrow went back to the owner
#[event]
pub struct WinnerAndDistributionReward {
    pub winning_candidate_id: u64,
    pub amount: u64,
}

/// `account` is the factory or voting instance whose owner changed
#[event]
pub struct OwnershipTransferred {
    pub account: Pubkey,
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}

#[event]
pub struct MinFeeUpdated {
    pub previous_min_fee: u64,
    pub min_fee: u64,
}
