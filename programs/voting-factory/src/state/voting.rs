use anchor_lang::prelude::*;
use ownable::Ownable;

use crate::{
    constants::*,
    error::{safe_add_u64, safe_sub_u64, VotingError},
    state::{Factory, VoterRecord},
};

/// Lifecycle phase of a voting instance.
///
/// Derived from the clock and the `distributed` flag on every call; nothing
/// ever advances it explicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// `now < start_time`: the owner may register candidates
    Registration,
    /// `start_time <= now < end_time`: ballots are accepted
    Active,
    /// `now >= end_time`, reward not yet paid
    Closed,
    /// Reward paid, instance is inert
    Distributed,
}

/// Parameters submitted to the factory to create a voting instance
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VotingCreationRequest {
    pub name: String,
    pub start_time: i64,
    pub end_time: i64,
    /// Lamports escrowed into the new instance
    pub fee: u64,
}

impl VotingCreationRequest {
    /// Validate the request against the factory policy.
    /// The fee is checked first so an underpaid request always reports it.
    pub fn validate(&self, factory: &Factory, now: i64) -> Result<()> {
        factory.check_fee(self.fee)?;

        require!(self.end_time > 0, VotingError::ZeroDuration);

        if self.end_time <= self.start_time || self.start_time <= now {
            msg!(
                "Invalid voting time: start={}, end={}, now={}",
                self.start_time,
                self.end_time,
                now
            );
            return Err(VotingError::InvalidVotingTime.into());
        }

        require!(
            is_valid_voting_name(&self.name),
            VotingError::InvalidName
        );

        Ok(())
    }
}

/// A registered candidate
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct Candidate {
    pub id: u64,

    #[max_len(MAX_CANDIDATE_NAME_LENGTH)]
    pub name: String,

    #[max_len(MAX_IMAGE_URI_LENGTH)]
    pub image_uri: String,

    /// Receives the escrow if this candidate wins
    pub wallet: Pubkey,

    pub vote_count: u64,
}

/// Outcome of a settlement, computed before any lamports move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settlement {
    /// Winning candidate, or `NO_CANDIDATE` when nobody registered
    pub winning_candidate_id: u64,
    pub beneficiary: Pubkey,
    pub amount: u64,
}

/// One voting event created by the factory
/// PDA: ["voting", factory.key(), sha256(name)]
#[account]
#[derive(InitSpace, Default)]
pub struct VotingInstance {
    /// The creator; registers candidates and triggers settlement
    pub ownable: Ownable,

    /// Factory that created this instance
    pub factory: Pubkey,

    #[max_len(MAX_NAME_LENGTH)]
    pub name: String,

    pub start_time: i64,
    pub end_time: i64,
    pub created_at: i64,

    /// Candidates in registration order, so ids ascend with the index
    #[max_len(MAX_CANDIDATES)]
    pub candidates: Vec<Candidate>,

    pub last_candidate_index: u64,
    pub total_votes: u64,

    /// Lamports held for the winner; zero once distributed
    pub escrow: u64,

    pub distributed: bool,
    pub winning_candidate_id: u64,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl VotingInstance {
    /// A zeroed account has no owner yet
    pub fn is_initialized(&self) -> bool {
        self.ownable.owner() != Pubkey::default()
    }

    /// Populate a freshly created account. An account that already holds an
    /// instance means the name is taken.
    pub fn open(
        &mut self,
        factory: Pubkey,
        creator: Pubkey,
        request: VotingCreationRequest,
        now: i64,
        bump: u8,
    ) -> Result<()> {
        if self.is_initialized() {
            msg!("Voting '{}' already exists", self.name);
            return Err(crate::log_error!(VotingError::DuplicateName, "create_voting").into());
        }

        *self = VotingInstance {
            ownable: Ownable::new(creator),
            factory,
            name: request.name,
            start_time: request.start_time,
            end_time: request.end_time,
            created_at: now,
            candidates: Vec::new(),
            last_candidate_index: 0,
            total_votes: 0,
            escrow: request.fee,
            distributed: false,
            winning_candidate_id: NO_CANDIDATE,
            bump,
        };

        Ok(())
    }

    pub fn owner(&self) -> Pubkey {
        self.ownable.owner()
    }

    pub fn phase(&self, now: i64) -> Phase {
        if self.distributed {
            Phase::Distributed
        } else if now < self.start_time {
            Phase::Registration
        } else if now < self.end_time {
            Phase::Active
        } else {
            Phase::Closed
        }
    }

    pub fn last_candidate_index(&self) -> u64 {
        self.last_candidate_index
    }

    pub fn candidate(&self, candidate_id: u64) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id == candidate_id)
    }

    pub fn candidate_total_votes(&self, candidate_id: u64) -> Result<u64> {
        self.candidate(candidate_id)
            .map(|c| c.vote_count)
            .ok_or(VotingError::InvalidCandidateId.into())
    }

    /// Add the next candidate. Ids are strictly sequential from 1.
    pub fn register_candidate(
        &mut self,
        caller: &Pubkey,
        candidate_id: u64,
        name: String,
        image_uri: String,
        wallet: Pubkey,
        now: i64,
    ) -> Result<()> {
        self.ownable.only_owner(caller)?;

        require!(
            self.phase(now) == Phase::Registration,
            VotingError::VotingAlreadyStarted
        );

        let expected_id = safe_add_u64(self.last_candidate_index, 1)?;
        if candidate_id != expected_id {
            msg!(
                "Invalid candidate id {}: expected {}",
                candidate_id,
                expected_id
            );
            return Err(
                crate::log_error!(VotingError::InvalidCandidateId, "register_candidate").into(),
            );
        }

        require!(is_valid_candidate_name(&name), VotingError::InvalidName);
        require!(
            image_uri.len() <= MAX_IMAGE_URI_LENGTH,
            VotingError::ImageUriTooLong
        );
        require!(
            !self.candidates.iter().any(|c| c.name == name),
            VotingError::DuplicateCandidateName
        );
        require!(
            self.candidates.len() < MAX_CANDIDATES,
            VotingError::TooManyCandidates
        );

        self.candidates.push(Candidate {
            id: candidate_id,
            name,
            image_uri,
            wallet,
            vote_count: 0,
        });
        self.last_candidate_index = candidate_id;

        Ok(())
    }

    /// Count one ballot and mark the voter's record. Returns the candidate's
    /// new running total.
    pub fn record_vote(
        &mut self,
        record: &mut VoterRecord,
        voting_key: Pubkey,
        voter: Pubkey,
        candidate_id: u64,
        now: i64,
        record_bump: u8,
    ) -> Result<u64> {
        require!(
            self.phase(now) == Phase::Active,
            VotingError::VotingNotActive
        );
        require!(
            self.candidates.len() >= MIN_CANDIDATES_TO_VOTE,
            VotingError::InvalidCandidateTotal
        );

        let index = self
            .candidates
            .iter()
            .position(|c| c.id == candidate_id)
            .ok_or(VotingError::InvalidCandidateId)?;

        record.ensure_not_voted()?;

        let candidate_total = safe_add_u64(self.candidates[index].vote_count, 1)?;
        let total_votes = safe_add_u64(self.total_votes, 1)?;

        self.candidates[index].vote_count = candidate_total;
        self.total_votes = total_votes;
        record.mark_voted(voting_key, voter, candidate_id, now, record_bump);

        Ok(candidate_total)
    }

    /// Candidate with the strictly highest vote count.
    /// Ties go to the lowest candidate id.
    pub fn winner(&self) -> Option<&Candidate> {
        self.candidates
            .iter()
            .fold(None, |best: Option<&Candidate>, candidate| match best {
                Some(leader) if leader.vote_count >= candidate.vote_count => Some(leader),
                _ => Some(candidate),
            })
    }

    /// Resolve the winner and release the escrow exactly once.
    ///
    /// Everything the instance holds above its rent reserve (`available`)
    /// goes to the winner's registered wallet; with no candidates it returns
    /// to the owner. That covers the creation fee plus any lamports sent to
    /// the address before or after creation. `beneficiary` must be that
    /// account. The caller moves the lamports; this only updates the books.
    pub fn settle(
        &mut self,
        caller: &Pubkey,
        beneficiary: &Pubkey,
        available: u64,
        now: i64,
    ) -> Result<Settlement> {
        self.ownable.only_owner(caller)?;

        match self.phase(now) {
            Phase::Registration | Phase::Active => {
                return Err(VotingError::VotingStillActive.into())
            }
            Phase::Distributed => return Err(VotingError::AlreadyDistributed.into()),
            Phase::Closed => {}
        }

        let (winning_candidate_id, expected_beneficiary) = match self.winner() {
            Some(winner) => (winner.id, winner.wallet),
            None => (NO_CANDIDATE, self.owner()),
        };

        require_keys_eq!(
            *beneficiary,
            expected_beneficiary,
            VotingError::InvalidBeneficiary
        );

        let settlement = Settlement {
            winning_candidate_id,
            beneficiary: expected_beneficiary,
            amount: available,
        };

        self.escrow = 0;
        self.distributed = true;
        self.winning_candidate_id = winning_candidate_id;

        Ok(settlement)
    }
}

/// Lamports an instance can pay out while keeping its rent-exempt reserve
pub fn distributable_lamports(balance: u64, rent_minimum: u64) -> Result<u64> {
    safe_sub_u64(balance, rent_minimum)
}
