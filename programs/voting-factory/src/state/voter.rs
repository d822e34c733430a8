use anchor_lang::prelude::*;

use crate::error::VotingError;

// Voter Record - proves that a voter has voted on a specific voting instance
// PDA: ["voter", voting.key(), voter.key()], so there is one per voter per instance
#[account]
#[derive(InitSpace, Default)]
pub struct VoterRecord {
    // Which voting instance this record belongs to
    pub voting: Pubkey,

    // Who cast the vote
    pub voter: Pubkey,

    // Which candidate they voted for
    pub candidate_id: u64,

    // Flips to true once and never back
    pub has_voted: bool,

    // When the vote was cast
    pub voted_at: i64,

    pub bump: u8,
}

impl VoterRecord {
    pub fn has_voted(&self) -> bool {
        self.has_voted
    }

    /// Fail if this record already holds a ballot
    pub fn ensure_not_voted(&self) -> Result<()> {
        require!(!self.has_voted, VotingError::AlreadyVoted);
        Ok(())
    }

    pub(crate) fn mark_voted(
        &mut self,
        voting: Pubkey,
        voter: Pubkey,
        candidate_id: u64,
        voted_at: i64,
        bump: u8,
    ) {
        self.voting = voting;
        self.voter = voter;
        self.candidate_id = candidate_id;
        self.has_voted = true;
        self.voted_at = voted_at;
        self.bump = bump;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_record_has_not_voted() {
        let record = VoterRecord::default();
        assert!(!record.has_voted());
        assert!(record.ensure_not_voted().is_ok());
    }

    #[test]
    fn test_marked_record_rejects_second_ballot() {
        let mut record = VoterRecord::default();
        let voting = Pubkey::new_unique();
        let voter = Pubkey::new_unique();

        record.mark_voted(voting, voter, 1, 42, 254);

        assert!(record.has_voted());
        assert_eq!(record.voting, voting);
        assert_eq!(record.voter, voter);
        assert_eq!(record.candidate_id, 1);
        assert_eq!(
            record.ensure_not_voted().unwrap_err(),
            anchor_lang::error::Error::from(VotingError::AlreadyVoted)
        );
    }
}
