// PDA Seeds for deterministic address generation

// Seed for the Factory PDA: ["factory"]
// One factory per program deployment
pub const FACTORY_SEED: &[u8] = b"factory";

// Seed for VotingInstance PDAs: ["voting", factory.key(), sha256(name)]
// The name hash is the salt, so the address is predictable from the name alone
pub const VOTING_SEED: &[u8] = b"voting";

// Seed for VoterRecord PDAs: ["voter", voting.key(), voter.key()]
// One record per voter per voting instance
pub const VOTER_SEED: &[u8] = b"voter";

// Fee policy

/// Lamports per SOL
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Default minimum creation fee (0.1 SOL)
pub const MIN_FEE: u64 = LAMPORTS_PER_SOL / 10;

// Maximum values for validation
pub const MAX_NAME_LENGTH: usize = 64;
pub const MAX_CANDIDATE_NAME_LENGTH: usize = 50;
pub const MAX_IMAGE_URI_LENGTH: usize = 200;
pub const MAX_CANDIDATES: usize = 10;

// A vote needs something to choose between
pub const MIN_CANDIDATES_TO_VOTE: usize = 2;

// Winner id reported when no candidate registered
pub const NO_CANDIDATE: u64 = 0;

// Anchor discriminator size (8 bytes)
pub const DISCRIMINATOR_SIZE: usize = 8;

/// Check a voting name fits the account layout
pub fn is_valid_voting_name(name: &str) -> bool {
    !name.is_empty() && name.len() <= MAX_NAME_LENGTH
}

/// Check a candidate name fits the account layout
pub fn is_valid_candidate_name(name: &str) -> bool {
    !name.is_empty() && name.len() <= MAX_CANDIDATE_NAME_LENGTH
}
