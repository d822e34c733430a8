use anchor_lang::prelude::*;

/// Custom error types for the voting factory
/// Every rejected instruction leaves all accounts untouched
#[error_code]
pub enum VotingError {
    // Creation Errors
    #[msg("Creation fee is below the factory minimum")]
    InsufficientFunds,

    #[msg("Start time must be in the future and before end time")]
    InvalidVotingTime,

    #[msg("Voting time must be greater than 0")]
    ZeroDuration,

    #[msg("Voting name already exists")]
    DuplicateName,

    #[msg("Name is empty or too long")]
    InvalidName,

    #[msg("Minimum fee must cover the rent-exempt minimum of an empty account")]
    InvalidFee,

    // Candidate Errors
    #[msg("Candidate name already exists")]
    DuplicateCandidateName,

    #[msg("Invalid candidate id")]
    InvalidCandidateId,

    #[msg("Image URI is too long")]
    ImageUriTooLong,

    #[msg("Candidate limit reached")]
    TooManyCandidates,

    // Phase Errors
    #[msg("Voting has started")]
    VotingAlreadyStarted,

    #[msg("Voting is not active")]
    VotingNotActive,

    #[msg("Voting is still active")]
    VotingStillActive,

    // Ballot Errors
    #[msg("At least two candidates are required to vote")]
    InvalidCandidateTotal,

    #[msg("Voter has already voted")]
    AlreadyVoted,

    // Settlement Errors
    #[msg("Reward has already been distributed")]
    AlreadyDistributed,

    #[msg("Beneficiary does not match the winning candidate")]
    InvalidBeneficiary,

    // Math Errors
    #[msg("Mathematical overflow")]
    MathOverflow,
}

impl VotingError {
    /// Get error code as u32 for logging
    pub fn error_code(&self) -> u32 {
        match self {
            // Creation errors: 1000-1099
            VotingError::InsufficientFunds => 1001,
            VotingError::InvalidVotingTime => 1002,
            VotingError::ZeroDuration => 1003,
            VotingError::DuplicateName => 1004,
            VotingError::InvalidName => 1005,
            VotingError::InvalidFee => 1006,

            // Candidate errors: 1100-1199
            VotingError::DuplicateCandidateName => 1101,
            VotingError::InvalidCandidateId => 1102,
            VotingError::ImageUriTooLong => 1103,
            VotingError::TooManyCandidates => 1104,

            // Phase errors: 1200-1299
            VotingError::VotingAlreadyStarted => 1201,
            VotingError::VotingNotActive => 1202,
            VotingError::VotingStillActive => 1203,

            // Ballot errors: 1300-1399
            VotingError::InvalidCandidateTotal => 1301,
            VotingError::AlreadyVoted => 1302,

            // Settlement errors: 1400-1499
            VotingError::AlreadyDistributed => 1401,
            VotingError::InvalidBeneficiary => 1402,

            // Math errors: 1500-1599
            VotingError::MathOverflow => 1501,
        }
    }

    /// Get human-readable error category
    pub fn category(&self) -> &'static str {
        match self.error_code() {
            1000..=1099 => "Voting Creation",
            1100..=1199 => "Candidate Registration",
            1200..=1299 => "Phase Violation",
            1300..=1399 => "Ballot",
            1400..=1499 => "Settlement",
            1500..=1599 => "Mathematical Operations",
            _ => "Unknown",
        }
    }
}

/// Log an error with its category, then return it
#[macro_export]
macro_rules! log_error {
    ($error:expr, $context:expr) => {{
        let error = $error;
        msg!(
            "Error {}: {} in context: {}",
            error.error_code(),
            error.category(),
            $context
        );
        error
    }};
}

/// Helper function to safely add two u64 values
pub fn safe_add_u64(a: u64, b: u64) -> Result<u64> {
    a.checked_add(b).ok_or(VotingError::MathOverflow.into())
}

/// Helper function to safely subtract two u64 values
pub fn safe_sub_u64(a: u64, b: u64) -> Result<u64> {
    a.checked_sub(b).ok_or(VotingError::MathOverflow.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(VotingError::InsufficientFunds.error_code(), 1001);
        assert_eq!(VotingError::DuplicateCandidateName.error_code(), 1101);
        assert_eq!(VotingError::VotingNotActive.error_code(), 1202);
        assert_eq!(VotingError::AlreadyVoted.error_code(), 1302);
        assert_eq!(VotingError::AlreadyDistributed.error_code(), 1401);
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(VotingError::DuplicateName.category(), "Voting Creation");
        assert_eq!(VotingError::InvalidCandidateId.category(), "Candidate Registration");
        assert_eq!(VotingError::VotingStillActive.category(), "Phase Violation");
        assert_eq!(VotingError::InvalidCandidateTotal.category(), "Ballot");
        assert_eq!(VotingError::InvalidBeneficiary.category(), "Settlement");
    }

    #[test]
    fn test_safe_math_functions() {
        assert_eq!(safe_add_u64(100, 200).unwrap(), 300);
        assert!(safe_add_u64(u64::MAX, 1).is_err());

        assert_eq!(safe_sub_u64(200, 100).unwrap(), 100);
        assert!(safe_sub_u64(100, 200).is_err());
    }
}
