use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hash;

use crate::constants::*;

/// Salt for a voting instance address: sha256 of the name.
/// Depends on nothing but the name, so the name alone decides collisions.
pub fn name_salt(name: &str) -> [u8; 32] {
    hash(name.as_bytes()).to_bytes()
}

pub fn derive_factory_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[FACTORY_SEED], &crate::ID)
}

/// Address a voting instance named `name` has (or will have) under `factory`.
///
/// Pure function of the program id, the factory and the name: anyone can
/// compute it before the instance exists.
pub fn derive_voting_address(factory: &Pubkey, name: &str) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[VOTING_SEED, factory.as_ref(), name_salt(name).as_ref()],
        &crate::ID,
    )
}

pub fn derive_voter_address(voting: &Pubkey, voter: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VOTER_SEED, voting.as_ref(), voter.as_ref()], &crate::ID)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_salt_is_deterministic() {
        assert_eq!(name_salt("Test Vote"), name_salt("Test Vote"));
        assert_ne!(name_salt("Test Vote"), name_salt("Test vote"));
        assert_ne!(name_salt("Test Vote"), name_salt("Test Vote "));
    }

    #[test]
    fn test_voting_address_is_reproducible() {
        let (factory, _) = derive_factory_address();
        let (first, bump) = derive_voting_address(&factory, "Test Vote");
        let (second, second_bump) = derive_voting_address(&factory, "Test Vote");

        assert_eq!(first, second);
        assert_eq!(bump, second_bump);

        // The derived address is the canonical PDA for these seeds
        let recreated = Pubkey::create_program_address(
            &[VOTING_SEED, factory.as_ref(), name_salt("Test Vote").as_ref(), &[bump]],
            &crate::ID,
        )
        .unwrap();
        assert_eq!(recreated, first);
    }

    #[test]
    fn test_voting_address_depends_on_name_and_factory() {
        let (factory, _) = derive_factory_address();
        let other_factory = Pubkey::new_unique();

        let (a, _) = derive_voting_address(&factory, "Test Vote");
        let (b, _) = derive_voting_address(&factory, "Another Vote");
        let (c, _) = derive_voting_address(&other_factory, "Test Vote");

        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, factory);
    }

    #[test]
    fn test_voter_address_is_per_voter_per_voting() {
        let voting = Pubkey::new_unique();
        let voter = Pubkey::new_unique();

        assert_eq!(
            derive_voter_address(&voting, &voter),
            derive_voter_address(&voting, &voter)
        );
        assert_ne!(
            derive_voter_address(&voting, &voter).0,
            derive_voter_address(&voting, &Pubkey::new_unique()).0
        );
        assert_ne!(
            derive_voter_address(&voting, &voter).0,
            derive_voter_address(&Pubkey::new_unique(), &voter).0
        );
    }
}
