// Export all instruction modules

pub mod initialize_factory;
pub mod create_voting;
pub mod set_min_fee;
pub mod transfer_ownership;
pub mod register_candidate;
pub mod vote;
pub mod distribute_reward;

// Re-export the instruction structs for easy access
pub use initialize_factory::*;
pub use create_voting::*;
pub use set_min_fee::*;
pub use transfer_ownership::*;
pub use register_candidate::*;
pub use vote::*;
pub use distribute_reward::*;
