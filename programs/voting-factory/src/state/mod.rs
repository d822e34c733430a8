// Account layouts and the pure state transitions behind each instruction

pub mod factory;
pub mod voter;
pub mod voting;

pub use factory::*;
pub use voter::*;
pub use voting::*;
