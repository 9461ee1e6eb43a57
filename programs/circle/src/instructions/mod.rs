pub mod create_chama;
pub mod join_chama;
pub mod contribute;
pub mod claim_round;

pub use create_chama::*;
pub use join_chama::*;
pub use contribute::*;
pub use claim_round::*;
