pub mod chama_state;

pub use chama_state::*;
