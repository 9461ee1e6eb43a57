pub mod address;
pub mod lamports;

pub use address::*;
pub use lamports::*;
