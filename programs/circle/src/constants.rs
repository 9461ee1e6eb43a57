use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * Bounds on chama configuration and the seeds used to derive the chama and
 * vault PDAs. Exported to the IDL so clients can validate and derive
 * addresses before submitting transactions.
 */

/// ===== CONFIGURATION BOUNDS =====

/// Maximum length of a chama name in bytes
/// - The name is used verbatim as a PDA seed, which is capped at 32 bytes
/// - A longer name fails PDA derivation in the runtime before create_chama
///   runs, so clients must check names with `Chama::validate_params` to get
///   NameTooLong instead of a seed error
#[constant]
pub const MAX_NAME_LEN: usize = 32;

/// Longest allowed round (365 days)
/// - Keeps every epoch deadline (now + epoch_period) far inside i64 range
/// - Value: 365 days * 24 hours * 60 minutes * 60 seconds = 31,536,000 seconds
#[constant]
pub const MAX_EPOCH_PERIOD: i64 = 365 * 24 * 60 * 60; // 365 days in seconds

/// Smallest group that can rotate a payout
#[constant]
pub const MIN_MEMBERS: u8 = 2;

/// Largest supported group
/// - The chama account is sized for this many members at creation
#[constant]
pub const MAX_MEMBERS: u8 = 10;

/// ===== PDA SEED CONSTANTS =====

/// Seed for chama PDA derivation
/// - Used in: ["chama", name, admin]
/// - One chama per (admin, name) pair
#[constant]
pub const CHAMA_SEED: &str = "chama";

/// Seed for vault PDA derivation
/// - Used in: ["vault", chama_key]
/// - Holds pooled contributions; only the program can sign for it
#[constant]
pub const VAULT_SEED: &str = "vault";
