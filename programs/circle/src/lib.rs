use anchor_lang::prelude::*;

declare_id!("8vHAoAwSX4QeQL4624iRMRWt8gKgHRgb1rJFqDK917we");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Circle Program
 *
 * A rotating savings and credit association ("chama"): a fixed-size group
 * whose members each pay a fixed amount of lamports into a shared vault every
 * round, while the whole pot goes to one member per round in join order.
 *
 * Key Features:
 * - Deterministic chama addressing per (admin, name)
 * - Program-controlled vault; no member can move pooled funds
 * - Epoch-gated payouts with round-robin recipients
 * - Endless cycles: after every member has been paid once the rotation resets
 * - Cross-program call event emission for indexers
 *
 * Architecture:
 * - Chama PDA: Stores configuration, membership and rotation state
 * - Vault PDA: System account holding the pooled contributions
 *
 * Workflow:
 * 1. Admin creates the chama (admin is member #1)
 * 2. Members join until max_members; the last join starts the first epoch
 * 3. Members contribute during the round
 * 4. After the epoch ends, anyone submits claim_round for the owed member
 * 5. Steps 3-4 repeat indefinitely
 */
#[program]
pub mod circle {
    use super::*;

    /**
     * Creates a new chama
     *
     * @param ctx - Account context containing chama, vault and admin accounts
     * @param name - Label of the chama, part of its PDA seeds
     * @param contribution_amount - Lamports per contribution
     * @param epoch_period - Seconds per round
     * @param max_members - Capacity of the group
     *
     * Access Control: Any signer (becomes admin)
     */
    pub fn create_chama(
        ctx: Context<CreateChama>,
        name: String,
        contribution_amount: u64,
        epoch_period: i64,
        max_members: u8,
    ) -> Result<()> {
        handle_create_chama(ctx, name, contribution_amount, epoch_period, max_members)
    }

    /**
     * Joins a forming chama
     *
     * Access Control: Any non-member signer
     * Note: The join that fills the chama activates it
     */
    pub fn join_chama(ctx: Context<JoinChama>) -> Result<()> {
        handle_join_chama(ctx)
    }

    /**
     * Pays the fixed contribution into the vault
     *
     * Access Control: Members only
     */
    pub fn contribute(ctx: Context<Contribute>) -> Result<()> {
        handle_contribute(ctx)
    }

    /**
     * Pays the vault out to the current round's recipient and advances the rotation
     *
     * Access Control: Any signer; recipient must be the member owed this round
     */
    pub fn claim_round(ctx: Context<ClaimRound>) -> Result<()> {
        handle_claim_round(ctx)
    }
}
