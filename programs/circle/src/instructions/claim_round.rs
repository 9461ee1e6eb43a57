use anchor_lang::prelude::*;
use crate::constants::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{payable_balance, transfer_lamports};

/**
 * Account context for claiming a round
 *
 * Pays the whole vault (above its rent reserve) to the member owed the
 * current round, then advances the rotation.
 *
 * Access Control: Any signer may submit the claim, but the recipient must be
 * members[current_round % member_count]
 *
 * Business Logic:
 * - Only after the chama is active and the epoch deadline has passed
 * - The next deadline is now + epoch_period, so an immediate second claim
 *   fails with EpochNotEnded
 * - After max_members rounds the cycle wraps: current_round returns to 0,
 *   total_rounds_completed increments and claim flags reset
 */
#[event_cpi]
#[derive(Accounts)]
pub struct ClaimRound<'info> {
    /// The chama whose round is being claimed
    #[account(mut)]
    pub chama: Account<'info, Chama>,

    /// Vault holding the round's contributions
    /// - Derived from: ["vault", chama_key]
    /// - Signs the payout with its PDA seeds
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), chama.key().as_ref()],
        bump
    )]
    pub chama_vault: SystemAccount<'info>,

    /// Member receiving the payout
    /// CHECK: Compared against the round-robin recipient in the handler
    #[account(mut)]
    pub recipient: UncheckedAccount<'info>,

    /// Account submitting the claim
    pub caller: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_claim_round(ctx: Context<ClaimRound>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    // ===== VALIDATION + EFFECTS PHASE =====

    let rent_reserve = Rent::get()?.minimum_balance(0);
    let amount = payable_balance(ctx.accounts.chama_vault.lamports(), rent_reserve);

    let chama_key = ctx.accounts.chama.key();
    let recipient = ctx.accounts.recipient.key();
    let outcome = ctx.accounts.chama.settle_round(&recipient, amount, now)?;
    let total_rounds_completed = ctx.accounts.chama.total_rounds_completed;

    // ===== INTERACTIONS PHASE (Payout) =====

    let seeds = &[
        VAULT_SEED.as_bytes(),
        chama_key.as_ref(),
        &[ctx.bumps.chama_vault],
    ];
    let signer = &[&seeds[..]];

    transfer_lamports(
        ctx.accounts.chama_vault.to_account_info(),
        ctx.accounts.recipient.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
        outcome.amount,
        Some(signer),
    )?;

    emit_cpi!(RoundClaimed {
        chama: chama_key,
        caller: ctx.accounts.caller.key(),
        recipient: outcome.recipient,
        round: outcome.round,
        amount: outcome.amount,
        next_epoch_end_time: outcome.next_epoch_end_time,
    });

    if outcome.cycle_completed {
        emit_cpi!(CycleCompleted {
            chama: chama_key,
            total_rounds_completed,
        });
    }

    Ok(())
}
