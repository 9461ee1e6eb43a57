use anchor_lang::prelude::*;
use crate::constants::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_lamports;

/**
 * Account context for contributing to a chama
 *
 * Moves exactly `contribution_amount` lamports from the member to the vault.
 *
 * Access Control: Members only
 *
 * Business Logic:
 * - No per-round bookkeeping: the vault simply accumulates until the next
 *   claim drains it
 * - Insufficient member funds fail inside the System Program transfer
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Contribute<'info> {
    /// The chama being contributed to
    pub chama: Account<'info, Chama>,

    /// The contributing member
    #[account(mut)]
    pub member: Signer<'info>,

    /// Vault receiving the contribution
    /// - Derived from: ["vault", chama_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), chama.key().as_ref()],
        bump
    )]
    pub chama_vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_contribute(ctx: Context<Contribute>) -> Result<()> {
    let chama = &ctx.accounts.chama;
    let member = ctx.accounts.member.key();

    chama.check_contributor(&member)?;

    let amount = chama.contribution_amount;
    transfer_lamports(
        ctx.accounts.member.to_account_info(),
        ctx.accounts.chama_vault.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
        amount,
        None,
    )?;

    emit_cpi!(ContributionMade {
        chama: chama.key(),
        member,
        amount,
        round: chama.current_round,
    });

    Ok(())
}
