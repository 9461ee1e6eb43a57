use anchor_lang::prelude::*;
use crate::constants::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_lamports;

/**
 * Account context for creating a new chama
 *
 * This instruction initializes a chama with the admin as its first member:
 * - Creates the chama PDA sized for the largest supported group
 * - Funds the vault PDA with its rent reserve so it exists from creation
 *
 * Access Control: Any signer; the signer becomes the admin
 *
 * Business Logic:
 * - One chama per (admin, name) pair; a second create fails instead of overwriting
 * - Configuration is immutable after creation
 * - The name is a PDA seed: names over MAX_NAME_LEN bytes fail seed derivation
 *   before the handler runs, so clients must run `Chama::validate_params`
 *   first to surface NameTooLong
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(name: String)]
pub struct CreateChama<'info> {
    /// The chama account (PDA)
    /// - Derived from: ["chama", name, admin]
    /// - Opened with init_if_needed so an existing record surfaces ChamaAlreadyExists
    #[account(
        init_if_needed,
        payer = admin,
        space = Chama::LEN,
        seeds = [CHAMA_SEED.as_bytes(), name.as_bytes(), admin.key().as_ref()],
        bump
    )]
    pub chama: Account<'info, Chama>,

    /// Vault PDA that will hold contributions
    /// - Derived from: ["vault", chama_key]
    /// - Plain system account; only this program can sign for it
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), chama.key().as_ref()],
        bump
    )]
    pub chama_vault: SystemAccount<'info>,

    /// The admin creating the chama
    /// - Pays for the chama account and the vault rent reserve
    #[account(mut)]
    pub admin: Signer<'info>,

    /// System program for account creation and the reserve transfer
    pub system_program: Program<'info, System>,
}

/**
 * Creates a new chama
 *
 * @param ctx - The account context containing chama, vault and admin accounts
 * @param name - Label of the chama (1..=32 bytes, also a PDA seed)
 * @param contribution_amount - Lamports each member pays per contribution
 * @param epoch_period - Seconds per round
 * @param max_members - Capacity of the group (2..=10)
 */
pub fn handle_create_chama(
    ctx: Context<CreateChama>,
    name: String,
    contribution_amount: u64,
    epoch_period: i64,
    max_members: u8,
) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let chama = &mut ctx.accounts.chama;

    chama.initialize(
        admin,
        name,
        contribution_amount,
        epoch_period,
        max_members,
        ctx.bumps.chama,
    )?;

    // Top the vault up to the rent-exempt minimum of a zero-data account
    let rent_reserve = Rent::get()?.minimum_balance(0);
    let vault_lamports = ctx.accounts.chama_vault.lamports();
    if vault_lamports < rent_reserve {
        transfer_lamports(
            ctx.accounts.admin.to_account_info(),
            ctx.accounts.chama_vault.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
            rent_reserve - vault_lamports,
            None,
        )?;
    }

    emit_cpi!(ChamaCreated {
        chama: ctx.accounts.chama.key(),
        admin,
        vault: ctx.accounts.chama_vault.key(),
        name: ctx.accounts.chama.name.clone(),
        contribution_amount,
        epoch_period,
        max_members,
    });

    Ok(())
}
