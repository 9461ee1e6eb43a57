use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

/// Native lamport transfer through the System Program
/// - Pass signer seeds when `from` is a program-owned PDA such as the vault
pub fn transfer_lamports<'a>(
    from: AccountInfo<'a>,
    to: AccountInfo<'a>,
    system_program: AccountInfo<'a>,
    amount: u64,
    signer_seeds: Option<&[&[&[u8]]]>,
) -> Result<()> {
    let cpi_accounts = Transfer { from, to };

    let cpi_ctx = if let Some(seeds) = signer_seeds {
        CpiContext::new_with_signer(system_program, cpi_accounts, seeds)
    } else {
        CpiContext::new(system_program, cpi_accounts)
    };

    transfer(cpi_ctx, amount)
}

/// Lamports in the vault above the rent reserve that keeps it alive
pub fn payable_balance(vault_lamports: u64, rent_reserve: u64) -> u64 {
    vault_lamports.saturating_sub(rent_reserve)
}
