use anchor_lang::prelude::*;
use crate::constants::*;

/// Chama PDA for an (admin, name) pair: ["chama", name, admin]
pub fn chama_address(name: &str, admin: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[CHAMA_SEED.as_bytes(), name.as_bytes(), admin.as_ref()],
        &crate::ID,
    )
}

/// Vault PDA owned by a chama: ["vault", chama_key]
pub fn vault_address(chama: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED.as_bytes(), chama.as_ref()], &crate::ID)
}
