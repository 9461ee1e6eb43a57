use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_error::ProgramError;
use std::collections::HashMap;

use crate::state::*;
use crate::utils::{chama_address, payable_balance, vault_address};

/// Rent-exempt minimum of a zero-data account on mainnet
pub const RENT_RESERVE: u64 = 890_880;

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

#[derive(Clone, Default)]
struct AccountStore {
    chamas: HashMap<Pubkey, Chama>,
    lamports: HashMap<Pubkey, u64>,
}

impl AccountStore {
    fn debit(&mut self, key: &Pubkey, amount: u64) -> Result<()> {
        let balance = self.lamports.entry(*key).or_default();
        *balance = balance
            .checked_sub(amount)
            .ok_or(ProgramError::InsufficientFunds)?;
        Ok(())
    }

    fn credit(&mut self, key: &Pubkey, amount: u64) -> Result<()> {
        let balance = self.lamports.entry(*key).or_default();
        *balance = balance
            .checked_add(amount)
            .ok_or(ProgramError::ArithmeticOverflow)?;
        Ok(())
    }

    fn transfer(&mut self, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<()> {
        self.debit(from, amount)?;
        self.credit(to, amount)
    }

    fn chama_mut(&mut self, key: &Pubkey) -> Result<&mut Chama> {
        self.chamas
            .get_mut(key)
            .ok_or_else(|| anchor_lang::error::ErrorCode::AccountNotInitialized.into())
    }
}

/**
 * In-memory stand-in for the runtime
 *
 * Address-keyed chama records and lamport balances plus a clock. Each
 * instruction runs against a draft copy that is committed only when the
 * instruction succeeds, so a failed instruction leaves no trace.
 *
 * The create_chama, contribute and claim_round methods mirror
 * handle_create_chama, handle_contribute and handle_claim_round step for step
 * (rent reserve top-up, payable balance, settle then pay out). Keep them in
 * sync when a handler changes.
 */
pub struct Ledger {
    pub now: i64,
    accounts: AccountStore,
}

impl Ledger {
    pub fn new(now: i64) -> Self {
        Self {
            now,
            accounts: AccountStore::default(),
        }
    }

    fn atomically<T>(
        &mut self,
        f: impl FnOnce(&mut AccountStore, i64) -> Result<T>,
    ) -> Result<T> {
        let mut draft = self.accounts.clone();
        let out = f(&mut draft, self.now)?;
        self.accounts = draft;
        Ok(out)
    }

    pub fn airdrop(&mut self, key: &Pubkey, amount: u64) {
        *self.accounts.lamports.entry(*key).or_default() += amount;
    }

    pub fn advance(&mut self, seconds: i64) {
        self.now += seconds;
    }

    pub fn balance(&self, key: &Pubkey) -> u64 {
        self.accounts.lamports.get(key).copied().unwrap_or(0)
    }

    pub fn chama(&self, key: &Pubkey) -> &Chama {
        &self.accounts.chamas[key]
    }

    /// Vault lamports available for payout
    pub fn vault_balance(&self, chama: &Pubkey) -> u64 {
        payable_balance(self.balance(&vault_address(chama).0), RENT_RESERVE)
    }

    pub fn create_chama(
        &mut self,
        admin: &Pubkey,
        name: &str,
        contribution_amount: u64,
        epoch_period: i64,
        max_members: u8,
    ) -> Result<Pubkey> {
        self.atomically(|accounts, _now| {
            let (chama_key, bump) = chama_address(name, admin);
            let vault = vault_address(&chama_key).0;

            accounts.chamas.entry(chama_key).or_default().initialize(
                *admin,
                name.to_string(),
                contribution_amount,
                epoch_period,
                max_members,
                bump,
            )?;

            let vault_lamports = accounts.lamports.get(&vault).copied().unwrap_or(0);
            if vault_lamports < RENT_RESERVE {
                accounts.transfer(admin, &vault, RENT_RESERVE - vault_lamports)?;
            }
            Ok(chama_key)
        })
    }

    pub fn join_chama(&mut self, chama: &Pubkey, member: &Pubkey) -> Result<bool> {
        self.atomically(|accounts, now| accounts.chama_mut(chama)?.admit(*member, now))
    }

    pub fn contribute(&mut self, chama: &Pubkey, member: &Pubkey) -> Result<()> {
        self.atomically(|accounts, _now| {
            let record = accounts.chama_mut(chama)?;
            record.check_contributor(member)?;
            let amount = record.contribution_amount;
            accounts.transfer(member, &vault_address(chama).0, amount)
        })
    }

    pub fn claim_round(&mut self, chama: &Pubkey, recipient: &Pubkey) -> Result<RoundOutcome> {
        self.atomically(|accounts, now| {
            let vault = vault_address(chama).0;
            let vault_lamports = accounts.lamports.get(&vault).copied().unwrap_or(0);
            let amount = payable_balance(vault_lamports, RENT_RESERVE);

            let outcome = accounts.chama_mut(chama)?.settle_round(recipient, amount, now)?;
            accounts.transfer(&vault, recipient, outcome.amount)?;
            Ok(outcome)
        })
    }
}
