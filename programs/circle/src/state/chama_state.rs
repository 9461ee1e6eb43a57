use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;

/**
 * Chama (rotating savings group) account
 *
 * Holds the group configuration and the rotation state. Every instruction
 * reads `now` from the clock and then drives one of the transition methods
 * below; each method checks all of its preconditions before it writes a
 * single field, so a failed call leaves the record untouched.
 *
 * Derivation: ["chama", name, admin]
 *
 * Lifecycle:
 * 1. Created by create_chama with the admin as the only member
 * 2. Filled by join_chama; the join that reaches max_members activates it
 * 3. Rotates forever: one claim_round per epoch, recipients in join order
 */
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct Chama {
    /// Creator of the chama; immutable
    pub admin: Pubkey,

    /// Human-readable label; part of the PDA seeds
    #[max_len(32)]
    pub name: String,

    /// Lamports required per contribution
    pub contribution_amount: u64,

    /// Seconds per round
    pub epoch_period: i64,

    /// Capacity, MIN_MEMBERS..=MAX_MEMBERS
    pub max_members: u8,

    /// Current membership size
    pub member_count: u8,

    /// Index of the next round to be claimed within the current cycle
    pub current_round: u32,

    /// Number of completed cycles
    pub total_rounds_completed: u32,

    /// Unix timestamp after which the current round can be claimed
    /// - Zero until the chama activates
    pub epoch_end_time: i64,

    /// Set once when the last seat is filled; never cleared
    pub is_active: bool,

    /// Members in join order, which is also payout order
    #[max_len(10)]
    pub members: Vec<Pubkey>,

    /// Parallel to `members`: paid out in the current cycle
    #[max_len(10)]
    pub member_claimed: Vec<bool>,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

/// Result of settling a round, consumed by the claim handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Round that was paid out
    pub round: u32,
    /// Member who is owed the payout
    pub recipient: Pubkey,
    /// Lamports to move out of the vault
    pub amount: u64,
    /// Whether this claim wrapped the rotation back to round 0
    pub cycle_completed: bool,
    /// Deadline of the next round
    pub next_epoch_end_time: i64,
}

impl Chama {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator, sized for MAX_NAME_LEN and MAX_MEMBERS
    pub const LEN: usize = 8 + Chama::INIT_SPACE;

    /// Rejects malformed creation parameters before any state is written
    pub fn validate_params(
        name: &str,
        contribution_amount: u64,
        epoch_period: i64,
        max_members: u8,
    ) -> Result<()> {
        require!(!name.is_empty(), ChamaError::NameEmpty);
        require!(name.len() <= MAX_NAME_LEN, ChamaError::NameTooLong);
        require!(contribution_amount > 0, ChamaError::InvalidContributionAmount);
        require!(
            epoch_period > 0 && epoch_period <= MAX_EPOCH_PERIOD,
            ChamaError::InvalidEpochPeriod
        );
        require!(
            (MIN_MEMBERS..=MAX_MEMBERS).contains(&max_members),
            ChamaError::InvalidMaxMembers
        );
        Ok(())
    }

    /// A zeroed account has no admin
    pub fn is_initialized(&self) -> bool {
        self.admin != Pubkey::default()
    }

    pub fn initialize(
        &mut self,
        admin: Pubkey,
        name: String,
        contribution_amount: u64,
        epoch_period: i64,
        max_members: u8,
        bump: u8,
    ) -> Result<()> {
        require!(!self.is_initialized(), ChamaError::ChamaAlreadyExists);
        Self::validate_params(&name, contribution_amount, epoch_period, max_members)?;

        self.admin = admin;
        self.name = name;
        self.contribution_amount = contribution_amount;
        self.epoch_period = epoch_period;
        self.max_members = max_members;
        self.member_count = 1;
        self.current_round = 0;
        self.total_rounds_completed = 0;
        self.epoch_end_time = 0;
        self.is_active = false;
        self.members = vec![admin];
        self.member_claimed = vec![false];
        self.bump = bump;

        Ok(())
    }

    pub fn is_member(&self, key: &Pubkey) -> bool {
        self.members.contains(key)
    }

    /**
     * Adds `member` to a forming chama
     *
     * @returns true when this join filled the last seat and started the first epoch
     */
    pub fn admit(&mut self, member: Pubkey, now: i64) -> Result<bool> {
        // Once full the chama is active, so this also rejects repeat joins
        require!(!self.is_active, ChamaError::ChamaAlreadyActive);
        require!(self.member_count < self.max_members, ChamaError::ChamaFull);
        require!(!self.is_member(&member), ChamaError::MemberAlreadyJoined);

        let member_count = self.member_count + 1;
        let activates = member_count == self.max_members;
        let epoch_end_time = if activates {
            now.checked_add(self.epoch_period)
                .ok_or(ChamaError::ArithmeticOverflow)?
        } else {
            self.epoch_end_time
        };

        self.members.push(member);
        self.member_claimed.push(false);
        self.member_count = member_count;

        if activates {
            self.is_active = true;
            self.epoch_end_time = epoch_end_time;
        }

        Ok(activates)
    }

    /// Only members may pay into the vault; the amount is fixed by the record
    pub fn check_contributor(&self, member: &Pubkey) -> Result<()> {
        require!(self.is_member(member), ChamaError::NotAMember);
        Ok(())
    }

    /// Position in `members` of the member owed the current round
    pub fn current_recipient_index(&self) -> usize {
        (self.current_round as usize)
            .checked_rem(self.member_count as usize)
            .unwrap_or(0)
    }

    pub fn current_recipient(&self) -> Option<Pubkey> {
        self.members.get(self.current_recipient_index()).copied()
    }

    /// Seconds left before the current round can be claimed, zero once it can
    pub fn seconds_until_claimable(&self, now: i64) -> i64 {
        self.epoch_end_time.saturating_sub(now).max(0)
    }

    pub fn is_claimable(&self, now: i64) -> bool {
        self.is_active && now >= self.epoch_end_time
    }

    /**
     * Settles the current round in favour of `recipient`
     *
     * @param recipient - Account the caller wants paid; must be the round-robin recipient
     * @param amount - Lamports the vault can pay out right now
     * @param now - Clock timestamp of the claiming transaction
     *
     * Marks the recipient as paid, advances the round, wraps the cycle when
     * every seat has been paid and restarts the epoch clock. The caller moves
     * `amount` out of the vault.
     */
    pub fn settle_round(
        &mut self,
        recipient: &Pubkey,
        amount: u64,
        now: i64,
    ) -> Result<RoundOutcome> {
        require!(self.is_active, ChamaError::ChamaNotActive);
        require!(now >= self.epoch_end_time, ChamaError::EpochNotEnded);

        let index = self.current_recipient_index();
        let owed = self.members[index];
        require_keys_eq!(*recipient, owed, ChamaError::RecipientMismatch);
        require!(!self.member_claimed[index], ChamaError::MemberAlreadyClaimed);
        require!(amount > 0, ChamaError::EmptyVault);

        let round = self.current_round;
        let next_round = round
            .checked_add(1)
            .ok_or(ChamaError::ArithmeticOverflow)?;
        let cycle_completed = next_round >= u32::from(self.max_members);
        let total_rounds_completed = if cycle_completed {
            self.total_rounds_completed
                .checked_add(1)
                .ok_or(ChamaError::ArithmeticOverflow)?
        } else {
            self.total_rounds_completed
        };
        let next_epoch_end_time = now
            .checked_add(self.epoch_period)
            .ok_or(ChamaError::ArithmeticOverflow)?;

        self.member_claimed[index] = true;
        if cycle_completed {
            self.current_round = 0;
            self.total_rounds_completed = total_rounds_completed;
            self.member_claimed = vec![false; self.member_count as usize];
        } else {
            self.current_round = next_round;
        }
        self.epoch_end_time = next_epoch_end_time;

        Ok(RoundOutcome {
            round,
            recipient: owed,
            amount,
            cycle_completed,
            next_epoch_end_time,
        })
    }
}
