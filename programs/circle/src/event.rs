use anchor_lang::prelude::*;

/// Event emitted when a new chama is created
#[event]
pub struct ChamaCreated {
    /// The chama account public key
    pub chama: Pubkey,
    /// Admin who created the chama (also its first member)
    pub admin: Pubkey,
    /// Vault PDA holding the pooled contributions
    pub vault: Pubkey,
    /// Human-readable name
    pub name: String,
    /// Lamports required per contribution
    pub contribution_amount: u64,
    /// Seconds per round
    pub epoch_period: i64,
    /// Capacity of the group
    pub max_members: u8,
}

/// Event emitted when a member joins a forming chama
#[event]
pub struct MemberJoined {
    /// The chama account public key
    pub chama: Pubkey,
    /// The member who joined
    pub member: Pubkey,
    /// Membership size after the join
    pub member_count: u8,
    /// Capacity of the group
    pub max_members: u8,
}

/// Event emitted when the last seat is filled and the first epoch starts
#[event]
pub struct ChamaActivated {
    /// The chama account public key
    pub chama: Pubkey,
    /// Deadline after which round 0 can be claimed
    pub epoch_end_time: i64,
}

/// Event emitted when a member pays into the vault
#[event]
pub struct ContributionMade {
    /// The chama account public key
    pub chama: Pubkey,
    /// The contributing member
    pub member: Pubkey,
    /// Lamports moved into the vault
    pub amount: u64,
    /// Round the contribution counts towards
    pub round: u32,
}

/// Event emitted when a round's pot is paid out
#[event]
pub struct RoundClaimed {
    /// The chama account public key
    pub chama: Pubkey,
    /// Account that submitted the claim
    pub caller: Pubkey,
    /// Member who received the pot
    pub recipient: Pubkey,
    /// Round that was paid out
    pub round: u32,
    /// Lamports paid to the recipient
    pub amount: u64,
    /// Deadline of the next round
    pub next_epoch_end_time: i64,
}

/// Event emitted when every member has received a payout once
#[event]
pub struct CycleCompleted {
    /// The chama account public key
    pub chama: Pubkey,
    /// Number of full cycles completed so far
    pub total_rounds_completed: u32,
}
