use anchor_lang::prelude::*;

#[error_code]
pub enum ChamaError {
    // Creation parameter errors
    #[msg("Chama name must not be empty")]
    NameEmpty,
    #[msg("Chama name is too long (max 32 bytes)")]
    NameTooLong,
    #[msg("Contribution amount must be greater than 0")]
    InvalidContributionAmount,
    #[msg("Epoch period must be between 1 second and 365 days")]
    InvalidEpochPeriod,
    #[msg("Max members must be between 2 and 10")]
    InvalidMaxMembers,
    #[msg("A chama with this name already exists for this admin")]
    ChamaAlreadyExists,

    // Membership errors
    #[msg("Chama is already active")]
    ChamaAlreadyActive,
    #[msg("Chama is already full")]
    ChamaFull,
    #[msg("Member has already joined this chama")]
    MemberAlreadyJoined,
    #[msg("Not a member of this chama")]
    NotAMember,

    // Rotation errors
    #[msg("Chama is not active yet (not all members have joined)")]
    ChamaNotActive,
    #[msg("Epoch has not ended yet, cannot claim")]
    EpochNotEnded,
    #[msg("Recipient is not the member owed this round")]
    RecipientMismatch,
    #[msg("Member has already claimed in this cycle")]
    MemberAlreadyClaimed,
    #[msg("Vault holds no contributions to pay out")]
    EmptyVault,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
