use anchor_lang::prelude::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for joining a chama
 *
 * Access Control: Any signer that is not already a member
 *
 * Business Logic:
 * - Joins are only accepted while the chama is forming
 * - The join that fills the last seat activates the chama and starts the
 *   first epoch (now + epoch_period)
 */
#[event_cpi]
#[derive(Accounts)]
pub struct JoinChama<'info> {
    /// The chama being joined
    #[account(mut)]
    pub chama: Account<'info, Chama>,

    /// The joining member
    pub member: Signer<'info>,
}

pub fn handle_join_chama(ctx: Context<JoinChama>) -> Result<()> {
    let member = ctx.accounts.member.key();
    let now = Clock::get()?.unix_timestamp;

    let chama = &mut ctx.accounts.chama;
    let activated = chama.admit(member, now)?;

    let chama_key = chama.key();
    let member_count = chama.member_count;
    let max_members = chama.max_members;
    let epoch_end_time = chama.epoch_end_time;

    emit_cpi!(MemberJoined {
        chama: chama_key,
        member,
        member_count,
        max_members,
    });

    if activated {
        emit_cpi!(ChamaActivated {
            chama: chama_key,
            epoch_end_time,
        });
    }

    Ok(())
}
