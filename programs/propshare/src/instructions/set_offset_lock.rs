use anchor_lang::prelude::*;
use anchor_lang::solana_program::clock::Clock;

use crate::errors::PropshareError;
use crate::state::{Marketplace, Property};

#[derive(Accounts)]
pub struct SetOffsetLock<'info> {
    pub admin: Signer<'info>,

    #[account(
        seeds = [Marketplace::SEED_PREFIX, admin.key().as_ref()],
        bump = marketplace.bump,
        constraint = marketplace.admin == admin.key() @ PropshareError::Unauthorized,
    )]
    pub marketplace: Account<'info, Marketplace>,

    #[account(
        mut,
        seeds = [
            Property::SEED_PREFIX,
            marketplace.key().as_ref(),
            &property.id.to_le_bytes(),
        ],
        bump = property.bump,
    )]
    pub property: Account<'info, Property>,
}

#[event]
pub struct OffsetLockUpdated {
    pub property: Pubkey,
    pub property_id: u64,
    pub locked: bool,
    pub timestamp: i64,
}

/// Mark/recover semantics: assigning the current value is a no-op
/// success, not an error.
pub fn handler(ctx: Context<SetOffsetLock>, locked: bool) -> Result<()> {
    let property = &mut ctx.accounts.property;
    let clock = Clock::get()?;

    property.offset_locked = locked;
    property.updated_at = clock.unix_timestamp;

    emit!(OffsetLockUpdated {
        property: property.key(),
        property_id: property.id,
        locked,
        timestamp: clock.unix_timestamp,
    });

    msg!("Property {} offset lock set to {}", property.id, locked);
    Ok(())
}
