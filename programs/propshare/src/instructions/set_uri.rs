use anchor_lang::prelude::*;
use anchor_lang::solana_program::clock::Clock;

use crate::errors::PropshareError;
use crate::state::{Marketplace, Property};

#[derive(Accounts)]
pub struct SetUri<'info> {
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
pub struct PropertyUriUpdated {
    pub property: Pubkey,
    pub property_id: u64,
    pub uri: String,
    pub timestamp: i64,
}

pub fn handler(ctx: Context<SetUri>, uri: String) -> Result<()> {
    let property = &mut ctx.accounts.property;
    let clock = Clock::get()?;

    require!(!uri.is_empty(), PropshareError::InvalidUri);
    require!(
        uri.len() <= Property::MAX_URI_LEN,
        PropshareError::UriTooLong
    );

    property.uri = uri.clone();
    property.updated_at = clock.unix_timestamp;

    emit!(PropertyUriUpdated {
        property: property.key(),
        property_id: property.id,
        uri,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
