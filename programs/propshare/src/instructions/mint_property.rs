use anchor_lang::prelude::*;
use anchor_lang::solana_program::clock::Clock;

use crate::errors::PropshareError;
use crate::state::{Balance, Marketplace, Property};

#[derive(Accounts)]
#[instruction(property_id: u64)]
pub struct MintProperty<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [Marketplace::SEED_PREFIX, admin.key().as_ref()],
        bump = marketplace.bump,
        constraint = marketplace.admin == admin.key() @ PropshareError::Unauthorized,
    )]
    pub marketplace: Account<'info, Marketplace>,

    /// CHECK: recipient of the initial supply; only its key is read
    pub recipient: UncheckedAccount<'info>,

    #[account(
        init,
        payer = admin,
        seeds = [
            Property::SEED_PREFIX,
            marketplace.key().as_ref(),
            &property_id.to_le_bytes(),
        ],
        bump,
        space = 8 + Property::INIT_SPACE,
    )]
    pub property: Account<'info, Property>,

    #[account(
        init,
        payer = admin,
        seeds = [
            Balance::SEED_PREFIX,
            property.key().as_ref(),
            recipient.key().as_ref(),
        ],
        bump,
        space = 8 + Balance::INIT_SPACE,
    )]
    pub balance: Account<'info, Balance>,

    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct PropertyMinted {
    pub property: Pubkey,
    pub property_id: u64,
    pub total_supply: u64,
    pub holder_count: u32,
    pub timestamp: i64,
}

pub fn handler(
    ctx: Context<MintProperty>,
    property_id: u64,
    amount: u64,
    uri: String,
) -> Result<()> {
    let marketplace = &mut ctx.accounts.marketplace;
    let clock = Clock::get()?;

    // Client-supplied id must match on-chain state (prevents dupes/races)
    require_eq!(
        property_id,
        marketplace.next_property_id()?,
        PropshareError::PropertyIdMismatch
    );

    require!(amount > 0, PropshareError::ZeroAmount);
    require!(
        ctx.accounts.recipient.key() != Pubkey::default()
            && ctx.accounts.recipient.key() != marketplace.key(),
        PropshareError::InvalidRecipient
    );
    require!(
        uri.len() <= Property::MAX_URI_LEN,
        PropshareError::UriTooLong
    );

    ctx.accounts.property.set_inner(Property {
        marketplace: marketplace.key(),
        id: property_id,
        total_supply: amount,
        uri,
        offset_locked: false,
        created_at: clock.unix_timestamp,
        updated_at: clock.unix_timestamp,
        bump: ctx.bumps.property,
    });

    ctx.accounts.balance.set_inner(Balance {
        property: ctx.accounts.property.key(),
        owner: ctx.accounts.recipient.key(),
        amount,
        bump: ctx.bumps.balance,
    });

    marketplace.property_count = property_id;

    emit!(PropertyMinted {
        property: ctx.accounts.property.key(),
        property_id,
        total_supply: amount,
        holder_count: 1,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Property {} minted: {} units to {}",
        property_id,
        amount,
        ctx.accounts.recipient.key()
    );
    Ok(())
}
