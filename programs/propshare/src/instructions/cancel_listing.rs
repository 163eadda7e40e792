use anchor_lang::prelude::*;
use anchor_lang::solana_program::clock::Clock;

use crate::allowlist;
use crate::errors::PropshareError;
use crate::ledger;
use crate::state::{Balance, Listing, Marketplace, Property};

#[derive(Accounts)]
#[instruction(listing_id: u64)]
pub struct CancelListing<'info> {
    #[account(mut)]
    pub seller: Signer<'info>,

    #[account(
        seeds = [Marketplace::SEED_PREFIX, marketplace.admin.as_ref()],
        bump = marketplace.bump,
    )]
    pub marketplace: Account<'info, Marketplace>,

    #[account(
        seeds = [
            Property::SEED_PREFIX,
            marketplace.key().as_ref(),
            &property.id.to_le_bytes(),
        ],
        bump = property.bump,
    )]
    pub property: Account<'info, Property>,

    #[account(
        mut,
        seeds = [
            Listing::SEED_PREFIX,
            marketplace.key().as_ref(),
            &listing_id.to_le_bytes(),
        ],
        bump = listing.bump,
    )]
    pub listing: Account<'info, Listing>,

    #[account(
        mut,
        seeds = [
            Balance::SEED_PREFIX,
            property.key().as_ref(),
            marketplace.key().as_ref(),
        ],
        bump = custody_balance.bump,
    )]
    pub custody_balance: Account<'info, Balance>,

    #[account(
        mut,
        seeds = [
            Balance::SEED_PREFIX,
            property.key().as_ref(),
            seller.key().as_ref(),
        ],
        bump = seller_balance.bump,
    )]
    pub seller_balance: Account<'info, Balance>,
}

#[event]
pub struct ListingCancelled {
    pub listing: Pubkey,
    pub listing_id: u64,
    pub seller: Pubkey,
    pub returned: u64,
    pub timestamp: i64,
}

pub fn handler(
    ctx: Context<CancelListing>,
    listing_id: u64,
    allowlist_proof: Vec<[u8; 32]>,
) -> Result<()> {
    let marketplace = &ctx.accounts.marketplace;
    let clock = Clock::get()?;

    require!(
        allowlist::is_member(
            &allowlist_proof,
            &marketplace.allowlist_root,
            &ctx.accounts.seller.key(),
        ),
        PropshareError::NotAllowlisted
    );

    let listing = &ctx.accounts.listing;
    require_keys_eq!(
        listing.property,
        ctx.accounts.property.key(),
        PropshareError::WrongPropertyForListing
    );
    require_keys_eq!(
        listing.seller,
        ctx.accounts.seller.key(),
        PropshareError::NotListingOwner
    );

    // Terminal transition; `remaining` stays frozen at its last value.
    let returned = listing.remaining;
    let listing = &mut ctx.accounts.listing;
    listing.cancel()?;
    listing.updated_at = clock.unix_timestamp;

    // Return the unsold quantity from escrow to the seller
    ledger::move_units(
        &ctx.accounts.property,
        marketplace.paused,
        &mut ctx.accounts.custody_balance,
        &mut ctx.accounts.seller_balance,
        returned,
    )?;

    emit!(ListingCancelled {
        listing: ctx.accounts.listing.key(),
        listing_id,
        seller: ctx.accounts.seller.key(),
        returned,
        timestamp: clock.unix_timestamp,
    });

    msg!("Listing {} cancelled, {} units returned", listing_id, returned);
    Ok(())
}
