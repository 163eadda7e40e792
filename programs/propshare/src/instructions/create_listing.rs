use anchor_lang::prelude::*;
use anchor_lang::solana_program::clock::Clock;

use crate::allowlist;
use crate::errors::PropshareError;
use crate::ledger;
use crate::state::{Balance, Listing, Marketplace, Property};

#[derive(Accounts)]
#[instruction(listing_id: u64)]
pub struct CreateListing<'info> {
    #[account(mut)]
    pub seller: Signer<'info>,

    #[account(
        mut,
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
            Balance::SEED_PREFIX,
            property.key().as_ref(),
            seller.key().as_ref(),
        ],
        bump = seller_balance.bump,
    )]
    pub seller_balance: Account<'info, Balance>,

    /// Custodial escrow holding for this property, owned by the
    /// marketplace PDA
    #[account(
        init_if_needed,
        payer = seller,
        seeds = [
            Balance::SEED_PREFIX,
            property.key().as_ref(),
            marketplace.key().as_ref(),
        ],
        bump,
        space = 8 + Balance::INIT_SPACE,
    )]
    pub custody_balance: Account<'info, Balance>,

    #[account(
        init,
        payer = seller,
        seeds = [
            Listing::SEED_PREFIX,
            marketplace.key().as_ref(),
            &listing_id.to_le_bytes(),
        ],
        bump,
        space = 8 + Listing::INIT_SPACE,
    )]
    pub listing: Account<'info, Listing>,

    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct ListingCreated {
    pub listing: Pubkey,
    pub listing_id: u64,
    pub property: Pubkey,
    pub seller: Pubkey,
    pub quantity: u64,
    pub unit_price: u64,
    pub fund_receiver: Pubkey,
    pub timestamp: i64,
}

pub fn handler(
    ctx: Context<CreateListing>,
    listing_id: u64,
    quantity: u64,
    unit_price: u64,
    fund_receiver: Pubkey,
    allowlist_proof: Vec<[u8; 32]>,
) -> Result<()> {
    let marketplace = &mut ctx.accounts.marketplace;
    let clock = Clock::get()?;

    require!(
        allowlist::is_member(
            &allowlist_proof,
            &marketplace.allowlist_root,
            &ctx.accounts.seller.key(),
        ),
        PropshareError::NotAllowlisted
    );

    // Client-supplied id must match on-chain state (prevents dupes/races)
    require_eq!(
        listing_id,
        marketplace.next_listing_id()?,
        PropshareError::ListingIdMismatch
    );

    require!(quantity > 0, PropshareError::ZeroAmount);
    require!(
        fund_receiver != Pubkey::default(),
        PropshareError::InvalidReceiver
    );

    let custody = &mut ctx.accounts.custody_balance;
    if custody.owner == Pubkey::default() {
        custody.set_inner(Balance {
            property: ctx.accounts.property.key(),
            owner: marketplace.key(),
            amount: 0,
            bump: ctx.bumps.custody_balance,
        });
    }

    // Record first, escrow after: the listing must exist and be
    // observable before custody moves. The transaction still commits or
    // aborts as one unit.
    ctx.accounts.listing.set_inner(Listing {
        marketplace: marketplace.key(),
        seller: ctx.accounts.seller.key(),
        property: ctx.accounts.property.key(),
        id: listing_id,
        unit_price,
        quantity,
        remaining: quantity,
        completed: false,
        fund_receiver,
        sale_count: 0,
        created_at: clock.unix_timestamp,
        updated_at: clock.unix_timestamp,
        bump: ctx.bumps.listing,
    });
    marketplace.listing_count = listing_id;

    emit!(ListingCreated {
        listing: ctx.accounts.listing.key(),
        listing_id,
        property: ctx.accounts.property.key(),
        seller: ctx.accounts.seller.key(),
        quantity,
        unit_price,
        fund_receiver,
        timestamp: clock.unix_timestamp,
    });

    // Move the offered quantity into escrow. Fails on insufficient seller
    // balance, offset lock, or global pause, taking the listing with it.
    ledger::move_units(
        &ctx.accounts.property,
        marketplace.paused,
        &mut ctx.accounts.seller_balance,
        &mut ctx.accounts.custody_balance,
        quantity,
    )?;

    msg!(
        "Listing {} created: {} units of property {} at {}",
        listing_id,
        quantity,
        ctx.accounts.property.id,
        unit_price
    );
    Ok(())
}
