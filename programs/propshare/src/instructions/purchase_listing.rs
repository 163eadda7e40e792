use anchor_lang::prelude::*;
use anchor_lang::solana_program::clock::Clock;
use anchor_spl::token::{self, Token, TokenAccount};

use crate::allowlist;
use crate::errors::PropshareError;
use crate::ledger;
use crate::state::{Balance, Listing, Marketplace, Property, SaleReceipt};

#[derive(Accounts)]
#[instruction(listing_id: u64, quantity: u64, payment: u64, sale_index: u64)]
pub struct PurchaseListing<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

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
        init_if_needed,
        payer = buyer,
        seeds = [
            Balance::SEED_PREFIX,
            property.key().as_ref(),
            buyer.key().as_ref(),
        ],
        bump,
        space = 8 + Balance::INIT_SPACE,
    )]
    pub buyer_balance: Account<'info, Balance>,

    // Keep lean: no associated_token attr, we validate in handler
    #[account(mut)]
    pub buyer_token: Account<'info, TokenAccount>,

    #[account(mut)]
    pub fund_receiver_token: Account<'info, TokenAccount>,

    #[account(
        init,
        payer = buyer,
        seeds = [
            SaleReceipt::SEED_PREFIX,
            listing.key().as_ref(),
            &sale_index.to_le_bytes(),
        ],
        bump,
        space = 8 + SaleReceipt::INIT_SPACE,
    )]
    pub receipt: Account<'info, SaleReceipt>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct ListingPurchased {
    pub listing: Pubkey,
    pub listing_id: u64,
    pub buyer: Pubkey,
    pub seller: Pubkey,
    pub quantity: u64,
    pub price: u64,
    pub payment: u64,
    pub remaining: u64,
    pub completed: bool,
    pub timestamp: i64,
}

pub fn handler(
    ctx: Context<PurchaseListing>,
    listing_id: u64,
    quantity: u64,
    payment: u64,
    sale_index: u64,
    allowlist_proof: Vec<[u8; 32]>,
) -> Result<()> {
    let marketplace = &ctx.accounts.marketplace;
    let clock = Clock::get()?;

    require!(
        allowlist::is_member(
            &allowlist_proof,
            &marketplace.allowlist_root,
            &ctx.accounts.buyer.key(),
        ),
        PropshareError::NotAllowlisted
    );

    // ---- Runtime validations moved from #[account(constraint=...)] ----
    let listing = &ctx.accounts.listing;
    require_keys_eq!(
        listing.property,
        ctx.accounts.property.key(),
        PropshareError::WrongPropertyForListing
    );
    require_keys_eq!(
        ctx.accounts.buyer_token.owner,
        ctx.accounts.buyer.key(),
        PropshareError::TokenAccountWrongOwner
    );
    require_keys_eq!(
        ctx.accounts.buyer_token.mint,
        marketplace.settlement_mint,
        PropshareError::TokenAccountWrongMint
    );
    require_keys_eq!(
        ctx.accounts.fund_receiver_token.owner,
        listing.fund_receiver,
        PropshareError::TokenAccountWrongOwner
    );
    require_keys_eq!(
        ctx.accounts.fund_receiver_token.mint,
        marketplace.settlement_mint,
        PropshareError::TokenAccountWrongMint
    );

    // Stable index must match on-chain state (prevents duplicate receipts)
    require_eq!(
        sale_index,
        listing.sale_count,
        PropshareError::SaleIndexMismatch
    );

    // Basic business rules
    require!(quantity > 0, PropshareError::ZeroAmount);
    require!(!listing.completed, PropshareError::ListingUnavailable);
    require!(
        listing.seller != ctx.accounts.buyer.key(),
        PropshareError::CannotBuyOwnListing
    );
    require!(
        listing.remaining >= quantity,
        PropshareError::InsufficientListedTokens
    );

    let price = listing.price_for(quantity)?;
    // Strictly-less-than check: overpayment is accepted and forwarded in
    // full to the fund receiver.
    require!(payment >= price, PropshareError::InsufficientPayment);
    require!(
        ctx.accounts.buyer_token.amount >= payment,
        PropshareError::InsufficientFunds
    );

    // Update listing BEFORE transfers
    let listing = &mut ctx.accounts.listing;
    listing.fill(quantity)?;
    listing.updated_at = clock.unix_timestamp;

    // Record the sale BEFORE transfers
    ctx.accounts.receipt.set_inner(SaleReceipt {
        listing: listing.key(),
        buyer: ctx.accounts.buyer.key(),
        quantity,
        unit_price: listing.unit_price,
        payment,
        timestamp: clock.unix_timestamp,
        bump: ctx.bumps.receipt,
    });

    let buyer_balance = &mut ctx.accounts.buyer_balance;
    if buyer_balance.owner == Pubkey::default() {
        buyer_balance.set_inner(Balance {
            property: ctx.accounts.property.key(),
            owner: ctx.accounts.buyer.key(),
            amount: 0,
            bump: ctx.bumps.buyer_balance,
        });
    }

    // 1) Move purchased units out of escrow to the buyer
    ledger::move_units(
        &ctx.accounts.property,
        marketplace.paused,
        &mut ctx.accounts.custody_balance,
        &mut ctx.accounts.buyer_balance,
        quantity,
    )?;

    // 2) Forward the entire attached payment to the fund receiver
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            token::Transfer {
                from: ctx.accounts.buyer_token.to_account_info(),
                to: ctx.accounts.fund_receiver_token.to_account_info(),
                authority: ctx.accounts.buyer.to_account_info(),
            },
        ),
        payment,
    )?;

    let listing = &ctx.accounts.listing;
    emit!(ListingPurchased {
        listing: listing.key(),
        listing_id,
        buyer: ctx.accounts.buyer.key(),
        seller: listing.seller,
        quantity,
        price,
        payment,
        remaining: listing.remaining,
        completed: listing.completed,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Listing {} purchase: {} units, {} remaining",
        listing_id,
        quantity,
        listing.remaining
    );
    Ok(())
}
