#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod allowlist;
pub mod errors;
pub mod instructions;
pub mod ledger;
pub mod state;

pub use instructions::*;

declare_id!("EvGHKGqRArRxt9256FegJeJcHJp2xZXPZSdaHdJGUcdv");

#[program]
pub mod propshare {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, name: String) -> Result<()> {
        ctx.accounts.init(name, &ctx.bumps)
    }

    pub fn mint_property(
        ctx: Context<MintProperty>,
        property_id: u64,
        amount: u64,
        uri: String,
    ) -> Result<()> {
        instructions::mint_property::handler(ctx, property_id, amount, uri)
    }

    pub fn mint_property_batch<'c: 'info, 'info>(
        ctx: Context<'_, '_, 'c, 'info, MintPropertyBatch<'info>>,
        property_id: u64,
        recipients: Vec<Pubkey>,
        amounts: Vec<u64>,
        uri: String,
    ) -> Result<()> {
        instructions::mint_property_batch::handler(ctx, property_id, recipients, amounts, uri)
    }

    pub fn transfer_units(ctx: Context<TransferUnits>, amount: u64) -> Result<()> {
        instructions::transfer_units::handler(ctx, amount)
    }

    pub fn set_offset_lock(ctx: Context<SetOffsetLock>, locked: bool) -> Result<()> {
        instructions::set_offset_lock::handler(ctx, locked)
    }

    pub fn set_uri(ctx: Context<SetUri>, uri: String) -> Result<()> {
        instructions::set_uri::handler(ctx, uri)
    }

    pub fn update_marketplace(
        ctx: Context<UpdateMarketplace>,
        new_allowlist_root: Option<[u8; 32]>,
        paused: Option<bool>,
    ) -> Result<()> {
        instructions::update_marketplace::handler(ctx, new_allowlist_root, paused)
    }

    pub fn create_listing(
        ctx: Context<CreateListing>,
        listing_id: u64,
        quantity: u64,
        unit_price: u64,
        fund_receiver: Pubkey,
        allowlist_proof: Vec<[u8; 32]>,
    ) -> Result<()> {
        instructions::create_listing::handler(
            ctx,
            listing_id,
            quantity,
            unit_price,
            fund_receiver,
            allowlist_proof,
        )
    }

    pub fn purchase_listing(
        ctx: Context<PurchaseListing>,
        listing_id: u64,
        quantity: u64,
        payment: u64,
        sale_index: u64,
        allowlist_proof: Vec<[u8; 32]>,
    ) -> Result<()> {
        instructions::purchase_listing::handler(
            ctx,
            listing_id,
            quantity,
            payment,
            sale_index,
            allowlist_proof,
        )
    }

    pub fn cancel_listing(
        ctx: Context<CancelListing>,
        listing_id: u64,
        allowlist_proof: Vec<[u8; 32]>,
    ) -> Result<()> {
        instructions::cancel_listing::handler(ctx, listing_id, allowlist_proof)
    }
}
