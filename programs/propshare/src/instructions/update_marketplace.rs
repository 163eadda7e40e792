use anchor_lang::prelude::*;
use anchor_lang::solana_program::clock::Clock;

use crate::errors::PropshareError;
use crate::state::Marketplace;

#[derive(Accounts)]
pub struct UpdateMarketplace<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [Marketplace::SEED_PREFIX, admin.key().as_ref()],
        bump = marketplace.bump,
        constraint = marketplace.admin == admin.key() @ PropshareError::Unauthorized,
    )]
    pub marketplace: Account<'info, Marketplace>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct AllowlistRootUpdated {
    pub marketplace: Pubkey,
    pub new_root: [u8; 32],
    pub timestamp: i64,
}

#[event]
pub struct MarketplacePaused {
    pub marketplace: Pubkey,
    pub paused: bool,
    pub timestamp: i64,
}

/// Admin knobs: replace the allow-list commitment and/or toggle the global
/// transfer pause. The new root takes effect for the very next membership
/// check; proofs built against the old root stop verifying immediately.
pub fn handler(
    ctx: Context<UpdateMarketplace>,
    new_allowlist_root: Option<[u8; 32]>,
    paused: Option<bool>,
) -> Result<()> {
    let marketplace = &mut ctx.accounts.marketplace;
    let clock = Clock::get()?;

    if let Some(root) = new_allowlist_root {
        marketplace.allowlist_root = root;
        emit!(AllowlistRootUpdated {
            marketplace: marketplace.key(),
            new_root: root,
            timestamp: clock.unix_timestamp,
        });
    }

    if let Some(flag) = paused {
        marketplace.paused = flag;
        emit!(MarketplacePaused {
            marketplace: marketplace.key(),
            paused: flag,
            timestamp: clock.unix_timestamp,
        });
    }

    msg!("Marketplace updated by admin: {}", ctx.accounts.admin.key());
    Ok(())
}
