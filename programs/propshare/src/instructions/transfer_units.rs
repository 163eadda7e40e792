use anchor_lang::prelude::*;
use anchor_lang::solana_program::clock::Clock;

use crate::errors::PropshareError;
use crate::ledger;
use crate::state::{Balance, Marketplace, Property};

#[derive(Accounts)]
pub struct TransferUnits<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

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

    /// CHECK: transfer destination; only its key is read
    pub recipient: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [
            Balance::SEED_PREFIX,
            property.key().as_ref(),
            owner.key().as_ref(),
        ],
        bump = from_balance.bump,
    )]
    pub from_balance: Account<'info, Balance>,

    #[account(
        init_if_needed,
        payer = owner,
        seeds = [
            Balance::SEED_PREFIX,
            property.key().as_ref(),
            recipient.key().as_ref(),
        ],
        bump,
        space = 8 + Balance::INIT_SPACE,
    )]
    pub to_balance: Account<'info, Balance>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct UnitsTransferred {
    pub property: Pubkey,
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

pub fn handler(ctx: Context<TransferUnits>, amount: u64) -> Result<()> {
    let marketplace = &ctx.accounts.marketplace;
    let recipient = ctx.accounts.recipient.key();

    // The custodial balance is written only by the listing instructions;
    // direct transfers may not target it.
    require!(
        recipient != Pubkey::default()
            && recipient != marketplace.key()
            && recipient != ctx.accounts.owner.key(),
        PropshareError::InvalidRecipient
    );

    let to_balance = &mut ctx.accounts.to_balance;
    if to_balance.owner == Pubkey::default() {
        to_balance.set_inner(Balance {
            property: ctx.accounts.property.key(),
            owner: recipient,
            amount: 0,
            bump: ctx.bumps.to_balance,
        });
    }

    ledger::move_units(
        &ctx.accounts.property,
        marketplace.paused,
        &mut ctx.accounts.from_balance,
        &mut ctx.accounts.to_balance,
        amount,
    )?;

    emit!(UnitsTransferred {
        property: ctx.accounts.property.key(),
        from: ctx.accounts.owner.key(),
        to: recipient,
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
