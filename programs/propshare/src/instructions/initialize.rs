use anchor_lang::prelude::*;
use anchor_lang::solana_program::clock::Clock;
use anchor_spl::token::Mint;

use crate::errors::PropshareError;
use crate::state::Marketplace;

#[derive(Accounts)]
#[instruction(name: String)]
pub struct Initialize<'info> {
    /// Admin / marketplace owner
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Marketplace config PDA, seeded by the admin key
    #[account(
        init,
        payer = admin,
        seeds = [Marketplace::SEED_PREFIX, admin.key().as_ref()],
        bump,
        space = 8 + Marketplace::INIT_SPACE,
    )]
    pub marketplace: Account<'info, Marketplace>,

    /// Settlement mint (e.g., USDC); captured once, checked on every sale
    pub settlement_mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

impl<'info> Initialize<'info> {
    pub fn init(&mut self, name: String, bumps: &InitializeBumps) -> Result<()> {
        // Validate inputs
        require!(!name.is_empty(), PropshareError::NameEmpty);
        require!(
            name.len() <= Marketplace::MAX_NAME_LEN,
            PropshareError::NameTooLong
        );
        require!(
            name.chars().all(|c| c.is_alphanumeric() || c == ' ' || c == '_'),
            PropshareError::InvalidNameChars
        );

        self.marketplace.set_inner(Marketplace {
            admin: self.admin.key(),
            settlement_mint: self.settlement_mint.key(),
            allowlist_root: [0u8; 32],
            paused: false,
            property_count: 0,
            listing_count: 0,
            name,
            created_at: Clock::get()?.unix_timestamp,
            bump: bumps.marketplace,
        });

        msg!("Marketplace initialized by admin: {}", self.admin.key());
        Ok(())
    }
}
