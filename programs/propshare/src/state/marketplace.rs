use anchor_lang::prelude::*;

use crate::errors::PropshareError;

/// Global marketplace configuration. One per admin; every other PDA is
/// seeded under this account.
#[account]
#[derive(InitSpace)]
pub struct Marketplace {
    pub admin: Pubkey,
    /// SPL mint all listing payments are settled in.
    pub settlement_mint: Pubkey,
    /// Current allow-list commitment. Proofs are always checked against
    /// this value as of the executing instruction.
    pub allowlist_root: [u8; 32],
    /// Blocks every balance-moving path while set. Admin mint and lock
    /// operations are not gated by this flag.
    pub paused: bool,
    /// Number of properties minted so far; property ids start at 1.
    pub property_count: u64,
    /// Number of listings created so far; listing ids start at 1.
    pub listing_count: u64,
    #[max_len(32)]
    pub name: String,
    pub created_at: i64,
    pub bump: u8,
}

impl Marketplace {
    pub const SEED_PREFIX: &'static [u8] = b"marketplace";
    pub const MAX_NAME_LEN: usize = 32;

    pub fn next_property_id(&self) -> Result<u64> {
        self.property_count
            .checked_add(1)
            .ok_or_else(|| error!(PropshareError::MathOverflow))
    }

    pub fn next_listing_id(&self) -> Result<u64> {
        self.listing_count
            .checked_add(1)
            .ok_or_else(|| error!(PropshareError::MathOverflow))
    }
}
