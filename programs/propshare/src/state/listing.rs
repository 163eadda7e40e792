use anchor_lang::prelude::*;

use crate::errors::PropshareError;

/// A fixed-price offer to sell part of one property. `remaining` is owned
/// exclusively by the listing instructions; once `completed` flips to true
/// the listing is terminal.
#[account]
#[derive(InitSpace)]
pub struct Listing {
    pub marketplace: Pubkey,
    pub seller: Pubkey,
    pub property: Pubkey,
    pub id: u64,
    /// Smallest payment unit per smallest property unit.
    pub unit_price: u64,
    /// Quantity originally offered.
    pub quantity: u64,
    /// Quantity still purchasable. Never increases. Frozen at its last
    /// value when the listing is cancelled.
    pub remaining: u64,
    pub completed: bool,
    /// Payment destination; may differ from the seller.
    pub fund_receiver: Pubkey,
    /// Number of purchases settled against this listing.
    pub sale_count: u64,
    pub created_at: i64,
    pub updated_at: i64,
    pub bump: u8,
}

impl Listing {
    pub const SEED_PREFIX: &'static [u8] = b"listing";

    /// Settle a purchase of `quantity` units: decrement `remaining`,
    /// auto-complete at zero, bump the sale counter.
    pub fn fill(&mut self, quantity: u64) -> Result<()> {
        require!(!self.completed, PropshareError::ListingUnavailable);
        require!(
            self.remaining >= quantity,
            PropshareError::InsufficientListedTokens
        );
        self.remaining = self
            .remaining
            .checked_sub(quantity)
            .ok_or(PropshareError::MathOverflow)?;
        if self.remaining == 0 {
            self.completed = true;
        }
        self.sale_count = self
            .sale_count
            .checked_add(1)
            .ok_or(PropshareError::MathOverflow)?;
        Ok(())
    }

    /// Terminate the listing without a sale. `remaining` keeps its last
    /// value; the caller returns that quantity from custody.
    pub fn cancel(&mut self) -> Result<()> {
        require!(!self.completed, PropshareError::ListingUnavailable);
        self.completed = true;
        Ok(())
    }

    pub fn price_for(&self, quantity: u64) -> Result<u64> {
        self.unit_price
            .checked_mul(quantity)
            .ok_or_else(|| error!(PropshareError::MathOverflow))
    }
}
