use anchor_lang::prelude::*;

use crate::errors::PropshareError;

/// Holding of one owner in one property. The custodial escrow balance is
/// the Balance whose owner is the marketplace PDA itself.
#[account]
#[derive(InitSpace)]
pub struct Balance {
    pub property: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub bump: u8,
}

impl Balance {
    pub const SEED_PREFIX: &'static [u8] = b"balance";

    pub fn credit(&mut self, quantity: u64) -> Result<()> {
        self.amount = self
            .amount
            .checked_add(quantity)
            .ok_or(PropshareError::MathOverflow)?;
        Ok(())
    }

    pub fn debit(&mut self, quantity: u64) -> Result<()> {
        require!(self.amount >= quantity, PropshareError::InsufficientBalance);
        self.amount = self
            .amount
            .checked_sub(quantity)
            .ok_or(PropshareError::MathOverflow)?;
        Ok(())
    }
}
