use anchor_lang::prelude::*;

/// Per-purchase record, keyed by the listing's sale counter. Makes the
/// fund receiver's inflow auditable without replaying transaction logs.
#[account]
#[derive(InitSpace)]
pub struct SaleReceipt {
    pub listing: Pubkey,
    pub buyer: Pubkey,
    pub quantity: u64,
    /// Unit price snapshot at time of sale.
    pub unit_price: u64,
    /// Full amount forwarded to the fund receiver, overpayment included.
    pub payment: u64,
    pub timestamp: i64,
    pub bump: u8,
}

impl SaleReceipt {
    pub const SEED_PREFIX: &'static [u8] = b"receipt";
}
