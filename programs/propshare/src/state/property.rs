use anchor_lang::prelude::*;

use crate::errors::PropshareError;

/// One fractional-ownership asset class. Existence of the PDA is the
/// existence check; ids are assigned sequentially by the marketplace.
#[account]
#[derive(InitSpace)]
pub struct Property {
    pub marketplace: Pubkey,
    pub id: u64,
    /// Sum of every holder balance, custody included. Never decreases;
    /// there is no burn path.
    pub total_supply: u64,
    #[max_len(200)]
    pub uri: String,
    /// While set, every transfer of this property fails, whichever path
    /// requested it. Admin-toggled, idempotent.
    pub offset_locked: bool,
    pub created_at: i64,
    pub updated_at: i64,
    pub bump: u8,
}

impl Property {
    pub const SEED_PREFIX: &'static [u8] = b"property";
    pub const MAX_URI_LEN: usize = 200;

    /// Lock and pause gate shared by every balance-moving path.
    pub fn assert_transferable(&self, paused: bool) -> Result<()> {
        require!(!paused, PropshareError::TransfersPaused);
        require!(!self.offset_locked, PropshareError::LockedForOffset);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property() -> Property {
        Property {
            marketplace: Pubkey::new_unique(),
            id: 1,
            total_supply: 1_000,
            uri: "ipfs://property/1".to_string(),
            offset_locked: false,
            created_at: 0,
            updated_at: 0,
            bump: 254,
        }
    }

    #[test]
    fn unlocked_property_is_transferable() {
        let prop = property();
        assert!(prop.assert_transferable(false).is_ok());
    }

    #[test]
    fn offset_lock_blocks_transfers_until_cleared() {
        let mut prop = property();
        prop.offset_locked = true;
        assert!(prop.assert_transferable(false).is_err());

        prop.offset_locked = false;
        assert!(prop.assert_transferable(false).is_ok());
    }

    #[test]
    fn pause_blocks_transfers_regardless_of_lock() {
        let prop = property();
        assert!(prop.assert_transferable(true).is_err());
    }
}
