use anchor_lang::prelude::*;

use crate::errors::PropshareError;
use crate::state::{Balance, Property};

/// The one capability the marketplace has over holdings: move units from
/// one balance to another. Lock and pause are enforced here, so every
/// custody path (list, buy, cancel) and every direct transfer goes through
/// the same gate. Supply is untouched.
pub fn move_units(
    property: &Property,
    paused: bool,
    from: &mut Balance,
    to: &mut Balance,
    quantity: u64,
) -> Result<()> {
    require!(quantity > 0, PropshareError::ZeroAmount);
    property.assert_transferable(paused)?;
    from.debit(quantity)?;
    to.credit(quantity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (Property, Balance, Balance) {
        let property_key = Pubkey::new_unique();
        let property = Property {
            marketplace: Pubkey::new_unique(),
            id: 1,
            total_supply: 1_000,
            uri: "ipfs://property/1".to_string(),
            offset_locked: false,
            created_at: 0,
            updated_at: 0,
            bump: 254,
        };
        let from = Balance {
            property: property_key,
            owner: Pubkey::new_unique(),
            amount: 1_000,
            bump: 253,
        };
        let to = Balance {
            property: property_key,
            owner: Pubkey::new_unique(),
            amount: 0,
            bump: 252,
        };
        (property, from, to)
    }

    #[test]
    fn moving_units_conserves_total_supply() {
        let (property, mut from, mut to) = fixture();
        move_units(&property, false, &mut from, &mut to, 400).unwrap();
        assert_eq!(from.amount, 600);
        assert_eq!(to.amount, 400);
        assert_eq!(from.amount + to.amount, property.total_supply);
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let (property, mut from, mut to) = fixture();
        assert!(move_units(&property, false, &mut from, &mut to, 0).is_err());
    }

    #[test]
    fn locked_property_rejects_every_move() {
        let (mut property, mut from, mut to) = fixture();
        property.offset_locked = true;
        assert!(move_units(&property, false, &mut from, &mut to, 10).is_err());
        assert_eq!(from.amount, 1_000);
        assert_eq!(to.amount, 0);

        property.offset_locked = false;
        assert!(move_units(&property, false, &mut from, &mut to, 10).is_ok());
    }

    #[test]
    fn pause_blocks_moves_globally() {
        let (property, mut from, mut to) = fixture();
        assert!(move_units(&property, true, &mut from, &mut to, 10).is_err());
        assert_eq!(from.amount, 1_000);
    }

    #[test]
    fn failed_debit_leaves_both_sides_untouched() {
        let (property, mut from, mut to) = fixture();
        assert!(move_units(&property, false, &mut from, &mut to, 1_001).is_err());
        assert_eq!(from.amount, 1_000);
        assert_eq!(to.amount, 0);
    }
}
