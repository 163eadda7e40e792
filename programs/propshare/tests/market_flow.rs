//! Drives the ledger and listing state machine end to end, the way the
//! instruction handlers sequence it: record mutation first, custody moves
//! after, conservation checked throughout.

use anchor_lang::prelude::*;

use propshare::ledger;
use propshare::state::{Balance, Listing, Property};

struct Market {
    property: Property,
    seller: Balance,
    custody: Balance,
    buyers: Vec<Balance>,
}

impl Market {
    /// Mint `supply` units of a fresh property to the seller.
    fn mint(supply: u64) -> Self {
        let property_key = Pubkey::new_unique();
        let marketplace = Pubkey::new_unique();
        let property = Property {
            marketplace,
            id: 1,
            total_supply: supply,
            uri: "ipfs://deeds/1".to_string(),
            offset_locked: false,
            created_at: 0,
            updated_at: 0,
            bump: 254,
        };
        let seller = Balance {
            property: property_key,
            owner: Pubkey::new_unique(),
            amount: supply,
            bump: 253,
        };
        let custody = Balance {
            property: property_key,
            owner: marketplace,
            amount: 0,
            bump: 252,
        };
        Market {
            property,
            seller,
            custody,
            buyers: Vec::new(),
        }
    }

    fn list(&mut self, quantity: u64, unit_price: u64) -> Listing {
        let listing = Listing {
            marketplace: self.property.marketplace,
            seller: self.seller.owner,
            property: self.custody.property,
            id: 1,
            unit_price,
            quantity,
            remaining: quantity,
            completed: false,
            fund_receiver: Pubkey::new_unique(),
            sale_count: 0,
            created_at: 0,
            updated_at: 0,
            bump: 251,
        };
        ledger::move_units(
            &self.property,
            false,
            &mut self.seller,
            &mut self.custody,
            quantity,
        )
        .unwrap();
        listing
    }

    fn buy(&mut self, listing: &mut Listing, quantity: u64, payment: u64) -> Result<u64> {
        self.property.assert_transferable(false)?;
        let price = listing.price_for(quantity)?;
        require!(
            payment >= price,
            propshare::errors::PropshareError::InsufficientPayment
        );
        listing.fill(quantity)?;

        let mut buyer = Balance {
            property: self.custody.property,
            owner: Pubkey::new_unique(),
            amount: 0,
            bump: 250,
        };
        ledger::move_units(&self.property, false, &mut self.custody, &mut buyer, quantity)?;
        self.buyers.push(buyer);
        // The entire attached payment, not just the computed price, goes
        // to the fund receiver.
        Ok(payment)
    }

    fn cancel(&mut self, listing: &mut Listing) -> Result<()> {
        let returned = listing.remaining;
        listing.cancel()?;
        ledger::move_units(
            &self.property,
            false,
            &mut self.custody,
            &mut self.seller,
            returned,
        )
    }

    fn assert_conservation(&self) {
        let held: u64 = self.seller.amount
            + self.custody.amount
            + self.buyers.iter().map(|b| b.amount).sum::<u64>();
        assert_eq!(held, self.property.total_supply);
    }
}

#[test]
fn partial_fills_then_exhaustion_complete_the_listing() {
    let mut market = Market::mint(1_000);
    let mut listing = market.list(400, 5);
    assert_eq!(market.seller.amount, 600);
    assert_eq!(market.custody.amount, 400);
    market.assert_conservation();

    // First buyer takes 150 units and overpays; the full payment is
    // forwarded.
    let forwarded = market.buy(&mut listing, 150, 800).unwrap();
    assert_eq!(forwarded, 800);
    assert_eq!(listing.remaining, 250);
    assert!(!listing.completed);
    assert_eq!(market.buyers[0].amount, 150);
    assert_eq!(market.custody.amount, 250);
    market.assert_conservation();

    // Second buyer exhausts the listing.
    market.buy(&mut listing, 250, 1_250).unwrap();
    assert_eq!(listing.remaining, 0);
    assert!(listing.completed);
    assert_eq!(market.custody.amount, 0);
    market.assert_conservation();

    // Terminal: a further purchase attempt fails.
    assert!(market.buy(&mut listing, 1, 5).is_err());
}

#[test]
fn underpayment_is_rejected_before_any_state_change() {
    let mut market = Market::mint(1_000);
    let mut listing = market.list(400, 5);

    // 150 units at price 5 needs 750.
    assert!(market.buy(&mut listing, 150, 749).is_err());
    assert_eq!(listing.remaining, 400);
    assert_eq!(listing.sale_count, 0);
    assert_eq!(market.custody.amount, 400);
    market.assert_conservation();
}

#[test]
fn oversized_purchase_is_rejected() {
    let mut market = Market::mint(1_000);
    let mut listing = market.list(100, 5);

    assert!(market.buy(&mut listing, 101, 1_000).is_err());
    assert_eq!(listing.remaining, 100);
    market.assert_conservation();
}

#[test]
fn cancelling_returns_escrow_to_the_seller() {
    let mut market = Market::mint(500);
    let mut listing = market.list(100, 7);
    assert_eq!(market.seller.amount, 400);

    market.cancel(&mut listing).unwrap();
    assert!(listing.completed);
    assert_eq!(market.seller.amount, 500);
    assert_eq!(market.custody.amount, 0);
    market.assert_conservation();

    // A cancelled listing cannot be bought or reopened.
    assert!(market.buy(&mut listing, 1, 7).is_err());
    assert!(listing.cancel().is_err());
}

#[test]
fn cancel_after_partial_fill_returns_only_the_remainder() {
    let mut market = Market::mint(1_000);
    let mut listing = market.list(400, 5);
    market.buy(&mut listing, 150, 750).unwrap();

    market.cancel(&mut listing).unwrap();
    assert_eq!(market.seller.amount, 600 + 250);
    assert_eq!(market.buyers[0].amount, 150);
    assert_eq!(market.custody.amount, 0);
    // Frozen at its pre-cancel value.
    assert_eq!(listing.remaining, 250);
    market.assert_conservation();
}

#[test]
fn offset_lock_freezes_listed_property_until_cleared() {
    let mut market = Market::mint(1_000);
    let mut listing = market.list(400, 5);

    market.property.offset_locked = true;
    assert!(market.buy(&mut listing, 100, 500).is_err());
    assert_eq!(listing.remaining, 400);

    market.property.offset_locked = false;
    market.buy(&mut listing, 100, 500).unwrap();
    market.assert_conservation();
}
