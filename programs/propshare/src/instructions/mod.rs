pub mod initialize;
pub use initialize::*;

pub mod mint_property;
pub use mint_property::*;

pub mod mint_property_batch;
pub use mint_property_batch::*;

pub mod transfer_units;
pub use transfer_units::*;

pub mod set_offset_lock;
pub use set_offset_lock::*;

pub mod set_uri;
pub use set_uri::*;

pub mod update_marketplace;
pub use update_marketplace::*;

pub mod create_listing;
pub use create_listing::*;

pub mod purchase_listing;
pub use purchase_listing::*;

pub mod cancel_listing;
pub use cancel_listing::*;
