pub mod balance;
pub mod listing;
pub mod marketplace;
pub mod property;
pub mod sale_receipt;

pub use balance::*;
pub use listing::*;
pub use marketplace::*;
pub use property::*;
pub use sale_receipt::*;
