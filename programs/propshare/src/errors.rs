use anchor_lang::prelude::*;

#[error_code]
pub enum PropshareError {
    #[msg("Only the marketplace admin can perform this operation")]
    Unauthorized,

    #[msg("Caller is not on the marketplace allow list")]
    NotAllowlisted,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Recipients and amounts differ in length")]
    ArrayLengthMismatch,

    #[msg("Batch mint requires at least one recipient")]
    EmptyBatch,

    #[msg("Recipient cannot be the zero address or the custody holder")]
    InvalidRecipient,

    #[msg("Fund receiver cannot be the zero address")]
    InvalidReceiver,

    #[msg("URI cannot be empty")]
    InvalidUri,

    #[msg("URI exceeds the maximum length")]
    UriTooLong,

    #[msg("Marketplace name cannot be empty")]
    NameEmpty,

    #[msg("Marketplace name exceeds 32 characters")]
    NameTooLong,

    #[msg("Marketplace name contains invalid characters")]
    InvalidNameChars,

    #[msg("Property is locked for offset accounting")]
    LockedForOffset,

    #[msg("Transfers are paused")]
    TransfersPaused,

    #[msg("Insufficient property balance")]
    InsufficientBalance,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Cannot buy your own listing")]
    CannotBuyOwnListing,

    #[msg("Listing has fewer units available than requested")]
    InsufficientListedTokens,

    #[msg("Listing is no longer available")]
    ListingUnavailable,

    #[msg("Attached payment does not cover the purchase price")]
    InsufficientPayment,

    #[msg("Buyer token balance does not cover the attached payment")]
    InsufficientFunds,

    #[msg("Only the listing seller can cancel it")]
    NotListingOwner,

    #[msg("Client property id does not match on-chain state")]
    PropertyIdMismatch,

    #[msg("Client listing id does not match on-chain state")]
    ListingIdMismatch,

    #[msg("Client sale index does not match on-chain state")]
    SaleIndexMismatch,

    #[msg("Listing does not belong to this property")]
    WrongPropertyForListing,

    #[msg("Token account has the wrong owner")]
    TokenAccountWrongOwner,

    #[msg("Token account has the wrong mint")]
    TokenAccountWrongMint,

    #[msg("Balance account does not match the derived address")]
    BalanceAccountMismatch,

    #[msg("A writable balance account must be supplied for every recipient")]
    MissingBalanceAccount,
}
