use anchor_lang::prelude::*;
use anchor_lang::solana_program::clock::Clock;
use anchor_lang::system_program::{create_account, CreateAccount};

use crate::errors::PropshareError;
use crate::instructions::mint_property::PropertyMinted;
use crate::state::{Balance, Marketplace, Property};

#[derive(Accounts)]
#[instruction(property_id: u64)]
pub struct MintPropertyBatch<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [Marketplace::SEED_PREFIX, admin.key().as_ref()],
        bump = marketplace.bump,
        constraint = marketplace.admin == admin.key() @ PropshareError::Unauthorized,
    )]
    pub marketplace: Account<'info, Marketplace>,

    #[account(
        init,
        payer = admin,
        seeds = [
            Property::SEED_PREFIX,
            marketplace.key().as_ref(),
            &property_id.to_le_bytes(),
        ],
        bump,
        space = 8 + Property::INIT_SPACE,
    )]
    pub property: Account<'info, Property>,

    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
    // Remaining accounts: one writable balance PDA per recipient, in the
    // same order as `recipients`.
}

/// One minting event distributed across several initial holders. Every
/// entry is validated before any balance account is created, so a single
/// bad entry aborts the whole batch.
pub fn handler<'c: 'info, 'info>(
    ctx: Context<'_, '_, 'c, 'info, MintPropertyBatch<'info>>,
    property_id: u64,
    recipients: Vec<Pubkey>,
    amounts: Vec<u64>,
    uri: String,
) -> Result<()> {
    let marketplace = &mut ctx.accounts.marketplace;
    let clock = Clock::get()?;

    require_eq!(
        property_id,
        marketplace.next_property_id()?,
        PropshareError::PropertyIdMismatch
    );

    require!(
        recipients.len() == amounts.len(),
        PropshareError::ArrayLengthMismatch
    );
    require!(!recipients.is_empty(), PropshareError::EmptyBatch);
    require!(
        ctx.remaining_accounts.len() == recipients.len(),
        PropshareError::MissingBalanceAccount
    );
    require!(
        uri.len() <= Property::MAX_URI_LEN,
        PropshareError::UriTooLong
    );

    let mut total_supply: u64 = 0;
    for (recipient, amount) in recipients.iter().zip(amounts.iter()) {
        require!(*amount > 0, PropshareError::ZeroAmount);
        require!(
            *recipient != Pubkey::default() && *recipient != marketplace.key(),
            PropshareError::InvalidRecipient
        );
        total_supply = total_supply
            .checked_add(*amount)
            .ok_or(PropshareError::MathOverflow)?;
    }

    let property_key = ctx.accounts.property.key();
    ctx.accounts.property.set_inner(Property {
        marketplace: marketplace.key(),
        id: property_id,
        total_supply,
        uri,
        offset_locked: false,
        created_at: clock.unix_timestamp,
        updated_at: clock.unix_timestamp,
        bump: ctx.bumps.property,
    });

    let space = 8 + Balance::INIT_SPACE;
    let lamports = Rent::get()?.minimum_balance(space);

    for (i, (recipient, amount)) in recipients.iter().zip(amounts.iter()).enumerate() {
        let balance_info = &ctx.remaining_accounts[i];

        let (expected, bump) = Pubkey::find_program_address(
            &[
                Balance::SEED_PREFIX,
                property_key.as_ref(),
                recipient.as_ref(),
            ],
            ctx.program_id,
        );
        require_keys_eq!(
            balance_info.key(),
            expected,
            PropshareError::BalanceAccountMismatch
        );
        require!(
            balance_info.is_writable,
            PropshareError::MissingBalanceAccount
        );

        create_account(
            CpiContext::new_with_signer(
                ctx.accounts.system_program.to_account_info(),
                CreateAccount {
                    from: ctx.accounts.admin.to_account_info(),
                    to: balance_info.clone(),
                },
                &[&[
                    Balance::SEED_PREFIX,
                    property_key.as_ref(),
                    recipient.as_ref(),
                    &[bump],
                ]],
            ),
            lamports,
            space as u64,
            ctx.program_id,
        )?;

        let balance = Balance {
            property: property_key,
            owner: *recipient,
            amount: *amount,
            bump,
        };
        let mut data = balance_info.try_borrow_mut_data()?;
        let dst: &mut [u8] = &mut data;
        let mut writer = std::io::Cursor::new(dst);
        balance.try_serialize(&mut writer)?;
    }

    marketplace.property_count = property_id;

    emit!(PropertyMinted {
        property: property_key,
        property_id,
        total_supply,
        holder_count: recipients.len() as u32,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Property {} minted: {} units across {} holders",
        property_id,
        total_supply,
        recipients.len()
    );
    Ok(())
}
