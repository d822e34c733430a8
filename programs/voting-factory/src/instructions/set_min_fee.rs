use anchor_lang::prelude::*;

use crate::{constants::*, events::MinFeeUpdated, state::Factory};

#[derive(Accounts)]
pub struct SetMinFee<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [FACTORY_SEED],
        bump = factory.bump
    )]
    pub factory: Account<'info, Factory>,
}

impl<'info> SetMinFee<'info> {
    pub fn set_min_fee(&mut self, min_fee: u64) -> Result<()> {
        let rent_floor = Rent::get()?.minimum_balance(0);
        let previous_min_fee = self
            .factory
            .set_min_fee(&self.owner.key(), min_fee, rent_floor)?;

        msg!(
            "Minimum fee updated: {} -> {} lamports",
            previous_min_fee,
            min_fee
        );

        emit!(MinFeeUpdated {
            previous_min_fee,
            min_fee,
        });

        Ok(())
    }
}
