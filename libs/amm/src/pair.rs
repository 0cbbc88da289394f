//! Constant-product liquidity pair with exact swap and liquidity math
//!
//! A [`Pair`] holds two reserve [`TokenAmount`]s in canonical token order and
//! quotes swaps under the x*y=k formula with a fixed 0.3% fee (997/1000 input
//! multiplier). All reserve-derived divisions truncate toward zero, so quotes
//! never pay out more than the pool can cover. Pairs are immutable: swap
//! operations return the post-trade pool as a new value.

use crate::errors::PairError;
use dex_types::{AssetId, Price, Token, TokenAmount};
use num_integer::Roots;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

/// Swap fee input multiplier: input counts at 997/1000 (0.3% fee)
pub const FEE_NUMERATOR: u32 = 997;
pub const FEE_DENOMINATOR: u32 = 1000;

/// Decimals of the synthesized liquidity share token
pub const LIQUIDITY_TOKEN_DECIMALS: u32 = 8;
pub const LIQUIDITY_TOKEN_SYMBOL: &str = "ZLK-LP";
pub const LIQUIDITY_TOKEN_NAME: &str = "Zenlink LP";

/// A two-asset constant-product pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    chain_id: u64,
    liquidity_token: Token,
    token_amounts: [TokenAmount; 2],
}

impl Pair {
    /// Build a pair from two reserves; the reserve order is canonicalized by
    /// `sorts_before` so `token0`/`token1` is deterministic regardless of
    /// argument order. Fails if the two reserves share an asset id.
    pub fn new(
        chain_id: u64,
        liquidity_asset_id: AssetId,
        token_a_amount: TokenAmount,
        token_b_amount: TokenAmount,
    ) -> Result<Pair, PairError> {
        let token_amounts = if token_a_amount.token().sorts_before(token_b_amount.token())? {
            [token_a_amount, token_b_amount]
        } else {
            [token_b_amount, token_a_amount]
        };

        let liquidity_token = Token::new(
            liquidity_asset_id,
            LIQUIDITY_TOKEN_DECIMALS,
            Some(LIQUIDITY_TOKEN_SYMBOL.to_string()),
            Some(LIQUIDITY_TOKEN_NAME.to_string()),
        );

        Ok(Pair {
            chain_id,
            liquidity_token,
            token_amounts,
        })
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn liquidity_token(&self) -> &Token {
        &self.liquidity_token
    }

    pub fn token0(&self) -> &Token {
        self.token_amounts[0].token()
    }

    pub fn token1(&self) -> &Token {
        self.token_amounts[1].token()
    }

    pub fn reserve0(&self) -> &TokenAmount {
        &self.token_amounts[0]
    }

    pub fn reserve1(&self) -> &TokenAmount {
        &self.token_amounts[1]
    }

    pub fn involves_token(&self, token: &Token) -> bool {
        token.equals(self.token0()) || token.equals(self.token1())
    }

    pub fn reserve_of(&self, token: &Token) -> Result<&TokenAmount, PairError> {
        if !self.involves_token(token) {
            return Err(PairError::TokenNotInvolved {
                asset_id: token.asset_id().canonical(),
            });
        }

        if token.equals(self.token0()) {
            Ok(self.reserve0())
        } else {
            Ok(self.reserve1())
        }
    }

    /// The price of token0 denominated in token1 (ratio of reserve1 to reserve0)
    pub fn token0_price(&self) -> Price {
        Price::new(
            self.token0().clone(),
            self.token1().clone(),
            self.reserve0().raw().clone(),
            self.reserve1().raw().clone(),
        )
    }

    /// The price of token1 denominated in token0 (ratio of reserve0 to reserve1)
    pub fn token1_price(&self) -> Price {
        Price::new(
            self.token1().clone(),
            self.token0().clone(),
            self.reserve1().raw().clone(),
            self.reserve0().raw().clone(),
        )
    }

    pub fn price_of(&self, token: &Token) -> Result<Price, PairError> {
        if !self.involves_token(token) {
            return Err(PairError::TokenNotInvolved {
                asset_id: token.asset_id().canonical(),
            });
        }

        if token.equals(self.token0()) {
            Ok(self.token0_price())
        } else {
            Ok(self.token1_price())
        }
    }

    fn other_token(&self, token: &Token) -> &Token {
        if token.equals(self.token0()) {
            self.token1()
        } else {
            self.token0()
        }
    }

    /// Quote the output of swapping `input_amount` into the pool
    ///
    /// Output is `floor(input*997*reserve_out / (reserve_in*1000 + input*997))`.
    /// Returns the output amount and the post-trade pair.
    pub fn get_output_amount(
        &self,
        input_amount: &TokenAmount,
    ) -> Result<(TokenAmount, Pair), PairError> {
        if !self.involves_token(input_amount.token()) {
            return Err(PairError::TokenNotInvolved {
                asset_id: input_amount.token().asset_id().canonical(),
            });
        }
        if self.reserve0().is_zero() || self.reserve1().is_zero() {
            return Err(PairError::InsufficientReserves);
        }

        let input_reserve = self.reserve_of(input_amount.token())?;
        let output_token = self.other_token(input_amount.token());
        let output_reserve = self.reserve_of(output_token)?;

        let input_with_fee = input_amount.raw() * FEE_NUMERATOR;
        let numerator = &input_with_fee * output_reserve.raw();
        let denominator = input_reserve.raw() * FEE_DENOMINATOR + &input_with_fee;
        let output_raw = numerator / denominator;

        if output_raw.is_zero() {
            return Err(PairError::ZeroOutputAmount);
        }

        let output_amount = TokenAmount::new(output_token.clone(), output_raw);
        let next_pair = Pair::new(
            self.chain_id,
            self.liquidity_token.asset_id().clone(),
            input_reserve.plus(input_amount)?,
            output_reserve.minus(&output_amount)?,
        )?;

        Ok((output_amount, next_pair))
    }

    /// Quote the input required to receive `output_amount` from the pool
    ///
    /// Input is `floor(reserve_in*output*1000 / ((reserve_out-output)*997)) + 1`;
    /// the `+1` keeps the quote sufficient despite truncation. If the
    /// requested output is at least the whole reserve, the input is reported
    /// as zero: a sentinel for "cannot be satisfied".
    pub fn get_input_amount(
        &self,
        output_amount: &TokenAmount,
    ) -> Result<(TokenAmount, Pair), PairError> {
        if !self.involves_token(output_amount.token()) {
            return Err(PairError::TokenNotInvolved {
                asset_id: output_amount.token().asset_id().canonical(),
            });
        }
        if self.reserve0().is_zero() || self.reserve1().is_zero() {
            return Err(PairError::InsufficientReserves);
        }

        let output_reserve = self.reserve_of(output_amount.token())?;
        let input_token = self.other_token(output_amount.token());
        let input_reserve = self.reserve_of(input_token)?;

        let input_amount = if output_amount.raw() >= output_reserve.raw() {
            TokenAmount::new(input_token.clone(), 0)
        } else {
            let numerator = input_reserve.raw() * output_amount.raw() * FEE_DENOMINATOR;
            let denominator = (output_reserve.raw() - output_amount.raw()) * FEE_NUMERATOR;
            TokenAmount::new(input_token.clone(), numerator / denominator + 1)
        };

        let next_pair = Pair::new(
            self.chain_id,
            self.liquidity_token.asset_id().clone(),
            input_reserve.plus(&input_amount)?,
            output_reserve.minus(output_amount)?,
        )?;

        Ok((input_amount, next_pair))
    }

    /// Liquidity share minted for depositing `token_a_amount`/`token_b_amount`
    ///
    /// With zero total supply this is the bootstrap deposit and mints
    /// `isqrt(amount0 * amount1)`. Otherwise the scarcer side binds:
    /// `min(amount0*supply/reserve0, amount1*supply/reserve1)`, which requires
    /// both reserves to be non-zero.
    pub fn get_liquidity_minted(
        &self,
        total_supply: &TokenAmount,
        token_a_amount: &TokenAmount,
        token_b_amount: &TokenAmount,
    ) -> Result<TokenAmount, PairError> {
        if !total_supply.token().equals(&self.liquidity_token) {
            return Err(PairError::InvalidLiquidityToken);
        }

        let (amount0, amount1) = if token_a_amount.token().sorts_before(token_b_amount.token())? {
            (token_a_amount, token_b_amount)
        } else {
            (token_b_amount, token_a_amount)
        };

        if !(amount0.token().equals(self.token0()) && amount1.token().equals(self.token1())) {
            return Err(PairError::TokenOrderMismatch);
        }

        let liquidity = if total_supply.is_zero() {
            (amount0.raw() * amount1.raw()).sqrt()
        } else {
            if self.reserve0().is_zero() || self.reserve1().is_zero() {
                return Err(PairError::InsufficientReserves);
            }

            let share0 = amount0.raw() * total_supply.raw() / self.reserve0().raw();
            let share1 = amount1.raw() * total_supply.raw() / self.reserve1().raw();

            share0.min(share1)
        };

        Ok(TokenAmount::new(self.liquidity_token.clone(), liquidity))
    }

    /// The amount of `token` backing a `liquidity` share of the pool:
    /// `liquidity * reserve_of(token) / total_supply`, truncating
    pub fn get_liquidity_amount(
        &self,
        token: &Token,
        total_supply: &TokenAmount,
        liquidity: &TokenAmount,
    ) -> Result<TokenAmount, PairError> {
        if !self.involves_token(token) {
            return Err(PairError::TokenNotInvolved {
                asset_id: token.asset_id().canonical(),
            });
        }
        if !total_supply.token().equals(&self.liquidity_token)
            || !liquidity.token().equals(&self.liquidity_token)
        {
            return Err(PairError::InvalidLiquidityToken);
        }
        if liquidity.raw() > total_supply.raw() {
            return Err(PairError::LiquidityExceedsTotalSupply {
                liquidity: liquidity.raw().to_string(),
                total_supply: total_supply.raw().to_string(),
            });
        }
        if total_supply.is_zero() {
            return Err(PairError::ZeroTotalSupply);
        }

        let reserve = self.reserve_of(token)?;
        let amount = liquidity.raw() * reserve.raw() / total_supply.raw();

        Ok(TokenAmount::new(token.clone(), amount))
    }
}
