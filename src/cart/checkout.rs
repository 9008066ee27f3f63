//! Checkout boundary.
//!
//! There is no payment backend: every attempt ends in
//! [`CheckoutError::NotImplemented`] carrying the total that would have been
//! charged. The ledger is only read. The success type is `Infallible` until a
//! backend exists to produce a receipt.

use super::ledger::CartLedger;
use rust_decimal::Decimal;
use std::convert::Infallible;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CheckoutError {
    #[error("the cart is empty")]
    EmptyCart,
    #[error("checkout is not implemented (total {total})")]
    NotImplemented { total: Decimal },
}

pub fn checkout(ledger: &CartLedger) -> Result<Infallible, CheckoutError> {
    if ledger.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    Err(CheckoutError::NotImplemented {
        total: ledger.subtotal(),
    })
}
