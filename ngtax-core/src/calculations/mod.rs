//! Tax calculation modules for the Nigerian tax suite.
//!
//! The PAYE engine in [`paye`] carries all the non-trivial logic; the
//! remaining modules are single flat-rate or threshold lookups invoked
//! independently by the interface layer.

pub mod cit;
pub mod common;
pub mod informal;
pub mod paye;
pub mod pit;
pub mod sme;
pub mod vat;
pub mod wht;

pub use cit::CitResult;
pub use informal::PresumptiveResult;
pub use paye::{PayeCalculator, PayeError, PayeResult, ReliefSet};
pub use pit::PitResult;
pub use sme::SmeResult;
pub use vat::VatResult;
pub use wht::WhtResult;
