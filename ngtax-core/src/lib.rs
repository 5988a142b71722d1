pub mod calculations;
pub mod models;

pub use calculations::paye::{PayeCalculator, PayeError, PayeResult, ReliefSet};
pub use models::*;
