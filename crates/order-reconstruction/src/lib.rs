//! Reconstructs canonical orders from settled transactions and their ledger
//! mutation records.

pub mod deltas;
pub mod pair;
pub mod quality;
pub mod reconstruct;

pub use crate::{
    deltas::{ExercisedTotals, sum_exercised_deltas},
    pair::PairPreferences,
    reconstruct::{Error, ReconstructOptions, reconstruct_order},
};
