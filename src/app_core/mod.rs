//! Tier list application core: state, input types, and the key reducer.

pub mod input;
pub mod reducer;
pub mod state;
