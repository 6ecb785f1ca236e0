//! hsmeta library: HSReplay fetches shared by the `hsmeta` script and the
//! `hsmeta-tiers` terminal viewer.

pub mod app_core;
pub mod fetch;
pub mod logging;
pub mod meta;
pub mod model;
pub mod theme;
pub mod ui;
