//! Scripts for deploying the Memeverse smart contracts.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod cli;
mod commands;
pub mod constants;
pub mod errors;
pub mod factory;
pub mod networks;
pub mod utils;
