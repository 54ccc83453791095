//! Archsynth Core Types and Definitions
//!
//! This crate provides the foundational types shared by the archsynth reader,
//! renderers and command-line tool. It includes:
//!
//! - **Identifiers**: Caller-supplied entity identifiers ([`identifier::Id`])
//! - **Model**: The typed, default-free entity model ([`model`] module)
//! - **API**: The API description consumed by the contract renderer ([`api`] module)

pub mod api;
pub mod identifier;
pub mod model;
