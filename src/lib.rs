//! Locates an installed libcurl and describes how to link against it.
//!
//! The pieces run in a fixed order: the [`registry`] says which features the
//! build enabled, [`resolve`] turns those into dependency link targets,
//! [`alias`] picks the library variant consumers link against, and
//! [`components`] checks requested protocols and features. [`package`] ties
//! them together over an installation prefix.

pub mod adapters;
pub mod alias;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod components;
pub mod context;
pub mod error;
pub mod package;
pub mod ports;
pub mod registry;
pub mod resolve;
pub mod version;
