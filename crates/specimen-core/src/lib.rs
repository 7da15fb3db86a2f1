//! Composition layer over a specimen-generation pipeline.
//!
//! This crate defines the contracts (ports) the pipeline is assembled from:
//! request specifications, specimen builders, specimen commands and the
//! data-context capability. It depends only on `specimen-types` -- never on
//! `specimen-infra` or any database/IO crate.

pub mod builder;
pub mod command;
pub mod data_context;
pub mod specification;
