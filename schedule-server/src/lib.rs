//! Train schedule server.
//!
//! An HTTP service over two in-memory mappings, trains by id and stations
//! by name, loaded once from JSON documents at startup. Answers
//! "which trains run from here to there?" by scanning each train's route.

pub mod config;
pub mod domain;
pub mod store;
pub mod web;
