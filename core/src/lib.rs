//! # catisland core
//!
//! Polls a fleet of manager endpoints and merges what they report.
//!
//! * [`fetcher`]: the network boundary, one authenticated request per endpoint.
//! * [`parser`]: turns a raw status listing into application records.
//! * [`aggregator`]: bounded fan-out over all endpoints and the merge of their outcomes.
//! * [`export`]: JSON dump of the merged records.

pub mod aggregator;
pub mod error;
pub mod export;
pub mod fetcher;
pub mod parser;
