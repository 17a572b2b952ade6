//! Domain modules (vertical slices): types, wire types, conversions, state.

pub mod ledger;
pub mod order;
pub mod query;
