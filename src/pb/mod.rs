//! Generated protobuf message types for the wire schema (`SPEC_FULL.md` §4.8).
//!
//! `geocodec.rs` is checked in rather than built fresh every time, the same
//! way `geozero`'s `with-mvt` feature checks in `vector_tile.rs`: enable the
//! `regenerate-proto` feature to recompile it from `proto/geocodec.proto`.
#[rustfmt::skip]
mod geocodec;
pub use geocodec::*;
