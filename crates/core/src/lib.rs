//! Domain logic for the Handover submission service.
//!
//! Pure, I/O-free building blocks shared by the db and api crates:
//! intake validation and quota arithmetic, archive entry naming, slug
//! generation, and the domain error taxonomy.

pub mod archive;
pub mod error;
pub mod intake;
pub mod slug;
pub mod types;
