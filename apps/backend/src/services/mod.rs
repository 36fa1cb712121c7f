//! Application services: each operation loads what it needs, runs inside one
//! transaction, and publishes the fresh game view after commit.

pub mod claims;
pub mod codes;
pub mod games;
pub mod scoring;
