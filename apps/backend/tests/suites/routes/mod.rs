pub mod claims;
pub mod codes;
pub mod games;
