//! Request and response bodies

pub mod product;
pub mod policy;
