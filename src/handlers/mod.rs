//! HTTP handlers for advertisement CRUD.

pub mod adv;
pub use adv::*;
