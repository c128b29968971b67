//! Request extractors: the per-request unit of work and the advertisement id.

mod adv_id;
mod unit_of_work;
pub use adv_id::{parse_adv_id, AdvId};
pub use unit_of_work::UnitOfWork;
