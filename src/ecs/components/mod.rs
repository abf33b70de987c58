pub mod common;
pub mod office;
pub mod person;

pub use common::{Identity, Person};
pub use office::{CurrentOffice, ElectionResult};
pub use person::{Age, CareerRecord, Order, SenateMembership};
