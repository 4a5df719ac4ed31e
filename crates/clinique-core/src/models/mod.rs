//! MOS domain types.

mod authentication_device;
mod authorization;
mod capacity;
mod person_under_care;
mod physical_person;
mod primitives;
mod professional;

pub use authentication_device::*;
pub use authorization::*;
pub use capacity::*;
pub use person_under_care::*;
pub use physical_person::*;
pub use primitives::*;
pub use professional::*;
