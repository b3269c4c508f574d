//! CVSS2 vector handling.
//!
//! - [`parse_vector`] decodes `AV:N/AC:L/...` into a [`MetricSet`]
//! - [`clean_vector`] renders the canonical form of a [`MetricSet`]
//! - [`from_rh_vector`] handles the `<score>/<vector>` form

mod parser;
pub mod rh;
mod serialize;
mod set;

pub use parser::{parse_vector, FIELD_SEPARATOR, VALUE_SEPARATOR};
pub use rh::{from_rh_vector, split_rh_vector, RH_SCORE_TOLERANCE};
pub use serialize::clean_vector;
pub use set::MetricSet;
