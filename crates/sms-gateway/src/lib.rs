//! Customer lookup and SMS dispatch collaborators.
//!
//! Both sides are placeholders for an external API: customers come from
//! fixture data and sent messages are only recorded in memory.

mod error;
mod sink;
mod source;
mod types;

pub use error::GatewayError;
pub use sink::{MockSmsSink, SmsSink};
pub use source::{CustomerSource, FixtureCustomers};
pub use types::*;
