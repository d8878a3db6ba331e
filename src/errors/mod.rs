pub mod harness_error;

pub use harness_error::HarnessError;
pub use wess_domain::DomainError;
