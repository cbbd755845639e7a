pub mod error;
pub mod options;
pub mod resolver;

pub use error::PeriodError;
pub use options::PeriodOptions;
pub use resolver::resolve_period;
