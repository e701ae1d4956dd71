// prep-domain library entry point
pub mod error;
pub mod record;
pub mod value;
pub use error::DomainError;
pub use record::CalculationRecord;
pub use value::FieldValue;
