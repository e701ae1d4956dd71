//! PrepFlow Rust Library
//!
//! Este crate actúa como la fachada del workspace PrepFlow:
//! - `prep-domain` aporta el modelo de registros de cálculo.
//! - `prep-match` aporta el motor de deduplicación (is_new) por estilo.
//!
//! Puede usarse desde `main.rs` o por otros crates/clientes.

pub use prep_domain::{CalculationRecord, DomainError, FieldValue};
pub use prep_match::{first_match, input_fingerprint, is_duplicate, is_new, ListRule, MatchError,
                     MatchSpec, OrderSensitivity, StyleRegistry, Tolerance};
