//! prep-match: motor de deduplicación de registros de cálculo.
//!
//! Decide si un registro candidato ya existe dentro de la población
//! persistida de su mismo estilo, comparando claves exactas, claves con
//! tolerancia numérica y claves de tipo lista según el `MatchSpec` del
//! estilo. Sin I/O: la capa de base de datos arma la población y este crate
//! sólo responde la pregunta "is new?".
pub mod compare;
pub mod errors;
pub mod fingerprint;
pub mod hashing;
pub mod matcher;
pub mod registry;
pub mod spec;
pub mod styles;

pub use errors::MatchError;
pub use fingerprint::{input_fingerprint, RecordFingerprintInput};
pub use matcher::{first_match, is_duplicate, is_new};
pub use registry::StyleRegistry;
pub use spec::{ListRule, MatchSpec, MatchSpecBuilder, OrderSensitivity, Tolerance};
