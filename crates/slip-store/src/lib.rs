//! slip-store
//!
//! Abstracción del almacenamiento de registros (colaborador externo del
//! portal). El núcleo sólo conoce operaciones estilo tabla sobre registros
//! JSON neutrales: `select`, `insert`, `update`, `delete` y `select_one`,
//! todas filtradas por igualdad de campos.
//!
//! Módulos:
//! - `store`: trait `RecordStore` y tablas (`branches`, `slips`, `requests`).
//! - `filter`: conjunción de igualdades campo = valor.
//! - `memory`: implementación en memoria con orden de inserción estable.
//! - `error`: variantes semánticas de error de almacenamiento.

pub mod error;
pub mod filter;
pub mod memory;
pub mod store;

pub use error::StoreError;
pub use filter::Filter;
pub use memory::InMemoryRecordStore;
pub use store::{Record, RecordStore, Table};
