// Utils compartidos

pub mod constants;
pub mod mercadopago_ffi;
pub mod storage;

pub use constants::*;
pub use mercadopago_ffi::*;
pub use storage::{backend_por_defecto, StorageBackend};
