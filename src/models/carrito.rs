use serde::{Deserialize, Serialize};

use crate::models::instrumento::Instrumento;

/// Línea del carrito: un instrumento distinto y su cantidad.
/// Los campos de display son un snapshot del catálogo al momento de agregar,
/// no una referencia viva.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartInstrumento {
    pub id: u64,
    pub instrumento: String,
    pub marca: String,
    pub modelo: String,
    pub imagen: String,
    pub precio: f64,
    pub cantidad: u32,
}

impl CartInstrumento {
    /// Snapshot de un instrumento del catálogo, con cantidad inicial 1
    pub fn desde(item: &Instrumento) -> Self {
        Self {
            id: item.id,
            instrumento: item.instrumento.clone(),
            marca: item.marca.clone(),
            modelo: item.modelo.clone(),
            imagen: item.imagen.clone(),
            precio: item.precio,
            cantidad: 1,
        }
    }
}
