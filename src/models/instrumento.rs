use serde::{Deserialize, Serialize};

/// Categoría del catálogo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Categoria {
    pub id: u64,
    pub denominacion: String,
}

/// Instrumento del catálogo (lo que devuelve el backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrumento {
    pub id: u64,
    /// Nombre para mostrar
    pub instrumento: String,
    pub marca: String,
    pub modelo: String,
    pub imagen: String,
    pub precio: f64,
    #[serde(default)]
    pub costo_envio: String,
    #[serde(default)]
    pub cantidad_vendida: u32,
    #[serde(default)]
    pub descripcion: String,
    #[serde(default)]
    pub categoria: Option<Categoria>,
}
