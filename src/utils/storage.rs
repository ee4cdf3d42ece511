// ============================================================================
// STORAGE - Adaptador de persistencia clave/valor
// ============================================================================
// El AuthStore escribe su snapshot a través de este trait, así los tests
// pueden inyectar un backend en memoria en lugar de localStorage.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use web_sys::{window, Storage};

/// Almacenamiento clave/valor durable (localStorage en el navegador)
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str) -> Result<(), String>;
}

fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Backend real: localStorage del navegador
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    pub fn disponible() -> bool {
        get_local_storage().is_some()
    }
}

impl StorageBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Option<String> {
        let storage = get_local_storage()?;
        storage.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
        storage
            .set_item(key, value)
            .map_err(|_| "Error guardando en localStorage".to_string())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
        storage
            .remove_item(key)
            .map_err(|_| "Error eliminando de localStorage".to_string())
    }
}

/// Backend en memoria: tests, y fallback cuando localStorage no está disponible
/// (en ese caso la sesión simplemente no sobrevive al reload)
#[derive(Default)]
pub struct MemoryBackend {
    datos: RefCell<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.datos.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.datos
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        self.datos.borrow_mut().remove(key);
        Ok(())
    }
}

/// Backend por defecto de la app
pub fn backend_por_defecto() -> Rc<dyn StorageBackend> {
    if LocalStorageBackend::disponible() {
        Rc::new(LocalStorageBackend)
    } else {
        log::warn!("⚠️ localStorage no disponible, la sesión no va a persistir");
        Rc::new(MemoryBackend::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_backend_guarda_y_lee() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.get("authInfo"), None);

        backend.set("authInfo", "{\"x\":1}").unwrap();
        assert_eq!(backend.get("authInfo"), Some("{\"x\":1}".to_string()));

        backend.remove("authInfo").unwrap();
        assert_eq!(backend.get("authInfo"), None);
    }

    #[test]
    fn memory_backend_remove_de_clave_ausente_no_falla() {
        let backend = MemoryBackend::new();
        assert!(backend.remove("noExiste").is_ok());
    }
}
