// ============================================================================
// AUTH STORE - Estado de sesión con write-through a storage
// ============================================================================
// Único dueño de la Sesion. Se hidrata una vez al arrancar desde el
// snapshot persistido; cada login/logout escribe exactamente una vez.
// El backend de storage se inyecta para poder testear con MemoryBackend.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{AuthInfo, Rol, Sesion};
use crate::utils::{StorageBackend, AUTH_STORAGE_KEY};

#[derive(Clone)]
pub struct AuthStore {
    sesion: Rc<RefCell<Sesion>>,
    storage: Rc<dyn StorageBackend>,
}

impl AuthStore {
    pub fn new(storage: Rc<dyn StorageBackend>) -> Self {
        Self {
            sesion: Rc::new(RefCell::new(Sesion::default())),
            storage,
        }
    }

    /// Hidratar desde el snapshot persistido. Snapshot ausente o malformado
    /// (JSON roto, rol desconocido) deja la sesión vacía, nunca paniquea.
    pub fn hydrate(&self) {
        let Some(json) = self.storage.get(AUTH_STORAGE_KEY) else {
            log::info!("ℹ️ No hay sesión persistida");
            return;
        };

        match serde_json::from_str::<AuthInfo>(&json) {
            Ok(info) => match Rol::parse(&info.role) {
                Some(rol) => {
                    log::info!("✅ Sesión restaurada: {} ({})", info.username, info.role);
                    self.login(&info.username, rol, info.id);
                }
                None => {
                    log::warn!("⚠️ Rol desconocido '{}' en el snapshot, se ignora", info.role);
                }
            },
            Err(e) => {
                log::warn!("⚠️ Snapshot de sesión corrupto, se ignora: {}", e);
            }
        }
    }

    /// Setear los cuatro campos de la sesión de una vez y persistir el snapshot.
    /// La escritura va después del cambio en memoria: nadie puede observar un
    /// snapshot persistido más nuevo que el estado en memoria.
    pub fn login(&self, username: &str, rol: Rol, user_id: u64) {
        {
            let mut sesion = self.sesion.borrow_mut();
            sesion.is_authenticated = true;
            sesion.username = Some(username.to_string());
            sesion.rol = Some(rol);
            sesion.user_id = Some(user_id);
        }

        let info = AuthInfo {
            username: username.to_string(),
            role: rol.as_str().to_string(),
            id: user_id,
        };
        match serde_json::to_string(&info) {
            Ok(json) => {
                if let Err(e) = self.storage.set(AUTH_STORAGE_KEY, &json) {
                    log::warn!("⚠️ No se pudo persistir la sesión: {}", e);
                }
            }
            Err(e) => log::warn!("⚠️ Error serializando la sesión: {}", e),
        }
    }

    /// Volver al estado vacío y borrar el snapshot persistido
    pub fn logout(&self) {
        *self.sesion.borrow_mut() = Sesion::default();
        if let Err(e) = self.storage.remove(AUTH_STORAGE_KEY) {
            log::warn!("⚠️ No se pudo borrar la sesión persistida: {}", e);
        }
        log::info!("👋 Sesión cerrada");
    }

    /// Snapshot inmutable para los consumidores
    pub fn sesion(&self) -> Sesion {
        self.sesion.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryBackend;

    fn store_en_memoria() -> (AuthStore, Rc<MemoryBackend>) {
        let backend = Rc::new(MemoryBackend::new());
        let store = AuthStore::new(backend.clone() as Rc<dyn StorageBackend>);
        (store, backend)
    }

    #[test]
    fn login_setea_los_cuatro_campos() {
        let (store, _) = store_en_memoria();
        store.login("ana", Rol::Admin, 7);

        let sesion = store.sesion();
        assert!(sesion.is_authenticated);
        assert_eq!(sesion.username.as_deref(), Some("ana"));
        assert_eq!(sesion.rol, Some(Rol::Admin));
        assert_eq!(sesion.user_id, Some(7));
    }

    #[test]
    fn logout_vuelve_al_estado_vacio_y_borra_el_snapshot() {
        let (store, backend) = store_en_memoria();
        store.login("ana", Rol::Visor, 3);
        assert!(backend.get(AUTH_STORAGE_KEY).is_some());

        store.logout();
        assert_eq!(store.sesion(), Sesion::default());
        assert_eq!(backend.get(AUTH_STORAGE_KEY), None);
    }

    #[test]
    fn reload_rehidrata_la_sesion_persistida() {
        let (store, backend) = store_en_memoria();
        store.login("ana", Rol::Admin, 7);

        // Simular reload: store nuevo sobre el mismo storage
        let recargado = AuthStore::new(backend as Rc<dyn StorageBackend>);
        recargado.hydrate();

        let sesion = recargado.sesion();
        assert!(sesion.is_authenticated);
        assert_eq!(sesion.username.as_deref(), Some("ana"));
        assert_eq!(sesion.rol, Some(Rol::Admin));
        assert_eq!(sesion.user_id, Some(7));
    }

    #[test]
    fn hydrate_sin_snapshot_deja_la_sesion_vacia() {
        let (store, _) = store_en_memoria();
        store.hydrate();
        assert_eq!(store.sesion(), Sesion::default());
    }

    #[test]
    fn hydrate_con_json_corrupto_deja_la_sesion_vacia() {
        let (store, backend) = store_en_memoria();
        backend.set(AUTH_STORAGE_KEY, "{esto no es json").unwrap();

        store.hydrate();
        assert_eq!(store.sesion(), Sesion::default());
    }

    #[test]
    fn hydrate_con_rol_desconocido_deja_la_sesion_vacia() {
        let (store, backend) = store_en_memoria();
        backend
            .set(
                AUTH_STORAGE_KEY,
                "{\"username\":\"ana\",\"role\":\"SUPERUSER\",\"id\":1}",
            )
            .unwrap();

        store.hydrate();
        assert_eq!(store.sesion(), Sesion::default());
    }

    #[test]
    fn el_snapshot_persistido_refleja_el_ultimo_login() {
        let (store, backend) = store_en_memoria();
        store.login("ana", Rol::Admin, 7);
        store.login("luis", Rol::Visor, 9);

        let json = backend.get(AUTH_STORAGE_KEY).unwrap();
        let info: AuthInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(info.username, "luis");
        assert_eq!(info.role, "VISOR");
        assert_eq!(info.id, 9);
    }
}
