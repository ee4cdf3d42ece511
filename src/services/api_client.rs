// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use gloo_net::http::Request;

use crate::models::{
    Categoria, Instrumento, LoginRequest, Pedido, PreferenceMP, RegistroRequest, UsuarioLogin,
};
use crate::utils::constants::BACKEND_URL;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }

    /// Listar el catálogo completo
    pub async fn get_instrumentos(&self) -> Result<Vec<Instrumento>, String> {
        let url = format!("{}/instrumento", self.base_url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }
        response
            .json::<Vec<Instrumento>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Obtener un instrumento por id (pantalla de detalles)
    pub async fn get_instrumento(&self, id: u64) -> Result<Instrumento, String> {
        let url = format!("{}/instrumento/{}", self.base_url, id);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }
        response
            .json::<Instrumento>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Eliminar un instrumento (gestión, solo staff)
    pub async fn delete_instrumento(&self, id: u64) -> Result<(), String> {
        let url = format!("{}/instrumento/{}", self.base_url, id);
        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }
        Ok(())
    }

    /// Listar categorías
    pub async fn get_categorias(&self) -> Result<Vec<Categoria>, String> {
        let url = format!("{}/categoria", self.base_url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }
        response
            .json::<Vec<Categoria>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Login contra el backend
    pub async fn login(&self, nombre_usuario: &str, clave: &str) -> Result<UsuarioLogin, String> {
        let url = format!("{}/usuario/login", self.base_url);
        let request = LoginRequest {
            nombre_usuario: nombre_usuario.to_string(),
            clave: clave.to_string(),
        };

        log::info!("🔐 Iniciando sesión para usuario: {}", nombre_usuario);

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            response
                .json::<UsuarioLogin>()
                .await
                .map_err(|e| format!("Parse error: {}", e))
        } else {
            Err(format!("HTTP {}: {}", response.status(), response.status_text()))
        }
    }

    /// Dar de alta un usuario nuevo
    pub async fn registrar(&self, nombre_usuario: &str, clave: &str) -> Result<(), String> {
        let url = format!("{}/usuario/register", self.base_url);
        let request = RegistroRequest {
            nombre_usuario: nombre_usuario.to_string(),
            clave: clave.to_string(),
        };

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }
        Ok(())
    }

    /// Crear la preferencia de pago en Mercado Pago vía backend
    pub async fn create_preference_mp(&self, pedido: &Pedido) -> Result<PreferenceMP, String> {
        let url = format!("{}/pedido/create_preference_mp", self.base_url);

        let response = Request::post(&url)
            .json(pedido)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        response
            .json::<PreferenceMP>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_base_url_inyecta_la_url_del_backend() {
        let api = ApiClient::with_base_url("http://backend.test");
        assert_eq!(api.base_url, "http://backend.test");
    }

    #[test]
    fn new_usa_la_url_compilada() {
        let api = ApiClient::new();
        assert_eq!(api.base_url, BACKEND_URL);
    }
}
