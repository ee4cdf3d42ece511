// ============================================================================
// AUTH - Sesión, roles y guard de acceso
// ============================================================================
// La decisión de autorización vive acá como función pura sobre la sesión,
// los componentes (Navbar, RutaPrivada) solo consumen el resultado.
// ============================================================================

use serde::{Deserialize, Serialize};

/// Rol del usuario autenticado
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Rol {
    Admin,
    Operador,
    Visor,
}

impl Rol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rol::Admin => "ADMIN",
            Rol::Operador => "OPERADOR",
            Rol::Visor => "VISOR",
        }
    }

    /// Parsear el string persistido/del backend. Cualquier otro valor es
    /// entrada malformada y se trata como ausente.
    pub fn parse(valor: &str) -> Option<Rol> {
        match valor {
            "ADMIN" => Some(Rol::Admin),
            "OPERADOR" => Some(Rol::Operador),
            "VISOR" => Some(Rol::Visor),
            _ => None,
        }
    }
}

/// Resultado del guard de acceso: no es un error, es control de flujo normal.
/// Sobre Denegado el caller redirige al login, el guard no navega.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acceso {
    Permitido,
    Denegado,
}

/// Estado de autenticación del cliente
/// Invariante: `is_authenticated == rol.is_some()`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sesion {
    pub is_authenticated: bool,
    pub username: Option<String>,
    pub rol: Option<Rol>,
    pub user_id: Option<u64>,
}

impl Sesion {
    /// Guard de acceso: Denegado sin autenticar, Permitido sii el rol
    /// está dentro del conjunto permitido.
    pub fn autorizar(&self, permitidos: &[Rol]) -> Acceso {
        if !self.is_authenticated {
            return Acceso::Denegado;
        }
        match self.rol {
            Some(rol) if permitidos.contains(&rol) => Acceso::Permitido,
            _ => Acceso::Denegado,
        }
    }
}

/// Registro persistido en storage bajo AUTH_STORAGE_KEY
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthInfo {
    pub username: String,
    pub role: String,
    pub id: u64,
}

/// Request de login al backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub nombre_usuario: String,
    pub clave: String,
}

/// Request de alta de usuario; el backend asigna rol VISOR
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistroRequest {
    pub nombre_usuario: String,
    pub clave: String,
}

/// Usuario devuelto por el backend al loguearse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioLogin {
    pub id: u64,
    pub nombre_usuario: String,
    pub rol: Rol,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sesion_con_rol(rol: Rol) -> Sesion {
        Sesion {
            is_authenticated: true,
            username: Some("ana".to_string()),
            rol: Some(rol),
            user_id: Some(7),
        }
    }

    #[test]
    fn sin_autenticar_siempre_denegado() {
        let sesion = Sesion::default();
        assert_eq!(sesion.autorizar(&[]), Acceso::Denegado);
        assert_eq!(sesion.autorizar(&[Rol::Admin]), Acceso::Denegado);
        assert_eq!(
            sesion.autorizar(&[Rol::Admin, Rol::Operador, Rol::Visor]),
            Acceso::Denegado
        );
    }

    #[test]
    fn permitido_sii_el_rol_esta_en_el_conjunto() {
        let visor = sesion_con_rol(Rol::Visor);
        assert_eq!(visor.autorizar(&[Rol::Admin]), Acceso::Denegado);
        assert_eq!(visor.autorizar(&[Rol::Visor]), Acceso::Permitido);

        let operador = sesion_con_rol(Rol::Operador);
        assert_eq!(
            operador.autorizar(&[Rol::Admin, Rol::Operador]),
            Acceso::Permitido
        );
        assert_eq!(operador.autorizar(&[Rol::Admin]), Acceso::Denegado);
    }

    #[test]
    fn conjunto_vacio_deniega_incluso_autenticado() {
        let admin = sesion_con_rol(Rol::Admin);
        assert_eq!(admin.autorizar(&[]), Acceso::Denegado);
    }

    #[test]
    fn registro_request_viaja_en_camel_case() {
        let request = RegistroRequest {
            nombre_usuario: "ana".to_string(),
            clave: "secreta".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"nombreUsuario\":\"ana\""));
        assert!(json.contains("\"clave\":\"secreta\""));
    }

    #[test]
    fn rol_parse_rechaza_valores_desconocidos() {
        assert_eq!(Rol::parse("ADMIN"), Some(Rol::Admin));
        assert_eq!(Rol::parse("OPERADOR"), Some(Rol::Operador));
        assert_eq!(Rol::parse("VISOR"), Some(Rol::Visor));
        assert_eq!(Rol::parse("admin"), None);
        assert_eq!(Rol::parse("SUPERUSER"), None);
        assert_eq!(Rol::parse(""), None);
    }
}
