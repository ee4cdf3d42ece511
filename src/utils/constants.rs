/// URL base del backend
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:8080 (por defecto)
/// - Producción: via BACKEND_URL en .env
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};

/// Public key de Mercado Pago (TEST por defecto)
pub const MP_PUBLIC_KEY: &str = match option_env!("MP_PUBLIC_KEY") {
    Some(key) => key,
    None => "TEST-9e6f0302-1127-45c8-9a27-34326bdb8775",
};

/// Locale para el widget de pago
pub const MP_LOCALE: &str = "es-AR";

/// Clave fija bajo la que se persiste la sesión de autenticación
pub const AUTH_STORAGE_KEY: &str = "authInfo";
