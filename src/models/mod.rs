pub mod auth;
pub mod carrito;
pub mod instrumento;
pub mod pedido;

pub use auth::{Acceso, AuthInfo, LoginRequest, RegistroRequest, Rol, Sesion, UsuarioLogin};
pub use carrito::CartInstrumento;
pub use instrumento::{Categoria, Instrumento};
pub use pedido::{Pedido, PreferenceMP};
