pub mod app;
pub mod carrito;
pub mod categorias;
pub mod checkout_mp;
pub mod detalles;
pub mod estadisticas;
pub mod home;
pub mod instrumento_card;
pub mod instrumentos;
pub mod login;
pub mod navbar;
pub mod not_found;
pub mod registro;
pub mod ruta_privada;

pub use app::App;
pub use carrito::Carrito;
pub use categorias::Categorias;
pub use checkout_mp::CheckoutMP;
pub use detalles::Detalles;
pub use estadisticas::Estadisticas;
pub use home::Home;
pub use instrumento_card::InstrumentoCard;
pub use instrumentos::Instrumentos;
pub use login::Login;
pub use navbar::Navbar;
pub use not_found::NotFound;
pub use registro::Registro;
pub use ruta_privada::RutaPrivada;
