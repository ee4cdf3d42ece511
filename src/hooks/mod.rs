pub mod use_auth;
pub mod use_cart;

pub use use_auth::{AuthContextProvider, UseAuthHandle};
pub use use_cart::{CartContextProvider, UseCartHandle};
