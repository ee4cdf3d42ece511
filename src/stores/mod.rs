pub mod auth_store;
pub mod cart_store;
pub mod checkout_store;

pub use auth_store::AuthStore;
pub use cart_store::CartStore;
pub use checkout_store::{CheckoutCoordinator, CheckoutError, CheckoutEstado};
