// ============================================================================
// USE CART HOOK - Puente entre el CartStore y los componentes
// ============================================================================

use yew::prelude::*;

use crate::models::{CartInstrumento, Instrumento};
use crate::stores::CartStore;

#[derive(Clone, PartialEq)]
pub struct UseCartHandle {
    /// Snapshot de las líneas del carrito
    pub items: Vec<CartInstrumento>,
    pub total_items: u32,
    pub total_amount: f64,
    pub agregar: Callback<Instrumento>,
    pub incrementar: Callback<u64>,
    pub quitar: Callback<u64>,
    pub limpiar: Callback<()>,
}

#[hook]
pub fn use_cart() -> UseCartHandle {
    // El carrito vive solo en memoria, no se persiste entre reloads
    let store = use_mut_ref(CartStore::new);
    let items = use_state(|| store.borrow().items());

    let agregar = {
        let store = store.clone();
        let items = items.clone();
        Callback::from(move |instrumento: Instrumento| {
            store.borrow().agregar(&instrumento);
            items.set(store.borrow().items());
        })
    };

    let incrementar = {
        let store = store.clone();
        let items = items.clone();
        Callback::from(move |id: u64| {
            store.borrow().incrementar(id);
            items.set(store.borrow().items());
        })
    };

    let quitar = {
        let store = store.clone();
        let items = items.clone();
        Callback::from(move |id: u64| {
            store.borrow().quitar(id);
            items.set(store.borrow().items());
        })
    };

    let limpiar = {
        let store = store.clone();
        let items = items.clone();
        Callback::from(move |_| {
            store.borrow().limpiar();
            items.set(store.borrow().items());
        })
    };

    // Snapshot de los totales; el handle se arma solo con locales
    let (total_items, total_amount) = {
        let store = store.borrow();
        (store.total_items(), store.total_amount())
    };

    UseCartHandle {
        items: (*items).clone(),
        total_items,
        total_amount,
        agregar,
        incrementar,
        quitar,
        limpiar,
    }
}

/// Provider que comparte el carrito con toda la app
#[function_component(CartContextProvider)]
pub fn cart_context_provider(props: &CartContextProviderProps) -> Html {
    let handle = use_cart();

    html! {
        <ContextProvider<UseCartHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<UseCartHandle>>
    }
}

#[derive(Properties, PartialEq)]
pub struct CartContextProviderProps {
    pub children: Children,
}
