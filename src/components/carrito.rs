// ============================================================================
// CARRITO - Contenido del drawer del carrito
// ============================================================================

use yew::prelude::*;

use crate::components::CheckoutMP;
use crate::hooks::UseCartHandle;

#[function_component(Carrito)]
pub fn carrito() -> Html {
    let cart = use_context::<UseCartHandle>().expect("CartContext no disponible");

    let on_limpiar = {
        let limpiar = cart.limpiar.clone();
        Callback::from(move |_: MouseEvent| limpiar.emit(()))
    };

    html! {
        <div>
            <h2>{"Carrito de Compras"}</h2>
            if cart.items.is_empty() {
                <p>{"El carrito está vacío"}</p>
            } else {
                <>
                <ul>
                    {
                        cart.items.iter().map(|linea| {
                            let on_mas = {
                                let incrementar = cart.incrementar.clone();
                                let id = linea.id;
                                Callback::from(move |_: MouseEvent| incrementar.emit(id))
                            };
                            let on_menos = {
                                let quitar = cart.quitar.clone();
                                let id = linea.id;
                                Callback::from(move |_: MouseEvent| quitar.emit(id))
                            };
                            html! {
                                <li key={linea.id}>
                                    <img src={linea.imagen.clone()} alt={linea.instrumento.clone()} width="48" />
                                    <span>{format!("{} ({} {})", linea.instrumento, linea.marca, linea.modelo)}</span>
                                    <span>{format!(" ${} x {}", linea.precio, linea.cantidad)}</span>
                                    <button onclick={on_menos}>{"-"}</button>
                                    <button onclick={on_mas}>{"+"}</button>
                                </li>
                            }
                        }).collect::<Html>()
                    }
                </ul>
                <p><b>{format!("Total ({} items): ${}", cart.total_items, cart.total_amount)}</b></p>
                <button onclick={on_limpiar}>{"Vaciar carrito"}</button>
                </>
            }
            <CheckoutMP monto_carrito={cart.total_amount} />
        </div>
    }
}
