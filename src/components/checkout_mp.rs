// ============================================================================
// CHECKOUT MP - Botón de compra + widget de Mercado Pago
// ============================================================================
// El CheckoutCoordinator decide si un intento emite request; acá solo está
// el pegamento async (spawn_local + ApiClient) y el montaje del wallet.
// ============================================================================

use yew::prelude::*;

use crate::services::ApiClient;
use crate::stores::{CheckoutCoordinator, CheckoutError, CheckoutEstado};
use crate::utils::{desmontar_wallet, init_mercado_pago, render_wallet_brick, MP_LOCALE, MP_PUBLIC_KEY};

#[derive(Properties, PartialEq)]
pub struct CheckoutMPProps {
    pub monto_carrito: f64,
}

#[function_component(CheckoutMP)]
pub fn checkout_mp(props: &CheckoutMPProps) -> Html {
    let coordinator = use_mut_ref(CheckoutCoordinator::new);
    let estado = use_state(|| CheckoutEstado::Idle);

    // Inicializar el SDK una sola vez
    use_effect_with((), |_| {
        init_mercado_pago(MP_PUBLIC_KEY, MP_LOCALE);
        || ()
    });

    // Si el monto cambió, el intento anterior ya no vale
    {
        let coordinator = coordinator.clone();
        let estado = estado.clone();
        use_effect_with(props.monto_carrito, move |_| {
            coordinator.borrow().reiniciar();
            estado.set(coordinator.borrow().estado());
            || ()
        });
    }

    // Montar el wallet cuando hay preferencia, desmontarlo al salir de Ready
    {
        let estado_actual = (*estado).clone();
        use_effect_with(estado_actual, |estado| {
            let montado = matches!(estado, CheckoutEstado::Ready { .. });
            if let CheckoutEstado::Ready { preference_id } = estado {
                render_wallet_brick("wallet_container", preference_id);
            }
            move || {
                if montado {
                    desmontar_wallet();
                }
            }
        });
    }

    let on_comprar = {
        let coordinator = coordinator.clone();
        let estado = estado.clone();
        let monto = props.monto_carrito;

        Callback::from(move |_: MouseEvent| {
            let ticket = match coordinator.borrow().iniciar(monto) {
                Ok(ticket) => ticket,
                Err(CheckoutError::CarritoVacio) => {
                    if let Some(window) = web_sys::window() {
                        window
                            .alert_with_message("Agregue al menos un instrumento al carrito")
                            .ok();
                    }
                    return;
                }
                Err(e) => {
                    log::warn!("⚠️ Intento de checkout ignorado: {}", e);
                    return;
                }
            };
            estado.set(coordinator.borrow().estado());

            let coordinator = coordinator.clone();
            let estado = estado.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let resultado = ApiClient::new().create_preference_mp(&ticket.pedido).await;
                coordinator.borrow().completar(ticket.generation, resultado);
                estado.set(coordinator.borrow().estado());
            });
        })
    };

    html! {
        <div class="checkout-mp">
            {
                match &*estado {
                    CheckoutEstado::Idle => html! {
                        <button onclick={on_comprar.clone()}>{"COMPRAR con Mercado Pago"}</button>
                    },
                    CheckoutEstado::Requesting { .. } => html! {
                        <p>{"Creando preferencia de pago..."}</p>
                    },
                    CheckoutEstado::Failed { error } => html! {
                        <>
                            <p class="mensaje-error">{format!("No se pudo iniciar el pago: {}", error)}</p>
                            <button onclick={on_comprar.clone()}>{"Reintentar"}</button>
                        </>
                    },
                    CheckoutEstado::Ready { .. } => html! {
                        <div id="wallet_container"></div>
                    },
                }
            }
        </div>
    }
}
