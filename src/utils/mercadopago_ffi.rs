// ============================================================================
// MERCADO PAGO FFI - Foreign Function Interface para JavaScript
// ============================================================================
// Solo wrappers para el SDK JS - Sin estado, sin lógica
// Los wrappers globales están definidos en index.html
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = initMercadoPago)]
    pub fn init_mercado_pago(public_key: &str, locale: &str);

    #[wasm_bindgen(js_name = renderWalletBrick)]
    pub fn render_wallet_brick(container_id: &str, preference_id: &str);
}

/// Helper: desmontar el brick del wallet si está montado
pub fn desmontar_wallet() {
    if let Some(window) = web_sys::window() {
        let function = js_sys::Function::new_no_args(
            "if (window.unmountWalletBrick) window.unmountWalletBrick();",
        );
        let _ = function.call0(&window.into());
    }
}
