// ============================================================================
// ESTADISTICAS - Pantalla de estadísticas (solo ADMIN)
// ============================================================================
// Los gráficos son colaboradores externos; acá solo la pantalla contenedora.

use yew::prelude::*;

#[function_component(Estadisticas)]
pub fn estadisticas() -> Html {
    html! {
        <div>
            <h1>{"Estadísticas"}</h1>
            <div class="grilla-instrumentos">
                <div class="instrumento-card">
                    <h2>{"Cantidad de instrumentos vendidos"}</h2>
                    <div id="chart_pie"></div>
                </div>
                <div class="instrumento-card">
                    <h2>{"Pedidos agrupados por año"}</h2>
                    <div id="chart_bars"></div>
                </div>
            </div>
        </div>
    }
}
