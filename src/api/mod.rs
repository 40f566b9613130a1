use actix_web::web;

// ============================================================================
// HTTP API - Routes & Wiring
// ============================================================================

pub mod handlers;
pub mod responses;

pub use responses::ApiError;

/// Mount every route plus the JSON extractor config. The `PedidoStore`
/// must already be registered as app data by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(responses::json_config())
        .service(
            web::scope("/api")
                .route("/pedidos", web::get().to(handlers::listar_pedidos))
                .route("/pedidos", web::post().to(handlers::crear_pedido))
                .route("/pedidos/{id}", web::get().to(handlers::obtener_pedido))
                .route("/pedidos/{id}", web::put().to(handlers::actualizar_pedido))
                .route("/pedidos/{id}", web::delete().to(handlers::eliminar_pedido))
                .route(
                    "/pedidos/{id}/toggle-pago",
                    web::post().to(handlers::toggle_pago),
                )
                .route("/estadisticas", web::get().to(handlers::estadisticas))
                .route("/sabores", web::get().to(handlers::sabores)),
        )
        .route("/health", web::get().to(handlers::health));
}
