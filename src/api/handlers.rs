use actix_web::{web, HttpResponse};
use serde_json::json;

use super::responses::ApiError;
use crate::domain::pedido::{Estadisticas, PedidoDraft, PedidoStore, SABORES_VALIDOS};

// ============================================================================
// Request Handlers
// ============================================================================

pub async fn listar_pedidos(store: web::Data<PedidoStore>) -> Result<HttpResponse, ApiError> {
    let pedidos = store.list().await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "pedidos": pedidos })))
}

pub async fn crear_pedido(
    store: web::Data<PedidoStore>,
    draft: web::Json<PedidoDraft>,
) -> Result<HttpResponse, ApiError> {
    let pedido_id = store.create(&draft).await?;
    tracing::info!(pedido_id, "Pedido created");
    Ok(HttpResponse::Ok().json(json!({ "success": true, "pedido_id": pedido_id })))
}

pub async fn obtener_pedido(
    store: web::Data<PedidoStore>,
    id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let pedido = store.get(*id).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "pedido": pedido })))
}

pub async fn actualizar_pedido(
    store: web::Data<PedidoStore>,
    id: web::Path<i64>,
    draft: web::Json<PedidoDraft>,
) -> Result<HttpResponse, ApiError> {
    store.update(*id, &draft).await?;
    tracing::info!(pedido_id = *id, "Pedido updated");
    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}

pub async fn eliminar_pedido(
    store: web::Data<PedidoStore>,
    id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    store.delete(*id).await?;
    tracing::info!(pedido_id = *id, "Pedido deleted");
    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}

pub async fn toggle_pago(
    store: web::Data<PedidoStore>,
    id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let nuevo_estado = store.toggle_pago(*id).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "nuevo_estado": nuevo_estado })))
}

pub async fn estadisticas(store: web::Data<PedidoStore>) -> Result<HttpResponse, ApiError> {
    let estadisticas = Estadisticas::recolectar(&store).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "estadisticas": estadisticas })))
}

pub async fn sabores() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "success": true, "sabores": SABORES_VALIDOS }))
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "cookies-pedidos",
    }))
}

// ============================================================================
// Handler Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use actix_web::{
        test::{call_service, init_service, read_body_json, TestRequest},
        web, App,
    };
    use serde_json::{json, Value};

    use crate::db;
    use crate::domain::pedido::PedidoStore;

    macro_rules! app {
        () => {{
            let store = PedidoStore::new(db::test_pool().await);
            init_service(
                App::new()
                    .app_data(web::Data::new(store))
                    .configure(crate::api::configure),
            )
            .await
        }};
    }

    fn pedido_body() -> Value {
        json!({
            "dia": "Lunes",
            "nombre": "Ana",
            "precio_pedido": 10.0,
            "precio_envio": 2.0,
            "items": [{"sabor": "Pistacho", "cantidad": 3}]
        })
    }

    #[actix_web::test]
    async fn test_sabores_returns_fixed_list() {
        let app = app!();

        let resp = call_service(&app, TestRequest::get().uri("/api/sabores").to_request()).await;
        assert!(resp.status().is_success());

        let body: Value = read_body_json(resp).await;
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["sabores"].as_array().unwrap().len(), 11);
        assert_eq!(body["sabores"][0], json!("Pistacho"));
    }

    #[actix_web::test]
    async fn test_create_then_get() {
        let app = app!();

        let resp = call_service(
            &app,
            TestRequest::post()
                .uri("/api/pedidos")
                .set_json(pedido_body())
                .to_request(),
        )
        .await;
        assert!(resp.status().is_success());
        let created: Value = read_body_json(resp).await;
        assert_eq!(created["success"], json!(true));
        let id = created["pedido_id"].as_i64().unwrap();

        let resp = call_service(
            &app,
            TestRequest::get()
                .uri(&format!("/api/pedidos/{id}"))
                .to_request(),
        )
        .await;
        assert!(resp.status().is_success());
        let body: Value = read_body_json(resp).await;
        assert_eq!(body["pedido"]["nombre"], json!("Ana"));
        assert_eq!(body["pedido"]["pago"], json!(false));
        assert_eq!(body["pedido"]["items"][0]["sabor"], json!("Pistacho"));
    }

    #[actix_web::test]
    async fn test_get_missing_is_404_with_envelope() {
        let app = app!();

        let resp = call_service(
            &app,
            TestRequest::get().uri("/api/pedidos/99").to_request(),
        )
        .await;

        assert_eq!(resp.status().as_u16(), 404);
        let body: Value = read_body_json(resp).await;
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"], json!("Pedido no encontrado"));
    }

    #[actix_web::test]
    async fn test_delete_missing_is_404() {
        let app = app!();

        let resp = call_service(
            &app,
            TestRequest::delete().uri("/api/pedidos/5").to_request(),
        )
        .await;

        assert_eq!(resp.status().as_u16(), 404);
    }

    #[actix_web::test]
    async fn test_toggle_pago_reports_new_state() {
        let app = app!();

        let resp = call_service(
            &app,
            TestRequest::post()
                .uri("/api/pedidos")
                .set_json(pedido_body())
                .to_request(),
        )
        .await;
        let created: Value = read_body_json(resp).await;
        let id = created["pedido_id"].as_i64().unwrap();

        let resp = call_service(
            &app,
            TestRequest::post()
                .uri(&format!("/api/pedidos/{id}/toggle-pago"))
                .to_request(),
        )
        .await;
        assert!(resp.status().is_success());
        let body: Value = read_body_json(resp).await;
        assert_eq!(body["nuevo_estado"], json!(true));
    }

    #[actix_web::test]
    async fn test_incomplete_payload_uses_error_envelope() {
        let app = app!();

        // Missing nombre and items.
        let resp = call_service(
            &app,
            TestRequest::post()
                .uri("/api/pedidos")
                .set_json(json!({"dia": "Lunes", "precio_pedido": 1.0}))
                .to_request(),
        )
        .await;

        assert_eq!(resp.status().as_u16(), 500);
        let body: Value = read_body_json(resp).await;
        assert_eq!(body["success"], json!(false));
        assert!(body["error"].as_str().unwrap().len() > 0);
    }

    #[actix_web::test]
    async fn test_estadisticas_on_empty_store() {
        let app = app!();

        let resp = call_service(
            &app,
            TestRequest::get().uri("/api/estadisticas").to_request(),
        )
        .await;
        assert!(resp.status().is_success());

        let body: Value = read_body_json(resp).await;
        let stats = &body["estadisticas"];
        assert_eq!(stats["total_pedidos"], json!(0));
        assert_eq!(stats["total_recaudado"], json!(0.0));
        assert_eq!(stats["produccion_total"], json!({}));
    }

    #[actix_web::test]
    async fn test_update_replaces_items() {
        let app = app!();

        let resp = call_service(
            &app,
            TestRequest::post()
                .uri("/api/pedidos")
                .set_json(pedido_body())
                .to_request(),
        )
        .await;
        let created: Value = read_body_json(resp).await;
        let id = created["pedido_id"].as_i64().unwrap();

        let mut body = pedido_body();
        body["items"] = json!([{"sabor": "Velvet", "cantidad": 1}]);
        body["pago"] = json!(true);
        let resp = call_service(
            &app,
            TestRequest::put()
                .uri(&format!("/api/pedidos/{id}"))
                .set_json(body)
                .to_request(),
        )
        .await;
        assert!(resp.status().is_success());

        let resp = call_service(
            &app,
            TestRequest::get()
                .uri(&format!("/api/pedidos/{id}"))
                .to_request(),
        )
        .await;
        let fetched: Value = read_body_json(resp).await;
        assert_eq!(fetched["pedido"]["items"].as_array().unwrap().len(), 1);
        assert_eq!(fetched["pedido"]["items"][0]["sabor"], json!("Velvet"));
        assert_eq!(fetched["pedido"]["pago"], json!(true));
    }

    #[actix_web::test]
    async fn test_health() {
        let app = app!();

        let resp = call_service(&app, TestRequest::get().uri("/health").to_request()).await;
        assert!(resp.status().is_success());
    }
}
