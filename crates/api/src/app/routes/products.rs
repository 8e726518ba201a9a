use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::Utc;

use catalog_core::{DomainError, ProductId};
use catalog_infra::StoreError;
use catalog_products::{Product, ProductDraft, ProductPatch};

use crate::app::services::{AppServices, SharedCatalog};
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/:id",
            get(get_product).patch(update_product).delete(delete_product),
        )
}

/// Run `op` against the catalog on the blocking pool; the store does synchronous
/// file I/O under its lock.
async fn with_catalog<T, F>(
    services: Arc<AppServices>,
    op: F,
) -> Result<T, axum::response::Response>
where
    T: Send + 'static,
    F: FnOnce(&SharedCatalog) -> Result<T, StoreError> + Send + 'static,
{
    match tokio::task::spawn_blocking(move || op(services.catalog())).await {
        Ok(result) => result.map_err(errors::store_error_to_response),
        Err(e) => Err(errors::task_error_to_response(e)),
    }
}

#[tracing::instrument(name = "products.create", skip_all)]
pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<ProductDraft>, JsonRejection>,
) -> axum::response::Response {
    let Json(draft) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::rejection_to_response(rejection),
    };

    let product = match Product::create(ProductId::new(), draft, Utc::now()) {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!(error = %e, "create rejected");
            return errors::domain_error_to_response(&e);
        }
    };

    match with_catalog(services, move |catalog| catalog.insert(product)).await {
        Ok(stored) => (StatusCode::CREATED, Json(stored)).into_response(),
        Err(resp) => resp,
    }
}

#[tracing::instrument(name = "products.list", skip_all)]
pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match with_catalog(services, |catalog| catalog.list()).await {
        Ok(products) => (StatusCode::OK, Json(products)).into_response(),
        Err(resp) => resp,
    }
}

#[tracing::instrument(name = "products.get", skip(services))]
pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_product_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let lookup = with_catalog(services, move |catalog| match catalog.get(id) {
        Ok(product) => Ok(Some(product)),
        Err(StoreError::Domain(DomainError::NotFound(_))) => Ok(None),
        Err(e) => Err(e),
    });

    match lookup.await {
        Ok(Some(product)) => (StatusCode::OK, Json(product)).into_response(),
        Ok(None) => {
            let e = DomainError::not_found(id);
            errors::json_error(StatusCode::NOT_FOUND, e.code(), e.to_string())
        }
        Err(resp) => resp,
    }
}

#[tracing::instrument(name = "products.update", skip(services, body))]
pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<ProductPatch>, JsonRejection>,
) -> axum::response::Response {
    let id = match errors::parse_product_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let Json(patch) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::rejection_to_response(rejection),
    };

    match with_catalog(services, move |catalog| catalog.update(id, patch)).await {
        Ok(updated) => (StatusCode::OK, Json(updated)).into_response(),
        Err(resp) => resp,
    }
}

#[tracing::instrument(name = "products.delete", skip(services))]
pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_product_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match with_catalog(services, move |catalog| catalog.remove(id)).await {
        Ok(removed) => (StatusCode::OK, Json(dto::DeleteProductResponse::new(removed))).into_response(),
        Err(resp) => resp,
    }
}
