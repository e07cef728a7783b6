use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use crate::domain::Product;
use crate::error::ApiError;
use crate::handlers::AppState;
use crate::middleware::{ApiResponse, ApiResult};

#[derive(Debug, Deserialize)]
pub struct ConsumerPriceQuery {
    /// Comma-separated product ids, e.g. `list=1,2,3`
    pub list: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ConsumerPriceResponse {
    pub products: Vec<Product>,
    pub total_price: f64,
}

/// GET /products/consumer_price?list=1,2,3 - price a selection of products.
///
/// The selection must reference known, published ids without repeats. The
/// summed price gets a surcharge by selection size and is truncated toward
/// zero at the cent.
pub async fn consumer_price(
    State(state): State<AppState>,
    Query(query): Query<ConsumerPriceQuery>,
) -> ApiResult<ConsumerPriceResponse> {
    let list = match query.list.as_deref() {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Err(ApiError::bad_request("a list of product ids is required")),
    };

    let mut selection: Vec<Product> = Vec::new();
    for token in list.split(',') {
        let id: i64 = token
            .trim()
            .parse()
            .map_err(|_| ApiError::bad_request("the id list contains a non-numeric value"))?;

        let product = state
            .service
            .get_by_id(id)
            .await
            .map_err(|_| ApiError::not_found("not every id matches a product"))?;

        if selection.iter().any(|p| p.id == product.id) {
            return Err(ApiError::bad_request("the id list contains repeated ids"));
        }
        if !product.is_published {
            return Err(ApiError::bad_request(format!(
                "product {} is not published",
                product.id
            )));
        }
        selection.push(product);
    }

    // Unreachable while repeats are rejected above; kept as a guard against
    // a selection somehow outgrowing the catalog.
    let catalog_size = state.service.get_all().await?.len();
    if selection.len() > catalog_size {
        return Err(ApiError::bad_request(
            "the selection is larger than the catalog",
        ));
    }

    let subtotal: f64 = selection.iter().map(|p| p.price).sum();
    let total_price = truncate_cents(apply_surcharge(subtotal, selection.len()));

    Ok(ApiResponse::success(ConsumerPriceResponse {
        products: selection,
        total_price,
    }))
}

/// Tiered surcharge by selection size. Counts of exactly 10 and 20 fall
/// through to the default tier - inherited boundary behavior, kept as-is.
fn apply_surcharge(total: f64, count: usize) -> f64 {
    match count {
        c if c < 10 => total * 1.21,
        c if c > 10 && c < 20 => total * 1.17,
        _ => total * 1.15,
    }
}

/// Truncation toward zero at the cent, not standard rounding.
fn truncate_cents(value: f64) -> f64 {
    (value * 100.0).trunc() / 100.0
}
