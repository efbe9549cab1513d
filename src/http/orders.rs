//! Order routes.
//!
//! Same shape as the user routes, under `/orders`, plus
//! `GET /users/{user_id}/orders`. Creating an order asks a
//! [`RecordLookup<User>`] whether the referenced user exists.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use tracing::{debug, instrument};

use super::{decode, with_service_layers};
use crate::framework::{Record, RecordLookup, RecordStore};
use crate::model::{Order, User};
use crate::order_service::{OrderError, SERVICE_NAME};

/// Shared state for the order routes.
#[derive(Clone)]
pub struct OrderState {
    pub orders: RecordStore<Order>,
    pub users: Arc<dyn RecordLookup<User>>,
}

impl OrderState {
    pub fn new(orders: RecordStore<Order>, users: Arc<dyn RecordLookup<User>>) -> Self {
        Self { orders, users }
    }
}

/// Build the order service `Router`.
pub fn router(state: OrderState) -> Router {
    let routes = Router::new()
        .route("/orders", get(list_orders).post(create_order))
        .route(
            "/orders/{id}",
            get(get_order).put(update_order).delete(delete_order),
        )
        .route("/users/{user_id}/orders", get(list_user_orders))
        .with_state(state);
    with_service_layers(routes, SERVICE_NAME)
}

/// Decode, check required fields, then confirm the user exists before storing.
#[instrument(skip_all)]
async fn create_order(
    State(state): State<OrderState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Order>), OrderError> {
    let order: Order = decode(&body).map_err(OrderError::InvalidBody)?;
    order.validate()?;

    debug!(user_id = %order.user_id, "Validating user");
    if !state.users.exists(&order.user_id).await? {
        return Err(OrderError::UserNotFound(order.user_id));
    }

    state.orders.create(order.clone());
    Ok((StatusCode::CREATED, Json(order)))
}

#[instrument(skip_all)]
async fn list_orders(State(state): State<OrderState>) -> Json<Vec<Order>> {
    Json(state.orders.get_all())
}

#[instrument(skip(state))]
async fn list_user_orders(
    State(state): State<OrderState>,
    Path(user_id): Path<String>,
) -> Json<Vec<Order>> {
    let orders = state
        .orders
        .get_all()
        .into_iter()
        .filter(|order| order.user_id == user_id)
        .collect();
    Json(orders)
}

#[instrument(skip(state))]
async fn get_order(
    State(state): State<OrderState>,
    Path(id): Path<String>,
) -> Result<Json<Order>, OrderError> {
    state
        .orders
        .get(&id)
        .map(Json)
        .ok_or_else(|| OrderError::NotFound(id))
}

// The referenced user is not checked again on update.
#[instrument(skip(state, body))]
async fn update_order(
    State(state): State<OrderState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Order>, OrderError> {
    let mut order: Order = decode(&body).map_err(OrderError::InvalidBody)?;
    order.set_id(id);
    if !state.orders.update(order.clone()) {
        return Err(OrderError::NotFound(order.id));
    }
    Ok(Json(order))
}

#[instrument(skip(state))]
async fn delete_order(
    State(state): State<OrderState>,
    Path(id): Path<String>,
) -> Result<StatusCode, OrderError> {
    if state.orders.delete(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(OrderError::NotFound(id))
    }
}
