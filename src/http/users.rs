//! User routes.
//!
//! | Method | Path | Success |
//! |--------|------|---------|
//! | `POST` | `/users` | 201 user |
//! | `GET` | `/users` | 200 `[user]` |
//! | `GET` | `/users/{id}` | 200 user |
//! | `PUT` | `/users/{id}` | 200 user |
//! | `DELETE` | `/users/{id}` | 204 |

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use tracing::instrument;

use super::{decode, with_service_layers};
use crate::framework::{Record, RecordStore};
use crate::model::User;
use crate::user_service::{UserError, SERVICE_NAME};

/// Build the user service `Router` over the given store.
pub fn router(store: RecordStore<User>) -> Router {
    let routes = Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .with_state(store);
    with_service_layers(routes, SERVICE_NAME)
}

#[instrument(skip_all)]
async fn create_user(
    State(store): State<RecordStore<User>>,
    body: Bytes,
) -> Result<(StatusCode, Json<User>), UserError> {
    let user: User = decode(&body).map_err(UserError::InvalidBody)?;
    user.validate()?;
    store.create(user.clone());
    Ok((StatusCode::CREATED, Json(user)))
}

#[instrument(skip_all)]
async fn list_users(State(store): State<RecordStore<User>>) -> Json<Vec<User>> {
    Json(store.get_all())
}

#[instrument(skip(store))]
async fn get_user(
    State(store): State<RecordStore<User>>,
    Path(id): Path<String>,
) -> Result<Json<User>, UserError> {
    store.get(&id).map(Json).ok_or_else(|| UserError::NotFound(id))
}

#[instrument(skip(store, body))]
async fn update_user(
    State(store): State<RecordStore<User>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<User>, UserError> {
    let mut user: User = decode(&body).map_err(UserError::InvalidBody)?;
    user.set_id(id);
    if !store.update(user.clone()) {
        return Err(UserError::NotFound(user.id));
    }
    Ok(Json(user))
}

#[instrument(skip(store))]
async fn delete_user(
    State(store): State<RecordStore<User>>,
    Path(id): Path<String>,
) -> Result<StatusCode, UserError> {
    if store.delete(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(UserError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::test_support::{body_bytes, body_json, send};
    use serde_json::json;

    fn app() -> (RecordStore<User>, Router) {
        let store = RecordStore::new();
        (store.clone(), router(store))
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let (_, app) = app();
        let body = r#"{"id":"1","name":"A","email":"a@x.com"}"#;

        let response = send(&app, "POST", "/users", Some(body)).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            body_json(response).await,
            json!({ "id": "1", "name": "A", "email": "a@x.com" })
        );

        let response = send(&app, "GET", "/users/1", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "id": "1", "name": "A", "email": "a@x.com" })
        );
    }

    #[tokio::test]
    async fn test_create_missing_field_is_rejected() {
        let (store, app) = app();

        let response = send(&app, "POST", "/users", Some(r#"{"id":"1","name":"A"}"#)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "ID, Name, and Email are required" })
        );
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_create_malformed_body_is_rejected() {
        let (store, app) = app();

        for body in [None, Some("{"), Some(r#"{"id":1}"#)] {
            let response = send(&app, "POST", "/users", body).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let error = body_json(response).await["error"].as_str().unwrap().to_owned();
            assert!(!error.is_empty());
        }
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_create_is_upsert() {
        let (store, app) = app();
        store.create(User::new("1", "A", "a@x.com"));

        let response = send(&app, "POST", "/users", Some(r#"{"id":"1","name":"B","email":"b@x.com"}"#)).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(store.get("1"), Some(User::new("1", "B", "b@x.com")));
    }

    #[tokio::test]
    async fn test_list_users_empty_is_array() {
        let (_, app) = app();
        let response = send(&app, "GET", "/users", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_get_missing_user() {
        let (_, app) = app();
        let response = send(&app, "GET", "/users/42", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({ "error": "User not found" }));
    }

    #[tokio::test]
    async fn test_update_uses_path_id_and_replaces_fields() {
        let (store, app) = app();
        store.create(User::new("1", "A", "a@x.com"));

        let response = send(&app, "PUT", "/users/1", Some(r#"{"id":"other","name":"B"}"#)).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "id": "1", "name": "B", "email": "" })
        );
        assert_eq!(store.get("1"), Some(User::new("1", "B", "")));
        assert_eq!(store.get("other"), None);
    }

    #[tokio::test]
    async fn test_update_missing_user_does_not_insert() {
        let (store, app) = app();

        let response = send(&app, "PUT", "/users/9", Some(r#"{"name":"Ghost"}"#)).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_update_malformed_body() {
        let (store, app) = app();
        store.create(User::new("1", "A", "a@x.com"));

        let response = send(&app, "PUT", "/users/1", Some("not json")).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(store.get("1"), Some(User::new("1", "A", "a@x.com")));
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let (store, app) = app();
        store.create(User::new("1", "A", "a@x.com"));

        let response = send(&app, "DELETE", "/users/1", None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(body_bytes(response).await.is_empty());

        let response = send(&app, "DELETE", "/users/1", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_wrong_method_is_405() {
        let (_, app) = app();
        let response = send(&app, "PATCH", "/users/1", None).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
