//! Service description served at the root path.

use crate::model::{ServiceMeta, SERVICE_META};
use axum::Json;

pub async fn service_meta() -> Json<ServiceMeta> {
    Json(SERVICE_META)
}
