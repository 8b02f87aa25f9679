//! Table Endpoints

use smart_menu_core::domain::{CreateTableRequest, Table};

use super::{delete, get, post, segment, ApiError};

pub async fn list_tables() -> Result<Vec<Table>, ApiError> {
    get("/tables").await
}

pub async fn create_table(request: &CreateTableRequest) -> Result<Table, ApiError> {
    post("/tables", request).await
}

pub async fn delete_table(id: &str) -> Result<(), ApiError> {
    delete(&format!("/tables/{}", segment(id))).await
}
