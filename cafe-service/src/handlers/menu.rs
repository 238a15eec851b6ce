use axum::Json;

use crate::models::Menu;
use crate::services::menu;

pub async fn get_menu() -> Json<&'static Menu> {
    Json(menu())
}
