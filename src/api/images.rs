//! Image Endpoints

use super::get_json;
use crate::error::ApiResult;
use crate::models::Image;

pub async fn list_images() -> ApiResult<Vec<Image>> {
    get_json(&["images"], &[]).await
}
