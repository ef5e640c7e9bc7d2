//! NIC Endpoints

use super::get_json;
use crate::error::ApiResult;
use crate::models::Nic;

/// NICs owned by a compute node
pub async fn list_server_nics(server_uuid: &str) -> ApiResult<Vec<Nic>> {
    get_json(
        &["nics"],
        &[("belongs_to_type", "server"), ("belongs_to_uuid", server_uuid)],
    )
    .await
}
