//! Link Aggregation Endpoints

use reqwest::Method;
use serde::Serialize;

use super::{get_json, send_ignore, send_json};
use crate::error::ApiResult;
use crate::models::LinkAggregation;

#[derive(Debug, Clone, Serialize)]
pub struct LinkAggrArgs {
    pub name: String,
    pub macs: Vec<String>,
    pub belongs_to_uuid: String,
}

pub async fn list_link_aggrs(server_uuid: &str) -> ApiResult<Vec<LinkAggregation>> {
    get_json(&["linkaggrs"], &[("belongs_to_uuid", server_uuid)]).await
}

pub async fn create_link_aggr(args: &LinkAggrArgs) -> ApiResult<LinkAggregation> {
    send_json(Method::POST, &["linkaggrs"], args).await
}

pub async fn update_link_aggr(id: &str, args: &LinkAggrArgs) -> ApiResult<LinkAggregation> {
    send_json(Method::PUT, &["linkaggrs", id], args).await
}

pub async fn delete_link_aggr(id: &str) -> ApiResult<()> {
    send_ignore::<()>(Method::DELETE, &["linkaggrs", id], None).await
}
