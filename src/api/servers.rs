//! Server Endpoints

use std::collections::BTreeMap;

use reqwest::Method;
use serde::Serialize;
use serde_json::{Map, Value};

use super::{get_json, send_ignore, send_json};
use crate::error::ApiResult;
use crate::models::{platforms_from_map, Job, Platform, PlatformInfo, Server};

/// Partial update; only set fields are sent
#[derive(Debug, Clone, Default, Serialize)]
pub struct ServerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rack_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boot_platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traits: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NicTagsUpdate {
    pub mac: String,
    pub nic_tags_provided: Vec<String>,
}

#[derive(Serialize)]
struct UpdateNicsArgs<'a> {
    action: &'static str,
    nics: &'a [NicTagsUpdate],
}

#[derive(Serialize)]
struct SetupArgs<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    hostname: Option<&'a str>,
}

pub async fn list_servers() -> ApiResult<Vec<Server>> {
    get_json(&["servers"], &[]).await
}

pub async fn get_server(uuid: &str) -> ApiResult<Server> {
    get_json(&["servers", uuid], &[]).await
}

pub async fn update_server(uuid: &str, update: &ServerUpdate) -> ApiResult<()> {
    send_ignore(Method::POST, &["servers", uuid], Some(update)).await
}

pub async fn reboot_server(uuid: &str) -> ApiResult<Job> {
    send_json(Method::POST, &["servers", uuid, "reboot"], &Map::new()).await
}

pub async fn factory_reset_server(uuid: &str) -> ApiResult<Job> {
    send_json(Method::POST, &["servers", uuid, "factory-reset"], &Map::new()).await
}

pub async fn setup_server(uuid: &str, hostname: Option<&str>) -> ApiResult<Job> {
    send_json(Method::POST, &["servers", uuid, "setup"], &SetupArgs { hostname }).await
}

/// Remove the server record from the datacenter
pub async fn forget_server(uuid: &str) -> ApiResult<()> {
    send_ignore::<()>(Method::DELETE, &["servers", uuid], None).await
}

pub async fn update_server_nics(uuid: &str, nics: &[NicTagsUpdate]) -> ApiResult<()> {
    send_ignore(
        Method::PUT,
        &["servers", uuid, "nics"],
        Some(&UpdateNicsArgs { action: "update", nics }),
    )
    .await
}

/// Available boot platforms, newest first
pub async fn list_platforms() -> ApiResult<Vec<Platform>> {
    let map: BTreeMap<String, PlatformInfo> = get_json(&["platforms"], &[]).await?;
    Ok(platforms_from_map(map))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_server_update_sends_only_changed_fields() {
        let update = ServerUpdate {
            reservation_ratio: Some(0.5),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&update).unwrap(), json!({ "reservation_ratio": 0.5 }));

        let update = ServerUpdate {
            reserved: Some(true),
            rack_identifier: Some("RACK-7".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({ "rack_identifier": "RACK-7", "reserved": true })
        );
    }

    #[test]
    fn test_update_nics_body() {
        let nics = vec![NicTagsUpdate {
            mac: "00:00:00:00:00:01".to_string(),
            nic_tags_provided: vec!["admin".to_string(), "external".to_string()],
        }];
        let body = UpdateNicsArgs { action: "update", nics: &nics };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "action": "update",
                "nics": [{ "mac": "00:00:00:00:00:01", "nic_tags_provided": ["admin", "external"] }]
            })
        );
    }

    #[test]
    fn test_setup_body_omits_blank_hostname() {
        assert_eq!(serde_json::to_value(SetupArgs { hostname: None }).unwrap(), json!({}));
        assert_eq!(
            serde_json::to_value(SetupArgs { hostname: Some("cn7") }).unwrap(),
            json!({ "hostname": "cn7" })
        );
    }
}
