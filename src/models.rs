//! Frontend Models
//!
//! Data structures matching the JSON returned by the admin API.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Annotation attached to any entity by its UUID
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub uuid: String,
    pub item_uuid: String,
    #[serde(default)]
    pub owner_uuid: Option<String>,
    pub note: String,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default, deserialize_with = "deserialize_archived")]
    pub archived: bool,
}

/// The notes backend stores `archived` loosely: a bool, "true"/"false",
/// or the archive timestamp.
fn deserialize_archived<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => b,
        Some(Value::String(s)) => !(s.is_empty() || s.eq_ignore_ascii_case("false")),
        Some(Value::Number(n)) => n.as_f64().map(|n| n != 0.0).unwrap_or(false),
        Some(_) => true,
    })
}

/// Compute node as returned by `/_/servers/{uuid}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Server {
    pub uuid: String,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default = "default_true")]
    pub setup: bool,
    #[serde(default)]
    pub reserved: bool,
    #[serde(default)]
    pub headnode: bool,
    #[serde(default)]
    pub sysinfo: Map<String, Value>,
    #[serde(default)]
    pub traits: Map<String, Value>,
    #[serde(default)]
    pub rack_identifier: Option<String>,
    #[serde(default)]
    pub boot_platform: Option<String>,
    #[serde(default)]
    pub current_platform: Option<String>,
    #[serde(default)]
    pub reservation_ratio: Option<f64>,
}

fn default_true() -> bool {
    true
}

impl Server {
    /// Hostname when known, UUID otherwise
    pub fn display_name(&self) -> String {
        self.hostname
            .clone()
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| self.uuid.clone())
    }
}

/// Named bond of NIC MAC addresses on a server
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkAggregation {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub macs: Vec<String>,
    #[serde(default)]
    pub belongs_to_uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lacp_mode: Option<String>,
}

/// Network interface record; `interface` and `link_status` are filled in
/// client-side from the owning server's sysinfo.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Nic {
    pub mac: String,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub netmask: Option<String>,
    #[serde(default)]
    pub vlan_id: Option<u32>,
    #[serde(default)]
    pub nic_tag: Option<String>,
    #[serde(default)]
    pub nic_tags_provided: Vec<String>,
    #[serde(default)]
    pub belongs_to_type: Option<String>,
    #[serde(default)]
    pub belongs_to_uuid: Option<String>,
    #[serde(default, skip_serializing)]
    pub interface: Option<String>,
    #[serde(default, skip_serializing)]
    pub link_status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub os: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

/// Handle for a backend workflow job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub job_uuid: String,
}

/// Entry of the `/_/platforms` map
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformInfo {
    #[serde(default)]
    pub latest: bool,
}

/// Platform version plus whether it is the newest one available
#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    pub version: String,
    pub latest: bool,
}

/// Flatten the platforms map, newest version first
pub fn platforms_from_map(map: BTreeMap<String, PlatformInfo>) -> Vec<Platform> {
    map.into_iter()
        .rev()
        .map(|(version, info)| Platform { version, latest: info.latest })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use serde_json::json;

    fn note_with(archived: Value) -> Note {
        serde_json::from_value(json!({
            "uuid": "n1",
            "item_uuid": "s1",
            "note": "hello",
            "archived": archived,
        }))
        .unwrap()
    }

    #[test]
    fn test_note_archived_variants() {
        assert!(note_with(json!(true)).archived);
        assert!(!note_with(json!(false)).archived);
        assert!(!note_with(json!("false")).archived);
        assert!(note_with(json!("2014-02-03T10:00:00.000Z")).archived);
        assert!(!note_with(Value::Null).archived);
    }

    #[test]
    fn test_note_missing_archived() {
        let note: Note = serde_json::from_value(json!({
            "uuid": "n1",
            "item_uuid": "s1",
            "note": "hello",
        }))
        .unwrap();
        assert!(!note.archived);
        assert_eq!(note.owner_uuid, None);
    }

    #[test]
    fn test_server_defaults() {
        let server: Server = serde_json::from_value(json!({ "uuid": "abc" })).unwrap();
        assert!(server.setup);
        assert!(!server.reserved);
        assert!(server.sysinfo.is_empty());
        assert_eq!(server.display_name(), "abc");
    }

    #[test]
    fn test_nic_enrichment_not_serialized() {
        let mut nic: Nic = serde_json::from_value(json!({ "mac": "00:00:00:00:00:01" })).unwrap();
        nic.interface = Some("ixgbe0".to_string());
        let out = serde_json::to_value(&nic).unwrap();
        assert!(out.get("interface").is_none());
    }

    #[test]
    fn test_edited_link_aggr_is_a_new_row_key() {
        let before: LinkAggregation = serde_json::from_value(json!({
            "id": "L1",
            "name": "aggr0",
            "macs": ["00:00:00:00:00:01", "00:00:00:00:00:02"]
        }))
        .unwrap();
        let mut after = before.clone();
        after.name = "aggr1".to_string();

        let keys: HashSet<LinkAggregation> = [before, after].into_iter().collect();
        assert_eq!(keys.len(), 2);
    }

    #[test]
    fn test_nic_row_key_tracks_enrichment() {
        let plain: Nic = serde_json::from_value(json!({ "mac": "00:00:00:00:00:01" })).unwrap();
        let mut retagged = plain.clone();
        retagged.nic_tag = Some("external".to_string());
        let mut linked = plain.clone();
        linked.link_status = Some("up".to_string());

        let keys: HashSet<Nic> = [plain, retagged, linked].into_iter().collect();
        assert_eq!(keys.len(), 3);
    }

    #[test]
    fn test_platforms_newest_first() {
        let mut map = BTreeMap::new();
        map.insert("20140101T000000Z".to_string(), PlatformInfo { latest: false });
        map.insert("20150101T000000Z".to_string(), PlatformInfo { latest: true });
        let platforms = platforms_from_map(map);
        assert_eq!(platforms[0].version, "20150101T000000Z");
        assert!(platforms[0].latest);
    }
}
