//! Sysinfo Helpers
//!
//! Extract the fields the server page shows from the backend's sysinfo blob
//! and merge interface details into NIC records.

use serde_json::{Map, Value};

use crate::models::Nic;

#[derive(Debug, Clone, PartialEq)]
pub struct DiskInfo {
    pub name: String,
    pub size_gb: Option<String>,
}

/// Hardware/OS summary for the server page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerSummary {
    pub platform_version: Option<String>,
    pub cpu_type: Option<String>,
    pub cpu_physical_cores: Option<String>,
    pub cpu_total_cores: Option<String>,
    pub serial_number: Option<String>,
    pub total_memory_mib: Option<String>,
    pub disks: Vec<DiskInfo>,
}

impl ServerSummary {
    pub fn from_sysinfo(sysinfo: &Map<String, Value>) -> Self {
        let field = |key: &str| sysinfo.get(key).and_then(value_text);

        let disks = sysinfo
            .get("Disks")
            .and_then(Value::as_object)
            .map(|disks| {
                disks
                    .iter()
                    .map(|(name, info)| DiskInfo {
                        name: name.clone(),
                        size_gb: info.get("Size in GB").and_then(value_text),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            platform_version: field("Live Image"),
            cpu_type: field("CPU Type"),
            cpu_physical_cores: field("CPU Physical Cores"),
            cpu_total_cores: field("CPU Total Cores"),
            serial_number: field("Serial Number"),
            total_memory_mib: field("MiB of Memory"),
            disks,
        }
    }
}

/// Scalar JSON rendered for display; structured values as compact JSON
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// Traits object as (name, value) rows
pub fn trait_pairs(traits: &Map<String, Value>) -> Vec<(String, String)> {
    traits
        .iter()
        .map(|(k, v)| (k.clone(), value_text(v).unwrap_or_default()))
        .collect()
}

/// Copy interface name and link status from sysinfo's
/// `Network Interfaces` onto NICs with a matching MAC.
pub fn merge_nic_sysinfo(nics: &mut [Nic], sysinfo: &Map<String, Value>) {
    let Some(interfaces) = sysinfo.get("Network Interfaces").and_then(Value::as_object) else {
        return;
    };

    for nic in nics.iter_mut() {
        let found = interfaces.iter().find(|(_, info)| {
            info.get("MAC Address")
                .and_then(Value::as_str)
                .map(|mac| mac.eq_ignore_ascii_case(&nic.mac))
                .unwrap_or(false)
        });
        if let Some((name, info)) = found {
            nic.interface = Some(name.clone());
            nic.link_status = info.get("Link Status").and_then(value_text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sysinfo() -> Map<String, Value> {
        json!({
            "Live Image": "20140501T000000Z",
            "CPU Type": "Intel(R) Xeon(R) CPU E5-2670",
            "CPU Physical Cores": 2,
            "CPU Total Cores": 32,
            "Serial Number": "SN-1234",
            "MiB of Memory": "262110",
            "Disks": {
                "c0t0d0": { "Size in GB": 600 },
                "c0t1d0": { "Size in GB": 600 }
            },
            "Network Interfaces": {
                "ixgbe0": { "MAC Address": "90:B8:D0:2A:3C:01", "Link Status": "up" },
                "ixgbe1": { "MAC Address": "90:b8:d0:2a:3c:02", "Link Status": "down" }
            }
        })
        .as_object()
        .cloned()
        .unwrap()
    }

    fn make_nic(mac: &str) -> Nic {
        Nic {
            mac: mac.to_string(),
            ip: None,
            netmask: None,
            vlan_id: None,
            nic_tag: None,
            nic_tags_provided: Vec::new(),
            belongs_to_type: Some("server".to_string()),
            belongs_to_uuid: Some("s1".to_string()),
            interface: None,
            link_status: None,
        }
    }

    #[test]
    fn test_summary_fields() {
        let summary = ServerSummary::from_sysinfo(&sysinfo());
        assert_eq!(summary.platform_version.as_deref(), Some("20140501T000000Z"));
        assert_eq!(summary.cpu_physical_cores.as_deref(), Some("2"));
        assert_eq!(summary.cpu_total_cores.as_deref(), Some("32"));
        assert_eq!(summary.total_memory_mib.as_deref(), Some("262110"));
        assert_eq!(summary.disks.len(), 2);
        assert_eq!(summary.disks[0].name, "c0t0d0");
        assert_eq!(summary.disks[0].size_gb.as_deref(), Some("600"));
    }

    #[test]
    fn test_summary_of_empty_sysinfo() {
        let summary = ServerSummary::from_sysinfo(&Map::new());
        assert_eq!(summary, ServerSummary::default());
    }

    #[test]
    fn test_trait_pairs() {
        let traits = json!({ "ssd": true, "customer": "acme" }).as_object().cloned().unwrap();
        let pairs = trait_pairs(&traits);
        assert_eq!(pairs, vec![
            ("customer".to_string(), "acme".to_string()),
            ("ssd".to_string(), "true".to_string()),
        ]);
    }

    #[test]
    fn test_merge_nic_sysinfo_by_mac() {
        let mut nics = vec![
            make_nic("90:b8:d0:2a:3c:01"),
            make_nic("90:b8:d0:2a:3c:02"),
            make_nic("90:b8:d0:2a:3c:ff"),
        ];
        merge_nic_sysinfo(&mut nics, &sysinfo());

        assert_eq!(nics[0].interface.as_deref(), Some("ixgbe0"));
        assert_eq!(nics[0].link_status.as_deref(), Some("up"));
        assert_eq!(nics[1].link_status.as_deref(), Some("down"));
        assert_eq!(nics[2].interface, None);
    }
}
