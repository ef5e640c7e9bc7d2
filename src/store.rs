//! Server Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{LinkAggregation, Nic, Platform, Server};
use crate::sysinfo::merge_nic_sysinfo;

/// Everything the server detail page renders, as last fetched
#[derive(Clone, Debug, Default, Store)]
pub struct ServerPageState {
    /// Server being shown
    pub server: Option<Server>,
    /// Its NICs, enriched from sysinfo once both are loaded
    pub nics: Vec<Nic>,
    /// Its link aggregations
    pub link_aggrs: Vec<LinkAggregation>,
    /// Boot platforms offered by the platform form
    pub platforms: Vec<Platform>,
}

/// Type alias for the store
pub type ServerStore = Store<ServerPageState>;

/// Get the server page store from context
pub fn use_server_store() -> ServerStore {
    expect_context::<ServerStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the server and re-merge sysinfo into the NICs already loaded
pub fn store_set_server(store: &ServerStore, server: Server) {
    merge_nic_sysinfo(&mut store.nics().write(), &server.sysinfo);
    *store.server().write() = Some(server);
}

/// Replace the NICs, merging the loaded server's sysinfo into them
pub fn store_set_nics(store: &ServerStore, mut nics: Vec<Nic>) {
    let sysinfo = store
        .server()
        .with_untracked(|server| server.as_ref().map(|s| s.sysinfo.clone()));
    if let Some(sysinfo) = sysinfo {
        merge_nic_sysinfo(&mut nics, &sysinfo);
    }
    *store.nics().write() = nics;
}

pub fn store_set_link_aggrs(store: &ServerStore, link_aggrs: Vec<LinkAggregation>) {
    *store.link_aggrs().write() = link_aggrs;
}

pub fn store_set_platforms(store: &ServerStore, platforms: Vec<Platform>) {
    *store.platforms().write() = platforms;
}
