//! Server NIC Components
//!
//! NIC table for the server page and the modal that edits the NIC tags
//! each interface provides.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, NicTagsUpdate};
use crate::context::use_app_context;
use crate::models::Nic;
use crate::notify;
use crate::validate::parse_nic_tags;

/// Read-only NIC table
#[component]
pub fn ServerNics(#[prop(into)] nics: Signal<Vec<Nic>>) -> impl IntoView {
    view! {
        <table class="table server-nics">
            <thead>
                <tr>
                    <th>"Interface"</th>
                    <th>"MAC"</th>
                    <th>"IP"</th>
                    <th>"NIC Tag"</th>
                    <th>"VLAN"</th>
                    <th>"Link"</th>
                    <th>"NIC Tags Provided"</th>
                </tr>
            </thead>
            <tbody>
                {move || if nics.with(Vec::is_empty) {
                    view! { <tr><td colspan="7" class="empty">"No NICs found"</td></tr> }.into_any()
                } else {
                    view! {
                        <For
                            each=move || nics.get()
                            key=|nic| nic.clone()
                            children=move |nic| {
                                let link_class = match nic.link_status.as_deref() {
                                    Some("up") => "link-status up",
                                    Some(_) => "link-status down",
                                    None => "link-status",
                                };
                                view! {
                                    <tr>
                                        <td>{nic.interface.clone().unwrap_or_default()}</td>
                                        <td class="mac">{nic.mac.clone()}</td>
                                        <td>{nic.ip.clone().unwrap_or_default()}</td>
                                        <td>{nic.nic_tag.clone().unwrap_or_default()}</td>
                                        <td>{nic.vlan_id.map(|v| v.to_string()).unwrap_or_default()}</td>
                                        <td class=link_class>{nic.link_status.clone().unwrap_or_default()}</td>
                                        <td>{nic.nic_tags_provided.join(", ")}</td>
                                    </tr>
                                }
                            }
                        />
                    }.into_any()
                }}
            </tbody>
        </table>
    }
}

/// Modal for editing NIC tags provided, one comma separated field per NIC
#[component]
pub fn NicsEditor(
    #[prop(into)] server_uuid: String,
    nics: Vec<Nic>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let server_uuid = StoredValue::new(server_uuid);

    // One (mac, label, draft) row per NIC
    let rows: Vec<(String, String, RwSignal<String>)> = nics
        .iter()
        .map(|nic| {
            let label = match &nic.interface {
                Some(iface) => format!("{} ({})", iface, nic.mac),
                None => nic.mac.clone(),
            };
            (nic.mac.clone(), label, RwSignal::new(nic.nic_tags_provided.join(", ")))
        })
        .collect();
    let drafts = StoredValue::new(
        rows.iter().map(|(mac, _, draft)| (mac.clone(), *draft)).collect::<Vec<_>>(),
    );
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        if saving.get_untracked() {
            return;
        }
        let updates: Vec<NicTagsUpdate> = drafts.with_value(|drafts| {
            drafts
                .iter()
                .map(|(mac, draft)| NicTagsUpdate {
                    mac: mac.clone(),
                    nic_tags_provided: parse_nic_tags(&draft.get_untracked()),
                })
                .collect()
        });
        let uuid = server_uuid.get_value();
        set_saving.set(true);
        spawn_local(async move {
            let result = api::update_server_nics(&uuid, &updates).await;
            set_saving.set(false);
            match result {
                Ok(()) => {
                    log::info!("[NICS] updated {} NICs on {}", updates.len(), uuid);
                    on_close.run(());
                    ctx.reload();
                }
                Err(e) => notify::alert_error("NICS", &e),
            }
        });
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal nics-modal">
                <div class="modal-header">
                    <h3>"Manage NICs"</h3>
                    <button class="close-btn" on:click=move |_| on_close.run(())>"×"</button>
                </div>
                <div class="modal-body">
                    {rows.into_iter().map(|(_, label, draft)| view! {
                        <div class="form-row">
                            <label>{label}</label>
                            <input
                                type="text"
                                placeholder="admin, external"
                                prop:value=move || draft.get()
                                on:input=move |ev| draft.set(event_target_value(&ev))
                            />
                        </div>
                    }).collect_view()}
                </div>
                <div class="modal-footer">
                    <button class="btn" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button class="btn btn-primary" disabled=move || saving.get() on:click=on_save>
                        "Save NICs"
                    </button>
                </div>
            </div>
        </div>
    }
}
