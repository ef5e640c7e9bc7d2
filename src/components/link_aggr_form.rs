//! Link Aggregation Form Component
//!
//! Create or edit an aggregation from the server's NIC MAC addresses.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, LinkAggrArgs};
use crate::models::{LinkAggregation, Nic};
use crate::notify;
use crate::validate::validate_link_aggr;

/// What the form is doing
#[derive(Debug, Clone, PartialEq)]
pub enum LinkAggrFormMode {
    Create,
    Edit(LinkAggregation),
}

#[component]
pub fn LinkAggrForm(
    mode: LinkAggrFormMode,
    #[prop(into)] server_uuid: String,
    #[prop(into)] nics: Signal<Vec<Nic>>,
    /// Called after a successful save
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let (initial_name, initial_macs, editing_id) = match &mode {
        LinkAggrFormMode::Create => (String::new(), Vec::new(), None),
        LinkAggrFormMode::Edit(link) => (link.name.clone(), link.macs.clone(), Some(link.id.clone())),
    };
    let title = if editing_id.is_some() { "Edit Aggregated Link" } else { "New Aggregated Link" };
    let server_uuid = StoredValue::new(server_uuid);
    let editing_id = StoredValue::new(editing_id);

    let (name, set_name) = signal(initial_name);
    let (selected, set_selected) = signal(initial_macs);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let toggle_mac = move |mac: String, checked: bool| {
        set_selected.update(|macs| {
            if checked {
                if !macs.contains(&mac) {
                    macs.push(mac);
                }
            } else {
                macs.retain(|m| *m != mac);
            }
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let name = name.get().trim().to_string();
        let macs = selected.get();
        if let Err(e) = validate_link_aggr(&name, &macs) {
            set_error.set(Some(e.to_string()));
            return;
        }
        set_error.set(None);
        set_saving.set(true);

        let args = LinkAggrArgs {
            name,
            macs,
            belongs_to_uuid: server_uuid.get_value(),
        };
        let id = editing_id.get_value();
        spawn_local(async move {
            let result = match &id {
                Some(id) => api::update_link_aggr(id, &args).await,
                None => api::create_link_aggr(&args).await,
            };
            set_saving.set(false);
            match result {
                Ok(link) => {
                    log::info!("[LINKAGGR] saved {} ({})", link.name, link.id);
                    on_saved.run(());
                }
                Err(e) => notify::alert_error("LINKAGGR", &e),
            }
        });
    };

    view! {
        <form class="link-aggr-form" on:submit=on_submit>
            <h4>{title}</h4>
            <div class="form-row">
                <label>"Name"</label>
                <input
                    type="text"
                    placeholder="aggr0"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </div>
            <div class="form-row">
                <label>"Interfaces"</label>
                <div class="link-aggr-macs">
                    <For
                        each=move || nics.get()
                        key=|nic| nic.mac.clone()
                        children=move |nic| {
                            let mac = nic.mac.clone();
                            let mac_for_check = mac.clone();
                            let label = match &nic.interface {
                                Some(iface) => format!("{} ({})", mac, iface),
                                None => mac.clone(),
                            };
                            view! {
                                <label class="checkbox">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || selected.with(|m| m.contains(&mac_for_check))
                                        on:change=move |ev| toggle_mac(mac.clone(), event_target_checked(&ev))
                                    />
                                    " " {label}
                                </label>
                            }
                        }
                    />
                </div>
            </div>
            {move || error.get().map(|e| view! { <div class="form-error">{e}</div> })}
            <div class="form-actions">
                <button type="submit" class="btn btn-primary" disabled=move || saving.get()>"Save"</button>
                <button type="button" class="btn" on:click=move |_| on_cancel.run(())>"Cancel"</button>
            </div>
        </form>
    }
}
