//! Server Detail View
//!
//! Loads a server with its NICs and link aggregations and composes the
//! child views: summary, inline edit fields, traits, NICs, link
//! aggregations, notes and actions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{
    LinkAggrForm, LinkAggrFormMode, LinkAggregationsList, NicsEditor, NotesWidget, PlatformField,
    RackField, ReservationRatioField, ServerActions, ServerNics, TraitsEditor,
};
use crate::context::use_app_context;
use crate::models::{LinkAggregation, Server};
use crate::notify;
use crate::store::{
    store_set_link_aggrs, store_set_nics, store_set_platforms, store_set_server, use_server_store,
    ServerPageState, ServerPageStateStoreFields, ServerStore,
};
use crate::sysinfo::{trait_pairs, ServerSummary};

/// Server page for `uuid`
#[component]
pub fn ServerView(#[prop(into)] uuid: String) -> impl IntoView {
    let ctx = use_app_context();
    let store: ServerStore = Store::new(ServerPageState::default());
    provide_context(store);
    let uuid = StoredValue::new(uuid);

    // Server, NICs and link aggregations; refetched after every mutation
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let uuid = uuid.get_value();
        log::info!("[SERVER] loading {}, trigger={}", uuid, trigger);
        spawn_local(async move {
            match api::get_server(&uuid).await {
                Ok(server) => store_set_server(&store, server),
                Err(e) => {
                    notify::alert_error("SERVER", &e);
                    return;
                }
            }
            match api::list_server_nics(&uuid).await {
                Ok(nics) => store_set_nics(&store, nics),
                Err(e) => log::error!("[SERVER] loading NICs of {} failed: {}", uuid, e),
            }
            match api::list_link_aggrs(&uuid).await {
                Ok(links) => store_set_link_aggrs(&store, links),
                Err(e) => log::error!("[SERVER] loading link aggregations of {} failed: {}", uuid, e),
            }
        });
    });

    // Platforms only change with new uploads; load once
    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_platforms().await {
                Ok(platforms) => store_set_platforms(&store, platforms),
                Err(e) => log::error!("[SERVER] loading platforms failed: {}", e),
            }
        });
    });

    view! {
        <div id="page-server">
            {move || match store.server().get() {
                Some(server) => view! { <ServerDetail server=server /> }.into_any(),
                None => view! { <div class="loading">"Loading server..."</div> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ServerDetail(server: Server) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_server_store();
    let uuid = server.uuid.clone();
    let summary = ServerSummary::from_sysinfo(&server.sysinfo);
    let traits = trait_pairs(&server.traits);

    let (traits_open, set_traits_open) = signal(false);
    let (nics_open, set_nics_open) = signal(false);
    let (aggr_form, set_aggr_form) = signal::<Option<LinkAggrFormMode>>(None);

    let stored_server = StoredValue::new(server.clone());
    let nics = Signal::derive(move || store.nics().get());
    let link_aggrs = Signal::derive(move || store.link_aggrs().get());

    let on_edit_aggr = Callback::new(move |link: LinkAggregation| {
        set_aggr_form.set(Some(LinkAggrFormMode::Edit(link)));
    });

    let on_delete_aggr = Callback::new(move |link: LinkAggregation| {
        spawn_local(async move {
            match api::delete_link_aggr(&link.id).await {
                Ok(()) => {
                    log::info!("[LINKAGGR] deleted {} ({})", link.name, link.id);
                    ctx.reload();
                }
                Err(e) => notify::alert_error("LINKAGGR", &e),
            }
        });
    });

    let text = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());

    view! {
        <div class="server-detail">
            <div class="page-header">
                <h1>
                    {server.display_name()}
                    <small class="uuid">{uuid.clone()}</small>
                </h1>
                <NotesWidget item_uuid=uuid.clone() />
                <span class=format!("status {}", server.status.clone().unwrap_or_default())>
                    {server.status.clone().unwrap_or_else(|| "unknown".to_string())}
                </span>
                {server.headnode.then(|| view! { <span class="label headnode">"headnode"</span> })}
            </div>

            <ServerActions server=server.clone() />

            <section class="server-summary">
                <h3>"Summary"</h3>
                <table class="table">
                    <tbody>
                        <tr><th>"Platform Version"</th><td>{text(&summary.platform_version)}</td></tr>
                        <tr><th>"CPU Type"</th><td>{text(&summary.cpu_type)}</td></tr>
                        <tr><th>"CPU Physical Cores"</th><td>{text(&summary.cpu_physical_cores)}</td></tr>
                        <tr><th>"CPU Total Cores"</th><td>{text(&summary.cpu_total_cores)}</td></tr>
                        <tr><th>"Serial Number"</th><td>{text(&summary.serial_number)}</td></tr>
                        <tr><th>"Total Memory (MiB)"</th><td>{text(&summary.total_memory_mib)}</td></tr>
                        <tr class="rack">
                            <th>"Rack"</th>
                            <td><RackField uuid=uuid.clone() rack=server.rack_identifier.clone() /></td>
                        </tr>
                        <tr class="platform">
                            <th>"Boot Platform"</th>
                            <td><PlatformField uuid=uuid.clone() boot_platform=server.boot_platform.clone() /></td>
                        </tr>
                        <tr>
                            <th>"Reservation Ratio"</th>
                            <td><ReservationRatioField uuid=uuid.clone() ratio=server.reservation_ratio /></td>
                        </tr>
                        <tr>
                            <th>"Reserved"</th>
                            <td>{if server.reserved { "yes" } else { "no" }}</td>
                        </tr>
                    </tbody>
                </table>
            </section>

            <section class="server-disks">
                <h3>"Disks"</h3>
                <ul>
                    {summary.disks.into_iter().map(|disk| view! {
                        <li>
                            <span class="disk-name">{disk.name}</span>
                            " "
                            <span class="disk-size">{disk.size_gb.map(|s| format!("{} GB", s)).unwrap_or_default()}</span>
                        </li>
                    }).collect_view()}
                </ul>
            </section>

            <section class="server-traits">
                <h3>
                    "Traits "
                    <button class="btn btn-link modify-traits" on:click=move |_| set_traits_open.set(true)>"Modify"</button>
                </h3>
                {if traits.is_empty() {
                    view! { <div class="empty">"No traits"</div> }.into_any()
                } else {
                    view! {
                        <ul class="traits">
                            {traits.into_iter().map(|(name, value)| view! {
                                <li><span class="trait-name">{name}</span>": "<span class="trait-value">{value}</span></li>
                            }).collect_view()}
                        </ul>
                    }.into_any()
                }}
            </section>

            <section class="nics">
                <h3>
                    "NICs "
                    <button class="btn btn-link manage-nics" on:click=move |_| set_nics_open.set(true)>"Manage"</button>
                </h3>
                <ServerNics nics=nics />
            </section>

            <section class="link-aggrs">
                <h3>
                    "Aggregated Links "
                    <button class="btn btn-link" on:click=move |_| set_aggr_form.set(Some(LinkAggrFormMode::Create))>"New"</button>
                </h3>
                {move || aggr_form.get().map(|mode| view! {
                    <LinkAggrForm
                        mode=mode
                        server_uuid=stored_server.with_value(|s| s.uuid.clone())
                        nics=nics
                        on_saved=Callback::new(move |_| {
                            set_aggr_form.set(None);
                            ctx.reload();
                        })
                        on_cancel=Callback::new(move |_| set_aggr_form.set(None))
                    />
                })}
                <LinkAggregationsList link_aggrs=link_aggrs on_edit=on_edit_aggr on_delete=on_delete_aggr />
            </section>

            <Show when=move || traits_open.get()>
                <TraitsEditor
                    uuid=stored_server.with_value(|s| s.uuid.clone())
                    traits=stored_server.with_value(|s| s.traits.clone())
                    on_close=Callback::new(move |_| set_traits_open.set(false))
                />
            </Show>
            <Show when=move || nics_open.get()>
                <NicsEditor
                    server_uuid=stored_server.with_value(|s| s.uuid.clone())
                    nics=nics.get_untracked()
                    on_close=Callback::new(move |_| set_nics_open.set(false))
                />
            </Show>
        </div>
    }
}
