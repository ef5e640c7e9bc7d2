//! Server List View
//!
//! Landing page: every compute node with its status and notes badge.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::NotesWidget;
use crate::context::use_app_context;
use crate::models::Server;
use crate::notes::DropDirection;
use crate::notify;
use crate::route::Route;

#[component]
pub fn ServerList() -> impl IntoView {
    let ctx = use_app_context();
    let (servers, set_servers) = signal(Vec::<Server>::new());
    let (image_count, set_image_count) = signal::<Option<usize>>(None);
    let (loaded, set_loaded) = signal(false);

    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        log::info!("[SERVERS] loading servers, trigger={}", trigger);
        spawn_local(async move {
            match api::list_servers().await {
                Ok(mut list) => {
                    list.sort_by_key(|s| s.display_name());
                    log::info!("[SERVERS] loaded {} servers", list.len());
                    set_servers.set(list);
                }
                Err(e) => notify::alert_error("SERVERS", &e),
            }
            set_loaded.set(true);
            match api::list_images().await {
                Ok(images) => set_image_count.set(Some(images.len())),
                Err(e) => log::warn!("[SERVERS] loading images failed: {}", e),
            }
        });
    });

    view! {
        <div id="page-servers">
            <div class="page-header">
                <h1>"Servers"</h1>
                <p class="datacenter-stats">
                    {move || format!("{} servers", servers.with(Vec::len))}
                    {move || image_count.get().map(|n| format!(", {} images", n))}
                </p>
            </div>
            <table class="table servers">
                <thead>
                    <tr>
                        <th>"Hostname"</th>
                        <th>"UUID"</th>
                        <th>"Status"</th>
                        <th>"Reserved"</th>
                        <th>"Notes"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show when=move || loaded.get() && servers.with(Vec::is_empty)>
                        <tr><td colspan="5" class="empty">"There are no servers to display."</td></tr>
                    </Show>
                    <For
                        each=move || servers.get()
                        key=|server| server.uuid.clone()
                        children=move |server| {
                            let href = Route::Server(server.uuid.clone()).to_hash();
                            view! {
                                <tr>
                                    <td><a href=href>{server.display_name()}</a></td>
                                    <td class="uuid">{server.uuid.clone()}</td>
                                    <td class=format!("status {}", server.status.clone().unwrap_or_default())>
                                        {server.status.clone().unwrap_or_default()}
                                    </td>
                                    <td>{if server.reserved { "yes" } else { "" }}</td>
                                    <td><NotesWidget item_uuid=server.uuid.clone() drop=DropDirection::Right /></td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
