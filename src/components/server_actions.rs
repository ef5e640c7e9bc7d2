//! Server Actions Component
//!
//! Buttons that start backend jobs or change the server's lifecycle:
//! setup, reserve/unreserve, reboot, factory reset, forget.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ServerUpdate};
use crate::components::server_fields::persist_update;
use crate::components::ConfirmButton;
use crate::context::use_app_context;
use crate::models::Server;
use crate::notify;
use crate::route::{self, Route};

#[component]
pub fn ServerActions(server: Server) -> impl IntoView {
    let ctx = use_app_context();
    let uuid = StoredValue::new(server.uuid.clone());
    let reserved = server.reserved;
    let needs_setup = !server.setup;

    let (setting_up, set_setting_up) = signal(false);
    let (hostname, set_hostname) = signal(String::new());

    let toggle_reserve = move |_| {
        let update = ServerUpdate {
            reserved: Some(!reserved),
            ..Default::default()
        };
        persist_update(ctx, uuid.get_value(), update, |_| {});
    };

    let reboot = move |_| {
        let uuid = uuid.get_value();
        spawn_local(async move {
            match api::reboot_server(&uuid).await {
                Ok(job) => {
                    log::info!("[SERVER] reboot of {} started as job {}", uuid, job.job_uuid);
                    notify::alert("Server is now being rebooted. Progress cannot be tracked yet.");
                }
                Err(e) => notify::alert_error("SERVER", &e),
            }
        });
    };

    let factory_reset = Callback::new(move |_| {
        let uuid = uuid.get_value();
        spawn_local(async move {
            match api::factory_reset_server(&uuid).await {
                Ok(job) => ctx.show_job(job),
                Err(e) => notify::alert_error("SERVER", &e),
            }
        });
    });

    let forget = Callback::new(move |_| {
        let uuid = uuid.get_value();
        spawn_local(async move {
            match api::forget_server(&uuid).await {
                Ok(()) => {
                    log::info!("[SERVER] forgot {}", uuid);
                    notify::alert("Server Removed from Datacenter");
                    route::navigate(&Route::ServerList);
                }
                Err(e) => notify::alert_error("SERVER", &e),
            }
        });
    });

    let on_setup = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let uuid = uuid.get_value();
        let name = hostname.get().trim().to_string();
        spawn_local(async move {
            let hostname = if name.is_empty() { None } else { Some(name.as_str()) };
            match api::setup_server(&uuid, hostname).await {
                Ok(job) => {
                    set_setting_up.set(false);
                    ctx.show_job(job);
                    ctx.reload();
                }
                Err(e) => notify::alert_error("SERVER", &e),
            }
        });
    };

    view! {
        <div class="server-actions">
            {needs_setup.then(|| view! {
                {move || if setting_up.get() {
                    view! {
                        <form class="server-setup-form" on:submit=on_setup>
                            <input
                                type="text"
                                placeholder="Hostname (optional)"
                                prop:value=move || hostname.get()
                                on:input=move |ev| set_hostname.set(event_target_value(&ev))
                            />
                            <button type="submit" class="btn btn-primary">"Setup"</button>
                            <button type="button" class="btn" on:click=move |_| set_setting_up.set(false)>"Cancel"</button>
                        </form>
                    }.into_any()
                } else {
                    view! {
                        <button class="btn setup" on:click=move |_| set_setting_up.set(true)>"Setup"</button>
                    }.into_any()
                }}
            })}
            <button class="btn change-reserve" on:click=toggle_reserve>
                {if reserved { "Unreserve" } else { "Reserve" }}
            </button>
            <button class="btn reboot" on:click=reboot>"Reboot"</button>
            <ConfirmButton label="Factory Reset" button_class="btn factory-reset" on_confirm=factory_reset />
            <ConfirmButton label="Forget" button_class="btn btn-danger forget" on_confirm=forget />
        </div>
    }
}
