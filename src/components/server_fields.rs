//! Server Inline Edit Fields
//!
//! Label/input swaps for the server's rack, boot platform and reservation ratio.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ServerUpdate};
use crate::context::{use_app_context, AppContext};
use crate::notify;
use crate::store::{use_server_store, ServerPageStateStoreFields};
use crate::validate::{parse_reservation_ratio, RATIO_EDIT_HINT};

/// Persist `update`, then refetch the page. `on_done` receives whether the
/// save succeeded.
pub(crate) fn persist_update(
    ctx: AppContext,
    uuid: String,
    update: ServerUpdate,
    on_done: impl FnOnce(bool) + 'static,
) {
    spawn_local(async move {
        log::info!("[SERVER] updating {}: {:?}", uuid, update);
        match api::update_server(&uuid, &update).await {
            Ok(()) => {
                on_done(true);
                ctx.reload();
            }
            Err(e) => {
                on_done(false);
                notify::alert_error("SERVER", &e);
            }
        }
    });
}

/// Reservation ratio label that turns into a validated input
#[component]
pub fn ReservationRatioField(#[prop(into)] uuid: String, ratio: Option<f64>) -> impl IntoView {
    let ctx = use_app_context();
    let uuid = StoredValue::new(uuid);
    let ratio_text = ratio.map(|r| r.to_string()).unwrap_or_default();
    let ratio_label = StoredValue::new(if ratio_text.is_empty() { "-".to_string() } else { ratio_text.clone() });
    let ratio_text = StoredValue::new(ratio_text);

    let (editing, set_editing) = signal(false);
    let (saving, set_saving) = signal(false);
    let (draft, set_draft) = signal(String::new());
    let (hint, set_hint) = signal(RATIO_EDIT_HINT.to_string());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let enter_edit_mode = move |_| {
        set_draft.set(ratio_text.get_value());
        set_hint.set(RATIO_EDIT_HINT.to_string());
        set_editing.set(true);
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            if let Some(input) = input_ref.get_untracked() {
                notify::warn_on_err("SERVER", "focusing ratio input", input.focus());
            }
        });
    };

    let exit_edit_mode = move || set_editing.set(false);

    let save = move || {
        // Blur after Enter or Escape must not save again
        if !editing.get_untracked() || saving.get_untracked() {
            return;
        }
        match parse_reservation_ratio(&draft.get_untracked()) {
            Ok(value) => {
                set_saving.set(true);
                let update = ServerUpdate {
                    reservation_ratio: Some(value),
                    ..Default::default()
                };
                // A failed save leaves the input open for another try
                persist_update(ctx, uuid.get_value(), update, move |ok| {
                    set_saving.set(false);
                    if ok {
                        exit_edit_mode();
                    }
                });
            }
            Err(e) => set_hint.set(e.to_string()),
        }
    };

    view! {
        {move || if editing.get() {
            view! {
                <span class="reservation-ratio-edit">
                    <input
                        type="text"
                        class="reservation-ratio"
                        node_ref=input_ref
                        prop:value=move || draft.get()
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                        on:blur=move |_| save()
                        on:keyup=move |ev: web_sys::KeyboardEvent| {
                            match ev.key().as_str() {
                                "Escape" => exit_edit_mode(),
                                "Enter" => save(),
                                _ => {}
                            }
                        }
                    />
                    <span class="edit-hint">{move || hint.get()}</span>
                </span>
            }.into_any()
        } else {
            view! {
                <span class="reservation-ratio">{ratio_label.get_value()}</span>
                " "
                <a class="change-reservation-ratio" on:click=enter_edit_mode>"change"</a>
            }.into_any()
        }}
    }
}

/// Rack identifier with an inline text form
#[component]
pub fn RackField(#[prop(into)] uuid: String, rack: Option<String>) -> impl IntoView {
    let ctx = use_app_context();
    let uuid = StoredValue::new(uuid);
    let current = StoredValue::new(rack.unwrap_or_default());

    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let rack = draft.get().trim().to_string();
        let update = ServerUpdate {
            rack_identifier: Some(rack),
            ..Default::default()
        };
        persist_update(ctx, uuid.get_value(), update, move |ok| {
            if ok {
                set_editing.set(false);
            }
        });
    };

    view! {
        {move || if editing.get() {
            view! {
                <form class="change-rack-form" on:submit=on_submit>
                    <input
                        type="text"
                        placeholder="Rack identifier"
                        prop:value=move || draft.get()
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn btn-primary">"Save"</button>
                    <button type="button" class="btn" on:click=move |_| set_editing.set(false)>"Cancel"</button>
                </form>
            }.into_any()
        } else {
            let label = current.get_value();
            let label = if label.is_empty() { "Set rack".to_string() } else { label };
            view! {
                <a
                    class="change-rack-id"
                    on:click=move |_| {
                        set_draft.set(current.get_value());
                        set_editing.set(true);
                    }
                >
                    {label}
                </a>
            }.into_any()
        }}
    }
}

/// Boot platform with an inline select of available platforms
#[component]
pub fn PlatformField(#[prop(into)] uuid: String, boot_platform: Option<String>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_server_store();
    let uuid = StoredValue::new(uuid);
    let current = StoredValue::new(boot_platform.unwrap_or_default());

    let (editing, set_editing) = signal(false);
    let (choice, set_choice) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let platform = choice.get();
        if platform.is_empty() {
            return;
        }
        let update = ServerUpdate {
            boot_platform: Some(platform),
            ..Default::default()
        };
        persist_update(ctx, uuid.get_value(), update, move |ok| {
            if ok {
                set_editing.set(false);
            }
        });
    };

    view! {
        {move || if editing.get() {
            view! {
                <form class="change-platform-form" on:submit=on_submit>
                    <select on:change=move |ev| set_choice.set(event_target_value(&ev))>
                        {move || store.platforms().get().into_iter().map(|platform| {
                            let selected = platform.version == choice.get_untracked();
                            let label = if platform.latest {
                                format!("{} (latest)", platform.version)
                            } else {
                                platform.version.clone()
                            };
                            view! { <option value=platform.version selected=selected>{label}</option> }
                        }).collect_view()}
                    </select>
                    <button type="submit" class="btn btn-primary">"Save"</button>
                    <button type="button" class="btn" on:click=move |_| set_editing.set(false)>"Cancel"</button>
                </form>
            }.into_any()
        } else {
            let label = current.get_value();
            let label = if label.is_empty() { "Set platform".to_string() } else { label };
            view! {
                <a
                    class="change-platform"
                    on:click=move |_| {
                        let initial = current.get_value();
                        let initial = if initial.is_empty() {
                            store.platforms().with_untracked(|p| {
                                p.first().map(|p| p.version.clone()).unwrap_or_default()
                            })
                        } else {
                            initial
                        };
                        set_choice.set(initial);
                        set_editing.set(true);
                    }
                >
                    {label}
                </a>
            }.into_any()
        }}
    }
}
