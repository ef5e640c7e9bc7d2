//! Traits Editor Modal
//!
//! Edits the server's traits object as JSON.

use leptos::prelude::*;
use serde_json::{Map, Value};

use crate::api::ServerUpdate;
use crate::components::server_fields::persist_update;
use crate::context::use_app_context;
use crate::validate::parse_traits;

#[component]
pub fn TraitsEditor(
    #[prop(into)] uuid: String,
    traits: Map<String, Value>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let uuid = StoredValue::new(uuid);
    let initial = serde_json::to_string_pretty(&traits).unwrap_or_else(|_| "{}".to_string());

    let (text, set_text) = signal(initial);
    let (error, set_error) = signal::<Option<String>>(None);

    let on_save = move |_| {
        match parse_traits(&text.get()) {
            Ok(traits) => {
                set_error.set(None);
                let update = ServerUpdate {
                    traits: Some(traits),
                    ..Default::default()
                };
                persist_update(ctx, uuid.get_value(), update, move |ok| {
                    if ok {
                        on_close.run(());
                    }
                });
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal traits-modal">
                <div class="modal-header">
                    <h3>"Server Traits"</h3>
                    <button class="close-btn" on:click=move |_| on_close.run(())>"×"</button>
                </div>
                <div class="modal-body">
                    <textarea
                        class="traits-json"
                        rows="12"
                        prop:value=move || text.get()
                        on:input=move |ev| set_text.set(event_target_value(&ev))
                    ></textarea>
                    {move || error.get().map(|e| view! { <div class="form-error">{e}</div> })}
                </div>
                <div class="modal-footer">
                    <button class="btn" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button class="btn btn-primary save-traits" on:click=on_save>"Save Traits"</button>
                </div>
            </div>
        </div>
    }
}
