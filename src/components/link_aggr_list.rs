//! Link Aggregation List Component
//!
//! Renders a server's link aggregations; edit and delete are delegated to the parent.

use leptos::prelude::*;

use crate::components::ConfirmButton;
use crate::models::LinkAggregation;

#[component]
pub fn LinkAggregationsList(
    #[prop(into)] link_aggrs: Signal<Vec<LinkAggregation>>,
    #[prop(into)] on_edit: Callback<LinkAggregation>,
    #[prop(into)] on_delete: Callback<LinkAggregation>,
) -> impl IntoView {
    view! {
        <div class="link-aggr-list">
            {move || if link_aggrs.with(Vec::is_empty) {
                view! { <div class="empty">"There are no Aggregated Links on this node"</div> }.into_any()
            } else {
                // Keyed on the whole record: an edit keeps the id but must re-render
                view! {
                    <For
                        each=move || link_aggrs.get()
                        key=|link| link.clone()
                        children=move |link| {
                            let edit_link = link.clone();
                            let delete_link = link.clone();
                            view! {
                                <div class="link-aggr">
                                    <div class="link-aggr-name">{link.name.clone()}</div>
                                    <div class="link-aggr-interfaces">
                                        {link.macs.iter().map(|mac| view! {
                                            <div class="link-aggr-interface">{mac.clone()}</div>
                                        }).collect_view()}
                                    </div>
                                    <div class="actions pull-right">
                                        <button
                                            class="btn btn-link btn-edit"
                                            on:click=move |_| on_edit.run(edit_link.clone())
                                        >
                                            <i class="icon-pencil"></i>" Edit"
                                        </button>
                                        <ConfirmButton
                                            label="Delete"
                                            button_class="btn btn-link btn-delete"
                                            on_confirm=Callback::new(move |_| on_delete.run(delete_link.clone()))
                                        />
                                    </div>
                                </div>
                            }
                        }
                    />
                }.into_any()
            }}
        </div>
    }
}
