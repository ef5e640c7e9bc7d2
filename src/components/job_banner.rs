//! Job Banner Component
//!
//! Shows the most recently started backend job.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn JobBanner() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        {move || ctx.job.get().map(|job| view! {
            <div class="job-banner">
                <span>"Job started: "</span>
                <code class="job-uuid">{job.job_uuid}</code>
                <button class="close-btn" on:click=move |_| ctx.dismiss_job()>"×"</button>
            </div>
        })}
    }
}
