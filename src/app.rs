//! Admin Console App
//!
//! Top-level component: navigation, job banner and the routed page.

use leptos::prelude::*;

use crate::components::{JobBanner, LogPanel, ServerList, ServerView};
use crate::context::AppContext;
use crate::models::Job;
use crate::notes::DropDirection;
use crate::route::{self, Route};

#[component]
pub fn App(notes_drop: DropDirection) -> impl IntoView {
    // State
    let (route, set_route) = signal(route::current());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (job, set_job) = signal::<Option<Job>>(None);

    // Provide context to all children
    provide_context(AppContext::new((reload_trigger, set_reload_trigger), (job, set_job), notes_drop));

    let hash_listener = window_event_listener(leptos::ev::hashchange, move |_| {
        let next = route::current();
        log::info!("[APP] navigating to {:?}", next);
        set_route.set(next);
    });
    on_cleanup(move || hash_listener.remove());

    view! {
        <div class="app-layout">
            <nav class="sidebar">
                <a class="brand" href=Route::ServerList.to_hash()>"Operations Portal"</a>
                <a
                    class=move || if route.get() == Route::ServerList { "nav-link active" } else { "nav-link" }
                    href=Route::ServerList.to_hash()
                >
                    "Servers"
                </a>
                <LogPanel />
            </nav>

            <main class="main-content">
                <JobBanner />
                {move || match route.get() {
                    Route::ServerList => view! { <ServerList /> }.into_any(),
                    Route::Server(uuid) => view! { <ServerView uuid=uuid /> }.into_any(),
                }}
            </main>
        </div>
    }
}
