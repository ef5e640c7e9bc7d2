//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::Job;
use crate::notes::DropDirection;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to refetch the current page from the backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to refetch the current page from the backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Most recently started job, shown in the banner - read
    pub job: ReadSignal<Option<Job>>,
    /// Most recently started job, shown in the banner - write
    set_job: WriteSignal<Option<Job>>,
    /// Direction notes dropdowns open towards
    pub notes_drop: DropDirection,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        job: (ReadSignal<Option<Job>>, WriteSignal<Option<Job>>),
        notes_drop: DropDirection,
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            job: job.0,
            set_job: job.1,
            notes_drop,
        }
    }

    /// Trigger a refetch of the current page
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn show_job(&self, job: Job) {
        log::info!("[APP] job started: {}", job.job_uuid);
        self.set_job.set(Some(job));
    }

    pub fn dismiss_job(&self) {
        self.set_job.set(None);
    }
}

/// Get the app context (provided by `App`)
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
