//! UI Components
//!
//! Reusable Leptos components.

mod confirm_button;
mod job_banner;
mod link_aggr_form;
mod link_aggr_list;
mod log_panel;
mod notes_widget;
mod server_actions;
mod server_fields;
mod server_list;
mod server_nics;
mod server_view;
mod traits_editor;

pub use confirm_button::ConfirmButton;
pub use job_banner::JobBanner;
pub use link_aggr_form::{LinkAggrForm, LinkAggrFormMode};
pub use link_aggr_list::LinkAggregationsList;
pub use log_panel::LogPanel;
pub use notes_widget::NotesWidget;
pub use server_actions::ServerActions;
pub use server_fields::{PlatformField, RackField, ReservationRatioField};
pub use server_list::ServerList;
pub use server_nics::{NicsEditor, ServerNics};
pub use server_view::ServerView;
pub use traits_editor::TraitsEditor;
