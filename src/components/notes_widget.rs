//! Notes Widget
//!
//! Count badge with a dropdown panel listing the notes attached to an item.
//! Every mutation is followed by a refetch; the widget keeps no local
//! copy beyond the last list the server returned.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::context::use_app_context;
use crate::models::Note;
use crate::notes::{
    active_count, badge_class, dropdown_position, format_note_date, normalize_note_input,
    note_author, visible_notes, DropDirection, Rect,
};
use crate::notify;

/// Notes badge + dropdown for `item_uuid`
#[component]
pub fn NotesWidget(
    #[prop(into)] item_uuid: String,
    /// Overrides the configured dropdown direction
    #[prop(optional)]
    drop: Option<DropDirection>,
) -> impl IntoView {
    let ctx = use_app_context();
    let drop = drop.unwrap_or(ctx.notes_drop);
    let item_uuid = StoredValue::new(item_uuid);

    let (notes, set_notes) = signal(Vec::<Note>::new());
    let (dropdown, set_dropdown) = signal(false);
    let (fetch_trigger, set_fetch_trigger) = signal(0u32);
    let (panel_pos, set_panel_pos) = signal::<Option<(f64, f64)>>(None);

    let root_ref = NodeRef::<leptos::html::Div>::new();
    let counts_ref = NodeRef::<leptos::html::A>::new();
    let panel_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Textarea>::new();

    // Fetch on mount and whenever a mutation completes
    Effect::new(move |_| {
        let _ = fetch_trigger.get();
        let item = item_uuid.get_value();
        log::info!("[NOTES] fetching notes for {}", item);
        spawn_local(async move {
            match api::list_notes(&item).await {
                Ok(loaded) => {
                    log::info!("[NOTES] fetched {} notes for {}", loaded.len(), item);
                    set_notes.set(loaded);
                }
                Err(e) => log::error!("[NOTES] fetching notes for {} failed: {}", item, e),
            }
        });
    });

    let refetch = move || set_fetch_trigger.update(|v| *v += 1);

    // Close when clicking anywhere outside the widget
    let outside_click = window_event_listener(leptos::ev::click, move |ev| {
        if !dropdown.get_untracked() {
            return;
        }
        let Some(root) = root_ref.get_untracked() else { return };
        let inside = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
            .map(|node| root.contains(Some(&node)))
            .unwrap_or(false);
        if !inside {
            set_dropdown.set(false);
        }
    });
    on_cleanup(move || outside_click.remove());

    let reposition = move || {
        let (Some(counts), Some(panel)) = (counts_ref.get_untracked(), panel_ref.get_untracked()) else {
            return;
        };
        let rect = counts.get_bounding_client_rect();
        let badge = Rect {
            top: rect.top(),
            left: rect.left(),
            width: rect.width(),
            height: rect.height(),
        };
        set_panel_pos.set(Some(dropdown_position(badge, panel.offset_width() as f64, drop)));
    };

    // Position and focus once the panel is in the DOM
    Effect::new(move |_| {
        if dropdown.get() {
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                reposition();
                if let Some(input) = input_ref.get_untracked() {
                    notify::warn_on_err("NOTES", "focusing note input", input.focus());
                }
            });
        } else {
            set_panel_pos.set(None);
        }
    });

    let on_archive = Callback::new(move |note: Note| {
        log::info!("[NOTES] archiving note {}", note.uuid);
        spawn_local(async move {
            match api::set_note_archived(&note, true).await {
                Ok(()) => {
                    log::info!("[NOTES] archiving note {} done", note.uuid);
                    refetch();
                }
                Err(e) => notify::alert_error("NOTES", &e),
            }
        });
    });

    let on_unarchive = Callback::new(move |note: Note| {
        log::info!("[NOTES] unarchiving note {}", note.uuid);
        spawn_local(async move {
            match api::set_note_archived(&note, false).await {
                Ok(()) => {
                    log::info!("[NOTES] unarchiving note {} done", note.uuid);
                    refetch();
                }
                Err(e) => notify::alert_error("NOTES", &e),
            }
        });
    });

    let on_save = Callback::new(move |text: String| {
        let item = item_uuid.get_value();
        spawn_local(async move {
            match api::create_note(&item, &text).await {
                Ok(note) => {
                    log::info!("[NOTES] saved note {} on {}", note.uuid, item);
                    refetch();
                }
                Err(e) => notify::alert_error("NOTES", &e),
            }
        });
    });

    let panel_style = move || match panel_pos.get() {
        Some((top, left)) => format!("position: fixed; top: {}px; left: {}px;", top, left),
        // Measured before it is placed
        None => "position: fixed; visibility: hidden;".to_string(),
    };

    view! {
        <div class="notes-component" node_ref=root_ref>
            <a
                node_ref=counts_ref
                class=move || notes.with(|n| badge_class(active_count(n), dropdown.get()))
                on:click=move |_| set_dropdown.update(|open| *open = !*open)
            >
                <i class="icon-comment"></i>
                {move || notes.with(|n| active_count(n))}
            </a>
            <Show when=move || dropdown.get()>
                <div class="notes-dropdown" node_ref=panel_ref style=panel_style>
                    <NotesPanel
                        notes=notes
                        input_ref=input_ref
                        on_archive=on_archive
                        on_unarchive=on_unarchive
                        on_save=on_save
                    />
                </div>
            </Show>
        </div>
    }
}

/// Dropdown content: note list plus the new-note form
#[component]
fn NotesPanel(
    notes: ReadSignal<Vec<Note>>,
    input_ref: NodeRef<leptos::html::Textarea>,
    on_archive: Callback<Note>,
    on_unarchive: Callback<Note>,
    on_save: Callback<String>,
) -> impl IntoView {
    let (draft, set_draft) = signal(String::new());
    let (show_archived, set_show_archived) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(text) = normalize_note_input(&draft.get()) else { return };
        on_save.run(text);
        set_draft.set(String::new());
    };

    let archived_count = move || notes.with(|n| n.iter().filter(|note| note.archived).count());

    view! {
        <div class="notes-panel">
            <ul class="notes-list">
                {move || {
                    let list = notes.with(|n| visible_notes(n, show_archived.get()));
                    if list.is_empty() {
                        view! { <li class="no-notes">"There are no notes to display."</li> }.into_any()
                    } else {
                        list.into_iter()
                            .map(|note| view! {
                                <NoteRow note=note on_archive=on_archive on_unarchive=on_unarchive />
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </ul>
            <label class="show-archived">
                <input
                    type="checkbox"
                    prop:checked=move || show_archived.get()
                    on:change=move |ev| set_show_archived.set(event_target_checked(&ev))
                />
                " Show archived (" {archived_count} ")"
            </label>
            <form on:submit=on_submit>
                <textarea
                    node_ref=input_ref
                    placeholder="Write a note here..."
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                ></textarea>
                <button
                    type="submit"
                    class="btn"
                    disabled=move || normalize_note_input(&draft.get()).is_none()
                >
                    "SAVE"
                </button>
            </form>
        </div>
    }
}

/// One note: author, date, archive/unarchive action, text
#[component]
fn NoteRow(note: Note, on_archive: Callback<Note>, on_unarchive: Callback<Note>) -> impl IntoView {
    let archived = note.archived;
    let author = note_author(&note);
    let date = note.created.as_deref().map(format_note_date).unwrap_or_default();
    let text = note.note.clone();

    let action = if archived {
        view! {
            <a class="unarchive" title="Unarchive" on:click=move |_| on_unarchive.run(note.clone())>
                <i class="icon-undo"></i>
            </a>
        }
        .into_any()
    } else {
        view! {
            <a class="archive" title="Archive" on:click=move |_| on_archive.run(note.clone())>
                <i class="icon-trash"></i>
            </a>
        }
        .into_any()
    };

    view! {
        <li class=if archived { "archived" } else { "" }>
            <div class="meta">
                <span class="author">{author}</span>
                <div class="date">{date}</div>
                <div class="actions">{action}</div>
            </div>
            <div class="note">{text}</div>
        </li>
    }
}
