//! Roster Page - the team roster admin screen
//!
//! Owns all roster state: the paged member window, the drag controller,
//! the edit workflow, category selection, and the status/search filter.
//! Child components stay presentational and report back through handlers.

use std::sync::Arc;

use dioxus::document;
use dioxus::prelude::*;

use rosterly_domain::{Category, CategoryId, Member, MemberId, MemberStatus};

use crate::application::dto::{resolve_category, validate_draft, FieldError, MemberDraft};
use crate::application::services::RosterService;
use crate::infrastructure::spawn_task;
use crate::state::{
    visible_members, DragController, EditStage, EditWorkflow, FetchTicket, PagedMemberStore,
    PointerPosition, StatusFilter, WorkflowEffect,
};
use crate::ui::presentation::services::{use_category_service, use_roster_service};

use super::category_tabs::CategoryTabs;
use super::confirm_dialog::ConfirmDialog;
use super::edit_member_modal::EditMemberModal;
use super::member_list::MemberList;

const MEMBERS_PAGE_SIZE: u32 = 20;

/// Settle one armed fetch ticket against the backend.
async fn run_fetch(
    mut store: Signal<PagedMemberStore>,
    roster: Arc<RosterService>,
    ticket: FetchTicket,
    mut page_error: Signal<Option<String>>,
) {
    let page_size = store.read().page_size();
    match roster.fetch_page(ticket.category, ticket.page, page_size).await {
        Ok(page) => {
            store.write().complete_fetch(ticket, page);
        }
        Err(e) => {
            tracing::warn!(error = %e, page = ticket.page, "member page fetch failed");
            page_error.set(Some(format!("Failed to load members: {}", e)));
            store.write().fail_fetch(ticket);
        }
    }
}

/// Roster Page component
#[component]
pub fn RosterPage() -> Element {
    let roster_service = use_roster_service();
    let category_service = use_category_service();

    let mut store = use_signal(|| PagedMemberStore::new(MEMBERS_PAGE_SIZE));
    let mut drag = use_signal(DragController::new);
    let mut workflow = use_signal(EditWorkflow::new);
    let mut categories: Signal<Vec<Category>> = use_signal(Vec::new);
    let mut status_filter = use_signal(|| StatusFilter::All);
    let mut field_errors: Signal<Vec<FieldError>> = use_signal(Vec::new);
    let mut pending_delete: Signal<Option<Member>> = use_signal(|| None);
    let mut is_saving = use_signal(|| false);
    let mut page_error: Signal<Option<String>> = use_signal(|| None);

    // Webviews throttle (and sometimes blank) the coordinates on a row's own
    // drag events, so the floating preview follows a document-level dragover
    // stream instead. The controller drops positions outside an active drag.
    use_future(move || async move {
        let mut eval = document::eval(
            r#"
            document.addEventListener("dragover", (e) => {
                dioxus.send([e.clientX, e.clientY]);
            });
            "#,
        );
        while let Ok([x, y]) = eval.recv::<[f64; 2]>().await {
            if drag.read().is_active() {
                drag.write().drag_move(PointerPosition::new(x, y));
            }
        }
    });

    let select_category = {
        let roster_svc = roster_service.clone();
        let category_svc = category_service.clone();
        move |category: CategoryId| {
            category_svc.remember_selection(category);
            page_error.set(None);
            if let Some(ticket) = store.write().set_category(category) {
                let roster_svc = roster_svc.clone();
                spawn_task(async move {
                    run_fetch(store, roster_svc, ticket, page_error).await;
                });
            }
        }
    };

    // Initial load: categories first, then the remembered (or first) category.
    {
        let category_svc = category_service.clone();
        let mut select_category = select_category.clone();
        use_effect(move || {
            let category_svc = category_svc.clone();
            let mut select_category = select_category.clone();
            spawn_task(async move {
                match category_svc.list_categories().await {
                    Ok(list) => {
                        let initial = category_svc.initial_selection(&list);
                        categories.set(list);
                        if let Some(category) = initial {
                            select_category(category);
                        }
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "category list failed");
                        page_error.set(Some(format!("Failed to load categories: {}", e)));
                    }
                }
            });
        });
    }

    let on_load_more = {
        let roster_svc = roster_service.clone();
        move |_| {
            if let Some(ticket) = store.write().begin_next_page() {
                let roster_svc = roster_svc.clone();
                spawn_task(async move {
                    run_fetch(store, roster_svc, ticket, page_error).await;
                });
            }
        }
    };

    let on_search = {
        let roster_svc = roster_service.clone();
        move |e: FormEvent| {
            if let Some(ticket) = store.write().set_search_query(&e.value()) {
                let roster_svc = roster_svc.clone();
                spawn_task(async move {
                    run_fetch(store, roster_svc, ticket, page_error).await;
                });
            }
        }
    };

    // Re-arm the window from page one; used to restore backend truth after
    // a failed optimistic mutation.
    let refetch_window = {
        let roster_svc = roster_service.clone();
        move || {
            let category = store.read().category();
            if let Some(category) = category {
                if let Some(ticket) = store.write().set_category(category) {
                    let roster_svc = roster_svc.clone();
                    spawn_task(async move {
                        run_fetch(store, roster_svc, ticket, page_error).await;
                    });
                }
            }
        }
    };

    // Persist a commit effect from the edit workflow.
    let apply_effect = {
        let roster_svc = roster_service.clone();
        move |effect: WorkflowEffect| {
            let (member_id, draft, status) = match effect {
                WorkflowEffect::None => return,
                WorkflowEffect::CommitDraft { member_id, draft } => {
                    (member_id, draft, MemberStatus::Draft)
                }
                WorkflowEffect::CommitPublish { member_id, draft } => {
                    (member_id, draft, MemberStatus::Published)
                }
            };
            let roster_svc = roster_svc.clone();
            let category_list = categories.read().clone();
            is_saving.set(true);
            spawn_task(async move {
                let result = match member_id {
                    Some(id) => roster_svc
                        .update_member(id, &draft, status)
                        .await
                        .map(|_| member_from_draft(id, &draft, status, &category_list)),
                    None => roster_svc.create_member(&draft, status).await.map(Some),
                };
                match result {
                    Ok(saved) => {
                        if let Some(member) = saved {
                            let active = store.read().category();
                            if active == Some(member.category.id) {
                                store.write().upsert(member);
                            } else if let Some(id) = member_id {
                                // Moved to another category; drop it from
                                // the current window.
                                store.write().remove_member(id);
                            }
                        }
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "member save failed");
                        page_error.set(Some(format!("Failed to save member: {}", e)));
                    }
                }
                is_saving.set(false);
            });
        }
    };

    let on_save_draft = {
        let mut apply_effect = apply_effect.clone();
        move |_| {
            let Some(draft) = workflow.read().draft().cloned() else {
                return;
            };
            match validate_draft(&draft, false) {
                Ok(()) => {
                    field_errors.set(Vec::new());
                    let effect = workflow.write().save_as_draft();
                    apply_effect(effect);
                }
                Err(errors) => field_errors.set(errors),
            }
        }
    };

    let on_submit_publish = move |_| {
        let Some(draft) = workflow.read().draft().cloned() else {
            return;
        };
        match validate_draft(&draft, true) {
            Ok(()) => {
                field_errors.set(Vec::new());
                workflow.write().submit();
            }
            Err(errors) => field_errors.set(errors),
        }
    };

    let on_confirm = {
        let mut apply_effect = apply_effect.clone();
        move |_| {
            let effect = workflow.write().confirm();
            apply_effect(effect);
        }
    };

    let on_add_member = move |_| {
        let Some(category) = store.read().category() else {
            return;
        };
        field_errors.set(Vec::new());
        workflow.write().open_for_add(category);
    };

    let on_edit = move |id: MemberId| {
        let member = store
            .read()
            .members()
            .iter()
            .find(|m| m.id == id)
            .cloned();
        if let Some(member) = member {
            field_errors.set(Vec::new());
            workflow.write().open_for_edit(member);
        }
    };

    let on_delete_request = move |id: MemberId| {
        let member = store
            .read()
            .members()
            .iter()
            .find(|m| m.id == id)
            .cloned();
        pending_delete.set(member);
    };

    let on_delete_confirm = {
        let roster_svc = roster_service.clone();
        let mut refetch_window = refetch_window.clone();
        move |_| {
            let Some(member) = pending_delete.take() else {
                return;
            };
            // Optimistic: the row disappears before the backend answers.
            store.write().remove_member(member.id);
            let roster_svc = roster_svc.clone();
            let mut refetch_window = refetch_window.clone();
            spawn_task(async move {
                if let Err(e) = roster_svc.delete_member(member.id).await {
                    tracing::error!(error = %e, member = %member.id, "member delete failed");
                    page_error.set(Some(format!("Failed to delete member: {}", e)));
                    refetch_window();
                }
            });
        }
    };

    // Drag handlers map row ids back to window indices, so a filtered view
    // still reorders the right members.
    let on_drag_start = move |(id, pointer)| {
        let entry = store
            .read()
            .members()
            .iter()
            .position(|m| m.id == id)
            .map(|i| (i, store.read().members()[i].clone()));
        if let Some((index, member)) = entry {
            drag.write().drag_start(index, member, pointer);
        }
    };

    let on_drag_move = move |pointer| drag.write().drag_move(pointer);

    let on_drop_on = {
        let roster_svc = roster_service.clone();
        let mut refetch_window = refetch_window.clone();
        move |target_id: MemberId| {
            let target = store.read().members().iter().position(|m| m.id == target_id);
            let Some(target) = target else {
                drag.write().drag_end();
                return;
            };
            if let Some(mv) = drag.write().drop_on(target) {
                store.write().reorder(mv.from, mv.to);
                let category = store.read().category();
                let ordered = store.read().ordered_ids();
                if let Some(category) = category {
                    let roster_svc = roster_svc.clone();
                    let mut refetch_window = refetch_window.clone();
                    spawn_task(async move {
                        if let Err(e) = roster_svc.commit_reorder(category, ordered).await {
                            tracing::error!(error = %e, "reorder commit failed");
                            page_error.set(Some(format!("Failed to save order: {}", e)));
                            refetch_window();
                        }
                    });
                }
            }
        }
    };

    let on_drag_end = move |_| drag.write().drag_end();

    let store_read = store.read();
    let filter = *status_filter.read();
    let visible: Vec<Member> = visible_members(store_read.members(), filter, store_read.search_query())
        .into_iter()
        .cloned()
        .collect();
    let is_loading = store_read.is_loading();
    let has_more = store_read.has_more();
    let active_category = store_read.category();
    let search_value = store_read.search_query().to_string();
    drop(store_read);

    let drag_read = drag.read();
    let dragging_id = drag_read.preview().map(|m| m.id);
    let drag_preview = drag_read
        .preview()
        .cloned()
        .zip(drag_read.pointer());
    drop(drag_read);

    let workflow_open = workflow.read().stage() != EditStage::Closed;

    rsx! {
        div {
            class: "h-full flex flex-col gap-4 p-6",

            // Header
            div {
                class: "flex justify-between items-center",
                h1 {
                    class: "m-0 text-white text-2xl",
                    "Team Roster"
                }
                button {
                    onclick: on_add_member,
                    disabled: active_category.is_none(),
                    class: "px-4 py-2 bg-accent text-white border-0 rounded-lg cursor-pointer font-medium",
                    "Add Member"
                }
            }

            if let Some(err) = page_error.read().as_ref() {
                div {
                    class: "px-4 py-3 bg-red-500 bg-opacity-10 border border-red-500 border-opacity-30 rounded-lg text-red-500 text-sm flex justify-between items-center",
                    span { "{err}" }
                    button {
                        onclick: move |_| page_error.set(None),
                        class: "px-2 bg-transparent text-red-500 border-0 cursor-pointer",
                        "×"
                    }
                }
            }

            CategoryTabs {
                categories: categories.read().clone(),
                active: active_category,
                on_select: select_category.clone(),
            }

            // Search and status filter
            div {
                class: "flex gap-3 items-center",
                input {
                    r#type: "text",
                    value: "{search_value}",
                    oninput: on_search,
                    placeholder: "Search members...",
                    class: "flex-1 p-2 bg-dark-bg border border-gray-700 rounded-lg text-white",
                }
                for (variant, label) in [
                    (StatusFilter::All, "All"),
                    (StatusFilter::Draft, "Draft"),
                    (StatusFilter::Published, "Published"),
                ] {
                    button {
                        key: "{label}",
                        onclick: move |_| status_filter.set(variant),
                        class: if filter == variant {
                            "px-3 py-2 bg-accent text-white border-0 rounded-lg cursor-pointer text-sm"
                        } else {
                            "px-3 py-2 bg-gray-700 text-gray-300 border-0 rounded-lg cursor-pointer text-sm"
                        },
                        "{label}"
                    }
                }
            }

            MemberList {
                members: visible,
                is_loading,
                has_more,
                dragging_id,
                drag_preview,
                on_load_more,
                on_drag_start,
                on_drag_move,
                on_drop_on,
                on_drag_end,
                on_edit,
                on_delete: on_delete_request,
            }
        }

        if workflow_open {
            EditMemberModal {
                workflow,
                categories: categories.read().clone(),
                field_errors: field_errors.read().clone(),
                is_saving: *is_saving.read(),
                on_save_draft,
                on_submit_publish,
                on_confirm,
                on_cancel_confirm: move |_| workflow.write().cancel(),
                on_request_close: move |_| workflow.write().request_close(),
            }
        }

        if let Some(member) = pending_delete.read().as_ref() {
            ConfirmDialog {
                title: "Delete Member".to_string(),
                message: format!("Delete {}? This cannot be undone.", member.full_name),
                confirm_label: "Delete".to_string(),
                on_confirm: on_delete_confirm,
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}

/// Rebuild the member the backend now holds after an in-place update.
fn member_from_draft(
    id: MemberId,
    draft: &MemberDraft,
    status: MemberStatus,
    categories: &[Category],
) -> Option<Member> {
    let category = resolve_category(categories, draft.category_id)?.clone();
    Some(Member {
        id,
        full_name: draft.full_name.trim().to_string(),
        description: draft.description.trim().to_string(),
        photo: draft.photo,
        status,
        category,
    })
}
