//! Member List - scrollable roster viewport with incremental loading

use dioxus::document;
use dioxus::prelude::*;

use rosterly_domain::{Member, MemberId};

use crate::infrastructure::spawn_task;
use crate::state::{evaluate_scroll, PointerPosition, ScrollMetrics};

use super::member_row::MemberRow;

const SCROLL_VIEWPORT_ID: &str = "roster-scroll";

/// Props for MemberList
#[derive(Props, Clone, PartialEq)]
pub struct MemberListProps {
    /// Members in display order, already filtered by the page.
    pub members: Vec<Member>,
    pub is_loading: bool,
    pub has_more: bool,
    /// Id of the row being dragged, if any.
    pub dragging_id: Option<MemberId>,
    /// Floating preview rendered at the pointer while a drag is active.
    pub drag_preview: Option<(Member, PointerPosition)>,
    pub on_load_more: EventHandler<()>,
    pub on_drag_start: EventHandler<(MemberId, PointerPosition)>,
    pub on_drag_move: EventHandler<PointerPosition>,
    pub on_drop_on: EventHandler<MemberId>,
    pub on_drag_end: EventHandler<()>,
    pub on_edit: EventHandler<MemberId>,
    pub on_delete: EventHandler<MemberId>,
}

/// Member List component
#[component]
pub fn MemberList(props: MemberListProps) -> Element {
    let mut show_move_to_top = use_signal(|| false);

    let is_empty = props.members.is_empty();
    let has_more = props.has_more;
    let is_loading = props.is_loading;
    let on_load_more = props.on_load_more;

    let on_scroll = move |_| {
        spawn_task(async move {
            let mut eval = document::eval(&format!(
                r#"
                const el = document.getElementById("{SCROLL_VIEWPORT_ID}");
                if (el) {{
                    dioxus.send([el.scrollTop, el.scrollHeight, el.clientHeight]);
                }}
                "#
            ));
            if let Ok([scroll_top, scroll_height, client_height]) = eval.recv::<[f64; 3]>().await {
                let metrics = ScrollMetrics {
                    scroll_top,
                    scroll_height,
                    client_height,
                };
                let decision = evaluate_scroll(metrics, has_more, is_loading, is_empty);
                show_move_to_top.set(decision.show_move_to_top);
                if decision.should_load_more {
                    on_load_more.call(());
                    // Pin to the bottom while the next page loads so the
                    // appended rows feel contiguous.
                    let _ = document::eval(&format!(
                        r#"
                        const el = document.getElementById("{SCROLL_VIEWPORT_ID}");
                        if (el) {{
                            el.scrollTo({{ top: el.scrollHeight }});
                        }}
                        "#
                    ));
                }
            }
        });
    };

    let scroll_to_top = move |_| {
        let _ = document::eval(&format!(
            r#"
            const el = document.getElementById("{SCROLL_VIEWPORT_ID}");
            if (el) {{
                el.scrollTo({{ top: 0, behavior: "smooth" }});
            }}
            "#
        ));
        // Programmatic jumps do not always fire a scroll event, so clear
        // the button state here as well.
        show_move_to_top.set(false);
    };

    rsx! {
        div {
            class: "relative flex-1 min-h-0",

            div {
                id: "{SCROLL_VIEWPORT_ID}",
                class: "h-full overflow-y-auto flex flex-col gap-2 pr-2",
                onscroll: on_scroll,

                if is_empty && !props.is_loading {
                    div {
                        class: "text-gray-400 text-center py-8",
                        "No members in this category yet."
                    }
                }

                for member in props.members.iter() {
                    MemberRow {
                        key: "{member.id}",
                        member: member.clone(),
                        is_dragging: props.dragging_id == Some(member.id),
                        on_drag_start: {
                            let id = member.id;
                            move |pointer| props.on_drag_start.call((id, pointer))
                        },
                        on_drag_move: move |pointer| props.on_drag_move.call(pointer),
                        on_drop: {
                            let id = member.id;
                            move |_| props.on_drop_on.call(id)
                        },
                        on_drag_end: move |_| props.on_drag_end.call(()),
                        on_edit: {
                            let id = member.id;
                            move |_| props.on_edit.call(id)
                        },
                        on_delete: {
                            let id = member.id;
                            move |_| props.on_delete.call(id)
                        },
                    }
                }

                if props.is_loading {
                    div {
                        class: "text-gray-400 text-center py-4",
                        "Loading..."
                    }
                }
            }

            if show_move_to_top() && !is_empty {
                button {
                    onclick: scroll_to_top,
                    class: "absolute bottom-4 right-4 px-4 py-2 bg-accent text-white border-0 rounded-full cursor-pointer shadow-lg",
                    "Move to top"
                }
            }

            if let Some((member, pointer)) = props.drag_preview.as_ref() {
                {
                    // Offset so the preview trails the cursor instead of
                    // sitting under it.
                    let position = format!("left: {}px; top: {}px;", pointer.x + 12.0, pointer.y + 12.0);
                    rsx! {
                        div {
                            class: "fixed pointer-events-none px-4 py-2 bg-dark-surface text-white rounded-lg shadow-xl opacity-80 z-50",
                            style: "{position}",
                            "{member.full_name}"
                        }
                    }
                }
            }
        }
    }
}
