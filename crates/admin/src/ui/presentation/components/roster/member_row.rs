//! Member Row - one draggable roster entry

use dioxus::prelude::*;

use rosterly_domain::{Member, MemberStatus};

use crate::state::PointerPosition;

/// Props for MemberRow
#[derive(Props, Clone, PartialEq)]
pub struct MemberRowProps {
    pub member: Member,
    /// The row currently being dragged is dimmed in place; the floating
    /// preview is rendered by the list.
    pub is_dragging: bool,
    pub on_drag_start: EventHandler<PointerPosition>,
    pub on_drag_move: EventHandler<PointerPosition>,
    pub on_drop: EventHandler<()>,
    pub on_drag_end: EventHandler<()>,
    pub on_edit: EventHandler<()>,
    pub on_delete: EventHandler<()>,
}

/// Member Row component
#[component]
pub fn MemberRow(props: MemberRowProps) -> Element {
    let row_class = if props.is_dragging {
        "flex items-center gap-4 p-4 bg-dark-surface rounded-lg opacity-40 cursor-grabbing"
    } else {
        "flex items-center gap-4 p-4 bg-dark-surface rounded-lg cursor-grab"
    };

    let (badge_class, badge_label) = match props.member.status {
        MemberStatus::Published => (
            "px-2 py-1 bg-green-500 bg-opacity-20 text-green-500 rounded text-xs",
            "Published",
        ),
        MemberStatus::Draft => (
            "px-2 py-1 bg-gray-500 bg-opacity-20 text-gray-400 rounded text-xs",
            "Draft",
        ),
    };

    rsx! {
        div {
            class: "{row_class}",
            draggable: true,
            ondragstart: move |e| {
                let coords = e.client_coordinates();
                props.on_drag_start.call(PointerPosition::new(coords.x, coords.y));
            },
            ondrag: move |e| {
                let coords = e.client_coordinates();
                props.on_drag_move.call(PointerPosition::new(coords.x, coords.y));
            },
            // Without prevent_default the platform refuses the drop.
            ondragover: move |e| e.prevent_default(),
            ondrop: move |e| {
                e.prevent_default();
                props.on_drop.call(());
            },
            ondragend: move |_| props.on_drag_end.call(()),

            div {
                class: "flex-1 flex flex-col gap-1",
                div {
                    class: "flex items-center gap-2",
                    span {
                        class: "text-white font-medium",
                        "{props.member.full_name}"
                    }
                    span {
                        class: "{badge_class}",
                        "{badge_label}"
                    }
                }
                if !props.member.description.is_empty() {
                    span {
                        class: "text-gray-400 text-sm",
                        "{props.member.description}"
                    }
                }
            }

            div {
                class: "flex gap-2",
                button {
                    onclick: move |e| {
                        e.stop_propagation();
                        props.on_edit.call(());
                    },
                    class: "px-3 py-1 bg-gray-700 text-white border-0 rounded-lg cursor-pointer text-sm",
                    "Edit"
                }
                button {
                    onclick: move |e| {
                        e.stop_propagation();
                        props.on_delete.call(());
                    },
                    class: "px-3 py-1 bg-red-500 bg-opacity-20 text-red-500 border-0 rounded-lg cursor-pointer text-sm",
                    "Delete"
                }
            }
        }
    }
}
