//! Confirm Dialog - shared confirmation step for destructive actions
//!
//! Publishing, discarding dirty edits, and deleting all route through this
//! dialog; the mutating call is only made after an explicit confirm.

use dioxus::prelude::*;

/// Props for ConfirmDialog
#[derive(Props, Clone, PartialEq)]
pub struct ConfirmDialogProps {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub on_confirm: EventHandler<()>,
    pub on_cancel: EventHandler<()>,
}

/// Confirm Dialog component
#[component]
pub fn ConfirmDialog(props: ConfirmDialogProps) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 bg-black bg-opacity-75 flex items-center justify-center z-[1100]",
            onclick: move |_| props.on_cancel.call(()),
            div {
                class: "bg-dark-surface rounded-lg w-[90%] max-w-[420px] p-6 flex flex-col gap-4",
                onclick: |e| e.stop_propagation(),

                h3 {
                    class: "m-0 text-white text-lg",
                    "{props.title}"
                }
                p {
                    class: "m-0 text-gray-400 text-sm",
                    "{props.message}"
                }

                div {
                    class: "flex justify-end gap-3",
                    button {
                        onclick: move |_| props.on_cancel.call(()),
                        class: "px-4 py-2 bg-gray-700 text-white border-0 rounded-lg cursor-pointer",
                        "Cancel"
                    }
                    button {
                        onclick: move |_| props.on_confirm.call(()),
                        class: "px-4 py-2 bg-green-500 text-white border-0 rounded-lg cursor-pointer font-medium",
                        "{props.confirm_label}"
                    }
                }
            }
        }
    }
}
