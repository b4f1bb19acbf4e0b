//! Edit Member Modal - add or edit a roster member

use dioxus::prelude::*;

use rosterly_domain::{Category, CategoryId};

use crate::application::dto::{error_for_field, FieldError};
use crate::infrastructure::spawn_task;
use crate::state::{EditStage, EditWorkflow};
use crate::ui::presentation::services::use_image_service;

use super::confirm_dialog::ConfirmDialog;

/// Props for EditMemberModal
#[derive(Props, Clone, PartialEq)]
pub struct EditMemberModalProps {
    pub workflow: Signal<EditWorkflow>,
    pub categories: Vec<Category>,
    pub field_errors: Vec<FieldError>,
    pub is_saving: bool,
    pub on_save_draft: EventHandler<()>,
    pub on_submit_publish: EventHandler<()>,
    pub on_confirm: EventHandler<()>,
    pub on_cancel_confirm: EventHandler<()>,
    pub on_request_close: EventHandler<()>,
}

/// Edit Member Modal component
#[component]
pub fn EditMemberModal(props: EditMemberModalProps) -> Element {
    let image_service = use_image_service();
    let mut workflow = props.workflow;
    let mut photo_error: Signal<Option<String>> = use_signal(|| None);
    let mut is_uploading = use_signal(|| false);

    let wf = workflow.read();
    let Some(draft) = wf.draft().cloned() else {
        // Nothing to render once the workflow has closed.
        return rsx! {};
    };
    let is_add = wf.open_member().is_none();
    let stage = wf.stage();
    drop(wf);

    let title = if is_add { "Add Member" } else { "Edit Member" };

    let name_error = error_for_field(&props.field_errors, "full_name").map(|e| e.message.clone());
    let description_error =
        error_for_field(&props.field_errors, "description").map(|e| e.message.clone());

    let upload_photo = move |e: FormEvent| {
        let svc = image_service.clone();
        spawn_task(async move {
            let Some(file) = e.files().into_iter().next() else {
                return;
            };
            let name = file.name();
            let bytes = match file.read_bytes().await {
                Ok(bytes) => bytes.to_vec(),
                Err(_) => {
                    photo_error.set(Some("Could not read the selected file".to_string()));
                    return;
                }
            };
            is_uploading.set(true);
            photo_error.set(None);
            let previous = workflow.read().draft().and_then(|d| d.photo);
            let result = match previous {
                Some(old) => svc.replace(old, &name, bytes).await,
                None => svc.upload(&name, bytes).await,
            };
            match result {
                Ok(image_id) => {
                    workflow.write().update_draft(|d| d.photo = Some(image_id));
                }
                Err(e) => photo_error.set(Some(format!("Photo upload failed: {}", e))),
            }
            is_uploading.set(false);
        });
    };

    rsx! {
        div {
            class: "fixed inset-0 bg-black bg-opacity-75 flex items-center justify-center z-[1000]",
            onclick: move |_| props.on_request_close.call(()),
            div {
                class: "bg-dark-surface rounded-lg w-[90%] max-w-[600px] max-h-[90vh] overflow-y-auto flex flex-col",
                onclick: |e| e.stop_propagation(),

                // Header
                div {
                    class: "flex justify-between items-center p-6 border-b border-gray-700",
                    h2 {
                        class: "m-0 text-white text-xl",
                        "{title}"
                    }
                    button {
                        onclick: move |_| props.on_request_close.call(()),
                        class: "px-2 py-1 bg-transparent text-gray-400 border-0 cursor-pointer text-xl",
                        "×"
                    }
                }

                // Content
                div {
                    class: "p-6 flex flex-col gap-6",

                    // Full name
                    div {
                        label {
                            class: "block mb-2 text-gray-400 text-sm font-medium",
                            "Full Name *"
                        }
                        input {
                            r#type: "text",
                            value: "{draft.full_name}",
                            oninput: move |e| {
                                workflow.write().update_draft(|d| d.full_name = e.value());
                            },
                            placeholder: "Enter full name",
                            class: "w-full p-3 bg-dark-bg border border-gray-700 rounded-lg text-white text-base",
                        }
                        if let Some(err) = name_error.as_ref() {
                            span {
                                class: "block mt-1 text-red-500 text-sm",
                                "{err}"
                            }
                        }
                    }

                    // Description
                    div {
                        label {
                            class: "block mb-2 text-gray-400 text-sm font-medium",
                            "Description"
                        }
                        textarea {
                            value: "{draft.description}",
                            oninput: move |e| {
                                workflow.write().update_draft(|d| d.description = e.value());
                            },
                            placeholder: "Describe this member...",
                            rows: 4,
                            class: "w-full p-3 bg-dark-bg border border-gray-700 rounded-lg text-white text-base resize-y",
                        }
                        if let Some(err) = description_error.as_ref() {
                            span {
                                class: "block mt-1 text-red-500 text-sm",
                                "{err}"
                            }
                        }
                    }

                    // Category
                    div {
                        label {
                            class: "block mb-2 text-gray-400 text-sm font-medium",
                            "Category"
                        }
                        select {
                            value: "{draft.category_id}",
                            onchange: move |e| {
                                if let Ok(raw) = e.value().parse::<i64>() {
                                    workflow
                                        .write()
                                        .update_draft(|d| d.category_id = CategoryId::from_i64(raw));
                                }
                            },
                            class: "w-full p-3 bg-dark-bg border border-gray-700 rounded-lg text-white text-base",
                            for category in props.categories.iter() {
                                option {
                                    key: "{category.id}",
                                    value: "{category.id}",
                                    selected: category.id == draft.category_id,
                                    "{category.name}"
                                }
                            }
                        }
                    }

                    // Photo
                    div {
                        label {
                            class: "block mb-2 text-gray-400 text-sm font-medium",
                            "Photo"
                        }
                        if draft.photo.is_some() {
                            div {
                                class: "flex items-center gap-3",
                                span {
                                    class: "text-gray-400 text-sm",
                                    "Photo uploaded"
                                }
                                button {
                                    onclick: move |_| {
                                        workflow.write().update_draft(|d| d.photo = None);
                                    },
                                    class: "px-3 py-1 bg-gray-700 text-white border-0 rounded-lg cursor-pointer text-sm",
                                    "Remove"
                                }
                            }
                        } else {
                            input {
                                r#type: "file",
                                accept: ".png,.jpg,.jpeg,.webp",
                                disabled: *is_uploading.read(),
                                onchange: upload_photo,
                                class: "text-gray-400 text-sm",
                            }
                        }
                        if *is_uploading.read() {
                            span {
                                class: "block mt-1 text-gray-400 text-sm",
                                "Uploading..."
                            }
                        }
                        if let Some(err) = photo_error.read().as_ref() {
                            span {
                                class: "block mt-1 text-red-500 text-sm",
                                "{err}"
                            }
                        }
                    }
                }

                // Footer
                div {
                    class: "px-6 py-4 border-t border-gray-700 flex justify-end gap-3",
                    button {
                        onclick: move |_| props.on_request_close.call(()),
                        class: "px-4 py-2 bg-gray-700 text-white border-0 rounded-lg cursor-pointer",
                        "Cancel"
                    }
                    button {
                        onclick: move |_| props.on_save_draft.call(()),
                        disabled: props.is_saving,
                        class: "px-4 py-2 bg-gray-600 text-white border-0 rounded-lg cursor-pointer",
                        if props.is_saving {
                            "Saving..."
                        } else {
                            "Save as Draft"
                        }
                    }
                    button {
                        onclick: move |_| props.on_submit_publish.call(()),
                        disabled: props.is_saving,
                        class: "px-6 py-2 bg-green-500 text-white border-0 rounded-lg cursor-pointer font-medium",
                        "Publish"
                    }
                }
            }
        }

        if stage == EditStage::ConfirmingPublish {
            ConfirmDialog {
                title: "Publish Member".to_string(),
                message: "This member will become visible on the public site. Publish now?"
                    .to_string(),
                confirm_label: "Publish".to_string(),
                on_confirm: move |_| props.on_confirm.call(()),
                on_cancel: move |_| props.on_cancel_confirm.call(()),
            }
        }

        if stage == EditStage::ConfirmingDiscard {
            ConfirmDialog {
                title: "Discard Changes".to_string(),
                message: "You have unsaved changes. Discard them and close?".to_string(),
                confirm_label: "Discard".to_string(),
                on_confirm: move |_| props.on_confirm.call(()),
                on_cancel: move |_| props.on_cancel_confirm.call(()),
            }
        }
    }
}
