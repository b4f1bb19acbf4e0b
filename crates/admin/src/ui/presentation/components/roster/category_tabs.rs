//! Category Tabs - one tab per roster category

use dioxus::prelude::*;

use rosterly_domain::{Category, CategoryId};

/// Props for CategoryTabs
#[derive(Props, Clone, PartialEq)]
pub struct CategoryTabsProps {
    pub categories: Vec<Category>,
    pub active: Option<CategoryId>,
    pub on_select: EventHandler<CategoryId>,
}

/// Category Tabs component
#[component]
pub fn CategoryTabs(props: CategoryTabsProps) -> Element {
    rsx! {
        div {
            class: "flex gap-2 border-b border-gray-700 pb-2",
            for category in props.categories.iter() {
                {
                    let id = category.id;
                    let is_active = props.active == Some(id);
                    let class = if is_active {
                        "px-4 py-2 bg-green-500 text-white border-0 rounded-t-lg cursor-pointer font-medium"
                    } else {
                        "px-4 py-2 bg-transparent text-gray-400 border-0 rounded-t-lg cursor-pointer"
                    };
                    rsx! {
                        button {
                            key: "{id}",
                            class: "{class}",
                            onclick: move |_| props.on_select.call(id),
                            "{category.name}"
                        }
                    }
                }
            }
        }
    }
}
