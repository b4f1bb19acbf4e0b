//! Pure UI-state machines for the roster page
//!
//! Everything in this module is framework-free and synchronous: the Dioxus
//! layer drives these machines from event handlers and awaited service
//! calls, and unit tests drive them directly. No module here touches the
//! network or the platform.

pub mod drag;
pub mod edit_workflow;
pub mod filter;
pub mod paged_window;
pub mod scroll;

pub use drag::{DragController, PointerPosition, ReorderMove};
pub use edit_workflow::{EditStage, EditWorkflow, WorkflowEffect};
pub use filter::{visible_members, StatusFilter};
pub use paged_window::{FetchTicket, PagedMemberStore, WindowMode};
pub use scroll::{evaluate_scroll, ScrollDecision, ScrollMetrics, LOAD_MORE_THRESHOLD_PX};
