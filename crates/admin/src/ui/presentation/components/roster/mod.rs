//! Roster back-office components

pub mod category_tabs;
pub mod confirm_dialog;
pub mod edit_member_modal;
pub mod member_list;
pub mod member_row;
pub mod roster_page;

pub use category_tabs::CategoryTabs;
pub use confirm_dialog::ConfirmDialog;
pub use edit_member_modal::EditMemberModal;
pub use member_list::MemberList;
pub use member_row::MemberRow;
pub use roster_page::RosterPage;
