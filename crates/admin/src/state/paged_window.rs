//! Paged member store - the loaded window of one category's roster
//!
//! Holds the currently loaded pages for the active category and the
//! pagination state machine around them. Fetches themselves happen outside:
//! `set_category`/`begin_next_page` arm a fetch and hand back a
//! [`FetchTicket`] tagged with the window generation; the driver awaits the
//! backend and settles the ticket with `complete_fetch`/`fail_fetch`. A
//! ticket whose generation no longer matches (the window was reset while
//! the fetch was in flight) is discarded silently, so stale pages never
//! reach the window.
//!
//! Search switches the store between two explicit modes: `Paging` (normal
//! infinite scroll) and `Filtering` (client-side narrowing of the loaded
//! window, no fetches).

use rosterly_domain::{CategoryId, Member, MemberId};

use crate::ports::outbound::MemberPage;

/// Whether the window is paging from the backend or filtering client-side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowMode {
    Paging,
    Filtering,
}

/// Permission to run one page fetch against the backend
///
/// Carries the state the fetch was issued for; `complete_fetch` uses the
/// generation to drop results that resolved after a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    pub page: u32,
    pub category: CategoryId,
}

/// The loaded window of roster members for one category
#[derive(Debug, Clone)]
pub struct PagedMemberStore {
    members: Vec<Member>,
    category: Option<CategoryId>,
    search_query: String,
    mode: WindowMode,
    /// Next page to request; pages are 1-based
    current_page: u32,
    /// Unknown until the first page of a fresh window resolves
    total_pages: Option<u32>,
    is_loading: bool,
    /// Bumped on every reset; stale fetches carry an older value
    generation: u64,
    page_size: u32,
}

impl PagedMemberStore {
    pub fn new(page_size: u32) -> Self {
        Self {
            members: Vec::new(),
            category: None,
            search_query: String::new(),
            mode: WindowMode::Paging,
            current_page: 1,
            total_pages: None,
            is_loading: false,
            generation: 0,
            page_size,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn category(&self) -> Option<CategoryId> {
        self.category
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn mode(&self) -> WindowMode {
        self.mode
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// More pages may exist: unknown total counts as "maybe".
    pub fn has_more(&self) -> bool {
        self.mode == WindowMode::Paging
            && self
                .total_pages
                .map_or(true, |total| self.current_page <= total)
    }

    // -------------------------------------------------------------------------
    // Pagination state machine
    // -------------------------------------------------------------------------

    /// Switch to a category: clear the window and arm a page-1 fetch.
    pub fn set_category(&mut self, category: CategoryId) -> Option<FetchTicket> {
        self.category = Some(category);
        self.search_query.clear();
        self.mode = WindowMode::Paging;
        self.reset_window();
        self.begin_next_page()
    }

    /// Arm a fetch for the next page.
    ///
    /// No-op while a fetch is in flight, while filtering, before any
    /// category is selected, or once the known last page has been loaded.
    pub fn begin_next_page(&mut self) -> Option<FetchTicket> {
        let category = self.category?;
        if self.is_loading || !self.has_more() {
            return None;
        }
        self.is_loading = true;
        Some(FetchTicket {
            generation: self.generation,
            page: self.current_page,
            category,
        })
    }

    /// Settle a successful fetch. Returns `true` if the page was applied,
    /// `false` if it was stale and discarded.
    pub fn complete_fetch(&mut self, ticket: FetchTicket, page: MemberPage) -> bool {
        if ticket.generation != self.generation {
            // Resolved after a reset; the window has moved on.
            return false;
        }
        // Total page count is taken while the window is fresh and then
        // pinned for the life of the window.
        if self.total_pages.is_none() {
            self.total_pages = Some(page.total_pages);
        }
        self.members.extend(page.members);
        self.current_page += 1;
        self.is_loading = false;
        true
    }

    /// Settle a failed fetch: release the in-flight guard, leave the window
    /// at its last good state.
    pub fn fail_fetch(&mut self, ticket: FetchTicket) {
        if ticket.generation == self.generation {
            self.is_loading = false;
        }
    }

    /// Update the search query.
    ///
    /// Non-empty queries narrow the loaded window client-side and issue no
    /// fetch. Clearing a previously non-empty query resets the window and
    /// arms a page-1 refetch.
    pub fn set_search_query(&mut self, query: &str) -> Option<FetchTicket> {
        let was_filtering = self.mode == WindowMode::Filtering;
        if query.is_empty() {
            self.search_query.clear();
            self.mode = WindowMode::Paging;
            if was_filtering {
                self.reset_window();
                return self.begin_next_page();
            }
            return None;
        }
        self.search_query = query.to_string();
        self.mode = WindowMode::Filtering;
        None
    }

    // -------------------------------------------------------------------------
    // Window mutations (store is the single owner of the member list)
    // -------------------------------------------------------------------------

    /// Move the element at `from` so it lands at `to`.
    ///
    /// Splice-out then splice-in: the target index is interpreted against
    /// the already-shortened list. Same-index and out-of-range moves are
    /// no-ops.
    pub fn reorder(&mut self, from: usize, to: usize) {
        if from == to || from >= self.members.len() || to >= self.members.len() {
            return;
        }
        let member = self.members.remove(from);
        self.members.insert(to, member);
    }

    /// Optimistically remove a member from the window.
    pub fn remove_member(&mut self, id: MemberId) {
        self.members.retain(|m| m.id != id);
    }

    /// Replace a member in place, or append when it is new to the window.
    pub fn upsert(&mut self, member: Member) {
        if let Some(existing) = self.members.iter_mut().find(|m| m.id == member.id) {
            *existing = member;
        } else {
            self.members.push(member);
        }
    }

    /// Ids in current window order, for the reorder commit.
    pub fn ordered_ids(&self) -> Vec<MemberId> {
        self.members.iter().map(|m| m.id).collect()
    }

    fn reset_window(&mut self) {
        self.members.clear();
        self.current_page = 1;
        self.total_pages = None;
        self.is_loading = false;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosterly_domain::{Category, MemberStatus};

    fn member(id: i64, name: &str) -> Member {
        Member {
            id: MemberId::from_i64(id),
            full_name: name.to_string(),
            description: String::new(),
            photo: None,
            status: MemberStatus::Draft,
            category: Category::new(CategoryId::from_i64(1), "Core Team"),
        }
    }

    fn page(ids: &[i64], total_pages: u32) -> MemberPage {
        MemberPage {
            members: ids.iter().map(|id| member(*id, "Ada Smith")).collect(),
            total_pages,
        }
    }

    const CORE: CategoryId = CategoryId::from_i64(1);

    #[test]
    fn test_first_page_of_twelve_members_at_page_size_five() {
        // 12 matching members at page size 5: first page yields 5 members,
        // next page 2, total 3 pages.
        let mut store = PagedMemberStore::new(5);
        let ticket = store.set_category(CORE).expect("page-1 fetch armed");
        assert_eq!(ticket.page, 1);

        assert!(store.complete_fetch(ticket, page(&[1, 2, 3, 4, 5], 3)));
        assert_eq!(store.members().len(), 5);
        assert_eq!(store.current_page(), 2);
        assert_eq!(store.total_pages(), Some(3));
        assert!(store.has_more());
    }

    #[test]
    fn test_pagination_is_monotonic_and_bounded() {
        let mut store = PagedMemberStore::new(2);
        let t1 = store.set_category(CORE).expect("fetch armed");
        store.complete_fetch(t1, page(&[1, 2], 2));

        let t2 = store.begin_next_page().expect("second page armed");
        assert_eq!(t2.page, 2);
        store.complete_fetch(t2, page(&[3, 4], 2));
        assert_eq!(store.current_page(), 3);
        assert!(!store.has_more());

        // Past the known last page nothing is armed.
        assert!(store.begin_next_page().is_none());
        assert_eq!(store.members().len(), 4);
    }

    #[test]
    fn test_in_flight_guard_blocks_duplicate_fetch() {
        let mut store = PagedMemberStore::new(5);
        let ticket = store.set_category(CORE).expect("fetch armed");

        // A second loadNextPage while page 1 is in flight is a no-op.
        assert!(store.begin_next_page().is_none());

        store.complete_fetch(ticket, page(&[1], 1));
        assert!(!store.is_loading());
    }

    #[test]
    fn test_reset_clears_window_before_any_fetch_resolves() {
        let mut store = PagedMemberStore::new(5);
        let t1 = store.set_category(CORE).expect("fetch armed");
        store.complete_fetch(t1, page(&[1, 2], 2));

        store.set_category(CategoryId::from_i64(2));
        assert!(store.members().is_empty());
        assert_eq!(store.current_page(), 1);
        assert_eq!(store.total_pages(), None);
    }

    #[test]
    fn test_stale_fetch_after_reset_is_discarded() {
        let mut store = PagedMemberStore::new(5);
        let stale = store.set_category(CORE).expect("fetch armed");

        // Category changes while page 1 is still in flight.
        let fresh = store
            .set_category(CategoryId::from_i64(2))
            .expect("fetch armed");

        assert!(!store.complete_fetch(stale, page(&[1, 2], 2)));
        assert!(store.members().is_empty());

        assert!(store.complete_fetch(fresh, page(&[9], 1)));
        assert_eq!(store.members().len(), 1);
    }

    #[test]
    fn test_failed_fetch_releases_guard_and_keeps_window() {
        let mut store = PagedMemberStore::new(5);
        let t1 = store.set_category(CORE).expect("fetch armed");
        store.complete_fetch(t1, page(&[1, 2], 2));

        let t2 = store.begin_next_page().expect("fetch armed");
        store.fail_fetch(t2);

        assert!(!store.is_loading());
        assert_eq!(store.members().len(), 2);
        // The guard is released, so a retry can be armed.
        assert!(store.begin_next_page().is_some());
    }

    #[test]
    fn test_search_filters_without_fetching() {
        let mut store = PagedMemberStore::new(5);
        let t1 = store.set_category(CORE).expect("fetch armed");
        store.complete_fetch(t1, page(&[1, 2, 3], 1));

        assert!(store.set_search_query("ada").is_none());
        assert_eq!(store.mode(), WindowMode::Filtering);
        // No paging while filtering.
        assert!(store.begin_next_page().is_none());
        // The loaded window itself is untouched.
        assert_eq!(store.members().len(), 3);
    }

    #[test]
    fn test_clearing_search_resets_and_refetches() {
        let mut store = PagedMemberStore::new(5);
        let t1 = store.set_category(CORE).expect("fetch armed");
        store.complete_fetch(t1, page(&[1, 2, 3], 1));
        store.set_search_query("ada");

        let ticket = store.set_search_query("").expect("page-1 refetch armed");
        assert_eq!(ticket.page, 1);
        assert!(store.members().is_empty());
        assert_eq!(store.mode(), WindowMode::Paging);
    }

    #[test]
    fn test_clearing_an_already_empty_query_is_a_noop() {
        let mut store = PagedMemberStore::new(5);
        let t1 = store.set_category(CORE).expect("fetch armed");
        store.complete_fetch(t1, page(&[1], 1));

        assert!(store.set_search_query("").is_none());
        assert_eq!(store.members().len(), 1);
    }

    #[test]
    fn test_reorder_moves_element_and_preserves_relative_order() {
        let mut store = PagedMemberStore::new(5);
        let t1 = store.set_category(CORE).expect("fetch armed");
        store.complete_fetch(t1, page(&[1, 2, 3], 1));

        // [A,B,C] reorder(0,2) -> [B,C,A]
        store.reorder(0, 2);
        let ids: Vec<i64> = store.members().iter().map(|m| m.id.as_i64()).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_reorder_same_index_and_out_of_range_are_noops() {
        let mut store = PagedMemberStore::new(5);
        let t1 = store.set_category(CORE).expect("fetch armed");
        store.complete_fetch(t1, page(&[1, 2, 3], 1));

        store.reorder(1, 1);
        store.reorder(7, 0);
        store.reorder(0, 7);
        let ids: Vec<i64> = store.members().iter().map(|m| m.id.as_i64()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_remove_and_upsert() {
        let mut store = PagedMemberStore::new(5);
        let t1 = store.set_category(CORE).expect("fetch armed");
        store.complete_fetch(t1, page(&[1, 2], 1));

        store.remove_member(MemberId::from_i64(1));
        assert_eq!(store.members().len(), 1);

        let mut updated = member(2, "Bea Jones");
        updated.status = MemberStatus::Published;
        store.upsert(updated);
        assert_eq!(store.members().len(), 1);
        assert_eq!(store.members()[0].full_name, "Bea Jones");

        store.upsert(member(7, "Cal Reyes"));
        assert_eq!(store.ordered_ids(), vec![MemberId::from_i64(2), MemberId::from_i64(7)]);
    }

    #[test]
    fn test_window_never_exceeds_loaded_pages_times_page_size() {
        let mut store = PagedMemberStore::new(3);
        let t1 = store.set_category(CORE).expect("fetch armed");
        store.complete_fetch(t1, page(&[1, 2, 3], 2));
        let t2 = store.begin_next_page().expect("fetch armed");
        store.complete_fetch(t2, page(&[4, 5], 2));

        let pages_loaded = (store.current_page() - 1) as usize;
        assert!(store.members().len() <= pages_loaded * store.page_size() as usize);
    }
}
