//! In-memory roster backend adapter
//!
//! Stands in for the REST backend in tests and standalone runs. Unlike the
//! usual module-level mutable list, all state is owned by the adapter
//! instance and reached only through the `RosterApiPort` contract, so two
//! adapters never share anything.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use rosterly_domain::{Category, CategoryId, ImageId, Member, MemberId, MemberStatus};

use crate::ports::outbound::{ApiError, MemberPage, MemberUpsert, RosterApiPort};

#[derive(Default)]
struct RosterState {
    categories: Vec<Category>,
    /// Ordered members per category; vec order is the published order
    members: HashMap<CategoryId, Vec<Member>>,
    images: HashMap<ImageId, Vec<u8>>,
}

/// Self-contained in-memory implementation of the roster backend
pub struct InMemoryRosterApi {
    state: RwLock<RosterState>,
    next_member_id: AtomicI64,
    next_image_id: AtomicI64,
}

impl InMemoryRosterApi {
    /// Empty roster with the default category set.
    pub fn new() -> Self {
        Self::with_categories(vec![
            Category::new(CategoryId::from_i64(1), "Core Team"),
            Category::new(CategoryId::from_i64(2), "Advisory Board"),
            Category::new(CategoryId::from_i64(3), "Advisors"),
        ])
    }

    pub fn with_categories(categories: Vec<Category>) -> Self {
        let members = categories.iter().map(|c| (c.id, Vec::new())).collect();
        Self {
            state: RwLock::new(RosterState {
                categories,
                members,
                images: HashMap::new(),
            }),
            next_member_id: AtomicI64::new(1),
            next_image_id: AtomicI64::new(1),
        }
    }

    /// Default categories plus a handful of demo members, enough to
    /// exercise paging and both statuses out of the box.
    pub fn seeded() -> Self {
        let api = Self::new();
        let core = Category::new(CategoryId::from_i64(1), "Core Team");
        let advisors = Category::new(CategoryId::from_i64(3), "Advisors");
        let mut members = Vec::new();
        let names = [
            "Ada Lovelace",
            "Grace Hopper",
            "Alan Turing",
            "Katherine Johnson",
            "Edsger Dijkstra",
            "Barbara Liskov",
            "Donald Knuth",
            "Margaret Hamilton",
        ];
        for (i, name) in names.iter().enumerate() {
            let id = MemberId::from_i64(i as i64 + 1);
            let (category, status) = if i % 3 == 0 {
                (advisors.clone(), MemberStatus::Draft)
            } else {
                (core.clone(), MemberStatus::Published)
            };
            members.push(Member {
                id,
                full_name: (*name).to_string(),
                description: format!("{} has been with the team since the early days.", name),
                photo: None,
                status,
                category,
            });
        }
        api.seed_members(members);
        api
    }

    /// Seed members directly, preserving the given order.
    pub fn seed_members(&self, members: Vec<Member>) {
        let mut state = self.state.write().expect("roster state lock poisoned");
        for member in members {
            self.next_member_id
                .fetch_max(member.id.as_i64() + 1, Ordering::SeqCst);
            state
                .members
                .entry(member.category.id)
                .or_default()
                .push(member);
        }
    }

    fn category(state: &RosterState, id: CategoryId) -> Result<Category, ApiError> {
        state
            .categories
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| ApiError::status(404, format!("unknown category {id}")))
    }
}

impl Default for InMemoryRosterApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RosterApiPort for InMemoryRosterApi {
    async fn fetch_members(
        &self,
        category: CategoryId,
        page: u32,
        page_size: u32,
    ) -> Result<MemberPage, ApiError> {
        if page == 0 || page_size == 0 {
            return Err(ApiError::status(400, "page and page_size are 1-based"));
        }
        let state = self.state.read().expect("roster state lock poisoned");
        Self::category(&state, category)?;
        let all = state.members.get(&category).map_or(&[][..], |v| &v[..]);

        let total_pages = (all.len() as u32).div_ceil(page_size).max(1);
        let start = ((page - 1) * page_size) as usize;
        let end = (start + page_size as usize).min(all.len());
        let members = if start < all.len() {
            all[start..end].to_vec()
        } else {
            Vec::new()
        };

        Ok(MemberPage {
            members,
            total_pages,
        })
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
        let state = self.state.read().expect("roster state lock poisoned");
        Ok(state.categories.clone())
    }

    async fn create_member(&self, upsert: MemberUpsert) -> Result<Member, ApiError> {
        let mut state = self.state.write().expect("roster state lock poisoned");
        let category = Self::category(&state, upsert.category_id)?;
        let member = Member {
            id: MemberId::from_i64(self.next_member_id.fetch_add(1, Ordering::SeqCst)),
            full_name: upsert.full_name,
            description: upsert.description,
            photo: upsert.photo,
            status: upsert.status,
            category,
        };
        state
            .members
            .entry(upsert.category_id)
            .or_default()
            .push(member.clone());
        Ok(member)
    }

    async fn update_member(&self, id: MemberId, upsert: MemberUpsert) -> Result<(), ApiError> {
        let mut state = self.state.write().expect("roster state lock poisoned");
        let category = Self::category(&state, upsert.category_id)?;

        let mut existing = None;
        for members in state.members.values_mut() {
            if let Some(pos) = members.iter().position(|m| m.id == id) {
                existing = Some(members.remove(pos));
                break;
            }
        }
        let _ = existing.ok_or_else(|| ApiError::status(404, format!("unknown member {id}")))?;

        let updated = Member {
            id,
            full_name: upsert.full_name,
            description: upsert.description,
            photo: upsert.photo,
            status: upsert.status,
            category,
        };
        state
            .members
            .entry(upsert.category_id)
            .or_default()
            .push(updated);
        Ok(())
    }

    async fn delete_member(&self, id: MemberId) -> Result<(), ApiError> {
        let mut state = self.state.write().expect("roster state lock poisoned");
        for members in state.members.values_mut() {
            if let Some(pos) = members.iter().position(|m| m.id == id) {
                members.remove(pos);
                return Ok(());
            }
        }
        Err(ApiError::status(404, format!("unknown member {id}")))
    }

    async fn reorder_members(
        &self,
        category: CategoryId,
        ordered_ids: Vec<MemberId>,
    ) -> Result<(), ApiError> {
        let mut state = self.state.write().expect("roster state lock poisoned");
        Self::category(&state, category)?;
        let members = state.members.entry(category).or_default();

        // Listed ids first in the requested order, unlisted members keep
        // their relative order after them.
        members.sort_by_key(|m| {
            ordered_ids
                .iter()
                .position(|id| *id == m.id)
                .unwrap_or(usize::MAX)
        });
        Ok(())
    }

    async fn upload_image(&self, _filename: String, bytes: Vec<u8>) -> Result<ImageId, ApiError> {
        let mut state = self.state.write().expect("roster state lock poisoned");
        let id = ImageId::from_i64(self.next_image_id.fetch_add(1, Ordering::SeqCst));
        state.images.insert(id, bytes);
        Ok(id)
    }

    async fn delete_image(&self, id: ImageId) -> Result<(), ApiError> {
        let mut state = self.state.write().expect("roster state lock poisoned");
        state.images.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosterly_domain::MemberStatus;

    fn upsert(name: &str, category: i64) -> MemberUpsert {
        MemberUpsert {
            full_name: name.to_string(),
            description: String::new(),
            photo: None,
            status: MemberStatus::Draft,
            category_id: CategoryId::from_i64(category),
        }
    }

    #[tokio::test]
    async fn test_pagination_math() {
        let api = InMemoryRosterApi::new();
        for i in 0..12 {
            api.create_member(upsert(&format!("Member {i}"), 1))
                .await
                .expect("create");
        }

        let page1 = api
            .fetch_members(CategoryId::from_i64(1), 1, 5)
            .await
            .expect("page 1");
        assert_eq!(page1.members.len(), 5);
        assert_eq!(page1.total_pages, 3);

        let page3 = api
            .fetch_members(CategoryId::from_i64(1), 3, 5)
            .await
            .expect("page 3");
        assert_eq!(page3.members.len(), 2);

        let past_end = api
            .fetch_members(CategoryId::from_i64(1), 4, 5)
            .await
            .expect("past end");
        assert!(past_end.members.is_empty());
    }

    #[tokio::test]
    async fn test_empty_category_reports_one_page() {
        let api = InMemoryRosterApi::new();
        let page = api
            .fetch_members(CategoryId::from_i64(2), 1, 5)
            .await
            .expect("fetch");
        assert!(page.members.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[tokio::test]
    async fn test_reorder_persists_requested_order() {
        let api = InMemoryRosterApi::new();
        let a = api.create_member(upsert("Ada", 1)).await.expect("create");
        let b = api.create_member(upsert("Bea", 1)).await.expect("create");
        let c = api.create_member(upsert("Cal", 1)).await.expect("create");

        api.reorder_members(CategoryId::from_i64(1), vec![b.id, c.id, a.id])
            .await
            .expect("reorder");

        let page = api
            .fetch_members(CategoryId::from_i64(1), 1, 10)
            .await
            .expect("fetch");
        let names: Vec<&str> = page.members.iter().map(|m| m.full_name.as_str()).collect();
        assert_eq!(names, vec!["Bea", "Cal", "Ada"]);
    }

    #[tokio::test]
    async fn test_update_can_move_member_between_categories() {
        let api = InMemoryRosterApi::new();
        let m = api.create_member(upsert("Ada", 1)).await.expect("create");

        api.update_member(m.id, upsert("Ada", 2)).await.expect("update");

        let core = api
            .fetch_members(CategoryId::from_i64(1), 1, 10)
            .await
            .expect("fetch");
        assert!(core.members.is_empty());
        let advisory = api
            .fetch_members(CategoryId::from_i64(2), 1, 10)
            .await
            .expect("fetch");
        assert_eq!(advisory.members.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_unknown_member_is_not_found() {
        let api = InMemoryRosterApi::new();
        let err = api
            .delete_member(MemberId::from_i64(99))
            .await
            .expect_err("unknown member");
        assert!(matches!(err, ApiError::Status { status: 404, .. }));
    }
}
