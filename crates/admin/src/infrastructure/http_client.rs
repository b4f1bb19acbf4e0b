//! HTTP roster backend adapter
//!
//! Implements `RosterApiPort` against the production REST API. Wire-format
//! DTOs live in `rosterly-shared`; this adapter owns the wire/domain
//! conversions so nothing above it sees raw ids.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use rosterly_domain::{Category, CategoryId, ImageId, Member, MemberId, MemberStatus};
use rosterly_shared::{
    CategoryData, CreateMemberRequest, ImageData, MemberData, MemberPageData, MemberStatusData,
    ReorderMembersRequest, UpdateMemberRequest,
};

use crate::ports::outbound::{ApiError, MemberPage, MemberUpsert, RosterApiPort};

const REQUEST_TIMEOUT_SECS: u64 = 15;

/// Client for the roster REST API
#[derive(Clone)]
pub struct HttpRosterApi {
    client: Client,
    base_url: String,
}

impl HttpRosterApi {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(ApiError::status(status.as_u16(), message))
    }
}

#[async_trait]
impl RosterApiPort for HttpRosterApi {
    async fn fetch_members(
        &self,
        category: CategoryId,
        page: u32,
        page_size: u32,
    ) -> Result<MemberPage, ApiError> {
        let response = self
            .client
            .get(self.url("/api/members"))
            .query(&[
                ("category_id", category.as_i64().to_string()),
                ("page", page.to_string()),
                ("page_size", page_size.to_string()),
            ])
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        let page_data: MemberPageData = Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::decode(e.to_string()))?;

        Ok(MemberPage {
            members: page_data.members.into_iter().map(member_from_data).collect(),
            total_pages: page_data.total_pages,
        })
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
        let response = self
            .client
            .get(self.url("/api/categories"))
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        let categories: Vec<CategoryData> = Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::decode(e.to_string()))?;

        Ok(categories.into_iter().map(category_from_data).collect())
    }

    async fn create_member(&self, upsert: MemberUpsert) -> Result<Member, ApiError> {
        let request = CreateMemberRequest {
            full_name: upsert.full_name,
            description: upsert.description,
            photo_id: upsert.photo.map(|p| p.as_i64()),
            status: status_to_data(upsert.status),
            category_id: upsert.category_id.as_i64(),
        };
        let response = self
            .client
            .post(self.url("/api/members"))
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        let member: MemberData = Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::decode(e.to_string()))?;

        Ok(member_from_data(member))
    }

    async fn update_member(&self, id: MemberId, upsert: MemberUpsert) -> Result<(), ApiError> {
        let request = UpdateMemberRequest {
            full_name: upsert.full_name,
            description: upsert.description,
            photo_id: upsert.photo.map(|p| p.as_i64()),
            status: status_to_data(upsert.status),
            category_id: upsert.category_id.as_i64(),
        };
        let response = self
            .client
            .put(self.url(&format!("/api/members/{}", id.as_i64())))
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        Self::check(response).await?;
        Ok(())
    }

    async fn delete_member(&self, id: MemberId) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("/api/members/{}", id.as_i64())))
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        Self::check(response).await?;
        Ok(())
    }

    async fn reorder_members(
        &self,
        category: CategoryId,
        ordered_ids: Vec<MemberId>,
    ) -> Result<(), ApiError> {
        let request = ReorderMembersRequest {
            category_id: category.as_i64(),
            ordered_ids: ordered_ids.iter().map(|id| id.as_i64()).collect(),
        };
        let response = self
            .client
            .put(self.url("/api/members/reorder"))
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        Self::check(response).await?;
        Ok(())
    }

    async fn upload_image(&self, filename: String, bytes: Vec<u8>) -> Result<ImageId, ApiError> {
        let response = self
            .client
            .post(self.url("/api/images"))
            .query(&[("filename", filename)])
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(bytes)
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        let image: ImageData = Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::decode(e.to_string()))?;

        Ok(ImageId::from_i64(image.id))
    }

    async fn delete_image(&self, id: ImageId) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("/api/images/{}", id.as_i64())))
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        Self::check(response).await?;
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Wire/domain conversions
// -----------------------------------------------------------------------------

fn member_from_data(data: MemberData) -> Member {
    Member {
        id: MemberId::from_i64(data.id),
        full_name: data.full_name,
        description: data.description,
        photo: data.photo_id.map(ImageId::from_i64),
        status: status_from_data(data.status),
        category: category_from_data(data.category),
    }
}

fn category_from_data(data: CategoryData) -> Category {
    Category {
        id: CategoryId::from_i64(data.id),
        name: data.name,
        description: data.description,
    }
}

fn status_from_data(status: MemberStatusData) -> MemberStatus {
    match status {
        MemberStatusData::Draft => MemberStatus::Draft,
        MemberStatusData::Published => MemberStatus::Published,
    }
}

fn status_to_data(status: MemberStatus) -> MemberStatusData {
    match status {
        MemberStatus::Draft => MemberStatusData::Draft,
        MemberStatus::Published => MemberStatusData::Published,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_conversion_maps_every_field() {
        let data = MemberData {
            id: 3,
            full_name: "Ada Smith".to_string(),
            description: "desc".to_string(),
            photo_id: Some(7),
            status: MemberStatusData::Published,
            category: CategoryData {
                id: 1,
                name: "Core Team".to_string(),
                description: None,
            },
        };

        let member = member_from_data(data);
        assert_eq!(member.id, MemberId::from_i64(3));
        assert_eq!(member.photo, Some(ImageId::from_i64(7)));
        assert_eq!(member.status, MemberStatus::Published);
        assert_eq!(member.category.id, CategoryId::from_i64(1));
    }

    #[test]
    fn test_status_roundtrip() {
        for status in [MemberStatus::Draft, MemberStatus::Published] {
            assert_eq!(status_from_data(status_to_data(status)), status);
        }
    }

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let api = HttpRosterApi::new("http://localhost:8080/");
        assert_eq!(api.url("/api/members"), "http://localhost:8080/api/members");
    }
}
