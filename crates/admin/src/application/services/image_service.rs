//! Image Service - member photo upload and replacement
//!
//! The edit workflow only needs "image changed -> stable reference id"; the
//! encoding mechanism is the adapter's concern. Client-side size and format
//! checks run before any upload so the form can reject bad files inline.

use std::sync::Arc;

use rosterly_domain::ImageId;

use crate::application::dto::FieldError;
use crate::application::error::ServiceError;
use crate::ports::outbound::RosterApiPort;

/// Maximum accepted photo size
pub const MAX_IMAGE_BYTES: usize = 2 * 1024 * 1024;

/// Accepted photo file extensions (lowercase)
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Image service for member photos
#[derive(Clone)]
pub struct ImageService {
    api: Arc<dyn RosterApiPort>,
}

impl ImageService {
    pub fn new(api: Arc<dyn RosterApiPort>) -> Self {
        Self { api }
    }

    /// Upload a new photo, returning its stable reference id.
    pub async fn upload(&self, filename: &str, bytes: Vec<u8>) -> Result<ImageId, ServiceError> {
        validate_image(filename, &bytes).map_err(|e| ServiceError::Validation(vec![e]))?;
        let id = self.api.upload_image(filename.to_string(), bytes).await?;
        Ok(id)
    }

    /// Replace an existing photo: upload the new one, then drop the old
    /// reference. A failed cleanup of the old image is logged and swallowed;
    /// the new reference is already live and must not be lost.
    pub async fn replace(
        &self,
        old: ImageId,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<ImageId, ServiceError> {
        let new_id = self.upload(filename, bytes).await?;
        if let Err(e) = self.api.delete_image(old).await {
            tracing::warn!(image_id = old.as_i64(), error = %e, "failed to delete replaced image");
        }
        Ok(new_id)
    }

    /// Remove a photo reference.
    pub async fn remove(&self, id: ImageId) -> Result<(), ServiceError> {
        self.api.delete_image(id).await?;
        Ok(())
    }
}

fn validate_image(filename: &str, bytes: &[u8]) -> Result<(), FieldError> {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());
    match extension {
        Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => {}
        _ => {
            return Err(FieldError::new(
                "photo",
                format!("Unsupported image format; use one of: {}", ALLOWED_EXTENSIONS.join(", ")),
            ))
        }
    }
    if bytes.is_empty() {
        return Err(FieldError::new("photo", "Image file is empty"));
    }
    if bytes.len() > MAX_IMAGE_BYTES {
        return Err(FieldError::new(
            "photo",
            format!("Image exceeds the {} MiB limit", MAX_IMAGE_BYTES / (1024 * 1024)),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockRosterApiPort;

    #[tokio::test]
    async fn test_unsupported_format_blocks_upload() {
        let mut api = MockRosterApiPort::new();
        api.expect_upload_image().times(0);

        let service = ImageService::new(Arc::new(api));
        let err = service
            .upload("portrait.gif", vec![1, 2, 3])
            .await
            .expect_err("gif must be rejected");
        assert!(err.field_errors().is_some());
    }

    #[tokio::test]
    async fn test_oversized_image_blocks_upload() {
        let mut api = MockRosterApiPort::new();
        api.expect_upload_image().times(0);

        let service = ImageService::new(Arc::new(api));
        let result = service
            .upload("portrait.png", vec![0; MAX_IMAGE_BYTES + 1])
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_replace_uploads_then_deletes_old() {
        let mut api = MockRosterApiPort::new();
        api.expect_upload_image()
            .times(1)
            .returning(|_, _| Ok(ImageId::from_i64(8)));
        api.expect_delete_image()
            .withf(|id| *id == ImageId::from_i64(3))
            .times(1)
            .returning(|_| Ok(()));

        let service = ImageService::new(Arc::new(api));
        let new_id = service
            .replace(ImageId::from_i64(3), "portrait.jpg", vec![1; 16])
            .await
            .expect("replace should succeed");
        assert_eq!(new_id, ImageId::from_i64(8));
    }
}
