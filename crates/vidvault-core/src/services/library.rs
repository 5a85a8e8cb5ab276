//! Video library orchestration: listing, two-phase upload, deletion.

use crate::models::Video;
use crate::session::Identity;
use crate::storage::StorageBackend;
use crate::usage::{StorageUsage, UploadPlan};
use crate::{Error, Result};

/// Listing plus the usage derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct LibrarySnapshot {
    pub videos: Vec<Video>,
    pub usage: StorageUsage,
}

/// A mutation that succeeded.
///
/// `snapshot` is the refreshed listing, or `None` when the follow-up refresh
/// failed (the failure is logged; the mutation still happened).
#[derive(Debug, Clone, PartialEq)]
pub struct MutationOutcome {
    pub snapshot: Option<LibrarySnapshot>,
}

#[derive(Debug, Clone)]
pub struct LibraryService<S: StorageBackend> {
    storage: S,
    quota_mb: f64,
}

impl<S: StorageBackend> LibraryService<S> {
    pub const fn new(storage: S, quota_mb: f64) -> Self {
        Self { storage, quota_mb }
    }

    /// Usage to show before the first listing arrives.
    pub const fn empty_usage(&self) -> StorageUsage {
        StorageUsage::empty(self.quota_mb)
    }

    /// Fetch the listing and recompute usage.
    pub async fn refresh(&self, identity: &Identity) -> Result<LibrarySnapshot> {
        let videos = self.storage.list_videos(identity).await?;
        let usage = StorageUsage::from_videos(&videos, self.quota_mb);
        tracing::debug!(
            "Listed {} videos for {} ({:.2} MB used)",
            videos.len(),
            identity.subject,
            usage.used_mb
        );
        Ok(LibrarySnapshot { videos, usage })
    }

    /// Request a signed URL, PUT the file to it, then refresh once.
    pub async fn upload(&self, identity: &Identity, plan: UploadPlan) -> Result<MutationOutcome> {
        let UploadPlan { file, .. } = plan;
        tracing::debug!("Requesting signed upload URL for {}", file.name);
        let signed_url = self
            .storage
            .request_upload_url(&file.name, identity)
            .await?;

        let size_bytes = file.size_bytes();
        self.storage
            .upload_to_signed_url(&signed_url, file.bytes)
            .await?;
        tracing::info!("Uploaded {} ({} bytes)", file.name, size_bytes);

        Ok(self.refresh_after_mutation(identity).await)
    }

    /// Delete `video` by the object name in its URL, then refresh once.
    pub async fn delete(&self, identity: &Identity, video: &Video) -> Result<MutationOutcome> {
        let file_name = video.object_name().ok_or_else(|| {
            Error::InvalidInput(format!("Cannot derive an object name from {}", video.url))
        })?;

        self.storage.delete_video(&file_name, identity).await?;
        tracing::info!("Deleted {}", file_name);

        Ok(self.refresh_after_mutation(identity).await)
    }

    async fn refresh_after_mutation(&self, identity: &Identity) -> MutationOutcome {
        match self.refresh(identity).await {
            Ok(snapshot) => MutationOutcome {
                snapshot: Some(snapshot),
            },
            Err(error) => {
                tracing::error!("Failed to refresh video list: {}", error);
                MutationOutcome { snapshot: None }
            }
        }
    }
}
