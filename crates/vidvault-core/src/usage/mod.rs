//! Storage usage and the client-side upload guard.
//!
//! The quota check runs against the locally fetched listing, so it can be
//! stale. The storage service owns enforcement; this only spares the user an
//! upload that is certain to overflow.

use std::fmt;

use crate::models::Video;

pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Fraction of the quota above which uploads still proceed but warn.
pub const WARNING_RATIO: f64 = 0.8;

#[allow(clippy::cast_precision_loss)]
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB
}

/// Used storage against the quota, both in MB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StorageUsage {
    pub used_mb: f64,
    pub quota_mb: f64,
}

impl StorageUsage {
    pub const fn empty(quota_mb: f64) -> Self {
        Self {
            used_mb: 0.0,
            quota_mb,
        }
    }

    /// Sum of the reported sizes of `videos`.
    pub fn from_videos(videos: &[Video], quota_mb: f64) -> Self {
        let used_bytes = videos
            .iter()
            .fold(0_u64, |total, video| total.saturating_add(video.size_bytes));
        Self {
            used_mb: bytes_to_mb(used_bytes),
            quota_mb,
        }
    }

    pub fn percentage(&self) -> f64 {
        if self.quota_mb <= 0.0 {
            return 100.0;
        }
        self.used_mb / self.quota_mb * 100.0
    }

    /// Width of the usage bar, in percent of the track.
    pub fn bar_percentage(&self) -> f64 {
        self.percentage().clamp(0.0, 100.0)
    }

    pub fn is_near_limit(&self) -> bool {
        self.percentage() >= WARNING_RATIO * 100.0
    }

    pub fn label(&self) -> String {
        format!(
            "Used Storage: {:.2} MB / {} MB",
            self.used_mb, self.quota_mb
        )
    }
}

/// Verdict of [`check_upload`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadCheck {
    Allowed,
    /// Allowed, but the upload pushes usage past the warning threshold.
    AllowedNearLimit,
    Blocked,
}

/// Whether a file of `file_mb` may be added to `used_mb` under `quota_mb`.
///
/// Blocked iff `used + file > quota`; warns iff `quota * 0.8 < used + file <= quota`.
pub fn check_upload(used_mb: f64, file_mb: f64, quota_mb: f64) -> UploadCheck {
    let projected = used_mb + file_mb;
    if projected > quota_mb {
        UploadCheck::Blocked
    } else if projected > quota_mb * WARNING_RATIO {
        UploadCheck::AllowedNearLimit
    } else {
        UploadCheck::Allowed
    }
}

/// A file the user picked for upload.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn size_bytes(&self) -> u64 {
        u64::try_from(self.bytes.len()).unwrap_or(u64::MAX)
    }
}

impl fmt::Debug for SelectedFile {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("size_bytes", &self.size_bytes())
            .finish()
    }
}

/// An upload that passed the local checks.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadPlan {
    pub file: SelectedFile,
    /// Usage after the upload, in MB.
    pub projected_mb: f64,
    /// Show the near-limit warning before starting.
    pub warn_near_limit: bool,
}

/// Why an upload was refused before any request was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadRejection {
    NoFileSelected,
    QuotaExceeded,
}

impl fmt::Display for UploadRejection {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFileSelected => formatter.write_str("Please select a file to upload."),
            Self::QuotaExceeded => formatter.write_str(
                "Uploading this video would exceed your storage limit. Delete some videos to upload more.",
            ),
        }
    }
}

impl std::error::Error for UploadRejection {}

pub const NEAR_LIMIT_WARNING: &str =
    "You are using more than 80% of your storage limit. Consider managing your files.";

/// Validate a pending upload against the current usage.
pub fn plan_upload(
    selection: Option<SelectedFile>,
    usage: &StorageUsage,
) -> Result<UploadPlan, UploadRejection> {
    let Some(file) = selection else {
        return Err(UploadRejection::NoFileSelected);
    };

    let file_mb = bytes_to_mb(file.size_bytes());
    let projected_mb = usage.used_mb + file_mb;
    match check_upload(usage.used_mb, file_mb, usage.quota_mb) {
        UploadCheck::Blocked => Err(UploadRejection::QuotaExceeded),
        check => Ok(UploadPlan {
            file,
            projected_mb,
            warn_near_limit: check == UploadCheck::AllowedNearLimit,
        }),
    }
}
