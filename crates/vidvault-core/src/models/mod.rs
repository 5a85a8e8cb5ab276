//! Data models for VidVault

mod video;

pub use video::{parse_video_listing, Video, UNKNOWN_VIDEO_NAME};
