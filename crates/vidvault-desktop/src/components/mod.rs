//! UI Components
//!
//! Reusable UI components for the desktop application.

mod auth_form;
mod storage_status;
mod upload_panel;
mod video_card;
mod video_player;

pub use auth_form::AuthForm;
pub use storage_status::StorageStatus;
pub use upload_panel::UploadPanel;
pub use video_card::VideoCard;
pub use video_player::VideoPlayer;
