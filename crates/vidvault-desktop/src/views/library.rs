//! Library view - the signed-in user's videos

use dioxus::prelude::*;
use rfd::AsyncFileDialog;
use vidvault_core::services::LibrarySnapshot;
use vidvault_core::usage::{plan_upload, SelectedFile, StorageUsage, NEAR_LIMIT_WARNING};
use vidvault_core::Video;

use crate::components::{StorageStatus, UploadPanel, VideoCard, VideoPlayer};
use crate::services::{show_notice, NoticeLevel};
use crate::state::{AppState, AppView, SnapshotOrder};

const UPLOAD_FAILED_MESSAGE: &str = "Upload failed. Please try again.";
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "m4v", "webm", "mkv", "avi"];

fn apply_snapshot(
    mut videos: Signal<Vec<Video>>,
    mut usage: Signal<StorageUsage>,
    mut order: Signal<SnapshotOrder>,
    ticket: u64,
    snapshot: LibrarySnapshot,
) {
    if !order.write().accept(ticket) {
        tracing::debug!("Dropping listing superseded by a newer one");
        return;
    }
    videos.set(snapshot.videos);
    usage.set(snapshot.usage);
}

/// Log the failure in full; the dialog only gets fixed text.
fn upload_failure_notice(error: &vidvault_core::Error) -> &'static str {
    tracing::error!("Error uploading video: {}", error);
    UPLOAD_FAILED_MESSAGE
}

#[component]
pub fn Library() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let initial_usage = state.services.read().as_ref().map_or_else(
        || StorageUsage::empty(vidvault_core::config::DEFAULT_QUOTA_MB),
        |services| services.library.empty_usage(),
    );
    let videos = use_signal(Vec::<Video>::new);
    let usage = use_signal(|| initial_usage);
    let mut order = use_signal(SnapshotOrder::default);
    let mut selected_file = use_signal(|| None::<SelectedFile>);
    let mut uploading = use_signal(|| false);
    let mut playing = use_signal(|| None::<String>);

    // Initial listing; failures keep the (empty) list and are only logged.
    use_future(move || async move {
        let Some(services) = state.services.peek().clone() else {
            return;
        };
        let Some(session) = state.session.peek().clone() else {
            return;
        };
        let ticket = order.write().issue();
        match services.library.refresh(session.identity()).await {
            Ok(snapshot) => apply_snapshot(videos, usage, order, ticket, snapshot),
            Err(error) => tracing::error!("Error fetching videos: {}", error),
        }
    });

    let pick_file = move |()| {
        spawn(async move {
            let Some(handle) = AsyncFileDialog::new()
                .add_filter("Video", VIDEO_EXTENSIONS)
                .pick_file()
                .await
            else {
                return;
            };
            let name = handle.file_name();
            let bytes = handle.read().await;
            tracing::debug!("Selected {} ({} bytes)", name, bytes.len());
            selected_file.set(Some(SelectedFile { name, bytes }));
        });
    };

    let upload = move |()| {
        if uploading() {
            return;
        }
        let Some(services) = state.services.read().clone() else {
            return;
        };
        let Some(session) = state.session.read().clone() else {
            return;
        };

        let plan = match plan_upload(selected_file(), &usage()) {
            Ok(plan) => plan,
            Err(rejection) => {
                spawn(show_notice(NoticeLevel::Warning, rejection.to_string()));
                return;
            }
        };

        uploading.set(true);
        let ticket = order.write().issue();
        spawn(async move {
            if plan.warn_near_limit {
                show_notice(NoticeLevel::Warning, NEAR_LIMIT_WARNING).await;
            }

            match services.library.upload(session.identity(), plan).await {
                Ok(outcome) => {
                    if let Some(snapshot) = outcome.snapshot {
                        apply_snapshot(videos, usage, order, ticket, snapshot);
                    }
                    uploading.set(false);
                    show_notice(NoticeLevel::Info, "Video uploaded successfully!").await;
                }
                Err(error) => {
                    uploading.set(false);
                    show_notice(NoticeLevel::Error, upload_failure_notice(&error)).await;
                }
            }
        });
    };

    let sign_out = move |_: MouseEvent| {
        if let Some(services) = state.services.read().clone() {
            if let Err(error) = services.account.log_out() {
                tracing::error!("Failed to clear session: {}", error);
            }
        }
        state.session.set(None);
        state.navigate(AppView::Login);
    };

    let username = state
        .session
        .read()
        .as_ref()
        .map(|session| session.identity().username.clone())
        .unwrap_or_default();
    let current_videos = videos();
    let selected_name = selected_file.read().as_ref().map(|file| file.name.clone());

    rsx! {
        div {
            class: "library",
            style: "max-width: 896px; margin: 0 auto; padding: 32px 16px;",

            div {
                style: "display: flex; align-items: center; justify-content: space-between;",
                h1 { style: "margin: 0; font-size: 24px;", "Welcome, {username}" }
                button {
                    class: "sign-out",
                    style: "border: 1px solid {colors.border}; border-radius: 4px; padding: 6px 12px; background: {colors.bg_card}; color: {colors.text_primary}; cursor: pointer;",
                    onclick: sign_out,
                    "Sign Out"
                }
            }

            StorageStatus { usage: usage() }

            UploadPanel {
                selected_name,
                uploading: uploading(),
                on_pick: pick_file,
                on_upload: upload,
            }

            h2 { style: "margin-top: 24px; font-size: 20px;", "Your Videos" }

            if current_videos.is_empty() {
                p { "No videos Uploaded" }
            } else {
                div {
                    class: "video-grid",
                    style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); gap: 16px; margin-top: 16px;",

                    for video in current_videos {
                        {
                            let key = video.id.clone();
                            let name = video.display_name();
                            let play_url = video.url.clone();
                            rsx! {
                                VideoCard {
                                    key: "{key}",
                                    name,
                                    on_play: move |()| playing.set(Some(play_url.clone())),
                                    on_delete: move |()| {
                                        let Some(services) = state.services.read().clone() else {
                                            return;
                                        };
                                        let Some(session) = state.session.read().clone() else {
                                            return;
                                        };
                                        let video = video.clone();
                                        let ticket = order.write().issue();
                                        spawn(async move {
                                            match services.library.delete(session.identity(), &video).await {
                                                Ok(outcome) => {
                                                    if let Some(snapshot) = outcome.snapshot {
                                                        apply_snapshot(videos, usage, order, ticket, snapshot);
                                                    }
                                                    show_notice(NoticeLevel::Info, "Video deleted successfully!").await;
                                                }
                                                Err(error) => {
                                                    tracing::error!("Error deleting video: {}", error);
                                                }
                                            }
                                        });
                                    },
                                }
                            }
                        }
                    }
                }
            }
        }

        if let Some(url) = playing() {
            VideoPlayer {
                url,
                on_close: move |()| playing.set(None),
            }
        }
    }
}
