//! Storage service client.
//!
//! Listing, signed-URL issuance, deletion, and per-user namespace
//! provisioning all go through the storage API. Upload bytes go straight to
//! the signed URL it hands out.

use std::future::Future;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::normalize_base_url;
use crate::http::check_status;
use crate::models::{parse_video_listing, Video};
use crate::session::Identity;
use crate::{Error, Result};

const UPLOAD_CONTENT_TYPE: &str = "application/octet-stream";

/// Operations the app needs from the storage service.
pub trait StorageBackend: Clone + Send + Sync + 'static {
    /// Videos owned by `identity`, in service order.
    fn list_videos(&self, identity: &Identity) -> impl Future<Output = Result<Vec<Video>>> + Send;

    /// Single-use URL that accepts the bytes of `file_name`.
    fn request_upload_url(
        &self,
        file_name: &str,
        identity: &Identity,
    ) -> impl Future<Output = Result<String>> + Send;

    /// PUT `bytes` to a signed URL.
    fn upload_to_signed_url(
        &self,
        signed_url: &str,
        bytes: Vec<u8>,
    ) -> impl Future<Output = Result<()>> + Send;

    fn delete_video(
        &self,
        file_name: &str,
        identity: &Identity,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Create the storage namespace of a freshly registered user.
    fn provision_namespace(
        &self,
        user_id: &str,
        username: &str,
    ) -> impl Future<Output = Result<()>> + Send;
}

/// HTTP client for the `/api/storage` routes.
#[derive(Debug, Clone)]
pub struct StorageClient {
    base_url: String,
    client: Client,
}

impl StorageClient {
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            base_url: normalize_base_url(base_url.as_ref(), "storage base URL")?,
            client: Client::builder().build()?,
        })
    }

    fn videos_url(&self) -> String {
        format!("{}/videos", self.base_url)
    }
}

#[derive(Debug, Serialize)]
struct GenerateUrlRequest<'a> {
    file_name: &'a str,
    user_id: &'a str,
    username: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateUrlResponse {
    #[serde(rename = "signedUrl")]
    signed_url: Option<String>,
}

#[derive(Debug, Serialize)]
struct DeleteVideoRequest<'a> {
    file_name: &'a str,
    user_id: &'a str,
}

#[derive(Debug, Serialize)]
struct ProvisionRequest<'a> {
    name: &'a str,
    user_id: &'a str,
    username: &'a str,
}

impl StorageBackend for StorageClient {
    async fn list_videos(&self, identity: &Identity) -> Result<Vec<Video>> {
        let response = self
            .client
            .get(self.videos_url())
            .query(&[
                ("user_id", identity.subject.as_str()),
                ("username", identity.username.as_str()),
            ])
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        let response = check_status(response, "video listing").await?;
        let body = response.json::<Value>().await?;
        parse_video_listing(body)
    }

    async fn request_upload_url(&self, file_name: &str, identity: &Identity) -> Result<String> {
        let response = self
            .client
            .post(format!("{}/generateUrl", self.base_url))
            .header(ACCEPT, "application/json")
            .json(&GenerateUrlRequest {
                file_name,
                user_id: &identity.subject,
                username: &identity.username,
            })
            .send()
            .await?;
        let response = check_status(response, "signed URL request").await?;
        let payload = response.json::<GenerateUrlResponse>().await?;
        payload
            .signed_url
            .filter(|url| !url.trim().is_empty())
            .ok_or(Error::MissingField("signedUrl"))
    }

    async fn upload_to_signed_url(&self, signed_url: &str, bytes: Vec<u8>) -> Result<()> {
        let response = self
            .client
            .put(signed_url)
            .header(CONTENT_TYPE, UPLOAD_CONTENT_TYPE)
            .body(bytes)
            .send()
            .await?;
        check_status(response, "signed upload").await?;
        Ok(())
    }

    async fn delete_video(&self, file_name: &str, identity: &Identity) -> Result<()> {
        let response = self
            .client
            .delete(self.videos_url())
            .json(&DeleteVideoRequest {
                file_name,
                user_id: &identity.subject,
            })
            .send()
            .await?;
        check_status(response, "video deletion").await?;
        Ok(())
    }

    async fn provision_namespace(&self, user_id: &str, username: &str) -> Result<()> {
        let response = self
            .client
            .post(&self.base_url)
            .json(&ProvisionRequest {
                name: username,
                user_id,
                username,
            })
            .send()
            .await?;
        check_status(response, "namespace provisioning").await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::test_server::OneShotServer;

    #[test]
    fn request_bodies_use_service_field_names() {
        let generate = serde_json::to_value(GenerateUrlRequest {
            file_name: "clip.mp4",
            user_id: "S",
            username: "U",
        })
        .unwrap();
        assert_eq!(
            generate,
            json!({ "file_name": "clip.mp4", "user_id": "S", "username": "U" })
        );

        let delete = serde_json::to_value(DeleteVideoRequest {
            file_name: "clip.mp4",
            user_id: "S",
        })
        .unwrap();
        assert_eq!(delete, json!({ "file_name": "clip.mp4", "user_id": "S" }));

        let provision = serde_json::to_value(ProvisionRequest {
            name: "U",
            user_id: "S",
            username: "U",
        })
        .unwrap();
        assert_eq!(
            provision,
            json!({ "name": "U", "user_id": "S", "username": "U" })
        );
    }

    #[test]
    fn generate_url_response_reads_camel_case_field() {
        let payload: GenerateUrlResponse =
            serde_json::from_value(json!({ "signedUrl": "https://upload/here" })).unwrap();
        assert_eq!(payload.signed_url.as_deref(), Some("https://upload/here"));
    }

    fn identity() -> Identity {
        Identity {
            subject: "S-1".to_string(),
            username: "alice".to_string(),
        }
    }

    fn client_for(server: &OneShotServer) -> StorageClient {
        StorageClient::new(format!("{}/api/storage/", server.base_url)).unwrap()
    }

    #[tokio::test]
    async fn list_videos_sends_identity_as_query_parameters() {
        let server = OneShotServer::respond(
            "200 OK",
            r#"{"videos":[{"id":"a","url":"https://cdn/o/a.mp4","size":2048}]}"#,
        )
        .await;
        let client = client_for(&server);

        let videos = client.list_videos(&identity()).await.unwrap();
        let request = server.request().await;

        assert_eq!(request.method, "GET");
        assert_eq!(
            request.target,
            "/api/storage/videos?user_id=S-1&username=alice"
        );
        assert_eq!(request.header("accept"), Some("application/json"));
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].size_bytes, 2048);
    }

    #[tokio::test]
    async fn request_upload_url_posts_file_and_identity() {
        let server =
            OneShotServer::respond("200 OK", r#"{"signedUrl":"https://upload/here?sig=1"}"#).await;
        let client = client_for(&server);

        let signed_url = client
            .request_upload_url("clip.mp4", &identity())
            .await
            .unwrap();
        let request = server.request().await;

        assert_eq!(signed_url, "https://upload/here?sig=1");
        assert_eq!(request.method, "POST");
        assert_eq!(request.target, "/api/storage/generateUrl");
        assert_eq!(
            request.json(),
            json!({ "file_name": "clip.mp4", "user_id": "S-1", "username": "alice" })
        );
    }

    #[tokio::test]
    async fn request_upload_url_requires_signed_url_in_response() {
        let server = OneShotServer::respond("200 OK", r#"{"signedUrl":""}"#).await;
        let client = client_for(&server);

        let error = client
            .request_upload_url("clip.mp4", &identity())
            .await
            .unwrap_err();
        server.request().await;

        assert!(matches!(error, Error::MissingField("signedUrl")));
    }

    #[tokio::test]
    async fn upload_puts_raw_bytes_as_octet_stream() {
        let server = OneShotServer::respond("200 OK", "").await;
        let client = client_for(&server);
        let signed_url = format!("{}/bucket/clip.mp4?sig=abc", server.base_url);

        client
            .upload_to_signed_url(&signed_url, b"video-bytes".to_vec())
            .await
            .unwrap();
        let request = server.request().await;

        assert_eq!(request.method, "PUT");
        assert_eq!(request.target, "/bucket/clip.mp4?sig=abc");
        assert_eq!(request.header("content-type"), Some(UPLOAD_CONTENT_TYPE));
        assert_eq!(request.body, b"video-bytes".to_vec());
    }

    #[tokio::test]
    async fn delete_sends_json_body_to_videos_route() {
        let server = OneShotServer::respond("200 OK", r#"{"message":"deleted"}"#).await;
        let client = client_for(&server);

        client.delete_video("clip.mp4", &identity()).await.unwrap();
        let request = server.request().await;

        assert_eq!(request.method, "DELETE");
        assert_eq!(request.target, "/api/storage/videos");
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(
            request.json(),
            json!({ "file_name": "clip.mp4", "user_id": "S-1" })
        );
    }

    #[tokio::test]
    async fn provision_posts_to_storage_base() {
        let server = OneShotServer::respond("201 Created", "{}").await;
        let client = client_for(&server);

        client.provision_namespace("42", "bob").await.unwrap();
        let request = server.request().await;

        assert_eq!(request.method, "POST");
        assert_eq!(request.target, "/api/storage");
        assert_eq!(
            request.json(),
            json!({ "name": "bob", "user_id": "42", "username": "bob" })
        );
    }

    #[tokio::test]
    async fn failed_delete_surfaces_service_message() {
        let server =
            OneShotServer::respond("404 Not Found", r#"{"message":"File not found"}"#).await;
        let client = client_for(&server);

        let error = client
            .delete_video("clip.mp4", &identity())
            .await
            .unwrap_err();
        server.request().await;

        assert!(matches!(
            error,
            Error::Api { status: 404, message: Some(ref message) } if message == "File not found"
        ));
    }
}
