use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use tracing::error;

use crate::modules::asset::application::domain::entities::AssetPath;
use crate::modules::asset::application::ports::outgoing::{AssetStore, AssetStoreError};

/// Object storage reached through the hosted backend's storage REST API.
///
/// ```text
/// POST   {base}/storage/v1/object/{bucket}/{path}     upload (x-upsert)
/// DELETE {base}/storage/v1/object/{bucket}            {"prefixes": [path]}
/// GET    {base}/storage/v1/object/public/{bucket}/{path}
/// ```
#[derive(Clone)]
pub struct HttpAssetStore {
    client: Client,
    base_url: String,
    api_key: String,
    cache_control_secs: u32,
}

impl HttpAssetStore {
    pub fn new(client: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            cache_control_secs: 3600,
        }
    }

    fn object_url(&self, bucket: &str, path: &AssetPath) -> String {
        format!("{}/storage/v1/object/{}/{}", self.base_url, bucket, path)
    }

    fn bucket_url(&self, bucket: &str) -> String {
        format!("{}/storage/v1/object/{}", self.base_url, bucket)
    }

    fn authorized(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.bearer_auth(&self.api_key).header("apikey", &self.api_key)
    }

    async fn rejected(response: reqwest::Response) -> AssetStoreError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        AssetStoreError::Rejected {
            status: status.as_u16(),
            message: extract_message(&body).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            }),
        }
    }
}

/// Storage errors arrive as `{"message": "..."}` or `{"error": "..."}`.
fn extract_message(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    json.get("message")
        .or_else(|| json.get("error"))
        .and_then(|v| v.as_str())
        .map(str::to_string)
}

#[async_trait]
impl AssetStore for HttpAssetStore {
    async fn upload(
        &self,
        bucket: &str,
        path: &AssetPath,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, AssetStoreError> {
        let response = self
            .authorized(self.client.post(self.object_url(bucket, path)))
            .header(header::CONTENT_TYPE, content_type)
            .header(
                header::CACHE_CONTROL,
                format!("max-age={}", self.cache_control_secs),
            )
            .header("x-upsert", "true")
            .body(bytes)
            .send()
            .await
            .map_err(|e| {
                error!(path = %path, "Storage upload transport error: {}", e);
                AssetStoreError::Unavailable(e.to_string())
            })?;

        if !response.status().is_success() {
            return Err(Self::rejected(response).await);
        }

        Ok(self.public_url(bucket, path))
    }

    async fn delete(&self, bucket: &str, path: &AssetPath) -> Result<(), AssetStoreError> {
        let body = serde_json::json!({ "prefixes": [path.as_str()] });

        let response = self
            .authorized(self.client.delete(self.bucket_url(bucket)))
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .send()
            .await
            .map_err(|e| AssetStoreError::Unavailable(e.to_string()))?;

        match response.status() {
            s if s.is_success() => Ok(()),
            StatusCode::NOT_FOUND => Ok(()),
            _ => Err(Self::rejected(response).await),
        }
    }

    fn public_url(&self, bucket: &str, path: &AssetPath) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, bucket, path
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

    const BUCKET: &str = "portfolio-assets";

    fn path(raw: &str) -> AssetPath {
        AssetPath::from_public_url(&format!("https://x/{BUCKET}/{raw}"), BUCKET).unwrap()
    }

    #[tokio::test]
    async fn upload_posts_bytes_with_upsert_and_returns_public_url() {
        let server = MockServer::start().await;

        Mock::given(matchers::method("POST"))
            .and(matchers::path("/storage/v1/object/portfolio-assets/projects/a.webp"))
            .and(matchers::header("x-upsert", "true"))
            .and(matchers::header("content-type", "image/webp"))
            .and(matchers::header("authorization", "Bearer anon-key"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"Key":"x"}"#))
            .expect(1)
            .mount(&server)
            .await;

        let store = HttpAssetStore::new(Client::new(), server.uri(), "anon-key");
        let url = store
            .upload(BUCKET, &path("projects/a.webp"), vec![1, 2, 3], "image/webp")
            .await
            .unwrap();

        assert_eq!(
            url,
            format!(
                "{}/storage/v1/object/public/portfolio-assets/projects/a.webp",
                server.uri()
            )
        );
    }

    #[tokio::test]
    async fn upload_surfaces_storage_message_on_rejection() {
        let server = MockServer::start().await;

        Mock::given(matchers::method("POST"))
            .respond_with(
                ResponseTemplate::new(413).set_body_string(r#"{"message":"Payload too large"}"#),
            )
            .mount(&server)
            .await;

        let store = HttpAssetStore::new(Client::new(), server.uri(), "k");
        let err = store
            .upload(BUCKET, &path("uploads/cv.pdf"), vec![0], "application/pdf")
            .await
            .unwrap_err();

        assert_eq!(
            err,
            AssetStoreError::Rejected {
                status: 413,
                message: "Payload too large".to_string()
            }
        );
    }

    #[tokio::test]
    async fn delete_sends_prefix_list() {
        let server = MockServer::start().await;

        Mock::given(matchers::method("DELETE"))
            .and(matchers::path("/storage/v1/object/portfolio-assets"))
            .and(matchers::body_json(serde_json::json!({
                "prefixes": ["certificates/c.webp"]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&server)
            .await;

        let store = HttpAssetStore::new(Client::new(), server.uri(), "k");
        store
            .delete(BUCKET, &path("certificates/c.webp"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn delete_server_error_is_rejected() {
        let server = MockServer::start().await;

        Mock::given(matchers::method("DELETE"))
            .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
            .mount(&server)
            .await;

        let store = HttpAssetStore::new(Client::new(), server.uri(), "k");
        let err = store
            .delete(BUCKET, &path("projects/gone.webp"))
            .await
            .unwrap_err();

        assert!(matches!(err, AssetStoreError::Rejected { status: 500, .. }));
    }

    #[tokio::test]
    async fn unreachable_storage_is_unavailable() {
        // Nothing listens on port 9 locally
        let store = HttpAssetStore::new(Client::new(), "http://127.0.0.1:9", "k");
        let err = store
            .upload(BUCKET, &path("projects/a.webp"), vec![1], "image/webp")
            .await
            .unwrap_err();

        assert!(matches!(err, AssetStoreError::Unavailable(_)));
    }

    #[test]
    fn public_url_is_pure_and_trims_base() {
        let store = HttpAssetStore::new(Client::new(), "https://abc.supabase.co/", "k");
        assert_eq!(
            store.public_url(BUCKET, &path("uploads/avatar-1.webp")),
            "https://abc.supabase.co/storage/v1/object/public/portfolio-assets/uploads/avatar-1.webp"
        );
    }
}
