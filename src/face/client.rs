use std::path::Path;

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::config::Settings;
use crate::face::detection::FaceDetection;

/// Attributes requested from the detection endpoint
const FACE_ATTRIBUTES: &str = "age,gender,emotion";

/// Header carrying the Azure subscription key
const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Client for the Face API detection endpoint
///
/// The query parameters never change between requests, so the full detect URL
/// is built once up front.
pub struct FaceClient {
    http: reqwest::Client,
    url: Url,
    key: String,
}

impl FaceClient {
    pub fn new(settings: &Settings) -> FaceClient {
        FaceClient {
            http: reqwest::Client::new(),
            url: detect_url(&settings.url),
            key: settings.key.clone(),
        }
    }

    /// Submit one image and return the first face the API detects
    ///
    /// `Ok(None)` means the API answered but found no face in the image.
    pub async fn detect(&self, image_path: &Path) -> Result<Option<FaceDetection>> {
        let body = tokio::fs::read(image_path)
            .await
            .with_context(|| format!("Could not find file: {}", image_path.display()))?;

        debug!("POST {} ({} bytes)", self.url, body.len());
        let response = self
            .http
            .post(self.url.clone())
            .header(SUBSCRIPTION_KEY_HEADER, &self.key)
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("Face API returned status {status}: {body}"));
        }

        info!("Processed image: {}", image_path.display());
        let mut faces: Vec<FaceDetection> = response.json().await?;

        match faces.is_empty() {
            true => Ok(None),
            false => Ok(Some(faces.remove(0))),
        }
    }
}

/// Detection endpoint with the attribute query parameters filled in
fn detect_url(base: &Url) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut()
        .append_pair("returnFaceId", "true")
        .append_pair("returnFaceLandmarks", "false")
        .append_pair("returnFaceAttributes", FACE_ATTRIBUTES);
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_url_requests_the_report_attributes() {
        let base = Url::parse("https://example.org/face/v1.0/detect").unwrap();
        let url = detect_url(&base);

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&("returnFaceId".into(), "true".into())));
        assert!(pairs.contains(&("returnFaceLandmarks".into(), "false".into())));
        assert!(pairs.contains(&("returnFaceAttributes".into(), "age,gender,emotion".into())));
    }

    #[test]
    fn detect_url_keeps_the_endpoint_path() {
        let base = Url::parse("https://example.org/face/v1.0/detect").unwrap();
        assert_eq!(detect_url(&base).path(), "/face/v1.0/detect");
    }
}
