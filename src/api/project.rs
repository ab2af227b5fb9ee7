//! Project Endpoints
//!
//! `GET /projects` (optionally pre-filtered by category) and image URL
//! resolution against the asset origin.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use crate::gallery::ProjectSource;
use crate::models::RawProject;
use super::{client, decode_envelope, encode_component, send, FetchError};

pub fn projects_url(api: &str) -> String {
    format!("{}/projects", api)
}

pub fn projects_by_category_url(api: &str, category_token: &str) -> String {
    format!("{}/projects?category={}", api, encode_component(category_token))
}

pub async fn fetch_projects(api: &str) -> Result<Vec<RawProject>, FetchError> {
    let url = projects_url(api);
    log::debug!("GET {}", url);
    let (status, body) = send(client().get(&url).header(CONTENT_TYPE, "application/json")).await?;
    decode_envelope(status, &body)
}

/// Server-side filtered list (the gallery filters client-side instead)
pub async fn fetch_projects_by_category(api: &str, category_token: &str) -> Result<Vec<RawProject>, FetchError> {
    let url = projects_by_category_url(api, category_token);
    log::debug!("GET {}", url);
    let (status, body) = send(client().get(&url).header(CONTENT_TYPE, "application/json")).await?;
    decode_envelope(status, &body)
}

/// Absolute URLs pass through; relative paths are joined onto `origin`
pub fn resolve_image_url(origin: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    if path.starts_with('/') {
        format!("{}{}", origin, path)
    } else {
        format!("{}/{}", origin, path)
    }
}

/// Backend-backed [`ProjectSource`]
#[derive(Debug, Clone)]
pub struct HttpProjectSource {
    api: String,
}

impl HttpProjectSource {
    pub fn new(api: impl Into<String>) -> Self {
        Self { api: api.into() }
    }
}

#[async_trait(?Send)]
impl ProjectSource for HttpProjectSource {
    async fn fetch_projects(&self) -> Result<Vec<RawProject>, FetchError> {
        fetch_projects(&self.api).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://web-production-8511.up.railway.app";

    #[test]
    fn test_absolute_urls_pass_through() {
        let url = "https://res.cloudinary.com/demo/image/upload/cover.png";
        assert_eq!(resolve_image_url(ORIGIN, url), url);
        assert_eq!(resolve_image_url(ORIGIN, "http://example.com/a.jpg"), "http://example.com/a.jpg");
    }

    #[test]
    fn test_relative_paths_join_origin() {
        assert_eq!(
            resolve_image_url(ORIGIN, "/uploads/projects/1.png"),
            "https://web-production-8511.up.railway.app/uploads/projects/1.png"
        );
        assert_eq!(resolve_image_url(ORIGIN, "a.png"), "https://web-production-8511.up.railway.app/a.png");
    }

    #[test]
    fn test_urls() {
        assert_eq!(projects_url("https://api.example.com"), "https://api.example.com/projects");
        assert_eq!(
            projects_by_category_url("https://api.example.com", "design_&_ui/ux"),
            "https://api.example.com/projects?category=design_%26_ui%2Fux"
        );
    }
}
