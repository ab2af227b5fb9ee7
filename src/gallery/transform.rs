//! Project Transform
//!
//! Maps a raw backend project to a view-ready display record.

use crate::api::resolve_image_url;
use crate::models::RawProject;

/// Coarse grouping used for filtering and styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryBucket {
    Web,
    Mobile,
    Design,
}

impl CategoryBucket {
    pub const ALL: [CategoryBucket; 3] = [CategoryBucket::Web, CategoryBucket::Mobile, CategoryBucket::Design];

    /// Bucket for a backend category token; unknown tokens land in `Web`
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "mobile_development" => CategoryBucket::Mobile,
            "design_&_ui/ux" => CategoryBucket::Design,
            "web_development" => CategoryBucket::Web,
            _ => CategoryBucket::Web,
        }
    }

    /// Backend token for `?category=` queries
    pub fn raw_token(self) -> &'static str {
        match self {
            CategoryBucket::Web => "web_development",
            CategoryBucket::Mobile => "mobile_development",
            CategoryBucket::Design => "design_&_ui/ux",
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            CategoryBucket::Web => "web",
            CategoryBucket::Mobile => "mobile",
            CategoryBucket::Design => "design",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryBucket::Web => "Web Development",
            CategoryBucket::Mobile => "Mobile Development",
            CategoryBucket::Design => "Design & UI/UX",
        }
    }

    /// Gradient classes behind the card image
    pub fn gradient(self) -> &'static str {
        match self {
            CategoryBucket::Web => "from-blue-400 to-cyan-400",
            CategoryBucket::Mobile => "from-emerald-600 to-teal-700",
            CategoryBucket::Design => "from-pink-500 to-rose-600",
        }
    }
}

/// View-ready project, immutable once built
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayProject {
    pub id: String,
    pub title: String,
    pub description: String,
    /// `image_urls[0]`, or empty when there are no images
    pub cover_image_url: String,
    pub image_urls: Vec<String>,
    pub category: CategoryBucket,
    pub gradient: &'static str,
}

pub fn transform(raw: &RawProject, asset_origin: &str) -> DisplayProject {
    let image_urls: Vec<String> = raw
        .images
        .iter()
        .map(|path| resolve_image_url(asset_origin, path))
        .collect();
    let cover_image_url = image_urls.first().cloned().unwrap_or_default();
    let category = CategoryBucket::from_raw(&raw.category);

    DisplayProject {
        id: raw.id.clone(),
        title: raw.name.clone(),
        description: raw.description.clone(),
        cover_image_url,
        image_urls,
        category,
        gradient: category.gradient(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://cdn.example.com";

    fn raw(category: &str, images: &[&str]) -> RawProject {
        RawProject {
            id: "p1".to_string(),
            name: "Trybetunes".to_string(),
            description: "Music streaming".to_string(),
            images: images.iter().map(|s| s.to_string()).collect(),
            category: category.to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_category_table() {
        assert_eq!(CategoryBucket::from_raw("mobile_development"), CategoryBucket::Mobile);
        assert_eq!(CategoryBucket::from_raw("design_&_ui/ux"), CategoryBucket::Design);
        assert_eq!(CategoryBucket::from_raw("web_development"), CategoryBucket::Web);
    }

    #[test]
    fn test_unknown_category_defaults_to_web() {
        for token in ["3d_printing", "", "Mobile_Development", "design"] {
            assert_eq!(transform(&raw(token, &[]), ORIGIN).category, CategoryBucket::Web, "{}", token);
        }
    }

    #[test]
    fn test_cover_is_first_image() {
        let project = transform(&raw("web_development", &["/uploads/a.png", "https://img.host/b.png"]), ORIGIN);
        assert_eq!(project.image_urls, vec![
            "https://cdn.example.com/uploads/a.png".to_string(),
            "https://img.host/b.png".to_string(),
        ]);
        assert_eq!(project.cover_image_url, project.image_urls[0]);
    }

    #[test]
    fn test_no_images_empty_cover() {
        let project = transform(&raw("web_development", &[]), ORIGIN);
        assert!(project.image_urls.is_empty());
        assert_eq!(project.cover_image_url, "");
    }

    #[test]
    fn test_gradient_follows_bucket() {
        let project = transform(&raw("design_&_ui/ux", &[]), ORIGIN);
        assert_eq!(project.gradient, CategoryBucket::Design.gradient());
        assert_eq!(project.title, "Trybetunes");
    }

    #[test]
    fn test_raw_token_round_trips() {
        for bucket in CategoryBucket::ALL {
            assert_eq!(CategoryBucket::from_raw(bucket.raw_token()), bucket);
        }
    }
}
