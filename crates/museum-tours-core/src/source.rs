//! Where collection data comes from: the remote backend or the fixture table
//!
//! Both answer with the same shapes and the same [`ApiError`] taxonomy, so
//! callers cannot tell them apart except for fixture absence, which surfaces
//! as [`ApiError::NotFound`] instead of an HTTP 404.

use crate::client::ApiClient;
use futures::future::join;
use museum_tours_types::{ApiError, FixtureCatalog, MuseumObject, Theme, TourSize};
use std::sync::Arc;

/// Read side of the collection
#[derive(Debug, Clone)]
pub enum DataSource {
    Remote(ApiClient),
    Fixtures(Arc<FixtureCatalog>),
}

impl DataSource {
    pub fn fixtures() -> Self {
        DataSource::Fixtures(Arc::new(FixtureCatalog::builtin()))
    }

    pub fn describe(&self) -> String {
        match self {
            DataSource::Remote(client) => client.base_url().to_string(),
            DataSource::Fixtures(_) => "built-in fixtures".to_string(),
        }
    }

    pub async fn themes(&self) -> Result<Vec<Theme>, ApiError> {
        match self {
            DataSource::Remote(client) => client.fetch_themes().await,
            DataSource::Fixtures(catalog) => Ok(catalog.themes().to_vec()),
        }
    }

    pub async fn theme(&self, id: &str) -> Result<Theme, ApiError> {
        match self {
            DataSource::Remote(client) => client.fetch_theme(id).await,
            DataSource::Fixtures(catalog) => {
                catalog.theme(id).cloned().ok_or_else(|| ApiError::NotFound {
                    what: "Theme",
                    id: id.to_string(),
                })
            }
        }
    }

    pub async fn object(&self, id: &str) -> Result<MuseumObject, ApiError> {
        match self {
            DataSource::Remote(client) => client.fetch_object(id).await,
            DataSource::Fixtures(catalog) => {
                catalog.object(id).cloned().ok_or_else(|| ApiError::NotFound {
                    what: "Object",
                    id: id.to_string(),
                })
            }
        }
    }

    /// Tour objects. Fixtures answer an unknown pair with an empty list.
    pub async fn tour(&self, theme_id: &str, size: TourSize) -> Result<Vec<MuseumObject>, ApiError> {
        match self {
            DataSource::Remote(client) => client.fetch_tour(theme_id, size).await,
            DataSource::Fixtures(catalog) => Ok(catalog.tour_objects(theme_id, size)),
        }
    }

    /// Theme and tour fetched concurrently; fails if either fails
    pub async fn tour_with_theme(
        &self,
        theme_id: &str,
        size: TourSize,
    ) -> Result<(Theme, Vec<MuseumObject>), ApiError> {
        let (theme, objects) = join(self.theme(theme_id), self.tour(theme_id, size)).await;
        Ok((theme?, objects?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixture_theme_absent_is_not_found() {
        let source = DataSource::fixtures();
        let err = source.theme("atlantis").await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Theme not found: atlantis");
    }

    #[tokio::test]
    async fn test_fixture_tour_with_theme() {
        let source = DataSource::fixtures();
        let (theme, objects) = source
            .tour_with_theme("ancient-egypt", TourSize::Medium)
            .await
            .unwrap();

        assert_eq!(theme.name, "Ancient Egypt");
        let ids: Vec<_> = objects.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["obj-04", "obj-05", "obj-06"]);
    }

    #[tokio::test]
    async fn test_tour_with_theme_fails_when_theme_fails() {
        let source = DataSource::fixtures();
        let err = source
            .tour_with_theme("atlantis", TourSize::Small)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_fixture_unknown_tour_is_empty() {
        let source = DataSource::fixtures();
        let objects = source.tour("atlantis", TourSize::Large).await.unwrap();
        assert!(objects.is_empty());
    }
}
