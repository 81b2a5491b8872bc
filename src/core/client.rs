use crate::domain::model::{QueryDescriptor, Recipe};
use crate::domain::ports::{RecipeService, ServiceConfig};
use crate::utils::error::{RecipeError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// 遠端食譜搜尋服務的回應形狀，只解出需要的欄位
#[derive(Debug, Deserialize)]
struct SearchResponse {
    hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
struct Hit {
    recipe: RecipeBody,
}

#[derive(Debug, Deserialize)]
struct RecipeBody {
    label: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    source: String,
    url: String,
}

impl From<RecipeBody> for Recipe {
    fn from(body: RecipeBody) -> Self {
        Recipe {
            label: body.label,
            image_url: body.image.unwrap_or_default(),
            source: body.source,
            external_url: body.url,
        }
    }
}

/// HTTP 實作：單次 GET、不重試、逾時沿用傳輸層預設
pub struct RecipeClient<C: ServiceConfig> {
    config: C,
    client: Client,
}

impl<C: ServiceConfig> RecipeClient<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl<C: ServiceConfig> RecipeService for RecipeClient<C> {
    async fn search(&self, descriptor: &QueryDescriptor) -> Result<Vec<Recipe>> {
        let url = descriptor.to_url(
            self.config.endpoint(),
            self.config.app_id(),
            self.config.app_key(),
        )?;

        // 不記錄完整 URL，避免憑證進到日誌
        tracing::debug!(
            cuisine = %descriptor.cuisine,
            search = %descriptor.search_text,
            from = descriptor.offset,
            to = descriptor.offset + descriptor.limit,
            "Requesting recipe search"
        );

        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("Recipe service response status: {}", status);

        if !status.is_success() {
            return Err(RecipeError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| RecipeError::MalformedResponse {
                message: format!("Unexpected response shape: {}", e),
            })?;

        // 服務端回傳順序就是呈現順序，不在本地重新排序
        let recipes = parsed
            .hits
            .into_iter()
            .map(|hit| hit.recipe.into())
            .collect::<Vec<Recipe>>();

        tracing::debug!("Parsed {} recipes", recipes.len());
        Ok(recipes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query;
    use crate::domain::model::{Cuisine, QueryShape};
    use httpmock::prelude::*;

    struct MockConfig {
        endpoint: String,
    }

    impl ServiceConfig for MockConfig {
        fn endpoint(&self) -> &str {
            &self.endpoint
        }

        fn app_id(&self) -> &str {
            "test-id"
        }

        fn app_key(&self) -> &str {
            "test-key"
        }

        fn page_size(&self) -> usize {
            50
        }

        fn query_shape(&self) -> QueryShape {
            QueryShape::TypedFilter
        }
    }

    fn client_for(server: &MockServer) -> RecipeClient<MockConfig> {
        RecipeClient::new(MockConfig {
            endpoint: server.url("/api/recipes/v2"),
        })
    }

    fn thai_first_page() -> QueryDescriptor {
        query::first_page(Cuisine::from("Thai"), "", QueryShape::TypedFilter, 50)
    }

    #[tokio::test]
    async fn test_search_parses_hits_into_recipes() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/recipes/v2")
                .query_param("cuisineType", "thai")
                .query_param("app_id", "test-id")
                .query_param("app_key", "test-key");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "hits": [
                        {"recipe": {"label": "Pad Thai", "image": "http://img/1", "source": "X", "url": "http://x/1"}},
                        {"recipe": {"label": "Tom Yum", "image": "http://img/2", "source": "Y", "url": "http://x/2"}}
                    ]
                }));
        });

        let recipes = client_for(&server).search(&thai_first_page()).await.unwrap();

        api_mock.assert();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].label, "Pad Thai");
        assert_eq!(recipes[1].external_url, "http://x/2");
    }

    #[tokio::test]
    async fn test_search_preserves_service_order() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/recipes/v2");
            then.status(200).json_body(serde_json::json!({
                "hits": [
                    {"recipe": {"label": "B", "source": "s", "url": "u"}},
                    {"recipe": {"label": "A", "source": "s", "url": "u"}},
                    {"recipe": {"label": "C", "source": "s", "url": "u"}}
                ]
            }));
        });

        let recipes = client_for(&server).search(&thai_first_page()).await.unwrap();
        let labels: Vec<&str> = recipes.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["B", "A", "C"]);
    }

    #[tokio::test]
    async fn test_missing_image_becomes_empty_string() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/recipes/v2");
            then.status(200).json_body(serde_json::json!({
                "hits": [{"recipe": {"label": "Soup", "image": null, "source": "Z", "url": "http://z"}}]
            }));
        });

        let recipes = client_for(&server).search(&thai_first_page()).await.unwrap();
        assert_eq!(recipes[0].image_url, "");
    }

    #[tokio::test]
    async fn test_empty_hits_is_an_empty_list_not_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/recipes/v2");
            then.status(200).json_body(serde_json::json!({"hits": []}));
        });

        let recipes = client_for(&server).search(&thai_first_page()).await.unwrap();
        assert!(recipes.is_empty());
    }

    #[tokio::test]
    async fn test_server_error_maps_to_http_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/recipes/v2");
            then.status(500);
        });

        let err = client_for(&server).search(&thai_first_page()).await.unwrap_err();
        assert!(matches!(err, RecipeError::HttpStatus { status: 500 }));
    }

    #[tokio::test]
    async fn test_missing_hits_field_is_malformed() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/recipes/v2");
            then.status(200).json_body(serde_json::json!({"count": 0}));
        });

        let err = client_for(&server).search(&thai_first_page()).await.unwrap_err();
        assert!(matches!(err, RecipeError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn test_non_json_body_is_malformed() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/recipes/v2");
            then.status(200).body("<html>maintenance</html>");
        });

        let err = client_for(&server).search(&thai_first_page()).await.unwrap_err();
        assert!(matches!(err, RecipeError::MalformedResponse { .. }));
    }
}
