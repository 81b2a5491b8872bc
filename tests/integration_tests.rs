use httpmock::prelude::*;
use recipe_finder::core::{ResultsState, ResultsViewModel};
use recipe_finder::{
    Cuisine, FileSelectionStore, Navigator, QueryShape, RecipeClient, RecipeError, ResolvedConfig,
};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

fn config_for(server: &MockServer, shape: QueryShape) -> ResolvedConfig {
    ResolvedConfig {
        endpoint: server.url("/api/recipes/v2"),
        app_id: "it-id".to_string(),
        app_key: "it-key".to_string(),
        page_size: 50,
        shape,
        selection_path: PathBuf::from("/tmp/unused-selection.json"),
        catalog_override: None,
    }
}

fn results_for(
    server: &MockServer,
    cuisine: &str,
    shape: QueryShape,
) -> ResultsViewModel<RecipeClient<ResolvedConfig>> {
    let config = config_for(server, shape);
    let service = Arc::new(RecipeClient::new(config.clone()));
    ResultsViewModel::new(service, Cuisine::from(cuisine), shape, config.page_size)
}

fn loaded_labels(state: &ResultsState) -> Vec<String> {
    match state {
        ResultsState::Loaded(recipes) => recipes.iter().map(|r| r.label.clone()).collect(),
        other => panic!("expected Loaded, got {:?}", other),
    }
}

#[tokio::test]
async fn test_round_trip_search_renders_service_hits() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/recipes/v2")
            .query_param("type", "public")
            .query_param("cuisineType", "thai")
            .query_param("q", "")
            .query_param("from", "0")
            .query_param("to", "50")
            .query_param("app_id", "it-id")
            .query_param("app_key", "it-key");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "hits": [
                    {"recipe": {"label": "Pad Thai", "image": "", "source": "X", "url": "http://x"}}
                ]
            }));
    });

    let mut results = results_for(&server, "thai", QueryShape::TypedFilter);
    results.on_mount().await;

    api_mock.assert();
    assert_eq!(loaded_labels(results.state()), vec!["Pad Thai"]);
}

#[tokio::test]
async fn test_search_submit_carries_the_query_text() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/recipes/v2")
            .query_param("cuisineType", "thai")
            .query_param("q", "green curry");
        then.status(200).json_body(serde_json::json!({
            "hits": [
                {"recipe": {"label": "Green Curry", "image": "", "source": "Y", "url": "http://y"}}
            ]
        }));
    });

    let mut results = results_for(&server, "Thai", QueryShape::TypedFilter);
    results.set_search_text("green curry");
    results.submit().await;

    api_mock.assert();
    assert_eq!(loaded_labels(results.state()), vec!["Green Curry"]);
}

#[tokio::test]
async fn test_keyword_shape_sends_legacy_parameters() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/recipes/v2")
            .query_param("q", "Thai")
            .query_param("from", "0")
            .query_param("to", "50");
        then.status(200).json_body(serde_json::json!({"hits": []}));
    });

    let mut results = results_for(&server, "Thai", QueryShape::Keyword);
    results.on_mount().await;

    api_mock.assert();
    assert!(matches!(results.state(), ResultsState::Loaded(r) if r.is_empty()));
}

#[tokio::test]
async fn test_empty_hits_reaches_loaded_not_failed() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/recipes/v2");
        then.status(200).json_body(serde_json::json!({"hits": []}));
    });

    let mut results = results_for(&server, "Caribbean", QueryShape::TypedFilter);
    results.on_mount().await;

    match results.state() {
        ResultsState::Loaded(recipes) => assert!(recipes.is_empty()),
        other => panic!("expected Loaded([]), got {:?}", other),
    }
}

#[tokio::test]
async fn test_server_error_fails_and_retry_reissues_the_request() {
    let server = MockServer::start();
    let mut failing_mock = server.mock(|when, then| {
        when.method(GET).path("/api/recipes/v2");
        then.status(500);
    });

    let mut results = results_for(&server, "Thai", QueryShape::TypedFilter);
    results.on_mount().await;

    failing_mock.assert();
    assert!(matches!(
        results.state(),
        ResultsState::Failed(RecipeError::HttpStatus { status: 500 })
    ));

    // Service recovers; the user-invoked retry re-issues an equivalent request.
    failing_mock.delete();
    let recovered_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/recipes/v2")
            .query_param("cuisineType", "thai")
            .query_param("q", "");
        then.status(200).json_body(serde_json::json!({
            "hits": [
                {"recipe": {"label": "Pad Thai", "image": "", "source": "X", "url": "http://x"}}
            ]
        }));
    });

    results.retry().await;

    recovered_mock.assert();
    assert_eq!(loaded_labels(results.state()), vec!["Pad Thai"]);
}

#[tokio::test]
async fn test_startup_auto_route_feeds_the_results_fetch() {
    let dir = TempDir::new().unwrap();
    let selection_path = dir.path().join("selection.json");

    // A previous run selected Greek and exited.
    {
        let store = Arc::new(FileSelectionStore::new(&selection_path));
        let navigator = Navigator::new(Arc::clone(&store));
        navigator.select(Cuisine::from("Greek"));
        wait_for_selection(&store, "Greek").await;
    }

    // Cold start: the stored cuisine routes straight to Results and
    // parameterizes the first fetch.
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/recipes/v2")
            .query_param("cuisineType", "greek");
        then.status(200).json_body(serde_json::json!({
            "hits": [
                {"recipe": {"label": "Moussaka", "image": "", "source": "Z", "url": "http://z"}}
            ]
        }));
    });

    let store = Arc::new(FileSelectionStore::new(&selection_path));
    let navigator = Navigator::new(store);
    let screen = navigator.on_selector_entry().await;
    let cuisine = match screen {
        recipe_finder::Screen::Results(cuisine) => cuisine,
        other => panic!("expected auto-route to Results, got {:?}", other),
    };

    let mut results = results_for(&server, cuisine.as_str(), QueryShape::TypedFilter);
    results.on_mount().await;

    api_mock.assert();
    assert_eq!(loaded_labels(results.state()), vec!["Moussaka"]);
}

async fn wait_for_selection(store: &Arc<FileSelectionStore>, expected: &str) {
    use recipe_finder::domain::ports::SelectionStore;

    for _ in 0..100 {
        tokio::task::yield_now().await;
        if let Ok(Some(cuisine)) = store.get().await {
            if cuisine.as_str() == expected {
                return;
            }
        }
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }
    panic!("selection '{}' was never persisted", expected);
}
