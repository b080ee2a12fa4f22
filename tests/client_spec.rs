//! Client and view behavior against a real server on a loopback port.

use slayer_catalog::api::create_router;
use slayer_catalog::client::{CatalogClient, ClientError};
use slayer_catalog::db::Database;
use slayer_catalog::models::*;
use slayer_catalog::view::{card, CatalogView};

fn empty_db() -> Database {
    let db = Database::open_memory().expect("Failed to create database");
    db.migrate().expect("Failed to migrate");
    db
}

fn seeded_db() -> Database {
    let db = empty_db();
    db.seed().expect("Failed to seed");
    db
}

/// Serve the catalog on an ephemeral port and return a client bound to it.
async fn spawn_server(db: Database) -> CatalogClient {
    let app = create_router(db);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    CatalogClient::new(format!("http://{}/api", addr))
}

/// A base URL nothing is listening on.
async fn dead_endpoint() -> CatalogClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    drop(listener);

    CatalogClient::new(format!("http://{}/api", addr))
}

#[tokio::test]
async fn get_all_preserves_backend_order() {
    let client = spawn_server(seeded_db()).await;

    let characters: Vec<Character> = client.get_all().await.expect("Fetch failed");
    assert_eq!(characters.len(), 6);
    assert_eq!(characters[0].name, "Tanjiro Kamado");

    let arcs: Vec<StoryArc> = client.get_all().await.expect("Fetch failed");
    let orders: Vec<_> = arcs.iter().map(|a| a.order).collect();
    assert_eq!(orders, [1, 2, 3, 4, 5, 6]);
}

#[tokio::test]
async fn get_by_id_fetches_one_record() {
    let client = spawn_server(seeded_db()).await;

    let technique: BreathingTechnique = client.get_by_id(1).await.expect("Fetch failed");
    assert_eq!(technique.name, "Water Breathing");
    assert_eq!(technique.forms.len(), 5);
}

#[tokio::test]
async fn unknown_id_fails_with_the_resource_kind() {
    let client = spawn_server(seeded_db()).await;

    let result = client.get_by_id::<Character>(999).await;
    assert_eq!(
        result.unwrap_err(),
        ClientError::FetchFailed {
            resource: Resource::Characters
        }
    );
}

#[tokio::test]
async fn unreachable_backend_fails_the_same_way() {
    let client = dead_endpoint().await;

    let result = client.get_all::<StoryArc>().await;
    assert_eq!(
        result.unwrap_err(),
        ClientError::FetchFailed {
            resource: Resource::StoryArcs
        }
    );
}

#[tokio::test]
async fn create_round_trips_through_the_server() {
    let client = spawn_server(empty_db()).await;

    let input = CreateCharacterInput {
        name: "Kanao Tsuyuri".to_string(),
        description: "A quiet and skilled slayer.".to_string(),
        breathing: "Flower Breathing".to_string(),
        rank: Rank::DemonSlayer,
        image: "https://example.com/portrait.jpg".to_string(),
        abilities: vec!["Keen Eyesight".to_string()],
        personality: "Reserved".to_string(),
    };

    let created: Character = client.create(&input).await.expect("Create failed");
    assert_eq!(created.id, 1);

    let all: Vec<Character> = client.get_all().await.expect("Fetch failed");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Kanao Tsuyuri");
}

#[tokio::test]
async fn health_reports_backend_state() {
    let client = spawn_server(seeded_db()).await;

    let health = client.health().await.expect("Health check failed");
    assert_eq!(health.status, "ok");
    assert_eq!(health.database, "reachable");
}

#[tokio::test]
async fn health_is_unavailable_when_nothing_listens() {
    let client = dead_endpoint().await;

    let result = client.health().await;
    assert_eq!(result.unwrap_err(), ClientError::Unavailable);
}

#[tokio::test]
async fn view_settles_ready_after_load() {
    let client = spawn_server(seeded_db()).await;

    let mut view: CatalogView<BreathingTechnique> = CatalogView::new();
    view.load(&client).await;

    assert_eq!(view.records().len(), 5);
    assert!(view.error().is_none());

    view.select(2);
    assert_eq!(view.selected().map(|t| t.name.as_str()), Some("Thunder Breathing"));

    // Water Breathing has three known users; its card elides the third.
    let water = card::technique_card(&view.records()[0]);
    assert_eq!(water.users.shown.len(), 2);
    assert_eq!(water.users.indicator(), Some("+1 more".to_string()));

    // The selected record itself stays untruncated for the detail modal.
    assert_eq!(view.selected().map(|t| t.forms.len()), Some(5));
}

#[tokio::test]
async fn view_fails_then_recovers_through_retry() {
    let dead = dead_endpoint().await;

    let mut view: CatalogView<Character> = CatalogView::new();
    view.load(&dead).await;
    assert_eq!(
        view.error(),
        Some("Failed to load characters. Please try again later.")
    );

    view.retry();
    assert!(view.is_loading());

    let live = spawn_server(seeded_db()).await;
    view.load(&live).await;
    assert_eq!(view.records().len(), 6);
}
