use std::time::Duration;

use assert_matches::assert_matches;
use dexindex::{
    FetchError,
    http::{
        RetryPolicy,
        RetryingExecutor,
    },
    rest::{
        RestClient,
        RestRetries,
    },
};
use dexindex_data::{
    ABILITY_DESCRIPTION_UNAVAILABLE,
    NO_ABILITY_DESCRIPTION,
};
use dexindex_test_utils::setup_test_environment;
use mockito::{
    Server,
    ServerGuard,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use tokio_util::sync::CancellationToken;

fn client(server: &ServerGuard) -> RestClient {
    RestClient::new(
        RetryingExecutor::new(RetryPolicy {
            timeout: Duration::from_secs(5),
            base_delay: Duration::from_millis(1),
        }),
        format!("{}/api/v2/", server.url()),
        RestRetries::default(),
    )
}

#[tokio::test]
async fn fetches_pokemon_by_normalized_name() {
    setup_test_environment();

    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/pokemon/nidoran-f")
        .with_status(200)
        .with_body(
            json!({
                "id": 29,
                "name": "nidoran-f",
                "height": 4,
                "weight": 70,
                "types": [{ "slot": 1, "type": { "name": "poison", "url": "" } }],
                "stats": [],
                "abilities": [],
                "species": { "name": "nidoran-f", "url": "https://pokeapi.co/api/v2/pokemon-species/29/" },
                "sprites": {
                    "front_default": "https://example.com/29.png",
                    "other": {},
                },
            })
            .to_string(),
        )
        .create_async()
        .await;

    let record = client(&server)
        .pokemon("Nidoran♀", &CancellationToken::new())
        .await
        .unwrap();
    mock.assert_async().await;

    assert_eq!(record.id, 29);
    assert_eq!(record.custom_id, None);
    assert_eq!(
        record.sprites.official_artwork.as_deref(),
        Some("https://example.com/29.png")
    );
    assert_eq!(
        record.sprites.home.as_deref(),
        Some("https://example.com/29.png")
    );
}

#[tokio::test]
async fn missing_pokemon_is_not_found_after_one_request() {
    setup_test_environment();

    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/pokemon/missingno")
        .with_status(404)
        .expect(1)
        .create_async()
        .await;

    assert_matches!(
        client(&server)
            .pokemon("MissingNo.", &CancellationToken::new())
            .await,
        Err(FetchError::NotFound { .. })
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn species_is_retried_once() {
    setup_test_environment();

    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/pokemon-species/25")
        .with_status(500)
        .expect(2)
        .create_async()
        .await;

    assert_matches!(
        client(&server)
            .species(25, &CancellationToken::new())
            .await,
        Err(FetchError::Http { .. })
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn fetches_evolution_chain_by_url() {
    setup_test_environment();

    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/evolution-chain/10/")
        .with_status(200)
        .with_body(
            json!({
                "id": 10,
                "chain": {
                    "species": { "name": "pichu", "url": "" },
                    "is_baby": true,
                    "evolution_details": [],
                    "evolves_to": [{
                        "species": { "name": "pikachu", "url": "" },
                        "is_baby": false,
                        "evolution_details": [{ "min_level": null, "trigger": { "name": "level-up", "url": "" } }],
                        "evolves_to": [{
                            "species": { "name": "raichu", "url": "" },
                            "is_baby": false,
                            "evolution_details": [{ "trigger": { "name": "use-item", "url": "" }, "item": { "name": "thunder-stone", "url": "" } }],
                            "evolves_to": [],
                        }],
                    }],
                },
            })
            .to_string(),
        )
        .create_async()
        .await;

    let url = format!("{}/api/v2/evolution-chain/10/", server.url());
    let chain = client(&server)
        .evolution_chain(&url, &CancellationToken::new())
        .await
        .unwrap();
    mock.assert_async().await;

    assert_eq!(chain.chain.walk(), vec!["pichu", "pikachu", "raichu"]);
    assert_eq!(chain.chain.depth(), 3);
}

#[tokio::test]
async fn describes_ability_with_fallbacks() {
    setup_test_environment();

    let mut server = Server::new_async().await;
    let described = server
        .mock("GET", "/api/v2/ability/9/")
        .with_status(200)
        .with_body(
            json!({
                "name": "static",
                "effect_entries": [
                    { "effect": "Long text.", "short_effect": "Has a 30% chance of paralyzing attacking Pokémon on contact.", "language": { "name": "en", "url": "" } },
                ],
                "flavor_text_entries": [],
            })
            .to_string(),
        )
        .create_async()
        .await;
    let empty = server
        .mock("GET", "/api/v2/ability/300/")
        .with_status(200)
        .with_body(r#"{ "name": "mystery" }"#)
        .create_async()
        .await;
    let broken = server
        .mock("GET", "/api/v2/ability/404/")
        .with_status(404)
        .create_async()
        .await;

    let client = client(&server);
    let cancel = CancellationToken::new();
    assert_eq!(
        client
            .ability_description(&format!("{}/api/v2/ability/9/", server.url()), &cancel)
            .await,
        "Has a 30% chance of paralyzing attacking Pokémon on contact."
    );
    assert_eq!(
        client
            .ability_description(&format!("{}/api/v2/ability/300/", server.url()), &cancel)
            .await,
        NO_ABILITY_DESCRIPTION
    );
    assert_eq!(
        client
            .ability_description(&format!("{}/api/v2/ability/404/", server.url()), &cancel)
            .await,
        ABILITY_DESCRIPTION_UNAVAILABLE
    );
    described.assert_async().await;
    empty.assert_async().await;
    broken.assert_async().await;
}
