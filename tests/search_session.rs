use serde_json::json;

use streamlist::catalog::{normalize_response, SearchError, SearchResult, SearchSession, SearchState};
use streamlist::config::{CredentialStatus, SecureString};

const IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w200";
const GUIDANCE: &str = "Set TMDB_API_KEY in your environment and run the search again.";

fn configured() -> CredentialStatus {
    CredentialStatus::Configured(SecureString::new("test-key".to_string()))
}

fn unconfigured() -> CredentialStatus {
    CredentialStatus::Unconfigured {
        reason: "TMDB_API_KEY is not set".to_string(),
    }
}

#[test]
fn batman_record_normalizes_year_and_rating() {
    let body = json!({
        "results": [{
            "id": 1,
            "title": "Batman",
            "release_date": "1989-06-23",
            "vote_average": 7.2,
            "overview": "The Dark Knight of Gotham City...",
            "poster_path": "/x.jpg"
        }]
    });

    let results = normalize_response(&body, IMAGE_BASE).unwrap();
    assert_eq!(results.len(), 1);

    let movie = &results[0];
    assert_eq!(movie.title, "Batman");
    assert_eq!(movie.release_year.as_deref(), Some("1989"));
    assert_eq!(movie.rating, Some(7.2));
    assert_eq!(movie.rating_display(), "7.2");
    assert_eq!(
        movie.poster_url.as_deref(),
        Some("https://image.tmdb.org/t/p/w200/x.jpg")
    );
}

#[test]
fn sparse_record_normalizes_to_absent_fields() {
    let body = json!({ "results": [{ "id": 7 }] });
    let results = normalize_response(&body, IMAGE_BASE).unwrap();
    let movie = &results[0];
    assert_eq!(movie.title, "");
    assert_eq!(movie.release_year, None);
    assert_eq!(movie.year_display(), "N/A");
    assert_eq!(movie.rating, None);
    assert_eq!(movie.rating_display(), "N/A");
    assert_eq!(movie.poster_url, None);
}

#[test]
fn body_without_results_array_is_malformed() {
    for body in [json!({}), json!({ "results": 3 }), json!({ "results": {} }), json!([])] {
        let err = normalize_response(&body, IMAGE_BASE).unwrap_err();
        assert!(matches!(err, SearchError::MalformedResponse), "body: {body}");
    }
}

#[test]
fn empty_results_array_is_success() {
    let body = json!({ "results": [] });
    assert_eq!(normalize_response(&body, IMAGE_BASE).unwrap(), Vec::<SearchResult>::new());
}

#[test]
fn empty_query_is_a_silent_noop() {
    let mut session = SearchSession::new();
    assert!(session.submit("   ", &configured(), GUIDANCE).is_none());
    assert_eq!(session.state(), &SearchState::Idle);
}

#[test]
fn missing_credential_yields_error_with_guidance() {
    let mut session = SearchSession::new();
    assert!(session.submit("Batman", &unconfigured(), GUIDANCE).is_none());
    match session.state() {
        SearchState::Error { message } => {
            assert!(message.contains("TMDB_API_KEY is not set"));
            assert!(message.contains(GUIDANCE));
        }
        other => panic!("expected Error, got {other:?}"),
    }
}

#[test]
fn missing_credential_clears_previous_results() {
    let mut session = SearchSession::new();
    let token = session.submit("Batman", &configured(), GUIDANCE).unwrap();
    session.resolve(
        token,
        Ok(vec![SearchResult {
            id: 1,
            title: "Batman".to_string(),
            release_year: Some("1989".to_string()),
            rating: Some(7.2),
            overview: String::new(),
            poster_url: None,
        }]),
    );
    assert!(matches!(session.state(), SearchState::Success { .. }));

    session.submit("Robin", &unconfigured(), GUIDANCE);
    assert!(matches!(session.state(), SearchState::Error { .. }));
}

#[test]
fn submit_transitions_to_loading() {
    let mut session = SearchSession::new();
    let token = session.submit("  Batman ", &configured(), GUIDANCE);
    assert!(token.is_some());
    assert_eq!(
        session.state(),
        &SearchState::Loading {
            query: "Batman".to_string()
        }
    );
}

#[test]
fn stale_response_is_discarded() {
    let mut session = SearchSession::new();
    let first = session.submit("Batman", &configured(), GUIDANCE).unwrap();
    let _second = session.submit("Superman", &configured(), GUIDANCE).unwrap();

    session.resolve(first, Ok(vec![]));
    // The superseded outcome must not apply; the newer query is still loading
    assert_eq!(
        session.state(),
        &SearchState::Loading {
            query: "Superman".to_string()
        }
    );
}

#[test]
fn failed_query_surfaces_status_message() {
    let mut session = SearchSession::new();
    let token = session.submit("Batman", &configured(), GUIDANCE).unwrap();
    session.resolve(token, Err(SearchError::Status { status: 401 }));
    match session.state() {
        SearchState::Error { message } => assert!(message.contains("401")),
        other => panic!("expected Error, got {other:?}"),
    }
}

#[test]
fn resolved_success_carries_query_and_results() {
    let mut session = SearchSession::new();
    let token = session.submit("Batman", &configured(), GUIDANCE).unwrap();
    session.resolve(token, Ok(vec![]));
    assert_eq!(
        session.state(),
        &SearchState::Success {
            query: "Batman".to_string(),
            results: vec![]
        }
    );
}
