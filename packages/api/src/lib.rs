//! # API crate — REST repository client for the SingersRepo backend
//!
//! This crate is the single place the application talks to the network. It
//! performs authenticated CRUD calls against the backend for genres and songs,
//! attaching the bearer token from the caller's session, and converts every
//! failure into the three-way [`ApiError`] taxonomy.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Backend base URL (`SINGERSREPO_API_URL` at compile time) and endpoint joining |
//! | [`error`] | [`ApiError`] — pre-flight, server-reported, and transport failures |
//!
//! ## Operations exposed here
//!
//! - **Auth**: [`login`], [`register`] — exchange credentials for a token;
//!   the caller persists the resulting session.
//! - **Genres**: [`list_genres`], [`list_genres_for_user`], [`create_genre`] —
//!   callers follow the refetch-after-write policy and re-list instead of
//!   merging locally.
//! - **Songs**: [`add_song`] — on success the caller clears its form and
//!   refetches the owning genre.
//!
//! Every protected operation checks the session **before** issuing a request:
//! with no session it fails fast with [`ApiError::NotAuthenticated`] and the
//! network is never touched.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub mod config;
pub mod error;

pub use config::ApiConfig;
pub use error::ApiError;
pub use store::{Genre, Session, Song, SongDraft};

/// Success payload from the auth endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user_id: String,
    /// Optional human-readable message, surfaced to the user verbatim.
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenresEnvelope {
    #[serde(default)]
    genres: Vec<Genre>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateGenreBody<'a> {
    title: &'a str,
    user_id: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AddSongBody<'a> {
    #[serde(flatten)]
    draft: &'a SongDraft,
    genre_id: &'a str,
    user_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Shared HTTP client (lazy singleton).
fn http() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(reqwest::Client::new)
}

/// Turn a non-2xx response into an [`ApiError`], surfacing the body's
/// `message` verbatim when one is present.
async fn error_from_response(response: reqwest::Response) -> ApiError {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(ErrorBody {
            message: Some(message),
        }) if !message.is_empty() => ApiError::Server(message),
        _ => ApiError::Server(format!("Request failed with status {status}")),
    }
}

async fn auth_request(
    config: &ApiConfig,
    mode: &str,
    email: &str,
    password: &str,
) -> Result<AuthResponse, ApiError> {
    let response = http()
        .post(config.endpoint(&format!("auth/{mode}")))
        .json(&Credentials {
            username: email,
            password,
        })
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(error_from_response(response).await);
    }

    Ok(response.json::<AuthResponse>().await?)
}

/// Exchange credentials for a session token via `POST /auth/login`.
pub async fn login(
    config: &ApiConfig,
    email: &str,
    password: &str,
) -> Result<AuthResponse, ApiError> {
    auth_request(config, "login", email, password).await
}

/// Create an account via `POST /auth/register`. Same response shape as login.
pub async fn register(
    config: &ApiConfig,
    email: &str,
    password: &str,
) -> Result<AuthResponse, ApiError> {
    auth_request(config, "register", email, password).await
}

/// List all genres visible to the session (`GET /genres`).
///
/// The caller replaces its whole in-memory list with the result — there is no
/// incremental merge.
pub async fn list_genres(
    config: &ApiConfig,
    session: Option<&Session>,
) -> Result<Vec<Genre>, ApiError> {
    let session = session.ok_or(ApiError::NotAuthenticated)?;

    let response = http()
        .get(config.endpoint("genres"))
        .bearer_auth(&session.token)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(error_from_response(response).await);
    }

    Ok(response.json::<GenresEnvelope>().await?.genres)
}

/// List genres owned by a specific user (`GET /genres/user/{userId}`).
pub async fn list_genres_for_user(
    config: &ApiConfig,
    session: Option<&Session>,
    user_id: &str,
) -> Result<Vec<Genre>, ApiError> {
    let session = session.ok_or(ApiError::NotAuthenticated)?;

    let response = http()
        .get(config.endpoint(&format!("genres/user/{user_id}")))
        .bearer_auth(&session.token)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(error_from_response(response).await);
    }

    Ok(response.json::<GenresEnvelope>().await?.genres)
}

/// Create a genre (`POST /genres`).
///
/// The response body is not relied upon; callers re-list genres after a
/// successful create (refetch-after-write).
pub async fn create_genre(
    config: &ApiConfig,
    session: Option<&Session>,
    title: &str,
) -> Result<(), ApiError> {
    let session = session.ok_or(ApiError::NotAuthenticated)?;

    let response = http()
        .post(config.endpoint("genres"))
        .bearer_auth(&session.token)
        .json(&CreateGenreBody {
            title,
            user_id: &session.user_id,
        })
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(error_from_response(response).await);
    }

    Ok(())
}

/// Add a song to a genre (`POST /genres/songs`).
///
/// On success the caller clears its form and refetches the owning genre.
pub async fn add_song(
    config: &ApiConfig,
    session: Option<&Session>,
    genre_id: &str,
    draft: &SongDraft,
) -> Result<(), ApiError> {
    let session = session.ok_or(ApiError::NotAuthenticated)?;

    let response = http()
        .post(config.endpoint("genres/songs"))
        .bearer_auth(&session.token)
        .json(&AddSongBody {
            draft,
            genre_id,
            user_id: &session.user_id,
        })
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(error_from_response(response).await);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Pre-flight guard tests run against an unroutable config: if the guard
    // failed and a request went out, the error would be Network, not
    // NotAuthenticated.
    fn dead_config() -> ApiConfig {
        ApiConfig::new("http://127.0.0.1:1")
    }

    #[tokio::test]
    async fn test_list_genres_requires_session() {
        let err = list_genres(&dead_config(), None).await.unwrap_err();
        assert!(matches!(err, ApiError::NotAuthenticated));
    }

    #[tokio::test]
    async fn test_list_genres_for_user_requires_session() {
        let err = list_genres_for_user(&dead_config(), None, "u1")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotAuthenticated));
    }

    #[tokio::test]
    async fn test_create_genre_requires_session() {
        let err = create_genre(&dead_config(), None, "Carnatic")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotAuthenticated));
    }

    #[tokio::test]
    async fn test_add_song_requires_session() {
        let draft = SongDraft::from_form("S", "M", "Si", "MD", "C", "", "");
        let err = add_song(&dead_config(), None, "g1", &draft)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotAuthenticated));
    }

    #[test]
    fn test_auth_response_wire_shape() {
        let json = r#"{"token":"t1","userId":"u1","message":"Welcome back"}"#;
        let parsed: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.token, "t1");
        assert_eq!(parsed.user_id, "u1");
        assert_eq!(parsed.message.as_deref(), Some("Welcome back"));

        // message is optional
        let parsed: AuthResponse =
            serde_json::from_str(r#"{"token":"t1","userId":"u1"}"#).unwrap();
        assert!(parsed.message.is_none());
    }

    #[test]
    fn test_credentials_wire_shape() {
        let json = serde_json::to_string(&Credentials {
            username: "a@b.com",
            password: "secret",
        })
        .unwrap();
        assert_eq!(json, r#"{"username":"a@b.com","password":"secret"}"#);
    }

    #[test]
    fn test_create_genre_body_wire_shape() {
        let json = serde_json::to_string(&CreateGenreBody {
            title: "Carnatic",
            user_id: "u1",
        })
        .unwrap();
        assert_eq!(json, r#"{"title":"Carnatic","userId":"u1"}"#);
    }

    #[test]
    fn test_add_song_body_flattens_draft() {
        let draft = SongDraft::from_form("Song", "Movie", "Singer", "MD", "C#", "", "");
        let json = serde_json::to_string(&AddSongBody {
            draft: &draft,
            genre_id: "g1",
            user_id: "u1",
        })
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["songName"], "Song");
        assert_eq!(value["actualPitch"], "C#");
        assert_eq!(value["genreId"], "g1");
        assert_eq!(value["userId"], "u1");
        // blank optionals never reach the wire
        assert!(value.get("practisedPitch").is_none());
        assert!(value.get("notes").is_none());
    }

    #[test]
    fn test_genres_envelope_tolerates_missing_list() {
        let parsed: GenresEnvelope = serde_json::from_str("{}").unwrap();
        assert!(parsed.genres.is_empty());
    }
}
