use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::SourceConfig;
use crate::profile::error::FetchError;
use crate::profile::Profile;

/// Hobby tags assigned to fetched profiles.
pub const HOBBIES: [&str; 5] = ["Painting", "Yoga", "Traveling", "Photography", "Coding"];

const IDENTITY: &str = "identity";
const PHOTO: &str = "photo";

/// Supplies batches of profiles.
///
/// Implementations swallow per-profile failures: the batch may come back
/// short or empty, never as an error.
pub trait ProfileSource: Send + Sync + 'static {
    fn fetch_batch(&self, count: usize) -> impl Future<Output = Vec<Profile>> + Send;
}

/// Fetches identities and portrait photos from two public HTTP APIs.
#[derive(Clone)]
pub struct HttpProfileSource {
    client: Client,
    config: SourceConfig,
}

#[derive(Deserialize)]
struct IdentityResponse {
    #[serde(default)]
    results: Vec<IdentityResult>,
}

#[derive(Deserialize)]
struct IdentityResult {
    name: IdentityName,
    location: IdentityLocation,
}

#[derive(Deserialize)]
struct IdentityName {
    first: String,
    last: String,
}

#[derive(Deserialize)]
struct IdentityLocation {
    city: String,
}

#[derive(Deserialize)]
struct PhotoResponse {
    urls: PhotoUrls,
    user: PhotoUser,
}

#[derive(Deserialize)]
struct PhotoUrls {
    regular: String,
}

#[derive(Deserialize)]
struct PhotoUser {
    name: String,
}

impl HttpProfileSource {
    pub fn new(config: SourceConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client, config })
    }

    async fn fetch_one(client: Client, config: SourceConfig) -> Result<Profile, FetchError> {
        let identity_url = Url::parse(&config.identity_url).map_err(|e| FetchError::Url {
            endpoint: IDENTITY,
            reason: e.to_string(),
        })?;
        let identity: IdentityResponse = get_json(&client, IDENTITY, identity_url).await?;
        let person = identity
            .results
            .into_iter()
            .next()
            .ok_or(FetchError::MissingField {
                endpoint: IDENTITY,
                field: "results",
            })?;

        let mut params = vec![("query", config.photo_query.clone())];
        if let Some(key) = config.photo_api_key() {
            params.push(("client_id", key));
        }
        let photo_url =
            Url::parse_with_params(&config.photo_url, &params).map_err(|e| FetchError::Url {
                endpoint: PHOTO,
                reason: e.to_string(),
            })?;
        let photo: PhotoResponse = get_json(&client, PHOTO, photo_url).await?;

        Ok(Profile::new(
            format!("{} {}", person.name.first, person.name.last),
            photo.urls.regular,
            person.location.city,
            pick_hobby(Uuid::new_v4().as_u128()),
            format!("Photo by {} on Unsplash", photo.user.name),
        ))
    }
}

impl ProfileSource for HttpProfileSource {
    async fn fetch_batch(&self, count: usize) -> Vec<Profile> {
        let handles: Vec<_> = (0..count)
            .map(|_| tokio::spawn(Self::fetch_one(self.client.clone(), self.config.clone())))
            .collect();

        let mut profiles = Vec::with_capacity(count);
        for (slot, handle) in handles.into_iter().enumerate() {
            let result = handle
                .await
                .map_err(|e| FetchError::Task(e.to_string()))
                .and_then(|result| result);
            match result {
                Ok(profile) => {
                    debug!(slot, name = %profile.name, "Fetched profile");
                    profiles.push(profile);
                }
                Err(err) => warn!(slot, error = %err, "Dropping profile"),
            }
        }

        info!(
            requested = count,
            received = profiles.len(),
            "Profile batch fetched"
        );
        profiles
    }
}

async fn get_json<T: DeserializeOwned>(
    client: &Client,
    endpoint: &'static str,
    url: Url,
) -> Result<T, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Request { endpoint, source })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            endpoint,
            status: status.as_u16(),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|source| FetchError::Decode { endpoint, source })
}

/// Maps random bits onto one of [`HOBBIES`].
pub fn pick_hobby(seed: u128) -> &'static str {
    HOBBIES[(seed % HOBBIES.len() as u128) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hobby_pick_covers_all_tags() {
        let picked: Vec<&str> = (0..5u128).map(pick_hobby).collect();
        assert_eq!(picked, HOBBIES.to_vec());
        assert_eq!(pick_hobby(u128::MAX), HOBBIES[(u128::MAX % 5) as usize]);
    }

    #[test]
    fn identity_payload_decodes() {
        let body = r#"{"results":[{"name":{"title":"Ms","first":"Sari","last":"Dewi"},
            "location":{"city":"Malang","country":"Indonesia"}}],"info":{"seed":"x"}}"#;
        let parsed: IdentityResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.results.len(), 1);
        assert_eq!(parsed.results[0].name.first, "Sari");
        assert_eq!(parsed.results[0].location.city, "Malang");
    }

    #[test]
    fn photo_payload_decodes() {
        let body = r#"{"id":"abc","urls":{"raw":"r","regular":"https://img.test/r.jpg"},
            "user":{"name":"Ana Lens","username":"ana"}}"#;
        let parsed: PhotoResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.urls.regular, "https://img.test/r.jpg");
        assert_eq!(parsed.user.name, "Ana Lens");
    }
}
