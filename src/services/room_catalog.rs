//! Room catalog backed by the hotel's backend REST API.
//!
//! Rate sheets are read from `GET {base}/rooms` and `GET {base}/rooms/{id}`
//! and kept in a [`TtlCache`] so that quote requests don't hit the backend
//! on every date change. A catalog can also be built from a fixed room list
//! when no backend is configured.

use std::time::Duration;

use reqwest::StatusCode;
use url::Url;

use crate::error::ApiError;
use crate::models::room::Room;
use crate::services::cache_service::TtlCache;

const ROOMS_KEY: &str = "rooms";

#[derive(Debug, Clone)]
pub enum CachedRooms {
    All(Vec<Room>),
    One(Room),
}

enum RoomSource {
    Backend { http: reqwest::Client, base_url: Url },
    Static(Vec<Room>),
}

pub struct RoomCatalog {
    source: RoomSource,
    cache: TtlCache<String, CachedRooms>,
}

impl RoomCatalog {
    pub fn from_backend(
        base_url: Url,
        timeout: Duration,
        cache_capacity: usize,
        cache_ttl: Duration,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            source: RoomSource::Backend {
                http,
                base_url: with_trailing_slash(base_url),
            },
            cache: TtlCache::new(cache_capacity, cache_ttl),
        })
    }

    pub fn from_rooms(rooms: Vec<Room>) -> Self {
        Self {
            source: RoomSource::Static(rooms),
            cache: TtlCache::new(1, Duration::ZERO),
        }
    }

    pub fn is_backed(&self) -> bool {
        matches!(self.source, RoomSource::Backend { .. })
    }

    pub async fn list_rooms(&self) -> Result<Vec<Room>, ApiError> {
        let (http, base_url) = match &self.source {
            RoomSource::Static(rooms) => return Ok(rooms.clone()),
            RoomSource::Backend { http, base_url } => (http, base_url),
        };

        if let Some(CachedRooms::All(rooms)) = self.cache.get(&ROOMS_KEY.to_string()) {
            log::debug!("Using cached room list ({} rooms)", rooms.len());
            return Ok(rooms);
        }

        let url = base_url.join("rooms")?;
        log::info!("Fetching room list from {}", url);
        let response = http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Backend(format!(
                "room list returned {}",
                response.status()
            )));
        }

        let rooms: Vec<Room> = response.json().await?;
        self.cache
            .insert(ROOMS_KEY.to_string(), CachedRooms::All(rooms.clone()));
        Ok(rooms)
    }

    pub async fn get_room(&self, id: &str) -> Result<Room, ApiError> {
        let (http, base_url) = match &self.source {
            RoomSource::Static(rooms) => {
                return rooms
                    .iter()
                    .find(|room| room.id == id)
                    .cloned()
                    .ok_or_else(|| ApiError::RoomNotFound(id.to_string()));
            }
            RoomSource::Backend { http, base_url } => (http, base_url),
        };

        let key = room_key(id);
        if let Some(CachedRooms::One(room)) = self.cache.get(&key) {
            log::debug!("Using cached rate sheet for room {}", id);
            return Ok(room);
        }

        let mut url = base_url.join("rooms/")?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Backend("backend url cannot be a base".to_string()))?
            .pop_if_empty()
            .push(id);

        log::info!("Fetching room {} from {}", id, url);
        let response = http.get(url).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => Err(ApiError::RoomNotFound(id.to_string())),
            status if status.is_success() => {
                let room: Room = response.json().await?;
                self.cache.insert(key, CachedRooms::One(room.clone()));
                Ok(room)
            }
            status => Err(ApiError::Backend(format!(
                "room {} returned {}",
                id, status
            ))),
        }
    }

    pub fn invalidate(&self, id: &str) {
        self.cache.invalidate(&room_key(id));
        self.cache.invalidate(&ROOMS_KEY.to_string());
    }

    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }
}

fn room_key(id: &str) -> String {
    format!("{}/{}", ROOMS_KEY, id)
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
