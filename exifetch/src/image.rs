use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use exifetch_exif::{Exif, TagMap, Value};
use tokio::sync::Notify;

use crate::fetch::{ByteFetcher, FetchConfig, FetchError, HttpFetcher};
use crate::DecodeError;

/// Load progress of a [`RemoteImage`]
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    #[default]
    NotLoaded,
    Loading,
    Loaded(Arc<Exif>),
}

/// Image behind a URL whose Exif data is fetched at most once
///
/// Failed fetches and undecodable data are cached as empty tag maps, such
/// that callers see the same result as for an image without metadata.
pub struct RemoteImage {
    url: String,
    fetcher: Arc<dyn ByteFetcher>,
    state: Mutex<LoadState>,
    notify: Notify,
}

impl std::fmt::Debug for RemoteImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteImage")
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

/// Resets an abandoned load to [`LoadState::NotLoaded`] and wakes the waiters
struct LoadingGuard<'a> {
    image: &'a RemoteImage,
    armed: bool,
}

impl LoadingGuard<'_> {
    fn finish(mut self, exif: Exif) {
        self.armed = false;
        *self.image.lock_state() = LoadState::Loaded(Arc::new(exif));
        self.image.notify.notify_waiters();
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            tracing::warn!("Loading {} was aborted", self.image.url);
            *self.image.lock_state() = LoadState::NotLoaded;
            self.image.notify.notify_waiters();
        }
    }
}

impl RemoteImage {
    pub fn new(url: impl Into<String>, fetcher: Arc<dyn ByteFetcher>) -> Self {
        Self {
            url: url.into(),
            fetcher,
            state: Mutex::new(LoadState::NotLoaded),
            notify: Notify::new(),
        }
    }

    /// Image fetched via HTTP
    pub fn with_config(url: impl Into<String>, config: FetchConfig) -> Result<Self, FetchError> {
        let fetcher = HttpFetcher::new(config)?;
        Ok(Self::new(url, Arc::new(fetcher)))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn state(&self) -> LoadState {
        self.lock_state().clone()
    }

    fn lock_state(&self) -> MutexGuard<'_, LoadState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Fetches and decodes the image
    ///
    /// Returns `false` without doing anything if the image is already loading
    /// or loaded. If the returned future is dropped before the fetch
    /// completes, the image goes back to [`LoadState::NotLoaded`] and waiting
    /// callers start a new load.
    pub async fn load(&self) -> bool {
        {
            let mut state = self.lock_state();
            if !matches!(*state, LoadState::NotLoaded) {
                tracing::debug!("{} is already loading or loaded", self.url);
                return false;
            }
            *state = LoadState::Loading;
        }

        let guard = LoadingGuard {
            image: self,
            armed: true,
        };

        let exif = match self.fetch_and_decode().await {
            Ok(tags) => Exif::from_tags(tags),
            Err(err) => {
                tracing::warn!("Failed to load Exif data of {}: {err}", self.url);
                Exif::default()
            }
        };

        guard.finish(exif);

        true
    }

    async fn fetch_and_decode(&self) -> Result<TagMap, DecodeError> {
        let data = self.fetcher.fetch(&self.url).await?;
        tracing::debug!("Decoding {} bytes of {}", data.len(), self.url);
        crate::decode(&data[..])
    }

    /// Decoded data, loading the image if that didn't happen yet
    ///
    /// Waits for a load that is in progress.
    pub async fn exif(&self) -> Arc<Exif> {
        loop {
            let notified = self.notify.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            let state = self.state();
            match state {
                LoadState::Loaded(exif) => return exif,
                LoadState::NotLoaded => {
                    self.load().await;
                }
                LoadState::Loading => notified.await,
            }
        }
    }

    pub async fn get_tag(&self, name: &str) -> Option<Value> {
        self.exif().await.get_tag(name).cloned()
    }

    /// Copy of all decoded tags
    pub async fn all_tags(&self) -> TagMap {
        self.exif().await.all_tags()
    }

    pub async fn to_display_string(&self) -> String {
        self.exif().await.to_display_string()
    }
}
