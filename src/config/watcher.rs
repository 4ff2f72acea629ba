//! Configuration file watcher for hot reload.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config as NotifyConfig, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::load_json;
use crate::config::schema::Config;

const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Watches a configuration file and delivers reloaded configs.
///
/// A reload that fails to load or validate is logged and dropped; consumers
/// keep running on the last good configuration.
pub struct ConfigWatcher {
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<Config>,
}

impl ConfigWatcher {
    /// Create a new ConfigWatcher.
    ///
    /// Returns the watcher and a receiver for configuration updates.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<Config>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                update_tx,
            },
            update_rx,
        )
    }

    /// Start watching the file in a background thread.
    ///
    /// The returned watcher handle must be kept alive for events to flow.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let tx = self.update_tx;
        let path = self.path;
        let watched = path.clone();

        // Editors fire several events per save; suppress reloads that
        // produce a config identical to the last one delivered.
        let mut last_sent: Option<Config> = None;

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        match load_json(&path) {
                            Ok(new_config) => {
                                if last_sent.as_ref() == Some(&new_config) {
                                    return;
                                }
                                tracing::info!(
                                    path = %path.display(),
                                    "Config file changed, applying reload"
                                );
                                last_sent = Some(new_config.clone());
                                let _ = tx.send(new_config);
                            }
                            Err(e) => {
                                tracing::error!(
                                    path = %path.display(),
                                    "Failed to reload config: {}. Keeping current configuration.",
                                    e
                                );
                            }
                        }
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            NotifyConfig::default().with_poll_interval(POLL_INTERVAL),
        )?;

        watcher.watch(&watched, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?watched, "Config watcher started");
        Ok(watcher)
    }
}
