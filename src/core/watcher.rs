//! Rebuild-on-change for the modules directory.
//!
//! Every relevant modification triggers one full build, run to completion
//! before the next event is looked at. There is no debounce: two saves in a
//! row mean two builds.

use crate::config::AssetConfig;
use crate::core::AssetPipeline;
use crate::domain::model::BuildReport;
use crate::utils::error::Result;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchState {
    Idle,
    Building,
    Stopped,
}

pub struct ChangeHandler<'a, P: AssetPipeline> {
    pipeline: &'a P,
    extension: &'static str,
    output_name: String,
    state: WatchState,
}

impl<'a, P: AssetPipeline> ChangeHandler<'a, P> {
    pub fn new(pipeline: &'a P, config: &AssetConfig) -> Self {
        Self {
            pipeline,
            extension: config.kind.extension(),
            output_name: config.output_name(),
            state: WatchState::Idle,
        }
    }

    pub fn state(&self) -> WatchState {
        self.state
    }

    /// Module sources only; the artifact itself never triggers a rebuild.
    pub fn is_relevant(&self, path: &Path) -> bool {
        let has_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == self.extension);
        let is_output = path
            .file_name()
            .is_some_and(|name| name.to_string_lossy() == self.output_name);

        has_extension && !is_output
    }

    /// Runs a build for a relevant change, `None` when the event is ignored.
    pub async fn on_modified(&mut self, path: &Path) -> Option<Result<BuildReport>> {
        if self.state == WatchState::Stopped || !self.is_relevant(path) {
            tracing::debug!("Ignoring change: {}", path.display());
            return None;
        }

        self.state = WatchState::Building;
        tracing::info!("Rebuilding after change to {}", path.display());
        let result = self.pipeline.build().await;
        self.state = WatchState::Idle;

        Some(result)
    }

    pub fn stop(&mut self) {
        self.state = WatchState::Stopped;
    }
}

/// Watches `config.modules_dir` until Ctrl+C, calling `on_build` with the
/// outcome of every build it triggers.
#[cfg(feature = "watch")]
pub async fn watch_modules<P, F>(pipeline: &P, config: &AssetConfig, mut on_build: F) -> Result<()>
where
    P: AssetPipeline,
    F: FnMut(&Path, Result<BuildReport>),
{
    use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
    use std::path::PathBuf;
    use tokio::sync::mpsc;

    let (tx, mut rx) = mpsc::channel::<PathBuf>(1000);

    let mut watcher = RecommendedWatcher::new(
        move |res: std::result::Result<Event, notify::Error>| match res {
            Ok(event) if matches!(event.kind, EventKind::Modify(_)) => {
                for path in event.paths {
                    let _ = tx.blocking_send(path);
                }
            }
            Ok(_) => {}
            Err(e) => tracing::warn!("Watch error: {}", e),
        },
        Config::default(),
    )?;

    watcher.watch(&config.modules_dir, RecursiveMode::NonRecursive)?;
    tracing::info!("Watching {:?} for changes", config.modules_dir);

    let mut handler = ChangeHandler::new(pipeline, config);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            received = rx.recv() => {
                let Some(path) = received else { break };
                if let Some(result) = handler.on_modified(&path).await {
                    on_build(&path, result);
                }
            }
            _ = &mut ctrl_c => break,
        }
    }

    handler.stop();
    tracing::info!("Watcher stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::SplitReport;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingPipeline {
        builds: AtomicUsize,
    }

    #[async_trait]
    impl AssetPipeline for CountingPipeline {
        async fn split(&self) -> Result<SplitReport> {
            Ok(SplitReport::default())
        }

        async fn build(&self) -> Result<BuildReport> {
            self.builds.fetch_add(1, Ordering::SeqCst);
            Ok(BuildReport::default())
        }
    }

    fn css_config() -> AssetConfig {
        crate::config::profile::ProfileConfig::builtin(crate::config::AssetKind::Css)
            .unwrap()
            .asset_config()
    }

    #[test]
    fn test_relevance_filter() {
        let pipeline = CountingPipeline::default();
        let config = css_config();
        let handler = ChangeHandler::new(&pipeline, &config);

        assert!(handler.is_relevant(Path::new("app/static/css/modules/02-navbar.css")));
        assert!(!handler.is_relevant(Path::new("app/static/css/modules/02-navbar.css~")));
        assert!(!handler.is_relevant(Path::new("app/static/css/modules/notes.txt")));
        assert!(!handler.is_relevant(Path::new("app/static/css/main.min.css")));
    }

    #[tokio::test]
    async fn test_every_relevant_change_triggers_a_build() {
        let pipeline = CountingPipeline::default();
        let config = css_config();
        let mut handler = ChangeHandler::new(&pipeline, &config);

        let path = Path::new("modules/01-reset.css");
        assert!(handler.on_modified(path).await.is_some());
        assert!(handler.on_modified(path).await.is_some());
        assert!(handler.on_modified(Path::new("main.min.css")).await.is_none());

        assert_eq!(pipeline.builds.load(Ordering::SeqCst), 2);
        assert_eq!(handler.state(), WatchState::Idle);
    }

    #[tokio::test]
    async fn test_stopped_handler_ignores_changes() {
        let pipeline = CountingPipeline::default();
        let config = css_config();
        let mut handler = ChangeHandler::new(&pipeline, &config);

        handler.stop();
        assert!(handler
            .on_modified(Path::new("modules/01-reset.css"))
            .await
            .is_none());
        assert_eq!(handler.state(), WatchState::Stopped);
        assert_eq!(pipeline.builds.load(Ordering::SeqCst), 0);
    }
}
