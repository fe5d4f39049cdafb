//! Re-render on file changes.

use std::error::Error;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use notify::{EventKind, RecursiveMode, Watcher};

use crate::cli::RenderArgs;

/// Bursts of events closer together than this trigger one re-render.
const SETTLE: Duration = Duration::from_millis(150);

/// Blocks, calling `rerender` whenever the scene (or config) file changes.
pub(crate) fn run(args: &RenderArgs, mut rerender: impl FnMut()) -> Result<(), Box<dyn Error>> {
    let (tx, rx) = mpsc::channel::<()>();
    let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
        if let Ok(event) = res {
            match event.kind {
                EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_) | EventKind::Any => {
                    let _ = tx.send(());
                }
                _ => {}
            }
        }
    })?;

    let mut paths: Vec<PathBuf> = vec![args.scene.clone()];
    paths.extend(args.config.clone());
    for p in &paths {
        watcher.watch(p, RecursiveMode::NonRecursive)?;
        log::info!(target: "watch", "watching {}", p.display());
    }

    while rx.recv().is_ok() {
        while rx.recv_timeout(SETTLE).is_ok() {}
        log::debug!(target: "watch", "change detected, re-rendering");
        println!();
        rerender();
    }
    Ok(())
}
