//! Scan and regenerate lifecycle controller.
//!
//! Owns start/cancel/quit orchestration and emits events for presentation layers.

use crate::engine::{ScanControl, ScanEngine, StdRandom};
use crate::error::ScanError;
use crate::model::{AppConfig, AppEvent, InfoEvent};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Commands emitted by UI layers.
#[derive(Debug, Clone)]
pub(crate) enum UiCommand {
    StartScan,
    CancelScan,
    Regenerate,
    /// Drop a pending regenerate without emitting `RecipeReady`.
    CancelRegenerate,
    Quit,
}

/// Internal handle for a running scan task.
struct ScanCtx {
    ctrl_tx: UnboundedSender<ScanControl>,
    handle: Option<JoinHandle<Result<Vec<String>, ScanError>>>,
}

/// Spawn a new scan and return its control handle. `scan_no` varies the seed
/// so repeated scans differ while staying reproducible.
fn start_scan(cfg: &AppConfig, scan_no: u64, event_tx: UnboundedSender<AppEvent>) -> ScanCtx {
    let rng = StdRandom::from_seed_option(cfg.seed.map(|s| s.wrapping_add(scan_no)));
    let (ctrl_tx, ctrl_rx) = mpsc::unbounded_channel::<ScanControl>();
    let engine = ScanEngine::new(cfg, Box::new(rng));
    let handle = tokio::spawn(async move { engine.run(event_tx, ctrl_rx).await });
    ScanCtx {
        ctrl_tx,
        handle: Some(handle),
    }
}

fn start_regenerate(cfg: &AppConfig) -> JoinHandle<()> {
    let delay = cfg.regenerate_delay;
    tokio::spawn(async move { tokio::time::sleep(delay).await })
}

/// Run scans and regenerate timers on behalf of the UI until it quits.
pub(crate) async fn run_controller(
    cfg: &AppConfig,
    event_tx: UnboundedSender<AppEvent>,
    mut cmd_rx: UnboundedReceiver<UiCommand>,
) -> anyhow::Result<()> {
    let mut scan_ctx: Option<ScanCtx> = None;
    let mut regen: Option<JoinHandle<()>> = None;
    let mut scans_started: u64 = 0;

    loop {
        tokio::select! {
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(UiCommand::StartScan) => {
                        if scan_ctx.is_some() {
                            let _ = event_tx.send(AppEvent::Info(InfoEvent::ScanAlreadyRunning));
                        } else {
                            scan_ctx = Some(start_scan(cfg, scans_started, event_tx.clone()));
                            scans_started += 1;
                        }
                    }
                    Some(UiCommand::CancelScan) => {
                        if let Some(ctx) = &scan_ctx {
                            let _ = ctx.ctrl_tx.send(ScanControl::Cancel);
                        } else {
                            let _ = event_tx.send(AppEvent::Info(InfoEvent::NoScanToCancel));
                        }
                    }
                    Some(UiCommand::Regenerate) => {
                        if regen.is_some() {
                            let _ = event_tx.send(AppEvent::Info(InfoEvent::RegenerateAlreadyRunning));
                        } else {
                            info!(delay = ?cfg.regenerate_delay, "generating a different recipe");
                            let _ = event_tx.send(AppEvent::Generating);
                            regen = Some(start_regenerate(cfg));
                        }
                    }
                    Some(UiCommand::CancelRegenerate) => {
                        if let Some(h) = regen.take() {
                            info!("pending regenerate dropped");
                            h.abort();
                        }
                    }
                    Some(UiCommand::Quit) | None => {
                        if let Some(ctx) = &scan_ctx {
                            let _ = ctx.ctrl_tx.send(ScanControl::Cancel);
                        }
                        if let Some(h) = regen.take() {
                            h.abort();
                        }
                        break;
                    }
                }
            }
            // Do not take the JoinHandle before this branch wins; otherwise it can be dropped
            // if another select branch is chosen, and we'll never observe completion.
            maybe_done = async {
                if let Some(ctx) = &mut scan_ctx {
                    if let Some(h) = ctx.handle.as_mut() {
                        return Some(h.await);
                    }
                }
                futures::future::pending().await
            } => {
                scan_ctx = None;
                match maybe_done {
                    Some(Ok(Ok(ingredients))) => {
                        let _ = event_tx.send(AppEvent::ScanCompleted { ingredients });
                    }
                    Some(Ok(Err(e))) => {
                        warn!(error = %e, "scan did not complete");
                        let _ = event_tx.send(AppEvent::ScanFailed { reason: e.to_string() });
                    }
                    Some(Err(e)) => {
                        let _ = event_tx.send(AppEvent::ScanFailed {
                            reason: format!("Scan task failed: {e}"),
                        });
                    }
                    None => {}
                }
            }
            done = async {
                if let Some(h) = regen.as_mut() {
                    return Some(h.await);
                }
                futures::future::pending().await
            } => {
                regen = None;
                if let Some(Err(e)) = done {
                    let _ = event_tx.send(AppEvent::Info(InfoEvent::Message(format!(
                        "Recipe generation failed: {e}"
                    ))));
                } else {
                    let _ = event_tx.send(AppEvent::RecipeReady);
                }
            }
        }
    }

    Ok(())
}
