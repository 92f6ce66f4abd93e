mod common;

use common::{settle, Fixture, SCENE_URL};
use hero_sequencer::config::SequenceConfig;
use hero_sequencer::sequence::{SequenceError, SequenceRuntime, Stage, Trigger};
use hero_sequencer::shutdown::ShutdownCoordinator;
use hero_sequencer::surface::{Surface, SurfaceKind};

#[tokio::test(start_paused = true)]
async fn zero_durations_reach_hero_after_two_turns() {
    let fx = Fixture::new();
    let shutdown = ShutdownCoordinator::new();
    let (handle, _task) = SequenceRuntime::spawn(
        SequenceConfig::with_durations(0, 0),
        fx.surfaces(),
        shutdown.handle(),
    );

    settle(1).await;
    let snapshot = handle.snapshot().await.unwrap();

    assert_eq!(snapshot.stage, Stage::Hero);
    assert_eq!(snapshot.visible, vec![SurfaceKind::Hero]);
    assert_eq!(fx.frame.current_source(), SCENE_URL);
}

#[tokio::test(start_paused = true)]
async fn early_exit_through_handle_loads_once() {
    let fx = Fixture::new();
    let shutdown = ShutdownCoordinator::new();
    let (handle, _task) =
        SequenceRuntime::spawn(SequenceConfig::default(), fx.surfaces(), shutdown.handle());

    settle(4001).await;
    assert_eq!(handle.snapshot().await.unwrap().stage, Stage::Welcome);

    handle.trigger(Trigger::EarlyExit).unwrap();
    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.stage, Stage::Hero);
    assert!(!snapshot.welcome_timer_pending);

    settle(10_000).await;
    let later = handle.snapshot().await.unwrap();
    assert_eq!(later, snapshot);
    assert_eq!(fx.frame.loads(), vec![SCENE_URL.to_string()]);
}

#[tokio::test(start_paused = true)]
async fn programmatic_close_and_restart() {
    let fx = Fixture::new();
    let shutdown = ShutdownCoordinator::new();
    let (handle, _task) =
        SequenceRuntime::spawn(SequenceConfig::default(), fx.surfaces(), shutdown.handle());

    handle.reveal_hero().unwrap();
    handle.close().unwrap();
    let closed = handle.snapshot().await.unwrap();
    assert_eq!(closed.stage, Stage::Hero);
    assert!(!closed.hero_open);
    assert!(closed.visible.is_empty());
    assert_eq!(fx.frame.current_source(), "");

    handle.restart().unwrap();
    let restarted = handle.snapshot().await.unwrap();
    assert_eq!(restarted.stage, Stage::Loading);
    assert_eq!(restarted.run, 2);
    assert!(restarted.loader_timer_pending);
    assert_eq!(restarted.visible, vec![SurfaceKind::Loader]);
}

#[tokio::test(start_paused = true)]
async fn close_during_loading_leaves_timer_chain_running() {
    let fx = Fixture::new();
    let shutdown = ShutdownCoordinator::new();
    let (handle, _task) =
        SequenceRuntime::spawn(SequenceConfig::default(), fx.surfaces(), shutdown.handle());

    handle.close().unwrap();
    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.stage, Stage::Loading);
    assert!(!snapshot.visible.contains(&SurfaceKind::Hero));
    assert!(snapshot.loader_timer_pending);

    // close() does not cancel timers, so the chain still reaches the hero
    settle(7001).await;
    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.stage, Stage::Hero);
    assert_eq!(snapshot.visible, vec![SurfaceKind::Hero]);
}

#[tokio::test(start_paused = true)]
async fn shutdown_stops_runtime_and_timers() {
    let fx = Fixture::new();
    let shutdown = ShutdownCoordinator::new();
    let (handle, task) =
        SequenceRuntime::spawn(SequenceConfig::default(), fx.surfaces(), shutdown.handle());

    assert_eq!(handle.snapshot().await.unwrap().stage, Stage::Loading);
    shutdown.signal();
    task.await.unwrap();

    assert!(matches!(handle.restart(), Err(SequenceError::Stopped)));
    settle(10_000).await;
    assert!(fx.loader.is_visible(), "no transition after shutdown");
    assert!(!fx.welcome.is_visible());
}
