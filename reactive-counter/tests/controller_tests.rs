/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

//! End-to-end tests driving the demo through its controller.

use std::time::Duration;

use reactive_counter::prelude::*;
use tokio::time::sleep;

use crate::setup::initialize_tracing;
use crate::setup::surfaces::{texts, RecordingSurface};

mod setup;

fn fast_config() -> CounterConfig {
    let mut config = CounterConfig::default();
    config.timings.auto_stop_after_ms = 1_050;
    config
}

/// Tests the full scenario: counting up every tick until the auto-stop fires,
/// after which the buttons no longer reach the counter.
#[tokio::test(start_paused = true)]
async fn test_counts_up_until_auto_stop() -> anyhow::Result<()> {
    initialize_tracing();
    let surface = RecordingSurface::default();
    let controller = Controller::launch(&fast_config(), surface.clone())?;
    assert!(controller.on_up_clicked());

    sleep(Duration::from_millis(1_100)).await;

    let expected: Vec<i64> = (0..=10).collect();
    assert_eq!(surface.rendered(), texts(&expected));
    assert_eq!(controller.counter().state(), AgentState::Stopped);
    assert!(controller.auto_stop().is_some_and(AutoStopHandle::has_fired));
    assert!(!controller.display().controls_enabled());
    assert_eq!(surface.disabled_count(), 1);

    assert!(!controller.on_down_clicked());
    assert!(!controller.on_stop_clicked());

    controller.shutdown().await?;
    assert_eq!(surface.rendered().len(), expected.len());
    Ok(())
}

/// Tests that the stop button halts the counter and the auto-stop still
/// disables the controls later on.
#[tokio::test(start_paused = true)]
async fn test_stop_button_halts_counter() -> anyhow::Result<()> {
    initialize_tracing();
    let surface = RecordingSurface::default();
    let controller = Controller::launch(&fast_config(), surface.clone())?;
    controller.handle(Command::Up);

    sleep(Duration::from_millis(250)).await;
    assert!(controller.on_stop_clicked());
    controller.counter().stopped().await;
    assert_eq!(surface.rendered(), texts(&[0, 1, 2]));
    assert!(controller.display().controls_enabled());

    sleep(Duration::from_millis(1_000)).await;
    assert!(!controller.display().controls_enabled());
    assert_eq!(surface.rendered(), texts(&[0, 1, 2]));

    controller.shutdown().await
}

/// Tests that the down button reverses the count.
#[tokio::test(start_paused = true)]
async fn test_down_button_reverses_direction() -> anyhow::Result<()> {
    initialize_tracing();
    let surface = RecordingSurface::default();
    let controller = Controller::launch(&fast_config(), surface.clone())?;

    controller.on_up_clicked();
    sleep(Duration::from_millis(250)).await;
    controller.on_down_clicked();
    sleep(Duration::from_millis(300)).await;

    assert_eq!(surface.rendered(), texts(&[0, 1, 2, 3, 2, 1]));
    controller.shutdown().await
}

/// Tests that auto-stop can be switched off in configuration.
#[tokio::test(start_paused = true)]
async fn test_auto_stop_can_be_disabled() -> anyhow::Result<()> {
    initialize_tracing();
    let mut config = fast_config();
    config.behavior.enable_auto_stop = false;
    let surface = RecordingSurface::default();
    let controller = Controller::launch(&config, surface.clone())?;
    assert!(controller.auto_stop().is_none());

    sleep(Duration::from_millis(2_000)).await;
    assert_eq!(controller.counter().state(), AgentState::Running);
    assert!(controller.display().controls_enabled());
    assert!(controller.on_up_clicked());

    controller.shutdown().await?;
    assert_eq!(surface.disabled_count(), 0);
    Ok(())
}

/// Tests that render failures reach the error channel, which can only be taken once.
#[tokio::test(start_paused = true)]
async fn test_errors_are_forwarded_to_the_channel() -> anyhow::Result<()> {
    initialize_tracing();
    let surface = RecordingSurface::default();
    surface.reject_next(1);
    let mut controller = Controller::launch(&fast_config(), surface.clone())?;

    let mut errors = controller
        .take_errors()
        .expect("the first call hands out the receiver");
    assert!(controller.take_errors().is_none());

    let error = errors.recv().await.expect("a render failure is reported");
    assert!(matches!(
        error,
        CounterError::RenderDeliveryFailed { value, .. } if value == DisplayValue::new(0)
    ));

    controller.shutdown().await
}

/// Tests that shutdown gives up with an error when a display handle outlives the
/// controller and keeps the display actor alive.
#[tokio::test(start_paused = true)]
async fn test_shutdown_times_out_while_display_is_held() -> anyhow::Result<()> {
    initialize_tracing();
    let mut config = fast_config();
    config.timings.shutdown_timeout_ms = 500;
    let surface = RecordingSurface::default();
    let controller = Controller::launch(&config, surface.clone())?;
    let lingering = controller.display().clone();

    sleep(Duration::from_millis(150)).await;
    let counter = controller.counter().clone();
    let error = controller
        .shutdown()
        .await
        .expect_err("the lingering handle keeps the display running");
    assert!(error.to_string().contains("did not shut down"), "{error}");

    assert_eq!(counter.state(), AgentState::Stopped);
    assert!(lingering.controls_enabled());
    tokio::time::timeout(Duration::from_secs(1), lingering.close()).await?;
    Ok(())
}
