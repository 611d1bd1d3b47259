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

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::ThreadId;
use std::time::Duration;

use reactive_counter::prelude::*;

#[derive(Debug, Default)]
struct SurfaceLog {
    rendered: Vec<String>,
    disabled: usize,
    threads: Vec<ThreadId>,
}

/// A presentation surface that records everything it is asked to do.
///
/// Clones share the same log, so a test keeps one clone and hands the other to
/// the display actor.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    log: Arc<Mutex<SurfaceLog>>,
    reject_next: Arc<AtomicUsize>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
    render_delay: Option<Duration>,
}

impl RecordingSurface {
    /// A surface that blocks its thread for `delay` on every render.
    pub fn with_render_delay(delay: Duration) -> Self {
        Self {
            render_delay: Some(delay),
            ..Self::default()
        }
    }

    /// Makes the next `count` renders fail.
    pub fn reject_next(&self, count: usize) {
        self.reject_next.store(count, Ordering::SeqCst);
    }

    /// Texts rendered successfully, in order.
    pub fn rendered(&self) -> Vec<String> {
        self.log.lock().unwrap().rendered.clone()
    }

    /// How many times controls were disabled.
    pub fn disabled_count(&self) -> usize {
        self.log.lock().unwrap().disabled
    }

    /// The thread each render (accepted or rejected) ran on.
    pub fn render_threads(&self) -> Vec<ThreadId> {
        self.log.lock().unwrap().threads.clone()
    }

    /// The largest number of renders ever observed running at the same time.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

impl PresentationSurface for RecordingSurface {
    fn render(&mut self, text: &str) -> anyhow::Result<()> {
        let in_flight = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(in_flight, Ordering::SeqCst);
        if let Some(delay) = self.render_delay {
            std::thread::sleep(delay);
        }

        let rejected = self
            .reject_next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        {
            let mut log = self.log.lock().unwrap();
            log.threads.push(std::thread::current().id());
            if !rejected {
                log.rendered.push(text.to_string());
            }
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        if rejected {
            anyhow::bail!("surface rejected {text}");
        }
        Ok(())
    }

    fn disable_controls(&mut self) -> anyhow::Result<()> {
        self.log.lock().unwrap().disabled += 1;
        Ok(())
    }
}

/// Helper for asserting on rendered text.
pub fn texts(values: &[i64]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}
