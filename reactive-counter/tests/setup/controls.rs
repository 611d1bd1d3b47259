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
use std::sync::Arc;

use reactive_counter::prelude::*;

/// Counts stop requests, optionally forwarding every call to a real counter.
#[derive(Debug, Clone, Default)]
pub struct CountingControl {
    stops: Arc<AtomicUsize>,
    inner: Option<CounterHandle>,
}

impl CountingControl {
    /// Wraps a running counter.
    pub fn wrapping(inner: CounterHandle) -> Self {
        Self {
            stops: Arc::default(),
            inner: Some(inner),
        }
    }

    /// Number of `request_stop` calls seen so far.
    pub fn stop_calls(&self) -> usize {
        self.stops.load(Ordering::SeqCst)
    }
}

impl CounterControl for CountingControl {
    fn request_stop(&self) {
        self.stops.fetch_add(1, Ordering::SeqCst);
        if let Some(inner) = &self.inner {
            inner.request_stop();
        }
    }

    fn request_increment(&self) {
        if let Some(inner) = &self.inner {
            inner.request_increment();
        }
    }

    fn request_decrement(&self) {
        if let Some(inner) = &self.inner {
            inner.request_decrement();
        }
    }

    fn is_stop_requested(&self) -> bool {
        self.inner
            .as_ref()
            .map_or(self.stop_calls() > 0, CounterControl::is_stop_requested)
    }
}
