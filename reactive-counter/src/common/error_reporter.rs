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

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{error, trace, warn};

use crate::message::CounterError;

/// Injected sink for the non-fatal errors agents run into.
///
/// Every report is logged with `tracing::error!`. When built with
/// [`ErrorReporter::channel`] the error is also forwarded to the paired receiver,
/// where the surrounding application decides whether anything is fatal.
///
/// Reporting never blocks: if the channel is full the report is dropped with a
/// warning, so a slow consumer cannot stall the counter loop.
#[derive(Debug, Clone, Default)]
pub struct ErrorReporter {
    outbox: Option<mpsc::Sender<CounterError>>,
}

impl ErrorReporter {
    /// Creates a reporter paired with a bounded receiver of `capacity` reports.
    #[must_use]
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<CounterError>) {
        let (outbox, inbox) = mpsc::channel(capacity.max(1));
        (
            Self {
                outbox: Some(outbox),
            },
            inbox,
        )
    }

    /// Creates a reporter that only logs.
    #[must_use]
    pub const fn log_only() -> Self {
        Self { outbox: None }
    }

    /// Logs `report` and forwards it to the paired receiver, if any.
    pub fn report(&self, report: CounterError) {
        error!(error = %report, "Non-fatal error reported");
        let Some(outbox) = &self.outbox else {
            return;
        };
        match outbox.try_send(report) {
            Ok(()) => {}
            Err(TrySendError::Full(dropped)) => {
                warn!(error = %dropped, "Error channel full, dropping report");
            }
            Err(TrySendError::Closed(_)) => {
                trace!("Error channel closed, report only logged");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwards_reports_to_receiver() {
        let (reporter, mut inbox) = ErrorReporter::channel(4);
        reporter.report(CounterError::DisplayClosed);
        assert_eq!(inbox.try_recv().unwrap(), CounterError::DisplayClosed);
    }

    #[test]
    fn full_channel_drops_instead_of_blocking() {
        let (reporter, mut inbox) = ErrorReporter::channel(1);
        reporter.report(CounterError::DisplayClosed);
        reporter.report(CounterError::SuspendInterrupted {
            agent: "counter".to_string(),
        });

        assert_eq!(inbox.try_recv().unwrap(), CounterError::DisplayClosed);
        assert!(inbox.try_recv().is_err());
    }

    #[test]
    fn closed_receiver_is_tolerated() {
        let (reporter, inbox) = ErrorReporter::channel(1);
        drop(inbox);
        reporter.report(CounterError::DisplayClosed);
        ErrorReporter::log_only().report(CounterError::DisplayClosed);
    }
}
