use std::time::Duration;

use anyhow::{Result, anyhow};
use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind, MouseEvent};
use futures::StreamExt;
use tokio::sync::mpsc;

#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize,
    Tick,
}

/// Multiplexes terminal input with a fixed-rate tick on a background task.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    _task: tokio::task::JoinHandle<()>,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let task = tokio::spawn(async move {
            let mut reader = EventStream::new();
            let mut tick = tokio::time::interval(Duration::from_millis(tick_rate_ms));

            loop {
                let event = tokio::select! {
                    _ = tick.tick() => Some(Event::Tick),
                    maybe = reader.next() => match maybe {
                        Some(Ok(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                            Some(Event::Key(key))
                        }
                        Some(Ok(CrosstermEvent::Mouse(mouse))) => Some(Event::Mouse(mouse)),
                        Some(Ok(CrosstermEvent::Resize(_, _))) => Some(Event::Resize),
                        Some(Ok(_)) => None,
                        Some(Err(e)) => {
                            tracing::error!(error = %e, "terminal event stream failed");
                            break;
                        }
                        None => break,
                    },
                };

                if let Some(event) = event
                    && tx.send(event).is_err()
                {
                    break;
                }
            }
        });

        Self { rx, _task: task }
    }

    pub async fn next(&mut self) -> Result<Event> {
        self.rx
            .recv()
            .await
            .ok_or_else(|| anyhow!("event stream closed"))
    }
}
