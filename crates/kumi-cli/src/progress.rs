use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::ui;

/// Stderr spinner around one long step, hidden when progress is off.
pub struct Progress {
    bar: Option<ProgressBar>,
}

impl Progress {
    #[must_use]
    pub fn spinner(message: &str) -> Self {
        if !ui::prefs().progress {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.enable_steady_tick(Duration::from_millis(100));
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg} {elapsed:.dim}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        Self { bar: Some(bar) }
    }

    pub fn finish_ok(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message(message.to_string());
        }
    }

    pub fn finish_clear(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

/// Run `step` under a spinner; the spinner clears on failure.
pub fn with_spinner<T, E>(
    message: &str,
    done: impl FnOnce(&T) -> String,
    step: impl FnOnce() -> Result<T, E>,
) -> Result<T, E> {
    let progress = Progress::spinner(message);
    match step() {
        Ok(value) => {
            progress.finish_ok(&done(&value));
            Ok(value)
        }
        Err(error) => {
            progress.finish_clear();
            Err(error)
        }
    }
}
