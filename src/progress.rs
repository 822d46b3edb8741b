//! Progress bars that share the terminal with log output.

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::{self, Write};

/// A [`MultiProgress`] that draws nothing, for quiet runs and tests.
pub fn hidden_multi_progress() -> MultiProgress {
    MultiProgress::with_draw_target(ProgressDrawTarget::hidden())
}

/// Add a bar to `multi_progress` styled as `elapsed [bar] pos/len unit msg`.
pub fn create_progress_bar(multi_progress: &MultiProgress, total: u64, unit: &str) -> ProgressBar {
    let progress = multi_progress.add(ProgressBar::new(total));
    let style = ProgressStyle::default_bar()
        .template(&format!(
            "{{elapsed_precise}} [{{bar:40.cyan/blue}}] {{pos}}/{{len}} {unit} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    progress.set_style(style.progress_chars("##-"));
    progress
}

/// Writer that hides the progress bars while a line is written.
///
/// Installed as the `env_logger` target so log lines land above the bars
/// instead of in the middle of them.
pub struct SuspendingWriter<W: Write> {
    multi_progress: MultiProgress,
    inner: W,
}

impl SuspendingWriter<io::Stderr> {
    pub fn stderr(multi_progress: MultiProgress) -> Self {
        Self::new(multi_progress, io::stderr())
    }
}

impl<W: Write> SuspendingWriter<W> {
    pub fn new(multi_progress: MultiProgress, inner: W) -> Self {
        Self {
            multi_progress,
            inner,
        }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for SuspendingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let inner = &mut self.inner;
        self.multi_progress.suspend(|| inner.write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        let inner = &mut self.inner;
        self.multi_progress.suspend(|| inner.flush())
    }
}
