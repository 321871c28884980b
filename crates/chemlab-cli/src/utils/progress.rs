use chemlab::engine::progress::{Progress, ProgressCallback};
use chemlab::engine::service::Operation;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::warn;

const SPINNER_TICK_MS: u64 = 80;

/// Shows a spinner on stderr while a request is outstanding.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: Arc<Mutex<ProgressBar>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr())
    }

    pub fn with_draw_target(target: ProgressDrawTarget) -> Self {
        let pb = ProgressBar::new_spinner().with_style(Self::spinner_style());
        pb.set_draw_target(target);
        pb.finish_and_clear();

        Self {
            pb: Arc::new(Mutex::new(pb)),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb_clone = self.pb.clone();

        Box::new(move |progress: Progress| {
            let Ok(mut pb_guard) = pb_clone.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };
            Self::apply(&mut pb_guard, progress);
        })
    }

    fn apply(pb: &mut ProgressBar, progress: Progress) {
        match progress {
            Progress::LoadingStarted { operation, status } => {
                pb.reset();
                pb.set_message(status.unwrap_or_else(|| Self::label(operation).to_string()));
                pb.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
            }
            Progress::LoadingFinished { .. } => {
                pb.disable_steady_tick();
                pb.finish_and_clear();
            }
        }
    }

    fn label(operation: Operation) -> &'static str {
        match operation {
            Operation::Explain => "正在生成解释...",
            Operation::Experiment => "正在模拟实验...",
            Operation::Quiz => "正在生成测验...",
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✓"])
    }
}
