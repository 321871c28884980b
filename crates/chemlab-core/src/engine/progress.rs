use super::service::Operation;

#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    /// A request went out. `status` is the info-panel text shown meanwhile,
    /// if the operation sets one.
    LoadingStarted {
        operation: Operation,
        status: Option<String>,
    },
    LoadingFinished {
        operation: Operation,
        succeeded: bool,
    },
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
