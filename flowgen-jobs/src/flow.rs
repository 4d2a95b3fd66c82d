use crate::job::{Job, JobCore};

/// A dependency-only container job with no action of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flow {
    core: JobCore,
}

impl Job for Flow {
    fn from_core(core: JobCore) -> Self {
        Self { core }
    }

    fn core(&self) -> &JobCore {
        &self.core
    }

    fn type_tag(&self) -> &'static str {
        "flow"
    }
}
