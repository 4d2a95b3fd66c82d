use crate::command::CommandJob;
use crate::job::{Job, JobCore};

/// A Python script job.
///
/// Runs through the command runner but is tagged `python` so the scheduler
/// provisions the interpreter. No launch command is derived for it; callers
/// set one explicitly through [`CommandJob::with_command`] when needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Python {
    core: JobCore,
}

impl Job for Python {
    fn from_core(core: JobCore) -> Self {
        Self { core }
    }

    fn core(&self) -> &JobCore {
        &self.core
    }

    fn type_tag(&self) -> &'static str {
        "python"
    }
}

impl CommandJob for Python {}

impl Python {
    pub const DEFAULT_INTERPRETER: &str = "${python3}";
    pub const DEFAULT_REQUIREMENTS: &str = "./requirements.txt";

    /// Applies the interpreter default, then the requirements-file default.
    pub fn with_all_default(&self) -> Self {
        self.with_python(Self::DEFAULT_INTERPRETER)
            .with_requirements(Self::DEFAULT_REQUIREMENTS)
    }

    pub fn with_python(&self, python: &str) -> Self {
        self.with_extra("python", python)
    }

    pub fn with_virtualenv(&self, virtualenv: &str) -> Self {
        self.with_extra("virtualenv", virtualenv)
    }

    pub fn with_requirements(&self, requirements: &str) -> Self {
        self.with_extra("virtualenv.requirements", requirements)
    }
}
