use crate::job::{Job, JobCore};

/// Jobs executed through the scheduler's command runner.
pub trait CommandJob: Job {
    /// Returns a copy with the shell command the job runs.
    fn with_command(&self, command: &str) -> Self {
        self.with_extra("command", command)
    }

    /// Returns a copy with a follow-up command under the lowest free
    /// `command.N` key.
    ///
    /// The bare `command` key is filled first; numbering starts at 1. A key
    /// holding an empty value counts as free and is claimed.
    fn with_another_command(&self, command: &str) -> Self {
        if self.core().is_blank("command") {
            return self.with_command(command);
        }
        let mut counter = 1;
        while !self.core().is_blank(&format!("command.{counter}")) {
            counter += 1;
        }
        self.with_extra(format!("command.{counter}"), command)
    }
}

/// A job that runs one or more shell commands in sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    core: JobCore,
}

impl Job for Command {
    fn from_core(core: JobCore) -> Self {
        Self { core }
    }

    fn core(&self) -> &JobCore {
        &self.core
    }

    fn type_tag(&self) -> &'static str {
        "command"
    }
}

impl CommandJob for Command {}

impl Command {
    /// Returns an unchanged copy; the plain command runner has no defaults.
    pub fn with_all_default(&self) -> Self {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use expect_test::expect;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn with_another_command_fills_the_bare_key_first() {
        let job = Command::new("steps")
            .with_another_command("./first.sh")
            .with_another_command("./second.sh");
        assert_eq!(job.extra().get("command").unwrap(), "./first.sh");
        assert_eq!(job.extra().get("command.1").unwrap(), "./second.sh");
        assert_eq!(job.extra().len(), 2);
    }

    #[test]
    fn with_another_command_picks_the_lowest_free_suffix() {
        let job = Command::new("steps")
            .with_command("./first.sh")
            .with_another_command("./second.sh")
            .with_another_command("./third.sh");
        assert_eq!(job.extra().get("command.1").unwrap(), "./second.sh");
        assert_eq!(job.extra().get("command.2").unwrap(), "./third.sh");
    }

    #[test]
    fn an_empty_command_counts_as_unset() {
        let job = Command::new("steps")
            .with_command("")
            .with_another_command("./real.sh");
        assert_eq!(job.extra().get("command").unwrap(), "./real.sh");
    }

    #[test]
    fn writes_a_command_job_file() {
        let tempdir = TempDir::new().unwrap();
        let setup = Command::new("setup");
        let build = Command::new("build")
            .with_command("make all")
            .with_dependencies(&[&setup]);
        build.write(tempdir.path()).unwrap();
        let contents = std::fs::read_to_string(tempdir.path().join("build.job")).unwrap();
        let expected = expect![[r#"
            #build.job
            type=command
            command=make all
            dependencies=setup
        "#]];
        expected.assert_eq(&contents);
    }

    #[test]
    fn write_fails_when_the_folder_is_missing() {
        let tempdir = TempDir::new().unwrap();
        let folder = tempdir.path().join("not-there");
        let err = Command::new("build").write(&folder).unwrap_err();
        assert!(matches!(err, crate::Error::Store(_)));
    }
}
