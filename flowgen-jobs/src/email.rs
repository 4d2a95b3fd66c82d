use crate::job::{Job, JobCore};

/// A notification job that sends a mail instead of running a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    core: JobCore,
}

impl Job for Email {
    fn from_core(core: JobCore) -> Self {
        Self { core }
    }

    fn core(&self) -> &JobCore {
        &self.core
    }

    fn type_tag(&self) -> &'static str {
        "email"
    }
}

impl Email {
    pub fn with_subject(&self, mail_subject: &str) -> Self {
        self.with_extra("mail.subject", mail_subject)
    }

    pub fn with_message(&self, mail_message: &str) -> Self {
        self.with_extra("mail.message", mail_message)
    }

    pub fn with_to_recipient(&self, mail_to: &str) -> Self {
        self.with_extra("mail.to", mail_to)
    }

    /// Marks whether the scheduler actually sends the mail.
    pub fn with_send(&self, mail_send: bool) -> Self {
        self.with_extra("mail.send", if mail_send { "true" } else { "false" })
    }

    /// Returns a copy with one more `mail.message.N` line.
    ///
    /// Unlike the command numbering, the search starts at 1 unconditionally;
    /// the bare `mail.message` key is never considered.
    pub fn message_with_broken_lines(&self, mail_message: &str) -> Self {
        let mut counter = 1;
        while !self.core.is_blank(&format!("mail.message.{counter}")) {
            counter += 1;
        }
        self.with_extra(format!("mail.message.{counter}"), mail_message)
    }
}

#[cfg(test)]
mod tests {
    use expect_test::expect;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn numbers_broken_message_lines_from_one() {
        let job = Email::new("alert")
            .message_with_broken_lines("first line")
            .message_with_broken_lines("second line")
            .message_with_broken_lines("third line");
        assert_eq!(job.extra().get("mail.message.1").unwrap(), "first line");
        assert_eq!(job.extra().get("mail.message.2").unwrap(), "second line");
        assert_eq!(job.extra().get("mail.message.3").unwrap(), "third line");
    }

    #[test]
    fn broken_lines_ignore_the_bare_message_key() {
        let job = Email::new("alert")
            .with_message("summary")
            .message_with_broken_lines("detail");
        assert_eq!(job.extra().get("mail.message").unwrap(), "summary");
        assert_eq!(job.extra().get("mail.message.1").unwrap(), "detail");
    }

    #[test]
    fn writes_an_email_job_file() {
        let tempdir = TempDir::new().unwrap();
        let job = Email::new("alert")
            .with_subject("nightly failed")
            .with_to_recipient("oncall@example.com")
            .with_send(true);
        job.write(tempdir.path()).unwrap();
        let contents = std::fs::read_to_string(tempdir.path().join("alert.job")).unwrap();
        let expected = expect![[r#"
            #alert.job
            type=email
            mail.subject=nightly failed
            mail.to=oncall@example.com
            mail.send=true
        "#]];
        expected.assert_eq(&contents);
    }
}
