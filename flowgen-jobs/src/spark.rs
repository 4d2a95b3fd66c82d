use crate::command::CommandJob;
use crate::job::{Job, JobCore};

/// A Spark submission, executed through the scheduler's command runner.
///
/// The launch command itself is derived at serialization time; callers only
/// configure the submission through the `with_*` setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spark {
    core: JobCore,
}

impl Job for Spark {
    fn from_core(core: JobCore) -> Self {
        Self { core }
    }

    fn core(&self) -> &JobCore {
        &self.core
    }

    fn type_tag(&self) -> &'static str {
        "command"
    }

    /// Picks the submit template from the final extras: with `extra.jars`
    /// present the launch command becomes `${spark.submit.extra.jars}`,
    /// otherwise `${spark.submit}`.
    fn before_add_hook(&self) -> Self {
        if self.core.extra.contains_key("extra.jars") {
            self.with_command("${spark.submit.extra.jars}")
        } else {
            self.with_command("${spark.submit}")
        }
    }
}

impl CommandJob for Spark {}

impl Spark {
    pub const DEFAULT_HADOOP_USER: &str = "hadoop";
    pub const DEFAULT_SPARK_VERSION: &str = "2.2.1";
    pub const DEFAULT_QUEUE: &str = "default";
    pub const DEFAULT_DRIVER_MEMORY: &str = "1g";
    pub const DEFAULT_EXECUTOR_MEMORY: &str = "1g";
    pub const DEFAULT_EXECUTOR_CORES: &str = "1";
    pub const DEFAULT_NUM_EXECUTORS: &str = "1";

    /// Applies every documented default, in a fixed order. Each setter
    /// targets a distinct key, so the order never causes an override.
    pub fn with_all_default(&self) -> Self {
        self.with_hadoop_user(Self::DEFAULT_HADOOP_USER)
            .with_spark_version(Self::DEFAULT_SPARK_VERSION)
            .with_queue(Self::DEFAULT_QUEUE)
            .with_driver_memory(Self::DEFAULT_DRIVER_MEMORY)
            .with_executor_memory(Self::DEFAULT_EXECUTOR_MEMORY)
            .with_executor_cores(Self::DEFAULT_EXECUTOR_CORES)
            .with_num_executors(Self::DEFAULT_NUM_EXECUTORS)
    }

    /// Sets `env.HADOOP_USER_NAME`, the user the submission runs as.
    pub fn with_hadoop_user(&self, hadoop_user: &str) -> Self {
        self.with_extra("env.HADOOP_USER_NAME", hadoop_user)
    }

    pub fn with_spark_version(&self, spark_version: &str) -> Self {
        self.with_extra("spark.version", spark_version)
    }

    pub fn with_queue(&self, queue: &str) -> Self {
        self.with_extra("queue", queue)
    }

    pub fn with_driver_memory(&self, driver_memory: &str) -> Self {
        self.with_extra("driver.memory", driver_memory)
    }

    pub fn with_executor_memory(&self, executor_memory: &str) -> Self {
        self.with_extra("executor.memory", executor_memory)
    }

    pub fn with_executor_cores(&self, executor_cores: &str) -> Self {
        self.with_extra("executor.cores", executor_cores)
    }

    pub fn with_num_executors(&self, num_executors: &str) -> Self {
        self.with_extra("num.executors", num_executors)
    }

    /// Turns on dynamic allocation with the given executor bounds.
    pub fn with_dynamic_allocation(&self, min_executors: &str, max_executors: &str) -> Self {
        self.with_extras([
            ("conf.spark.dynamicAllocation.enabled", "true"),
            ("min.executors", min_executors),
            ("max.executors", max_executors),
        ])
    }

    pub fn with_jar_file(&self, jar_file: &str) -> Self {
        self.with_extra("jar.file", jar_file)
    }

    /// Sets `extra.jars`; its presence switches the submit template at
    /// serialization time.
    pub fn with_extra_jars(&self, extra_jars: &str) -> Self {
        self.with_extra("extra.jars", extra_jars)
    }

    pub fn with_java_class(&self, java_class: &str) -> Self {
        self.with_extra("java.class", java_class)
    }

    pub fn with_args(&self, args: &str) -> Self {
        self.with_extra("args", args)
    }
}
