use std::path::Path;

use flowgen_props::PropertyStore;
use indexmap::IndexMap;
use log::debug;

use crate::Error;

/// The name, dependency list, and property overrides shared by every job
/// variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCore {
    /// The job identity, used as the output file name stem.
    pub name: String,
    /// Names of the jobs this job runs after. Duplicates are kept.
    pub dependencies: Vec<String>,
    /// Open-ended property overrides written verbatim into the job file.
    pub extra: IndexMap<String, String>,
}

impl JobCore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dependencies: Vec::new(),
            extra: IndexMap::new(),
        }
    }

    /// True when `key` is missing or holds an empty value.
    pub(crate) fn is_blank(&self, key: &str) -> bool {
        self.extra.get(key).is_none_or(|value| value.is_empty())
    }
}

/// A job that can appear in another job's dependency list.
///
/// Implemented by every [`Job`] variant. Plain strings deliberately don't
/// qualify: dependencies are declared against job values, and the names are
/// extracted from them.
pub trait Dependable {
    /// The name recorded in the depending job's `dependencies` property.
    fn job_name(&self) -> &str;
}

impl<J: Job> Dependable for J {
    fn job_name(&self) -> &str {
        self.name()
    }
}

/// An immutable job definition destined to become one `.job` file.
///
/// Every `with_*` method returns a new value of the same variant and leaves
/// the receiver untouched, so a partially configured job can be reused as a
/// template for several others. Serialization happens once, at [`Job::write`].
pub trait Job: Sized {
    /// Rebuilds a value of this variant around the given core.
    ///
    /// All provided transformation methods construct their result through
    /// this factory, which is what keeps them returning the caller's
    /// variant rather than some common base.
    fn from_core(core: JobCore) -> Self;

    /// The shared name/dependencies/extras.
    fn core(&self) -> &JobCore;

    /// The value written as the `type` property of the job file.
    fn type_tag(&self) -> &'static str;

    /// Creates a job with the given name, no dependencies, and no extras.
    fn new(name: impl Into<String>) -> Self {
        Self::from_core(JobCore::new(name))
    }

    fn name(&self) -> &str {
        &self.core().name
    }

    fn dependencies(&self) -> &[String] {
        &self.core().dependencies
    }

    fn extra(&self) -> &IndexMap<String, String> {
        &self.core().extra
    }

    /// Returns a copy under a different name.
    fn with_name(&self, name: impl Into<String>) -> Self {
        let mut core = self.core().clone();
        core.name = name.into();
        Self::from_core(core)
    }

    /// Returns a copy that runs after the given jobs.
    ///
    /// The previous dependency list is replaced, not appended to.
    fn with_dependencies(&self, jobs: &[&dyn Dependable]) -> Self {
        let mut core = self.core().clone();
        core.dependencies = jobs.iter().map(|job| job.job_name().to_string()).collect();
        Self::from_core(core)
    }

    /// Returns a copy with `overrides` merged on top of the current extras.
    ///
    /// Existing keys are overwritten; the extras bag is an open key space,
    /// not a fixed schema.
    fn with_extras<K, V>(&self, overrides: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut core = self.core().clone();
        core.extra.extend(
            overrides
                .into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        );
        Self::from_core(core)
    }

    /// Returns a copy with a single extra set.
    fn with_extra(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_extras([(key.into(), value.into())])
    }

    /// Reinterprets this job as another variant, keeping the name,
    /// dependencies, and extras.
    fn as_type<T: Job>(&self) -> T {
        T::from_core(self.core().clone())
    }

    /// Called exactly once, right before the job is mapped into a property
    /// store.
    ///
    /// Variants override this to derive properties from the final extras,
    /// after every chained `with_*` call has been applied. The default
    /// returns an unchanged copy.
    fn before_add_hook(&self) -> Self {
        Self::from_core(self.core().clone())
    }

    /// Maps the finalized job into the property store that [`Job::write`]
    /// persists.
    fn to_properties(&self) -> PropertyStore {
        let finalized = self.before_add_hook();
        let mut props = PropertyStore::new();
        props.set("type", self.type_tag());
        for (key, value) in &finalized.core().extra {
            props.set(key, value);
        }
        if !finalized.core().dependencies.is_empty() {
            props.set("dependencies", finalized.core().dependencies.join(","));
        }
        props
    }

    /// Writes `<folder>/<name>.job`, with a leading comment line equal to
    /// the file name.
    fn write(&self, folder: impl AsRef<Path>) -> Result<(), Error> {
        let file_name = format!("{}.job", self.name());
        let path = folder.as_ref().join(&file_name);
        debug!("writing job '{}' to '{}'", self.name(), path.display());
        self.to_properties().store(&path, Some(&file_name))?;
        Ok(())
    }
}
