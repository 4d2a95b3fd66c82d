use std::path::Path;

use flowgen_props::PropertyStore;
use indexmap::IndexMap;
use log::debug;

use crate::Error;

/// Shared project properties written alongside the job files.
///
/// Follows the same contract as the jobs themselves: every `with_*` call
/// returns a new value and leaves the receiver untouched. The write step
/// produces `<folder>/<name>.properties` with no `type` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    name: String,
    extra: IndexMap<String, String>,
}

impl Params {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn extra(&self) -> &IndexMap<String, String> {
        &self.extra
    }

    /// Returns a copy with `overrides` merged on top of the current
    /// properties. Existing keys are overwritten.
    pub fn with_extras<K, V>(&self, overrides: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut params = self.clone();
        params.extra.extend(
            overrides
                .into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        );
        params
    }

    /// Returns a copy with a single property set.
    pub fn with_extra(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_extras([(key.into(), value.into())])
    }

    /// Writes `<folder>/<name>.properties`, with a leading comment line
    /// equal to the file name.
    pub fn write(&self, folder: impl AsRef<Path>) -> Result<(), Error> {
        let file_name = format!("{}.properties", self.name);
        let path = folder.as_ref().join(&file_name);
        debug!("writing params '{}' to '{}'", self.name, path.display());
        let mut props = PropertyStore::new();
        for (key, value) in &self.extra {
            props.set(key, value);
        }
        props.store(&path, Some(&file_name))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use expect_test::expect;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn overrides_take_precedence_without_touching_the_receiver() {
        let base = Params::new("global").with_extra("retries", "1");
        let updated = base.with_extras([("retries", "5"), ("user.to.proxy", "etl")]);
        assert_eq!(base.extra().get("retries").unwrap(), "1");
        assert_eq!(updated.extra().get("retries").unwrap(), "5");
        assert_eq!(updated.extra().get("user.to.proxy").unwrap(), "etl");
    }

    #[test]
    fn writes_a_properties_file_without_a_type_entry() {
        let tempdir = TempDir::new().unwrap();
        let params = Params::new("global")
            .with_extra("user.to.proxy", "etl")
            .with_extra("success.emails", "oncall@example.com");
        params.write(tempdir.path()).unwrap();
        let contents =
            std::fs::read_to_string(tempdir.path().join("global.properties")).unwrap();
        let expected = expect![[r#"
            #global.properties
            user.to.proxy=etl
            success.emails=oncall@example.com
        "#]];
        expected.assert_eq(&contents);
    }
}
