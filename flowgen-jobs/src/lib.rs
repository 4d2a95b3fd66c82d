pub use crate::{
    command::{Command, CommandJob},
    email::Email,
    flow::Flow,
    job::{Dependable, Job, JobCore},
    params::Params,
    python::Python,
    spark::Spark,
};

mod command;
mod email;
mod flow;
mod job;
mod params;
mod python;
mod spark;

/// Errors that can be encountered while writing job definition files.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An error encountered while storing the rendered properties.
    #[error(transparent)]
    Store(#[from] flowgen_props::Error),
}
