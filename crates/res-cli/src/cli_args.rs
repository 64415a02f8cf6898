use std::path::PathBuf;

use clap::Parser;
use res_builder::{BuildOptions, InvalidJsonPolicy};

#[derive(Debug, Parser)]
#[command(name = "create-resources")]
#[command(about = "Creates a resource json from a resource list")]
pub(crate) struct Cli {
    /// Include path to search for files. May be repeated; searched in order.
    #[arg(short = 'I', value_name = "inc path")]
    pub(crate) include_paths: Vec<PathBuf>,
    /// Log json files that fail to parse and leave their key out instead of failing.
    #[arg(long = "skip-invalid-json")]
    pub(crate) skip_invalid_json: bool,
    #[arg(short = 'v', long = "verbose")]
    pub(crate) verbose: bool,
    /// Input resources file.
    #[arg(value_name = "resource list")]
    pub(crate) input: PathBuf,
    /// Output resources json file [stdout].
    #[arg(value_name = "resource json")]
    pub(crate) output: Option<PathBuf>,
}

impl Cli {
    pub(crate) fn build_options(&self) -> BuildOptions {
        BuildOptions {
            include_paths: self.include_paths.clone(),
            invalid_json: if self.skip_invalid_json {
                InvalidJsonPolicy::Skip
            } else {
                InvalidJsonPolicy::Fail
            },
        }
    }
}
