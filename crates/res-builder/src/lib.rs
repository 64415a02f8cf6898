use std::path::PathBuf;

use res_core::{ResourceError, ResourceMap};
use res_parser::parse_xml_document;

mod builder;
mod include_paths;
mod serialize;
mod sources;
mod xml_utils;

pub use builder::ResourceTreeBuilder;
pub use include_paths::IncludePaths;
pub use serialize::{to_json_string, write_json};
pub use sources::{load_json_source, load_plist_source, load_text_source, SourceKind};

/// What to do with a json source that resolves but cannot be loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InvalidJsonPolicy {
    #[default]
    Fail,
    /// Log the failure and leave the key unset.
    Skip,
}

#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub include_paths: Vec<PathBuf>,
    pub invalid_json: InvalidJsonPolicy,
}

pub fn build_resources_from_xml(
    source: &str,
    options: &BuildOptions,
) -> Result<ResourceMap, ResourceError> {
    let document = parse_xml_document(source)?;
    ResourceTreeBuilder::new(options).build(&document)
}
