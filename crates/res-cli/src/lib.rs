use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use clap::Parser;
use res_builder::{build_resources_from_xml, to_json_string};
use res_core::ResourceError;
use tracing::debug;

mod cli_args;
mod error_map;
mod logging;

pub(crate) use cli_args::Cli;
pub(crate) use error_map::{emit_error, map_cli_input_read, map_cli_output_write};
pub(crate) use logging::init_logging;

pub fn run_cli_from_args<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            return error.exit_code();
        }
    };
    init_logging(cli.verbose);
    match run(cli) {
        Ok(()) => 0,
        Err(error) => emit_error(error),
    }
}

fn run(cli: Cli) -> Result<(), ResourceError> {
    let source = read_resource_list(&cli.input)?;
    let options = cli.build_options();
    let tree = build_resources_from_xml(&source, &options)?;
    // Serialize fully before touching the output so failures never leave a partial file.
    let json = to_json_string(&tree)?;
    debug!(entries = tree.len(), "built resource tree");
    write_resource_json(cli.output.as_deref(), &json)
}

fn read_resource_list(path: &Path) -> Result<String, ResourceError> {
    fs::read_to_string(path).map_err(|error| {
        map_cli_input_read(io::Error::new(
            error.kind(),
            format!("{}: {}", path.display(), error),
        ))
    })
}

fn write_resource_json(output: Option<&Path>, json: &str) -> Result<(), ResourceError> {
    match output {
        Some(path) => fs::write(path, json).map_err(map_cli_output_write),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(json.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(map_cli_output_write)
        }
    }
}
