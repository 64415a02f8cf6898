use res_core::ResourceError;
use std::fmt::Display;

fn map_error(code: &'static str, error: impl Display) -> ResourceError {
    ResourceError::new(code, error.to_string())
}

pub(crate) fn format_error(error: &ResourceError) -> String {
    match &error.span {
        Some(span) => format!("error[{}]: {} at {}", error.code, error.message, span),
        None => format!("error[{}]: {}", error.code, error.message),
    }
}

pub(crate) fn emit_error(error: ResourceError) -> i32 {
    eprintln!("{}", format_error(&error));
    1
}

pub(crate) fn map_cli_input_read(error: std::io::Error) -> ResourceError {
    map_error("CLI_INPUT_READ", error)
}

pub(crate) fn map_cli_output_write(error: std::io::Error) -> ResourceError {
    map_error("CLI_OUTPUT_WRITE", error)
}
