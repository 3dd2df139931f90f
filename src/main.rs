use std::env;
use std::path::Path;
use std::process::ExitCode;

use rayon::prelude::*;

use fontprop::cli::{get_help_message, parse_args};
use fontprop::utils::init_logging;
use fontprop::{extract, family_name, license_description, NameFilter};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    if args.contains(&"--help".to_string()) || args.contains(&"-h".to_string()) {
        println!("{}", get_help_message());
        return ExitCode::SUCCESS;
    }

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!("Try 'fontprop --help' for usage.");
            return ExitCode::from(2);
        }
    };

    init_logging(options.debug_mode);

    // Per-file failures are logged and recorded in each report; one bad
    // file never stops the rest.
    options.paths.par_iter().for_each(|path| {
        inspect_font(path, options.field.map(NameFilter::new));
    });

    ExitCode::SUCCESS
}

/// Report the requested properties of one font file
fn inspect_font(path: &Path, filter: Option<NameFilter>) {
    log::info!("Inspecting {}", path.display());

    match filter {
        Some(filter) => {
            extract(path, &filter);
        }
        None => {
            family_name(path);
            license_description(path);
        }
    }
}
