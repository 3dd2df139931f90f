use std::path::PathBuf;

use crate::registry::NameField;

/// Parsed command-line options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    /// Enable debug output
    pub debug_mode: bool,
    /// Query a single name field instead of the family/license presets
    pub field: Option<NameField>,
    /// Font files to inspect
    pub paths: Vec<PathBuf>,
}

/// Parse command line arguments into options.
///
/// Returns an error message for unusable input; `--help` is handled by the
/// caller before parsing.
pub fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions {
        debug_mode: false,
        field: None,
        paths: Vec::new(),
    };

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--debug" => options.debug_mode = true,
            "--field" => {
                let symbol = iter
                    .next()
                    .ok_or_else(|| "--field option requires a name-field symbol".to_string())?;
                options.field = Some(NameField::from_symbol(symbol).ok_or_else(|| {
                    format!("Unknown name field '{}', see --help for symbols", symbol)
                })?);
            }
            other if other.starts_with("--") => {
                return Err(format!("Unknown option '{}'", other));
            }
            path => options.paths.push(PathBuf::from(path)),
        }
    }

    if options.paths.is_empty() {
        return Err("No font files given".to_string());
    }

    Ok(options)
}

/// Get the help message for command-line usage
pub fn get_help_message() -> String {
    r#"fontprop - Inspect human-readable properties in font naming tables

USAGE:
    fontprop [OPTIONS] <FONT_FILE>...

ARGS:
    <FONT_FILE>...    One or more .ttf, .otf or .ttc files

OPTIONS:
    -h, --help         Show this help message
    --debug            Enable per-record debug output
    --field <SYMBOL>   Query a single name field by its symbol
                       (e.g. FONT_FAMILY_NAME, LICENSE_DESCRIPTION,
                       DESIGNER, VERSION_STRING)

By default, each file's FONT_FAMILY_NAME and LICENSE_DESCRIPTION records
are reported. Records are matched across every platform and language found
in the naming table.
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("fontprop")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_paths_and_flags() {
        let options = parse_args(&args(&["--debug", "a.ttf", "b.ttc"])).unwrap();
        assert!(options.debug_mode);
        assert_eq!(options.field, None);
        assert_eq!(
            options.paths,
            vec![PathBuf::from("a.ttf"), PathBuf::from("b.ttc")]
        );
    }

    #[test]
    fn parses_field_symbol() {
        let options = parse_args(&args(&["--field", "designer", "a.ttf"])).unwrap();
        assert_eq!(options.field, Some(NameField::Designer));
    }

    #[test]
    fn rejects_missing_field_value() {
        assert!(parse_args(&args(&["a.ttf", "--field"])).is_err());
    }

    #[test]
    fn rejects_unknown_field_and_option() {
        assert!(parse_args(&args(&["--field", "NOT_A_FIELD", "a.ttf"])).is_err());
        assert!(parse_args(&args(&["--frobnicate", "a.ttf"])).is_err());
    }

    #[test]
    fn rejects_empty_path_list() {
        assert!(parse_args(&args(&["--debug"])).is_err());
    }
}
