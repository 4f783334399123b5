use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when the arguments ask for a config change or listing
/// rather than an abbreviation run
pub fn is_config_command(args: &Args) -> bool {
    args.list_config || args.new_log_file_path.is_some() || args.clear_log_file_path
}

/// Artist sort-name abbreviator
///
/// Reduces the forenames in an artist sort name to initials by aligning it
/// with the unsorted artist credit:
///
///   artistsort_abbrev "Vivaldi, Antonio; Queyras, Jean-Guihen" "Antonio Vivaldi; Jean-Guihen Queyras"
///   Vivaldi, A.; Queyras, J-G.
///
/// With --metadata, reads a JSON array of tag records (tag name → string or
/// list of strings) and writes them back with ~artistsort_abbrev,
/// ~albumartistsort_abbrev, ~artists_sort_abbrev and ~albumartists_sort_abbrev
/// added.
#[derive(Parser, Debug)]
#[command(about, version, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Sort name, e.g. "Vivaldi, Antonio"
    #[arg(value_name = "SORTED")]
    pub sorted: Option<String>,

    /// Unsorted artist credit, e.g. "Antonio Vivaldi"
    #[arg(value_name = "UNSORTED")]
    pub unsorted: Option<String>,

    /// Read metadata records from a JSON file ("-" for stdin) and print them
    /// with the abbreviated tags added.
    #[arg(long, short = 'm', value_name = "FILE", help_heading = "Input")]
    pub metadata: Option<String>,

    /// Keep an abbreviation even if the unsorted credit could not be rebuilt
    /// exactly from the matched names. Overrides the config for this run.
    #[arg(long, help_heading = "Abbreviation")]
    pub lenient: bool,

    /// Cache abbreviations per (sorted, unsorted) pair instead of per sort name.
    /// Overrides the config for this run.
    #[arg(long = "pair-cache-key", help_heading = "Abbreviation")]
    pub pair_cache_key: bool,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Mirror log output to stderr in addition to the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
