use crate::cli::{Args, is_config_command};
use crate::commands;
use artistsort_abbrev::artist_sort::SortNameAligner;
use artistsort_abbrev::config::Config;
use artistsort_abbrev::error::AppError;
use tracing::debug;

/// Run the requested command.
///
/// - Config commands list or update the config file
/// - A SORTED/UNSORTED pair prints one abbreviation
/// - --metadata processes a batch of tag records
pub async fn run(args: &Args, config: &Config) -> Result<(), AppError> {
    if is_config_command(args) {
        if args.list_config {
            return commands::handle_list_config_command().await;
        }
        return commands::handle_config_update_command(args).await;
    }

    let options = commands::aligner_options(args, config);
    debug!("Aligner options: {options:?}");
    let aligner = SortNameAligner::with_options(options);

    match (&args.sorted, &args.unsorted, &args.metadata) {
        (Some(sorted), Some(unsorted), None) => {
            commands::handle_pair_command(&aligner, sorted, unsorted);
            Ok(())
        }
        (None, None, Some(source)) => commands::handle_metadata_command(&aligner, source).await,
        _ => Err(AppError::invalid_input(
            "Nothing to do: pass SORTED and UNSORTED names, --metadata FILE, or a config option (see --help)",
        )),
    }
}
