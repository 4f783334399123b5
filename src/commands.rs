use crate::cli::Args;
use artistsort_abbrev::artist_sort::{
    AbbreviationResult, AlignerOptions, CacheKeyMode, SortNameAligner,
};
use artistsort_abbrev::config::Config;
use artistsort_abbrev::error::AppError;
use artistsort_abbrev::metadata::{MetadataRecord, abbreviate_records};
use tokio::io::AsyncReadExt;
use tracing::{info, warn};

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    match (&args.sorted, &args.unsorted, &args.metadata) {
        (Some(_), Some(_), Some(_)) => Err(AppError::invalid_input(
            "Cannot combine a SORTED/UNSORTED pair with --metadata",
        )),
        (Some(_), None, _) => Err(AppError::invalid_input(
            "Both SORTED and UNSORTED names are required",
        )),
        _ => Ok(()),
    }
}

/// Aligner options from config, with per-run flag overrides applied.
pub fn aligner_options(args: &Args, config: &Config) -> AlignerOptions {
    let mut options = config.abbreviation.aligner_options();
    if args.lenient {
        options.strict_reconstruction = false;
    }
    if args.pair_cache_key {
        options.cache_key = CacheKeyMode::Pair;
    }
    options
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-log-file, --clear-log-file).
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load_stored().await?;

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Abbreviates a single sorted/unsorted pair and prints the result.
///
/// A failed alignment still prints the original sort name; the reason goes
/// to the log.
pub fn handle_pair_command(
    aligner: &SortNameAligner,
    sorted: &str,
    unsorted: &str,
) -> AbbreviationResult {
    let result = aligner.abbreviate(sorted, unsorted);
    if let Some(message) = result.diagnostic_message() {
        warn!("Alignment diagnostic for '{sorted}': {message}");
    }
    println!("{}", result.abbreviated_text);
    result
}

/// Reads metadata records, adds the abbreviated tags and prints them as JSON.
pub async fn handle_metadata_command(aligner: &SortNameAligner, source: &str) -> Result<(), AppError> {
    let content = if source == "-" {
        let mut buffer = String::new();
        tokio::io::stdin().read_to_string(&mut buffer).await?;
        buffer
    } else {
        tokio::fs::read_to_string(source).await?
    };

    let mut records: Vec<MetadataRecord> = serde_json::from_str(&content)?;
    let report = abbreviate_records(aligner, &mut records);
    println!("{}", serde_json::to_string_pretty(&records)?);

    let stats = aligner.cache().stats();
    info!(
        "Metadata run complete: source={source}, failed_values={}, cache_size={}, cache_hits={}, cache_misses={}",
        report.values_failed, stats.size, stats.hits, stats.misses
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use artistsort_abbrev::constants::env_vars;
    use clap::Parser;
    use serial_test::serial;

    fn parse(argv: &[&str]) -> Args {
        let mut full = vec!["artistsort_abbrev"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_validate_args_accepts_pair() {
        assert!(validate_args(&parse(&["Vivaldi, Antonio", "Antonio Vivaldi"])).is_ok());
    }

    #[test]
    fn test_validate_args_rejects_single_name() {
        let result = validate_args(&parse(&["Vivaldi, Antonio"]));
        assert!(matches!(result.unwrap_err(), AppError::InvalidInput(_)));
    }

    #[test]
    fn test_validate_args_rejects_pair_with_metadata() {
        let result = validate_args(&parse(&["a", "b", "--metadata", "tracks.json"]));
        assert!(matches!(result.unwrap_err(), AppError::InvalidInput(_)));
    }

    #[test]
    fn test_aligner_options_flag_overrides() {
        let config = Config::default();

        let options = aligner_options(&parse(&[]), &config);
        assert_eq!(options, AlignerOptions::default());

        let options = aligner_options(&parse(&["--lenient", "--pair-cache-key"]), &config);
        assert!(!options.strict_reconstruction);
        assert_eq!(options.cache_key, CacheKeyMode::Pair);
    }

    #[test]
    fn test_handle_pair_command_abbreviates() {
        let aligner = SortNameAligner::new();
        let result = handle_pair_command(&aligner, "Vivaldi, Antonio", "Antonio Vivaldi");

        assert!(result.success);
        assert_eq!(result.abbreviated_text, "Vivaldi, A.");
        assert!(result.diagnostic.is_none());
    }

    #[test]
    fn test_handle_pair_command_keeps_original_on_failure() {
        let aligner = SortNameAligner::new();
        let sorted = "Verdi, Giuseppe";
        let result = handle_pair_command(&aligner, sorted, "Joe Green");

        assert!(!result.success);
        assert_eq!(result.abbreviated_text, sorted);
        assert!(result.diagnostic_message().unwrap().contains("Verdi"));
    }

    #[test]
    fn test_handle_pair_command_lenient_keeps_diagnostic() {
        let aligner = SortNameAligner::with_options(aligner_options(
            &parse(&["--lenient"]),
            &Config::default(),
        ));
        let result = handle_pair_command(&aligner, "Vivaldi, Antonio", "Antonio Vivaldi & Friends");

        assert!(result.success);
        assert_eq!(result.abbreviated_text, "Vivaldi, A.");
        assert!(result.diagnostic.is_some());
    }

    #[cfg(target_os = "linux")]
    #[tokio::test]
    #[serial]
    async fn test_config_update_does_not_save_env_overrides() {
        let config_home = tempfile::tempdir().unwrap();
        let log_path = config_home.path().join("logs").join("run.log");
        let previous_config_home = std::env::var_os("XDG_CONFIG_HOME");
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", config_home.path());
            std::env::set_var(env_vars::CACHE_KEY, "pair");
            std::env::set_var(env_vars::STRICT_RECONSTRUCTION, "false");
        }

        let args = parse(&["--set-log-file", &log_path.to_string_lossy()]);
        let result = handle_config_update_command(&args).await;
        let saved = Config::load_from_path(&Config::get_config_path()).await;

        unsafe {
            match previous_config_home {
                Some(value) => std::env::set_var("XDG_CONFIG_HOME", value),
                None => std::env::remove_var("XDG_CONFIG_HOME"),
            }
            std::env::remove_var(env_vars::CACHE_KEY);
            std::env::remove_var(env_vars::STRICT_RECONSTRUCTION);
        }

        result.unwrap();
        let saved = saved.unwrap();
        assert_eq!(
            saved.log_file_path,
            Some(log_path.to_string_lossy().into_owned())
        );
        assert!(saved.abbreviation.strict_reconstruction);
        assert_eq!(saved.abbreviation.cache_key, CacheKeyMode::Sorted);
    }

    #[tokio::test]
    async fn test_handle_metadata_command_reads_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("tracks.json");
        tokio::fs::write(
            &path,
            r#"[{"artistsort": "Vivaldi, Antonio", "artist": "Antonio Vivaldi"}]"#,
        )
        .await
        .unwrap();

        let aligner = SortNameAligner::new();
        handle_metadata_command(&aligner, &path.to_string_lossy())
            .await
            .unwrap();
        assert_eq!(aligner.cache().len(), 1);
    }

    #[tokio::test]
    async fn test_handle_metadata_command_rejects_bad_json() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("tracks.json");
        tokio::fs::write(&path, "{not json").await.unwrap();

        let aligner = SortNameAligner::new();
        let result = handle_metadata_command(&aligner, &path.to_string_lossy()).await;
        assert!(matches!(result.unwrap_err(), AppError::Json(_)));
    }
}
