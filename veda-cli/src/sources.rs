//! Resolution and validation of the two catalogue file paths.

use camino::{Utf8Path, Utf8PathBuf};
use veda_data::{CataloguePaths, DEFAULT_DATA_ELEMENTS_FILE, DEFAULT_PURPOSES_FILE};
use veda_fs::{SourceProbe, probe_source};

use crate::{
    ARG_DATA_ELEMENTS, ARG_PURPOSES, CliError, LEGACY_ENV_DATA_ELEMENTS, LEGACY_ENV_PURPOSES,
};

/// Fill unset paths from the legacy variables, then the default filenames.
pub(crate) fn resolve_paths(
    data_elements: Option<Utf8PathBuf>,
    purposes: Option<Utf8PathBuf>,
    env: &dyn Fn(&str) -> Option<String>,
) -> CataloguePaths {
    let pick = |explicit: Option<Utf8PathBuf>, legacy: &str, default: &str| {
        explicit
            .or_else(|| env(legacy).map(Utf8PathBuf::from))
            .unwrap_or_else(|| Utf8PathBuf::from(default))
    };
    CataloguePaths::new(
        pick(data_elements, LEGACY_ENV_DATA_ELEMENTS, DEFAULT_DATA_ELEMENTS_FILE),
        pick(purposes, LEGACY_ENV_PURPOSES, DEFAULT_PURPOSES_FILE),
    )
}

/// Ensure both paths name regular files before any loading starts.
pub(crate) fn validate_sources(paths: &CataloguePaths) -> Result<(), CliError> {
    require_existing(&paths.data_elements, ARG_DATA_ELEMENTS)?;
    require_existing(&paths.purposes, ARG_PURPOSES)?;
    Ok(())
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match probe_source(path) {
        Ok(SourceProbe::File) => Ok(()),
        Ok(SourceProbe::NotAFile) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Ok(SourceProbe::Missing) => Err(CliError::MissingSourceFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}
