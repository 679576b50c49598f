use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::domain::OnboardingDraft;

/// Error raised while loading a draft saved by a presentation layer.
#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    #[error("unable to open draft {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("draft is not valid onboarding JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Reads JSON drafts shaped like [`OnboardingDraft`]; missing fields default to empty.
pub struct DraftLoader;

impl DraftLoader {
    pub fn from_path(path: impl AsRef<Path>) -> Result<OnboardingDraft, DraftError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DraftError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading onboarding draft");
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<OnboardingDraft, DraftError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json(json: &str) -> Result<OnboardingDraft, DraftError> {
        Ok(serde_json::from_str(json)?)
    }
}
