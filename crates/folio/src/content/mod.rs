//! Static content fixtures rendered by the services page.

pub mod icons;
pub mod pricing;
pub mod services;
pub mod testimonials;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

pub use icons::Icon;
pub use pricing::{standard_plans, PricingPlan};
pub use services::{standard_services, ServiceOffering};
pub use testimonials::{standard_testimonials, Testimonial};

/// Everything the page iterates over. Sections missing from a JSON document load as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCatalog {
    #[serde(default)]
    pub services: Vec<ServiceOffering>,
    #[serde(default)]
    pub pricing: Vec<PricingPlan>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
}

impl Default for ContentCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl ContentCatalog {
    pub fn standard() -> Self {
        Self {
            services: standard_services(),
            pricing: standard_plans(),
            testimonials: standard_testimonials(),
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ContentError> {
        serde_json::from_reader(reader).map_err(ContentError::Parse)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Reads the catalog at `path`, or falls back to the built-in fixtures.
    pub fn load(path: Option<&Path>) -> Result<Self, ContentError> {
        match path {
            Some(path) => {
                let catalog = Self::from_path(path)?;
                info!(
                    path = %path.display(),
                    services = catalog.services.len(),
                    plans = catalog.pricing.len(),
                    "loaded content catalog"
                );
                Ok(catalog)
            }
            None => Ok(Self::standard()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("unable to read content catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("content catalog is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),
}
