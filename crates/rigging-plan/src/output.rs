//! Output scheme calculation: naming templates and the public address.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::env::Environment;
use crate::mode::Mode;

/// Fixed external serving origin for production output.
pub const PRODUCTION_PUBLIC_ADDRESS: &str = "https://frontend.lvrtx.com/";

/// File-naming templates and the base public address the output tree is
/// served from.
///
/// Production filenames embed a content-hash segment so a filename changes
/// exactly when its content changes; development filenames stay stable
/// across rebuilds so incremental reload keeps module identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputScheme {
    pub base_path: PathBuf,
    pub public_address: String,
    pub filename_template: String,
    pub chunk_filename_template: String,
}

impl OutputScheme {
    /// Compute the scheme for `mode`.
    ///
    /// The two branches are kept separate on purpose: a development build
    /// must never embed the production origin (the dev server rewrites
    /// addresses live) and a production build must never embed a dev
    /// host/port pair.
    pub fn compute(mode: Mode, env: &Environment) -> Self {
        match mode {
            Mode::Development => Self {
                base_path: PathBuf::from("dist"),
                public_address: format!("http://{}:{}/", env.host, env.port),
                filename_template: "js/[name].js".to_string(),
                chunk_filename_template: "js/[name].js".to_string(),
            },
            Mode::Production => Self {
                base_path: PathBuf::from("dist"),
                public_address: PRODUCTION_PUBLIC_ADDRESS.to_string(),
                filename_template: "js/[name].[contenthash].js".to_string(),
                chunk_filename_template: "js/[name].[contenthash].js".to_string(),
            },
        }
    }

    /// Whether the filename templates embed a content-hash segment.
    pub fn has_hashed_filenames(&self) -> bool {
        self.filename_template.contains("[contenthash]")
    }
}
