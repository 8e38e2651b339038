// src/config/options.rs
//
// User-facing options. Loaded from `procurement.toml` when present; every
// field has a default so a partial (or missing) file is fine.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{Deserialize, Serialize};

use super::consts::*;
use crate::core::sanitize::sanitize_filename;
use crate::error::{Error, Result};
use crate::matching::LinkOptions;
use crate::search::SqlDialect;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub data: DataOptions,
    pub export: ExportOptions,
    pub linkage: LinkOptions,
}

impl AppOptions {
    pub fn validate(&self) -> Result<()> {
        if self.data.procurement.as_os_str().is_empty() {
            return Err(Error::InvalidConfig(s!("data.procurement must name a CSV file")));
        }
        if self.data.procurement_table.trim().is_empty() {
            return Err(Error::InvalidConfig(s!("data.procurement_table must be non-empty")));
        }
        if !(0.0..=1.0).contains(&self.linkage.threshold) {
            return Err(Error::InvalidConfig(format!(
                "linkage.threshold must be within 0.0..=1.0 (got {})",
                self.linkage.threshold
            )));
        }
        Ok(())
    }
}

/// Load options from a TOML file. A missing file yields the defaults.
pub fn load_options(path: &Path) -> Result<AppOptions> {
    if !path.exists() {
        logd!("Config: {} missing, using defaults", path.display());
        return Ok(AppOptions::default());
    }
    let text = fs::read_to_string(path).map_err(|e| Error::file(path, e))?;
    let options: AppOptions = toml::from_str(&text)
        .map_err(|source| Error::Config { path: path.to_path_buf(), source })?;
    options.validate()?;
    logf!("Config: loaded {}", path.display());
    Ok(options)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataOptions {
    /// CSV export of the procurement table (first row = headers).
    pub procurement: PathBuf,
    /// CSV export of the awards table, if cross-matching is wanted.
    pub awards: Option<PathBuf>,
    pub procurement_table: String,
    pub awards_table: String,
    /// Dialect used when rendering SQL for an external engine.
    pub dialect: SqlDialect,
}

impl Default for DataOptions {
    fn default() -> Self {
        Self {
            procurement: PathBuf::from(DEFAULT_DATA_DIR).join(DEFAULT_PROCUREMENT_FILE),
            awards: Some(PathBuf::from(DEFAULT_DATA_DIR).join(DEFAULT_AWARDS_FILE)),
            procurement_table: s!(PROCUREMENT_TABLE),
            awards_table: s!(AWARDS_TABLE),
            dialect: SqlDialect::Sqlite,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    pub out_dir: PathBuf,
    /// Fixed file name (extension included). `None` = timestamped default.
    pub file_name: Option<String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_name: None,
        }
    }
}

impl ExportOptions {
    /// Final output path. `stem` names the default file when no explicit
    /// file name was set, e.g. `search_results` becomes
    /// `nyc_procurement_search_results_2024-11-18_10-04-55.csv`.
    pub fn out_path(&self, stem: &str) -> PathBuf {
        match &self.file_name {
            Some(name) => self.out_dir.join(name),
            None => {
                let stamp = Local::now().format(TIMESTAMP_FMT).to_string();
                let stem = sanitize_filename(stem, "results");
                let name = join!(EXPORT_PREFIX, "_", &stem, "_", &stamp, ".", self.format.ext());
                self.out_dir.join(name)
            }
        }
    }

    /// Parse GUI/CLI text into dir + file name.
    /// A trailing separator (or an empty string) means "directory only";
    /// a typed extension is kept even if it disagrees with the format.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.file_name = None;
            return;
        }
        if s.ends_with('/') || s.ends_with('\\') {
            self.out_dir = PathBuf::from(s);
            self.file_name = None;
            return;
        }
        let p = Path::new(s);
        self.out_dir = p
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        self.file_name = p.file_name().map(|f| f.to_string_lossy().into_owned());
    }

    /// Text shown in the output field.
    pub fn display_path(&self) -> String {
        match &self.file_name {
            Some(name) => self.out_dir.join(name).to_string_lossy().into_owned(),
            None => {
                let mut dir = self.out_dir.to_string_lossy().into_owned();
                if !dir.is_empty() && !dir.ends_with(std::path::MAIN_SEPARATOR) {
                    dir.push(std::path::MAIN_SEPARATOR);
                }
                dir
            }
        }
    }
}
