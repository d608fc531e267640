use ketban_core::{CategoryResolver, Profile, RawRecord, SessionConfig, SocialGraph};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::args::Args;
use crate::error::AppError;

pub const PROFILES_FILE: &str = "profiles.json";
pub const CONFIG_FILE: &str = "ketban.json";

pub struct KetbanApp {
    pub profiles_path: PathBuf,
    pub config_path: Option<PathBuf>,
    resolver: CategoryResolver,
}

impl KetbanApp {
    pub fn new(args: &Args) -> Result<Self, AppError> {
        let profiles_path = args
            .profiles
            .clone()
            .unwrap_or_else(|| args.data_dir.join(PROFILES_FILE));

        if !profiles_path.exists() {
            return Err(AppError::ProfilesNotFound(profiles_path));
        }

        // An explicit config must exist; the default one is optional.
        let config_path = match &args.config {
            Some(path) if !path.exists() => return Err(AppError::ConfigNotFound(path.clone())),
            Some(path) => Some(path.clone()),
            None => Some(args.data_dir.join(CONFIG_FILE)).filter(|path| path.exists()),
        };

        Ok(Self {
            profiles_path,
            config_path,
            resolver: CategoryResolver::default(),
        })
    }

    pub fn resolver(&self) -> &CategoryResolver {
        &self.resolver
    }

    pub fn load_records(&self) -> Result<Vec<RawRecord>, AppError> {
        read_json(&self.profiles_path)
    }

    pub fn load_config(&self) -> Result<SessionConfig, AppError> {
        match &self.config_path {
            Some(path) => read_json(path),
            None => {
                info!("no config document found, using built-in tables");
                Ok(SessionConfig::default())
            }
        }
    }

    pub fn build_graph(&self) -> Result<SocialGraph, AppError> {
        let records = self.load_records()?;
        let config = self.load_config()?;
        info!(
            records = records.len(),
            path = %self.profiles_path.display(),
            "profiles loaded"
        );

        let population = records
            .iter()
            .map(|record| Profile::from_record(record, &self.resolver))
            .collect();

        Ok(SocialGraph::new(
            population,
            config.location_equivalence(),
            config.interest_taxonomy(),
        ))
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let contents = std::fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| AppError::Json {
        path: path.to_path_buf(),
        source,
    })
}
