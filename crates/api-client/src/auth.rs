use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{
    connect_builder::{IsUnset, SetBaseurl, State},
    ConnectBuilder, PROD_BASEURL,
};

pub const TOKEN_ENV: &str = "USERDIR_TOKEN";
pub const URL_ENV: &str = "USERDIR_API_URL";
pub const CONFIG_DIR_ENV: &str = "USERDIR_CONFIG_DIR";

/// Content of `credentials.toml`
///
/// The top-level `token` and `url` form the default profile, named profiles
/// live in their own tables.
#[derive(Debug, Deserialize, Default, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,

    #[serde(flatten)]
    profiles: BTreeMap<String, Credentials>,

    /// Built from `USERDIR_TOKEN` rather than read from the file
    #[serde(skip)]
    from_env: bool,
}

#[derive(Debug, Deserialize, Default, Serialize, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    dirs::config_dir()
        .map(|dir| dir.join("userdir"))
        .ok_or_else(|| anyhow::anyhow!("Could not get user config directory"))
}

/// Open `path` for writing, readable by the owner only on unix
fn open_private(path: &Path) -> Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    std::os::unix::fs::OpenOptionsExt::mode(&mut options, 0o600);

    options
        .open(path)
        .with_context(|| format!("Could not open {}", path.display()))
}

impl Config {
    /// Location of the credentials file, creating its directory when needed
    ///
    /// `USERDIR_CONFIG_DIR` replaces the platform config directory.
    pub fn path() -> Result<PathBuf> {
        let dir = config_dir()?;
        std::fs::create_dir_all(&dir).context("Could not create userdir config dir")?;
        Ok(dir.join("credentials.toml"))
    }

    /// Credentials in effect: `USERDIR_TOKEN` when set, else the stored file
    ///
    /// A config built from the environment cannot be saved, use
    /// [`Config::load_stored`] to change the file.
    pub fn load() -> Result<Self> {
        match std::env::var(TOKEN_ENV) {
            Ok(token) => Ok(Self {
                token: Some(token),
                url: std::env::var(URL_ENV).ok(),
                from_env: true,
                ..Default::default()
            }),
            Err(_) => Self::load_stored(),
        }
    }

    /// Credentials from the file only, ignoring `USERDIR_TOKEN`
    pub fn load_stored() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).context("Could not load credentials file"),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err).context("Could not read credentials file"),
        }
    }

    pub fn is_from_env(&self) -> bool {
        self.from_env
    }

    pub fn save(&self) -> Result<()> {
        if self.from_env {
            anyhow::bail!("Credentials come from {TOKEN_ENV}, refusing to overwrite the stored file");
        }
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).context("Could not serialize credentials data")?;
        open_private(path)?
            .write_all(content.as_bytes())
            .context("Could not write credentials data")
    }

    pub fn get(&self, profile: Option<&str>) -> Option<Credentials> {
        let Some(profile) = profile else {
            let token = self.token.clone()?;
            return Some(Credentials {
                token,
                url: self.url.clone(),
            });
        };
        self.profiles.get(profile).cloned()
    }

    /// Whether a token is stored for `profile`
    pub fn has_token(&self, profile: Option<&str>) -> bool {
        match profile {
            Some(profile) => self.profiles.contains_key(profile),
            None => self.token.is_some(),
        }
    }

    pub fn set(&mut self, profile: Option<String>, creds: Credentials) {
        if let Some(profile) = profile {
            self.profiles.insert(profile, creds);
        } else {
            self.token = Some(creds.token);
            self.url = creds.url;
        }
    }

    /// Forget the token of `profile`, returning whether one was stored
    pub fn remove(&mut self, profile: Option<&str>) -> bool {
        let Some(profile) = profile else {
            self.url = None;
            return self.token.take().is_some();
        };
        self.profiles.remove(profile).is_some()
    }
}

impl<S: State> ConnectBuilder<S> {
    /// Point the client at the URL stored alongside `creds`, or production
    pub fn credentials(self, creds: &Credentials) -> ConnectBuilder<SetBaseurl<S>>
    where
        S::Baseurl: IsUnset,
    {
        let baseurl = creds.url.as_deref().unwrap_or(PROD_BASEURL);
        self.baseurl(baseurl.to_string())
    }
}
