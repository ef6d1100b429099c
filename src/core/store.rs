//! Named profile store backed by a single JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::validation;
use crate::constants;
use crate::error::{Error, Result};
use crate::state::{Credentials, Profile, VpnType};
use crate::utils;

/// On-disk layout of `profiles.json`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ProfileFile {
    #[serde(default)]
    profiles: Vec<Profile>,
}

/// What [`ProfileStore::save`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Overwritten,
}

/// Profile persistence. Every mutating call rewrites the file.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    /// Store living at `<config_dir>/profiles.json`.
    #[must_use]
    pub fn in_dir(config_dir: &Path) -> Self {
        Self {
            path: config_dir.join(constants::PROFILES_FILE_NAME),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<Profile>> {
        if !self.path.is_file() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let file: ProfileFile = serde_json::from_str(&content)?;
        Ok(file.profiles)
    }

    fn write(&self, profiles: Vec<Profile>) -> Result<()> {
        let json = serde_json::to_string_pretty(&ProfileFile { profiles })?;
        utils::write_private(&self.path, &json)?;
        Ok(())
    }

    /// Profile by exact name.
    pub fn get(&self, name: &str) -> Result<Option<Profile>> {
        let name = name.trim();
        Ok(self.load()?.into_iter().find(|p| p.name == name))
    }

    /// All profiles, optionally of one type, sorted by name.
    pub fn list(&self, vpn_type: Option<VpnType>) -> Result<Vec<Profile>> {
        let mut profiles: Vec<Profile> = self
            .load()?
            .into_iter()
            .filter(|p| vpn_type.map_or(true, |t| p.vpn_type == t))
            .collect();
        profiles.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(profiles)
    }

    /// Add a new profile. Fails if the name is taken.
    pub fn insert(&self, profile: Profile) -> Result<()> {
        let mut profiles = self.load()?;
        if profiles.iter().any(|p| p.name == profile.name) {
            return Err(Error::DuplicateProfile(profile.name));
        }
        info!("Saving config '{}' ({})", profile.name, profile.vpn_type);
        let make_default = profile.default;
        let (name, vpn_type) = (profile.name.clone(), profile.vpn_type);
        profiles.push(profile);
        if make_default {
            mark_default(&mut profiles, &name, vpn_type);
        }
        self.write(profiles)
    }

    /// Insert, or overwrite an existing profile when `force` is set.
    ///
    /// Host, user and password must all be non-empty. An overwrite keeps the
    /// original creation time and default flag.
    pub fn save(
        &self,
        name: &str,
        vpn_type: VpnType,
        credentials: Credentials,
        force: bool,
    ) -> Result<SaveOutcome> {
        if !validation::validate_profile_name(name) {
            return Err(Error::Validation("Config name cannot be empty.".to_string()));
        }
        if [&credentials.host, &credentials.user, &credentials.password]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(Error::Validation(constants::MSG_FIELDS_REQUIRED.to_string()));
        }

        let mut profiles = self.load()?;
        let name = name.trim();
        let Some(index) = profiles.iter().position(|p| p.name == name) else {
            self.insert(Profile::new(name, vpn_type, credentials))?;
            return Ok(SaveOutcome::Created);
        };

        if !force {
            return Err(Error::DuplicateProfile(name.to_string()));
        }

        info!("Overwriting config '{name}'");
        let existing = &mut profiles[index];
        let type_changed = existing.vpn_type != vpn_type;
        existing.vpn_type = vpn_type;
        existing.host = credentials.host;
        existing.user = credentials.user;
        existing.password = credentials.password;
        existing.updated_at = Utc::now();
        if type_changed && existing.default {
            mark_default(&mut profiles, name, vpn_type);
        }
        self.write(profiles)?;
        Ok(SaveOutcome::Overwritten)
    }

    /// Remove a profile. Returns whether it existed.
    pub fn delete(&self, name: &str) -> Result<bool> {
        let mut profiles = self.load()?;
        let before = profiles.len();
        profiles.retain(|p| p.name != name.trim());
        if profiles.len() == before {
            return Ok(false);
        }
        debug!("Deleted config '{}'", name.trim());
        self.write(profiles)?;
        Ok(true)
    }

    /// Make `name` the only default profile of its type.
    pub fn set_default(&self, name: &str) -> Result<Profile> {
        let mut profiles = self.load()?;
        let name = name.trim();
        let vpn_type = profiles
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.vpn_type)
            .ok_or_else(|| Error::ProfileNotFound(name.to_string()))?;
        mark_default(&mut profiles, name, vpn_type);
        let updated = profiles
            .iter()
            .find(|p| p.name == name)
            .cloned()
            .ok_or_else(|| Error::ProfileNotFound(name.to_string()))?;
        self.write(profiles)?;
        Ok(updated)
    }

    /// Default profile for a type, if one is marked.
    pub fn default_for(&self, vpn_type: VpnType) -> Result<Option<Profile>> {
        Ok(self
            .load()?
            .into_iter()
            .find(|p| p.vpn_type == vpn_type && p.default))
    }
}

fn mark_default(profiles: &mut [Profile], name: &str, vpn_type: VpnType) {
    for profile in profiles.iter_mut().filter(|p| p.vpn_type == vpn_type) {
        profile.default = profile.name == name;
    }
}
