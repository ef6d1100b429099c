//! Command handlers.
//!
//! Each handler takes the opened [`Workspace`] and, when it talks to a VPN
//! client, a [`CommandRunner`]. Results are printed as they happen and also
//! returned so callers and tests can inspect them.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};

use super::args::{ConnectArgs, CreateArgs};
use super::prompt::Prompter;
use crate::constants;
use crate::core::config::{ClientConfig, ConnectDefaults};
use crate::core::invoker::{CommandRunner, Invoker, RetryPolicy};
use crate::core::store::{ProfileStore, SaveOutcome};
use crate::core::validation;
use crate::error::{Error, Result};
use crate::state::{AttemptEvent, ConnectOutcome, Credentials, Profile, VpnState, VpnType};
use crate::ui;
use crate::utils;
use crate::vpn;

const PROGRESS_TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] [{bar:20.cyan/blue}] {pos}/{len} {msg}";

/// The client config and profile store of one configuration directory.
pub struct Workspace {
    config_path: PathBuf,
    pub config: ClientConfig,
    pub store: ProfileStore,
}

impl Workspace {
    pub fn open(config_dir: &Path) -> Result<Self> {
        let config_path = ClientConfig::file_in(config_dir);
        let store = ProfileStore::in_dir(config_dir);
        debug!(
            "Client config {}, profiles {}",
            config_path.display(),
            store.path().display()
        );
        Ok(Self {
            config: ClientConfig::load(&config_path)?,
            config_path,
            store,
        })
    }

    fn invoker<'a, R: CommandRunner + ?Sized>(
        &self,
        runner: &'a R,
        vpn_type: VpnType,
        policy: RetryPolicy,
    ) -> Result<Invoker<'a, R>> {
        let client = self.config.client_path(vpn_type)?;
        Ok(Invoker::new(runner, vpn::backend_for(vpn_type), client, policy))
    }
}

// ── Client paths ────────────────────────────────────────────────────────────

/// Store the client executable for `vpn_type`.
///
/// The path must exist unless `force` is set.
pub fn set_client(
    workspace: &mut Workspace,
    vpn_type: VpnType,
    path: &str,
    force: bool,
) -> Result<PathBuf> {
    let path = path.trim();
    if path.is_empty() {
        return Err(Error::Validation("Client path cannot be empty.".to_string()));
    }
    let path = utils::expand_home(path);
    if !force && !path.exists() {
        return Err(Error::ClientNotFound(path));
    }

    workspace.config.set_client_path(vpn_type, path.clone());
    workspace.config.save(&workspace.config_path)?;
    info!("Client for {vpn_type} set to {}", path.display());
    ui::success(&format!(
        "VPN client path for {vpn_type} set to {}",
        path.display()
    ));
    Ok(path)
}

/// Supported types with their configured client paths.
pub fn supported(workspace: &Workspace) -> Vec<(VpnType, Option<PathBuf>)> {
    let rows: Vec<_> = VpnType::ALL
        .into_iter()
        .map(|vpn_type| {
            let path = workspace.config.configured_path(vpn_type).map(Path::to_path_buf);
            (vpn_type, path)
        })
        .collect();

    ui::info("Supported VPN types:");
    for (vpn_type, path) in &rows {
        let path = path
            .as_ref()
            .map_or_else(|| "(client path not set)".to_string(), |p| p.display().to_string());
        println!("  {vpn_type:<8}{path}");
    }
    rows
}

// ── Profiles ────────────────────────────────────────────────────────────────

fn checked(value: String, valid: fn(&str) -> bool, error_msg: &str) -> Result<String> {
    let value = value.trim().to_string();
    if valid(&value) {
        Ok(value)
    } else {
        Err(Error::Validation(error_msg.to_string()))
    }
}

/// Create a profile, prompting for anything not given as a flag.
pub fn create<R: BufRead, W: Write>(
    workspace: &Workspace,
    args: CreateArgs,
    prompter: &mut Prompter<R, W>,
) -> Result<Profile> {
    let name = args.name.trim().to_string();
    if !validation::validate_profile_name(&name) {
        return Err(Error::Validation("Config name cannot be empty.".to_string()));
    }
    // Fail before asking for anything.
    if !args.force && workspace.store.get(&name)?.is_some() {
        return Err(Error::DuplicateProfile(name));
    }

    let missing = args.vpn_type.is_none()
        || args.host.is_none()
        || args.user.is_none()
        || args.password.is_none();
    if missing {
        prompter.say(constants::MSG_ENTER_DETAILS)?;
    }

    let vpn_type = match args.vpn_type {
        Some(vpn_type) => vpn_type,
        None => prompter
            .ask_valid(
                constants::PROMPT_VPN_TYPE,
                constants::ERR_PROMPT_VPN_TYPE,
                validation::validate_vpn_type,
            )?
            .parse()
            .map_err(Error::Validation)?,
    };
    let host = match args.host {
        Some(host) => checked(host, validation::validate_host, constants::ERR_PROMPT_HOST)?,
        None => prompter.ask_valid(
            constants::PROMPT_HOST,
            constants::ERR_PROMPT_HOST,
            validation::validate_host,
        )?,
    };
    let user = match args.user {
        Some(user) => checked(user, validation::validate_user, constants::ERR_PROMPT_USER)?,
        None => prompter.ask_valid(
            constants::PROMPT_USER,
            constants::ERR_PROMPT_USER,
            validation::validate_user,
        )?,
    };
    let password = match args.password {
        Some(password) => password,
        None => prompter.ask_secret(constants::PROMPT_PASSWORD)?,
    };

    let outcome = workspace.store.save(
        &name,
        vpn_type,
        Credentials {
            host,
            user,
            password,
        },
        args.force,
    )?;
    let profile = if args.default {
        workspace.store.set_default(&name)?
    } else {
        workspace
            .store
            .get(&name)?
            .ok_or_else(|| Error::ProfileNotFound(name.clone()))?
    };

    match outcome {
        SaveOutcome::Created => ui::success(&format!("Config '{name}' created.")),
        SaveOutcome::Overwritten => ui::success(&format!("Config '{name}' overwritten.")),
    }
    if profile.default {
        ui::info(&format!("'{name}' is the default config for {vpn_type}."));
    }
    Ok(profile)
}

/// Print stored profiles, optionally of one type.
pub fn list(workspace: &Workspace, vpn_type: Option<VpnType>) -> Result<Vec<Profile>> {
    let profiles = workspace.store.list(vpn_type)?;
    if profiles.is_empty() {
        ui::warning(constants::MSG_NO_PROFILES);
    } else {
        ui::table::print_profiles(&profiles)?;
    }
    Ok(profiles)
}

pub fn delete(workspace: &Workspace, name: &str) -> Result<()> {
    if !workspace.store.delete(name)? {
        return Err(Error::ProfileNotFound(name.trim().to_string()));
    }
    ui::success(&format!("Config '{}' deleted.", name.trim()));
    Ok(())
}

pub fn set_default(workspace: &Workspace, name: &str) -> Result<Profile> {
    let profile = workspace.store.set_default(name)?;
    ui::success(&format!(
        "'{}' is now the default config for {}.",
        profile.name, profile.vpn_type
    ));
    Ok(profile)
}

// ── Client operations ───────────────────────────────────────────────────────

/// Credentials for `connect`.
///
/// Host, user and password given together are used as-is (and saved with
/// `--save`). Otherwise the named or default profile is loaded and any
/// single flag overrides its field.
pub fn resolve_credentials(workspace: &Workspace, args: &ConnectArgs) -> Result<Credentials> {
    if let (Some(host), Some(user), Some(password)) = (&args.host, &args.user, &args.password) {
        let credentials = Credentials {
            host: host.trim().to_string(),
            user: user.trim().to_string(),
            password: password.clone(),
        };
        if let Some(name) = &args.save_as {
            workspace
                .store
                .save(name, args.vpn_type, credentials.clone(), args.force)?;
            ui::info(&format!("Config '{}' saved.", name.trim()));
        }
        return Ok(credentials);
    }

    if args.save_as.is_some() {
        warn!("--save needs --host, --user and --password together; not saving");
    }

    let profile = match &args.config {
        Some(name) => workspace
            .store
            .get(name)?
            .ok_or_else(|| Error::ProfileNotFound(name.trim().to_string()))?,
        None => workspace
            .store
            .default_for(args.vpn_type)?
            .ok_or(Error::NoDefaultProfile(args.vpn_type))?,
    };
    if profile.vpn_type != args.vpn_type {
        return Err(Error::Validation(format!(
            "Config '{}' is a {} config, not {}.",
            profile.name, profile.vpn_type, args.vpn_type
        )));
    }
    debug!("Using config '{}'", profile.name);

    let mut credentials = profile.credentials();
    if let Some(host) = &args.host {
        credentials.host = host.trim().to_string();
    }
    if let Some(user) = &args.user {
        credentials.user = user.trim().to_string();
    }
    if let Some(password) = &args.password {
        credentials.password.clone_from(password);
    }
    Ok(credentials)
}

/// Config-file retry defaults with command-line overrides applied.
#[must_use]
pub fn connect_policy(defaults: &ConnectDefaults, args: &ConnectArgs) -> RetryPolicy {
    let mut policy = defaults.policy();
    if let Some(retries) = args.retries {
        policy.retries = retries;
    }
    if let Some(delay) = args.delay {
        policy.delay = Duration::from_secs(delay);
    }
    if let Some(timeout) = args.timeout {
        policy.timeout = Duration::from_secs(timeout);
    }
    if args.no_network_check {
        policy.check_network = false;
    }
    policy
}

/// Connect, showing attempt progress on `progress`.
pub fn connect<R: CommandRunner + ?Sized>(
    workspace: &Workspace,
    args: &ConnectArgs,
    runner: &R,
    progress: &ProgressBar,
) -> Result<ConnectOutcome> {
    let credentials = resolve_credentials(workspace, args)?;
    let policy = connect_policy(&workspace.config.connect, args);
    let total = policy.attempts();
    let invoker = workspace.invoker(runner, args.vpn_type, policy)?;

    progress.set_length(u64::from(total));
    if let Ok(style) = ProgressStyle::with_template(PROGRESS_TEMPLATE) {
        progress.set_style(style.progress_chars("#>-"));
    }

    let result = invoker.connect(&credentials, |event| match event {
        AttemptEvent::Started { attempt, .. } => {
            progress.set_position(u64::from(attempt - 1));
            progress.set_message(format!("Connecting to {}", credentials.host));
        }
        AttemptEvent::NetworkNotReady { attempt, total } => {
            progress.set_position(u64::from(*attempt));
            progress.suspend(|| {
                ui::warning(&format!(
                    "Network is not ready. Skipping attempt {attempt}/{total}."
                ));
            });
        }
        AttemptEvent::Failed {
            attempt,
            total,
            reason,
        } => {
            progress.set_position(u64::from(*attempt));
            progress.suspend(|| {
                ui::warning(&format!("Attempt {attempt}/{total} failed: {reason}"));
            });
        }
        AttemptEvent::Retrying { delay } => {
            progress.set_message(format!("Retrying in {}s", delay.as_secs()));
        }
    });
    progress.finish_and_clear();

    let outcome = result?;
    match outcome {
        ConnectOutcome::AlreadyConnected => ui::warning(constants::MSG_ALREADY_CONNECTED),
        ConnectOutcome::Connected { attempts } => {
            ui::success(constants::MSG_CONNECTED);
            if attempts > 1 {
                ui::info(&format!("Connected on attempt {attempts}/{total}."));
            }
        }
    }
    Ok(outcome)
}

pub fn disconnect<R: CommandRunner + ?Sized>(
    workspace: &Workspace,
    vpn_type: VpnType,
    runner: &R,
) -> Result<VpnState> {
    let invoker = workspace.invoker(runner, vpn_type, workspace.config.connect.policy())?;
    let state = invoker.disconnect()?;
    if state.is_connected() {
        ui::warning(&format!("{vpn_type} client still reports a connection."));
    } else {
        ui::success(constants::MSG_DISCONNECTED);
    }
    Ok(state)
}

pub fn status<R: CommandRunner + ?Sized>(
    workspace: &Workspace,
    vpn_type: VpnType,
    runner: &R,
) -> Result<VpnState> {
    let invoker = workspace.invoker(runner, vpn_type, workspace.config.connect.policy())?;
    let state = invoker.status()?;
    ui::state_line(vpn_type, &state);
    Ok(state)
}
