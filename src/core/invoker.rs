//! Process invoker: runs the vendor client and retries failed connections.
//!
//! All subprocess work goes through [`CommandRunner`], so the retry loop can
//! be exercised against scripted output. [`SystemRunner`] is the real
//! implementation and enforces a per-call timeout.

use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use super::network;
use crate::constants;
use crate::error::{Error, Result};
use crate::state::{AttemptEvent, ConnectOutcome, Credentials, VpnState};
use crate::vpn::Backend;

/// One subprocess call.
#[derive(Clone)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
    /// Written to the child's stdin, then stdin is closed.
    pub stdin: Option<String>,
    pub timeout: Duration,
}

impl std::fmt::Debug for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Invocation")
            .field("program", &self.program)
            .field("args", &self.args)
            .field("stdin", &self.stdin.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Captured result of a finished child.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code; `None` when killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    #[must_use]
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Stdout followed by stderr.
    #[must_use]
    pub fn combined(&self) -> String {
        if self.stderr.trim().is_empty() {
            self.stdout.clone()
        } else {
            format!("{}\n{}", self.stdout, self.stderr)
        }
    }
}

/// Something that can run a subprocess to completion.
pub trait CommandRunner {
    /// Run `invocation`. A child that cannot be started is [`Error::Launch`];
    /// one that outlives its timeout is killed and reported as [`Error::Timeout`].
    fn run(&self, invocation: &Invocation) -> Result<ProcessOutput>;
}

/// Runs real processes with `std::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<ProcessOutput> {
        debug!(
            "Running {} {}",
            invocation.program.display(),
            invocation.args.join(" ")
        );

        let mut child = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(if invocation.stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| Error::Launch {
                program: invocation.program.clone(),
                source,
            })?;

        let stdout = child.stdout.take().map(spawn_reader);
        let stderr = child.stderr.take().map(spawn_reader);

        if let (Some(input), Some(mut pipe)) = (invocation.stdin.as_deref(), child.stdin.take()) {
            // Dropping the pipe afterwards signals EOF.
            if let Err(e) = pipe.write_all(input.as_bytes()) {
                debug!("Client closed stdin early: {e}");
            }
        }

        // `None` when the timeout is too large to represent: wait indefinitely.
        let deadline = Instant::now().checked_add(invocation.timeout);
        let status = loop {
            if let Some(status) = child.try_wait()? {
                break status;
            }
            if deadline.is_some_and(|d| Instant::now() >= d) {
                warn!(
                    "{} timed out after {}s, killing it",
                    invocation.program.display(),
                    invocation.timeout.as_secs()
                );
                let _ = child.kill();
                let _ = child.wait();
                return Err(Error::Timeout {
                    program: invocation.program.clone(),
                    after: invocation.timeout,
                });
            }
            thread::sleep(constants::PROCESS_POLL_INTERVAL);
        };

        // A forked helper may keep the pipes open after the client exits.
        let drain_until = Instant::now() + constants::OUTPUT_DRAIN_GRACE;
        Ok(ProcessOutput {
            code: status.code(),
            stdout: collect(stdout, drain_until),
            stderr: collect(stderr, drain_until),
        })
    }
}

/// Forward everything read from `pipe` in chunks until EOF.
fn spawn_reader<R: Read + Send + 'static>(mut pipe: R) -> Receiver<Vec<u8>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = [0_u8; 4096];
        loop {
            match pipe.read(&mut buf) {
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
                Ok(0) | Err(_) => break,
                Ok(n) => {
                    if tx.send(buf[..n].to_vec()).is_err() {
                        break;
                    }
                }
            }
        }
    });
    rx
}

/// Output received before EOF or `until`, whichever comes first.
fn collect(reader: Option<Receiver<Vec<u8>>>, until: Instant) -> String {
    let Some(reader) = reader else {
        return String::new();
    };
    let mut buf = Vec::new();
    loop {
        let remaining = until.saturating_duration_since(Instant::now());
        match reader.recv_timeout(remaining) {
            Ok(chunk) => buf.extend_from_slice(&chunk),
            Err(RecvTimeoutError::Timeout) => {
                debug!("Pipe still open after the client exited, keeping partial output");
                break;
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Pacing of the connect loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Number of attempts; zero is treated as one.
    pub retries: u32,
    /// Pause between failed attempts.
    pub delay: Duration,
    /// Initial per-invocation timeout.
    pub timeout: Duration,
    /// Added to the timeout after an attempt times out.
    pub timeout_increment: Duration,
    /// Probe the network before each attempt.
    pub check_network: bool,
}

impl RetryPolicy {
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.retries.max(1)
    }
}

enum Attempt {
    Connected,
    TimedOut(Duration),
    Failed(String),
}

/// Drives one vendor client through a [`Backend`].
pub struct Invoker<'a, R: CommandRunner + ?Sized> {
    runner: &'a R,
    backend: &'a dyn Backend,
    client: PathBuf,
    policy: RetryPolicy,
}

impl<'a, R: CommandRunner + ?Sized> Invoker<'a, R> {
    pub fn new(runner: &'a R, backend: &'a dyn Backend, client: PathBuf, policy: RetryPolicy) -> Self {
        Self {
            runner,
            backend,
            client,
            policy,
        }
    }

    fn invocation(&self, args: Vec<String>, stdin: Option<String>, timeout: Duration) -> Invocation {
        Invocation {
            program: self.client.clone(),
            args,
            stdin,
            timeout,
        }
    }

    fn command_error(&self, output: ProcessOutput) -> Error {
        Error::Command {
            program: self.client.clone(),
            code: output.code,
            stderr: output.stderr,
        }
    }

    /// Ask the client for its current state.
    pub fn status(&self) -> Result<VpnState> {
        let output = self.runner.run(&self.invocation(
            self.backend.status_args(),
            None,
            self.policy.timeout,
        ))?;
        let state = self.backend.parse_state(&output.combined());
        if !output.success() && matches!(state, VpnState::Unknown(_)) {
            return Err(self.command_error(output));
        }
        debug!("{} client state: {state}", self.backend.vpn_type());
        Ok(state)
    }

    /// Tear the tunnel down and report the resulting state.
    pub fn disconnect(&self) -> Result<VpnState> {
        info!("Disconnecting {} VPN", self.backend.vpn_type());
        let output = self.runner.run(&self.invocation(
            self.backend.disconnect_args(),
            None,
            self.policy.timeout,
        ))?;
        if !output.success() {
            return Err(self.command_error(output));
        }
        self.status()
    }

    /// Connect with `credentials`, retrying per the policy.
    ///
    /// `observe` is told about every attempt, skip and pause. A client that
    /// cannot be launched aborts at once; everything else is retried.
    pub fn connect(
        &self,
        credentials: &Credentials,
        mut observe: impl FnMut(&AttemptEvent),
    ) -> Result<ConnectOutcome> {
        match self.status() {
            Ok(state) if state.is_connected() => {
                info!("{} VPN already connected", self.backend.vpn_type());
                return Ok(ConnectOutcome::AlreadyConnected);
            }
            Ok(_) => {}
            // The agent may not be up yet; connecting can still succeed.
            Err(e @ (Error::Command { .. } | Error::Timeout { .. })) => {
                warn!("State check failed, connecting anyway: {e}");
            }
            Err(e) => return Err(e),
        }

        let total = self.policy.attempts();
        let mut timeout = self.policy.timeout;
        let mut last_reason = String::new();

        for attempt in 1..=total {
            if self.policy.check_network && !network::is_network_ready(self.runner) {
                warn!("Network is not ready ({attempt}/{total})");
                observe(&AttemptEvent::NetworkNotReady { attempt, total });
                last_reason = "network is not ready".to_string();
                self.pause(attempt, total, &mut observe);
                continue;
            }

            observe(&AttemptEvent::Started { attempt, total });
            info!(
                "Connecting to {} as {} ({attempt}/{total})",
                credentials.host, credentials.user
            );

            let reason = match self.attempt(credentials, timeout)? {
                Attempt::Connected => {
                    info!("Connected to {} on attempt {attempt}", credentials.host);
                    return Ok(ConnectOutcome::Connected { attempts: attempt });
                }
                Attempt::TimedOut(after) => {
                    timeout = timeout.saturating_add(self.policy.timeout_increment);
                    format!("client timed out after {}s", after.as_secs())
                }
                Attempt::Failed(reason) => reason,
            };

            warn!("Attempt {attempt}/{total} failed: {reason}");
            observe(&AttemptEvent::Failed {
                attempt,
                total,
                reason: reason.clone(),
            });
            last_reason = reason;
            self.pause(attempt, total, &mut observe);
        }

        Err(Error::ConnectionFailed {
            attempts: total,
            reason: last_reason,
        })
    }

    fn attempt(&self, credentials: &Credentials, timeout: Duration) -> Result<Attempt> {
        let invocation = self.invocation(
            self.backend.connect_args(&credentials.host),
            Some(self.backend.credentials_input(credentials)),
            timeout,
        );
        let output = match self.runner.run(&invocation) {
            Ok(output) => output,
            Err(Error::Timeout { after, .. }) => return Ok(Attempt::TimedOut(after)),
            Err(e) => return Err(e),
        };

        if let Some(reason) = self.backend.failure_reason(&output.combined()) {
            return Ok(Attempt::Failed(reason));
        }

        match self.status() {
            Ok(VpnState::Connected) => Ok(Attempt::Connected),
            Ok(state) => Ok(Attempt::Failed(format!("client reported state: {state}"))),
            Err(e @ (Error::Timeout { .. } | Error::Command { .. })) => {
                Ok(Attempt::Failed(e.to_string()))
            }
            Err(e) => Err(e),
        }
    }

    fn pause(&self, attempt: u32, total: u32, observe: &mut impl FnMut(&AttemptEvent)) {
        if attempt < total {
            observe(&AttemptEvent::Retrying {
                delay: self.policy.delay,
            });
            thread::sleep(self.policy.delay);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{output, Kind, ScriptedRunner};
    use super::*;
    use crate::vpn::Cisco;

    const CONNECTED: &str = "  >> state: Connected\n";

    fn policy(retries: u32) -> RetryPolicy {
        RetryPolicy {
            retries,
            delay: Duration::ZERO,
            timeout: Duration::from_secs(20),
            timeout_increment: Duration::from_secs(10),
            check_network: false,
        }
    }

    fn creds() -> Credentials {
        Credentials {
            host: "vpn.example.com".to_string(),
            user: "alice".to_string(),
            password: "pw".to_string(),
        }
    }

    fn invoker(runner: &ScriptedRunner, policy: RetryPolicy) -> Invoker<'_, ScriptedRunner> {
        Invoker::new(runner, &Cisco, PathBuf::from("/opt/cisco/vpn"), policy)
    }

    #[test]
    fn test_success_marker_reports_connected() {
        let runner = ScriptedRunner::new()
            .then(Kind::Status, Ok(output(0, ">> state: Disconnected")))
            .then(Kind::Status, Ok(output(0, CONNECTED)));

        let outcome = invoker(&runner, policy(3)).connect(&creds(), |_| {}).unwrap();

        assert_eq!(outcome, ConnectOutcome::Connected { attempts: 1 });
        assert_eq!(runner.calls_of(Kind::Connect).len(), 1);
    }

    #[test]
    fn test_credentials_fed_on_stdin() {
        let runner = ScriptedRunner::new()
            .then(Kind::Status, Ok(output(0, ">> state: Disconnected")))
            .then(Kind::Status, Ok(output(0, CONNECTED)));

        invoker(&runner, policy(1)).connect(&creds(), |_| {}).unwrap();

        let connect = &runner.calls_of(Kind::Connect)[0];
        assert_eq!(connect.program, PathBuf::from("/opt/cisco/vpn"));
        assert_eq!(connect.args, vec!["-s", "connect", "vpn.example.com"]);
        assert_eq!(connect.stdin.as_deref(), Some("alice\npw\ny"));
        assert!(!format!("{connect:?}").contains("pw\ny"));
    }

    #[test]
    fn test_n_failures_then_report_failure() {
        let runner = ScriptedRunner::new()
            .always(Kind::Connect, output(1, "  >> error: Login failed.\n"));

        let err = invoker(&runner, policy(4))
            .connect(&creds(), |_| {})
            .unwrap_err();

        assert!(matches!(
            err,
            Error::ConnectionFailed { attempts: 4, ref reason } if reason.contains("Login failed")
        ));
        assert_eq!(runner.calls_of(Kind::Connect).len(), 4);
    }

    #[test]
    fn test_not_connected_after_attempt_is_failure() {
        let runner = ScriptedRunner::new();
        let err = invoker(&runner, policy(2))
            .connect(&creds(), |_| {})
            .unwrap_err();
        assert!(matches!(
            err,
            Error::ConnectionFailed { attempts: 2, ref reason } if reason.contains("Disconnected")
        ));
    }

    #[test]
    fn test_succeeds_on_later_attempt() {
        let runner = ScriptedRunner::new()
            .then(Kind::Connect, Ok(output(1, ">> error: Connection attempt has failed.")))
            .then(Kind::Status, Ok(output(0, ">> state: Disconnected")))
            .then(Kind::Status, Ok(output(0, CONNECTED)));

        let outcome = invoker(&runner, policy(3)).connect(&creds(), |_| {}).unwrap();

        assert_eq!(outcome, ConnectOutcome::Connected { attempts: 2 });
        assert_eq!(runner.calls_of(Kind::Connect).len(), 2);
    }

    #[test]
    fn test_already_connected_skips_connect() {
        let runner = ScriptedRunner::new().always(Kind::Status, output(0, CONNECTED));
        let outcome = invoker(&runner, policy(3)).connect(&creds(), |_| {}).unwrap();
        assert_eq!(outcome, ConnectOutcome::AlreadyConnected);
        assert!(runner.calls_of(Kind::Connect).is_empty());
    }

    #[test]
    fn test_network_not_ready_consumes_attempt() {
        let runner = ScriptedRunner::new()
            .then(Kind::Ping, Ok(output(1, "100% packet loss")))
            .then(Kind::Status, Ok(output(0, ">> state: Disconnected")))
            .then(Kind::Status, Ok(output(0, CONNECTED)));
        let mut with_probe = policy(3);
        with_probe.check_network = true;

        let mut events = Vec::new();
        let outcome = invoker(&runner, with_probe)
            .connect(&creds(), |e| events.push(e.clone()))
            .unwrap();

        assert_eq!(outcome, ConnectOutcome::Connected { attempts: 2 });
        assert_eq!(runner.calls_of(Kind::Connect).len(), 1);
        assert_eq!(runner.calls_of(Kind::Ping).len(), 2);
        assert_eq!(
            events,
            vec![
                AttemptEvent::NetworkNotReady { attempt: 1, total: 3 },
                AttemptEvent::Retrying { delay: Duration::ZERO },
                AttemptEvent::Started { attempt: 2, total: 3 },
            ]
        );
    }

    #[test]
    fn test_timeout_grows_after_timed_out_attempt() {
        let runner = ScriptedRunner::new()
            .then(
                Kind::Connect,
                Err(Error::Timeout {
                    program: PathBuf::from("/opt/cisco/vpn"),
                    after: Duration::from_secs(20),
                }),
            )
            .then(Kind::Status, Ok(output(0, ">> state: Disconnected")))
            .then(Kind::Status, Ok(output(0, CONNECTED)));

        let outcome = invoker(&runner, policy(3)).connect(&creds(), |_| {}).unwrap();

        assert_eq!(outcome, ConnectOutcome::Connected { attempts: 2 });
        let connects = runner.calls_of(Kind::Connect);
        assert_eq!(connects[0].timeout, Duration::from_secs(20));
        assert_eq!(connects[1].timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_timeout_growth_saturates() {
        let runner = ScriptedRunner::new()
            .then(
                Kind::Connect,
                Err(Error::Timeout {
                    program: PathBuf::from("/opt/cisco/vpn"),
                    after: Duration::from_secs(u64::MAX),
                }),
            )
            .then(Kind::Status, Ok(output(0, ">> state: Disconnected")))
            .then(Kind::Status, Ok(output(0, CONNECTED)));
        let mut huge = policy(2);
        huge.timeout = Duration::from_secs(u64::MAX);

        let outcome = invoker(&runner, huge).connect(&creds(), |_| {}).unwrap();

        assert_eq!(outcome, ConnectOutcome::Connected { attempts: 2 });
        assert_eq!(runner.calls_of(Kind::Connect)[1].timeout, Duration::MAX);
    }

    #[test]
    fn test_failed_state_check_still_connects() {
        let runner = ScriptedRunner::new()
            .then(
                Kind::Status,
                Ok(ProcessOutput {
                    code: Some(1),
                    stdout: String::new(),
                    stderr: "agent not running".to_string(),
                }),
            )
            .then(Kind::Status, Ok(output(0, CONNECTED)));

        let outcome = invoker(&runner, policy(1)).connect(&creds(), |_| {}).unwrap();

        assert_eq!(outcome, ConnectOutcome::Connected { attempts: 1 });
        assert_eq!(runner.calls_of(Kind::Connect).len(), 1);
    }

    #[test]
    fn test_state_check_launch_failure_aborts() {
        let runner = ScriptedRunner::new().then(
            Kind::Status,
            Err(Error::Launch {
                program: PathBuf::from("/opt/cisco/vpn"),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }),
        );

        let err = invoker(&runner, policy(3))
            .connect(&creds(), |_| {})
            .unwrap_err();

        assert!(matches!(err, Error::Launch { .. }));
        assert!(runner.calls_of(Kind::Connect).is_empty());
    }

    #[test]
    fn test_launch_failure_is_not_retried() {
        let runner = ScriptedRunner::new().then(
            Kind::Connect,
            Err(Error::Launch {
                program: PathBuf::from("/opt/cisco/vpn"),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            }),
        );

        let err = invoker(&runner, policy(3))
            .connect(&creds(), |_| {})
            .unwrap_err();

        assert!(matches!(err, Error::Launch { .. }));
        assert_eq!(runner.calls_of(Kind::Connect).len(), 1);
    }

    #[test]
    fn test_zero_retries_still_attempts_once() {
        let runner = ScriptedRunner::new();
        let err = invoker(&runner, policy(0))
            .connect(&creds(), |_| {})
            .unwrap_err();
        assert!(matches!(err, Error::ConnectionFailed { attempts: 1, .. }));
        assert_eq!(runner.calls_of(Kind::Connect).len(), 1);
    }

    #[test]
    fn test_events_for_failed_run() {
        let runner = ScriptedRunner::new().always(Kind::Connect, output(1, ">> error: bad"));
        let mut events = Vec::new();
        let _ = invoker(&runner, policy(2)).connect(&creds(), |e| events.push(e.clone()));
        assert_eq!(
            events,
            vec![
                AttemptEvent::Started { attempt: 1, total: 2 },
                AttemptEvent::Failed {
                    attempt: 1,
                    total: 2,
                    reason: ">> error: bad".to_string()
                },
                AttemptEvent::Retrying { delay: Duration::ZERO },
                AttemptEvent::Started { attempt: 2, total: 2 },
                AttemptEvent::Failed {
                    attempt: 2,
                    total: 2,
                    reason: ">> error: bad".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_status_unknown_nonzero_is_command_error() {
        let runner = ScriptedRunner::new().always(
            Kind::Status,
            ProcessOutput {
                code: Some(3),
                stdout: String::new(),
                stderr: "agent not running".to_string(),
            },
        );
        let err = invoker(&runner, policy(1)).status().unwrap_err();
        assert!(matches!(err, Error::Command { code: Some(3), .. }));
    }

    #[test]
    fn test_status_nonzero_with_known_state() {
        let runner = ScriptedRunner::new().always(Kind::Status, output(1, ">> state: Disconnected"));
        assert_eq!(
            invoker(&runner, policy(1)).status().unwrap(),
            VpnState::Disconnected
        );
    }

    #[test]
    fn test_disconnect_reports_state() {
        let runner = ScriptedRunner::new();
        let state = invoker(&runner, policy(1)).disconnect().unwrap();
        assert_eq!(state, VpnState::Disconnected);
        assert_eq!(runner.calls_of(Kind::Disconnect)[0].args, vec!["disconnect"]);
    }

    #[test]
    fn test_disconnect_failure() {
        let runner = ScriptedRunner::new().always(Kind::Disconnect, output(2, ""));
        let err = invoker(&runner, policy(1)).disconnect().unwrap_err();
        assert!(matches!(err, Error::Command { code: Some(2), .. }));
    }

    #[test]
    fn test_combined_output() {
        let out = ProcessOutput {
            code: Some(0),
            stdout: "out".to_string(),
            stderr: "err".to_string(),
        };
        assert_eq!(out.combined(), "out\nerr");
        assert_eq!(output(0, "only").combined(), "only");
    }

    #[cfg(unix)]
    mod system {
        use super::*;

        fn sh(script: &str, stdin: Option<&str>, timeout: Duration) -> Result<ProcessOutput> {
            SystemRunner.run(&Invocation {
                program: PathBuf::from("sh"),
                args: vec!["-c".to_string(), script.to_string()],
                stdin: stdin.map(str::to_string),
                timeout,
            })
        }

        #[test]
        fn test_captures_stdout_and_code() {
            let out = sh("echo hello; exit 3", None, Duration::from_secs(5)).unwrap();
            assert_eq!(out.code, Some(3));
            assert_eq!(out.stdout.trim(), "hello");
        }

        #[test]
        fn test_pipes_stdin() {
            let out = sh("cat", Some("alice\npw\ny"), Duration::from_secs(5)).unwrap();
            assert!(out.success());
            assert_eq!(out.stdout, "alice\npw\ny");
        }

        #[test]
        fn test_kills_on_timeout() {
            let started = Instant::now();
            let err = sh("sleep 5", None, Duration::from_millis(200)).unwrap_err();
            assert!(matches!(err, Error::Timeout { .. }));
            assert!(started.elapsed() < Duration::from_secs(4));
        }

        #[test]
        fn test_unrepresentable_timeout_waits_for_exit() {
            let out = sh("echo hi", None, Duration::from_secs(u64::MAX)).unwrap();
            assert!(out.success());
            assert_eq!(out.stdout.trim(), "hi");
        }

        #[test]
        fn test_background_child_holding_stdout_does_not_block() {
            let started = Instant::now();
            let out = sh("sleep 5 & echo hi", None, Duration::from_secs(1)).unwrap();
            assert!(started.elapsed() < Duration::from_secs(3));
            assert_eq!(out.stdout.trim(), "hi");
        }

        #[test]
        fn test_missing_program_is_launch_error() {
            let err = SystemRunner
                .run(&Invocation {
                    program: PathBuf::from("/definitely/not/a/vpn/client"),
                    args: vec![],
                    stdin: None,
                    timeout: Duration::from_secs(1),
                })
                .unwrap_err();
            assert!(matches!(err, Error::Launch { .. }));
        }
    }
}
