use std::io;

use super::Credential;

pub(crate) const DEFAULT_MAX_ATTEMPTS: u8 = 3;

/// Which half of the credential is being asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginPhase {
    Username,
    Pin,
}

impl std::fmt::Display for LoginPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginPhase::Username => write!(f, "username"),
            LoginPhase::Pin => write!(f, "pin"),
        }
    }
}

/// How a login sequence ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Success,
    /// Attempts exhausted in the given phase. Terminal: the run must end.
    Locked(LoginPhase),
    /// Input ran out before a decision was reached.
    Abandoned,
}

/// Result of submitting one candidate to an `AuthSession`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
    /// Username accepted, now waiting for the PIN.
    Advanced,
    Authenticated,
    Rejected { remaining: u8 },
    LockedOut,
}

/// Transient attempt-counting state for one login sequence.
///
/// Username phase first, then PIN phase; each phase gets the full attempt budget.
/// Once authenticated or locked out, further submissions repeat that result.
#[derive(Debug)]
pub struct AuthSession<'a> {
    credential: &'a Credential,
    max_attempts: u8,
    phase: LoginPhase,
    attempts_remaining: u8,
    outcome: Option<LoginOutcome>,
}

impl<'a> AuthSession<'a> {
    pub fn new(credential: &'a Credential, max_attempts: u8) -> Self {
        let max_attempts = max_attempts.max(1);
        Self {
            credential,
            max_attempts,
            phase: LoginPhase::Username,
            attempts_remaining: max_attempts,
            outcome: None,
        }
    }

    pub fn phase(&self) -> LoginPhase {
        self.phase
    }

    pub fn attempts_remaining(&self) -> u8 {
        self.attempts_remaining
    }

    /// The terminal outcome, once reached
    pub fn outcome(&self) -> Option<LoginOutcome> {
        self.outcome
    }

    /// Check a candidate for the current phase. Surrounding whitespace is ignored.
    pub fn submit(&mut self, candidate: &str) -> Attempt {
        match self.outcome {
            Some(LoginOutcome::Success) => return Attempt::Authenticated,
            Some(LoginOutcome::Locked(_)) => return Attempt::LockedOut,
            Some(LoginOutcome::Abandoned) | None => {}
        }

        let candidate = candidate.trim();
        let matched = match self.phase {
            LoginPhase::Username => self.credential.matches_username(candidate),
            LoginPhase::Pin => self.credential.pin().matches(candidate),
        };

        match (matched, self.phase) {
            (true, LoginPhase::Username) => {
                log::trace!("[login] username accepted");
                self.phase = LoginPhase::Pin;
                self.attempts_remaining = self.max_attempts;
                Attempt::Advanced
            }
            (true, LoginPhase::Pin) => {
                self.outcome = Some(LoginOutcome::Success);
                Attempt::Authenticated
            }
            (false, phase) => {
                self.attempts_remaining -= 1;
                if self.attempts_remaining == 0 {
                    log::warn!("[login] {phase} attempts exhausted, locking out");
                    self.outcome = Some(LoginOutcome::Locked(phase));
                    Attempt::LockedOut
                } else {
                    log::warn!(
                        "[login] invalid {phase}, {} attempt(s) remaining",
                        self.attempts_remaining
                    );
                    Attempt::Rejected {
                        remaining: self.attempts_remaining,
                    }
                }
            }
        }
    }
}

/// Source of login candidates, and sink for rejection notices.
///
/// `read` returns `None` once the input is exhausted.
pub trait LoginPrompt {
    fn read(&mut self, phase: LoginPhase) -> io::Result<Option<String>>;

    fn rejected(&mut self, phase: LoginPhase, remaining: u8) -> io::Result<()>;
}

/// Drives a login sequence against a credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Authenticator {
    max_attempts: u8,
}

impl Default for Authenticator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

impl Authenticator {
    pub fn new(max_attempts: u8) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> u8 {
        self.max_attempts
    }

    /// Ask for the username, then the PIN, until success or lockout.
    pub fn attempt_login<P: LoginPrompt>(
        &self,
        credential: &Credential,
        prompt: &mut P,
    ) -> io::Result<LoginOutcome> {
        let mut session = AuthSession::new(credential, self.max_attempts);
        loop {
            let phase = session.phase();
            let Some(candidate) = prompt.read(phase)? else {
                log::warn!("[login] input closed during {phase} phase");
                return Ok(LoginOutcome::Abandoned);
            };

            match session.submit(&candidate) {
                Attempt::Advanced => {}
                Attempt::Authenticated => {
                    log::info!("[login] user {} signed in", credential.username());
                    return Ok(LoginOutcome::Success);
                }
                Attempt::Rejected { remaining } => prompt.rejected(phase, remaining)?,
                Attempt::LockedOut => return Ok(LoginOutcome::Locked(phase)),
            }
        }
    }
}
