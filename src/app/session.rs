// ==========================================
// Inventory Console - session state machine
// ==========================================
// Login state as an explicit, immutable value with pure transition
// functions, recomputed each interaction cycle instead of kept in
// mutable flags. States: LoggedOut -> LoginPrompt -> LoggedIn.
// ==========================================

/// The operator's session state for one interaction cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No admin privileges; read-only actions available.
    LoggedOut,
    /// The next input line is interpreted as the password.
    LoginPrompt,
    /// Admin privileges; mutating actions available.
    LoggedIn,
}

impl SessionState {
    /// Operator asked to log in.
    pub fn begin_login(self) -> SessionState {
        match self {
            SessionState::LoggedOut => SessionState::LoginPrompt,
            other => other,
        }
    }

    /// Operator submitted a password while at the prompt. A wrong
    /// secret drops straight back to LoggedOut.
    pub fn submit_password(self, accepted: bool) -> SessionState {
        match self {
            SessionState::LoginPrompt if accepted => SessionState::LoggedIn,
            SessionState::LoginPrompt => SessionState::LoggedOut,
            other => other,
        }
    }

    /// Operator logged out; a no-op when already logged out.
    pub fn logout(self) -> SessionState {
        SessionState::LoggedOut
    }

    /// Whether mutating actions are permitted in this state.
    pub fn is_admin(self) -> bool {
        self == SessionState::LoggedIn
    }
}
