// ==========================================
// Inventory Console - application layer
// ==========================================
// Prompt loop, session state and shared application state.
// No business logic: the shell collects input, triggers one pipeline
// or repository call, renders the result, and waits for the next line.
// ==========================================

pub mod session;
pub mod shell;
pub mod state;

pub use session::SessionState;
pub use shell::Shell;
pub use state::AppState;
