//! # CLI Commands Module
//!
//! One module per subcommand.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── session.rs  ◄─── Replay a recorded sequence of form messages
//! ├── calc.rs     ◄─── One-shot calculation from flags
//! └── cases.rs    ◄─── Test-case documentation listing
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  tip-cli session demo.json                                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  load_script() ──► Vec<FormMessage>                                     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  replay() ──► TipForm::dispatch() per message ──► Vec<SessionStep>      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  JSON on stdout                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands return plain values; printing is left to `lib.rs`.

pub mod calc;
pub mod cases;
pub mod session;
