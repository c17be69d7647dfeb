//! Navigation on version selection
//!
//! ```text
//! ┌─────────────┐  target   ┌─────────────┐
//! │   Handler   │──────────▶│    Probe    │
//! │ (on change) │◀──────────│  (exists?)  │
//! └─────────────┘  yes/no   └─────────────┘
//!        │                         │
//!        ▼                         ▼
//!   Redirect to page        ┌─────────────┐
//!   or version index        │   Probes    │
//!                           │ (http, fs)  │
//!                           └─────────────┘
//! ```
//!
//! - [`handler`]: Computes where a selection navigates to
//! - [`probe`]: Existence probe trait
//! - [`probes`]: HTTP and filesystem probe implementations
//! - [`error`]: Probe error type

pub mod error;
pub mod handler;
pub mod probe;
pub mod probes;

pub use handler::{HandlerState, Navigation, NavigationHandler};
pub use probe::ExistenceProbe;
