//! Camera acquisition and snapshot lifecycle.
//!
//! State transitions:
//! ```text
//! idle → requesting → streaming(not ready) → streaming(ready) → captured
//!            ↓  ↑ rear→front once                 ↓ cancel
//!          error                                 idle
//! idle | error ──file selected──→ captured ──clear──→ idle
//! ```

pub mod controller;
pub mod entities;
pub mod errors;
pub mod ports;
pub mod state;

pub use controller::CaptureController;
pub use entities::*;
pub use errors::{AcquisitionFailure, CaptureError};
pub use ports::{MediaDevices, PreviewStore};
pub use state::{CaptureEvent, CaptureState, Fallback, Readiness};
