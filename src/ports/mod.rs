//! Ports - Interfaces between the widget core and its host.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Host Capability Ports
//!
//! - `Resettable` - Return all inputs to their minimum
//! - `StatefulWidget` - Render, save/restore state, report whether answered
//!
//! ## Service Ports
//!
//! - `IdGenerator` - Unique element ids for accessibility labelling

mod id_generator;
mod widget;

pub use id_generator::IdGenerator;
pub use widget::{Resettable, StatefulWidget};
