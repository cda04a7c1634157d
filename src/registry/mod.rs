//! # Registry Infrastructure
//!
//! Explicit name-keyed tables that replace the Rails engine's runtime
//! metaprogramming on the Rust side.
//!
//! ## Overview
//!
//! Where the Rails engine constantizes strings and defines singleton methods
//! on live controller classes, this core keeps two explicit registries:
//!
//! - **EntityRegistry**: name -> entity-type reference, populated at
//!   startup. Lookup is total; unknown names resolve to nothing.
//! - **MinionRegistry**: target name -> installed minion descriptor. The
//!   dispatch layer queries it at invocation time to find the resolved
//!   configuration attached to a controller.
//!
//! ## Architecture
//!
//! ```text
//! Registry Infrastructure
//! ├── EntityRegistry       (name -> EntityRef, startup population)
//! └── MinionRegistry       (target -> InstalledMinion, dispatch reads)
//! ```

pub mod entity_registry;
pub mod minion_registry;

pub use entity_registry::{EntityKind, EntityRef, EntityRegistry, EntityType};
pub use minion_registry::{
    InstalledMinion, InstrumentationInstaller, MinionRegistry, MinionStats,
};
