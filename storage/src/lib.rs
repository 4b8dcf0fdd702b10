//! Triplestore connectors, durable object storage and the offline
//! rebuilder for the resource index.

pub mod config;
pub mod local;
pub mod memory;
pub mod object_store;
pub mod rebuild;
pub mod serialize;

pub use config::{Backend, ConfigError, StoreConfig};
pub use local::{LocalStore, LocalStoreError};
pub use memory::MemoryStore;
pub use object_store::{ObjectStore, ObjectStoreError};
pub use rebuild::{
	AssumeYes, FailureRecord, Prompt, RebuildError, RebuildReport, Rebuilder, StdinPrompt,
};
