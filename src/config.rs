//! Configuration for bankstore
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a record store instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Flat file holding back-to-back account records.
    /// Created on first append if absent.
    pub store_path: PathBuf,

    /// Sync strategy: whether to fsync after each write
    pub sync_strategy: SyncStrategy,

    // -------------------------------------------------------------------------
    // Record Policy
    // -------------------------------------------------------------------------
    /// What append does when the account number is already stored
    pub duplicate_policy: DuplicatePolicy,
}

/// Store sync strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStrategy {
    /// fsync after every append or update (safest, slowest)
    EveryWrite,

    /// Leave flushing to the OS when the handle is closed
    OsManaged,
}

/// Handling of repeated account numbers on append
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Accept the record; lookups return every copy, updates touch the first
    Allow,

    /// Refuse the append with `DuplicateAccountNumber`
    Reject,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("accounts.dat"),
            sync_strategy: SyncStrategy::OsManaged,
            duplicate_policy: DuplicatePolicy::Allow,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the store file path
    pub fn store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.store_path = path.into();
        self
    }

    /// Set the sync strategy
    pub fn sync_strategy(mut self, strategy: SyncStrategy) -> Self {
        self.config.sync_strategy = strategy;
        self
    }

    /// Set the duplicate account number policy
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.config.duplicate_policy = policy;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
