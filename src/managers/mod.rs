// EmuBrowser state managers
// The tab registry is the sole mutable shared structure of the engine.

pub mod tab_registry;
