// src/runtime.rs
//
// Process-wide backend library state. Each backend type's library is loaded
// at most once per process, before the first bridge over that type is
// constructed. Nothing needs tearing down on a normal exit.

use log::info;
use once_cell::sync::Lazy;
use std::any::{type_name, TypeId};
use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use crate::backend::Backend;
use crate::error::BridgeError;

static LOADED_LIBRARIES: Lazy<Mutex<HashSet<TypeId>>> = Lazy::new(|| Mutex::new(HashSet::new()));

/// Runs `B::load_library` unless it already succeeded in this process.
///
/// A failed load leaves the library unloaded, so the next bridge construction
/// over `B` makes a fresh attempt.
pub fn ensure_backend_library<B>() -> Result<(), BridgeError>
where
    B: Backend + 'static,
{
    let mut loaded = LOADED_LIBRARIES
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    if loaded.contains(&TypeId::of::<B>()) {
        return Ok(());
    }

    B::load_library().map_err(BridgeError::LibraryLoad)?;
    loaded.insert(TypeId::of::<B>());
    info!("runtime: backend library loaded for {}", type_name::<B>());
    Ok(())
}

/// Whether `B::load_library` has succeeded in this process.
pub fn backend_library_loaded<B>() -> bool
where
    B: Backend + 'static,
{
    LOADED_LIBRARIES
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .contains(&TypeId::of::<B>())
}
