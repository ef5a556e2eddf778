//! WebAssembly bindings for the emulator.
//!
//! This module provides a JavaScript-callable wrapper around the CPU so a
//! browser-side debugger can step code and peek/poke machine state.

pub mod api;

pub use api::Emulator6502;
