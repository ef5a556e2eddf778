//! WASM API for the 6502 emulator.
//!
//! Provides JavaScript-callable interfaces for CPU control, register and flag
//! access, and memory inspection.

use crate::{FlagName, FlatMemory, MemoryBus, RegisterName, CPU};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<crate::ParseNameError> for JsError {
    fn from(err: crate::ParseNameError) -> Self {
        JsError::new(&err.to_string())
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator6502 {
    cpu: CPU<FlatMemory>,
    on_step: Option<js_sys::Function>,
    program_start: u16,
    program_end: u16,
}

impl Default for Emulator6502 {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Emulator6502 {
    /// Create a new emulator in the power-on state with zeroed memory
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Emulator6502 {
            cpu: CPU::new(FlatMemory::new()),
            on_step: None,
            program_start: 0x0000,
            program_end: 0x0000,
        }
    }

    /// Execute a single instruction
    pub fn step(&mut self) {
        self.cpu.step();
        self.notify_step();
    }

    /// Execute `count` instructions
    pub fn run(&mut self, count: u32) {
        for _ in 0..count {
            self.step();
        }
    }

    /// Register a callback invoked with the new PC after every instruction
    pub fn set_on_step(&mut self, callback: js_sys::Function) {
        self.on_step = Some(callback);
    }

    /// Remove the step callback
    pub fn clear_on_step(&mut self) {
        self.on_step = None;
    }

    /// Rebuild the machine from scratch, memory included
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.program_start = 0x0000;
        self.program_end = 0x0000;
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    /// Set the packed status byte
    pub fn set_status(&mut self, value: u8) {
        self.cpu.set_status(value);
    }

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    /// Read a register by name ("a", "x", "y", "sp", "pc")
    pub fn get_register(&self, name: &str) -> Result<u16, JsError> {
        let register: RegisterName = name.parse()?;
        Ok(self.cpu.register(register))
    }

    /// Write a register by name; the value wraps to the register width
    pub fn set_register(&mut self, name: &str, value: u16) -> Result<(), JsError> {
        let register: RegisterName = name.parse()?;
        self.cpu.set_register(register, value);
        Ok(())
    }

    /// Read a flag by letter ("n", "v", "b", "d", "i", "z", "c")
    pub fn get_flag(&self, name: &str) -> Result<bool, JsError> {
        let flag: FlagName = name.parse()?;
        Ok(self.cpu.flag(flag))
    }

    /// Write a flag by letter
    pub fn set_flag(&mut self, name: &str, value: bool) -> Result<(), JsError> {
        let flag: FlagName = name.parse()?;
        self.cpu.set_flag(flag, value);
        Ok(())
    }

    // Memory access methods

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.read_memory(addr)
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.write_memory(addr, value);
    }

    /// Read a 256-byte page from memory (for efficient display)
    pub fn get_memory_page(&self, page: u8) -> Vec<u8> {
        let start = (page as u16) << 8;
        (0..256).map(|i| self.cpu.read_memory(start + i)).collect()
    }

    /// Load a program into memory and set PC
    pub fn load_program(&mut self, program: &[u8], start_addr: u16) {
        self.cpu.memory_mut().load(start_addr, program);
        self.cpu.set_pc(start_addr);
        self.program_start = start_addr;
        self.program_end = start_addr.wrapping_add(program.len() as u16);
    }

    /// Get the program start address
    #[wasm_bindgen(getter)]
    pub fn program_start(&self) -> u16 {
        self.program_start
    }

    /// Get the program end address
    #[wasm_bindgen(getter)]
    pub fn program_end(&self) -> u16 {
        self.program_end
    }
}

impl Emulator6502 {
    fn notify_step(&self) {
        if let Some(callback) = &self.on_step {
            let _ = callback.call1(&JsValue::NULL, &JsValue::from(self.cpu.pc()));
        }
    }
}
