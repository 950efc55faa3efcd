//=========================================================================
// Test Support
//=========================================================================
//
// In-process engine double backed by `HeapMemory`.
//
//=========================================================================

use std::cell::Cell;

use super::{EngineBoundary, FramebufferHandle};
use crate::core::input::{EngineButton, EngineButtons, EngineEvent, EngineKey};
use crate::core::memory::{HeapMemory, LinearMemory};

/// Records every call made through the boundary.
#[derive(Debug)]
pub(crate) struct FakeEngine {
    pub memory: HeapMemory,
    pub handle: FramebufferHandle,
    pub width: u32,
    pub height: u32,
    pub events: Vec<EngineEvent>,
    pub shutdowns: usize,
    pub steps: usize,
    accessor_reads: Cell<usize>,
}

impl FakeEngine {
    /// Engine that has not created its framebuffer yet.
    pub fn not_started() -> Self {
        Self {
            memory: HeapMemory::new(64),
            handle: FramebufferHandle::NULL,
            width: 0,
            height: 0,
            events: Vec::new(),
            shutdowns: 0,
            steps: 0,
            accessor_reads: Cell::new(0),
        }
    }

    /// Engine with a framebuffer holding `pixels` (row-major).
    pub fn with_framebuffer(width: u32, height: u32, pixels: &[u32]) -> Self {
        let mut engine = Self::not_started();
        engine.start(width, height, pixels);
        engine
    }

    /// Allocates a framebuffer and publishes it.
    pub fn start(&mut self, width: u32, height: u32, pixels: &[u32]) {
        let len = (width * height) as usize;
        let offset = self.memory.alloc_words(len).expect("framebuffer fits");
        let words = self.memory.words_mut(offset, len).expect("fresh allocation");
        words[..pixels.len()].copy_from_slice(pixels);

        self.handle = FramebufferHandle::new(offset);
        self.width = width;
        self.height = height;
    }

    /// Overwrites the current framebuffer contents.
    pub fn paint(&mut self, pixels: &[u32]) {
        let len = (self.width * self.height) as usize;
        let words = self
            .memory
            .words_mut(self.handle.byte_offset(), len)
            .expect("framebuffer in range");
        words.copy_from_slice(pixels);
    }

    /// Relocates linear memory without moving the framebuffer offset.
    pub fn relocate(&mut self) {
        self.memory.grow(64).expect("small growth");
    }

    /// How many times `framebuffer()` has been called.
    pub fn accessor_reads(&self) -> usize {
        self.accessor_reads.get()
    }
}

impl EngineBoundary for FakeEngine {
    fn framebuffer(&self) -> FramebufferHandle {
        self.accessor_reads.set(self.accessor_reads.get() + 1);
        self.handle
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn memory(&self) -> &dyn LinearMemory {
        &self.memory
    }

    fn mouse_motion(&mut self, x: i32, y: i32, buttons: EngineButtons) {
        self.events.push(EngineEvent::Motion { x, y, buttons });
    }

    fn mouse_button(&mut self, x: i32, y: i32, button: EngineButton, pressed: bool) {
        self.events.push(EngineEvent::Button { x, y, button, pressed });
    }

    fn key(&mut self, key: EngineKey, pressed: bool) {
        self.events.push(EngineEvent::Key { key, pressed });
    }

    fn step(&mut self) -> bool {
        self.steps += 1;
        self.shutdowns == 0
    }

    fn shutdown(&mut self) {
        self.shutdowns += 1;
    }
}
