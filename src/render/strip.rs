//! LED strip device abstraction
//!
//! Writes land in a pending framebuffer and only reach the device on
//! [`LedStrip::show`], like a WS2812 or LPD8806 chain.

use crate::core::error::Result;
use crate::render::colors::{Rgb, OFF};

/// An ordered, fixed-length line of addressable RGB cells
pub trait LedStrip {
    /// Number of cells
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Queue a color for one cell. Out-of-range indices are ignored.
    fn set(&mut self, index: usize, color: Rgb);

    /// Push every queued write to the device
    fn show(&mut self) -> Result<()>;
}

impl<T: LedStrip + ?Sized> LedStrip for &mut T {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn set(&mut self, index: usize, color: Rgb) {
        (**self).set(index, color)
    }

    fn show(&mut self) -> Result<()> {
        (**self).show()
    }
}

/// In-memory strip used by the headless simulator and tests
///
/// Tracks what has been shown, which cells were ever written, and how many
/// writes fell outside the strip.
#[derive(Debug, Clone)]
pub struct MemoryStrip {
    pending: Vec<Rgb>,
    shown: Vec<Rgb>,
    touched: Vec<bool>,
    rejected_writes: usize,
    show_count: usize,
    frames: Option<Vec<Vec<Rgb>>>,
}

impl MemoryStrip {
    pub fn new(len: usize) -> Self {
        Self {
            pending: vec![OFF; len],
            shown: vec![OFF; len],
            touched: vec![false; len],
            rejected_writes: 0,
            show_count: 0,
            frames: None,
        }
    }

    /// Also keep a copy of every shown frame
    pub fn with_frame_log(mut self) -> Self {
        self.frames = Some(Vec::new());
        self
    }

    /// Cells as last pushed to the "device"
    pub fn shown(&self) -> &[Rgb] {
        &self.shown
    }

    /// Cells including writes not yet shown
    pub fn pending(&self) -> &[Rgb] {
        &self.pending
    }

    pub fn show_count(&self) -> usize {
        self.show_count
    }

    pub fn rejected_writes(&self) -> usize {
        self.rejected_writes
    }

    /// Indices written at least once since creation
    pub fn touched(&self) -> Vec<usize> {
        self.touched
            .iter()
            .enumerate()
            .filter_map(|(i, &t)| t.then_some(i))
            .collect()
    }

    /// Shown frames, oldest first, if the frame log is enabled
    pub fn frames(&self) -> &[Vec<Rgb>] {
        self.frames.as_deref().unwrap_or(&[])
    }

    /// True when every shown cell is black
    pub fn is_dark(&self) -> bool {
        self.shown.iter().all(|&c| c == OFF)
    }

}

impl LedStrip for MemoryStrip {
    fn len(&self) -> usize {
        self.pending.len()
    }

    fn set(&mut self, index: usize, color: Rgb) {
        match self.pending.get_mut(index) {
            Some(cell) => {
                *cell = color;
                self.touched[index] = true;
            }
            None => self.rejected_writes += 1,
        }
    }

    fn show(&mut self) -> Result<()> {
        self.shown.copy_from_slice(&self.pending);
        self.show_count += 1;
        if let Some(frames) = self.frames.as_mut() {
            frames.push(self.shown.clone());
        }
        Ok(())
    }
}
