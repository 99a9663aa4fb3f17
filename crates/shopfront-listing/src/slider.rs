//! Two-handle range slider arithmetic.
//!
//! Pointer positions arrive as a fraction of the track width; the slider
//! maps them onto its numeric range, snaps to the step, and keeps the two
//! handles at least one step apart.

use shopfront_catalog::search::PriceRange;
use shopfront_catalog::{Currency, Money};

use crate::error::ListingError;

/// Which handle is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderHandle {
    Low,
    High,
}

/// A bounded `[low, high]` selection inside `[min, max]`.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSlider {
    min: i64,
    max: i64,
    step: i64,
    low: i64,
    high: i64,
    dragging: Option<SliderHandle>,
}

impl RangeSlider {
    /// Create a slider spanning its full range.
    pub fn new(min: i64, max: i64, step: i64) -> Result<Self, ListingError> {
        if step <= 0 || max - min < step {
            return Err(ListingError::InvalidSlider { min, max, step });
        }
        Ok(Self {
            min,
            max,
            step,
            low: min,
            high: max,
            dragging: None,
        })
    }

    /// The storefront's price slider: whole currency units 0 to 1000, step 10.
    pub fn price() -> Self {
        Self {
            min: 0,
            max: 1000,
            step: 10,
            low: 0,
            high: 1000,
            dragging: None,
        }
    }

    pub fn value(&self) -> (i64, i64) {
        (self.low, self.high)
    }

    pub fn bounds(&self) -> (i64, i64) {
        (self.min, self.max)
    }

    /// Position of `value` along the track, in percent.
    pub fn percentage(&self, value: i64) -> f64 {
        (value - self.min) as f64 / (self.max - self.min) as f64 * 100.0
    }

    /// Start dragging a handle.
    pub fn press(&mut self, handle: SliderHandle) {
        self.dragging = Some(handle);
    }

    /// Stop dragging.
    pub fn release(&mut self) {
        self.dragging = None;
    }

    pub fn dragging(&self) -> Option<SliderHandle> {
        self.dragging
    }

    /// Move the pressed handle to `fraction` of the track width.
    ///
    /// Returns the new value when a handle is pressed, `None` otherwise.
    pub fn drag_to(&mut self, fraction: f64) -> Option<(i64, i64)> {
        let handle = self.dragging?;
        if !fraction.is_finite() {
            return None;
        }
        let fraction = fraction.clamp(0.0, 1.0);
        let raw = self.min as f64 + fraction * (self.max - self.min) as f64;
        let snapped = self.snap(raw);
        match handle {
            SliderHandle::Low => {
                self.low = snapped.min(self.high - self.step).max(self.min);
            }
            SliderHandle::High => {
                self.high = snapped.max(self.low + self.step).min(self.max);
            }
        }
        Some(self.value())
    }

    /// Set both handles directly, clamped into range and kept a step apart.
    pub fn set_value(&mut self, low: i64, high: i64) {
        let high = high.clamp(self.min + self.step, self.max);
        let low = low.clamp(self.min, high - self.step);
        self.low = low;
        self.high = high;
    }

    /// Back to the full range.
    pub fn reset(&mut self) {
        self.low = self.min;
        self.high = self.max;
        self.dragging = None;
    }

    /// The selection as a price filter in whole currency units.
    ///
    /// A handle resting at its end of the track leaves that side open, so
    /// the full range filters nothing.
    pub fn as_price_range(&self, currency: Currency) -> Option<PriceRange> {
        let bound = |units: i64| Money::from_decimal(units as f64, currency);
        let min = (self.low > self.min).then(|| bound(self.low));
        let max = (self.high < self.max).then(|| bound(self.high));
        if min.is_none() && max.is_none() {
            return None;
        }
        Some(PriceRange { min, max })
    }

    fn snap(&self, raw: f64) -> i64 {
        let steps = ((raw - self.min as f64) / self.step as f64).round() as i64;
        self.min + steps * self.step
    }
}

impl Default for RangeSlider {
    fn default() -> Self {
        Self::price()
    }
}
