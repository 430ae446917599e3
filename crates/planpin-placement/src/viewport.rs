//! Viewport and coordinate transformation for the floor-plan surface.
//!
//! Handles conversion between pixel coordinates (screen space) and normalized
//! document coordinates. Manages zoom and pan with the document centred in its
//! container at every scale.
//!
//! ```text
//! center_offset_x = (container_w - doc_w * scale) / 2
//! screen_x        = center_offset_x + pan_x + norm_x * doc_w * scale
//! norm_x          = (screen_x - center_offset_x - pan_x) / scale / doc_w
//! ```
//!
//! Y is symmetric. Both axes grow right/down in both spaces, so there is no flip.

use std::fmt;

use planpin_core::{NormPoint, PlacementError, Result, ScreenPoint, Size};
use planpin_settings::ViewportSettings;

/// Represents the viewport transformation state (scale and pan).
#[derive(Debug, Clone)]
pub struct Viewport {
    scale: f64,
    pan_x: f64,
    pan_y: f64,
    document: Option<Size>,
    container: Size,
    min_scale: f64,
    max_scale: f64,
    fit_margin: f64,
    zoom_step: f64,
}

impl Viewport {
    /// Creates a viewport with no document and an unknown container.
    pub fn new(settings: &ViewportSettings) -> Self {
        Self {
            scale: 1.0_f64.max(settings.min_scale).min(settings.max_scale),
            pan_x: 0.0,
            pan_y: 0.0,
            document: None,
            container: Size::default(),
            min_scale: settings.min_scale,
            max_scale: settings.max_scale,
            fit_margin: settings.fit_margin,
            zoom_step: settings.zoom_step,
        }
    }

    /// Creates a viewport for a container of known size.
    pub fn with_container(container: Size, settings: &ViewportSettings) -> Self {
        let mut viewport = Self::new(settings);
        viewport.container = container;
        viewport
    }

    /// Gets the current scale (1.0 = native document pixels).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Gets the pan offset (X coordinate).
    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    /// Gets the pan offset (Y coordinate).
    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    pub fn pan(&self) -> ScreenPoint {
        ScreenPoint::new(self.pan_x, self.pan_y)
    }

    pub fn document_size(&self) -> Option<Size> {
        self.document
    }

    pub fn container_size(&self) -> Size {
        self.container
    }

    pub fn has_document(&self) -> bool {
        self.document.is_some()
    }

    /// Records the native size of the loaded floor plan and fits it to the container.
    ///
    /// Unusable sizes (zero, negative, non-finite) are ignored.
    pub fn set_document_size(&mut self, size: Size) {
        if !size.is_usable() {
            tracing::debug!(%size, "ignoring unusable document size");
            return;
        }
        self.document = Some(size);
        self.reset();
    }

    /// Forgets the current document; transforms become no-ops until a new one is set.
    pub fn clear_document(&mut self) {
        self.document = None;
    }

    /// Sets the container dimensions (typically called when the surface resizes).
    pub fn set_container_size(&mut self, size: Size) {
        if !size.is_usable() {
            tracing::debug!(%size, "ignoring unusable container size");
            return;
        }
        self.container = size;
    }

    // max/min rather than clamp: unvalidated bounds must not panic.
    // A fitted scale below min_scale is its own floor, so zooming out from it
    // never zooms in.
    fn clamp_scale(&self, scale: f64) -> f64 {
        scale.max(self.scale.min(self.min_scale)).min(self.max_scale)
    }

    /// Sets the scale, clamped to the configured bounds.
    ///
    /// With an anchor, the document point under the anchor stays at the same
    /// screen position. Returns the resulting scale. Requests with a non-finite
    /// scale or anchor are ignored.
    pub fn set_scale(&mut self, scale: f64, anchor: Option<ScreenPoint>) -> f64 {
        if !scale.is_finite() || anchor.is_some_and(|a| !a.is_finite()) {
            tracing::debug!(scale, ?anchor, "ignoring non-finite scale request");
            return self.scale;
        }

        let new_scale = self.clamp_scale(scale);
        match (anchor, self.document) {
            (Some(anchor), Some(doc)) => {
                // Document pixel under the anchor, then solve pan so it stays put.
                let old_offset = self.center_offset_for(doc, self.scale);
                let doc_x = (anchor.x - old_offset.x - self.pan_x) / self.scale;
                let doc_y = (anchor.y - old_offset.y - self.pan_y) / self.scale;

                let new_offset = self.center_offset_for(doc, new_scale);
                self.pan_x = anchor.x - new_offset.x - doc_x * new_scale;
                self.pan_y = anchor.y - new_offset.y - doc_y * new_scale;
            }
            (Some(_), None) => {
                tracing::trace!("anchored zoom without a document, anchor ignored");
            }
            _ => {}
        }
        self.scale = new_scale;
        self.scale
    }

    /// Multiplies the current scale by `factor`, optionally about an anchor.
    pub fn zoom_by(&mut self, factor: f64, anchor: Option<ScreenPoint>) -> f64 {
        self.set_scale(self.scale * factor, anchor)
    }

    /// Zooms in one step about the container centre.
    pub fn zoom_in(&mut self) -> f64 {
        self.zoom_by(self.zoom_step, Some(self.container_center()))
    }

    /// Zooms out one step about the container centre.
    pub fn zoom_out(&mut self) -> f64 {
        self.zoom_by(1.0 / self.zoom_step, Some(self.container_center()))
    }

    /// Zooms by `notches` wheel steps about `anchor`. Negative notches zoom in.
    pub fn zoom_wheel(&mut self, notches: f64, anchor: ScreenPoint) -> f64 {
        self.zoom_by(self.zoom_step.powf(-notches), Some(anchor))
    }

    /// Pans by a pixel delta. Unbounded: content may be pushed fully off screen.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        if !(dx.is_finite() && dy.is_finite()) {
            return;
        }
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Sets the pan offset. Non-finite offsets are ignored.
    pub fn set_pan(&mut self, x: f64, y: f64) {
        if !(x.is_finite() && y.is_finite()) {
            return;
        }
        self.pan_x = x;
        self.pan_y = y;
    }

    /// Scale at which the whole document fits the container with the fit margin.
    pub fn fit_scale(&self) -> Option<f64> {
        let doc = self.document?;
        if !self.container.is_usable() {
            return None;
        }
        let fit = (self.container.width / doc.width).min(self.container.height / doc.height)
            * self.fit_margin;
        Some(fit)
    }

    /// Fits the document to the container and clears the pan.
    ///
    /// The fit scale is only capped by `max_scale`: a document much larger than
    /// its container must still be viewable whole, even below `min_scale`.
    pub fn reset(&mut self) {
        if self.document.is_none() {
            tracing::debug!(error = %PlacementError::NoActiveDocument, "reset skipped");
            return;
        }
        let fit = self.fit_scale().unwrap_or_else(|| self.clamp_scale(1.0));
        self.scale = fit.min(self.max_scale);
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }

    fn container_center(&self) -> ScreenPoint {
        ScreenPoint::new(self.container.width / 2.0, self.container.height / 2.0)
    }

    fn center_offset_for(&self, doc: Size, scale: f64) -> ScreenPoint {
        ScreenPoint::new(
            (self.container.width - doc.width * scale) / 2.0,
            (self.container.height - doc.height * scale) / 2.0,
        )
    }

    /// Converts a screen point to normalized document coordinates.
    ///
    /// The result is not clamped: points off the document map outside `[0,1]`.
    pub fn screen_to_document(&self, screen: ScreenPoint) -> Result<NormPoint> {
        let doc = self.document.ok_or(PlacementError::NoActiveDocument)?;
        let offset = self.center_offset_for(doc, self.scale);
        let doc_x = (screen.x - offset.x - self.pan_x) / self.scale;
        let doc_y = (screen.y - offset.y - self.pan_y) / self.scale;
        Ok(NormPoint::new(doc_x / doc.width, doc_y / doc.height))
    }

    /// Converts normalized document coordinates to a screen point.
    ///
    /// Exact inverse of [`Viewport::screen_to_document`].
    pub fn document_to_screen(&self, norm: NormPoint) -> Result<ScreenPoint> {
        let doc = self.document.ok_or(PlacementError::NoActiveDocument)?;
        let offset = self.center_offset_for(doc, self.scale);
        Ok(ScreenPoint::new(
            offset.x + self.pan_x + norm.x * doc.width * self.scale,
            offset.y + self.pan_y + norm.y * doc.height * self.scale,
        ))
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scale: {:.2}x | Pan: ({:.1}, {:.1})",
            self.scale, self.pan_x, self.pan_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(&ViewportSettings::default())
    }
}
