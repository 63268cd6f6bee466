//! The interactive picker: drag state machine, redraws and sampling.
//!
//! All mutable interaction state lives in [`PickerState`]. The event handlers
//! run the whole classify → clamp → update → redraw → sample → notify cycle
//! synchronously before returning.

use tiny_skia::Pixmap;

use crate::color::SolidColor;
use crate::config::{self, PickerConfig};
use crate::constants;
use crate::error::PickerError;
use crate::hit::{self, TriangleHit};
use crate::mapping::{self, TrianglePoint};
use crate::math;
use crate::measure::{Measurements, Point};
use crate::raster;
use crate::render;

/// Which region the active drag is manipulating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragMode {
    #[default]
    None,
    Hue,
    Triangle,
}

/// On-screen rectangle of the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenRect {
    pub left: f64,
    pub top: f64,
}

/// A pointer event in client (screen) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub client_x: f64,
    pub client_y: f64,
    pub bounds: ScreenRect,
}

impl PointerEvent {
    pub fn new(client_x: f64, client_y: f64, bounds: ScreenRect) -> Self {
        Self {
            client_x,
            client_y,
            bounds,
        }
    }

    /// An event whose coordinates are already relative to the surface.
    pub fn local(x: f64, y: f64) -> Self {
        Self::new(x, y, ScreenRect::default())
    }

    fn surface_position(&self) -> Point {
        Point::new(self.client_x - self.bounds.left, self.client_y - self.bounds.top)
    }
}

/// Everything a pointer interaction can change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerState {
    /// Degrees in [0, 360).
    pub hue: f64,
    pub point: TrianglePoint,
    pub drag: DragMode,
    /// Last pointer position in surface pixels, after clamping.
    pub pointer: Point,
}

impl Default for PickerState {
    fn default() -> Self {
        let (x, y) = constants::INITIAL_POINT;
        Self {
            hue: 0.0,
            point: TrianglePoint::new(x, y),
            drag: DragMode::None,
            pointer: Point::default(),
        }
    }
}

/// Layers touched by a state update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Redraw {
    Nothing,
    Triangle,
    Indicators,
}

/// Pick the drag mode for a pointer-down at `p`.
pub fn drag_mode_at(p: Point, m: &Measurements) -> DragMode {
    if hit::in_ring(p, m) {
        DragMode::Hue
    } else if hit::classify(p, m).is_inside() {
        DragMode::Triangle
    } else {
        DragMode::None
    }
}

/// Hue for a pointer position: its angle around the surface centre.
pub fn hue_at(p: Point, m: &Measurements) -> f64 {
    let c = m.center();
    math::normalize_hue((p.y - c.y).atan2(p.x - c.x).to_degrees())
}

/// Apply the current pointer position to `state` according to its drag mode.
fn apply_drag(state: &mut PickerState, m: &Measurements) -> Redraw {
    match state.drag {
        DragMode::None => Redraw::Nothing,
        DragMode::Hue => {
            state.hue = hue_at(state.pointer, m);
            Redraw::Triangle
        }
        DragMode::Triangle => {
            if hit::classify(state.pointer, m) != TriangleHit::Inside {
                state.pointer = hit::clamp_to_triangle(state.pointer, m);
            }
            state.point = mapping::pixel_to_point(state.pointer, m);
            Redraw::Indicators
        }
    }
}

/// A hue ring and saturation/value triangle colour picker.
pub struct ColourPicker {
    config: PickerConfig,
    state: PickerState,
    selected: SolidColor,
    surface: Pixmap,
    indicators: Pixmap,
    revision: u64,
    on_update: Option<Box<dyn FnMut(SolidColor)>>,
}

impl std::fmt::Debug for ColourPicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColourPicker")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("selected", &self.selected)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

impl ColourPicker {
    /// Creates a picker and paints it. `on_update` receives the selected
    /// colour after every update.
    ///
    /// Fails only if the surfaces cannot be allocated.
    pub fn new(
        config: PickerConfig,
        on_update: impl FnMut(SolidColor) + 'static,
    ) -> Result<Self, PickerError> {
        let mut picker = Self::headless(config)?;
        picker.on_update = Some(Box::new(on_update));
        Ok(picker)
    }

    /// Creates a picker without an observer.
    pub fn headless(config: PickerConfig) -> Result<Self, PickerError> {
        let mut picker = Self {
            config,
            state: PickerState::default(),
            selected: SolidColor::default(),
            surface: raster::surface(config.width, config.height)?,
            indicators: raster::surface(config.width, config.height)?,
            revision: 0,
            on_update: None,
        };
        picker.draw()?;
        Ok(picker)
    }

    /// Geometry for the current surface size.
    pub fn measurements(&self) -> Measurements {
        Measurements::for_surface(self.config.width, self.config.height, self.config.margin)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    pub fn state(&self) -> &PickerState {
        &self.state
    }

    pub fn hue(&self) -> f64 {
        self.state.hue
    }

    pub fn point(&self) -> TrianglePoint {
        self.state.point
    }

    pub fn drag_mode(&self) -> DragMode {
        self.state.drag
    }

    /// Rendered ring and triangle.
    pub fn surface(&self) -> &Pixmap {
        &self.surface
    }

    /// Transparent overlay with the hue tick and triangle marker.
    pub fn indicators(&self) -> &Pixmap {
        &self.indicators
    }

    /// Increases whenever either layer is repainted.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The colour currently rendered under the triangle marker.
    ///
    /// Falls back to the last reported colour if the marker is off the
    /// surface.
    pub fn color(&self) -> SolidColor {
        let m = self.measurements();
        let pixel = mapping::point_to_pixel(self.state.point, &m);
        match mapping::sample_color(pixel, &self.surface) {
            Ok(color) => color,
            Err(err) => {
                log::warn!("Keeping previous colour: {}", err);
                self.selected
            }
        }
    }

    /// Moves the selection to `color`, repaints and notifies.
    ///
    /// The marker is placed on the pixel painted closest to `color`, so
    /// [`Self::color`] afterwards matches it within
    /// [`constants::SET_COLOR_TOLERANCE`] per colour channel. The sampled
    /// colour is always opaque.
    pub fn set_color(&mut self, color: SolidColor) {
        let hsv = color.to_hsv();
        self.state.hue = math::normalize_hue(hsv.h);
        let m = self.measurements();
        self.state.point = mapping::hsv_to_rendered_point(hsv, &m);
        log::debug!(
            "Colour set to #{} (hue {:.1}, point {:.3},{:.3})",
            color.to_hex(),
            self.state.hue,
            self.state.point.x,
            self.state.point.y
        );
        if let Err(err) = self.draw() {
            log::error!("Failed to repaint picker: {}", err);
        }
        self.update();
    }

    /// Changes the surface size (same defaulting as construction) and repaints.
    ///
    /// On failure the picker keeps its previous size and surfaces.
    pub fn resize(&mut self, width: Option<f64>, height: Option<f64>) -> Result<(), PickerError> {
        let (width, height) = config::resolve_dimensions(width, height);
        if (width, height) == self.dimensions() {
            return Ok(());
        }
        log::debug!("Resizing picker to {}x{}", width, height);
        let surface = raster::surface(width, height)?;
        let indicators = raster::surface(width, height)?;
        self.config.width = width;
        self.config.height = height;
        self.surface = surface;
        self.indicators = indicators;
        self.draw()
    }

    pub fn pointer_down(&mut self, event: PointerEvent) {
        self.state.pointer = event.surface_position();
        let m = self.measurements();
        self.state.drag = drag_mode_at(self.state.pointer, &m);
        log::debug!(
            "Pointer down at ({:.1}, {:.1}): {:?}",
            self.state.pointer.x,
            self.state.pointer.y,
            self.state.drag
        );
        if self.state.drag != DragMode::None {
            self.update();
        }
    }

    pub fn pointer_move(&mut self, event: PointerEvent) {
        self.state.pointer = event.surface_position();
        if self.state.drag != DragMode::None {
            self.update();
        }
    }

    pub fn pointer_up(&mut self, event: PointerEvent) {
        self.state.pointer = event.surface_position();
        if self.state.drag != DragMode::None {
            self.update();
            log::debug!("Drag ended: {:?}", self.state.drag);
        }
        self.state.drag = DragMode::None;
    }

    fn update(&mut self) {
        let m = self.measurements();
        match apply_drag(&mut self.state, &m) {
            Redraw::Nothing => {}
            Redraw::Triangle => {
                render::draw_triangle(&mut self.surface, &m, self.state.hue, self.config.background);
                self.redraw_indicators(&m);
            }
            Redraw::Indicators => self.redraw_indicators(&m),
        }
        log::trace!(
            "hue {:.2}, point ({:.4}, {:.4})",
            self.state.hue,
            self.state.point.x,
            self.state.point.y
        );

        self.selected = self.color();
        if let Some(cb) = self.on_update.as_mut() {
            cb(self.selected);
        }
    }

    fn draw(&mut self) -> Result<(), PickerError> {
        let m = self.measurements();
        let painted = render::draw_all(&mut self.surface, &m, self.state.hue, self.config.background);
        self.redraw_indicators(&m);
        painted
    }

    fn redraw_indicators(&mut self, m: &Measurements) {
        render::draw_indicators(&mut self.indicators, m, self.state.hue, self.state.point);
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m128() -> Measurements {
        Measurements::for_surface(128, 128, constants::TRIANGLE_MARGIN)
    }

    #[test]
    fn hue_is_the_angle_around_the_centre() {
        let m = m128();
        assert!((hue_at(Point::new(100.0, 64.0), &m) - 0.0).abs() < 1e-9);
        assert!((hue_at(Point::new(64.0, 100.0), &m) - 90.0).abs() < 1e-9);
        assert!((hue_at(Point::new(30.0, 64.0), &m) - 180.0).abs() < 1e-9);
        assert!((hue_at(Point::new(64.0, 20.0), &m) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn hue_stays_in_range_all_around() {
        let m = m128();
        for step in 0..720 {
            let a = (step as f64 * 0.5).to_radians();
            let p = Point::new(64.0 + 50.0 * a.cos(), 64.0 + 50.0 * a.sin());
            let h = hue_at(p, &m);
            assert!((0.0..360.0).contains(&h), "{h}");
        }
    }

    #[test]
    fn pointer_down_regions() {
        let m = m128();
        assert_eq!(drag_mode_at(Point::new(122.0, 64.0), &m), DragMode::Hue);
        assert_eq!(drag_mode_at(Point::new(64.0, 64.0), &m), DragMode::Triangle);
        assert_eq!(drag_mode_at(Point::new(1.0, 1.0), &m), DragMode::None);
        // between the triangle edge and the ring
        assert_eq!(drag_mode_at(Point::new(20.0, 40.0), &m), DragMode::None);
    }

    #[test]
    fn idle_state_ignores_moves() {
        let m = m128();
        let mut state = PickerState {
            pointer: Point::new(64.0, 64.0),
            ..PickerState::default()
        };
        let before = state;
        assert_eq!(apply_drag(&mut state, &m), Redraw::Nothing);
        assert_eq!(state, before);
    }

    #[test]
    fn triangle_drag_clamps_the_pointer() {
        let m = m128();
        let mut state = PickerState {
            drag: DragMode::Triangle,
            pointer: Point::new(200.0, 200.0),
            ..PickerState::default()
        };
        assert_eq!(apply_drag(&mut state, &m), Redraw::Indicators);
        assert_ne!(hit::classify(state.pointer, &m), TriangleHit::OutsideBoundingBox);
        assert!(state.point.y <= 1.0 && state.point.x <= 1.0);
        assert!(state.point.x > 0.5);
    }

    #[test]
    fn screen_bounds_are_subtracted() {
        let e = PointerEvent::new(110.0, 75.0, ScreenRect { left: 10.0, top: 25.0 });
        assert_eq!(e.surface_position(), Point::new(100.0, 50.0));
    }
}
