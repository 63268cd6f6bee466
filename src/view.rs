//! Floem widget wrapping [`ColourPicker`].
//!
//! The picker is rasterized at the widget's layout size. Both layers are
//! uploaded as images only when the picker's revision changes.

use std::sync::Arc;

use floem::kurbo::Rect;
use floem::peniko::{self, Blob};

use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;
use tiny_skia::Pixmap;

use crate::color::SolidColor;
use crate::config::PickerConfig;
use crate::constants;
use crate::error::PickerError;
use crate::picker::{ColourPicker, PointerEvent};
use crate::raster;

enum PickerUpdate {
    Colour(SolidColor),
}

struct Layer {
    img: peniko::Image,
    hash: Vec<u8>,
}

fn upload(pixmap: &Pixmap, revision: u64, tag: u8) -> Layer {
    let blob = Blob::new(Arc::new(raster::straight_rgba8(pixmap)));
    let img = peniko::Image::new(blob, peniko::Format::Rgba8, pixmap.width(), pixmap.height());
    let mut hash = revision.to_le_bytes().to_vec();
    hash.push(tag);
    Layer { img, hash }
}

pub struct PickerView {
    id: ViewId,
    picker: ColourPicker,
    size: floem::taffy::prelude::Size<f32>,
    /// Uploaded surface and indicator images, with the revision they show.
    layers: Option<(u64, Layer, Layer)>,
}

/// Creates a hue ring and triangle picker bound to `color`.
///
/// Dragging in the widget writes the sampled colour to the signal; external
/// writes move the selection unless they already match it.
pub fn colour_picker(color: RwSignal<SolidColor>) -> Result<PickerView, PickerError> {
    let id = ViewId::new();

    create_effect(move |_| {
        let c = color.get();
        id.update_state(PickerUpdate::Colour(c));
    });

    let mut picker = ColourPicker::new(PickerConfig::default(), move |c| {
        if color.get_untracked() != c {
            color.set(c);
        }
    })?;
    picker.set_color(color.get_untracked());

    Ok(PickerView {
        id,
        picker,
        size: Default::default(),
        layers: None,
    }
    .style(|s| {
        s.flex_grow(1.0)
            .aspect_ratio(1.0)
            .min_height(constants::DEFAULT_SIZE as f32)
            .cursor(floem::style::CursorStyle::Default)
    }))
}

impl PickerView {
    fn ensure_layers(&mut self) {
        let revision = self.picker.revision();
        if matches!(self.layers, Some((r, _, _)) if r == revision) {
            return;
        }
        let surface = upload(self.picker.surface(), revision, 0);
        let indicators = upload(self.picker.indicators(), revision, 1);
        self.layers = Some((revision, surface, indicators));
    }
}

impl View for PickerView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<PickerUpdate>() {
            match *update {
                PickerUpdate::Colour(c) => {
                    if !c.approx_eq(&self.picker.color(), constants::SET_COLOR_TOLERANCE) {
                        self.picker.set_color(c);
                    }
                }
            }
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.picker.pointer_down(PointerEvent::local(e.pos.x, e.pos.y));
                self.id.request_layout();
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                self.picker.pointer_move(PointerEvent::local(e.pos.x, e.pos.y));
                self.id.request_layout();
                EventPropagation::Continue
            }
            Event::PointerUp(e) => {
                self.picker.pointer_up(PointerEvent::local(e.pos.x, e.pos.y));
                self.id.request_layout();
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        let resized = self
            .picker
            .resize(Some(self.size.width as f64), Some(self.size.height as f64));
        if let Err(err) = resized {
            log::error!("Keeping previous picker size: {}", err);
        }
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }

        self.ensure_layers();
        let (pw, ph) = self.picker.dimensions();
        let rect = Rect::new(0.0, 0.0, pw as f64, ph as f64);
        if let Some((_, ref surface, ref indicators)) = self.layers {
            for layer in [surface, indicators] {
                cx.draw_img(
                    floem_renderer::Img {
                        img: layer.img.clone(),
                        hash: &layer.hash,
                    },
                    rect,
                );
            }
        }
    }
}
