//! Standalone demo: opens a window with the hue ring and triangle picker.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem::AnyView;
use floem_triangle::{colour_picker, SolidColor};

fn app_view() -> AnyView {
    let color = RwSignal::new(SolidColor::from_hex("3B82F6").unwrap_or_default());
    match colour_picker(color) {
        Ok(picker) => picker.into_any(),
        Err(err) => label(move || err.to_string()).into_any(),
    }
}

fn main() {
    floem::Application::new()
        .window(
            move |_| {
                app_view().on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((256.0, 256.0))
                    .title("floem-triangle"),
            ),
        )
        .run();
}
