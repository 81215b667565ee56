//! Standalone demo: opens a window with the wheel picker.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_wheel::{wheel_picker, PickerState};

fn main() {
    env_logger::init();

    let state = RwSignal::new(PickerState::new());

    floem::Application::new()
        .window(
            move |_| {
                wheel_picker(state)
                    .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                        floem::quit_app()
                    })
                    .on_event_stop(floem::event::EventListener::KeyDown, |e| {
                        if let floem::event::Event::KeyDown(ke) = e {
                            if ke.key.logical_key
                                == floem::keyboard::Key::Named(floem::keyboard::NamedKey::Escape)
                            {
                                floem::quit_app();
                            }
                        }
                    })
            },
            Some(
                WindowConfig::default()
                    .size((800.0, 800.0))
                    .title("floem-wheel"),
            ),
        )
        .run();
}
