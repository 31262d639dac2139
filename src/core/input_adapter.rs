use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::surface_size::SurfaceSize;
use crate::math::Pixel;

/// Host key bindings; the core itself binds no keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    PanLeft,
    PanRight,
    PanUp,
    PanDown,
    ZoomIn,
    ZoomOut,
    ToggleGrid,
    ToggleAxis,
}

/// Window event reduced to what the rendering surface consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    PointerPressed(Pixel),
    PointerReleased(Pixel),
    Key(Key),
    Resized(SurfaceSize),
}

/// Adapter that bridges Winit events to surface input
#[derive(Debug, Clone, Default)]
pub struct InputAdapter {
    /// Last known cursor pixel (relative to window)
    cursor: Option<Pixel>,
}

impl InputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a Winit WindowEvent, returning the surface-level event if any
    pub fn process_event(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.handle_cursor(position.x, position.y);
                None
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                None
            }
            WindowEvent::MouseInput { state, .. } => self.handle_button(*state),
            WindowEvent::KeyboardInput { event, .. } => match event.physical_key {
                PhysicalKey::Code(code) => self.handle_key(code, event.state),
                PhysicalKey::Unidentified(_) => None,
            },
            WindowEvent::Resized(size) => {
                Some(InputEvent::Resized(SurfaceSize::new(size.width, size.height)))
            }
            _ => None,
        }
    }

    /// Last known cursor position
    pub fn cursor(&self) -> Option<Pixel> {
        self.cursor
    }

    fn handle_cursor(&mut self, x: f64, y: f64) {
        self.cursor = Some(Pixel::new(x.floor() as i32, y.floor() as i32));
    }

    /// Press/release at the cursor; ignored before the cursor entered the window
    fn handle_button(&self, state: ElementState) -> Option<InputEvent> {
        let pixel = self.cursor?;
        Some(match state {
            ElementState::Pressed => InputEvent::PointerPressed(pixel),
            ElementState::Released => InputEvent::PointerReleased(pixel),
        })
    }

    fn handle_key(&self, code: KeyCode, state: ElementState) -> Option<InputEvent> {
        if state != ElementState::Pressed {
            return None;
        }
        Self::keycode_to_key(code).map(InputEvent::Key)
    }

    /// Map Winit KeyCode to Key
    fn keycode_to_key(code: KeyCode) -> Option<Key> {
        match code {
            KeyCode::Escape => Some(Key::Escape),
            KeyCode::ArrowLeft => Some(Key::PanLeft),
            KeyCode::ArrowRight => Some(Key::PanRight),
            KeyCode::ArrowUp => Some(Key::PanUp),
            KeyCode::ArrowDown => Some(Key::PanDown),
            KeyCode::Equal | KeyCode::NumpadAdd => Some(Key::ZoomIn),
            KeyCode::Minus | KeyCode::NumpadSubtract => Some(Key::ZoomOut),
            KeyCode::KeyG => Some(Key::ToggleGrid),
            KeyCode::KeyA => Some(Key::ToggleAxis),
            _ => None,
        }
    }
}
