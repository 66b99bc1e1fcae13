use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};

use crate::input::{InputEvent, KeyAction, ScrollDirection};

/// Adapter that turns Winit window events into simulation input events
#[derive(Debug, Clone)]
pub struct WinitInput {
    modifiers: ModifiersState,
    /// Primary button currently held
    left_down: bool,
    /// Current mouse position (relative to window)
    cursor: Option<(f32, f32)>,
}

impl WinitInput {
    pub fn new() -> Self {
        Self {
            modifiers: ModifiersState::empty(),
            left_down: false,
            cursor: None,
        }
    }

    /// Process a Winit WindowEvent, returning the input event it maps to
    pub fn process_event(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::ModifiersChanged(modifiers) => {
                self.set_modifiers(modifiers.state());
                None
            }
            WindowEvent::KeyboardInput { event, .. } => match event.physical_key {
                PhysicalKey::Code(code) => self.key(code, event.state, event.repeat),
                PhysicalKey::Unidentified(_) => None,
            },
            WindowEvent::MouseInput { state, button, .. } => self.mouse_button(*button, *state),
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(position.x as f32, position.y as f32)
            }
            WindowEvent::MouseWheel { delta, .. } => Self::wheel(*delta),
            _ => None,
        }
    }

    pub fn set_modifiers(&mut self, modifiers: ModifiersState) {
        self.modifiers = modifiers;
    }

    pub fn cursor(&self) -> Option<(f32, f32)> {
        self.cursor
    }

    pub fn is_dragging(&self) -> bool {
        self.left_down
    }

    /// Key press or release. Only presses produce actions, and held keys
    /// only repeat actions that are meant to repeat.
    pub fn key(&self, code: KeyCode, state: ElementState, repeat: bool) -> Option<InputEvent> {
        if state != ElementState::Pressed {
            return None;
        }
        let action = Self::keycode_to_action(code, self.modifiers)?;
        if repeat && !action.repeats() {
            return None;
        }
        Some(InputEvent::Key(action))
    }

    pub fn mouse_button(&mut self, button: MouseButton, state: ElementState) -> Option<InputEvent> {
        if button != MouseButton::Left {
            return None;
        }
        match state {
            ElementState::Pressed => {
                self.left_down = true;
                self.cursor
                    .map(|(x, y)| InputEvent::PointerPressed { x, y })
            }
            ElementState::Released => {
                self.left_down = false;
                None
            }
        }
    }

    pub fn cursor_moved(&mut self, x: f32, y: f32) -> Option<InputEvent> {
        self.cursor = Some((x, y));
        self.left_down
            .then_some(InputEvent::PointerDragged { x, y })
    }

    pub fn wheel(delta: MouseScrollDelta) -> Option<InputEvent> {
        let y = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(position) => position.y as f32,
        };
        if y > 0.0 {
            Some(InputEvent::Scroll(ScrollDirection::Up))
        } else if y < 0.0 {
            Some(InputEvent::Scroll(ScrollDirection::Down))
        } else {
            None
        }
    }

    /// Map Winit KeyCode to KeyAction
    fn keycode_to_action(code: KeyCode, modifiers: ModifiersState) -> Option<KeyAction> {
        let ctrl = modifiers.control_key();
        let shift = modifiers.shift_key();
        let action = match code {
            KeyCode::KeyW if ctrl => KeyAction::ElevateUp,
            KeyCode::KeyS if ctrl => KeyAction::ElevateDown,
            KeyCode::KeyW => KeyAction::MoveForward,
            KeyCode::KeyS => KeyAction::MoveBackward,
            KeyCode::KeyA => KeyAction::StrafeLeft,
            KeyCode::KeyD => KeyAction::StrafeRight,
            KeyCode::KeyC => KeyAction::CycleCameraMode,
            KeyCode::KeyR => KeyAction::ResetCamera,
            KeyCode::KeyO => KeyAction::ResetObjects,
            KeyCode::Enter | KeyCode::NumpadEnter => KeyAction::ToggleAnimation,
            KeyCode::Digit8 if shift => KeyAction::ValueUp,
            KeyCode::Digit1 | KeyCode::Numpad1 => KeyAction::SpeedSlow,
            KeyCode::Digit2 | KeyCode::Numpad2 => KeyAction::SpeedMedium,
            KeyCode::Digit3 | KeyCode::Numpad3 => KeyAction::SpeedFast,
            KeyCode::KeyP => KeyAction::TogglePause,
            KeyCode::KeyI => KeyAction::InvertPath,
            KeyCode::KeyL => KeyAction::CycleLight,
            KeyCode::Equal | KeyCode::NumpadAdd => KeyAction::HueUp,
            KeyCode::Minus | KeyCode::NumpadSubtract => KeyAction::HueDown,
            KeyCode::NumpadMultiply => KeyAction::ValueUp,
            KeyCode::Slash | KeyCode::NumpadDivide => KeyAction::ValueDown,
            KeyCode::KeyQ | KeyCode::Escape => KeyAction::Quit,
            _ => return None,
        };
        Some(action)
    }
}

impl Default for WinitInput {
    fn default() -> Self {
        Self::new()
    }
}
