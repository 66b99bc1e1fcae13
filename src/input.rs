//! Input events understood by the simulation, independent of the windowing
//! layer. `core::input_adapter` turns winit events into these.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    CycleCameraMode,
    ResetCamera,
    ResetObjects,
    ToggleAnimation,
    SpeedSlow,
    SpeedMedium,
    SpeedFast,
    TogglePause,
    InvertPath,
    MoveForward,
    MoveBackward,
    StrafeLeft,
    StrafeRight,
    ElevateUp,
    ElevateDown,
    CycleLight,
    HueUp,
    HueDown,
    ValueUp,
    ValueDown,
    Quit,
}

impl KeyAction {
    /// Actions that keep firing while a key is held down
    pub const fn repeats(self) -> bool {
        matches!(
            self,
            Self::MoveForward
                | Self::MoveBackward
                | Self::StrafeLeft
                | Self::StrafeRight
                | Self::ElevateUp
                | Self::ElevateDown
                | Self::HueUp
                | Self::HueDown
                | Self::ValueUp
                | Self::ValueDown
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Key(KeyAction),
    /// Primary button went down at this window position
    PointerPressed { x: f32, y: f32 },
    /// Pointer moved to this window position with the primary button held
    PointerDragged { x: f32, y: f32 },
    Scroll(ScrollDirection),
}

/// What the driver should do after an event was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}
