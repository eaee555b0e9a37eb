use sdl2::controller::Button;

/// The buttons the visualizer reports. Presses of anything else are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadButton {
    A,
    B,
    X,
    Y,
    LeftBumper,
    RightBumper,
}

impl PadButton {
    pub fn from_sdl(button: Button) -> Option<Self> {
        match button {
            Button::A => Some(Self::A),
            Button::B => Some(Self::B),
            Button::X => Some(Self::X),
            Button::Y => Some(Self::Y),
            Button::LeftShoulder => Some(Self::LeftBumper),
            Button::RightShoulder => Some(Self::RightBumper),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::X => "X",
            Self::Y => "Y",
            Self::LeftBumper => "left-bumper",
            Self::RightBumper => "right-bumper",
        }
    }
}

/// Console line for a recognized press, none for any other button.
pub fn press_line(button: Button) -> Option<String> {
    PadButton::from_sdl(button).map(|b| format!("{} pressed!", b.label()))
}
