extern crate sdl2;

use sdl2::controller::{Axis, GameController};
use sdl2::GameControllerSubsystem;
use tracing::{debug, info, warn};

/// One analog stick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stick {
    Left,
    Right,
}

/// Raw axis channels the visualizer reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadAxis {
    LeftX,
    LeftY,
    RightX,
    RightY,
}

impl PadAxis {
    fn to_sdl(self) -> Axis {
        match self {
            PadAxis::LeftX => Axis::LeftX,
            PadAxis::LeftY => Axis::LeftY,
            PadAxis::RightX => Axis::RightX,
            PadAxis::RightY => Axis::RightY,
        }
    }
}

pub fn normalize_axis(raw: i16) -> f32 {
    // Promote to i32 and clamp to symmetric range to avoid -32768 overflow/asymmetry
    let clamped = (raw as i32).clamp(-32767, 32767) as f32;
    (clamped / 32767.0).clamp(-1.0, 1.0) // now in [-1.0, 1.0]
}

/// Enumerable controller devices. Seam so the registry can be exercised
/// without a live SDL subsystem.
pub trait PadSource {
    type Pad: StickPad;

    fn device_count(&self) -> Result<u32, String>;
    fn is_gamepad(&self, index: u32) -> bool;
    fn open(&self, index: u32) -> Result<Self::Pad, String>;
}

/// An open controller handle.
pub trait StickPad {
    /// Stable instance id of the underlying physical device.
    fn id(&self) -> u32;
    fn label(&self) -> String;
    fn axis_raw(&self, axis: PadAxis) -> i16;
}

/// Normalized (x, y) deflection of a stick, each in [-1.0, 1.0].
pub fn stick_position<P: StickPad>(pad: &P, stick: Stick) -> (f32, f32) {
    let (x, y) = match stick {
        Stick::Left => (PadAxis::LeftX, PadAxis::LeftY),
        Stick::Right => (PadAxis::RightX, PadAxis::RightY),
    };
    (normalize_axis(pad.axis_raw(x)), normalize_axis(pad.axis_raw(y)))
}

impl PadSource for GameControllerSubsystem {
    type Pad = GameController;

    fn device_count(&self) -> Result<u32, String> {
        self.num_joysticks()
    }

    fn is_gamepad(&self, index: u32) -> bool {
        self.is_game_controller(index)
    }

    fn open(&self, index: u32) -> Result<GameController, String> {
        GameControllerSubsystem::open(self, index).map_err(|e| e.to_string())
    }
}

impl StickPad for GameController {
    fn id(&self) -> u32 {
        self.instance_id()
    }

    fn label(&self) -> String {
        self.name()
    }

    fn axis_raw(&self, axis: PadAxis) -> i16 {
        GameController::axis(self, axis.to_sdl())
    }
}

/// Tracks the single active controller. Holds zero or one open handle;
/// dropping the handle closes the device.
pub struct Registry<S: PadSource> {
    source: S,
    active: Option<S::Pad>,
}

impl<S: PadSource> Registry<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            active: None,
        }
    }

    /// Bind the first recognized game controller in enumeration order.
    /// No-op while a controller is already bound.
    pub fn scan(&mut self) -> Option<&S::Pad> {
        if self.active.is_none() {
            self.active = self.find_pad();
        }
        self.active.as_ref()
    }

    fn find_pad(&self) -> Option<S::Pad> {
        let available = match self.source.device_count() {
            Ok(n) => n,
            Err(e) => {
                warn!("can't enumerate devices: {e}");
                return None;
            }
        };

        (0..available).find_map(|index| {
            if !self.source.is_gamepad(index) {
                debug!("device {index} is not a game controller");
                return None;
            }

            match self.source.open(index) {
                Ok(pad) => {
                    info!("opened controller \"{}\"", pad.label());
                    Some(pad)
                }
                Err(e) => {
                    warn!("failed to open device {index}: {e}");
                    None
                }
            }
        })
    }

    /// Add-event entry point: bind the newly added device, unless one is
    /// already bound (single-controller policy).
    pub fn bind_added(&mut self, index: u32) {
        if self.active.is_some() {
            debug!("device {index} added while bound, ignoring");
            return;
        }
        match self.source.open(index) {
            Ok(pad) => {
                info!("opened controller \"{}\"", pad.label());
                self.active = Some(pad);
            }
            Err(e) => warn!("failed to open added device {index}: {e}"),
        }
    }

    /// Remove-event entry point: if the id names the bound controller,
    /// release it and rescan once for a replacement. Non-matching ids are
    /// ignored.
    pub fn handle_removed(&mut self, instance_id: u32) {
        if !self.matches(instance_id) {
            return;
        }
        info!("controller {instance_id} removed");
        self.release();
        self.scan();
    }

    /// True iff a controller is bound and its instance id equals the given id.
    pub fn matches(&self, instance_id: u32) -> bool {
        self.active.as_ref().map_or(false, |pad| pad.id() == instance_id)
    }

    pub fn active(&self) -> Option<&S::Pad> {
        self.active.as_ref()
    }

    /// Drop the bound handle, closing the device.
    pub fn release(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Clone)]
    struct FakeDevice {
        id: u32,
        gamepad: bool,
        openable: bool,
    }

    impl FakeDevice {
        fn pad(id: u32) -> Self {
            Self {
                id,
                gamepad: true,
                openable: true,
            }
        }
    }

    struct FakeSource {
        devices: RefCell<Vec<FakeDevice>>,
        enumerations: Cell<u32>,
        opens: Cell<u32>,
    }

    impl FakeSource {
        fn new(devices: Vec<FakeDevice>) -> Rc<Self> {
            Rc::new(Self {
                devices: RefCell::new(devices),
                enumerations: Cell::new(0),
                opens: Cell::new(0),
            })
        }

        fn unplug(&self, id: u32) {
            self.devices.borrow_mut().retain(|d| d.id != id);
        }

        fn plug(&self, device: FakeDevice) {
            self.devices.borrow_mut().push(device);
        }
    }

    struct FakePad {
        id: u32,
        axes: [i16; 4],
    }

    impl StickPad for FakePad {
        fn id(&self) -> u32 {
            self.id
        }

        fn label(&self) -> String {
            format!("fake-{}", self.id)
        }

        fn axis_raw(&self, axis: PadAxis) -> i16 {
            match axis {
                PadAxis::LeftX => self.axes[0],
                PadAxis::LeftY => self.axes[1],
                PadAxis::RightX => self.axes[2],
                PadAxis::RightY => self.axes[3],
            }
        }
    }

    impl PadSource for Rc<FakeSource> {
        type Pad = FakePad;

        fn device_count(&self) -> Result<u32, String> {
            self.enumerations.set(self.enumerations.get() + 1);
            Ok(self.devices.borrow().len() as u32)
        }

        fn is_gamepad(&self, index: u32) -> bool {
            self.devices
                .borrow()
                .get(index as usize)
                .map_or(false, |d| d.gamepad)
        }

        fn open(&self, index: u32) -> Result<FakePad, String> {
            self.opens.set(self.opens.get() + 1);
            let device = self
                .devices
                .borrow()
                .get(index as usize)
                .cloned()
                .ok_or_else(|| format!("no device at index {index}"))?;
            if !device.openable {
                return Err(format!("device {} refused to open", device.id));
            }
            Ok(FakePad {
                id: device.id,
                axes: [0; 4],
            })
        }
    }

    #[test]
    fn scan_binds_first_recognized_controller() {
        let source = FakeSource::new(vec![
            FakeDevice {
                id: 1,
                gamepad: false,
                openable: true,
            },
            FakeDevice {
                id: 2,
                gamepad: true,
                openable: false,
            },
            FakeDevice::pad(3),
        ]);
        let mut registry = Registry::new(Rc::clone(&source));

        registry.scan();
        assert!(registry.matches(3));
    }

    #[test]
    fn scan_with_no_devices_stays_unbound() {
        let source = FakeSource::new(vec![]);
        let mut registry = Registry::new(Rc::clone(&source));

        assert!(registry.scan().is_none());
        assert!(registry.active().is_none());
    }

    #[test]
    fn add_while_bound_is_ignored() {
        let source = FakeSource::new(vec![FakeDevice::pad(7)]);
        let mut registry = Registry::new(Rc::clone(&source));
        registry.scan();
        let opens_before = source.opens.get();

        source.plug(FakeDevice::pad(9));
        registry.bind_added(1);

        assert!(registry.matches(7));
        assert_eq!(source.opens.get(), opens_before);
    }

    #[test]
    fn add_while_unbound_binds_the_new_device() {
        let source = FakeSource::new(vec![]);
        let mut registry = Registry::new(Rc::clone(&source));
        registry.scan();
        assert!(registry.active().is_none());

        source.plug(FakeDevice::pad(4));
        registry.bind_added(0);
        assert!(registry.matches(4));
    }

    #[test]
    fn mismatched_remove_keeps_the_binding() {
        let source = FakeSource::new(vec![FakeDevice::pad(7)]);
        let mut registry = Registry::new(Rc::clone(&source));
        registry.scan();

        registry.handle_removed(99);
        assert!(registry.matches(7));
    }

    #[test]
    fn matching_remove_rebinds_to_remaining_device() {
        let source = FakeSource::new(vec![FakeDevice::pad(7), FakeDevice::pad(9)]);
        let mut registry = Registry::new(Rc::clone(&source));
        registry.scan();
        assert!(registry.matches(7));

        source.unplug(7);
        registry.handle_removed(7);
        assert!(registry.matches(9));
    }

    #[test]
    fn matching_remove_scans_exactly_once_and_stays_unbound() {
        let source = FakeSource::new(vec![FakeDevice::pad(7)]);
        let mut registry = Registry::new(Rc::clone(&source));
        registry.scan();

        source.unplug(7);
        let enumerations_before = source.enumerations.get();
        registry.handle_removed(7);

        assert_eq!(source.enumerations.get(), enumerations_before + 1);
        assert!(registry.active().is_none());

        // Stays unbound until the next add-event.
        source.plug(FakeDevice::pad(8));
        registry.bind_added(0);
        assert!(registry.matches(8));
    }

    #[test]
    fn normalize_axis_maps_full_range() {
        assert_eq!(normalize_axis(0), 0.0);
        assert_eq!(normalize_axis(i16::MAX), 1.0);
        assert_eq!(normalize_axis(i16::MIN), -1.0);
        assert_eq!(normalize_axis(-32767), -1.0);
        assert!((normalize_axis(16384) - 0.5).abs() < 1e-3);
    }

    #[test]
    fn stick_position_normalizes_both_axes() {
        let pad = FakePad {
            id: 1,
            axes: [i16::MAX, 0, -32767, 16384],
        };
        assert_eq!(stick_position(&pad, Stick::Left), (1.0, 0.0));
        let (rx, ry) = stick_position(&pad, Stick::Right);
        assert_eq!(rx, -1.0);
        assert!((ry - 0.5).abs() < 1e-3);
    }
}
