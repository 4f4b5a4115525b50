//! Client glue: per-frame input merge and the mouselook rig.
//!
//! Nothing in the simulation depends on this crate; it converts raw device
//! state (keys, virtual joystick, mouse deltas) into the normalized intent
//! the session consumes as read-only input.

#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::struct_excessive_bools
)]

pub mod look;

pub mod input {
    use glam::Vec2;

    /// Input snapshot for one frame of local player intent.
    ///
    /// Keyboard booleans and the virtual joystick are merged by
    /// [`InputState::move_axes`] into one planar vector, so touch and
    /// keyboard players share a code path.
    #[derive(Default, Debug, Clone, Copy)]
    pub struct InputState {
        pub forward: bool,
        pub backward: bool,
        pub strafe_left: bool,
        pub strafe_right: bool,
        /// Virtual joystick axes in [-1,1]; +y is forward.
        pub joystick: Vec2,
        pub fire_held: bool,
        /// One-shot reload press for this frame. The platform layer sets
        /// this on key-press and clears it after the snapshot is consumed so
        /// holding the key does not repeat-reload.
        pub reload_pressed: bool,
    }

    impl InputState {
        pub fn clear(&mut self) {
            *self = Self::default();
        }

        /// Combined planar move intent: `x` strafe (right positive), `y`
        /// forward. Never exceeds unit length, so diagonal movement is not
        /// faster.
        #[must_use]
        pub fn move_axes(&self) -> Vec2 {
            let mut v = self.joystick;
            if self.forward {
                v.y += 1.0;
            }
            if self.backward {
                v.y -= 1.0;
            }
            if self.strafe_right {
                v.x += 1.0;
            }
            if self.strafe_left {
                v.x -= 1.0;
            }
            if v.length_squared() > 1.0 {
                v.normalize()
            } else {
                v
            }
        }
    }

}
