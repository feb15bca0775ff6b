//! Input events and the fixed key table
//!
//! Keys are identified by USB HID scancodes, the same numbers SDL reports.

use serde::{Deserialize, Serialize};

use crate::consts::{GRAVITY_STEP, JUMP_TUNING_STEP};
use crate::sim::{Command, Tunable};

/// Stable key identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scancode(pub u32);

impl Scancode {
    pub const A: Scancode = Scancode(4);
    pub const D: Scancode = Scancode(7);
    pub const E: Scancode = Scancode(8);
    pub const F: Scancode = Scancode(9);
    pub const Q: Scancode = Scancode(20);
    pub const R: Scancode = Scancode(21);
    pub const S: Scancode = Scancode(22);
    pub const W: Scancode = Scancode(26);
    pub const ESCAPE: Scancode = Scancode(41);
    pub const RIGHT: Scancode = Scancode(79);
    pub const LEFT: Scancode = Scancode(80);
    pub const UP: Scancode = Scancode(82);
}

/// Raw event from the windowing layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Quit,
    KeyDown(Scancode),
    KeyUp(Scancode),
}

/// What the controller should do with an event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Forward to the engine
    Engine(Command),
    /// Leave the run loop
    Quit,
    /// Known key, nothing bound to this edge (e.g. jump key released)
    None,
    /// Key missing from the table
    Unknown(Scancode),
}

/// Map an input event to an action
pub fn action_for(event: InputEvent) -> Action {
    let (code, pressed) = match event {
        InputEvent::Quit => return Action::Quit,
        InputEvent::KeyDown(code) => (code, true),
        InputEvent::KeyUp(code) => (code, false),
    };

    let command = match code {
        Scancode::RIGHT if pressed => Command::MoveRight,
        Scancode::LEFT if pressed => Command::MoveLeft,
        Scancode::RIGHT | Scancode::LEFT => Command::Stop,
        Scancode::UP => Command::Jump,
        Scancode::Q => Command::Tune(Tunable::Gravity, -GRAVITY_STEP),
        Scancode::A => Command::Tune(Tunable::Gravity, GRAVITY_STEP),
        Scancode::W => Command::Tune(Tunable::JumpConstant, JUMP_TUNING_STEP),
        Scancode::S => Command::Tune(Tunable::JumpConstant, -JUMP_TUNING_STEP),
        Scancode::E => Command::Tune(Tunable::JumpIncrease, JUMP_TUNING_STEP),
        Scancode::D => Command::Tune(Tunable::JumpIncrease, -JUMP_TUNING_STEP),
        Scancode::R => Command::Tune(Tunable::InitialJumpVelocity, JUMP_TUNING_STEP),
        Scancode::F => Command::Tune(Tunable::InitialJumpVelocity, -JUMP_TUNING_STEP),
        Scancode::ESCAPE => Command::Reset,
        other => return Action::Unknown(other),
    };

    // Everything except the arrows acts on key-down only
    if !pressed && command != Command::Stop {
        return Action::None;
    }
    Action::Engine(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_move_and_stop() {
        assert_eq!(
            action_for(InputEvent::KeyDown(Scancode::RIGHT)),
            Action::Engine(Command::MoveRight)
        );
        assert_eq!(
            action_for(InputEvent::KeyDown(Scancode::LEFT)),
            Action::Engine(Command::MoveLeft)
        );
        assert_eq!(
            action_for(InputEvent::KeyUp(Scancode::RIGHT)),
            Action::Engine(Command::Stop)
        );
        assert_eq!(
            action_for(InputEvent::KeyUp(Scancode::LEFT)),
            Action::Engine(Command::Stop)
        );
    }

    #[test]
    fn test_jump_on_press_only() {
        assert_eq!(
            action_for(InputEvent::KeyDown(Scancode::UP)),
            Action::Engine(Command::Jump)
        );
        assert_eq!(action_for(InputEvent::KeyUp(Scancode::UP)), Action::None);
    }

    #[test]
    fn test_tuning_keys() {
        let cases = [
            (Scancode::Q, Tunable::Gravity, -GRAVITY_STEP),
            (Scancode::A, Tunable::Gravity, GRAVITY_STEP),
            (Scancode::W, Tunable::JumpConstant, JUMP_TUNING_STEP),
            (Scancode::S, Tunable::JumpConstant, -JUMP_TUNING_STEP),
            (Scancode::E, Tunable::JumpIncrease, JUMP_TUNING_STEP),
            (Scancode::D, Tunable::JumpIncrease, -JUMP_TUNING_STEP),
            (Scancode::R, Tunable::InitialJumpVelocity, JUMP_TUNING_STEP),
            (Scancode::F, Tunable::InitialJumpVelocity, -JUMP_TUNING_STEP),
        ];
        for (code, tunable, delta) in cases {
            assert_eq!(
                action_for(InputEvent::KeyDown(code)),
                Action::Engine(Command::Tune(tunable, delta))
            );
            assert_eq!(action_for(InputEvent::KeyUp(code)), Action::None);
        }
    }

    #[test]
    fn test_reset_quit_unknown() {
        assert_eq!(
            action_for(InputEvent::KeyDown(Scancode::ESCAPE)),
            Action::Engine(Command::Reset)
        );
        assert_eq!(action_for(InputEvent::Quit), Action::Quit);
        assert_eq!(
            action_for(InputEvent::KeyDown(Scancode(44))),
            Action::Unknown(Scancode(44))
        );
        assert_eq!(
            action_for(InputEvent::KeyUp(Scancode(44))),
            Action::Unknown(Scancode(44))
        );
    }
}
