//=========================================================================
// Input Translator
//=========================================================================
//
// Normalizes host events and forwards them to the engine.
//
// Architecture:
//   HostEvent → normalize() → EngineEvent → dispatch() → EngineBoundary
//
// Stateless: every event is translated and forwarded on its own, in
// arrival order. No debouncing, coalescing or reordering.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::trace;

//=== Internal Dependencies ===============================================

use super::buttons::{translate_mask, translate_ordinal};
use super::event::{EngineEvent, HostEvent, KeyInput, PointerInput};
use super::keymap::engine_key;
use crate::core::engine_boundary::EngineBoundary;

//=== Disposition =========================================================

/// Whether the host should still run its default action for the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Let the host handle the event as usual.
    Default,

    /// Suppress the host's default (context menu, browser shortcut,
    /// text selection on drag).
    PreventDefault,
}

//=== InputTranslator =====================================================

/// Single entry point for host input.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputTranslator;

impl InputTranslator {
    pub fn new() -> Self {
        Self
    }

    /// Translates `event` and forwards it to `engine`.
    ///
    /// Returns what the host should do with its own default handling.
    pub fn handle<E>(&self, event: &HostEvent, engine: &mut E) -> Disposition
    where
        E: EngineBoundary + ?Sized,
    {
        match self.normalize(event) {
            Some(normalized) => dispatch(normalized, engine),
            None => trace!(target: "bridge::input", "No engine event for {:?}", event),
        }
        disposition(event)
    }

    /// Pure translation step, without touching the engine.
    pub fn normalize(&self, event: &HostEvent) -> Option<EngineEvent> {
        match event {
            HostEvent::PointerMove(p) => {
                let (x, y) = surface_local(p);
                Some(EngineEvent::Motion { x, y, buttons: translate_mask(p.buttons) })
            }
            HostEvent::PointerDown(p) => Some(button_event(p, true)),
            HostEvent::PointerUp(p) => Some(button_event(p, false)),
            HostEvent::ContextMenu => None,
            HostEvent::KeyDown(k) => key_event(k, true),
            HostEvent::KeyUp(k) => key_event(k, false),
        }
    }
}

//=== Internal Helpers ====================================================

/// Screen → surface-local, rounded toward negative infinity.
pub(crate) fn surface_local(p: &PointerInput) -> (i32, i32) {
    let x = (p.screen_x - p.origin.x).floor() as i32;
    let y = (p.screen_y - p.origin.y).floor() as i32;
    (x, y)
}

fn button_event(p: &PointerInput, pressed: bool) -> EngineEvent {
    let (x, y) = surface_local(p);
    EngineEvent::Button { x, y, button: translate_ordinal(p.button), pressed }
}

fn key_event(k: &KeyInput, pressed: bool) -> Option<EngineEvent> {
    engine_key(k.code).map(|key| EngineEvent::Key { key, pressed })
}

fn dispatch<E>(event: EngineEvent, engine: &mut E)
where
    E: EngineBoundary + ?Sized,
{
    trace!(target: "bridge::input", "Forwarding {:?}", event);
    match event {
        EngineEvent::Motion { x, y, buttons } => engine.mouse_motion(x, y, buttons),
        EngineEvent::Button { x, y, button, pressed } => engine.mouse_button(x, y, button, pressed),
        EngineEvent::Key { key, pressed } => engine.key(key, pressed),
    }
}

fn disposition(event: &HostEvent) -> Disposition {
    match event {
        HostEvent::PointerDown(_) | HostEvent::PointerUp(_) | HostEvent::ContextMenu => {
            Disposition::PreventDefault
        }
        HostEvent::KeyDown(k) if k.modifiers.is_shortcut() => Disposition::PreventDefault,
        _ => Disposition::Default,
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine_boundary::test_support::FakeEngine;
    use crate::core::input::{
        EngineButton, EngineButtons, EngineKey, HostButtons, KeyCode, Modifiers, SurfaceOrigin,
    };

    fn key(code: KeyCode, modifiers: Modifiers) -> KeyInput {
        KeyInput { code, modifiers }
    }

    //=====================================================================
    // Coordinate Tests
    //=====================================================================

    #[test]
    fn subtracts_origin_and_floors() {
        let p = PointerInput::at(53.7, 84.2).with_origin(SurfaceOrigin::new(50.0, 80.0));
        assert_eq!(surface_local(&p), (3, 4));
    }

    #[test]
    fn left_of_origin_floors_downward() {
        let p = PointerInput::at(49.5, 80.0).with_origin(SurfaceOrigin::new(50.0, 80.0));
        assert_eq!(surface_local(&p), (-1, 0));
    }

    //=====================================================================
    // Pointer Tests
    //=====================================================================

    #[test]
    fn motion_carries_translated_mask() {
        let mut engine = FakeEngine::not_started();
        let event = HostEvent::PointerMove(
            PointerInput::at(10.0, 20.0).with_buttons(HostButtons::LEFT | HostButtons::RIGHT),
        );

        let disposition = InputTranslator::new().handle(&event, &mut engine);

        assert_eq!(disposition, Disposition::Default);
        assert_eq!(
            engine.events,
            vec![EngineEvent::Motion {
                x: 10,
                y: 20,
                buttons: EngineButtons::LEFT | EngineButtons::RIGHT
            }]
        );
    }

    #[test]
    fn secondary_press_becomes_engine_right() {
        let mut engine = FakeEngine::not_started();
        let event = HostEvent::PointerDown(PointerInput::at(1.0, 2.0).with_button(1));

        let disposition = InputTranslator::new().handle(&event, &mut engine);

        assert_eq!(disposition, Disposition::PreventDefault);
        assert_eq!(
            engine.events,
            vec![EngineEvent::Button { x: 1, y: 2, button: EngineButton::Right, pressed: true }]
        );
    }

    #[test]
    fn release_reports_not_pressed() {
        let translator = InputTranslator::new();
        let event = HostEvent::PointerUp(PointerInput::at(0.0, 0.0).with_button(2));

        assert_eq!(
            translator.normalize(&event),
            Some(EngineEvent::Button { x: 0, y: 0, button: EngineButton::Middle, pressed: false })
        );
    }

    #[test]
    fn context_menu_is_suppressed_and_not_forwarded() {
        let mut engine = FakeEngine::not_started();

        let disposition = InputTranslator::new().handle(&HostEvent::ContextMenu, &mut engine);

        assert_eq!(disposition, Disposition::PreventDefault);
        assert!(engine.events.is_empty());
    }

    //=====================================================================
    // Keyboard Tests
    //=====================================================================

    #[test]
    fn plain_key_keeps_host_default() {
        let mut engine = FakeEngine::not_started();
        let event = HostEvent::KeyDown(key(KeyCode::KeyA, Modifiers::SHIFT));

        let disposition = InputTranslator::new().handle(&event, &mut engine);

        assert_eq!(disposition, Disposition::Default);
        assert_eq!(
            engine.events,
            vec![EngineEvent::Key { key: EngineKey(b'a' as i16), pressed: true }]
        );
    }

    #[test]
    fn shortcut_modifiers_prevent_default_on_key_down() {
        let translator = InputTranslator::new();
        let mut engine = FakeEngine::not_started();

        for mods in [Modifiers::CTRL, Modifiers::ALT, Modifiers::META] {
            let down = HostEvent::KeyDown(key(KeyCode::KeyS, mods));
            assert_eq!(translator.handle(&down, &mut engine), Disposition::PreventDefault);
        }
    }

    #[test]
    fn key_up_never_prevents_default() {
        let mut engine = FakeEngine::not_started();
        let up = HostEvent::KeyUp(key(KeyCode::KeyS, Modifiers::CTRL));

        assert_eq!(InputTranslator::new().handle(&up, &mut engine), Disposition::Default);
        assert_eq!(
            engine.events,
            vec![EngineEvent::Key { key: EngineKey(b's' as i16), pressed: false }]
        );
    }

    #[test]
    fn unmapped_key_is_dropped_but_still_suppressed_with_ctrl() {
        let mut engine = FakeEngine::not_started();
        let event = HostEvent::KeyDown(key(KeyCode::Unidentified, Modifiers::CTRL));

        let disposition = InputTranslator::new().handle(&event, &mut engine);

        assert_eq!(disposition, Disposition::PreventDefault);
        assert!(engine.events.is_empty());
    }

    #[test]
    fn events_are_forwarded_in_order_without_coalescing() {
        let mut engine = FakeEngine::not_started();
        let translator = InputTranslator::new();

        for x in [1.0, 1.0, 2.0] {
            translator.handle(&HostEvent::PointerMove(PointerInput::at(x, 0.0)), &mut engine);
        }

        let xs: Vec<i32> = engine
            .events
            .iter()
            .map(|e| match e {
                EngineEvent::Motion { x, .. } => *x,
                other => panic!("unexpected {:?}", other),
            })
            .collect();
        assert_eq!(xs, vec![1, 1, 2]);
    }
}
