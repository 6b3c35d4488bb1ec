//! Dispatching user interactions to the host's callbacks.

use std::fmt;

use crate::event::{Interaction, SelectionEvent};

type SelectedCallback = Box<dyn FnMut(&SelectionEvent)>;
type PressOutsideCallback = Box<dyn FnMut()>;

/// Turns interactions into synchronous host notifications.
///
/// Each call notifies exactly once; nothing is queued, batched, or
/// debounced. Whether the clear button is visible is a rendering concern,
/// so [`SelectionController::clear`] always works.
pub struct SelectionController {
    on_emoji_selected: SelectedCallback,
    on_press_outside: Option<PressOutsideCallback>,
}

impl SelectionController {
    /// Creates a controller reporting selections to `on_emoji_selected`.
    pub fn new(on_emoji_selected: impl FnMut(&SelectionEvent) + 'static) -> Self {
        Self {
            on_emoji_selected: Box::new(on_emoji_selected),
            on_press_outside: None,
        }
    }

    /// Registers the outside-tap callback.
    pub fn with_press_outside(self, on_press_outside: impl FnMut() + 'static) -> Self {
        Self {
            on_press_outside: Some(Box::new(on_press_outside)),
            ..self
        }
    }

    pub fn select_character(&mut self, character: &str) {
        tracing::debug!(character, "emoji selected");
        (self.on_emoji_selected)(&SelectionEvent::Character(character.to_string()));
    }

    pub fn clear(&mut self) {
        tracing::debug!("selection cleared");
        (self.on_emoji_selected)(&SelectionEvent::Cleared);
    }

    /// Reports an outside tap. Never emits a [`SelectionEvent`].
    pub fn press_outside(&mut self) {
        tracing::debug!("pressed outside picker");
        if let Some(callback) = self.on_press_outside.as_mut() {
            callback();
        }
    }

    pub fn dispatch(&mut self, interaction: Interaction) {
        match interaction {
            Interaction::SelectCharacter(c) => self.select_character(&c),
            Interaction::Clear => self.clear(),
            Interaction::PressOutside => self.press_outside(),
        }
    }
}

impl fmt::Debug for SelectionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionController")
            .field("has_press_outside", &self.on_press_outside.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn recording() -> (SelectionController, Rc<RefCell<Vec<SelectionEvent>>>) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let controller = SelectionController::new(move |e| sink.borrow_mut().push(e.clone()));
        (controller, events)
    }

    #[test]
    fn select_emits_one_character_event() {
        let (mut controller, events) = recording();
        controller.select_character("\u{1F600}");
        assert_eq!(
            *events.borrow(),
            vec![SelectionEvent::Character("\u{1F600}".to_string())]
        );
    }

    #[test]
    fn each_clear_emits_exactly_one_event() {
        let (mut controller, events) = recording();
        controller.clear();
        controller.clear();
        assert_eq!(
            *events.borrow(),
            vec![SelectionEvent::Cleared, SelectionEvent::Cleared]
        );
    }

    #[test]
    fn repeated_selections_are_not_coalesced() {
        let (mut controller, events) = recording();
        for _ in 0..3 {
            controller.select_character("\u{2764}\u{FE0F}");
        }
        assert_eq!(events.borrow().len(), 3);
    }

    #[test]
    fn press_outside_does_not_emit_selection() {
        let (controller, events) = recording();
        let outside = Rc::new(Cell::new(0));
        let counter = Rc::clone(&outside);
        let mut controller = controller.with_press_outside(move || counter.set(counter.get() + 1));

        controller.press_outside();

        assert_eq!(outside.get(), 1);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn press_outside_without_callback_is_noop() {
        let (mut controller, events) = recording();
        controller.press_outside();
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn dispatch_routes_interactions() {
        let (controller, events) = recording();
        let outside = Rc::new(Cell::new(false));
        let flag = Rc::clone(&outside);
        let mut controller = controller.with_press_outside(move || flag.set(true));

        controller.dispatch(Interaction::SelectCharacter("\u{1F436}".to_string()));
        controller.dispatch(Interaction::PressOutside);
        controller.dispatch(Interaction::Clear);

        assert_eq!(
            *events.borrow(),
            vec![
                SelectionEvent::Character("\u{1F436}".to_string()),
                SelectionEvent::Cleared,
            ]
        );
        assert!(outside.get());
    }

    #[test]
    fn debug_does_not_require_callback_debug() {
        let (controller, _) = recording();
        assert!(format!("{controller:?}").contains("SelectionController"));
    }
}
