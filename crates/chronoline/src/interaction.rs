//! Hover and category interaction over a laid-out timeline.
//!
//! The controller turns pointer input into [`Signal`]s for the presentation
//! layer. It holds no visibility state; a [`Signal::ToggleCategory`] is a
//! request, and the presentation layer decides what to hide and re-renders.

use std::fmt;

use log::{debug, trace};

use chronoline_core::geometry::Point;

use crate::layout::{EventLayout, ShapeId};

/// Description shown for events that have none.
pub const NO_DESCRIPTION: &str = "No description available";

/// Offset of the description popup from the pointer.
pub const DESCRIPTION_OFFSET: Point = Point::new(10.0, 10.0);

/// Pointer input reported by the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    Enter { shape: ShapeId, pointer: Point },
    Leave { shape: ShapeId },
    ActivateCategory(String),
}

/// Request emitted towards the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    ShowDescription {
        shape: ShapeId,
        text: String,
        anchor: Point,
    },
    HideDescription {
        shape: ShapeId,
    },
    ToggleCategory(String),
}

type Subscriber<'s> = Box<dyn FnMut(&Signal) + 's>;

/// Dispatches pointer input on the shapes of one [`EventLayout`].
///
/// # Example
///
/// ```
/// # use std::{cell::RefCell, rc::Rc};
/// # use chrono::NaiveDate;
/// # use chronoline::{
/// #     interaction::{InteractionController, PointerEvent, Signal},
/// #     layout::EventLayoutEngine, scale::TimeScale, window::TimeWindow,
/// # };
/// # use chronoline_core::{document::Event, geometry::Point, measure::FixedMetrics};
/// let day = |d| NaiveDate::from_ymd_opt(2025, 1, d).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let scale = TimeScale::new(TimeWindow::new(day(1), day(8)).unwrap(), 2000.0);
/// let events = [Event::new(day(2)).with_text("Launch")];
/// let layout = EventLayoutEngine::new(&scale, FixedMetrics::default(), 400.0)
///     .layout(events.iter().enumerate());
///
/// let received = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&received);
///
/// let mut controller = InteractionController::new(&layout);
/// controller.subscribe(move |signal| sink.borrow_mut().push(signal.clone()));
///
/// let shape = layout.shapes()[0].id();
/// controller.dispatch(PointerEvent::Enter { shape, pointer: Point::new(300.0, 410.0) });
///
/// assert_eq!(
///     received.borrow()[0],
///     Signal::ShowDescription {
///         shape,
///         text: "No description available".to_string(),
///         anchor: Point::new(310.0, 420.0),
///     }
/// );
/// ```
pub struct InteractionController<'l, 'a> {
    layout: &'l EventLayout<'a>,
    subscribers: Vec<Subscriber<'l>>,
    hovered: Option<ShapeId>,
}

impl fmt::Debug for InteractionController<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractionController")
            .field("shapes", &self.layout.shapes().len())
            .field("subscribers", &self.subscribers.len())
            .field("hovered", &self.hovered)
            .finish()
    }
}

impl<'l, 'a> InteractionController<'l, 'a> {
    pub fn new(layout: &'l EventLayout<'a>) -> Self {
        Self {
            layout,
            subscribers: Vec::new(),
            hovered: None,
        }
    }

    /// Registers a callback that receives every emitted signal, in
    /// registration order.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&Signal) + 'l) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// The shape currently under the pointer, if any.
    pub fn hovered(&self) -> Option<ShapeId> {
        self.hovered
    }

    /// Handles one pointer event.
    ///
    /// Returns the emitted signal, or `None` when the event does not refer to
    /// a shape of this layout. Every leave of a known shape hides its
    /// description, whether or not the shape was entered before.
    pub fn dispatch(&mut self, event: PointerEvent) -> Option<Signal> {
        let signal = match event {
            PointerEvent::Enter { shape, pointer } => {
                let Some(placed) = self.layout.shape(shape) else {
                    debug!(shape:% = shape; "Pointer entered unknown shape");
                    return None;
                };
                self.hovered = Some(shape);
                Signal::ShowDescription {
                    shape,
                    text: placed
                        .event()
                        .description()
                        .unwrap_or(NO_DESCRIPTION)
                        .to_string(),
                    anchor: pointer.add_point(DESCRIPTION_OFFSET),
                }
            }
            PointerEvent::Leave { shape } => {
                if self.layout.shape(shape).is_none() {
                    debug!(shape:% = shape; "Pointer left unknown shape");
                    return None;
                }
                if self.hovered == Some(shape) {
                    self.hovered = None;
                }
                Signal::HideDescription { shape }
            }
            PointerEvent::ActivateCategory(name) => Signal::ToggleCategory(name),
        };

        trace!(signal:? = signal; "Signal emitted");
        for subscriber in &mut self.subscribers {
            subscriber(&signal);
        }
        Some(signal)
    }

    /// Topmost shape containing `point`. Later shapes are drawn over earlier
    /// ones.
    pub fn hit_test(&self, point: Point) -> Option<ShapeId> {
        self.layout
            .shapes()
            .iter()
            .rev()
            .find(|shape| shape.bounds().contains(point))
            .map(|shape| shape.id())
    }

    /// Translates a pointer position into leave and enter events.
    pub fn pointer_moved(&mut self, point: Point) -> Vec<Signal> {
        let target = self.hit_test(point);
        if target == self.hovered {
            return Vec::new();
        }

        let mut signals = Vec::new();
        if let Some(shape) = self.hovered {
            signals.extend(self.dispatch(PointerEvent::Leave { shape }));
        }
        if let Some(shape) = target {
            signals.extend(self.dispatch(PointerEvent::Enter {
                shape,
                pointer: point,
            }));
        }
        signals
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use chrono::NaiveDate;
    use chronoline_core::{
        document::{Event, Instant},
        measure::FixedMetrics,
    };

    use super::*;
    use crate::{layout::EventLayoutEngine, scale::TimeScale, window::TimeWindow};

    fn day(d: u32) -> Instant {
        NaiveDate::from_ymd_opt(2025, 1, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn events() -> Vec<Event> {
        vec![
            Event::new(day(2))
                .with_text("Launch")
                .with_description("Public release"),
            Event::new(day(2)).with_text("Party"),
        ]
    }

    fn scale() -> TimeScale {
        TimeScale::new(TimeWindow::new(day(1), day(8)).unwrap(), 2000.0)
    }

    #[test]
    fn test_enter_and_leave() {
        let scale = scale();
        let events = events();
        let layout = EventLayoutEngine::new(&scale, FixedMetrics::default(), 400.0)
            .layout(events.iter().enumerate());
        let shape = layout.shapes()[0].id();

        let mut controller = InteractionController::new(&layout);
        let shown = controller.dispatch(PointerEvent::Enter {
            shape,
            pointer: Point::new(5.0, 6.0),
        });
        assert_eq!(
            shown,
            Some(Signal::ShowDescription {
                shape,
                text: "Public release".to_string(),
                anchor: Point::new(15.0, 16.0),
            })
        );
        assert_eq!(controller.hovered(), Some(shape));

        let hidden = controller.dispatch(PointerEvent::Leave { shape });
        assert_eq!(hidden, Some(Signal::HideDescription { shape }));
        assert_eq!(controller.hovered(), None);
        assert_eq!(hidden, controller.dispatch(PointerEvent::Leave { shape }));
    }

    #[test]
    fn test_leave_without_enter_hides_description() {
        let scale = scale();
        let events = events();
        let layout = EventLayoutEngine::new(&scale, FixedMetrics::default(), 400.0)
            .layout(events.iter().enumerate());
        let first = layout.shapes()[0].id();
        let second = layout.shapes()[1].id();

        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&received);
        let mut controller = InteractionController::new(&layout);
        controller.subscribe(move |signal| sink.borrow_mut().push(signal.clone()));

        assert_eq!(
            controller.dispatch(PointerEvent::Leave { shape: first }),
            Some(Signal::HideDescription { shape: first })
        );

        controller.dispatch(PointerEvent::Enter {
            shape: second,
            pointer: Point::default(),
        });
        controller.dispatch(PointerEvent::Leave { shape: first });
        assert_eq!(controller.hovered(), Some(second));

        assert_eq!(
            *received.borrow(),
            vec![
                Signal::HideDescription { shape: first },
                Signal::ShowDescription {
                    shape: second,
                    text: NO_DESCRIPTION.to_string(),
                    anchor: DESCRIPTION_OFFSET,
                },
                Signal::HideDescription { shape: first },
            ]
        );
    }

    #[test]
    fn test_category_activation_is_forwarded() {
        let layout = EventLayout::default();
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&received);

        let mut controller = InteractionController::new(&layout);
        controller.subscribe(move |signal| sink.borrow_mut().push(signal.clone()));
        controller.dispatch(PointerEvent::ActivateCategory("war".to_string()));

        assert_eq!(
            *received.borrow(),
            vec![Signal::ToggleCategory("war".to_string())]
        );
    }

    #[test]
    fn test_unknown_shape_is_ignored() {
        let scale = scale();
        let events = events();
        let layout = EventLayoutEngine::new(&scale, FixedMetrics::default(), 400.0)
            .layout(events.iter().take(1).enumerate());
        let other = EventLayoutEngine::new(&scale, FixedMetrics::default(), 400.0)
            .layout(events.iter().enumerate());

        let mut controller = InteractionController::new(&layout);
        let foreign = other.shapes()[1].id();
        assert_eq!(
            controller.dispatch(PointerEvent::Enter {
                shape: foreign,
                pointer: Point::default(),
            }),
            None
        );
        assert_eq!(controller.dispatch(PointerEvent::Leave { shape: foreign }), None);
    }

    #[test]
    fn test_pointer_moved_tracks_hover() {
        let scale = scale();
        let events = events();
        let layout = EventLayoutEngine::new(&scale, FixedMetrics::default(), 400.0)
            .layout(events.iter().enumerate());
        let first = layout.shapes()[0].clone();
        let second = layout.shapes()[1].clone();

        let mut controller = InteractionController::new(&layout);
        let inside_first = first.bounds().min_point().add_point(Point::new(2.0, 2.0));
        let inside_second = second.bounds().min_point().add_point(Point::new(2.0, 2.0));

        let signals = controller.pointer_moved(inside_first);
        assert_eq!(signals.len(), 1);
        assert!(matches!(signals[0], Signal::ShowDescription { shape, .. } if shape == first.id()));

        assert!(controller.pointer_moved(inside_first).is_empty());

        let signals = controller.pointer_moved(inside_second);
        assert_eq!(signals.len(), 2);
        assert_eq!(signals[0], Signal::HideDescription { shape: first.id() });
        assert!(matches!(&signals[1], Signal::ShowDescription { text, .. } if text == NO_DESCRIPTION));

        let signals = controller.pointer_moved(Point::new(-50.0, -50.0));
        assert_eq!(signals, vec![Signal::HideDescription { shape: second.id() }]);
    }
}
