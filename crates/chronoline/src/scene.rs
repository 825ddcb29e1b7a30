//! Flat list of drawable primitives.
//!
//! A [`Scene`] is what a presentation layer paints. Primitives carry absolute
//! coordinates, their own colors and strokes, and a [`Role`] that tells the
//! painter what they stand for and which [`RenderLayer`] they belong to.
//!
//! Items are emitted in drawing order: background, eras, centerline,
//! events, fine axis, week axis.

use log::debug;

use chronoline_core::{
    color::Color,
    draw::{FontWeight, RenderLayer, StrokeDefinition, TextDefinition},
    geometry::{Bounds, Point, Size},
};

use crate::{
    config::StyleConfig,
    error::ChronolineError,
    layout::{ShapeId, TimelineLayout},
};

const ERA_ALPHA: f32 = 0.3;
const ERA_LABEL_OFFSET: Point = Point::new(10.0, -55.0);
const ERA_BOUNDARY_WIDTH: f32 = 3.0;
const CENTERLINE_WIDTH: f32 = 2.0;
const EVENT_STROKE_WIDTH: f32 = 1.0;
const EVENT_LABEL_INSET: f32 = 5.0;
const EVENT_LABEL_BASELINE: f32 = 0.35;
const TICK_LABEL_OFFSET: Point = Point::new(3.0, -5.0);
const WEEK_BOUNDARY_WIDTH: f32 = 2.0;
const WEEK_LABEL_POSITION_Y: f32 = 20.0;
const WEEK_LABEL_INSET: f32 = 5.0;

/// Font size of event labels; layout measures labels at this size.
pub const EVENT_FONT_SIZE: u16 = 12;
const ERA_FONT_SIZE: u16 = 12;
const TICK_FONT_SIZE: u16 = 10;
const WEEK_FONT_SIZE: u16 = 11;

/// A single drawable shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect {
        bounds: Bounds,
        fill: Color,
        stroke: Option<StrokeDefinition>,
    },
    Line {
        from: Point,
        to: Point,
        stroke: StrokeDefinition,
    },
    /// Text anchored at the left end of its baseline.
    Label {
        position: Point,
        text: String,
        style: TextDefinition,
    },
}

/// What a primitive represents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Background,
    EraBand { era: usize },
    EraBoundary { era: usize },
    EraLabel { era: usize },
    Centerline,
    Gridline,
    TickLabel { emphasized: bool },
    EventRect {
        shape: ShapeId,
        category: Option<String>,
        milestone: bool,
    },
    EventLabel { shape: ShapeId },
    WeekBoundary { week: usize },
    WeekLabel { week: usize },
}

impl Role {
    /// Layer the primitive is painted on.
    pub fn layer(&self) -> RenderLayer {
        match self {
            Role::Background => RenderLayer::Background,
            Role::EraBand { .. } | Role::EraBoundary { .. } => RenderLayer::Era,
            Role::Gridline | Role::WeekBoundary { .. } => RenderLayer::Grid,
            Role::Centerline | Role::EventRect { .. } => RenderLayer::Content,
            Role::EraLabel { .. }
            | Role::TickLabel { .. }
            | Role::EventLabel { .. }
            | Role::WeekLabel { .. } => RenderLayer::Text,
        }
    }

    /// The event shape this primitive belongs to, if any.
    pub fn shape(&self) -> Option<ShapeId> {
        match self {
            Role::EventRect { shape, .. } | Role::EventLabel { shape } => Some(*shape),
            _ => None,
        }
    }
}

/// A primitive with its role.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneItem {
    role: Role,
    primitive: Primitive,
}

impl SceneItem {
    pub fn new(role: Role, primitive: Primitive) -> Self {
        Self { role, primitive }
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn primitive(&self) -> &Primitive {
        &self.primitive
    }

    pub fn layer(&self) -> RenderLayer {
        self.role.layer()
    }
}

/// Everything needed to paint one timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    size: Size,
    items: Vec<SceneItem>,
}

impl Scene {
    /// Creates a scene from prepared items.
    pub fn new(size: Size, items: Vec<SceneItem>) -> Self {
        Self { size, items }
    }

    /// Builds the primitives of `layout` styled by `style`.
    ///
    /// # Errors
    ///
    /// Returns [`ChronolineError::Config`] if a configured color is invalid.
    pub fn build(layout: &TimelineLayout<'_>, style: &StyleConfig) -> Result<Self, ChronolineError> {
        let palette = Palette::new(style)?;
        let mut builder = SceneBuilder {
            layout,
            palette,
            items: Vec::new(),
        };

        builder.background();
        builder.eras();
        builder.centerline();
        builder.events();
        builder.fine_axis();
        builder.week_axis();

        debug!(items = builder.items.len(); "Scene built");
        Ok(Self {
            size: layout.size(),
            items: builder.items,
        })
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn items(&self) -> &[SceneItem] {
        &self.items
    }

    /// Items belonging to the given event shape.
    pub fn items_for_shape(&self, shape: ShapeId) -> impl Iterator<Item = &SceneItem> {
        self.items
            .iter()
            .filter(move |item| item.role.shape() == Some(shape))
    }
}

/// Resolved colors and fonts.
struct Palette {
    background: Color,
    default_event: Color,
    era_fill: Color,
    era_boundary: Color,
    event_stroke: Color,
    gridline: Color,
    week_boundary: Color,
    text: Color,
    font_family: String,
}

impl Palette {
    fn new(style: &StyleConfig) -> Result<Self, ChronolineError> {
        let background = style
            .background_color()
            .map_err(ChronolineError::Config)?
            .unwrap_or(Color::from_rgb8(255, 255, 255));
        let default_event = style.default_event_color().map_err(ChronolineError::Config)?;

        Ok(Self {
            background,
            default_event,
            era_fill: Color::from_rgb8(173, 216, 230).with_alpha(ERA_ALPHA),
            era_boundary: Color::from_rgb8(0x22, 0x22, 0x22),
            event_stroke: Color::from_rgb8(0x55, 0x55, 0x55),
            gridline: Color::from_rgb8(0xcc, 0xcc, 0xcc),
            week_boundary: Color::from_rgb8(0x44, 0x44, 0x44),
            text: Color::default(),
            font_family: style.font_family().to_string(),
        })
    }

    fn text(&self, size: u16, color: Color) -> TextDefinition {
        let mut definition = TextDefinition::with_font(&self.font_family, size);
        definition.set_color(Some(color));
        definition
    }
}

struct SceneBuilder<'l, 'a> {
    layout: &'l TimelineLayout<'a>,
    palette: Palette,
    items: Vec<SceneItem>,
}

impl SceneBuilder<'_, '_> {
    fn push(&mut self, role: Role, primitive: Primitive) {
        self.items.push(SceneItem::new(role, primitive));
    }

    fn vertical_line(&mut self, role: Role, x: f32, stroke: StrokeDefinition) {
        let height = self.layout.size().height();
        self.push(
            role,
            Primitive::Line {
                from: Point::new(x, 0.0),
                to: Point::new(x, height),
                stroke,
            },
        );
    }

    fn background(&mut self) {
        let bounds = Bounds::new_from_top_left(Point::default(), self.layout.size());
        let fill = self.palette.background;
        self.push(
            Role::Background,
            Primitive::Rect {
                bounds,
                fill,
                stroke: None,
            },
        );
    }

    fn eras(&mut self) {
        let layout = self.layout;
        let height = layout.size().height();
        let centerline = layout.centerline();

        for (era, band) in layout.eras().iter().enumerate() {
            let fill = band
                .color()
                .map(|color| color.with_alpha(ERA_ALPHA))
                .unwrap_or(self.palette.era_fill);
            self.push(
                Role::EraBand { era },
                Primitive::Rect {
                    bounds: Bounds::new_from_top_left(
                        Point::new(band.x(), 0.0),
                        Size::new(band.width(), height),
                    ),
                    fill,
                    stroke: None,
                },
            );

            if let Some(name) = band.name() {
                let style = self.palette.text(ERA_FONT_SIZE, self.palette.text);
                self.push(
                    Role::EraLabel { era },
                    Primitive::Label {
                        position: Point::new(band.x(), centerline).add_point(ERA_LABEL_OFFSET),
                        text: name.to_string(),
                        style,
                    },
                );
            }

            let stroke = StrokeDefinition::solid(self.palette.era_boundary, ERA_BOUNDARY_WIDTH);
            self.vertical_line(Role::EraBoundary { era }, band.x(), stroke.clone());
            self.vertical_line(Role::EraBoundary { era }, band.end_x(), stroke);
        }
    }

    fn centerline(&mut self) {
        let y = self.layout.centerline();
        let width = self.layout.size().width();
        self.push(
            Role::Centerline,
            Primitive::Line {
                from: Point::new(0.0, y),
                to: Point::new(width, y),
                stroke: StrokeDefinition::solid(self.palette.text, CENTERLINE_WIDTH),
            },
        );
    }

    fn events(&mut self) {
        let layout = self.layout;
        let document = layout.document();

        for shape in layout.events().shapes() {
            let event = shape.event();
            let category = event.category().and_then(|name| document.category(name));
            let fill = event
                .color()
                .or_else(|| category.and_then(|category| category.color()))
                .unwrap_or(self.palette.default_event);
            let text_color = category
                .and_then(|category| category.font_color())
                .unwrap_or(self.palette.text);

            let bounds = shape.bounds();
            self.push(
                Role::EventRect {
                    shape: shape.id(),
                    category: event.category().map(str::to_string),
                    milestone: event.is_milestone(),
                },
                Primitive::Rect {
                    bounds,
                    fill,
                    stroke: Some(StrokeDefinition::solid(
                        self.palette.event_stroke,
                        EVENT_STROKE_WIDTH,
                    )),
                },
            );

            let baseline = bounds.min_y()
                + bounds.height() / 2.0
                + shape.label_size().height() * EVENT_LABEL_BASELINE;
            let style = self.palette.text(EVENT_FONT_SIZE, text_color);
            self.push(
                Role::EventLabel { shape: shape.id() },
                Primitive::Label {
                    position: Point::new(bounds.min_x() + EVENT_LABEL_INSET, baseline),
                    text: event.label().to_string(),
                    style,
                },
            );
        }
    }

    fn fine_axis(&mut self) {
        let layout = self.layout;
        let centerline = layout.centerline();

        for tick in layout.ticks() {
            let stroke = StrokeDefinition::dotted(self.palette.gridline, 1.0);
            self.vertical_line(Role::Gridline, tick.x(), stroke);

            let mut style = self.palette.text(TICK_FONT_SIZE, self.palette.text);
            if tick.emphasized() {
                style.set_font_weight(FontWeight::Bold);
            }
            self.push(
                Role::TickLabel {
                    emphasized: tick.emphasized(),
                },
                Primitive::Label {
                    position: Point::new(tick.x(), centerline).add_point(TICK_LABEL_OFFSET),
                    text: tick.label().to_string(),
                    style,
                },
            );
        }
    }

    fn week_axis(&mut self) {
        let layout = self.layout;
        for week in layout.weeks() {
            let index = week.index();
            let stroke = StrokeDefinition::solid(self.palette.week_boundary, WEEK_BOUNDARY_WIDTH);
            self.vertical_line(Role::WeekBoundary { week: index }, week.x(), stroke);

            let style = self.palette.text(WEEK_FONT_SIZE, self.palette.text);
            self.push(
                Role::WeekLabel { week: index },
                Primitive::Label {
                    position: Point::new(week.x() + WEEK_LABEL_INSET, WEEK_LABEL_POSITION_Y),
                    text: week.label().to_string(),
                    style,
                },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use float_cmp::assert_approx_eq;

    use chronoline_core::{
        document::{Category, Era, Event, Instant, TimelineDocument, ViewWindow},
        measure::FixedMetrics,
    };

    use super::*;
    use crate::config::LayoutConfig;

    fn day(d: u32) -> Instant {
        NaiveDate::from_ymd_opt(2025, 6, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn document() -> TimelineDocument {
        let red = Color::from_rgb8(255, 0, 0);
        let white = Color::from_rgb8(255, 255, 255);
        TimelineDocument::new()
            .with_view(ViewWindow::new(Some(day(1)), Some(day(7))))
            .with_era(Era::new(Some(day(2)), Some(day(4))).with_name("Launch"))
            .with_category("ops", Category::new(Some(red)).with_font_color(white))
            .with_event(Event::new(day(2)).with_text("Deploy").with_category("ops"))
            .with_event(Event::new(day(5)).with_text("Retro"))
    }

    fn build(document: &TimelineDocument) -> Scene {
        let layout = TimelineLayout::compute(
            document,
            &LayoutConfig::default(),
            FixedMetrics::default(),
            day(1),
            &[],
        )
        .unwrap();
        Scene::build(&layout, &StyleConfig::default()).unwrap()
    }

    fn roles(scene: &Scene) -> Vec<&Role> {
        scene.items().iter().map(SceneItem::role).collect()
    }

    #[test]
    fn test_draw_order() {
        let document = document();
        let scene = build(&document);
        let roles = roles(&scene);

        let position = |wanted: fn(&Role) -> bool| roles.iter().position(|role| wanted(*role)).unwrap();
        let background = position(|r| matches!(r, Role::Background));
        let era = position(|r| matches!(r, Role::EraBand { .. }));
        let centerline = position(|r| matches!(r, Role::Centerline));
        let event = position(|r| matches!(r, Role::EventRect { .. }));
        let grid = position(|r| matches!(r, Role::Gridline));
        let week = position(|r| matches!(r, Role::WeekBoundary { .. }));

        assert!(background < era);
        assert!(era < centerline);
        assert!(centerline < event);
        assert!(event < grid);
        assert!(grid < week);
    }

    #[test]
    fn test_event_colors() {
        let document = document();
        let scene = build(&document);

        let fills: Vec<Color> = scene
            .items()
            .iter()
            .filter_map(|item| match (item.role(), item.primitive()) {
                (Role::EventRect { .. }, Primitive::Rect { fill, .. }) => Some(*fill),
                _ => None,
            })
            .collect();
        assert_eq!(fills, vec![Color::from_rgb8(255, 0, 0), Color::new("#ccc").unwrap()]);

        let label_colors: Vec<Option<Color>> = scene
            .items()
            .iter()
            .filter_map(|item| match (item.role(), item.primitive()) {
                (Role::EventLabel { .. }, Primitive::Label { style, .. }) => {
                    Some(style.color().copied())
                }
                _ => None,
            })
            .collect();
        assert_eq!(
            label_colors,
            vec![Some(Color::from_rgb8(255, 255, 255)), Some(Color::default())]
        );
    }

    #[test]
    fn test_era_primitives() {
        let document = document();
        let scene = build(&document);

        let era_items: Vec<&SceneItem> = scene
            .items()
            .iter()
            .filter(|item| item.layer() == RenderLayer::Era || matches!(item.role(), Role::EraLabel { .. }))
            .collect();
        assert_eq!(era_items.len(), 4);

        let Primitive::Rect { bounds, fill, .. } = era_items[0].primitive() else {
            panic!("expected era band rectangle");
        };
        assert_approx_eq!(f32, bounds.height(), 800.0);
        assert_approx_eq!(f32, fill.alpha(), ERA_ALPHA);

        let Primitive::Label { position, text, .. } = era_items[1].primitive() else {
            panic!("expected era label");
        };
        assert_eq!(text, "Launch");
        assert_approx_eq!(f32, position.x(), bounds.min_x() + 10.0);
        assert_approx_eq!(f32, position.y(), 345.0);
    }

    #[test]
    fn test_weekend_tick_labels_are_bold() {
        let document = document();
        let scene = build(&document);

        // 2025-06-01 is a Sunday and the window uses a daily step.
        let weights: Vec<FontWeight> = scene
            .items()
            .iter()
            .filter_map(|item| match item.primitive() {
                Primitive::Label { style, .. } if matches!(item.role(), Role::TickLabel { .. }) => {
                    Some(style.font_weight())
                }
                _ => None,
            })
            .collect();
        assert_eq!(weights.len(), 7);
        assert_eq!(weights[0], FontWeight::Bold);
        assert_eq!(weights[1], FontWeight::Normal);
        assert_eq!(weights[6], FontWeight::Bold);
    }

    #[test]
    fn test_items_for_shape() {
        let document = document();
        let scene = build(&document);
        let layout_shape = scene
            .items()
            .iter()
            .find_map(|item| item.role().shape())
            .unwrap();

        assert_eq!(scene.items_for_shape(layout_shape).count(), 2);
    }

    #[test]
    fn test_invalid_style_is_config_error() {
        let document = document();
        let layout = TimelineLayout::compute(
            &document,
            &LayoutConfig::default(),
            FixedMetrics::default(),
            day(1),
            &[],
        )
        .unwrap();
        let style: StyleConfig = serde_json::from_str(r#"{"background_color": "nope"}"#).unwrap();
        assert!(matches!(
            Scene::build(&layout, &style),
            Err(ChronolineError::Config(_))
        ));
    }
}
