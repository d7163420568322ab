//! The inspector panel: glyph metadata fields, transform actions, and the
//! layer list.

use druid::text::format::ParseFormatter;
use druid::widget::prelude::*;
use druid::widget::{
    Button, Checkbox, Controller, CrossAxisAlignment, Either, Flex, Label, List, TextBox,
};
use druid::{Lens, LensExt, WidgetExt};

use crate::consts::cmd;
use crate::data::{GlyphDetail, Layer, Sidebearings, TransformState, Workspace};
use crate::formatters::{CodepointFormatter, GlyphNameFormatter};
use crate::theme;
use crate::widgets::{AlignmentPicker, ColorWell, Maybe};

const LABEL_WIDTH: f64 = 56.0;
const NUMBER_FIELD_WIDTH: f64 = 56.0;
const ACTION_BUTTON_WIDTH: f64 = 64.0;
const PICKER_SIDE: f64 = 48.0;

pub struct InspectorPanel;

impl InspectorPanel {
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> impl Widget<Workspace> {
        build_widget().controller(PanelController)
    }
}

/// Applies host commands to the panel's data, and keeps mouse clicks from
/// falling through to whatever the panel is drawn over.
struct PanelController;

impl<W: Widget<Workspace>> Controller<Workspace, W> for PanelController {
    fn event(
        &mut self,
        child: &mut W,
        ctx: &mut EventCtx,
        event: &Event,
        data: &mut Workspace,
        env: &Env,
    ) {
        match event {
            Event::Command(command) if command.is(cmd::SET_GLYPH) => {
                data.selected = command.get_unchecked(cmd::SET_GLYPH).clone();
                ctx.set_handled();
            }
            Event::Command(command) if command.is(cmd::SET_LAYERS) => {
                data.layers = command.get_unchecked(cmd::SET_LAYERS).clone();
                ctx.set_handled();
            }
            _ => child.event(ctx, event, data, env),
        }
        if matches!(event, Event::MouseDown(_) | Event::MouseUp(_)) {
            ctx.set_handled();
        }
    }
}

fn build_widget() -> impl Widget<Workspace> {
    Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(section_header("Glyph"))
        .with_child(Maybe::new(glyph_section, no_glyph_placeholder).lens(Workspace::selected))
        .with_default_spacer()
        .with_child(section_header("Transform"))
        .with_child(transform_section())
        .with_default_spacer()
        .with_child(section_header("Layers"))
        .with_child(layer_section())
        .padding(8.0)
        .background(theme::PANEL_BACKGROUND)
}

fn section_header<T: Data>(text: &str) -> impl Widget<T> {
    Label::new(text)
        .with_font(theme::UI_DETAIL_FONT)
        .with_text_color(theme::SECONDARY_TEXT_COLOR)
        .padding((0.0, 4.0))
}

fn field_label<T: Data>(text: &str) -> impl Widget<T> {
    Label::new(text)
        .with_font(theme::UI_DETAIL_FONT)
        .with_text_color(theme::SECONDARY_TEXT_COLOR)
        .fix_width(LABEL_WIDTH)
}

fn no_glyph_placeholder() -> impl Widget<()> {
    Label::new("no glyph selected")
        .with_font(theme::UI_DETAIL_FONT)
        .with_text_color(theme::SECONDARY_TEXT_COLOR)
        .padding((0.0, 4.0))
}

fn glyph_section() -> impl Widget<GlyphDetail> {
    Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(
            Flex::row()
                .cross_axis_alignment(CrossAxisAlignment::Baseline)
                .with_child(field_label("Name:"))
                .with_flex_child(
                    TextBox::new()
                        .with_formatter(GlyphNameFormatter)
                        .lens(GlyphDetail::name)
                        .expand_width(),
                    1.0,
                ),
        )
        .with_child(
            Flex::row()
                .cross_axis_alignment(CrossAxisAlignment::Baseline)
                .with_child(field_label("Unicode:"))
                .with_flex_child(
                    TextBox::new()
                        .with_formatter(CodepointFormatter)
                        .lens(GlyphDetail::codepoints)
                        .expand_width(),
                    1.0,
                ),
        )
        .with_child(
            Flex::row()
                .cross_axis_alignment(CrossAxisAlignment::Baseline)
                .with_child(field_label("Width:"))
                .with_child(
                    TextBox::new()
                        .with_formatter(ParseFormatter::new())
                        .lens(GlyphDetail::advance)
                        .fix_width(NUMBER_FIELD_WIDTH),
                ),
        )
        .with_child(
            Flex::row()
                .cross_axis_alignment(CrossAxisAlignment::Baseline)
                .with_child(field_label("Left:"))
                .with_child(
                    TextBox::new()
                        .with_formatter(ParseFormatter::new())
                        .lens(GlyphDetail::sidebearings.then(Sidebearings::left))
                        .fix_width(NUMBER_FIELD_WIDTH),
                )
                .with_child(field_label("Right:"))
                .with_child(
                    TextBox::new()
                        .with_formatter(ParseFormatter::new())
                        .lens(GlyphDetail::sidebearings.then(Sidebearings::right))
                        .fix_width(NUMBER_FIELD_WIDTH),
                ),
        )
        .with_child(
            Flex::row()
                .with_child(field_label("Flag:"))
                .with_child(ColorWell::new().lens(GlyphDetail::mark))
                .padding((0.0, 2.0)),
        )
}

fn transform_section() -> impl Widget<Workspace> {
    let picker_row = Flex::row()
        .with_child(
            AlignmentPicker::new()
                .lens(Workspace::transform.then(TransformState::anchor))
                .fix_size(PICKER_SIDE, PICKER_SIDE),
        )
        .with_default_spacer()
        .with_child(Button::new("Flip H").on_click(|_, data: &mut Workspace, _| {
            data.flip_selected_horizontal();
        }))
        .with_default_spacer()
        .with_child(Button::new("Flip V").on_click(|_, data: &mut Workspace, _| {
            data.flip_selected_vertical();
        }));

    Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(picker_row)
        .with_default_spacer()
        .with_child(move_row())
        .with_child(scale_row())
        .with_child(rotate_row())
        .with_child(skew_row())
        .with_child(snap_row())
}

fn action_button(
    text: &'static str,
    action: impl Fn(&mut Workspace) + 'static,
) -> impl Widget<Workspace> {
    Button::new(text)
        .on_click(move |_, data: &mut Workspace, _| action(data))
        .fix_width(ACTION_BUTTON_WIDTH)
}

fn number_field<L>(lens: L) -> impl Widget<Workspace>
where
    L: Lens<Workspace, f64> + 'static,
{
    TextBox::new()
        .with_formatter(ParseFormatter::new())
        .lens(lens)
        .fix_width(NUMBER_FIELD_WIDTH)
}

/// A numeric field that, while its pair is locked together, shows the other
/// field's value as static text instead.
fn locked_field<L>(
    locked: impl Fn(&Workspace, &Env) -> bool + 'static,
    mirrored: impl Fn(&Workspace) -> f64 + 'static,
    lens: L,
) -> impl Widget<Workspace>
where
    L: Lens<Workspace, f64> + 'static,
{
    Either::new(
        locked,
        Label::dynamic(move |data: &Workspace, _| mirrored(data).to_string())
            .with_font(theme::UI_DETAIL_FONT)
            .with_text_color(theme::SECONDARY_TEXT_COLOR)
            .fix_width(NUMBER_FIELD_WIDTH),
        number_field(lens),
    )
}

fn move_row() -> impl Widget<Workspace> {
    Flex::row()
        .cross_axis_alignment(CrossAxisAlignment::Baseline)
        .with_child(action_button("Move", Workspace::nudge_selected))
        .with_child(field_label("x:"))
        .with_child(number_field(
            Workspace::transform.then(TransformState::move_x),
        ))
        .with_child(field_label("y:"))
        .with_child(locked_field(
            |data, _| data.transform.uniform_move,
            |data| data.transform.move_x,
            Workspace::transform.then(TransformState::move_y),
        ))
        .with_default_spacer()
        .with_child(Checkbox::new("x=y").lens(Workspace::transform.then(TransformState::uniform_move)))
}

fn scale_row() -> impl Widget<Workspace> {
    Flex::row()
        .cross_axis_alignment(CrossAxisAlignment::Baseline)
        .with_child(action_button("Scale", Workspace::scale_selected))
        .with_child(field_label("x%:"))
        .with_child(number_field(
            Workspace::transform.then(TransformState::scale_x),
        ))
        .with_child(field_label("y%:"))
        .with_child(locked_field(
            |data, _| data.transform.uniform_scale,
            |data| data.transform.scale_x,
            Workspace::transform.then(TransformState::scale_y),
        ))
        .with_default_spacer()
        .with_child(
            Checkbox::new("x=y").lens(Workspace::transform.then(TransformState::uniform_scale)),
        )
}

fn rotate_row() -> impl Widget<Workspace> {
    Flex::row()
        .cross_axis_alignment(CrossAxisAlignment::Baseline)
        .with_child(action_button("Rotate", Workspace::rotate_selected))
        .with_child(field_label("α:"))
        .with_child(number_field(
            Workspace::transform.then(TransformState::rotate),
        ))
}

fn skew_row() -> impl Widget<Workspace> {
    Flex::row()
        .cross_axis_alignment(CrossAxisAlignment::Baseline)
        .with_child(action_button("Skew", Workspace::skew_selected))
        .with_child(field_label("α:"))
        .with_child(number_field(
            Workspace::transform.then(TransformState::skew_x),
        ))
        .with_child(field_label("β:"))
        .with_child(locked_field(
            |data, _| data.transform.uniform_skew,
            |data| data.transform.skew_x,
            Workspace::transform.then(TransformState::skew_y),
        ))
        .with_default_spacer()
        .with_child(
            Checkbox::new("α=β").lens(Workspace::transform.then(TransformState::uniform_skew)),
        )
}

fn snap_row() -> impl Widget<Workspace> {
    Flex::row()
        .cross_axis_alignment(CrossAxisAlignment::Baseline)
        .with_child(action_button("Snap", Workspace::snap_selected))
        .with_child(field_label("grid:"))
        .with_child(number_field(
            Workspace::transform.then(TransformState::snap_grid),
        ))
}

fn layer_section() -> impl Widget<Workspace> {
    Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(List::new(layer_row).lens(Workspace::layers))
}

fn layer_row() -> impl Widget<Layer> {
    Flex::row()
        .with_flex_child(
            Label::dynamic(|layer: &Layer, _| layer.name.to_string())
                .with_font(theme::UI_DETAIL_FONT)
                .expand_width(),
            1.0,
        )
        .with_child(ColorWell::new().may_clear(false).lens(Layer::color))
        .padding((0.0, 2.0))
}
