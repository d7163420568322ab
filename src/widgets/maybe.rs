//! A widget for `Option<T>` data.

use druid::widget::prelude::*;
use druid::widget::SizedBox;
use druid::{Data, WidgetPod};

/// A widget that switches between two children depending on whether its
/// data is `Some` or `None`.
pub struct Maybe<T> {
    some_maker: Box<dyn Fn() -> Box<dyn Widget<T>>>,
    none_maker: Box<dyn Fn() -> Box<dyn Widget<()>>>,
    widget: MaybeWidget<T>,
}

enum MaybeWidget<T> {
    Some(WidgetPod<T, Box<dyn Widget<T>>>),
    None(WidgetPod<(), Box<dyn Widget<()>>>),
}

impl<T: Data> Maybe<T> {
    pub fn new<W1, W2>(
        some_maker: impl Fn() -> W1 + 'static,
        none_maker: impl Fn() -> W2 + 'static,
    ) -> Maybe<T>
    where
        W1: Widget<T> + 'static,
        W2: Widget<()> + 'static,
    {
        Maybe {
            some_maker: Box::new(move || Box::new(some_maker())),
            none_maker: Box::new(move || Box::new(none_maker())),
            widget: MaybeWidget::None(WidgetPod::new(Box::new(SizedBox::empty()))),
        }
    }

    fn rebuild_widget(&mut self, is_some: bool) {
        self.widget = if is_some {
            MaybeWidget::Some(WidgetPod::new((self.some_maker)()))
        } else {
            MaybeWidget::None(WidgetPod::new((self.none_maker)()))
        };
    }

    fn matches_data(&self, data: &Option<T>) -> bool {
        data.is_some() == matches!(self.widget, MaybeWidget::Some(_))
    }
}

impl<T: Data> Widget<Option<T>> for Maybe<T> {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut Option<T>, env: &Env) {
        match (&mut self.widget, data.as_mut()) {
            (MaybeWidget::Some(widget), Some(data)) => widget.event(ctx, event, data, env),
            (MaybeWidget::None(widget), None) => widget.event(ctx, event, &mut (), env),
            _ => (),
        }
    }

    fn lifecycle(&mut self, ctx: &mut LifeCycleCtx, event: &LifeCycle, data: &Option<T>, env: &Env) {
        if let LifeCycle::WidgetAdded = event {
            if !self.matches_data(data) {
                self.rebuild_widget(data.is_some());
            }
        }
        match (&mut self.widget, data.as_ref()) {
            (MaybeWidget::Some(widget), Some(data)) => widget.lifecycle(ctx, event, data, env),
            (MaybeWidget::None(widget), None) => widget.lifecycle(ctx, event, &(), env),
            _ => (),
        }
    }

    fn update(&mut self, ctx: &mut UpdateCtx, old_data: &Option<T>, data: &Option<T>, env: &Env) {
        if old_data.is_some() != data.is_some() {
            self.rebuild_widget(data.is_some());
            ctx.children_changed();
        } else {
            match (&mut self.widget, data.as_ref()) {
                (MaybeWidget::Some(widget), Some(data)) => widget.update(ctx, data, env),
                (MaybeWidget::None(widget), None) => widget.update(ctx, &(), env),
                _ => (),
            }
        }
    }

    fn layout(
        &mut self,
        ctx: &mut LayoutCtx,
        bc: &BoxConstraints,
        data: &Option<T>,
        env: &Env,
    ) -> Size {
        match (&mut self.widget, data.as_ref()) {
            (MaybeWidget::Some(widget), Some(data)) => {
                let size = widget.layout(ctx, bc, data, env);
                widget.set_layout_rect(ctx, data, env, size.to_rect());
                size
            }
            (MaybeWidget::None(widget), None) => {
                let size = widget.layout(ctx, bc, &(), env);
                widget.set_layout_rect(ctx, &(), env, size.to_rect());
                size
            }
            _ => Size::ZERO,
        }
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &Option<T>, env: &Env) {
        match (&mut self.widget, data.as_ref()) {
            (MaybeWidget::Some(widget), Some(data)) => widget.paint(ctx, data, env),
            (MaybeWidget::None(widget), None) => widget.paint(ctx, &(), env),
            _ => (),
        }
    }
}
