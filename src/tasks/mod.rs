//! Event-loop tasks that drive the widget

pub mod widget_loop;

pub use widget_loop::widget_loop;
