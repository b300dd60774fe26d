//! Image drop upload widget: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering,
//! and helpers.
//!
//! Responsibilities
//! - Re-export the public surface (`Imagedrop`, `ImagedropProps`, `Msg`,
//!   selection and notice types).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//! - Re-sync the widget configuration when the host changes props.

use yew::prelude::*;

mod helpers;
mod messages;
mod notice;
mod props;
mod selection;
mod state;
mod update;
mod upload;
mod view;

pub use messages::Msg;
pub use notice::WidgetNotice;
pub use props::ImagedropProps;
pub use selection::{SelectedFile, SelectionError};
pub use state::{Imagedrop, WidgetUiState};

impl Component for Imagedrop {
    type Message = Msg;
    type Properties = ImagedropProps;

    fn create(ctx: &Context<Self>) -> Self {
        Imagedrop::new(ctx.props())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.config = state::WidgetConfig::from_props(ctx.props());
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
