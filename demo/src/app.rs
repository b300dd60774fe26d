use gloo_console::{log, warn};
use imagedrop::{Imagedrop, WidgetNotice};
use yew::prelude::*;

/// Demo host page: wires the widget to the external hidden fields it reads
/// and writes, and logs notices instead of alerting.
pub struct App {
    token_field_ref: NodeRef,
    file_name_field_ref: NodeRef,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            token_field_ref: NodeRef::default(),
            file_name_field_ref: NodeRef::default(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let on_notice =
            Callback::from(|notice: WidgetNotice| warn!(notice.to_string()));
        let on_content_size_changed =
            Callback::from(|_| log!("imagedrop content size changed"));

        html! {
            <div class="content-main">
                <input
                    type="hidden"
                    name="__RequestVerificationToken"
                    value="demo-token"
                    ref={self.token_field_ref.clone()}
                />
                <input type="hidden" id="fileName" ref={self.file_name_field_ref.clone()} />
                <Imagedrop
                    authorized_to_edit=true
                    upload_url="/api/images/upload"
                    directory_path="/images"
                    transaction_field_name="transactionId"
                    transaction_id={1}
                    token_field_ref={self.token_field_ref.clone()}
                    file_name_field_ref={self.file_name_field_ref.clone()}
                    {on_notice}
                    {on_content_size_changed}
                />
            </div>
        }
    }
}
