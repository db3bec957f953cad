use shared::MessageSlot;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MessageBannerProps {
    pub slot: MessageSlot,
}

#[function_component(MessageBanner)]
pub fn message_banner(props: &MessageBannerProps) -> Html {
    let text = props
        .slot
        .message()
        .map(|m| m.text.clone())
        .unwrap_or_default();

    html! {
        <div id="message" class={props.slot.class()}>{ text }</div>
    }
}
