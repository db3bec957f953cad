use shared::view::NO_PARTICIPANTS_MESSAGE;
use shared::{ActivityCard as CardModel, ParticipantPill};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ParticipantItemProps {
    pub pill: ParticipantPill,
    pub on_unregister: Callback<ParticipantPill>,
}

/// One participant with its removal control. The click handler is bound when
/// the pill is created, so pills from any later render work the same way.
#[function_component(ParticipantItem)]
pub fn participant_item(props: &ParticipantItemProps) -> Html {
    let pill = &props.pill;

    let remove = {
        let pill = pill.clone();
        let on_unregister = props.on_unregister.clone();
        Callback::from(move |_: MouseEvent| on_unregister.emit(pill.clone()))
    };

    html! {
        <li>
            <span class="participant-pill">
                { &pill.display_name }
                <small class="participant-email">{ format!("({})", pill.email) }</small>
                <button
                    type="button"
                    class="delete-btn"
                    title="Unregister"
                    data-activity={pill.activity.clone()}
                    data-email={pill.email.clone()}
                    onclick={remove}
                >
                    <i class="fas fa-times"></i>
                </button>
            </span>
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub struct ActivityCardProps {
    pub card: CardModel,
    pub on_unregister: Callback<ParticipantPill>,
}

#[function_component(ActivityCard)]
pub fn activity_card(props: &ActivityCardProps) -> Html {
    let card = &props.card;

    html! {
        <div class="activity-card">
            <h4>{ &card.name }</h4>
            <p>{ &card.description }</p>
            <p><strong>{ "Schedule:" }</strong>{ " " }{ &card.schedule }</p>
            <p><strong>{ "Availability:" }</strong>{ " " }{ card.availability() }</p>
            <div class="participants">
                <div class="participants-title">{ "Participants:" }</div>
                if card.participants.is_empty() {
                    <div class="participants-empty">{ NO_PARTICIPANTS_MESSAGE }</div>
                } else {
                    <ul class="participants-list">
                        { for card.participants.iter().map(|pill| html! {
                            <ParticipantItem
                                key={pill.key.clone()}
                                pill={pill.clone()}
                                on_unregister={props.on_unregister.clone()}
                            />
                        })}
                    </ul>
                }
            </div>
        </div>
    }
}
