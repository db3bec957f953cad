use shared::{BoardState, ParticipantPill};
use yew::prelude::*;

use crate::components::activity_card::ActivityCard;

#[derive(Properties, PartialEq)]
pub struct ActivityListProps {
    pub board: BoardState,
    pub on_unregister: Callback<ParticipantPill>,
}

#[function_component(ActivityList)]
pub fn activity_list(props: &ActivityListProps) -> Html {
    if let Some(text) = props.board.placeholder() {
        return html! {
            <div id="activities-list">
                <p>{ text }</p>
            </div>
        };
    }

    html! {
        <div id="activities-list">
            { for props.board.cards().into_iter().map(|card| {
                let key = card.name.clone();
                html! {
                    <ActivityCard
                        key={key}
                        card={card}
                        on_unregister={props.on_unregister.clone()}
                    />
                }
            })}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use shared::ActivityCatalog;
    use yew::ServerRenderer;

    fn loaded(json: &'static str) -> ActivityListProps {
        let catalog: ActivityCatalog = serde_json::from_str(json).unwrap();
        let mut board = BoardState::new();
        board.apply_load(Ok(catalog));
        ActivityListProps {
            board,
            on_unregister: Callback::noop(),
        }
    }

    #[tokio::test]
    async fn test_renders_every_card_and_pill() {
        let html = ServerRenderer::<ActivityList>::with_props(|| {
            loaded(
                r#"{
                    "Chess Club": {
                        "description": "Learn strategies",
                        "schedule": "Fridays",
                        "max_participants": 1,
                        "participants": ["a@b.com", "a@b.com"]
                    },
                    "Drama": {
                        "description": "Acting",
                        "schedule": "Tuesdays",
                        "max_participants": 5,
                        "participants": []
                    }
                }"#,
            )
        })
        .render()
        .await;

        assert!(html.contains("Chess Club"));
        assert!(html.contains("Drama"));
        assert!(html.contains("-1 spots left"));
        assert!(html.contains("No participants yet"));
        assert_eq!(html.matches("class=\"participant-pill\"").count(), 2);
        assert_eq!(html.matches("data-email=\"a@b.com\"").count(), 2);
        assert!(html.contains("data-activity=\"Chess Club\""));
    }

    #[tokio::test]
    async fn test_renders_loading_placeholder() {
        let html = ServerRenderer::<ActivityList>::with_props(|| ActivityListProps {
            board: BoardState::new(),
            on_unregister: Callback::noop(),
        })
        .render()
        .await;

        assert!(html.contains("Loading activities..."));
        assert!(!html.contains("activity-card"));
    }
}
