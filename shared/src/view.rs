//! View models for the board, built from the catalog on every render.

use crate::display::participant_display_name;
use crate::error::{ClientResult, LOAD_FAILED_MESSAGE};
use crate::models::{Activity, ActivityCatalog};

pub const LOADING_MESSAGE: &str = "Loading activities...";
pub const NO_PARTICIPANTS_MESSAGE: &str = "No participants yet";
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantPill {
    /// Render key, unique within the card even if an email repeats.
    pub key: String,
    pub activity: String,
    pub email: String,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<ParticipantPill>,
}

impl ActivityCard {
    pub fn new(name: &str, activity: &Activity) -> Self {
        let participants = activity
            .participants
            .iter()
            .enumerate()
            .map(|(position, email)| ParticipantPill {
                key: format!("{}:{}", position, email),
                activity: name.to_string(),
                email: email.clone(),
                display_name: participant_display_name(Some(email)),
            })
            .collect();

        Self {
            name: name.to_string(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            spots_left: activity.spots_left(),
            participants,
        }
    }

    pub fn availability(&self) -> String {
        format!("{} spots left", self.spots_left)
    }
}

/// Cards in catalog order.
pub fn activity_cards(catalog: &ActivityCatalog) -> Vec<ActivityCard> {
    catalog
        .iter()
        .map(|(name, activity)| ActivityCard::new(name, activity))
        .collect()
}

/// What the list area currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListState {
    #[default]
    Loading,
    Loaded(ActivityCatalog),
    Failed,
}

/// The list area and the activity selector.
///
/// A successful load replaces both. A failed load replaces only the list;
/// the selector keeps whatever options it had.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardState {
    pub list: ListState,
    pub options: Vec<String>,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply_load(&mut self, result: ClientResult<ActivityCatalog>) {
        match result {
            Ok(catalog) => {
                self.options = catalog.names().map(str::to_string).collect();
                self.list = ListState::Loaded(catalog);
            }
            Err(_) => {
                self.list = ListState::Failed;
            }
        }
    }

    pub fn cards(&self) -> Vec<ActivityCard> {
        match &self.list {
            ListState::Loaded(catalog) => activity_cards(catalog),
            ListState::Loading | ListState::Failed => Vec::new(),
        }
    }

    /// Text shown in place of the cards, if any.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self.list {
            ListState::Loading => Some(LOADING_MESSAGE),
            ListState::Failed => Some(LOAD_FAILED_MESSAGE),
            ListState::Loaded(_) => None,
        }
    }
}

/// Values entered in the signup form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub activity: String,
    pub email: String,
}

impl SignupForm {
    pub fn reset(&mut self) {
        self.activity.clear();
        self.email.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;

    fn catalog() -> ActivityCatalog {
        serde_json::from_str(
            r#"{
                "Chess Club": {
                    "description": "Learn strategies",
                    "schedule": "Fridays",
                    "max_participants": 2,
                    "participants": ["jane.doe@mergington.edu"]
                },
                "Gym Class": {
                    "description": "Physical education",
                    "schedule": "Mondays",
                    "max_participants": 0,
                    "participants": ["a_b-c@x.com"]
                },
                "Drama": {
                    "description": "Acting",
                    "schedule": "Tuesdays",
                    "max_participants": 5,
                    "participants": []
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_cards_follow_catalog_order() {
        let cards = activity_cards(&catalog());
        let names: Vec<&str> = cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Chess Club", "Gym Class", "Drama"]);
    }

    #[test]
    fn test_card_contents() {
        let cards = activity_cards(&catalog());
        let chess = &cards[0];
        assert_eq!(chess.availability(), "1 spots left");
        assert_eq!(
            chess.participants,
            vec![ParticipantPill {
                key: "0:jane.doe@mergington.edu".to_string(),
                activity: "Chess Club".to_string(),
                email: "jane.doe@mergington.edu".to_string(),
                display_name: "Jane Doe".to_string(),
            }]
        );

        let gym = &cards[1];
        assert_eq!(gym.spots_left, -1);
        assert_eq!(gym.availability(), "-1 spots left");
        assert_eq!(gym.participants[0].display_name, "A B C");

        assert!(cards[2].participants.is_empty());
    }

    #[test]
    fn test_duplicate_participants_get_distinct_keys() {
        let activity = Activity {
            description: "d".to_string(),
            schedule: "s".to_string(),
            max_participants: 3,
            participants: vec!["a@b.com".to_string(), "a@b.com".to_string()],
        };
        let card = ActivityCard::new("Chess Club", &activity);
        assert_eq!(card.participants.len(), 2);
        assert_ne!(card.participants[0].key, card.participants[1].key);
        assert_eq!(card.participants[1].email, "a@b.com");
    }

    #[test]
    fn test_board_starts_loading() {
        let board = BoardState::new();
        assert_eq!(board.placeholder(), Some(LOADING_MESSAGE));
        assert!(board.cards().is_empty());
        assert!(board.options.is_empty());
    }

    #[test]
    fn test_successful_load_replaces_list_and_options() {
        let mut board = BoardState::new();
        board.apply_load(Ok(catalog()));
        assert_eq!(board.placeholder(), None);
        assert_eq!(board.cards().len(), 3);
        assert_eq!(board.options, vec!["Chess Club", "Gym Class", "Drama"]);

        let smaller: ActivityCatalog = serde_json::from_str(
            r#"{"Drama": {"description": "Acting", "schedule": "Tuesdays", "max_participants": 5}}"#,
        )
        .unwrap();
        board.apply_load(Ok(smaller));
        assert_eq!(board.cards().len(), 1);
        assert_eq!(board.options, vec!["Drama"]);
    }

    #[test]
    fn test_failed_load_keeps_options() {
        let mut board = BoardState::new();
        board.apply_load(Ok(catalog()));
        board.apply_load(Err(ClientError::Network("offline".to_string())));

        assert_eq!(board.list, ListState::Failed);
        assert_eq!(board.placeholder(), Some(LOAD_FAILED_MESSAGE));
        assert!(board.cards().is_empty());
        assert_eq!(board.options, vec!["Chess Club", "Gym Class", "Drama"]);
    }

    #[test]
    fn test_signup_form_reset() {
        let mut form = SignupForm {
            activity: "Chess Club".to_string(),
            email: "a@b.com".to_string(),
        };
        form.reset();
        assert_eq!(form, SignupForm::default());
    }
}
