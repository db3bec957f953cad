use std::rc::Rc;

use gloo::timers::callback::Timeout;
use shared::api::{MessageResponse, Mutation};
use shared::{
    ActivityCatalog, BoardConfig, BoardState, ClientResult, LoadSequencer, MessageSlot,
    OutcomePlan, ParticipantPill, SignupForm as FormValues, TransientMessage,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::activity_list::ActivityList;
use crate::components::message_banner::MessageBanner;
use crate::components::signup_form::SignupForm;
use crate::services::api::ApiService;

#[derive(Default, PartialEq)]
struct BoardStore(BoardState);

impl Reducible for BoardStore {
    type Action = ClientResult<ActivityCatalog>;

    fn reduce(self: Rc<Self>, result: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        next.apply_load(result);
        Rc::new(Self(next))
    }
}

#[function_component(Board)]
pub fn board() -> Html {
    let config = use_context::<BoardConfig>().unwrap_or_default();
    let board = use_reducer(BoardStore::default);
    let sequencer = use_mut_ref(LoadSequencer::new);
    // The slot lives outside Yew state: a hide timer must see the generation
    // of the message it was started for, even before the next render.
    let message = use_mut_ref(MessageSlot::new);
    let redraw = use_force_update();
    let form = use_state(FormValues::default);

    let load_catalog = {
        let board = board.dispatcher();
        let sequencer = sequencer.clone();
        let base = config.api_base.clone();
        Callback::from(move |_: ()| {
            let token = sequencer.borrow_mut().issue();
            let board = board.clone();
            let sequencer = sequencer.clone();
            let base = base.clone();
            spawn_local(async move {
                let result = ApiService::list_activities(&base).await;
                if !sequencer.borrow().is_current(token) {
                    return;
                }
                if let Err(e) = &result {
                    tracing::error!("Failed to fetch activities: {}", e);
                }
                board.dispatch(result);
            });
        })
    };

    // Initial load
    {
        let load_catalog = load_catalog.clone();
        use_effect_with((), move |_| {
            load_catalog.emit(());
            || ()
        });
    }

    let show_message = {
        let message = message.clone();
        let redraw = redraw.clone();
        let timeout_ms = config.message_timeout_ms;
        Callback::from(move |next: TransientMessage| {
            let generation = message.borrow_mut().show(next);
            redraw.force_update();

            let message = message.clone();
            let redraw = redraw.clone();
            Timeout::new(timeout_ms, move || {
                if message.borrow_mut().expire(generation) {
                    redraw.force_update();
                }
            })
            .forget();
        })
    };

    let on_result = {
        let load_catalog = load_catalog.clone();
        let form = form.clone();
        Callback::from(
            move |(mutation, outcome): (Mutation, ClientResult<MessageResponse>)| {
                match &outcome {
                    Ok(response) => tracing::info!("{}", response.message),
                    Err(e) if e.is_unexpected() => {
                        tracing::error!("{:?} request failed: {}", mutation, e)
                    }
                    Err(e) => tracing::warn!("{:?} rejected: {}", mutation, e),
                }

                OutcomePlan::new(mutation, &outcome).run(
                    |message| show_message.emit(message),
                    || {
                        let mut cleared = (*form).clone();
                        cleared.reset();
                        form.set(cleared);
                    },
                    || load_catalog.emit(()),
                );
            },
        )
    };

    let on_form_change = {
        let form = form.clone();
        Callback::from(move |values: FormValues| form.set(values))
    };

    let on_signup = {
        let on_result = on_result.clone();
        let base = config.api_base.clone();
        Callback::from(move |values: FormValues| {
            let on_result = on_result.clone();
            let base = base.clone();
            spawn_local(async move {
                tracing::info!(activity = %values.activity, "Submitting signup");
                let outcome =
                    ApiService::mutate(&base, Mutation::Signup, &values.activity, &values.email)
                        .await;
                on_result.emit((Mutation::Signup, outcome));
            });
        })
    };

    let on_unregister = {
        let on_result = on_result.clone();
        let base = config.api_base.clone();
        Callback::from(move |pill: ParticipantPill| {
            let on_result = on_result.clone();
            let base = base.clone();
            spawn_local(async move {
                tracing::info!(activity = %pill.activity, "Submitting unregister");
                let outcome =
                    ApiService::mutate(&base, Mutation::Unregister, &pill.activity, &pill.email)
                        .await;
                on_result.emit((Mutation::Unregister, outcome));
            });
        })
    };

    let slot = message.borrow().clone();

    html! {
        <main class="container">
            <section id="activities-container">
                <h3>{ "Available Activities" }</h3>
                <ActivityList board={board.0.clone()} on_unregister={on_unregister} />
            </section>
            <section id="signup-container">
                <h3>{ "Sign Up for an Activity" }</h3>
                <SignupForm
                    options={board.0.options.clone()}
                    values={(*form).clone()}
                    on_change={on_form_change}
                    on_submit={on_signup}
                />
                <MessageBanner slot={slot} />
            </section>
        </main>
    }
}
