use shared::view::SELECT_PLACEHOLDER;
use shared::SignupForm as FormValues;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SignupFormProps {
    /// Activity names for the selector, in catalog order.
    pub options: Vec<String>,
    pub values: FormValues,
    pub on_change: Callback<FormValues>,
    pub on_submit: Callback<FormValues>,
}

/// Controlled signup form. The owner decides when the fields are cleared.
#[function_component(SignupForm)]
pub fn signup_form(props: &SignupFormProps) -> Html {
    let values = &props.values;

    let on_activity_change = {
        let values = values.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let Some(select) = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
            else {
                return;
            };
            let mut next = values.clone();
            next.activity = select.value();
            on_change.emit(next);
        })
    };

    let on_email_input = {
        let values = values.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = values.clone();
            next.email = input.value();
            on_change.emit(next);
        })
    };

    let on_submit = {
        let values = values.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(values.clone());
        })
    };

    html! {
        <form id="signup-form" onsubmit={on_submit}>
            <div class="form-group">
                <label for="email">{ "Student Email:" }</label>
                <input
                    type="email"
                    id="email"
                    required=true
                    placeholder="your-email@mergington.edu"
                    value={values.email.clone()}
                    oninput={on_email_input}
                />
            </div>
            <div class="form-group">
                <label for="activity">{ "Select Activity:" }</label>
                <select id="activity" required=true onchange={on_activity_change}>
                    <option value="" selected={values.activity.is_empty()}>{ SELECT_PLACEHOLDER }</option>
                    { for props.options.iter().map(|name| html! {
                        <option value={name.clone()} selected={values.activity == *name}>
                            { name }
                        </option>
                    })}
                </select>
            </div>
            <button type="submit">{ "Sign Up" }</button>
        </form>
    }
}
