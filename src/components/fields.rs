use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::icon::{Icon, IconView};

fn field_error(error: &Option<AttrValue>) -> Html {
    match error {
        Some(message) => html! { <p class="field-error" role="alert">{ message.clone() }</p> },
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
pub struct TextInputProps {
    pub label: AttrValue,
    pub name: AttrValue,
    pub value: AttrValue,
    #[prop_or(AttrValue::from("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub icon: Option<Icon>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub oninput: Callback<String>,
}

#[function_component(TextInput)]
pub fn text_input(props: &TextInputProps) -> Html {
    let oninput = {
        let cb = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };

    html! {
        <div class="field">
            <label class="field-label" for={props.name.clone()}>{ props.label.clone() }</label>
            <div class={classes!("field-control", props.icon.is_some().then(|| "with-icon"))}>
                if let Some(icon) = props.icon {
                    <IconView {icon} class="field-icon" />
                }
                <input
                    id={props.name.clone()}
                    name={props.name.clone()}
                    type={props.input_type.clone()}
                    class={classes!("field-input", props.error.is_some().then(|| "invalid"))}
                    placeholder={props.placeholder.clone()}
                    value={props.value.clone()}
                    {oninput}
                />
            </div>
            { field_error(&props.error) }
        </div>
    }
}

#[derive(Clone, PartialEq)]
pub struct SelectOption {
    pub value: AttrValue,
    pub label: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct SelectInputProps {
    pub label: AttrValue,
    pub name: AttrValue,
    pub value: AttrValue,
    pub options: Vec<SelectOption>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub onchange: Callback<String>,
}

#[function_component(SelectInput)]
pub fn select_input(props: &SelectInputProps) -> Html {
    let onchange = {
        let cb = props.onchange.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            cb.emit(select.value());
        })
    };

    html! {
        <div class="field">
            <label class="field-label" for={props.name.clone()}>{ props.label.clone() }</label>
            <div class="field-control">
                <select
                    id={props.name.clone()}
                    name={props.name.clone()}
                    class={classes!("field-input", props.error.is_some().then(|| "invalid"))}
                    {onchange}
                >
                    { for props.options.iter().map(|opt| html! {
                        <option value={opt.value.clone()} selected={opt.value == props.value}>
                            { opt.label.clone() }
                        </option>
                    }) }
                </select>
            </div>
            { field_error(&props.error) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextAreaProps {
    pub label: AttrValue,
    pub name: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or(5)]
    pub rows: u32,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub oninput: Callback<String>,
}

#[function_component(TextArea)]
pub fn text_area(props: &TextAreaProps) -> Html {
    let oninput = {
        let cb = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            cb.emit(area.value());
        })
    };

    html! {
        <div class="field">
            <label class="field-label" for={props.name.clone()}>{ props.label.clone() }</label>
            <textarea
                id={props.name.clone()}
                name={props.name.clone()}
                rows={props.rows.to_string()}
                class={classes!("field-input", props.error.is_some().then(|| "invalid"))}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                {oninput}
            />
            { field_error(&props.error) }
        </div>
    }
}

pub const FIELD_CSS: &str = r#"
.field { display: flex; flex-direction: column; gap: 0.5rem; }
.field-label { color: rgba(255, 255, 255, 0.8); font-size: 0.9rem; font-weight: 500; }
.field-control { position: relative; }
.field-icon {
    position: absolute;
    left: 1rem;
    top: 50%;
    transform: translateY(-50%);
    color: rgba(255, 255, 255, 0.4);
}
.field-input {
    width: 100%;
    box-sizing: border-box;
    padding: 0.85rem 1rem;
    border-radius: 12px;
    background: rgba(255, 255, 255, 0.05);
    border: 1px solid rgba(255, 255, 255, 0.1);
    color: #fff;
    font-size: 1rem;
    transition: border-color 0.2s ease;
}
.with-icon .field-input { padding-left: 2.75rem; }
.field-input:focus { outline: none; border-color: #faff01; }
.field-input.invalid { border-color: #f87171; }
select.field-input option { background: #141414; }
.field-error { color: #f87171; font-size: 0.85rem; margin: 0; }
"#;
