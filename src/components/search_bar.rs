use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub query: String,
    pub on_change: Callback<String>,
    #[prop_or("Search...".to_string())]
    pub placeholder: String,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let input_ref = use_node_ref();

    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_change.emit(input.value());
            }
        })
    };

    // Clear and keep the cursor in the field
    let onclear = {
        let on_change = props.on_change.clone();
        let input_ref = input_ref.clone();
        Callback::from(move |_| {
            on_change.emit(String::new());
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                let _ = input.focus();
            }
        })
    };

    html! {
        <div class="search-bar">
            <input
                ref={input_ref}
                type="text"
                value={props.query.clone()}
                placeholder={props.placeholder.clone()}
                oninput={oninput}
            />
            if !props.query.is_empty() {
                <button type="button" class="search-clear" onclick={onclear}>{"✕"}</button>
            }
        </div>
    }
}
