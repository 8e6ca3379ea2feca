use web_sys::InputEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TableSearchProps {
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or(AttrValue::Static("Search"))]
    pub placeholder: AttrValue,
}

#[function_component(TableSearch)]
pub fn table_search(props: &TableSearchProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <div class="flex items-center gap-3 self-start">
            <label class="text-white text-sm font-semibold">{"Search:"}</label>
            <input
                type="text"
                class="px-4 py-2 rounded-md border border-gray-300 w-72 text-gray-700 text-sm"
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                {oninput}
            />
        </div>
    }
}
