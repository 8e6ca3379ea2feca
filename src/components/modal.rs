use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    pub children: Children,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let onclick = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class="w-screen h-screen fixed left-0 top-0 bg-black bg-opacity-60 z-50 flex items-center justify-center">
            <div class="bg-white p-6 rounded-md relative w-[90%] md:w-[70%] lg:w-[60%] xl:w-[50%] max-h-[90vh] overflow-y-auto">
                <div class="flex items-center justify-between border-b pb-3 mb-4">
                    <h2 class="text-xl font-bold text-gray-800">{ props.title.clone() }</h2>
                    <button class="text-gray-400 hover:text-gray-700 text-lg font-bold" {onclick}>{"✕"}</button>
                </div>
                { for props.children.iter() }
            </div>
        </div>
    }
}
