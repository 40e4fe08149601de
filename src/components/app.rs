use yew::prelude::*;

use super::map_view::MapView;
use crate::model::MindMap;

#[function_component(App)]
pub fn app() -> Html {
    let map = use_state(MindMap::demo);
    html! { <MapView map={(*map).clone()} /> }
}
