use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HelpOverlayProps {
    pub show: bool,
    pub title: String,
    pub hide_help: Callback<()>,
}

#[function_component(HelpOverlay)]
pub fn help_overlay(props: &HelpOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let hide_cb = props.hide_help.clone();
    let close_btn = Callback::from(move |_| hide_cb.emit(()));
    html! {
        <div style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(0,0,0,0.87); border:2px solid #30363d; padding:28px 36px; border-radius:14px; max-width:480px; width:90%; box-shadow:0 0 0 1px #1a1f24, 0 6px 18px rgba(0,0,0,0.6); font-size:14px; line-height:1.4;">
            <h2 style="margin:0 0 12px 0; font-size:22px; color:#58a6ff; text-align:center;">{ props.title.clone() }</h2>
            <p style="margin:4px 0 10px 0; text-align:center; opacity:0.85;">{"Explore the map by panning and zooming."}</p>
            <ul style="margin:0 0 12px 18px; padding:0; list-style:disc; display:flex; flex-direction:column; gap:4px;">
                <li>{"Drag with the mouse (any button) or one finger to pan."}</li>
                <li>{"Scroll to zoom; the point under the cursor stays put."}</li>
                <li>{"Pinch with two fingers to zoom around them."}</li>
                <li>{"Use the +/- and arrow buttons, or Center to return to the root."}</li>
                <li>{"Zoom speed and direction live under Settings."}</li>
            </ul>
            <div style="display:flex; gap:12px; justify-content:center; margin-top:8px;">
                <button onclick={close_btn}>{"Got it"}</button>
            </div>
        </div>
    }
}
