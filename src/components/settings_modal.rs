use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub invert_wheel: bool,
    pub on_toggle_invert: Callback<()>,
    pub zoom_step: f64,
    pub on_set_zoom_step: Callback<f64>,
    pub on_reset_view: Callback<()>,
}

#[function_component(SettingsModal)]
pub fn settings_modal(props: &SettingsModalProps) -> Html {
    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_invert_cb = {
        let cb = props.on_toggle_invert.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let reset_view_cb = {
        let cb = props.on_reset_view.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let speed_option = |label: &'static str, step: f64| {
        let cb = props.on_set_zoom_step.clone();
        let checked = (props.zoom_step - step).abs() < 1e-9;
        html! {
            <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                <input type="radio" name="zoom-speed" checked={checked} onclick={Callback::from(move |_| cb.emit(step))} />
                <span>{ label }</span>
            </label>
        }
    };

    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:300px; max-width:420px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Settings"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="display:flex; flex-direction:column; gap:10px;">
                <div style="font-size:12px; opacity:0.7;">{"Wheel zoom speed"}</div>
                { speed_option("Slow", 0.05) }
                { speed_option("Normal", 0.1) }
                { speed_option("Fast", 0.2) }
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={props.invert_wheel} onclick={toggle_invert_cb} />
                    <span>{"Invert wheel zoom direction"}</span>
                </label>
            </div>
            <div style="display:flex; gap:8px; flex-wrap:wrap;">
                <button onclick={reset_view_cb} style="flex:1;">{"Reset View"}</button>
                <button onclick={close_cb} style="flex:0 0 auto;">{"Done"}</button>
            </div>
            <div style="font-size:11px; line-height:1.4; opacity:0.7;">{"Reset View re-centers the root node at the top of the screen."}</div>
        </div>
    </div>}
}
