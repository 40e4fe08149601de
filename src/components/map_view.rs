use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, TouchEvent};
use yew::prelude::*;

use crate::model::{MindMap, ViewSettings};
use crate::state::{GestureState, ROOT_TOP_MARGIN, Viewport, touch_distance};
use crate::util::clog;

use super::{
    help_overlay::HelpOverlay, settings_modal::SettingsModal, view_controls::ViewControls,
};

const SETTINGS_KEY: &str = "mm_view_settings";
const HELP_SEEN_KEY: &str = "mm_help_seen";

fn load_view_settings() -> ViewSettings {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            if let Ok(Some(raw)) = store.get_item(SETTINGS_KEY) {
                if let Ok(s) = serde_json::from_str(&raw) {
                    return s;
                }
            }
        }
    }
    ViewSettings::default()
}

fn save_view_settings(s: &ViewSettings) {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            if let Ok(raw) = serde_json::to_string(s) {
                let _ = store.set_item(SETTINGS_KEY, &raw);
            }
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct MapViewProps {
    pub map: MindMap,
}

#[function_component(MapView)]
pub fn map_view(props: &MapViewProps) -> Html {
    let pool_ref = use_node_ref();
    let content_ref = use_node_ref();
    let root_ref = use_node_ref();
    let viewport = use_mut_ref(Viewport::default);
    let gesture = use_mut_ref(GestureState::default);
    let render_ref = use_mut_ref(|| None::<Rc<dyn Fn()>>);
    let settings = use_state(load_view_settings);
    let settings_ref = use_mut_ref(ViewSettings::default);
    let open_settings = use_state(|| false);
    // Help overlay: show only on first visit (key absent).
    let show_help = use_state(|| {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                return store.get_item(HELP_SEEN_KEY).ok().flatten().is_none();
            }
        }
        true
    });

    // Mirror settings into a cell the raw-event closures can read, persist on
    // change.
    {
        let settings_ref = settings_ref.clone();
        use_effect_with((*settings).clone(), move |s: &ViewSettings| {
            *settings_ref.borrow_mut() = s.clone();
            save_view_settings(s);
            || ()
        });
    }

    // Mount effect: resolve elements, build the render closure, center the
    // root node, attach listeners.
    {
        let pool_ref = pool_ref.clone();
        let content_ref = content_ref.clone();
        let root_ref = root_ref.clone();
        let viewport = viewport.clone();
        let gesture = gesture.clone();
        let render_ref_setup = render_ref.clone();
        let settings_ref_setup = settings_ref.clone();
        use_effect_with((), move |_| {
            let window = match web_sys::window() {
                Some(w) => w,
                None => return Box::new(|| ()) as Box<dyn FnOnce()>,
            };
            // Pool and content are required; without either the controller
            // stays inert.
            let pool: HtmlElement = match pool_ref.cast::<HtmlElement>() {
                Some(el) => el,
                None => {
                    clog("map view: pool element missing, navigation disabled");
                    return Box::new(|| ()) as Box<dyn FnOnce()>;
                }
            };
            let content: HtmlElement = match content_ref.cast::<HtmlElement>() {
                Some(el) => el,
                None => {
                    clog("map view: content layer missing, navigation disabled");
                    return Box::new(|| ()) as Box<dyn FnOnce()>;
                }
            };
            // Render closure
            let render_closure: Rc<dyn Fn()> = {
                let content = content.clone();
                let viewport = viewport.clone();
                Rc::new(move || {
                    if !content.is_connected() {
                        return;
                    }
                    let vp = viewport.borrow();
                    content
                        .style()
                        .set_property("transform", &vp.css_transform())
                        .ok();
                })
            };
            *render_ref_setup.borrow_mut() = Some(render_closure.clone());
            // Initial center: root node mid-width aligned with the pool
            // mid-width, fixed margin from the top. The root ref is optional;
            // without it the identity transform stands.
            {
                let rect = pool.get_bounding_client_rect();
                if let Some(root) = root_ref.cast::<HtmlElement>() {
                    let mut vp = viewport.borrow_mut();
                    *vp = Viewport::centered_on_root(
                        rect.width(),
                        root.offset_left() as f64,
                        root.offset_top() as f64,
                        root.offset_width() as f64,
                        ROOT_TOP_MARGIN,
                    );
                }
            }
            (render_closure)();
            // Wheel zoom, anchored at the cursor. Client coords minus the
            // pool rect, not offset_x(): the event target can be a child
            // node, which would skew element-relative offsets.
            let wheel_cb = {
                let pool = pool.clone();
                let viewport = viewport.clone();
                let settings_ref = settings_ref_setup.clone();
                let render_ref = render_ref_setup.clone();
                Closure::wrap(Box::new(move |e: web_sys::WheelEvent| {
                    e.prevent_default();
                    let rect = pool.get_bounding_client_rect();
                    let anchor_x = e.client_x() as f64 - rect.left();
                    let anchor_y = e.client_y() as f64 - rect.top();
                    let s = settings_ref.borrow().clone();
                    let zoom_in = if s.invert_wheel {
                        e.delta_y() > 0.0
                    } else {
                        e.delta_y() < 0.0
                    };
                    let factor = if zoom_in {
                        1.0 + s.zoom_step
                    } else {
                        1.0 / (1.0 + s.zoom_step)
                    };
                    let mut vp = viewport.borrow_mut();
                    vp.zoom_about(anchor_x, anchor_y, factor, s.min_scale, s.max_scale);
                    drop(vp);
                    if let Some(f) = &*render_ref.borrow() {
                        f();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            pool.add_event_listener_with_callback("wheel", wheel_cb.as_ref().unchecked_ref())
                .ok();
            // Mouse pan. Any button starts a drag; move/up live on the window
            // so a drag keeps tracking after the cursor leaves the pool.
            let mousedown_cb = {
                let gesture = gesture.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    gesture
                        .borrow_mut()
                        .begin_pan(e.client_x() as f64, e.client_y() as f64);
                }) as Box<dyn FnMut(_)>)
            };
            pool.add_event_listener_with_callback(
                "mousedown",
                mousedown_cb.as_ref().unchecked_ref(),
            )
            .ok();
            let mousemove_cb = {
                let gesture = gesture.clone();
                let viewport = viewport.clone();
                let render_ref = render_ref_setup.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    let delta = gesture
                        .borrow_mut()
                        .pan_to(e.client_x() as f64, e.client_y() as f64);
                    if let Some((dx, dy)) = delta {
                        viewport.borrow_mut().pan_by(dx, dy);
                        if let Some(f) = &*render_ref.borrow() {
                            f();
                        }
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                )
                .ok();
            let mouseup_cb = {
                let gesture = gesture.clone();
                Closure::wrap(Box::new(move |_e: web_sys::MouseEvent| {
                    gesture.borrow_mut().end_pan();
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("mouseup", mouseup_cb.as_ref().unchecked_ref())
                .ok();
            // Right-button drags pan too, so the context menu stays closed.
            let contextmenu_cb = {
                Closure::wrap(Box::new(move |e: web_sys::Event| {
                    e.prevent_default();
                }) as Box<dyn FnMut(_)>)
            };
            pool.add_event_listener_with_callback(
                "contextmenu",
                contextmenu_cb.as_ref().unchecked_ref(),
            )
            .ok();
            // Touch: one finger pans, two fingers pinch-zoom about their
            // midpoint. Touch count is re-evaluated on every start/end event.
            let touch_start_cb = {
                let pool = pool.clone();
                let gesture = gesture.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    let touches = e.touches();
                    if touches.length() >= 2 {
                        if let (Some(t0), Some(t1)) = (touches.item(0), touches.item(1)) {
                            let d = touch_distance(
                                t0.client_x() as f64,
                                t0.client_y() as f64,
                                t1.client_x() as f64,
                                t1.client_y() as f64,
                            );
                            gesture.borrow_mut().begin_pinch(d);
                        }
                    } else if let Some(t0) = touches.item(0) {
                        let rect = pool.get_bounding_client_rect();
                        gesture.borrow_mut().begin_pan(
                            t0.client_x() as f64 - rect.left(),
                            t0.client_y() as f64 - rect.top(),
                        );
                    }
                }) as Box<dyn FnMut(_)>)
            };
            pool.add_event_listener_with_callback(
                "touchstart",
                touch_start_cb.as_ref().unchecked_ref(),
            )
            .ok();
            let touch_move_cb = {
                let pool = pool.clone();
                let gesture = gesture.clone();
                let viewport = viewport.clone();
                let settings_ref = settings_ref_setup.clone();
                let render_ref = render_ref_setup.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    e.prevent_default();
                    let touches = e.touches();
                    let rect = pool.get_bounding_client_rect();
                    if touches.length() >= 2 {
                        if let (Some(t0), Some(t1)) = (touches.item(0), touches.item(1)) {
                            let (ax, ay) = (t0.client_x() as f64, t0.client_y() as f64);
                            let (bx, by) = (t1.client_x() as f64, t1.client_y() as f64);
                            let factor =
                                gesture.borrow_mut().pinch_to(touch_distance(ax, ay, bx, by));
                            if let Some(factor) = factor {
                                let mid_x = (ax + bx) * 0.5 - rect.left();
                                let mid_y = (ay + by) * 0.5 - rect.top();
                                let s = settings_ref.borrow().clone();
                                let mut vp = viewport.borrow_mut();
                                vp.zoom_about(mid_x, mid_y, factor, s.min_scale, s.max_scale);
                                drop(vp);
                                if let Some(f) = &*render_ref.borrow() {
                                    f();
                                }
                            }
                        }
                    } else if let Some(t0) = touches.item(0) {
                        let delta = gesture.borrow_mut().pan_to(
                            t0.client_x() as f64 - rect.left(),
                            t0.client_y() as f64 - rect.top(),
                        );
                        if let Some((dx, dy)) = delta {
                            viewport.borrow_mut().pan_by(dx, dy);
                            if let Some(f) = &*render_ref.borrow() {
                                f();
                            }
                        }
                    }
                }) as Box<dyn FnMut(_)>)
            };
            pool.add_event_listener_with_callback(
                "touchmove",
                touch_move_cb.as_ref().unchecked_ref(),
            )
            .ok();
            let touch_end_cb = {
                let pool = pool.clone();
                let gesture = gesture.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    e.prevent_default();
                    let touches = e.touches();
                    match touches.length() {
                        0 => gesture.borrow_mut().release(),
                        1 => {
                            // Pinch dropped to one finger: keep panning,
                            // baselined where the survivor is now.
                            if let Some(t0) = touches.item(0) {
                                let rect = pool.get_bounding_client_rect();
                                gesture.borrow_mut().begin_pan(
                                    t0.client_x() as f64 - rect.left(),
                                    t0.client_y() as f64 - rect.top(),
                                );
                            }
                        }
                        _ => {
                            // Still two or more down: restart the pinch from
                            // the remaining pair.
                            if let (Some(t0), Some(t1)) = (touches.item(0), touches.item(1)) {
                                let d = touch_distance(
                                    t0.client_x() as f64,
                                    t0.client_y() as f64,
                                    t1.client_x() as f64,
                                    t1.client_y() as f64,
                                );
                                gesture.borrow_mut().begin_pinch(d);
                            }
                        }
                    }
                }) as Box<dyn FnMut(_)>)
            };
            pool.add_event_listener_with_callback(
                "touchend",
                touch_end_cb.as_ref().unchecked_ref(),
            )
            .ok();
            pool.add_event_listener_with_callback(
                "touchcancel",
                touch_end_cb.as_ref().unchecked_ref(),
            )
            .ok();
            // Cleanup
            let window_cleanup = window.clone();
            let pool_cleanup = pool.clone();
            Box::new(move || {
                let _ = pool_cleanup.remove_event_listener_with_callback(
                    "wheel",
                    wheel_cb.as_ref().unchecked_ref(),
                );
                let _ = pool_cleanup.remove_event_listener_with_callback(
                    "mousedown",
                    mousedown_cb.as_ref().unchecked_ref(),
                );
                let _ = pool_cleanup.remove_event_listener_with_callback(
                    "contextmenu",
                    contextmenu_cb.as_ref().unchecked_ref(),
                );
                let _ = window_cleanup.remove_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                );
                let _ = window_cleanup.remove_event_listener_with_callback(
                    "mouseup",
                    mouseup_cb.as_ref().unchecked_ref(),
                );
                let _ = pool_cleanup.remove_event_listener_with_callback(
                    "touchstart",
                    touch_start_cb.as_ref().unchecked_ref(),
                );
                let _ = pool_cleanup.remove_event_listener_with_callback(
                    "touchmove",
                    touch_move_cb.as_ref().unchecked_ref(),
                );
                let _ = pool_cleanup.remove_event_listener_with_callback(
                    "touchend",
                    touch_end_cb.as_ref().unchecked_ref(),
                );
                let _ = pool_cleanup.remove_event_listener_with_callback(
                    "touchcancel",
                    touch_end_cb.as_ref().unchecked_ref(),
                );
            }) as Box<dyn FnOnce()>
        });
    }

    // View control buttons (produce Callback<()> for ViewControls)
    let zoom_in_cb: Callback<()> = {
        let viewport = viewport.clone();
        let pool_ref = pool_ref.clone();
        let settings_ref = settings_ref.clone();
        let render_ref = render_ref.clone();
        Callback::from(move |()| {
            if let Some(pool) = pool_ref.cast::<HtmlElement>() {
                let rect = pool.get_bounding_client_rect();
                let s = settings_ref.borrow().clone();
                let mut vp = viewport.borrow_mut();
                vp.zoom_about(
                    rect.width() * 0.5,
                    rect.height() * 0.5,
                    1.25,
                    s.min_scale,
                    s.max_scale,
                );
            }
            if let Some(f) = &*render_ref.borrow() {
                f();
            }
        })
    };
    let zoom_out_cb: Callback<()> = {
        let viewport = viewport.clone();
        let pool_ref = pool_ref.clone();
        let settings_ref = settings_ref.clone();
        let render_ref = render_ref.clone();
        Callback::from(move |()| {
            if let Some(pool) = pool_ref.cast::<HtmlElement>() {
                let rect = pool.get_bounding_client_rect();
                let s = settings_ref.borrow().clone();
                let mut vp = viewport.borrow_mut();
                vp.zoom_about(
                    rect.width() * 0.5,
                    rect.height() * 0.5,
                    0.8,
                    s.min_scale,
                    s.max_scale,
                );
            }
            if let Some(f) = &*render_ref.borrow() {
                f();
            }
        })
    };
    let pan_cb = |dx: f64, dy: f64| {
        let viewport = viewport.clone();
        let render_ref = render_ref.clone();
        Callback::from(move |()| {
            viewport.borrow_mut().pan_by(dx, dy);
            if let Some(f) = &*render_ref.borrow() {
                f();
            }
        })
    };
    let center_cb: Callback<()> = {
        let viewport = viewport.clone();
        let pool_ref = pool_ref.clone();
        let root_ref = root_ref.clone();
        let render_ref = render_ref.clone();
        Callback::from(move |()| {
            if let (Some(pool), Some(root)) = (
                pool_ref.cast::<HtmlElement>(),
                root_ref.cast::<HtmlElement>(),
            ) {
                let rect = pool.get_bounding_client_rect();
                let mut vp = viewport.borrow_mut();
                *vp = Viewport::centered_on_root(
                    rect.width(),
                    root.offset_left() as f64,
                    root.offset_top() as f64,
                    root.offset_width() as f64,
                    ROOT_TOP_MARGIN,
                );
            }
            if let Some(f) = &*render_ref.borrow() {
                f();
            }
        })
    };

    // Help overlay callbacks
    let hide_help_cb: Callback<()> = {
        let show_help = show_help.clone();
        Callback::from(move |()| {
            show_help.set(false);
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    let _ = store.set_item(HELP_SEEN_KEY, "1");
                }
            }
        })
    };
    let show_help_cb: Callback<MouseEvent> = {
        let show_help = show_help.clone();
        Callback::from(move |_| show_help.set(true))
    };

    // Settings callbacks
    let open_settings_cb: Callback<MouseEvent> = {
        let open_settings = open_settings.clone();
        Callback::from(move |_| open_settings.set(true))
    };
    let close_settings_cb: Callback<()> = {
        let open_settings = open_settings.clone();
        Callback::from(move |()| open_settings.set(false))
    };
    let toggle_invert_cb: Callback<()> = {
        let settings = settings.clone();
        Callback::from(move |()| {
            let mut s = (*settings).clone();
            s.invert_wheel = !s.invert_wheel;
            settings.set(s);
        })
    };
    let set_zoom_step_cb: Callback<f64> = {
        let settings = settings.clone();
        Callback::from(move |step: f64| {
            let mut s = (*settings).clone();
            s.zoom_step = step;
            settings.set(s);
        })
    };

    html! {<div style="position:relative; width:100vw; height:100vh; background:#0e1116; color:#c9d1d9; overflow:hidden;">
        <div ref={pool_ref.clone()} id="map-pool" style="position:absolute; inset:0; overflow:hidden; cursor:grab;">
            <div ref={content_ref.clone()} id="map-content" style="position:absolute; left:0; top:0; transform-origin:0 0; will-change:transform;">
                { for props.map.nodes.iter().map(|node| {
                    let is_root = node.parent.is_none();
                    let style = format!(
                        "position:absolute; left:{}px; top:{}px; padding:6px 14px; border-radius:8px; background:{}; border:1px solid {}; font-size:13px; white-space:nowrap; user-select:none;",
                        node.x,
                        node.y,
                        if is_root { "#0d2a4d" } else { "#161b22" },
                        if is_root { "#58a6ff" } else { "#30363d" },
                    );
                    if is_root {
                        html! { <div key={node.id} ref={root_ref.clone()} style={style}>{ node.label.clone() }</div> }
                    } else {
                        html! { <div key={node.id} style={style}>{ node.label.clone() }</div> }
                    }
                }) }
            </div>
        </div>
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px 12px; display:flex; gap:10px; align-items:center;">
            <span style="font-size:14px; font-weight:600;">{ props.map.title.clone() }</span>
            <button onclick={open_settings_cb}>{"Settings"}</button>
            <button onclick={show_help_cb}>{"Help"}</button>
        </div>
        <ViewControls
            on_zoom_in={zoom_in_cb}
            on_zoom_out={zoom_out_cb}
            on_pan_left={pan_cb(64.0, 0.0)}
            on_pan_right={pan_cb(-64.0, 0.0)}
            on_pan_up={pan_cb(0.0, 64.0)}
            on_pan_down={pan_cb(0.0, -64.0)}
            on_center={center_cb.clone()}
        />
        <HelpOverlay show={*show_help} title={props.map.title.clone()} hide_help={hide_help_cb} />
        <SettingsModal
            show={*open_settings}
            on_close={close_settings_cb}
            invert_wheel={settings.invert_wheel}
            on_toggle_invert={toggle_invert_cb}
            zoom_step={settings.zoom_step}
            on_set_zoom_step={set_zoom_step_cb}
            on_reset_view={center_cb}
        />
    </div>}
}
