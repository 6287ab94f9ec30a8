use std::rc::Rc;
use yew::prelude::*;
use web_sys::HtmlElement;
use shared::spin::SpinPlan;
use shared::wheel_face::{WheelFace, WheelLabel};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct WheelProps {
    pub face: Rc<WheelFace>,
    pub plan: Option<SpinPlan>,
    #[prop_or_default]
    pub config_id: Option<AttrValue>,
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        log::error!("Failed to set {} on wheel: {:?}", property, e);
    }
}

/// Snaps to the plan's start angle, then animates to its final angle.
fn apply_plan(rotator: &HtmlElement, plan: &SpinPlan) {
    set_style(rotator, "transition", "none");
    set_style(rotator, "transform", &plan.start_transform_css());
    // Forces a reflow so the start angle is committed before the transition
    let _ = rotator.offset_width();
    set_style(rotator, "transition", &plan.transition_css());
    set_style(rotator, "transform", &plan.final_transform_css());
}

fn render_label(label: &WheelLabel) -> Html {
    let style = format!(
        "font-size: {}px; transform: translate(-50%, -50%) rotate({:.2}deg) translateY(-{}px);",
        label.font_size, label.angle, label.radius
    );

    html! {
        <div class={styles::WHEEL_LABEL} {style}>
            { for label.chars().into_iter().map(|c| html! { <span>{c}</span> }) }
        </div>
    }
}

#[function_component(Wheel)]
pub fn wheel(props: &WheelProps) -> Html {
    let rotator_ref = use_node_ref();

    {
        let rotator_ref = rotator_ref.clone();
        use_effect_with(props.plan.clone(), move |plan| {
            if let (Some(plan), Some(rotator)) = (plan, rotator_ref.cast::<HtmlElement>()) {
                log::debug!(
                    "Spin #{}: {:.1}deg -> {:.1}deg over {:.2}s",
                    plan.sequence, plan.start_rotation, plan.final_rotation, plan.duration_secs
                );
                apply_plan(&rotator, plan);
            }
            || ()
        });
    }

    html! {
        <div id="wheel" class={styles::WHEEL}>
            <div class={styles::WHEEL_POINTER}></div>
            <div id="wheel-rotator" ref={rotator_ref} class={styles::WHEEL_ROTATOR} data-config-id={props.config_id.clone()}>
                <div class={styles::WHEEL_FACE} style={format!("background: {};", props.face.gradient)}></div>
                { for props.face.labels.iter().map(render_label) }
            </div>
        </div>
    }
}
