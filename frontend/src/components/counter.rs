use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::counter::{format_thousands, CounterAnimation};
use crate::hooks::use_reveal;

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub value: u32,
    #[prop_or_default]
    pub suffix: AttrValue,
}

/// Counts up from zero the first time it scrolls into view.
#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), "0px");
    let shown = use_state(|| 0u32);
    let is_mounted = use_is_mounted();

    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |(visible, target)| {
                if *visible {
                    let mut animation = CounterAnimation::new(*target);
                    spawn_local(async move {
                        loop {
                            TimeoutFuture::new(CounterAnimation::step_period_ms()).await;
                            if !is_mounted() {
                                break;
                            }
                            shown.set(animation.step());
                            if animation.is_finished() {
                                break;
                            }
                        }
                    });
                }
                || ()
            },
            (visible, props.value),
        );
    }

    html! {
        <span ref={node} class="counter-value">
            { format_thousands(*shown) }{ props.suffix.clone() }
        </span>
    }
}
