use yew::prelude::*;

use crate::hooks::use_reveal;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub eyebrow: AttrValue,
    pub title: AttrValue,
    /// Second title line, rendered in gold.
    #[prop_or_default]
    pub highlight: Option<AttrValue>,
    pub description: AttrValue,
    /// Light text for sections on the navy background.
    #[prop_or_default]
    pub dark: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), "0px");

    html! {
        <div
            ref={node}
            class={classes!("section-header", "reveal", "fade-up", props.dark.then(|| "dark"), revealed.then(|| "revealed"))}
        >
            <span class="eyebrow">{ props.eyebrow.clone() }</span>
            <h2>
                { props.title.clone() }
                if let Some(highlight) = &props.highlight {
                    <br />
                    <span class="gold">{ highlight.clone() }</span>
                }
            </h2>
            <p>{ props.description.clone() }</p>
            { for props.children.iter() }
        </div>
    }
}
