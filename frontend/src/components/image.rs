use log::warn;
use yew::prelude::*;

use crate::config;

/// Colours and size of the generated placeholder avatar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AvatarPalette {
    pub background: &'static str,
    pub color: &'static str,
    pub size: u32,
}

impl AvatarPalette {
    pub const TESTIMONIAL: Self = Self { background: "C9A96E", color: "001F3F", size: 200 };
    pub const TEAM: Self = Self { background: "001F3F", color: "C9A96E", size: 400 };
}

/// Placeholder image keyed by display name, used when a photo fails to load.
pub fn placeholder_avatar_url(name: &str, palette: AvatarPalette) -> String {
    format!(
        "{}?name={}&background={}&color={}&size={}",
        config::PLACEHOLDER_AVATAR_BASE,
        urlencoding::encode(name),
        palette.background,
        palette.color,
        palette.size
    )
}

#[derive(Properties, PartialEq)]
pub struct FallbackImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    /// Name the placeholder avatar is generated from.
    pub name: AttrValue,
    pub palette: AvatarPalette,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub width: Option<u32>,
    #[prop_or_default]
    pub height: Option<u32>,
}

/// `<img>` that swaps to a placeholder avatar the first time loading fails.
#[function_component(FallbackImage)]
pub fn fallback_image(props: &FallbackImageProps) -> Html {
    let failed = use_state(|| false);

    let onerror = {
        let failed = failed.clone();
        let name = props.name.clone();
        Callback::from(move |_: Event| {
            // The placeholder failing too must not flip state again.
            if !*failed {
                warn!("image for {} failed to load, using placeholder", name);
                failed.set(true);
            }
        })
    };

    let src: AttrValue = if *failed {
        placeholder_avatar_url(&props.name, props.palette).into()
    } else {
        props.src.clone()
    };

    html! {
        <img
            src={src}
            alt={props.alt.clone()}
            class={props.class.clone()}
            width={props.width.map(|w| w.to_string())}
            height={props.height.map(|h| h.to_string())}
            loading="lazy"
            {onerror}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{TEAM, TESTIMONIALS};

    fn name_param(url: &str) -> String {
        let raw = url
            .split(['?', '&'])
            .find_map(|pair| pair.strip_prefix("name="))
            .expect("placeholder url has a name parameter");
        urlencoding::decode(raw).expect("valid utf-8").into_owned()
    }

    #[test]
    fn placeholder_carries_encoded_name_and_palette() {
        let url = placeholder_avatar_url("Dr. Kwame Asante", AvatarPalette::TESTIMONIAL);
        assert_eq!(
            url,
            "https://ui-avatars.com/api/?name=Dr.%20Kwame%20Asante&background=C9A96E&color=001F3F&size=200"
        );
    }

    #[test]
    fn every_pictured_entity_gets_a_named_placeholder() {
        let people = TESTIMONIALS
            .iter()
            .map(|t| (t.name, AvatarPalette::TESTIMONIAL))
            .chain(TEAM.iter().map(|m| (m.name, AvatarPalette::TEAM)));

        for (name, palette) in people {
            let url = placeholder_avatar_url(name, palette);
            assert!(url.contains(&*urlencoding::encode(name)), "{url}");
            assert_eq!(name_param(&url), name);
        }
    }

    #[test]
    fn team_palette_inverts_testimonial_colours() {
        let url = placeholder_avatar_url("Kofi Mensah", AvatarPalette::TEAM);
        assert!(url.ends_with("&background=001F3F&color=C9A96E&size=400"));
    }
}
