//! Info footnote with credits

use yew::prelude::*;

const CREDITS: [(&str, &str); 3] = [
    ("China-ex", "https://lab.magiconch.com/china-ex/"),
    ("US-level/eu", "https://tenpages.github.io/us-level/eu.html"),
    ("MapChart", "https://www.mapchart.net/"),
];

#[derive(Properties, PartialEq)]
pub struct FootnoteProps {
    pub blurb: AttrValue,
}

fn credit_link(name: &'static str, href: &'static str) -> Html {
    html! {
        <a {href} target="_blank" rel="noopener noreferrer">{ format!(" {} ", name) }</a>
    }
}

/// Info icon that opens into the credits panel while hovered
#[function_component(Footnote)]
pub fn footnote(props: &FootnoteProps) -> Html {
    let open = use_state(|| false);

    let show = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(true))
    };
    let hide = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(false))
    };

    if !*open {
        return html! {
            <div id="footnote" onmouseenter={show}>
                <span class="info-icon" aria-label="About this map">{ "ⓘ" }</span>
            </div>
        };
    }

    let [china_ex, us_level, mapchart] = CREDITS;
    html! {
        <div id="footnote" onmouseleave={hide.clone()}>
            <div class="footnote-container radius">
                <div id="footnote-row">
                    <p>{ props.blurb.clone() }</p>
                    <span id="close-icon" role="button" aria-label="Close" onclick={hide}>{ "✕" }</span>
                </div>
                { "Concept inspired by" }
                { credit_link(china_ex.0, china_ex.1) }
                { "&" }
                { credit_link(us_level.0, us_level.1) }
                { ", credit to" }
                { credit_link(mapchart.0, mapchart.1) }
            </div>
        </div>
    }
}
