//! Reset, download and source buttons

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToolbarProps {
    pub on_reset: Callback<()>,
    pub on_download: Callback<()>,
    pub on_source: Callback<()>,
}

#[derive(Properties, PartialEq)]
struct ToolButtonProps {
    label: AttrValue,
    caption: AttrValue,
    glyph: AttrValue,
    onclick: Callback<()>,
}

#[function_component(ToolButton)]
fn tool_button(props: &ToolButtonProps) -> Html {
    let onclick = props.onclick.reform(|_: MouseEvent| ());
    html! {
        <button class="button-tooltip" aria-label={props.label.clone()} {onclick}>
            <span class="button-glyph" aria-hidden="true">{ props.glyph.clone() }</span>
            <span class="button-tooltip-text radius tooltip">{ props.caption.clone() }</span>
        </button>
    }
}

#[function_component(Toolbar)]
pub fn toolbar(props: &ToolbarProps) -> Html {
    html! {
        <span class="buttons radius">
            <ToolButton label="Reset map" caption="Reset" glyph="⟲" onclick={props.on_reset.clone()} />
            <ToolButton label="Download map" caption="Download" glyph="⤓" onclick={props.on_download.clone()} />
            <ToolButton label="Visit GitHub" caption="GitHub" glyph="↗" onclick={props.on_source.clone()} />
        </span>
    }
}
