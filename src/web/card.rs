//! Level picker card

use crate::config::LevelCaptions;
use crate::data::{Level, RegionId};
use crate::map::Point;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LevelCardProps {
    pub region: RegionId,
    /// Level the region has now, marked in the list
    pub current: Level,
    pub anchor: Point,
    pub captions: LevelCaptions,
    pub on_pick: Callback<Level>,
}

/// Floating card offering the six levels for the selected region
#[function_component(LevelCard)]
pub fn level_card(props: &LevelCardProps) -> Html {
    // Clicks inside the card never reach the dismiss handler
    let contain = Callback::from(|e: MouseEvent| e.stop_propagation());
    let style = format!("left: {}px; top: {}px;", props.anchor.x, props.anchor.y);

    let options = Level::ALL.iter().map(|&level| {
        let on_pick = props.on_pick.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_pick.emit(level));
        let class = classes!((level == props.current).then_some("current"));
        html! {
            <p id={level.slug()} {class} {onclick}>{ props.captions.caption(level).to_string() }</p>
        }
    });

    html! {
        <div class="county-card radius" onclick={contain} {style}>
            <p id="county-name">{ props.region.to_string() }</p>
            <div id="card-options">
                { for options }
            </div>
        </div>
    }
}
