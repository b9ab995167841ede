//! The map page: graphic, level card, toolbar, total and footnote

use super::card::LevelCard;
use super::dom::{self, DomCanvas, DomLabelHost};
use super::footnote::Footnote;
use super::toolbar::Toolbar;
use super::{LocalStore, MAP_SVG};
use crate::config::MapConfig;
use crate::data::Level;
use crate::map::hover::LabelPlacement;
use crate::map::{ExportFile, HoverTracker, MapWidget, Size};
use crate::MapError;
use anyhow::Context as _;
use gloo::events::EventListener;
use web_sys::Element;
use yew::prelude::*;

pub enum Msg {
    MapClicked(MouseEvent),
    HoverEnter(MouseEvent),
    HoverLeave(MouseEvent),
    PickLevel(Level),
    Reset,
    Download,
    OpenSource,
    /// Another tab wrote local storage; `None` means it was cleared
    StorageChanged(Option<String>),
}

pub struct MapPage {
    widget: MapWidget<LocalStore>,
    map_ref: NodeRef,
    canvas: Option<DomCanvas>,
    hover: Option<HoverTracker<DomLabelHost>>,
    _storage_watch: Option<EventListener>,
}

impl MapPage {
    fn repaint(&mut self) {
        if let Some(canvas) = self.canvas.as_mut() {
            self.widget.projection().apply(canvas);
        }
    }

    fn export(&self) -> crate::Result<()> {
        let root = self
            .map_ref
            .cast::<Element>()
            .context("map graphic not mounted")?;
        let markup = dom::serialize_svg(&root).context("serializing map")?;
        dom::download(&ExportFile::svg(markup)).context("downloading map.svg")?;
        Ok(())
    }

    fn hover_enter(&mut self, event: &MouseEvent) -> Result<(), MapError> {
        let Some(hover) = self.hover.as_mut() else {
            return Ok(());
        };
        let Some(shape) = dom::event_element(event) else {
            return Ok(());
        };
        let Some(id) = dom::region_id(&shape) else {
            return Ok(());
        };
        if hover.hovered() == Some(&id) {
            return Ok(());
        }
        hover.enter(id, &shape, dom::pointer(event))
    }

    fn hover_leave(&mut self, event: &MouseEvent) {
        let Some(hover) = self.hover.as_mut() else {
            return;
        };
        let left = dom::event_element(event).and_then(|shape| dom::region_id(&shape));
        if left.is_some() && hover.hovered() == left.as_ref() {
            hover.leave();
        }
    }
}

impl Component for MapPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = MapConfig::embedded();
        let placement = LabelPlacement {
            offset: config.pointer_offset,
            margin: config.edge_margin,
        };
        let hover = match DomLabelHost::new() {
            Ok(host) => Some(HoverTracker::new(host, placement)),
            Err(err) => {
                log::error!("hover labels disabled: {}", err);
                None
            }
        };

        let on_change = ctx.link().callback(Msg::StorageChanged);
        let storage_watch = dom::window()
            .map(|window| dom::watch_storage(&window, move |key| on_change.emit(key)))
            .map_err(|err| log::warn!("scores from other tabs will not sync: {}", err))
            .ok();

        Self {
            widget: MapWidget::new(LocalStore::open(), config),
            map_ref: NodeRef::default(),
            canvas: None,
            hover,
            _storage_watch: storage_watch,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::MapClicked(event) => {
                let viewport = dom::window()
                    .map(|w| dom::viewport(&w))
                    .unwrap_or_default();
                self.widget
                    .click(dom::classify(&event), dom::pointer(&event), viewport);
                true
            }
            Msg::HoverEnter(event) => {
                if let Err(err) = self.hover_enter(&event) {
                    log::error!("could not show hover label: {}", err);
                }
                false
            }
            Msg::HoverLeave(event) => {
                self.hover_leave(&event);
                false
            }
            Msg::PickLevel(level) => {
                if let Err(err) = self.widget.pick_level(level) {
                    log::error!("could not save score: {}", err);
                }
                true
            }
            Msg::Reset => {
                if let Err(err) = self.widget.reset() {
                    log::error!("could not save reset: {}", err);
                }
                true
            }
            Msg::Download => {
                if let Err(err) = self.export() {
                    log::error!("export failed: {:#}", err);
                }
                false
            }
            Msg::StorageChanged(key) => {
                let ours = key.map_or(true, |key| key == self.widget.config().storage_key);
                if ours {
                    log::debug!("scores changed in another tab, reloading");
                    self.widget.reload();
                }
                ours
            }
            Msg::OpenSource => {
                if let Err(err) = dom::open_in_new_tab(&self.widget.config().source_url) {
                    log::error!("{}", err);
                }
                false
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.canvas = match self.map_ref.cast::<Element>().map(|root| DomCanvas::index(&root)) {
                Some(Ok(canvas)) => Some(canvas),
                Some(Err(err)) => {
                    log::error!("could not index map regions: {}", err);
                    None
                }
                None => None,
            };
        }
        self.repaint();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let config = self.widget.config();

        let card = self.widget.selection().map(|selection| {
            html! {
                <LevelCard
                    region={selection.region.clone()}
                    current={self.widget.scores().level_of(&selection.region)}
                    anchor={selection.anchor}
                    captions={config.captions.clone()}
                    on_pick={link.callback(Msg::PickLevel)}
                />
            }
        });

        html! {
            <div>
                { for card }
                <Toolbar
                    on_reset={link.callback(|()| Msg::Reset)}
                    on_download={link.callback(|()| Msg::Download)}
                    on_source={link.callback(|()| Msg::OpenSource)}
                />
                <p id="level">{ self.widget.total_text() }</p>
                <Footnote blurb={config.blurb.clone()} />
                <div
                    id="map-container"
                    ref={self.map_ref.clone()}
                    onclick={link.callback(Msg::MapClicked)}
                    onmouseover={link.callback(Msg::HoverEnter)}
                    onmouseout={link.callback(Msg::HoverLeave)}
                >
                    { Html::from_html_unchecked(AttrValue::from(MAP_SVG)) }
                </div>
            </div>
        }
    }
}
