//! DOM adapters: region lookup, hover labels, download and outbound links

use crate::data::RegionId;
use crate::map::hover::{follow_pointer, LabelHost, LabelPlacement};
use crate::map::{ExportFile, Point, PointerTarget, RegionCanvas, RegionShapes, Size};
use crate::MapError;
use gloo::events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Blob, BlobPropertyBag, Document, Element, Event, HtmlAnchorElement, HtmlElement, MouseEvent,
    StorageEvent, SvgElement, Url, Window, XmlSerializer,
};

const REGION_SELECTOR: &str = "path[name]";
const CARD_SELECTOR: &str = ".county-card";
const LABEL_CLASS: &str = "map-tooltip radius tooltip";

fn dom_error(what: &str, err: JsValue) -> MapError {
    MapError::Dom(format!("{}: {:?}", what, err))
}

pub fn window() -> Result<Window, MapError> {
    web_sys::window().ok_or_else(|| MapError::Dom("no global window".to_string()))
}

fn document(window: &Window) -> Result<Document, MapError> {
    window
        .document()
        .ok_or_else(|| MapError::Dom("window has no document".to_string()))
}

/// Inner size of the browser window
pub fn viewport(window: &Window) -> Size {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Size::new(width, height)
}

/// Call `on_change` with the key whenever another tab writes local storage
///
/// The key is `None` when the other tab cleared the whole store.
pub fn watch_storage(window: &Window, on_change: impl Fn(Option<String>) + 'static) -> EventListener {
    EventListener::new(window, "storage", move |event| {
        if let Some(event) = event.dyn_ref::<StorageEvent>() {
            on_change(event.key());
        }
    })
}

pub fn pointer(event: &MouseEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

/// Element an event was dispatched to
pub fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

/// Region identifier of a `path` carrying a `name` attribute
pub fn region_id(element: &Element) -> Option<RegionId> {
    if element.tag_name().eq_ignore_ascii_case("path") {
        element.get_attribute("name").map(RegionId::new)
    } else {
        None
    }
}

pub fn classify(event: &Event) -> PointerTarget {
    let Some(element) = event_element(event) else {
        return PointerTarget::Background;
    };
    if let Some(id) = region_id(&element) {
        return PointerTarget::Region(id);
    }
    match element.closest(CARD_SELECTOR) {
        Ok(Some(_)) => PointerTarget::Card,
        _ => PointerTarget::Background,
    }
}

/// Region shapes of the mounted map graphic, indexed once by name
pub struct DomCanvas {
    regions: RegionShapes<SvgElement>,
}

impl DomCanvas {
    pub fn index(root: &Element) -> Result<Self, MapError> {
        let nodes = root
            .query_selector_all(REGION_SELECTOR)
            .map_err(|e| dom_error("query regions", e))?;

        let mut shapes = Vec::new();
        for i in 0..nodes.length() {
            let Some(shape) = nodes.get(i).and_then(|n| n.dyn_into::<SvgElement>().ok()) else {
                continue;
            };
            if let Some(name) = shape.get_attribute("name") {
                shapes.push((RegionId::new(name), shape));
            }
        }
        let regions: RegionShapes<SvgElement> = shapes.into_iter().collect();
        log::info!("indexed {} map regions", regions.len());
        Ok(Self { regions })
    }
}

impl RegionCanvas for DomCanvas {
    fn set_fill(&mut self, region: &RegionId, color: &str) {
        let shapes = self.regions.of(region);
        if shapes.is_empty() {
            log::debug!("no shape named '{}' in the map", region);
        }
        for shape in shapes {
            if let Err(err) = shape.style().set_property("fill", color) {
                log::error!("could not fill {}: {:?}", region, err);
            }
        }
    }
}

/// Hover labels appended to the document body
#[derive(Clone)]
pub struct DomLabelHost {
    window: Window,
    document: Document,
}

impl DomLabelHost {
    pub fn new() -> Result<Self, MapError> {
        let window = window()?;
        let document = document(&window)?;
        Ok(Self { window, document })
    }
}

impl LabelHost for DomLabelHost {
    type Label = HtmlElement;
    type Region = Element;
    type Tracking = EventListener;

    fn create_label(&self, text: &str) -> Result<HtmlElement, MapError> {
        let label = self
            .document
            .create_element("div")
            .map_err(|e| dom_error("create label", e))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| MapError::Dom("label is not an HTML element".to_string()))?;
        label.set_class_name(LABEL_CLASS);
        label.set_text_content(Some(text));

        let body = self
            .document
            .body()
            .ok_or_else(|| MapError::Dom("document has no body".to_string()))?;
        body.append_child(&label)
            .map_err(|e| dom_error("attach label", e))?;
        Ok(label)
    }

    fn remove_label(&self, label: &HtmlElement) {
        label.remove();
    }

    fn measure(&self, label: &HtmlElement) -> Size {
        Size::new(f64::from(label.offset_width()), f64::from(label.offset_height()))
    }

    fn place(&self, label: &HtmlElement, at: Point) {
        let style = label.style();
        let placed = style
            .set_property("left", &format!("{}px", at.x))
            .and_then(|_| style.set_property("top", &format!("{}px", at.y)));
        if let Err(err) = placed {
            log::error!("could not place hover label: {:?}", err);
        }
    }

    fn viewport(&self) -> Size {
        viewport(&self.window)
    }

    fn track_moves(&self, region: &Element, label: &HtmlElement, placement: LabelPlacement) -> EventListener {
        let host = self.clone();
        let label = label.clone();
        EventListener::new(region, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                follow_pointer(&host, &label, pointer(event), placement);
            }
        })
    }
}

/// Serialize the first `svg` element under `root`, live styles included
pub fn serialize_svg(root: &Element) -> Result<String, MapError> {
    let svg = root
        .query_selector("svg")
        .map_err(|e| dom_error("find map graphic", e))?
        .ok_or_else(|| MapError::Dom("map graphic not mounted".to_string()))?;
    XmlSerializer::new()
        .and_then(|serializer| serializer.serialize_to_string(&svg))
        .map_err(|e| dom_error("serialize map", e))
}

/// Hand `file` to the browser as a download
pub fn download(file: &ExportFile) -> Result<(), MapError> {
    let window = window()?;
    let document = document(&window)?;

    let parts = js_sys::Array::of1(&JsValue::from_str(&file.contents));
    let options = BlobPropertyBag::new();
    options.set_type(file.mime_type);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| dom_error("create blob", e))?;
    let url = Url::create_object_url_with_blob(&blob).map_err(|e| dom_error("create object url", e))?;

    let link = document
        .create_element("a")
        .map_err(|e| dom_error("create link", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| MapError::Dom("link is not an anchor".to_string()))?;
    link.set_href(&url);
    link.set_download(file.file_name);

    let body = document
        .body()
        .ok_or_else(|| MapError::Dom("document has no body".to_string()))?;
    body.append_child(&link)
        .map_err(|e| dom_error("attach link", e))?;
    link.click();
    link.remove();

    Url::revoke_object_url(&url).map_err(|e| dom_error("revoke object url", e))?;
    log::info!("exported {} ({} bytes)", file.file_name, file.contents.len());
    Ok(())
}

/// Open `url` in a new browsing context
pub fn open_in_new_tab(url: &str) -> Result<(), MapError> {
    window()?
        .open_with_url_and_target(url, "_blank")
        .map(|_| ())
        .map_err(|e| dom_error("open link", e))
}
