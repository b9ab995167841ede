//! Download of the coloured map as a standalone SVG file

/// File name offered to the browser
pub const EXPORT_FILE_NAME: &str = "map.svg";

/// MIME type of the exported blob
pub const EXPORT_MIME_TYPE: &str = "image/svg+xml;charset=utf-8";

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// A file ready to be handed to the browser for saving
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub contents: String,
}

impl ExportFile {
    /// Wrap serialized SVG markup, adding the SVG namespace if it is missing
    ///
    /// A standalone `.svg` file is only rendered by viewers when the root
    /// element declares the namespace; inline SVG in HTML does not need it.
    pub fn svg(markup: impl Into<String>) -> Self {
        let mut contents = markup.into();
        if let Some(name_end) = contents.find("<svg").map(|start| start + "<svg".len()) {
            let root_tag = match contents[name_end..].find('>') {
                Some(close) => &contents[name_end..name_end + close],
                None => &contents[name_end..],
            };
            if !root_tag.contains("xmlns=") {
                contents.insert_str(name_end, &format!(r#" xmlns="{}""#, SVG_NS));
            }
        }
        Self {
            file_name: EXPORT_FILE_NAME,
            mime_type: EXPORT_MIME_TYPE,
            contents,
        }
    }
}
