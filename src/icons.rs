use std::{collections::HashMap, sync::OnceLock};

use crate::config::IconsConfig;

/// Something able to turn bracket tags like `[copper]` into the glyphs the renderer draws.
pub trait IconFormatter: Send + Sync {
    fn format_icons(&self, input: &str) -> Result<String, IconFormatError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconFormatError {
    /// A `[` without a matching `]`, starting at this byte offset.
    UnclosedTag(usize),
}

impl std::fmt::Display for IconFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconFormatError::UnclosedTag(offset) => write!(f, "unclosed tag at byte {offset}"),
        }
    }
}

impl std::error::Error for IconFormatError {}

static ICON_FORMATTER: OnceLock<Box<dyn IconFormatter>> = OnceLock::new();

/// Registers the formatter used by [`fetch_text`]. Returns false if one was already registered.
pub fn set_icon_formatter(formatter: impl IconFormatter + 'static) -> bool {
    ICON_FORMATTER.set(Box::new(formatter)).is_ok()
}

/// Resolves icon tags in `input` with the registered formatter.
/// Never fails: without a formatter, without tags or when formatting fails, `input` is returned as is.
pub fn fetch_text(input: &str) -> String {
    fetch_text_with(ICON_FORMATTER.get().map(|formatter| formatter.as_ref()), input)
}

/// Same as [`fetch_text`], but with an explicit formatter.
pub fn fetch_text_with(formatter: Option<&dyn IconFormatter>, input: &str) -> String {
    let Some(formatter) = formatter else {
        return input.to_string();
    };

    if !input.contains('[') {
        return input.to_string();
    }

    match formatter.format_icons(input) {
        Ok(formatted) => formatted,
        Err(err) => {
            tracing::warn!("Failed to format icons in {input:?}, showing it verbatim: {err}");
            input.to_string()
        }
    }
}

/// Replaces known `[name]` tags with a glyph. Unknown tags, like colors, are left for the renderer.
#[derive(Debug, Clone, Default)]
pub struct IconTable {
    glyphs: HashMap<String, String>,
}

impl IconTable {
    pub fn new(glyphs: HashMap<String, String>) -> Self {
        Self { glyphs }
    }

    pub fn from_config(config: &IconsConfig) -> Self {
        Self::new(config.glyphs.clone())
    }

    pub fn insert(&mut self, name: &str, glyph: &str) {
        self.glyphs.insert(name.to_string(), glyph.to_string());
    }
}

impl IconFormatter for IconTable {
    fn format_icons(&self, input: &str) -> Result<String, IconFormatError> {
        let mut output = String::with_capacity(input.len());
        let mut rest = input;

        while let Some(start) = rest.find('[') {
            output.push_str(&rest[..start]);

            let tag = &rest[start..];
            let Some(end) = tag.find(']') else {
                return Err(IconFormatError::UnclosedTag(input.len() - tag.len()));
            };

            let name = &tag[1..end];
            match self.glyphs.get(name) {
                Some(glyph) => output.push_str(glyph),
                None => output.push_str(&tag[..=end]),
            }

            rest = &tag[end + 1..];
        }

        output.push_str(rest);
        Ok(output)
    }
}
