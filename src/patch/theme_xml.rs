//! Android theme patch.
//!
//! The theme is streamed through `quick-xml` event by event. Only the text of
//! matching `<item name="...">` elements changes; declarations, comments,
//! attribute quoting and whitespace are written back exactly as read.

use super::{ManifestPatch, PatchError, PatchOutcome, read_document, write_document};
use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use std::path::PathBuf;

fn is_target_item(e: &BytesStart<'_>, item_name: &str) -> Result<bool, String> {
    if e.local_name().as_ref() != b"item" {
        return Ok(false);
    }
    let attr = e.try_get_attribute("name").map_err(|err| err.to_string())?;
    Ok(attr.is_some_and(|a| a.value.as_ref() == item_name.as_bytes()))
}

/// Set the text of every `<item name="{item_name}">` to `value`.
///
/// Returns the rewritten document and the number of items changed.
/// Self-closing items are expanded so they can carry the value.
pub fn rewrite_theme_item(
    xml: &str,
    item_name: &str,
    value: &str,
) -> Result<(String, usize), String> {
    let mut reader = Reader::from_str(xml);
    let mut writer = Writer::new(Vec::new());
    // Nesting depth inside the item being rewritten, if any.
    let mut inside: Option<usize> = None;
    let mut wrote_value = false;
    let mut changed = 0;

    loop {
        let event = reader.read_event().map_err(|e| e.to_string())?;
        match event {
            Event::Eof => break,
            Event::Start(e) => match inside {
                Some(depth) => {
                    inside = Some(depth + 1);
                    write(&mut writer, Event::Start(e))?;
                }
                None => {
                    if is_target_item(&e, item_name)? {
                        inside = Some(0);
                        wrote_value = false;
                        changed += 1;
                    }
                    write(&mut writer, Event::Start(e))?;
                }
            },
            Event::Text(_) | Event::CData(_) if inside == Some(0) => {
                if !wrote_value {
                    write(&mut writer, Event::Text(BytesText::new(value)))?;
                    wrote_value = true;
                }
            }
            Event::End(e) => {
                match inside {
                    Some(0) => {
                        if !wrote_value {
                            write(&mut writer, Event::Text(BytesText::new(value)))?;
                        }
                        inside = None;
                    }
                    Some(depth) => inside = Some(depth - 1),
                    None => {}
                }
                write(&mut writer, Event::End(e))?;
            }
            Event::Empty(e) if inside.is_none() && is_target_item(&e, item_name)? => {
                let end = BytesEnd::new(String::from_utf8_lossy(e.name().as_ref()).into_owned());
                write(&mut writer, Event::Start(e))?;
                write(&mut writer, Event::Text(BytesText::new(value)))?;
                write(&mut writer, Event::End(end))?;
                changed += 1;
            }
            other => write(&mut writer, other)?,
        }
    }

    let bytes = writer.into_inner();
    let out = String::from_utf8(bytes).map_err(|e| e.to_string())?;
    Ok((out, changed))
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), String> {
    writer.write_event(event).map_err(|e| e.to_string())
}

/// Points the theme's splash icon item at a drawable.
pub struct ThemeIconPatch {
    path: PathBuf,
    item_name: &'static str,
    value: &'static str,
}

impl ThemeIconPatch {
    pub fn new(path: PathBuf, item_name: &'static str, value: &'static str) -> Self {
        Self {
            path,
            item_name,
            value,
        }
    }
}

impl ManifestPatch for ThemeIconPatch {
    fn label(&self) -> &str {
        "theme"
    }

    fn apply(&self) -> Result<PatchOutcome, PatchError> {
        let raw = read_document(&self.path)?;
        let (updated, changed) =
            rewrite_theme_item(&raw, self.item_name, self.value).map_err(|message| {
                PatchError::Xml {
                    path: self.path.clone(),
                    message,
                }
            })?;
        if changed == 0 {
            return Err(PatchError::Shape {
                path: self.path.clone(),
                message: format!("no <item name=\"{}\">", self.item_name),
            });
        }
        write_document(&self.path, &updated)?;
        Ok(PatchOutcome::Updated(self.path.clone()))
    }
}
