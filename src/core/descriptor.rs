use crate::utils::error::Result;
use quick_xml::events::Event;
use quick_xml::Reader;

/// The identifying fields of a Maven descriptor after the parent fallback has
/// been applied. Fields stay `None` when neither the root nor an applicable
/// `<parent>` block declares them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DescriptorFields {
    pub group: Option<String>,
    pub artifact: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    RootGroup,
    RootArtifact,
    RootVersion,
    ParentGroup,
    ParentVersion,
}

fn slot_for(stack: &[String], name: &str) -> Option<Slot> {
    if stack.len() == 1 {
        match name {
            "groupId" => Some(Slot::RootGroup),
            "artifactId" => Some(Slot::RootArtifact),
            "version" => Some(Slot::RootVersion),
            _ => None,
        }
    } else if stack.len() == 2 && stack[1] == "parent" {
        // artifactId is deliberately absent: it is never inherited.
        match name {
            "groupId" => Some(Slot::ParentGroup),
            "version" => Some(Slot::ParentVersion),
            _ => None,
        }
    } else {
        None
    }
}

#[derive(Debug, Default)]
struct ScannedFields {
    root_group: Option<String>,
    root_artifact: Option<String>,
    root_version: Option<String>,
    parent_group: Option<String>,
    parent_version: Option<String>,
}

impl ScannedFields {
    fn set(&mut self, slot: Slot, text: String) {
        match slot {
            Slot::RootGroup => self.root_group = Some(text),
            Slot::RootArtifact => self.root_artifact = Some(text),
            Slot::RootVersion => self.root_version = Some(text),
            Slot::ParentGroup => self.parent_group = Some(text),
            Slot::ParentVersion => self.parent_version = Some(text),
        }
    }
}

/// Reads `groupId`, `artifactId` and `version` from the direct children of
/// the document root. `groupId` and `version` fall back to the `<parent>`
/// block when the root leaves them unset; duplicates resolve last-seen-wins.
/// Malformed XML fails the whole parse for this descriptor.
pub fn parse_descriptor(bytes: &[u8]) -> Result<DescriptorFields> {
    let mut reader = Reader::from_reader(bytes);
    let mut buf = Vec::new();

    let mut stack: Vec<String> = Vec::new();
    // (slot, accumulated text, stack depth of the captured element)
    let mut capture: Option<(Slot, String, usize)> = None;
    let mut fields = ScannedFields::default();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                if capture.is_none() {
                    if let Some(slot) = slot_for(&stack, &name) {
                        capture = Some((slot, String::new(), stack.len() + 1));
                    }
                }
                stack.push(name);
            }
            Event::Empty(e) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                if capture.is_none() {
                    if let Some(slot) = slot_for(&stack, &name) {
                        fields.set(slot, String::new());
                    }
                }
            }
            Event::End(_) => {
                let closes_capture =
                    matches!(&capture, Some((_, _, depth)) if stack.len() == *depth);
                if closes_capture {
                    if let Some((slot, text, _)) = capture.take() {
                        fields.set(slot, text);
                    }
                }
                stack.pop();
            }
            Event::Text(t) => {
                if let Some((_, text, _)) = capture.as_mut() {
                    text.push_str(&t.unescape()?);
                }
            }
            Event::CData(t) => {
                if let Some((_, text, _)) = capture.as_mut() {
                    text.push_str(&String::from_utf8_lossy(&t));
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(DescriptorFields {
        group: fields.root_group.or(fields.parent_group),
        artifact: fields.root_artifact,
        version: fields.root_version.or(fields.parent_version),
    })
}
