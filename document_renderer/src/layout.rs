use anyhow::anyhow;
use entities::contacts::Contact;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};
use serde_json::Value;

const PAGE_WIDTH: Mm = Mm(210.0);
const PAGE_HEIGHT: Mm = Mm(297.0);
const MARGIN: f32 = 20.0;
const LINE_HEIGHT: f32 = 7.0;
const TITLE_SIZE: f32 = 18.0;
const BODY_SIZE: f32 = 11.0;
const WRAP_AT: usize = 90;

pub(crate) fn render(contact: &Contact) -> anyhow::Result<Vec<u8>> {
    let title = format!("Contact {}", contact.name);
    let (doc, page, layer) = PdfDocument::new(
        title.as_str(),
        PAGE_WIDTH,
        PAGE_HEIGHT,
        "Layer 1",
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|err| anyhow!("Failed to load font: {err:?}"))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|err| anyhow!("Failed to load font: {err:?}"))?;

    let mut cursor = Cursor {
        layer: doc.get_page(page).get_layer(layer),
        y: PAGE_HEIGHT.0 - MARGIN,
    };

    cursor.write("Contact Submission", TITLE_SIZE, &bold);
    cursor.y -= LINE_HEIGHT;

    for (label, value) in fields(contact) {
        let lines = wrap(&value, WRAP_AT);
        for (index, line) in lines.iter().enumerate() {
            if cursor.y < MARGIN {
                let (page, layer) = doc.add_page(PAGE_WIDTH, PAGE_HEIGHT, "Layer 1");
                cursor = Cursor {
                    layer: doc.get_page(page).get_layer(layer),
                    y: PAGE_HEIGHT.0 - MARGIN,
                };
            }
            if index == 0 {
                cursor.write_labelled(&label, line, &bold, &regular);
            } else {
                cursor.write(line, BODY_SIZE, &regular);
            }
        }
    }

    doc.save_to_bytes()
        .map_err(|err| anyhow!("Failed to serialize PDF: {err:?}"))
}

struct Cursor {
    layer: PdfLayerReference,
    y: f32,
}

impl Cursor {
    fn write(&mut self, text: &str, size: f32, font: &IndirectFontRef) {
        self.layer
            .use_text(text, size, Mm(MARGIN), Mm(self.y), font);
        self.y -= LINE_HEIGHT;
    }

    fn write_labelled(
        &mut self,
        label: &str,
        text: &str,
        bold: &IndirectFontRef,
        regular: &IndirectFontRef,
    ) {
        self.layer
            .use_text(format!("{label}:"), BODY_SIZE, Mm(MARGIN), Mm(self.y), bold);
        self.layer
            .use_text(text, BODY_SIZE, Mm(MARGIN + 35.0), Mm(self.y), regular);
        self.y -= LINE_HEIGHT;
    }
}

fn fields(contact: &Contact) -> Vec<(String, String)> {
    let mut fields = vec![
        ("Name".to_string(), contact.name.clone()),
        (
            "Submitted".to_string(),
            contact.created_at.format("%d/%m/%Y %H:%M UTC").to_string(),
        ),
        ("Reference".to_string(), contact.id.to_string()),
    ];
    fields.extend(contact.details.iter().map(|(key, value)| {
        let value = match value {
            Value::String(text) => text.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        };
        (capitalize(key), value)
    }));
    fields
}

fn capitalize(key: &str) -> String {
    let mut characters = key.chars();
    match characters.next() {
        Some(first) => first.to_uppercase().chain(characters).collect(),
        None => String::new(),
    }
}

/// Greedy word wrap. Words longer than `width` are split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = vec![];
    for paragraph in text.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > width {
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                }
                lines.push(word.drain(..width).collect());
            }
            let word: String = word.into_iter().collect();
            if word.is_empty() {
                continue;
            }
            if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > width {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(&word);
        }
        lines.push(line);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
