//! Page templates with named slots.
//!
//! A slot is written `{{__name__}}` in the template source. Slots are filled
//! in the order the template declares them, each exactly once, and values are
//! never scanned for further slots.

use crate::app::{ReaderError, Result};

#[derive(Debug, Clone, Copy)]
pub struct Template {
    source: &'static str,
    slots: &'static [&'static str],
}

impl Template {
    pub const fn new(source: &'static str, slots: &'static [&'static str]) -> Self {
        Self { source, slots }
    }

    pub fn begin(&self) -> Rendering {
        Rendering {
            template: *self,
            values: Vec::with_capacity(self.slots.len()),
        }
    }
}

/// A template being filled in.
#[derive(Debug)]
pub struct Rendering {
    template: Template,
    values: Vec<String>,
}

impl Rendering {
    pub fn fill(mut self, slot: &str, value: impl Into<String>) -> Result<Self> {
        let expected = self.template.slots.get(self.values.len()).ok_or_else(|| {
            ReaderError::Template(format!("slot `{}` filled after all slots were filled", slot))
        })?;

        if *expected != slot {
            return Err(ReaderError::Template(format!(
                "slot `{}` filled where `{}` was expected",
                slot, expected
            )));
        }

        self.values.push(value.into());
        Ok(self)
    }

    pub fn finish(self) -> Result<String> {
        let Template { source, slots } = self.template;

        if let Some(missing) = slots.get(self.values.len()) {
            return Err(ReaderError::Template(format!("slot `{}` was never filled", missing)));
        }

        let mut positions = Vec::with_capacity(slots.len());
        for (slot, value) in slots.iter().zip(&self.values) {
            let marker = marker(slot);
            let at = source.find(&marker).ok_or_else(|| {
                ReaderError::Template(format!("slot `{}` does not appear in the template", slot))
            })?;
            positions.push((at, marker.len(), value));
        }
        positions.sort_by_key(|(at, _, _)| *at);

        let mut html = String::with_capacity(
            source.len() + self.values.iter().map(String::len).sum::<usize>(),
        );
        let mut cursor = 0;
        for (at, len, value) in positions {
            html.push_str(&source[cursor..at]);
            html.push_str(value);
            cursor = at + len;
        }
        html.push_str(&source[cursor..]);

        Ok(html)
    }
}

fn marker(slot: &str) -> String {
    format!("{{{{__{}__}}}}", slot)
}
