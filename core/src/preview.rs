use crate::markup::{
    FieldId, OutputId, SocialLink, BIO_PLACEHOLDER, CUSTOM_LINK_DEFAULT_LABEL, NAME_PLACEHOLDER,
};

/// Read/write access to the form and its preview panel.
///
/// Lookups return `None`/`false` for elements missing from the page, and the
/// setters are no-ops for them, so a partial page never aborts a pass.
pub trait PreviewSurface {
    fn field_value(&self, field: FieldId) -> Option<String>;
    fn has_output(&self, output: OutputId) -> bool;
    fn set_text(&mut self, output: OutputId, text: &str);
    fn set_visible(&mut self, output: OutputId, visible: bool);
    fn set_href(&mut self, output: OutputId, href: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkState {
    Hidden,
    Visible { href: String },
}

/// Trims the same characters a browser's `String.prototype.trim` does:
/// U+FEFF counts as whitespace, U+0085 does not.
pub fn js_trim(raw: &str) -> &str {
    raw.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}')
}

pub fn project_text(raw: &str, placeholder: &str) -> String {
    let trimmed = js_trim(raw);
    if trimmed.is_empty() {
        placeholder.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn project_link(raw: &str) -> LinkState {
    let trimmed = js_trim(raw);
    if trimmed.is_empty() {
        LinkState::Hidden
    } else {
        LinkState::Visible {
            href: trimmed.to_string(),
        }
    }
}

pub fn project_custom_label(raw: &str) -> String {
    project_text(raw, CUSTOM_LINK_DEFAULT_LABEL)
}

/// Recomputes every projection from the current field values.
pub fn synchronize<S: PreviewSurface + ?Sized>(surface: &mut S) {
    sync_text(surface, FieldId::Name, OutputId::PreviewName, NAME_PLACEHOLDER);
    sync_text(surface, FieldId::Bio, OutputId::PreviewBio, BIO_PLACEHOLDER);

    for link in SocialLink::ALL {
        let Some(raw) = surface.field_value(link.field()) else {
            continue;
        };
        apply_link(surface, link.output(), &project_link(&raw));
    }

    sync_custom_link(surface);
}

fn sync_text<S: PreviewSurface + ?Sized>(
    surface: &mut S,
    field: FieldId,
    output: OutputId,
    placeholder: &str,
) {
    if !surface.has_output(output) {
        return;
    }
    let Some(raw) = surface.field_value(field) else {
        return;
    };
    surface.set_text(output, &project_text(&raw, placeholder));
}

fn sync_custom_link<S: PreviewSurface + ?Sized>(surface: &mut S) {
    if !surface.has_output(OutputId::LinkCustom) {
        return;
    }
    let Some(raw_url) = surface.field_value(FieldId::CustomUrl) else {
        return;
    };
    let state = project_link(&raw_url);
    apply_link(surface, OutputId::LinkCustom, &state);
    // label only follows the input while the link is shown
    if matches!(state, LinkState::Visible { .. }) {
        let raw_label = surface.field_value(FieldId::CustomLabel).unwrap_or_default();
        surface.set_text(OutputId::LinkCustomLabel, &project_custom_label(&raw_label));
    }
}

fn apply_link<S: PreviewSurface + ?Sized>(surface: &mut S, output: OutputId, state: &LinkState) {
    match state {
        LinkState::Visible { href } => {
            surface.set_visible(output, true);
            surface.set_href(output, href);
        }
        LinkState::Hidden => surface.set_visible(output, false),
    }
}
