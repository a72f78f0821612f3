use profile_preview_core::TOAST_HIDE_MS;

const TOAST_HIDE_MS_KEY: &str = "profile_preview.debug.toast_ms";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PageConfig {
    pub(crate) toast_hide_ms: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            toast_hide_ms: TOAST_HIDE_MS,
        }
    }
}

pub(crate) fn load_page_config() -> PageConfig {
    let defaults = PageConfig::default();
    PageConfig {
        toast_hide_ms: read_storage_u32(TOAST_HIDE_MS_KEY).unwrap_or(defaults.toast_hide_ms),
    }
}

fn read_storage_u32(key: &str) -> Option<u32> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let raw = storage.get_item(key).ok()??;
    parse_u32_setting(&raw)
}

fn parse_u32_setting(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<u32>().ok()
}
