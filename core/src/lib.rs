pub mod markup;
pub mod preview;
pub mod share;
pub mod toast;

pub use markup::{
    FieldId, OutputId, SocialLink, BIO_PLACEHOLDER, COPY_BUTTON_ID, CUSTOM_LINK_DEFAULT_LABEL,
    NAME_PLACEHOLDER, PUBLIC_LINK_ID, TOAST_ID,
};
pub use preview::{
    js_trim, project_custom_label, project_link, project_text, synchronize, LinkState,
    PreviewSurface,
};
pub use share::{
    copy_share_link, copy_success_message, share_url, Clipboard, ClipboardError, CopyOutcome,
    Notify, COPY_FAILURE_MESSAGE,
};
pub use toast::{ToastPhase, TOAST_BASE_STYLE, TOAST_HIDE_MS};
