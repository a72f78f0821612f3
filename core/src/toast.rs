pub const TOAST_HIDE_MS: u32 = 2_500;

/// Inline style applied once, when the toast element is created.
pub const TOAST_BASE_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("top", "20px"),
    ("right", "20px"),
    ("padding", "10px 18px"),
    ("background", "linear-gradient(135deg,#6366f1,#ec4899)"),
    ("color", "#fff"),
    ("font-size", "0.9rem"),
    ("border-radius", "12px"),
    ("box-shadow", "0 8px 24px rgba(0,0,0,0.3)"),
    ("opacity", "0"),
    ("transition", "opacity 0.3s ease, transform 0.3s ease"),
    ("z-index", "9999"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Shown,
    Hidden,
}

impl ToastPhase {
    pub fn style(self) -> &'static [(&'static str, &'static str)] {
        match self {
            ToastPhase::Shown => &[("opacity", "1"), ("transform", "translateY(0)")],
            ToastPhase::Hidden => &[("opacity", "0"), ("transform", "translateY(-10px)")],
        }
    }
}
